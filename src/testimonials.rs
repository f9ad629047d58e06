use serde::{Deserialize, Serialize};

/// A quote shown in the showcase carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, author: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            role: role.into(),
        }
    }

    /// `- Author, Role` attribution line.
    pub fn attribution(&self) -> String {
        format!("- {}, {}", self.author, self.role)
    }
}

/// The corpus shipped with the screen.
pub fn builtin() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "EduClipsAI transformed my learning journey. It's like having a genius mentor available 24/7!",
            "Dr. Emily Chen",
            "AI Researcher",
        ),
        Testimonial::new(
            "The personalized learning paths are mind-blowing. I've achieved in weeks what used to take months!",
            "Mark Johnson",
            "Software Engineer",
        ),
        Testimonial::new(
            "As an educator, EduClipsAI has revolutionized how I create and deliver content. It's a game-changer!",
            "Prof. Sarah Thompson",
            "Computer Science Professor",
        ),
        Testimonial::new(
            "The AI-powered explanations make complex topics crystal clear. It's like having a superpower!",
            "Alex Rodriguez",
            "Data Scientist",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus() {
        let corpus = builtin();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus[0].author, "Dr. Emily Chen");
        assert_eq!(corpus[3].role, "Data Scientist");
    }

    #[test]
    fn test_attribution() {
        let t = Testimonial::new("q", "Mark Johnson", "Software Engineer");
        assert_eq!(t.attribution(), "- Mark Johnson, Software Engineer");
    }
}
