//! Cyclic slide index for the testimonial carousel.

use std::num::NonZeroUsize;

use crate::error::{AuthScreenError, Result};

/// Which of `slide_count` entries is active.
///
/// The controller only tracks an index; it never reads the entries. An empty
/// carousel cannot be constructed, so `current` is always a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slide_count: NonZeroUsize,
    current: usize,
}

impl Carousel {
    pub fn new(slide_count: usize) -> Result<Self> {
        let slide_count = NonZeroUsize::new(slide_count).ok_or(AuthScreenError::EmptyCarousel)?;
        Ok(Self {
            slide_count,
            current: 0,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Move to the next slide, wrapping to 0 after the last. Returns the new
    /// index.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.slide_count.get();
        self.current
    }

    /// Move to the previous slide, wrapping to the last after 0.
    pub fn retreat(&mut self) -> usize {
        let n = self.slide_count.get();
        self.current = (self.current + n - 1) % n;
        self.current
    }

    /// Jump straight to `index`. Out-of-range indices leave the state alone.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.slide_count.get() {
            return Err(AuthScreenError::CarouselIndex {
                index,
                len: self.slide_count.get(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
