use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthScreenError {
    #[error("Terminal initialization failed: {0}")]
    Terminal(String),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Testimonial carousel needs at least one entry")]
    EmptyCarousel,

    #[error("Carousel index {index} out of range for {len} entries")]
    CarouselIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AuthScreenError>;
