use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandingError {
    #[error("carousel needs at least one slide")]
    EmptySlides,
    #[error("slide {index} out of range (have {len})")]
    SlideOutOfRange { index: usize, len: usize },
    #[error("faq {index} out of range (have {len})")]
    FaqOutOfRange { index: usize, len: usize },
    #[error("video slot {0} out of range")]
    VideoSlotOutOfRange(usize),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}
