use super::error::LandingError;

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub title: String,
    pub description: String,
    pub is_open: bool,
}

impl Faq {
    pub fn closed(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_open: false,
        }
    }
}

/// Accordion where every entry opens and closes on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqList {
    entries: Vec<Faq>,
}

impl FaqList {
    pub fn new(entries: Vec<Faq>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Faq] {
        &self.entries
    }

    pub fn toggle(&mut self, index: usize) -> Result<(), LandingError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(LandingError::FaqOutOfRange { index, len })?;
        entry.is_open = !entry.is_open;
        Ok(())
    }
}
