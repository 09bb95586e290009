//! Validated analysis input

use crate::constants::EMPTY_INPUT_WARNING;

/// Reasons user text is not accepted for scoring
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{}", EMPTY_INPUT_WARNING)]
    Empty,
}

/// Raw user text that is known to contain something other than whitespace.
///
/// The text is kept exactly as typed; trimming is only used for the check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput(String);

impl AnalysisInput {
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, for logging without leaking the text itself
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<&str> for AnalysisInput {
    type Error = InputError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}
