//! Pure interfaces for prompting without external dependencies
//!
//! This module defines abstract interfaces for the input modalities the wizard uses.
//! These interfaces are independent of any specific UI library implementation.
//!
//! Every method returns [`Error::Interrupted`](crate::error::Error::Interrupted) when
//! the operator aborts; any other error is a transport failure.

use crate::error::Result;

/// Validator hook run on every text candidate before it is accepted.
///
/// Returns the operator-facing rejection message on failure.
pub type TextValidator<'a> = dyn Fn(&str) -> std::result::Result<(), String> + 'a;

/// Configuration for text input prompts
#[derive(Debug, Clone, PartialEq)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub help: String,
    pub default: Option<String>,
    /// Conceal the input while typing
    pub masked: bool,
}

/// Configuration for single choice selection
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validator: &TextValidator<'_>,
    ) -> Result<String>;
}

/// Abstract interface for single choice selection, answering with the chosen label
pub trait SingleChoicePrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<String>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + SingleChoicePrompter + ConfirmationPrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + SingleChoicePrompter + ConfirmationPrompter
{}
