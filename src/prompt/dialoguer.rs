//! Dialoguer-based implementations of prompt interfaces
//!
//! This module provides concrete implementations of the prompt interfaces
//! using the dialoguer library for terminal user interaction.

use super::interface::{
    ConfirmationConfig, SingleChoiceConfig, TextPromptConfig, TextValidator,
};
use crate::{constants::FUZZY_SELECT_THRESHOLD, error::Result, interrupt};
use dialoguer::{Confirm, FuzzySelect, Input, Password, Select};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validator: &TextValidator<'_>,
    ) -> Result<String> {
        let prompt = prompt_with_help(&config.prompt, &config.help);
        if config.masked {
            self.prompt_password(&prompt, validator)
        } else {
            self.prompt_regular_text(&prompt, config.default.as_deref(), validator)
        }
    }
}

impl super::interface::SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<String> {
        let default_index = config.default_index.unwrap_or(0);

        let index = if config.choices.len() > FUZZY_SELECT_THRESHOLD {
            FuzzySelect::new()
                .with_prompt(&config.prompt)
                .items(&config.choices)
                .default(default_index)
                .interact()?
        } else {
            Select::new()
                .with_prompt(&config.prompt)
                .items(&config.choices)
                .default(default_index)
                .interact()?
        };

        Ok(config.choices[index].clone())
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}

impl DialoguerPrompter {
    /// Handle concealed input.
    ///
    /// Ctrl-C does not end a masked read; a pending interrupt is honored once the line is in.
    fn prompt_password(&self, prompt: &str, validator: &TextValidator<'_>) -> Result<String> {
        let password = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .validate_with(|input: &String| {
                if interrupt::is_pending() {
                    return Ok(());
                }
                validator(input)
            })
            .interact()?;

        interrupt::check()?;
        Ok(password)
    }

    /// Handle regular text input
    fn prompt_regular_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validator: &TextValidator<'_>,
    ) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            input = input.default(default.to_string());
        }

        Ok(input.validate_with(|input: &String| validator(input)).interact_text()?)
    }
}

fn prompt_with_help(prompt: &str, help: &str) -> String {
    if help.is_empty() {
        prompt.to_string()
    } else {
        format!("{prompt} {help}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_is_appended_to_prompt() {
        assert_eq!(prompt_with_help("Host", "(required)"), "Host (required)");
        assert_eq!(prompt_with_help("Host", ""), "Host");
    }
}
