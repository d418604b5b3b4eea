//! Prompt provider answering from prepared scripts
//!
//! Answers are consumed in order per modality, which lets tests drive whole wizard
//! sessions without a terminal. An empty text answer takes the prompt's default, like
//! pressing enter in the terminal.

use super::interface::*;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Prompt provider that replays prepared answers
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    text_answers: RefCell<VecDeque<String>>,
    choice_answers: RefCell<VecDeque<String>>,
    confirmation_answers: RefCell<VecDeque<bool>>,
    /// Messages produced by the validator hook for rejected text answers
    rejections: RefCell<Vec<String>>,
    /// Prompts shown, in order
    transcript: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer
    pub fn with_text(self, answer: &str) -> Self {
        self.text_answers.borrow_mut().push_back(answer.to_string());
        self
    }

    /// Queue a choice answer, given as the label to pick
    pub fn with_choice(self, label: &str) -> Self {
        self.choice_answers.borrow_mut().push_back(label.to_string());
        self
    }

    /// Queue a confirmation answer
    pub fn with_confirmation(self, answer: bool) -> Self {
        self.confirmation_answers.borrow_mut().push_back(answer);
        self
    }

    pub fn rejections(&self) -> Vec<String> {
        self.rejections.borrow().clone()
    }

    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }

    /// True once every prepared answer was consumed
    pub fn is_exhausted(&self) -> bool {
        self.text_answers.borrow().is_empty()
            && self.choice_answers.borrow().is_empty()
            && self.confirmation_answers.borrow().is_empty()
    }

    fn next<T>(&self, queue: &RefCell<VecDeque<T>>, prompt: &str) -> Result<T> {
        self.transcript.borrow_mut().push(prompt.to_string());
        queue
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::NoScriptedAnswer { prompt: prompt.to_string() })
    }
}

impl TextPrompter for ScriptedPrompter {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validator: &TextValidator<'_>,
    ) -> Result<String> {
        let mut answer = self.next(&self.text_answers, &config.prompt)?;
        if answer.is_empty() {
            answer = config.default.clone().unwrap_or_default();
        }
        if let Err(message) = validator(&answer) {
            self.rejections.borrow_mut().push(message);
        }
        log::debug!("Scripted answer for '{}': '{}'", config.prompt, answer);
        Ok(answer)
    }
}

impl SingleChoicePrompter for ScriptedPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<String> {
        let answer = self.next(&self.choice_answers, &config.prompt)?;
        log::debug!("Scripted choice for '{}': '{}'", config.prompt, answer);
        Ok(answer)
    }
}

impl ConfirmationPrompter for ScriptedPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let answer = self.next(&self.confirmation_answers, &config.prompt)?;
        log::debug!("Scripted confirmation for '{}': {}", config.prompt, answer);
        Ok(answer)
    }
}
