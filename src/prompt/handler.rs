//! Question dispatch and answer collection
//!
//! [`PromptHandler`] picks the input modality for a [`Question`] from its value type,
//! builds the modality configuration and keeps asking until the answer passes
//! validation. Interrupts and transport errors from the provider are returned to the
//! caller untouched; nothing here retries them or exits the process.

use super::{
    choice::select,
    interface::{ConfirmationConfig, PromptProvider, TextPromptConfig},
};
use crate::{
    config::{ChargeMode, DeviceCategory, ElementCatalog, Question, Template, ValueType},
    constants::BOOL_ANSWERS,
    error::Result,
    i18n::{keys, Localizer},
    validation::validate,
};

/// Asks questions through a prompt provider and returns canonical answers
pub struct PromptHandler<'a, P: PromptProvider> {
    provider: P,
    messages: &'a dyn Localizer,
}

impl<'a, P: PromptProvider> PromptHandler<'a, P> {
    pub fn new(provider: P, messages: &'a dyn Localizer) -> Self {
        Self { provider, messages }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn messages(&self) -> &'a dyn Localizer {
        self.messages
    }

    /// Asks for the value of a question and returns its canonical string form
    pub fn ask_value(&self, question: &Question) -> Result<String> {
        match question.value_type() {
            ValueType::Bool => {
                let label =
                    if question.help.is_empty() { &question.label } else { &question.help };
                self.ask_bool_value(label)
            }
            ValueType::ChargeModes => self.ask_charge_mode(question.exclude_none),
            ValueType::Float | ValueType::Int | ValueType::String => {
                self.ask_text_value(question)
            }
        }
    }

    /// Lets the operator pick one of `choices`, returning its position and label
    pub fn ask_choice(&self, label: &str, choices: &[String]) -> Result<(usize, String)> {
        let (selection, index) = select(&self.provider, label, choices)?;
        Ok((index, selection))
    }

    /// Asks a yes/no question, `true` meaning yes
    pub fn ask_yes_no(&self, label: &str) -> Result<bool> {
        let config = ConfirmationConfig { prompt: label.to_string(), default: false };
        self.provider.prompt_confirmation(&config)
    }

    /// Lets the operator pick a template of `category` from the catalog.
    ///
    /// The list ends with an "item not present" entry; choosing it yields `None`.
    pub fn select_item(
        &self,
        category: DeviceCategory,
        catalog: &dyn ElementCatalog,
    ) -> Result<Option<Template>> {
        let (elements, skipped): (Vec<Template>, Vec<Template>) = catalog
            .fetch_elements(category)
            .into_iter()
            .partition(|template| !template.description.is_empty());
        for template in &skipped {
            log::debug!("Template '{}' has no description, not offered", template.template);
        }

        let mut items: Vec<String> = elements.iter().map(|t| t.description.clone()).collect();
        items.push(self.messages.localize(keys::ITEM_NOT_PRESENT));

        let text = format!(
            "{} {} {}:",
            self.messages.localize(keys::CHOOSE),
            category.article(),
            category.title()
        );
        let (index, _) = self.ask_choice(&text, &items)?;

        Ok(elements.into_iter().nth(index))
    }

    /// Asks whether a device that failed to configure should be set up again
    pub fn ask_config_failure_next_step(&self) -> Result<bool> {
        self.ask_yes_no(&self.messages.localize(keys::TESTING_DEVICE_REPEAT_STEP))
    }

    /// Help text of a free-text question: help, required marker and example
    pub fn compose_help(&self, question: &Question) -> String {
        let marker = if question.required { keys::VALUE_REQUIRED } else { keys::VALUE_OPTIONAL };
        let mut help = format!("{} ({})", question.help, self.messages.localize(marker));

        if let Some(example) = question.example() {
            help.push_str(&format!(
                " ({}: {example})",
                self.messages.localize(keys::VALUE_SAMPLE)
            ));
        }

        help.trim_start().to_string()
    }

    fn ask_bool_value(&self, label: &str) -> Result<String> {
        let choices = vec![
            self.messages.localize(keys::CONFIG_NO),
            self.messages.localize(keys::CONFIG_YES),
        ];

        let (index, _) = self.ask_choice(label, &choices)?;
        Ok(BOOL_ANSWERS[index].to_string())
    }

    fn ask_charge_mode(&self, exclude_none: bool) -> Result<String> {
        let mut tokens: Vec<&str> = ChargeMode::ALL.iter().map(ChargeMode::token).collect();
        let mut labels: Vec<String> = ChargeMode::ALL
            .iter()
            .map(|mode| self.messages.localize(mode.label_key()))
            .collect();

        if !exclude_none {
            tokens.push("");
            labels.push(self.messages.localize(keys::CHARGE_MODE_NONE));
        }

        let question = self.messages.localize(keys::CHARGE_MODE_QUESTION);
        let (index, _) = self.ask_choice(&question, &labels)?;
        Ok(tokens[index].to_string())
    }

    fn ask_text_value(&self, question: &Question) -> Result<String> {
        let config = self.create_text_config(question);
        let validator = |candidate: &str| {
            validate(candidate, question).map_err(|err| err.localize(self.messages))
        };

        loop {
            let candidate = self.provider.prompt_text(&config, &validator)?;
            match validator(&candidate) {
                Ok(()) => return Ok(candidate),
                Err(message) => log::warn!("{}: {message}", question.label),
            }
        }
    }

    fn create_text_config(&self, question: &Question) -> TextPromptConfig {
        // Concealed input has no pre-filled value
        let default =
            if question.mask { None } else { question.default.to_prompt_string() };

        TextPromptConfig {
            prompt: question.label.clone(),
            help: self.compose_help(question),
            default,
            masked: question.mask,
        }
    }
}
