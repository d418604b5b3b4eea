//! Question definition

use crate::config::types::{bound_from_raw, DefaultValue, ValueType};

/// Describes one value to collect from the operator.
///
/// The value type is fixed at construction; everything else is set with the
/// builder-style `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Prompt text
    pub label: String,
    /// Secondary explanatory text
    pub help: String,
    /// Pre-filled answer
    pub default: DefaultValue,
    /// Illustrative value appended to the help text
    pub example: Option<String>,
    /// Answers that are rejected, e.g. names already taken
    pub invalid_values: Vec<String>,
    /// Inclusive lower bound for integer questions
    pub min: Option<i64>,
    /// Inclusive upper bound for integer questions
    pub max: Option<i64>,
    /// Conceal the answer while typing
    pub mask: bool,
    /// Reject empty answers
    pub required: bool,
    /// Omit the "no default" option of charge mode questions
    pub exclude_none: bool,
    value_type: ValueType,
}

impl Question {
    pub fn new(label: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            label: label.into(),
            help: String::new(),
            default: DefaultValue::None,
            example: None,
            invalid_values: Vec::new(),
            min: None,
            max: None,
            mask: false,
            required: false,
            exclude_none: false,
            value_type,
        }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<DefaultValue>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_invalid_values(mut self, invalid_values: Vec<String>) -> Self {
        self.invalid_values = invalid_values;
        self
    }

    pub fn with_bounds(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets bounds from raw values where `0` means "no bound".
    pub fn with_raw_bounds(self, min: i64, max: i64) -> Self {
        self.with_bounds(bound_from_raw(min), bound_from_raw(max))
    }

    pub fn masked(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn exclude_none(mut self, exclude_none: bool) -> Self {
        self.exclude_none = exclude_none;
        self
    }

    /// Example value when one is present and not empty
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref().filter(|example| !example.is_empty())
    }
}
