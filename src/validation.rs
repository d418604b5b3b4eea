//! Answer validation
//!
//! [`validate`] checks a candidate answer against the constraints of a [`Question`].
//! The rules are applied in order and the first failing rule decides the outcome.

use crate::{
    config::{Question, ValueType},
    i18n::{keys, Localizer},
};
use serde_json::json;

/// Why a candidate answer was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The answer is one of the question's invalid values
    ValueAlreadyUsed,
    /// The question is required and the answer is empty
    ValueMissing,
    InvalidFloat,
    InvalidInteger,
    BelowMinimum { min: i64 },
    AboveMaximum { max: i64 },
}

impl ValidationError {
    /// Operator-facing message for this rejection
    pub fn localize(&self, messages: &dyn Localizer) -> String {
        match self {
            ValidationError::ValueAlreadyUsed => messages.localize(keys::VALUE_ERROR_USED),
            ValidationError::ValueMissing => messages.localize(keys::VALUE_ERROR_EMPTY),
            ValidationError::InvalidFloat => messages.localize(keys::VALUE_ERROR_FLOAT),
            ValidationError::InvalidInteger => messages.localize(keys::VALUE_ERROR_NUMBER),
            ValidationError::BelowMinimum { min } => messages
                .localize_with(keys::VALUE_ERROR_LOWER_THAN_MIN, &json!({ "Min": min })),
            ValidationError::AboveMaximum { max } => messages
                .localize_with(keys::VALUE_ERROR_BIGGER_THAN_MAX, &json!({ "Max": max })),
        }
    }
}

/// Validate a candidate answer against a question's constraints.
///
/// An empty answer to an optional question is accepted without any type check, so
/// optional numeric values can be left unset.
pub fn validate(candidate: &str, question: &Question) -> Result<(), ValidationError> {
    if question.invalid_values.iter().any(|value| value == candidate) {
        return Err(ValidationError::ValueAlreadyUsed);
    }

    if candidate.is_empty() {
        return if question.required { Err(ValidationError::ValueMissing) } else { Ok(()) };
    }

    match question.value_type() {
        ValueType::Float => {
            candidate.parse::<f64>().map_err(|_| ValidationError::InvalidFloat)?;
        }
        ValueType::Int => {
            let value =
                candidate.parse::<i64>().map_err(|_| ValidationError::InvalidInteger)?;
            if let Some(min) = question.min.filter(|min| value < *min) {
                return Err(ValidationError::BelowMinimum { min });
            }
            if let Some(max) = question.max.filter(|max| value > *max) {
                return Err(ValidationError::AboveMaximum { max });
            }
        }
        ValueType::Bool | ValueType::ChargeModes | ValueType::String => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Messages;

    fn bounded_int(min: i64, max: i64) -> Question {
        Question::new("Value", ValueType::Int).required(true).with_raw_bounds(min, max)
    }

    #[test]
    fn test_required_bounded_integer_scenario() {
        let question = bounded_int(1, 10);
        assert_eq!(validate("0", &question), Err(ValidationError::BelowMinimum { min: 1 }));
        assert_eq!(validate("11", &question), Err(ValidationError::AboveMaximum { max: 10 }));
        assert_eq!(validate("", &question), Err(ValidationError::ValueMissing));
        assert_eq!(validate("5", &question), Ok(()));
    }

    #[test]
    fn test_integer_bounds_accept_exactly_the_range() {
        for (min, max) in [(1, 10), (-5, -1), (-3, 3), (7, 7)] {
            let question = bounded_int(min, max);
            for value in -20..=20 {
                let accepted = validate(&value.to_string(), &question).is_ok();
                assert_eq!(accepted, (min..=max).contains(&value), "{value} in {min}..={max}");
            }
        }
    }

    #[test]
    fn test_zero_bounds_leave_integer_unbounded() {
        let question = bounded_int(0, 0);
        assert!(validate(&i64::MIN.to_string(), &question).is_ok());
        assert!(validate(&i64::MAX.to_string(), &question).is_ok());
    }

    #[test]
    fn test_explicit_zero_minimum_is_enforced() {
        let question = Question::new("Offset", ValueType::Int).with_bounds(Some(0), None);
        assert_eq!(validate("-1", &question), Err(ValidationError::BelowMinimum { min: 0 }));
        assert!(validate("0", &question).is_ok());
    }

    #[test]
    fn test_invalid_integers() {
        let question = Question::new("Value", ValueType::Int);
        for candidate in ["abc", "1.5", "0x10", "1e3", " 1", "99999999999999999999"] {
            assert_eq!(validate(candidate, &question), Err(ValidationError::InvalidInteger));
        }
        assert!(validate("+5", &question).is_ok());
        assert!(validate("-5", &question).is_ok());
    }

    #[test]
    fn test_valid_floats_are_accepted() {
        let question = Question::new("Value", ValueType::Float).required(true);
        for candidate in ["0", "1.5", "-2.25", "1e-3", "3.", ".5", "42"] {
            assert!(validate(candidate, &question).is_ok(), "{candidate}");
        }
        for candidate in ["abc", "1,5", "--1"] {
            assert_eq!(validate(candidate, &question), Err(ValidationError::InvalidFloat));
        }
    }

    #[test]
    fn test_optional_empty_float_skips_parsing() {
        let question = Question::new("Value", ValueType::Float);
        assert_eq!(validate("", &question), Ok(()));
    }

    #[test]
    fn test_invalid_values_always_rejected() {
        let used = vec!["grid1".to_string(), "".to_string()];
        for value_type in [ValueType::String, ValueType::Int, ValueType::Float] {
            for required in [false, true] {
                let question = Question::new("Name", value_type)
                    .required(required)
                    .with_invalid_values(used.clone());
                for candidate in &used {
                    assert_eq!(
                        validate(candidate, &question),
                        Err(ValidationError::ValueAlreadyUsed)
                    );
                }
            }
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let question = bounded_int(1, 10);
        let first = validate("5", &question);
        assert_eq!(first, Ok(()));
        assert_eq!(validate("5", &question), first);
    }

    #[test]
    fn test_string_accepts_anything_not_empty() {
        let question = Question::new("Host", ValueType::String).required(true);
        assert!(validate("localhost", &question).is_ok());
        assert!(validate("1.5", &question).is_ok());
    }

    #[test]
    fn test_localized_messages() {
        let messages = Messages::new();
        assert_eq!(
            ValidationError::BelowMinimum { min: 3 }.localize(&messages),
            "The value must be at least 3."
        );
        assert_eq!(
            ValidationError::AboveMaximum { max: 9 }.localize(&messages),
            "The value must be at most 9."
        );
        assert_eq!(ValidationError::ValueMissing.localize(&messages), "A value is required.");
    }
}
