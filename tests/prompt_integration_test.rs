//! Question engine driven end to end through the scripted provider

use devconf::config::{Question, ValueType};
use devconf::error::Error;
use devconf::i18n::{keys, Localizer, Messages};
use devconf::prompt::{PromptHandler, ScriptedPrompter};
use serde_json::Value;
use test_log::test;

/// Localizer with a different label pair for the yes/no choice
struct GermanLabels;

impl Localizer for GermanLabels {
    fn localize_with(&self, key: &str, _params: &Value) -> String {
        match key {
            keys::CONFIG_NO => "Nein".to_string(),
            keys::CONFIG_YES => "Ja".to_string(),
            other => other.to_string(),
        }
    }
}

#[test]
fn integer_question_reprompts_until_in_range() {
    let messages = Messages::new();
    let prompter =
        ScriptedPrompter::new().with_text("0").with_text("11").with_text("").with_text("5");
    let handler = PromptHandler::new(prompter, &messages);
    let question =
        Question::new("Port", ValueType::Int).required(true).with_bounds(Some(1), Some(10));

    let answer = handler.ask_value(&question).unwrap();

    assert_eq!(answer, "5");
    assert_eq!(
        handler.provider().rejections(),
        vec![
            "The value must be at least 1.",
            "The value must be at most 10.",
            "A value is required.",
        ]
    );
    assert!(handler.provider().is_exhausted());
}

#[test]
fn optional_float_accepts_empty_answer() {
    let messages = Messages::new();
    let handler = PromptHandler::new(ScriptedPrompter::new().with_text(""), &messages);

    let answer = handler.ask_value(&Question::new("Power", ValueType::Float)).unwrap();

    assert_eq!(answer, "");
    assert!(handler.provider().rejections().is_empty());
}

#[test]
fn default_is_taken_on_empty_answer() {
    let messages = Messages::new();
    let handler = PromptHandler::new(ScriptedPrompter::new().with_text(""), &messages);
    let question = Question::new("Port", ValueType::Int).with_default(502_i64);

    assert_eq!(handler.ask_value(&question).unwrap(), "502");
}

#[test]
fn masked_question_has_no_default() {
    let messages = Messages::new();
    let prompter = ScriptedPrompter::new().with_text("").with_text("s3cret");
    let handler = PromptHandler::new(prompter, &messages);
    let question = Question::new("Password", ValueType::String)
        .with_default("changeme")
        .masked(true)
        .required(true);

    assert_eq!(handler.ask_value(&question).unwrap(), "s3cret");
    assert_eq!(handler.provider().rejections(), vec!["A value is required."]);
}

#[test]
fn bool_answers_follow_option_position() {
    let messages = GermanLabels;
    let prompter = ScriptedPrompter::new().with_choice("Nein").with_choice("Ja");
    let handler = PromptHandler::new(prompter, &messages);
    let question = Question::new("Enabled", ValueType::Bool).with_help("Is it enabled?");

    assert_eq!(handler.ask_value(&question).unwrap(), "false");
    assert_eq!(handler.ask_value(&question).unwrap(), "true");
    assert_eq!(handler.provider().transcript(), vec!["Is it enabled?", "Is it enabled?"]);
}

#[test]
fn charge_mode_none_only_when_not_excluded() {
    let messages = Messages::new();
    let prompter = ScriptedPrompter::new()
        .with_choice("No default")
        .with_choice("Minimum + PV")
        .with_choice("No default");
    let handler = PromptHandler::new(prompter, &messages);

    let open = Question::new("Mode", ValueType::ChargeModes);
    assert_eq!(handler.ask_value(&open).unwrap(), "");

    let strict = Question::new("Mode", ValueType::ChargeModes).exclude_none(true);
    assert_eq!(handler.ask_value(&strict).unwrap(), "minpv");
    assert!(matches!(
        handler.ask_value(&strict),
        Err(Error::SelectionMismatch { selection }) if selection == "No default"
    ));
}

#[test]
fn choice_returns_label_and_position() {
    let messages = Messages::new();
    let handler = PromptHandler::new(ScriptedPrompter::new().with_choice("B"), &messages);
    let choices = vec!["A".to_string(), "B".to_string(), "C".to_string()];

    let (index, label) = handler.ask_choice("Pick one", &choices).unwrap();

    assert_eq!((index, label.as_str()), (1, "B"));
}

#[test]
fn used_values_are_rejected_for_every_type() {
    let messages = Messages::new();
    let prompter = ScriptedPrompter::new().with_text("7").with_text("8");
    let handler = PromptHandler::new(prompter, &messages);
    let question =
        Question::new("Slot", ValueType::Int).with_invalid_values(vec!["7".to_string()]);

    assert_eq!(handler.ask_value(&question).unwrap(), "8");
    assert_eq!(handler.provider().rejections(), vec!["This value is already used."]);
}

#[test]
fn help_lists_marker_and_example() {
    let messages = Messages::new();
    let handler = PromptHandler::new(ScriptedPrompter::new(), &messages);

    let question = Question::new("Host", ValueType::String)
        .with_help("IP address")
        .with_example("192.0.2.2")
        .required(true);
    assert_eq!(handler.compose_help(&question), "IP address (required) (example: 192.0.2.2)");

    let bare = Question::new("Host", ValueType::String);
    assert_eq!(handler.compose_help(&bare), "(optional)");
}
