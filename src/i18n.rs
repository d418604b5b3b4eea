//! Localized text lookup for every operator-facing string
//!
//! Prompt labels, choice options and error messages are looked up by key through the
//! [`Localizer`] trait. [`Messages`] is the built-in English table; parameters are
//! substituted with MiniJinja, e.g. `Value must be at least {{ Min }}.`

use indexmap::IndexMap;
use minijinja::Environment;
use serde_json::Value;

/// Message keys understood by [`Messages`].
pub mod keys {
    pub const CANCEL: &str = "Cancel";
    pub const INPUT_ERROR: &str = "InputError";
    pub const ITEM_NOT_PRESENT: &str = "ItemNotPresent";
    pub const CHOOSE: &str = "Choose";
    pub const CONFIG_NO: &str = "Config_No";
    pub const CONFIG_YES: &str = "Config_Yes";
    pub const VALUE_ERROR_USED: &str = "ValueError_Used";
    pub const VALUE_ERROR_EMPTY: &str = "ValueError_Empty";
    pub const VALUE_ERROR_FLOAT: &str = "ValueError_Float";
    pub const VALUE_ERROR_NUMBER: &str = "ValueError_Number";
    pub const VALUE_ERROR_LOWER_THAN_MIN: &str = "ValueError_NumberLowerThanMin";
    pub const VALUE_ERROR_BIGGER_THAN_MAX: &str = "ValueError_NumberBiggerThanMax";
    pub const VALUE_REQUIRED: &str = "Value_Required";
    pub const VALUE_OPTIONAL: &str = "Value_Optional";
    pub const VALUE_SAMPLE: &str = "Value_Sample";
    pub const CHARGE_MODE_QUESTION: &str = "ChargeMode_Question";
    pub const CHARGE_MODE_OFF: &str = "ChargeModeOff";
    pub const CHARGE_MODE_NOW: &str = "ChargeModeNow";
    pub const CHARGE_MODE_MIN_PV: &str = "ChargeModeMinPV";
    pub const CHARGE_MODE_PV: &str = "ChargeModePV";
    pub const CHARGE_MODE_NONE: &str = "ChargeModeNone";
    pub const TESTING_DEVICE_REPEAT_STEP: &str = "TestingDevice_RepeatStep";
    pub const ADD_DEVICE: &str = "AddDevice";
    pub const DEVICE_NAME: &str = "DeviceName";
    pub const RENDER_ERROR: &str = "RenderError";
    pub const DONE: &str = "Done";
}

const ENGLISH: &[(&str, &str)] = &[
    (keys::CANCEL, "Cancelled."),
    (keys::INPUT_ERROR, "Input error:"),
    (keys::ITEM_NOT_PRESENT, "My device is not in this list"),
    (keys::CHOOSE, "Choose"),
    (keys::CONFIG_NO, "No"),
    (keys::CONFIG_YES, "Yes"),
    (keys::VALUE_ERROR_USED, "This value is already used."),
    (keys::VALUE_ERROR_EMPTY, "A value is required."),
    (keys::VALUE_ERROR_FLOAT, "Please enter a decimal number."),
    (keys::VALUE_ERROR_NUMBER, "Please enter a whole number."),
    (keys::VALUE_ERROR_LOWER_THAN_MIN, "The value must be at least {{ Min }}."),
    (keys::VALUE_ERROR_BIGGER_THAN_MAX, "The value must be at most {{ Max }}."),
    (keys::VALUE_REQUIRED, "required"),
    (keys::VALUE_OPTIONAL, "optional"),
    (keys::VALUE_SAMPLE, "example"),
    (keys::CHARGE_MODE_QUESTION, "Default charge mode"),
    (keys::CHARGE_MODE_OFF, "Off"),
    (keys::CHARGE_MODE_NOW, "Fast charging"),
    (keys::CHARGE_MODE_MIN_PV, "Minimum + PV"),
    (keys::CHARGE_MODE_PV, "PV only"),
    (keys::CHARGE_MODE_NONE, "No default"),
    (
        keys::TESTING_DEVICE_REPEAT_STEP,
        "The device could not be configured. Do you want to try again?",
    ),
    (keys::ADD_DEVICE, "Do you want to add {{ article }} {{ title }}?"),
    (keys::DEVICE_NAME, "Name of the device"),
    (keys::RENDER_ERROR, "The device configuration could not be created:"),
    (keys::DONE, "Configuration written to {{ output }}."),
];

/// Resolves message keys into operator-facing text.
pub trait Localizer {
    /// Looks up `key` and substitutes `params` (a JSON object) into the message.
    fn localize_with(&self, key: &str, params: &Value) -> String;

    fn localize(&self, key: &str) -> String {
        self.localize_with(key, &Value::Null)
    }
}

/// Built-in English message table.
pub struct Messages {
    env: Environment<'static>,
    table: IndexMap<&'static str, &'static str>,
}

impl Messages {
    pub fn new() -> Self {
        Self { env: Environment::new(), table: ENGLISH.iter().copied().collect() }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer for Messages {
    fn localize_with(&self, key: &str, params: &Value) -> String {
        let Some(message) = self.table.get(key) else {
            log::debug!("No message for key '{key}'");
            return key.to_string();
        };

        if !message.contains("{{") {
            return message.to_string();
        }

        self.env.render_str(message, params).unwrap_or_else(|e| {
            log::warn!("Failed to render message '{key}': {e}");
            message.to_string()
        })
    }
}
