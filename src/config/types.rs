//! Basic types and enums for configuration

use serde::{Deserialize, Deserializer};

/// Type of the value a question collects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Yes/no value, answered as `true` or `false`
    Bool,
    /// 64-bit floating point number
    Float,
    /// Base-10 signed 64-bit integer, optionally bounded
    #[serde(alias = "number")]
    Int,
    /// Default charge mode, one of the fixed mode tokens
    ChargeModes,
    /// Free-form text
    #[default]
    String,
}

/// Pre-filled answer of a question
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl DefaultValue {
    /// String form used to seed a text prompt, `None` when there is no default
    pub fn to_prompt_string(&self) -> Option<String> {
        match self {
            DefaultValue::None => None,
            DefaultValue::Str(s) => Some(s.clone()),
            DefaultValue::Int(i) => Some(i.to_string()),
            DefaultValue::Float(f) => Some(f.to_string()),
            DefaultValue::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Str(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Str(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

/// Charge modes offered by a [`ValueType::ChargeModes`] question, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeMode {
    Off,
    Now,
    MinPv,
    Pv,
}

impl ChargeMode {
    pub const ALL: [ChargeMode; 4] =
        [ChargeMode::Off, ChargeMode::Now, ChargeMode::MinPv, ChargeMode::Pv];

    /// Token written into the configuration
    pub fn token(&self) -> &'static str {
        match self {
            ChargeMode::Off => "off",
            ChargeMode::Now => "now",
            ChargeMode::MinPv => "minpv",
            ChargeMode::Pv => "pv",
        }
    }

    /// Message key of the option label
    pub fn label_key(&self) -> &'static str {
        use crate::i18n::keys;
        match self {
            ChargeMode::Off => keys::CHARGE_MODE_OFF,
            ChargeMode::Now => keys::CHARGE_MODE_NOW,
            ChargeMode::MinPv => keys::CHARGE_MODE_MIN_PV,
            ChargeMode::Pv => keys::CHARGE_MODE_PV,
        }
    }
}

/// Kind of device a catalog template configures
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum DeviceCategory {
    Charger,
    GridMeter,
    PvMeter,
    BatteryMeter,
    ChargeMeter,
    Vehicle,
}

impl DeviceCategory {
    pub const ALL: [DeviceCategory; 6] = [
        DeviceCategory::Charger,
        DeviceCategory::GridMeter,
        DeviceCategory::PvMeter,
        DeviceCategory::BatteryMeter,
        DeviceCategory::ChargeMeter,
        DeviceCategory::Vehicle,
    ];

    pub fn article(&self) -> &'static str {
        "a"
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeviceCategory::Charger => "charger",
            DeviceCategory::GridMeter => "grid meter",
            DeviceCategory::PvMeter => "PV meter",
            DeviceCategory::BatteryMeter => "battery meter",
            DeviceCategory::ChargeMeter => "charge meter",
            DeviceCategory::Vehicle => "vehicle",
        }
    }

    /// Section of the configuration document the device is written to
    pub fn section(&self) -> &'static str {
        match self {
            DeviceCategory::Charger => "chargers",
            DeviceCategory::GridMeter
            | DeviceCategory::PvMeter
            | DeviceCategory::BatteryMeter
            | DeviceCategory::ChargeMeter => "meters",
            DeviceCategory::Vehicle => "vehicles",
        }
    }

    /// Prefix of generated default device names
    pub fn default_name_prefix(&self) -> &'static str {
        match self {
            DeviceCategory::Charger => "wallbox",
            DeviceCategory::GridMeter => "grid",
            DeviceCategory::PvMeter => "pv",
            DeviceCategory::BatteryMeter => "battery",
            DeviceCategory::ChargeMeter => "charge",
            DeviceCategory::Vehicle => "car",
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Reads an integer bound where `0` (or no value) means "no bound".
pub fn deserialize_bound<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(bound_from_raw(raw.unwrap_or(0)))
}

/// Converts a raw bound to an optional one, `0` meaning unbounded.
pub fn bound_from_raw(raw: i64) -> Option<i64> {
    (raw != 0).then_some(raw)
}
