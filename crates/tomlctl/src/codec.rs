//! Conversions between the engine's value model and the `toml` /
//! `serde_json` representations at the codec boundary.

use tomlctl_core::Value;

/// Convert a deserialized `toml::Value` into the engine's tree model.
///
/// Datetimes enter the tree as their string rendering; the closed value
/// model carries no datetime variant.
pub fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Boolean(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => Value::Table(
            table
                .into_iter()
                .map(|(key, value)| (key, from_toml(value)))
                .collect(),
        ),
    }
}

/// Convert a tree back to a `toml::Value` for serialization.
///
/// TOML has no null: absent table entries are dropped, absent array slots
/// (growth holes that were never filled) persist as empty strings.
pub fn to_toml(value: &Value) -> toml::Value {
    match value {
        Value::Table(table) => toml::Value::Table(
            table
                .iter()
                .filter(|(_, value)| !value.is_absent())
                .map(|(key, value)| (key.clone(), to_toml(value)))
                .collect(),
        ),
        Value::Array(items) => toml::Value::Array(items.iter().map(to_toml).collect()),
        Value::String(s) => toml::Value::String(s.clone()),
        Value::Integer(i) => toml::Value::Integer(*i),
        Value::Float(f) => toml::Value::Float(*f),
        Value::Boolean(b) => toml::Value::Boolean(*b),
        Value::Absent => toml::Value::String(String::new()),
    }
}

/// Convert a tree to JSON for `list --json` output.
///
/// Absent slots become JSON `null`; so do non-finite floats, which have no
/// JSON rendering.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Absent => serde_json::Value::Null,
    }
}
