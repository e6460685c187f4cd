// src/widgets/types.rs — Widget trait and declarative widget specs

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::core::types::Output;

/// A pluggable status-line segment.
///
/// Instances may keep state between ticks; the engine owns them exclusively
/// and drops them wholesale when the widget set is re-resolved.
pub trait Widget: Send {
    /// Block name, used for theme lookup and failure placeholders.
    fn name(&self) -> &str;

    /// Produce this tick's block, or `None` to be left out of the frame.
    fn query(&mut self) -> anyhow::Result<Option<Output>>;
}

/// Constructor arguments in the calling convention the config declared.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArgSpec {
    #[default]
    None,
    Positional(Vec<Value>),
    Scalar(Value),
    Named(Map<String, Value>),
}

impl ArgSpec {
    /// Classify a config value once, at parse time.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => ArgSpec::None,
            Value::Array(items) => ArgSpec::Positional(items),
            Value::Object(map) => ArgSpec::Named(map),
            scalar => ArgSpec::Scalar(scalar),
        }
    }
}

/// Fully-qualified widget type plus its constructor arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    pub type_id: String,
    pub args: ArgSpec,
}

impl WidgetSpec {
    pub fn new(type_id: impl Into<String>, args: ArgSpec) -> Self {
        Self {
            type_id: type_id.into(),
            args,
        }
    }

    /// Parse the `"type arg1 arg2"` shorthand: whitespace-separated string
    /// arguments are passed positionally.
    pub fn parse_shorthand(s: &str) -> Result<Self, String> {
        let mut parts = s.split(' ').filter(|p| !p.is_empty());
        let type_id = parts
            .next()
            .ok_or_else(|| "empty widget specification".to_string())?;
        let rest: Vec<Value> = parts.map(|p| Value::String(p.to_string())).collect();
        let args = if rest.is_empty() {
            ArgSpec::None
        } else {
            ArgSpec::Positional(rest)
        };
        Ok(Self::new(type_id, args))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpec {
    Shorthand(String),
    Keyed(BTreeMap<String, Value>),
}

impl<'de> Deserialize<'de> for WidgetSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawSpec::deserialize(deserializer)? {
            RawSpec::Shorthand(s) => WidgetSpec::parse_shorthand(&s).map_err(serde::de::Error::custom),
            RawSpec::Keyed(map) => {
                if map.len() != 1 {
                    return Err(serde::de::Error::custom(format!(
                        "widget entry must have exactly one key, found {}",
                        map.len()
                    )));
                }
                let (type_id, value) = map
                    .into_iter()
                    .next()
                    .ok_or_else(|| serde::de::Error::custom("empty widget entry"))?;
                Ok(WidgetSpec::new(type_id, ArgSpec::from_value(value)))
            }
        }
    }
}
