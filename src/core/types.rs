// src/core/types.rs — Per-tick widget output

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Severity tier a widget reports alongside its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Warn,
    Error,
}

/// One status-line block as emitted to the bar.
///
/// The status tier travels as `_status`: i3bar reserves unprefixed keys for
/// its own block properties. Typed fields take precedence over an `extra`
/// entry under the same key, so each key appears once on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Output {
    pub name: String,
    pub full_text: String,
    #[serde(
        rename = "_status",
        alias = "status",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Any further block properties the widget sets (`urgent`, `separator`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Output {
    pub fn new(name: impl Into<String>, full_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_text: full_text.into(),
            status: None,
            icon: None,
            color: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Builder: set the status tier.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: attach an extra block property.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Whether a typed field replaces the `extra` entry named `key`.
    fn shadows(&self, key: &str) -> bool {
        match key {
            "name" | "full_text" => true,
            "_status" | "status" => self.status.is_some(),
            "icon" => self.icon.is_some(),
            "color" => self.color.is_some(),
            _ => false,
        }
    }
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("full_text", &self.full_text)?;
        if let Some(status) = &self.status {
            map.serialize_entry("_status", status)?;
        }
        if let Some(icon) = &self.icon {
            map.serialize_entry("icon", icon)?;
        }
        if let Some(color) = &self.color {
            map.serialize_entry("color", color)?;
        }
        for (key, value) in self.extra.iter().filter(|(k, _)| !self.shadows(k)) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_output_serializes_two_keys() {
        let o = Output::new("clock", "12:00");
        assert_eq!(
            serde_json::to_value(&o).unwrap(),
            json!({"name": "clock", "full_text": "12:00"})
        );
    }

    #[test]
    fn test_status_and_extra_serialize() {
        let o = Output::new("bat", "12%")
            .with_status(Status::Error)
            .with_extra("urgent", json!(true));
        assert_eq!(
            serde_json::to_value(&o).unwrap(),
            json!({"name": "bat", "full_text": "12%", "_status": "error", "urgent": true})
        );
    }

    #[test]
    fn test_typed_fields_win_over_extra() {
        let mut o = Output::new("vol", "50%")
            .with_extra("name", json!("other"))
            .with_extra("color", json!("#111111"))
            .with_extra("icon", json!("mine.png"));
        o.color = Some("#222222".into());
        assert_eq!(
            serde_json::to_string(&o).unwrap(),
            r##"{"name":"vol","full_text":"50%","color":"#222222","icon":"mine.png"}"##
        );
    }

    #[test]
    fn test_status_alias_accepted() {
        let o: Output =
            serde_json::from_str(r#"{"name":"a","full_text":"b","status":"warn"}"#).unwrap();
        assert_eq!(o.status, Some(Status::Warn));
        assert!(o.extra.is_empty());
    }
}
