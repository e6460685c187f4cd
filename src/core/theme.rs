// src/core/theme.rs — Icon and color decoration by status tier
//
// A rule's icon/color spec is a whitespace-separated token list. Three or
// more tokens map to normal/warn/error; otherwise the first token always
// applies. Icon tokens of the form `U+XXXX` are rendered as a glyph in the
// text, anything else names a file under `<icon base>/icons/`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::types::{Output, Status};

const CODEPOINT_PREFIX: &str = "U+";

/// Presentation rule for one block name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeRule {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl ThemeRule {
    /// Every `U+` icon token must decode to a character.
    pub fn validate(&self) -> Result<(), String> {
        let Some(ref icon) = self.icon else {
            return Ok(());
        };
        for token in icon.split_whitespace() {
            if let Some(hex) = token.strip_prefix(CODEPOINT_PREFIX) {
                if decode_codepoint(hex).is_none() {
                    return Err(format!("'{token}' is not a valid code point"));
                }
            }
        }
        Ok(())
    }
}

/// Pick the token for `status` from a tiered spec.
pub fn select_token(spec: &str, status: Option<Status>) -> Option<&str> {
    let tokens: Vec<&str> = spec.split_whitespace().collect();
    let idx = match status {
        Some(Status::Error) if tokens.len() >= 3 => 2,
        Some(Status::Warn) if tokens.len() >= 3 => 1,
        _ => 0,
    };
    tokens.get(idx).copied()
}

fn decode_codepoint(hex: &str) -> Option<char> {
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Apply `rule` to `output`. Without a rule the output passes through as is.
pub fn decorate(mut output: Output, rule: Option<&ThemeRule>, icon_base: &Path) -> Output {
    let Some(rule) = rule else {
        return output;
    };

    output.icon = Some(String::new());
    output.extra.remove("icon");

    if let Some(token) = rule
        .icon
        .as_deref()
        .and_then(|spec| select_token(spec, output.status))
    {
        match token.strip_prefix(CODEPOINT_PREFIX) {
            Some(hex) => match decode_codepoint(hex) {
                Some(glyph) => output.full_text = format!("{glyph}  {}", output.full_text),
                None => tracing::warn!("Ignoring invalid icon code point '{}'", token),
            },
            None => {
                let path = icon_base.join("icons").join(token);
                output.icon = Some(path.to_string_lossy().into_owned());
                output.full_text = format!(" {}", output.full_text);
            }
        }
    }

    if let Some(color) = rule
        .color
        .as_deref()
        .and_then(|spec| select_token(spec, output.status))
    {
        output.color = Some(color.to_string());
        output.extra.remove("color");
    }

    output
}

/// Theme rules plus the directory icons are resolved against.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    rules: HashMap<String, ThemeRule>,
    icon_base: PathBuf,
}

impl Theme {
    pub fn new(rules: HashMap<String, ThemeRule>, icon_base: impl Into<PathBuf>) -> Self {
        Self {
            rules,
            icon_base: icon_base.into(),
        }
    }

    pub fn rule_for(&self, name: &str) -> Option<&ThemeRule> {
        self.rules.get(name)
    }

    pub fn apply(&self, output: Output) -> Output {
        let rule = self.rule_for(&output.name);
        decorate(output, rule, &self.icon_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(icon: Option<&str>, color: Option<&str>) -> ThemeRule {
        ThemeRule {
            icon: icon.map(String::from),
            color: color.map(String::from),
        }
    }

    #[test]
    fn test_three_tier_selection() {
        assert_eq!(select_token("a b c", Some(Status::Error)), Some("c"));
        assert_eq!(select_token("a b c", Some(Status::Warn)), Some("b"));
        assert_eq!(select_token("a b c", Some(Status::Normal)), Some("a"));
        assert_eq!(select_token("a b c", None), Some("a"));
    }

    #[test]
    fn test_single_tier_ignores_status() {
        assert_eq!(select_token("x", Some(Status::Error)), Some("x"));
        assert_eq!(select_token("x y", Some(Status::Error)), Some("x"));
    }

    #[test]
    fn test_empty_spec_has_no_token() {
        assert_eq!(select_token("   ", Some(Status::Warn)), None);
    }

    #[test]
    fn test_no_rule_is_identity() {
        let out = Output::new("cpu", "12%").with_status(Status::Warn);
        assert_eq!(decorate(out.clone(), None, Path::new("/opt/bar")), out);
    }

    #[test]
    fn test_codepoint_icon() {
        let out = decorate(
            Output::new("mood", "ok"),
            Some(&rule(Some("U+1F600"), None)),
            Path::new("/opt/bar"),
        );
        assert_eq!(out.full_text, "\u{1F600}  ok");
        assert_eq!(out.icon.as_deref(), Some(""));
        assert!(out.color.is_none());
    }

    #[test]
    fn test_file_icon() {
        let out = decorate(
            Output::new("battery", "80%"),
            Some(&rule(Some("bat.png"), None)),
            Path::new("/opt/bar"),
        );
        assert_eq!(out.icon.as_deref(), Some("/opt/bar/icons/bat.png"));
        assert_eq!(out.full_text, " 80%");
    }

    #[test]
    fn test_tiered_color_without_text_change() {
        let out = decorate(
            Output::new("battery", "8%").with_status(Status::Error),
            Some(&rule(None, Some("#fff #ff0 #f00"))),
            Path::new("/opt/bar"),
        );
        assert_eq!(out.color.as_deref(), Some("#f00"));
        assert_eq!(out.full_text, "8%");
        assert_eq!(out.icon.as_deref(), Some(""));
    }

    #[test]
    fn test_tiered_icon_and_color() {
        let out = decorate(
            Output::new("battery", "15%").with_status(Status::Warn),
            Some(&rule(Some("full.png low.png empty.png"), Some("#fff #ff0 #f00"))),
            Path::new("/opt/bar"),
        );
        assert_eq!(out.icon.as_deref(), Some("/opt/bar/icons/low.png"));
        assert_eq!(out.color.as_deref(), Some("#ff0"));
    }

    #[test]
    fn test_rule_color_replaces_passthrough_color() {
        let out = decorate(
            Output::new("a", "x").with_extra("color", serde_json::json!("#111111")),
            Some(&rule(None, Some("#222222"))),
            Path::new("/opt/bar"),
        );
        assert!(out.extra.is_empty());
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r##"{"name":"a","full_text":"x","icon":"","color":"#222222"}"##
        );
    }

    #[test]
    fn test_theme_apply_matches_by_name() {
        let mut rules = HashMap::new();
        rules.insert("clock".to_string(), rule(None, Some("#abcdef")));
        let theme = Theme::new(rules, "/opt/bar");

        let themed = theme.apply(Output::new("clock", "12:00"));
        assert_eq!(themed.color.as_deref(), Some("#abcdef"));

        let untouched = theme.apply(Output::new("other", "x"));
        assert_eq!(untouched, Output::new("other", "x"));
    }

    #[test]
    fn test_validate() {
        assert!(rule(Some("U+1F600 bat.png"), None).validate().is_ok());
        assert!(rule(Some("U+D800"), None).validate().is_err());
        assert!(rule(Some("U+xyz"), None).validate().is_err());
    }
}
