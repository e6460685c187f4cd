// src/infra/errors.rs — Error types for mmbar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarError {
    // Startup errors (fatal before the stream header)
    #[error("Configuration error: {0}")]
    Config(String),

    // Resolution errors (fatal at the point of (re-)resolution)
    #[error("Unknown widget type '{type_id}'")]
    UnknownWidget { type_id: String },

    #[error("Widget '{type_id}' argument error: {message}")]
    WidgetArgs { type_id: String, message: String },

    #[error("Profile probe failed: {0}")]
    ProfileProbe(String),

    // Streaming errors
    #[error("Widget '{widget}' query failed: {source}")]
    WidgetQuery {
        widget: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Frame serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BarError {
    /// Shorthand for an argument-shape error raised by a widget factory.
    pub fn args(type_id: &str, message: impl Into<String>) -> Self {
        BarError::WidgetArgs {
            type_id: type_id.to_string(),
            message: message.into(),
        }
    }

    /// Errors raised while turning widget specs into widget instances.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            BarError::UnknownWidget { .. }
                | BarError::WidgetArgs { .. }
                | BarError::ProfileProbe(_)
        )
    }
}
