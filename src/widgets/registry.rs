// src/widgets/registry.rs — Widget type registry

use std::collections::HashMap;

use crate::infra::errors::BarError;
use crate::widgets::types::{ArgSpec, Widget, WidgetSpec};
use crate::widgets::{battery, clock, loadavg, text};

/// Builds a widget from its declared arguments.
pub type WidgetFactory = fn(&ArgSpec) -> Result<Box<dyn Widget>, BarError>;

/// Table from stable type identifiers to widget factories.
pub struct WidgetRegistry {
    factories: HashMap<String, WidgetFactory>,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl WidgetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry holding the bundled widgets.
    pub fn with_builtins() -> Self {
        let mut r = Self::new();
        r.register(clock::TYPE_ID, clock::build);
        r.register(text::TYPE_ID, text::build);
        r.register(loadavg::TYPE_ID, loadavg::build);
        r.register(battery::TYPE_ID, battery::build);
        r
    }

    /// Register a factory; a later registration replaces an earlier one.
    pub fn register(&mut self, type_id: impl Into<String>, factory: WidgetFactory) {
        self.factories.insert(type_id.into(), factory);
    }

    pub fn get(&self, type_id: &str) -> Option<WidgetFactory> {
        self.factories.get(type_id).copied()
    }

    /// All registered type identifiers, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Instantiate one widget from its spec.
    pub fn build(&self, spec: &WidgetSpec) -> Result<Box<dyn Widget>, BarError> {
        let factory = self.get(&spec.type_id).ok_or_else(|| BarError::UnknownWidget {
            type_id: spec.type_id.clone(),
        })?;
        factory(&spec.args)
    }
}
