// src/widgets/clock.rs — Local time

use chrono::Local;

use crate::core::types::Output;
use crate::infra::errors::BarError;
use crate::widgets::args::{bind, Param};
use crate::widgets::types::{ArgSpec, Widget};

pub const TYPE_ID: &str = "widgets.clock.Clock";

const PARAMS: &[Param] = &[Param::optional("format")];
const DEFAULT_FORMAT: &str = "%a %d %b %H:%M";

pub struct Clock {
    format: String,
}

impl Clock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

pub fn build(args: &ArgSpec) -> Result<Box<dyn Widget>, BarError> {
    let a = bind(TYPE_ID, PARAMS, args)?;
    let format = a.str_or("format", DEFAULT_FORMAT)?;
    // chrono panics on Display for an invalid format; reject it up front.
    if chrono::format::StrftimeItems::new(&format).any(|i| matches!(i, chrono::format::Item::Error)) {
        return Err(BarError::args(TYPE_ID, format!("invalid time format '{format}'")));
    }
    Ok(Box::new(Clock::new(format)))
}

impl Widget for Clock {
    fn name(&self) -> &str {
        "clock"
    }

    fn query(&mut self) -> anyhow::Result<Option<Output>> {
        let text = Local::now().format(&self.format).to_string();
        Ok(Some(Output::new(self.name(), text)))
    }
}
