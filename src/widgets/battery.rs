// src/widgets/battery.rs — Battery capacity from sysfs
//
// Yields no block when the battery is absent, so the same config works on
// machines without one.

use anyhow::Context;
use std::path::PathBuf;

use crate::core::types::{Output, Status};
use crate::infra::errors::BarError;
use crate::widgets::args::{bind, Param};
use crate::widgets::types::{ArgSpec, Widget};

pub const TYPE_ID: &str = "widgets.battery.Battery";

const PARAMS: &[Param] = &[
    Param::optional("battery"),
    Param::optional("warn"),
    Param::optional("error"),
    Param::optional("root"),
];

pub struct Battery {
    dir: PathBuf,
    warn: f64,
    error: f64,
    last_capacity: Option<u8>,
}

pub fn build(args: &ArgSpec) -> Result<Box<dyn Widget>, BarError> {
    let a = bind(TYPE_ID, PARAMS, args)?;
    let root = PathBuf::from(a.str_or("root", "/sys/class/power_supply")?);
    Ok(Box::new(Battery {
        dir: root.join(a.str_or("battery", "BAT0")?),
        warn: a.f64_or("warn", 20.0)?,
        error: a.f64_or("error", 10.0)?,
        last_capacity: None,
    }))
}

impl Battery {
    fn read(&self, file: &str) -> anyhow::Result<String> {
        let path = self.dir.join(file);
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(s.trim().to_string())
    }
}

impl Widget for Battery {
    fn name(&self) -> &str {
        "battery"
    }

    fn query(&mut self) -> anyhow::Result<Option<Output>> {
        if !self.dir.exists() {
            return Ok(None);
        }

        let capacity: u8 = self
            .read("capacity")?
            .parse()
            .context("battery capacity is not a percentage")?;
        let charging = matches!(self.read("status").as_deref(), Ok("Charging") | Ok("Full"));

        let status = if charging {
            Status::Normal
        } else if f64::from(capacity) <= self.error {
            Status::Error
        } else if f64::from(capacity) <= self.warn {
            Status::Warn
        } else {
            Status::Normal
        };

        let trend = match self.last_capacity {
            Some(prev) if capacity > prev => "+",
            Some(prev) if capacity < prev => "-",
            _ => "",
        };
        self.last_capacity = Some(capacity);

        let text = if charging {
            format!("{capacity}% ⚡")
        } else {
            format!("{capacity}%{trend}")
        };
        Ok(Some(Output::new(self.name(), text).with_status(status)))
    }
}
