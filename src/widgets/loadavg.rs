// src/widgets/loadavg.rs — One-minute load average

use anyhow::Context;
use std::path::PathBuf;

use crate::core::types::{Output, Status};
use crate::infra::errors::BarError;
use crate::widgets::args::{bind, Param};
use crate::widgets::types::{ArgSpec, Widget};

pub const TYPE_ID: &str = "widgets.loadavg.LoadAvg";

const PARAMS: &[Param] = &[
    Param::optional("warn"),
    Param::optional("error"),
    Param::optional("path"),
];

pub struct LoadAvg {
    path: PathBuf,
    warn: Option<f64>,
    error: Option<f64>,
}

pub fn build(args: &ArgSpec) -> Result<Box<dyn Widget>, BarError> {
    let a = bind(TYPE_ID, PARAMS, args)?;
    Ok(Box::new(LoadAvg {
        warn: a.f64_opt("warn")?,
        error: a.f64_opt("error")?,
        path: PathBuf::from(a.str_or("path", "/proc/loadavg")?),
    }))
}

impl LoadAvg {
    fn status_for(&self, load: f64) -> Status {
        match (self.warn, self.error) {
            (_, Some(e)) if load >= e => Status::Error,
            (Some(w), _) if load >= w => Status::Warn,
            _ => Status::Normal,
        }
    }
}

impl Widget for LoadAvg {
    fn name(&self) -> &str {
        "loadavg"
    }

    fn query(&mut self) -> anyhow::Result<Option<Output>> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let first = raw
            .split_whitespace()
            .next()
            .context("empty load average file")?;
        let load: f64 = first
            .parse()
            .with_context(|| format!("bad load value '{first}'"))?;

        Ok(Some(
            Output::new(self.name(), first).with_status(self.status_for(load)),
        ))
    }
}
