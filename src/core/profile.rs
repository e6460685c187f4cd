// src/core/profile.rs — Active network profile detection

use std::process::Command;

use crate::infra::errors::BarError;

/// Reports the currently active named profile, if any.
///
/// Probes are synchronous and may block (spawning a process, for one). The
/// engine calls them between frames, outside of any await point.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileProbe {
    fn active_profile(&self) -> Result<Option<String>, BarError>;
}

impl<F> ProfileProbe for F
where
    F: Fn() -> Result<Option<String>, BarError>,
{
    fn active_profile(&self) -> Result<Option<String>, BarError> {
        self()
    }
}

/// Asks netctl which profile is started.
#[derive(Debug, Clone)]
pub struct NetctlProbe {
    program: String,
}

impl Default for NetctlProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl NetctlProbe {
    pub fn new() -> Self {
        Self::with_program("netctl")
    }

    /// Use a different executable (it must accept `list`).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ProfileProbe for NetctlProbe {
    fn active_profile(&self) -> Result<Option<String>, BarError> {
        let exe = which::which(&self.program)
            .map_err(|e| BarError::ProfileProbe(format!("'{}' not found: {}", self.program, e)))?;

        let output = Command::new(&exe)
            .arg("list")
            .output()
            .map_err(|e| BarError::ProfileProbe(format!("failed to run {}: {}", exe.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BarError::ProfileProbe(format!(
                "{} list exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let profile = parse_netctl_list(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!("netctl active profile: {:?}", profile);
        Ok(profile)
    }
}

/// `netctl list` marks the started profile with a leading `* `.
pub fn parse_netctl_list(out: &str) -> Option<String> {
    out.lines()
        .find_map(|line| line.strip_prefix("* "))
        .map(|name| name.trim_end().to_string())
}
