// src/core/engine.rs — The status loop
//
// INIT resolves the widget set and writes the stream header. Every tick then
// re-resolves if the profile check interval has elapsed, queries each widget
// in order, themes the results and writes them as one frame. Between ticks
// the loop sleeps; an external shutdown future can interrupt the sleep.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::runtime::{Handle, RuntimeFlavor};

use crate::core::profile::ProfileProbe;
use crate::core::resolver;
use crate::core::stream::FrameWriter;
use crate::core::theme::Theme;
use crate::core::types::{Output, Status};
use crate::infra::config::Config;
use crate::infra::errors::BarError;
use crate::infra::paths;
use crate::widgets::registry::WidgetRegistry;
use crate::widgets::types::Widget;

/// Mutable state carried from one tick to the next.
pub struct LoopState {
    widgets: Vec<Box<dyn Widget>>,
    /// Seconds accumulated since the last resolution.
    elapsed: u64,
    ticks: u64,
    resolutions: u64,
}

impl LoopState {
    fn new(widgets: Vec<Box<dyn Widget>>) -> Self {
        Self {
            widgets,
            elapsed: 0,
            ticks: 0,
            resolutions: 1,
        }
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn widget_names(&self) -> Vec<&str> {
        self.widgets.iter().map(|w| w.name()).collect()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Successful resolutions, the initial one included.
    pub fn resolutions(&self) -> u64 {
        self.resolutions
    }
}

pub struct Engine<W: Write, P: ProfileProbe> {
    config: Config,
    registry: WidgetRegistry,
    probe: P,
    theme: Theme,
    writer: FrameWriter<W>,
    state: LoopState,
}

impl<W: Write, P: ProfileProbe> Engine<W, P> {
    /// Resolve the initial widget set and write the stream header.
    ///
    /// Nothing is written if resolution fails.
    pub fn start(
        config: Config,
        registry: WidgetRegistry,
        probe: P,
        out: W,
    ) -> Result<Self, BarError> {
        let widgets = resolver::resolve(&config, &registry, &probe)?;
        let icon_base = paths::icon_base_dir(config.icon_path.as_deref());
        let theme = Theme::new(config.theme.clone(), icon_base);

        let mut writer = FrameWriter::new(out);
        writer.write_header()?;

        Ok(Self {
            config,
            registry,
            probe,
            theme,
            writer,
            state: LoopState::new(widgets),
        })
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn writer(&self) -> &FrameWriter<W> {
        &self.writer
    }

    /// One loop iteration without the sleep. Returns the emitted frame.
    pub fn tick(&mut self) -> Result<Vec<Output>, BarError> {
        if self.state.elapsed >= self.config.netctl_check_interval {
            self.reresolve()?;
        }

        let frame = self.collect()?;
        self.writer.write_frame(&frame)?;

        self.state.elapsed = self.state.elapsed.saturating_add(self.config.interval);
        self.state.ticks += 1;
        Ok(frame)
    }

    /// Query every widget in declared order and theme the results.
    /// Widgets that yield nothing are left out.
    pub fn collect(&mut self) -> Result<Vec<Output>, BarError> {
        let mut frame = Vec::with_capacity(self.state.widgets.len());

        for widget in self.state.widgets.iter_mut() {
            let output = match widget.query() {
                Ok(Some(output)) => output,
                Ok(None) => continue,
                Err(e) if self.config.isolate_failures => {
                    tracing::warn!("Widget '{}' failed: {:#}", widget.name(), e);
                    failure_placeholder(widget.name())
                }
                Err(e) => {
                    return Err(BarError::WidgetQuery {
                        widget: widget.name().to_string(),
                        source: e,
                    })
                }
            };
            frame.push(self.theme.apply(output));
        }

        Ok(frame)
    }

    fn reresolve(&mut self) -> Result<(), BarError> {
        tracing::debug!(
            "Re-resolving widgets after {}s (tick {})",
            self.state.elapsed,
            self.state.ticks
        );
        self.state.elapsed = 0;

        match resolver::resolve(&self.config, &self.registry, &self.probe) {
            Ok(widgets) => {
                self.state.widgets = widgets;
                self.state.resolutions += 1;
                Ok(())
            }
            Err(e) if self.config.isolate_failures => {
                tracing::warn!("Re-resolution failed, keeping current widgets: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Tick forever, sleeping `interval` seconds between frames, until
    /// `shutdown` completes. The stream is left unterminated on exit.
    pub async fn run<F>(mut self, shutdown: F) -> Result<W, BarError>
    where
        F: Future<Output = ()>,
    {
        let interval = Duration::from_secs(self.config.interval);
        let multi_thread = Handle::current().runtime_flavor() == RuntimeFlavor::MultiThread;
        tokio::pin!(shutdown);

        loop {
            // Widget queries and the profile probe block; on a multi-threaded
            // runtime hand the worker's other tasks off while they run.
            if multi_thread {
                tokio::task::block_in_place(|| self.tick())?;
            } else {
                self.tick()?;
            }

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = &mut shutdown => {
                    tracing::info!(
                        "Shutdown after {} frame(s)",
                        self.writer.frames_written()
                    );
                    return Ok(self.writer.into_inner());
                }
            }
        }
    }
}

/// Block shown in place of a widget whose query failed.
fn failure_placeholder(name: &str) -> Output {
    Output::new(name, format!("{name}: error")).with_status(Status::Error)
}
