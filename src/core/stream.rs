// src/core/stream.rs — i3bar protocol framing
//
// The stream is a header line followed by one never-closed JSON array. The
// first element is an empty placeholder array written with the header, so
// every frame after it is simply `,` + array. No closing `]` is ever written;
// i3bar and swaybar accept an unterminated stream.

use serde::Serialize;
use std::io::Write;

use crate::core::types::Output;
use crate::infra::errors::BarError;

pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Serialize)]
struct Header {
    version: u32,
}

/// Append-only writer for the status stream. Flushes after every line.
pub struct FrameWriter<W: Write> {
    inner: W,
    started: bool,
    frames: u64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            started: false,
            frames: 0,
        }
    }

    /// Write `{"version":1}[[]`. Subsequent calls do nothing.
    pub fn write_header(&mut self) -> Result<(), BarError> {
        if self.started {
            return Ok(());
        }
        let header = serde_json::to_string(&Header {
            version: PROTOCOL_VERSION,
        })?;
        writeln!(self.inner, "{header}[[]")?;
        self.inner.flush()?;
        self.started = true;
        Ok(())
    }

    /// Write one tick's blocks as the next array element.
    pub fn write_frame(&mut self, outputs: &[Output]) -> Result<(), BarError> {
        self.write_header()?;
        let body = serde_json::to_string(outputs)?;
        writeln!(self.inner, ",{body}")?;
        self.inner.flush()?;
        self.frames += 1;
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Frames written so far (the placeholder element not included).
    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
