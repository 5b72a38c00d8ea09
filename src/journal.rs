//! Event journal: a render sink that writes one JSON object per line.
//!
//! The board itself never logs; this is how its activity is recorded.
//!
//! ```text
//! {"event":"piece_selected","cell":{"x":0,"y":0},"direction":"initial"}
//! {"event":"piece_moved","id":41,"column":0,"from_y":3,"to_y":0}
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::RenderSink;
use crate::types::RenderEvent;

pub struct Journal<W: Write = BufWriter<File>> {
    out: Option<W>,
    written: u64,
}

impl Journal<BufWriter<File>> {
    /// Journal to a freshly truncated file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("journal: cannot create {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Journal from `MATCH3_LOG_PATH`, or a disabled one when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var("MATCH3_LOG_PATH") {
            Ok(path) if !path.trim().is_empty() => Self::create(path.trim()),
            _ => Ok(Self::disabled()),
        }
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            written: 0,
        }
    }

    /// A journal that records nothing.
    pub fn disabled() -> Self {
        Self {
            out: None,
            written: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Number of events written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(out) = self.out.as_mut() {
            out.flush().context("journal: flush failed")?;
        }
        Ok(())
    }

    pub fn get_ref(&self) -> Option<&W> {
        self.out.as_ref()
    }

    /// Stop journaling and hand back the writer.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }

    fn write_event(out: &mut W, event: &RenderEvent) -> Result<()> {
        serde_json::to_writer(&mut *out, event)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> RenderSink for Journal<W> {
    fn emit(&mut self, event: RenderEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        match Self::write_event(out, &event) {
            Ok(()) => self.written += 1,
            Err(e) => {
                eprintln!("[Journal] write failed, journaling disabled: {}", e);
                self.out = None;
            }
        }
    }
}
