//! Console lines written to stdout.

use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::config::JiggleConfig;
use crate::error::CoreError;

pub const FAREWELL: &str = "Mouse jiggler stopped by user";

/// Print the two startup lines.
pub fn write_banner<W: Write + ?Sized>(out: &mut W, config: &JiggleConfig) -> io::Result<()> {
    writeln!(out, "Starting mouse jiggler - press Ctrl+C to stop")?;
    writeln!(out, "Mouse will jiggle every {} seconds", config.interval_secs)?;
    out.flush()
}

/// `Mouse jiggled at HH:MM:SS`
pub fn status_line(at: DateTime<Local>) -> String {
    format!("Mouse jiggled at {}", at.format("%H:%M:%S"))
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The user asked to stop.
    Interrupted,
    /// A pointer, config or console failure ended the run.
    Failed(CoreError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Interrupted => 0,
            Outcome::Failed(_) => 1,
        }
    }

    /// Write the farewell or `Error:` line.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            // Blank line first so the farewell does not share a line with the ^C echo.
            Outcome::Interrupted => {
                writeln!(out)?;
                writeln!(out, "{FAREWELL}")?;
            }
            Outcome::Failed(err) => writeln!(out, "Error: {err}")?,
        }
        out.flush()
    }
}
