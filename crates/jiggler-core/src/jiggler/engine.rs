//! Jiggle engine.
//!
//! Runs an unbounded sequence of jiggle cycles against a [`Pointer`] until a
//! shutdown future resolves or any cycle fails.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Stopped
//! ```
//!
//! ## Cycle
//!
//! ```text
//! query position -> glide +offset -> pause -> glide -offset -> status line -> sleep
//! ```
//!
//! A shutdown cancels the in-flight cycle as a whole; there is no resuming
//! half way through.

use std::future::Future;
use std::io::Write;

use chrono::{DateTime, Local};
use tokio::time::sleep;

use super::report::{status_line, Outcome};
use crate::config::JiggleConfig;
use crate::error::Result;
use crate::pointer::{check_fail_safe, Pointer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JigglerState {
    Idle,
    Running,
    Stopped,
}

/// What one completed cycle observed.
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Cursor position read before the displacement.
    pub origin: (i32, i32),
    pub at: DateTime<Local>,
}

/// Keeps the host's idle detector from firing.
///
/// Owns the pointer backend and the writer that receives status lines.
pub struct Jiggler<P, W> {
    pointer: P,
    out: W,
    config: JiggleConfig,
    fail_safe: bool,
    state: JigglerState,
    cycles: u64,
}

impl<P: Pointer, W: Write> Jiggler<P, W> {
    /// Create a jiggler for the platform this binary was built for.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` does not validate.
    pub fn new(pointer: P, out: W, config: JiggleConfig) -> Result<Self> {
        Self::for_platform(pointer, out, config, std::env::consts::OS)
    }

    /// Create a jiggler as if running on `os`.
    ///
    /// The fail-safe is resolved here, before any movement is issued.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` does not validate.
    pub fn for_platform(pointer: P, out: W, config: JiggleConfig, os: &str) -> Result<Self> {
        config.validate()?;
        let fail_safe = config.fail_safe.resolve(os);
        if !fail_safe {
            tracing::info!(os, "corner fail-safe disabled");
        }
        Ok(Self {
            pointer,
            out,
            config,
            fail_safe,
            state: JigglerState::Idle,
            cycles: 0,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> JigglerState {
        self.state
    }

    /// Number of cycles that printed their status line.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn fail_safe_enabled(&self) -> bool {
        self.fail_safe
    }

    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn config(&self) -> &JiggleConfig {
        &self.config
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Run cycles until `shutdown` resolves or a cycle fails.
    ///
    /// The farewell or error line is written to the output before returning.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Outcome
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        self.state = JigglerState::Running;

        let outcome = loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break Outcome::Interrupted,
                result = self.cycle_and_wait() => {
                    if let Err(err) = result {
                        break Outcome::Failed(err);
                    }
                }
            }
        };

        self.state = JigglerState::Stopped;
        match &outcome {
            Outcome::Interrupted => tracing::info!(cycles = self.cycles, "stopped by user"),
            Outcome::Failed(err) => {
                tracing::error!(cycles = self.cycles, error = %err, "jiggle loop failed")
            }
        }
        if let Err(e) = outcome.write_to(&mut self.out) {
            tracing::warn!(error = %e, "could not write final line");
        }
        outcome
    }

    /// Perform one displace-pause-restore-report sequence, without the
    /// trailing sleep.
    ///
    /// # Errors
    ///
    /// Fails on the first pointer or console error; nothing is retried.
    pub async fn cycle(&mut self) -> Result<CycleReport> {
        let origin = self.pointer.position()?;
        let offset = self.config.offset_px;

        self.glide(offset, 0).await?;
        sleep(self.config.pause()).await;
        self.glide(-offset, 0).await?;

        let at = Local::now();
        writeln!(self.out, "{}", status_line(at))?;
        self.out.flush()?;
        self.cycles += 1;

        tracing::debug!(
            cycle = self.cycles,
            x = origin.0,
            y = origin.1,
            "jiggle cycle complete"
        );
        Ok(CycleReport { origin, at })
    }

    // ── Internal ─────────────────────────────────────────────────────

    async fn cycle_and_wait(&mut self) -> Result<()> {
        self.cycle().await?;
        sleep(self.config.interval()).await;
        Ok(())
    }

    /// Move by `(dx, dy)` spread across the configured move duration.
    async fn glide(&mut self, dx: i32, dy: i32) -> Result<()> {
        let steps = glide_steps(dx, dy);
        let tick = self.config.move_duration() / steps.len() as u32;
        for (sx, sy) in steps {
            sleep(tick).await;
            if self.fail_safe {
                check_fail_safe(&self.pointer)?;
            }
            self.pointer.move_relative(sx, sy)?;
        }
        Ok(())
    }
}

/// Split a relative move into unit increments that sum to exactly `(dx, dy)`.
pub fn glide_steps(dx: i32, dy: i32) -> Vec<(i32, i32)> {
    let n = i64::from(dx.unsigned_abs().max(dy.unsigned_abs()).max(1));
    let (dx, dy) = (i64::from(dx), i64::from(dy));
    let mut steps = Vec::with_capacity(n as usize);
    let (mut done_x, mut done_y) = (0i64, 0i64);
    for i in 1..=n {
        let target_x = dx * i / n;
        let target_y = dy * i / n;
        steps.push(((target_x - done_x) as i32, (target_y - done_y) as i32));
        done_x = target_x;
        done_y = target_y;
    }
    steps
}
