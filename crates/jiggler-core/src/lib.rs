//! # Mouse Jiggler Core Library
//!
//! Keeps an operating system's idle timer or screen lock from firing by
//! nudging the pointer one pixel and back on a fixed cadence.
//!
//! ## Architecture
//!
//! - **Pointer**: a narrow trait over the OS cursor, with an `enigo`-backed
//!   implementation and an in-memory fake for tests
//! - **Jiggler**: the cycle loop, raced against a shutdown future
//! - **Report**: the exact console lines the binary prints
//!
//! ## Key Components
//!
//! - [`Jiggler`]: the jiggle engine
//! - [`JiggleConfig`]: cadence, displacement and fail-safe mode
//! - [`Pointer`]: input-simulation capability
//! - [`Outcome`]: how a run ended, and its exit code

pub mod config;
pub mod error;
pub mod jiggler;
pub mod pointer;
pub mod signal;

pub use config::{FailSafeMode, JiggleConfig};
pub use error::{ConfigError, CoreError, PointerError, Result};
pub use jiggler::{write_banner, CycleReport, Jiggler, JigglerState, Outcome};
pub use pointer::{EnigoPointer, FakePointer, Pointer};
pub use signal::shutdown_signal;
