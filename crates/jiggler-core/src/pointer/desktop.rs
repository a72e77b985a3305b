//! Production backend over the `enigo` input-simulation crate.

use enigo::{Coordinate, Enigo, Mouse, Settings};

use super::Pointer;
use crate::error::PointerError;

/// Drives the real OS cursor.
pub struct EnigoPointer {
    enigo: Enigo,
}

impl EnigoPointer {
    /// Connect to the platform input backend.
    ///
    /// # Errors
    ///
    /// Returns [`PointerError::Unavailable`] when no display or input session
    /// can be reached.
    pub fn connect() -> Result<Self, PointerError> {
        let enigo = Enigo::new(&Settings::default())?;
        tracing::debug!("connected to input backend");
        Ok(Self { enigo })
    }
}

impl Pointer for EnigoPointer {
    fn position(&self) -> Result<(i32, i32), PointerError> {
        self.enigo
            .location()
            .map_err(|e| PointerError::Position(e.to_string()))
    }

    fn display_size(&self) -> Result<(i32, i32), PointerError> {
        self.enigo
            .main_display()
            .map_err(|e| PointerError::DisplaySize(e.to_string()))
    }

    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<(), PointerError> {
        self.enigo
            .move_mouse(dx, dy, Coordinate::Rel)
            .map_err(|e| PointerError::Move {
                dx,
                dy,
                message: e.to_string(),
            })
    }
}
