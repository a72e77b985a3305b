//! Narrow access to the OS pointer.
//!
//! The cursor is global OS state; the engine only ever touches it through
//! this trait so backends can be swapped for tests.

mod desktop;
pub mod fake;

pub use desktop::EnigoPointer;
pub use fake::{FakePointer, PointerCall};

use crate::error::PointerError;

/// An input-simulation backend.
pub trait Pointer {
    /// Current cursor coordinates in screen pixels.
    fn position(&self) -> Result<(i32, i32), PointerError>;

    /// Width and height of the main display.
    fn display_size(&self) -> Result<(i32, i32), PointerError>;

    /// Move the cursor by a relative offset, instantaneously.
    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<(), PointerError>;
}

impl<P: Pointer + ?Sized> Pointer for Box<P> {
    fn position(&self) -> Result<(i32, i32), PointerError> {
        (**self).position()
    }

    fn display_size(&self) -> Result<(i32, i32), PointerError> {
        (**self).display_size()
    }

    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<(), PointerError> {
        (**self).move_relative(dx, dy)
    }
}

/// Whether `(x, y)` is one of the four corners of a `width` x `height` display.
pub fn is_corner((x, y): (i32, i32), (width, height): (i32, i32)) -> bool {
    let right = width - 1;
    let bottom = height - 1;
    (x == 0 || x == right) && (y == 0 || y == bottom)
}

/// Abort with [`PointerError::FailSafe`] when the cursor rests on a corner.
///
/// # Errors
///
/// Propagates backend query failures, or the fail-safe itself.
pub fn check_fail_safe<P: Pointer + ?Sized>(pointer: &P) -> Result<(), PointerError> {
    let pos = pointer.position()?;
    let size = pointer.display_size()?;
    if is_corner(pos, size) {
        return Err(PointerError::FailSafe { x: pos.0, y: pos.1 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_detected() {
        let size = (1920, 1080);
        assert!(is_corner((0, 0), size));
        assert!(is_corner((1919, 0), size));
        assert!(is_corner((0, 1079), size));
        assert!(is_corner((1919, 1079), size));
    }

    #[test]
    fn edges_are_not_corners() {
        let size = (1920, 1080);
        assert!(!is_corner((0, 500), size));
        assert!(!is_corner((960, 0), size));
        assert!(!is_corner((960, 540), size));
    }

    #[test]
    fn fail_safe_check_reports_position() {
        let pointer = FakePointer::new(0, 0);
        match check_fail_safe(&pointer) {
            Err(PointerError::FailSafe { x, y }) => assert_eq!((x, y), (0, 0)),
            other => panic!("Expected FailSafe, got {other:?}"),
        }
    }

    #[test]
    fn fail_safe_check_passes_mid_screen() {
        let pointer = FakePointer::new(400, 300);
        assert!(check_fail_safe(&pointer).is_ok());
    }

    #[test]
    fn boxed_pointer_delegates() {
        let mut pointer: Box<dyn Pointer> = Box::new(FakePointer::new(10, 10));
        pointer.move_relative(5, -3).unwrap();
        assert_eq!(pointer.position().unwrap(), (15, 7));
    }
}
