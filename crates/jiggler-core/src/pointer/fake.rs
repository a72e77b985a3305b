use std::cell::RefCell;

use super::Pointer;
use crate::error::PointerError;

/// One call observed by a [`FakePointer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerCall {
    Position,
    DisplaySize,
    Move { dx: i32, dy: i32 },
}

/// In-memory pointer used in tests to record calls and inject faults.
#[derive(Debug)]
pub struct FakePointer {
    position: (i32, i32),
    display: (i32, i32),
    calls: RefCell<Vec<PointerCall>>,
    fail_position: bool,
    fail_move_at: Option<usize>,
    moves: usize,
}

impl FakePointer {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: (x, y),
            display: (1920, 1080),
            calls: RefCell::new(Vec::new()),
            fail_position: false,
            fail_move_at: None,
            moves: 0,
        }
    }

    pub fn with_display(mut self, width: i32, height: i32) -> Self {
        self.display = (width, height);
        self
    }

    /// Every position query fails, as when the session goes away.
    pub fn failing_position(mut self) -> Self {
        self.fail_position = true;
        self
    }

    /// The move with zero-based index `n` fails; earlier moves succeed.
    pub fn failing_move_at(mut self, n: usize) -> Self {
        self.fail_move_at = Some(n);
        self
    }

    pub fn calls(&self) -> Vec<PointerCall> {
        self.calls.borrow().clone()
    }

    /// Relative moves issued so far, in order.
    pub fn moves(&self) -> Vec<(i32, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match *call {
                PointerCall::Move { dx, dy } => Some((dx, dy)),
                _ => None,
            })
            .collect()
    }

    pub fn current(&self) -> (i32, i32) {
        self.position
    }
}

impl Pointer for FakePointer {
    fn position(&self) -> Result<(i32, i32), PointerError> {
        self.calls.borrow_mut().push(PointerCall::Position);
        if self.fail_position {
            return Err(PointerError::Position("display connection lost".into()));
        }
        Ok(self.position)
    }

    fn display_size(&self) -> Result<(i32, i32), PointerError> {
        self.calls.borrow_mut().push(PointerCall::DisplaySize);
        Ok(self.display)
    }

    fn move_relative(&mut self, dx: i32, dy: i32) -> Result<(), PointerError> {
        let index = self.moves;
        self.moves += 1;
        if self.fail_move_at == Some(index) {
            return Err(PointerError::Move {
                dx,
                dy,
                message: "input backend went away".into(),
            });
        }
        self.calls.borrow_mut().push(PointerCall::Move { dx, dy });
        self.position = (self.position.0 + dx, self.position.1 + dy);
        Ok(())
    }
}
