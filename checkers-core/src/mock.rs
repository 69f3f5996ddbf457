//! Mock peripherals shared by the unit tests

use crate::traits::{
    AnalogInput, Axis, ButtonInput, DisplayDriver, DisplayError, InputError, Rgb565,
};

/// A drawing call recorded by [`MockDisplay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Rect {
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    },
}

/// Display that records every rectangle
pub struct MockDisplay {
    pub ops: Vec<DrawOp>,
    /// Fail with a bus error once this many ops have been recorded
    pub fail_after: Option<usize>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_after: None,
        }
    }

    pub fn covers(&self, px: u16, py: u16, color: Rgb565) -> bool {
        self.ops.iter().any(|op| {
            let DrawOp::Rect { x, y, w, h, color: c } = *op;
            c == color && px >= x && px < x + w && py >= y && py < y + h
        })
    }
}

impl DisplayDriver for MockDisplay {
    fn draw_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        if self.fail_after.is_some_and(|limit| self.ops.len() >= limit) {
            return Err(DisplayError::Bus);
        }
        self.ops.push(DrawOp::Rect { x, y, w, h, color });
        Ok(())
    }
}

/// Joystick held at a fixed deflection
pub struct MockJoystick {
    pub x: u16,
    pub y: u16,
    pub fail: bool,
}

impl MockJoystick {
    pub fn centred() -> Self {
        Self {
            x: 512,
            y: 512,
            fail: false,
        }
    }

    pub fn set(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }
}

impl AnalogInput for MockJoystick {
    fn read_axis(&mut self, axis: Axis) -> Result<u16, InputError> {
        if self.fail {
            return Err(InputError::Conversion);
        }
        Ok(match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        })
    }
}

/// Button with a settable level
#[derive(Default)]
pub struct MockButton {
    pub pressed: bool,
}

impl ButtonInput for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}
