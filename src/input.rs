//! Controller input
//!
//! The simulation never talks to hardware. A device only has to report
//! analog axes and digital buttons by index; `Controller` maps those onto a
//! `TickInput` using the configured `ControlMap`.

use glam::Vec2;

use crate::config::ControlMap;
use crate::error::ArenaError;
use crate::sim::{Level, TickInput};

/// A pollable game controller. Polling must never block.
pub trait InputSource {
    fn name(&self) -> &str;

    /// Axis position in [-1, 1]; unknown axes read as 0
    fn axis(&self, index: usize) -> f32;

    /// Button state; unknown buttons read as released
    fn button(&self, index: usize) -> bool;

    /// Called with the current level before each poll. Hardware ignores it.
    fn observe(&mut self, _level: &Level) {}
}

/// An opened device plus its axis/button mapping
#[derive(Debug)]
pub struct Controller<D> {
    device: D,
    map: ControlMap,
}

impl<D: InputSource> Controller<D> {
    /// Open device `index` out of the detected `devices`.
    ///
    /// Fails when nothing is attached or the index is out of range; both are
    /// fatal at startup.
    pub fn open(devices: Vec<D>, index: usize, map: ControlMap) -> Result<Self, ArenaError> {
        if devices.is_empty() {
            return Err(ArenaError::NoInputDevice);
        }
        let available = devices.len();
        let device = devices
            .into_iter()
            .nth(index)
            .ok_or(ArenaError::DeviceOutOfRange { index, available })?;

        log::info!("Using controller {index}: {}", device.name());
        Ok(Self { device, map })
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn observe(&mut self, level: &Level) {
        self.device.observe(level);
    }

    /// Read the device into a tick's worth of input
    pub fn poll(&self) -> TickInput {
        TickInput {
            movement: Vec2::new(self.read_axis(self.map.move_x), self.read_axis(self.map.move_y)),
            aim: Vec2::new(self.read_axis(self.map.aim_x), self.read_axis(self.map.aim_y)),
            fire: self.device.button(self.map.fire),
        }
    }

    fn read_axis(&self, index: usize) -> f32 {
        let value = self.device.axis(index);
        if value.is_nan() { 0.0 } else { value.clamp(-1.0, 1.0) }
    }
}

pub const PAD_AXES: usize = 6;
pub const PAD_BUTTONS: usize = 16;

/// In-memory controller whose state is set directly
#[derive(Debug, Clone)]
pub struct VirtualPad {
    pub name: String,
    pub axes: [f32; PAD_AXES],
    pub buttons: [bool; PAD_BUTTONS],
}

impl VirtualPad {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            axes: [0.0; PAD_AXES],
            buttons: [false; PAD_BUTTONS],
        }
    }

    pub fn set_axis(&mut self, index: usize, value: f32) {
        if let Some(axis) = self.axes.get_mut(index) {
            *axis = value;
        }
    }

    pub fn set_button(&mut self, index: usize, pressed: bool) {
        if let Some(button) = self.buttons.get_mut(index) {
            *button = pressed;
        }
    }

    /// Center both sticks and release every button
    pub fn reset(&mut self) {
        self.axes = [0.0; PAD_AXES];
        self.buttons = [false; PAD_BUTTONS];
    }
}

impl InputSource for VirtualPad {
    fn name(&self) -> &str {
        &self.name
    }

    fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }
}
