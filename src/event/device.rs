//! Input-device events yang mengisi Object lewat `Populate`.

use std::fmt;

use crate::core::Result;
use crate::protocol::{Object, Primitive};

/// Producer yang menambahkan child nodes ke Object.
///
/// Encoder tidak tahu struktur producer; satu-satunya kontrak adalah
/// `add_entity` pada Object yang diberikan.
pub trait Populate {
    fn populate(&self, object: &mut Object) -> Result<()>;
}

#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Keyboard = 1,
    Mouse = 2,
    Touchpad = 3,
    Joystick = 4,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceType::Keyboard => "KEYBOARD",
            DeviceType::Mouse => "MOUSE",
            DeviceType::Touchpad => "TOUCHPAD",
            DeviceType::Joystick => "JOYSTICK",
        };
        f.write_str(name)
    }
}

pub trait Event: Populate + fmt::Debug {
    fn device_type(&self) -> DeviceType;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key_code: i16,
    pub pressed: bool,
    pub released: bool,
}

impl KeyboardEvent {
    pub fn new(key_code: i16, pressed: bool, released: bool) -> Self {
        Self {
            key_code,
            pressed,
            released,
        }
    }
}

impl Event for KeyboardEvent {
    fn device_type(&self) -> DeviceType {
        DeviceType::Keyboard
    }
}

impl Populate for KeyboardEvent {
    fn populate(&self, object: &mut Object) -> Result<()> {
        object.add_entity(Primitive::create("device", self.device_type() as i8)?)?;
        object.add_entity(Primitive::create("keyCode", self.key_code)?)?;
        object.add_entity(Primitive::create("pressed", self.pressed)?)?;
        object.add_entity(Primitive::create("released", self.released)?)?;
        Ok(())
    }
}
