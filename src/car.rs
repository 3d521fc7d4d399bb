use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully assembled car.
///
/// Every field is always set: the only ways to get one are [`Car::new`] and
/// [`CarParts::build`](crate::builder::CarParts::build), which refuses
/// incomplete records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    name: String,
    frame: String,
    transmission: String,
    engine: u32,
    wheels: u32,
}

impl Car {
    pub fn new(
        name: impl Into<String>,
        frame: impl Into<String>,
        transmission: impl Into<String>,
        engine: u32,
        wheels: u32,
    ) -> Self {
        Car {
            name: name.into(),
            frame: frame.into(),
            transmission: transmission.into(),
            engine,
            wheels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn transmission(&self) -> &str {
        &self.transmission
    }

    /// Engine power in horsepower.
    pub fn engine(&self) -> u32 {
        self.engine
    }

    /// Wheel (rim) size in inches.
    pub fn wheels(&self) -> u32 {
        self.wheels
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_frame(&mut self, frame: impl Into<String>) {
        self.frame = frame.into();
    }

    pub fn set_transmission(&mut self, transmission: impl Into<String>) {
        self.transmission = transmission.into();
    }

    pub fn set_engine(&mut self, engine: u32) {
        self.engine = engine;
    }

    pub fn set_wheels(&mut self, wheels: u32) {
        self.wheels = wheels;
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Frame: {}, Engine: {}, Wheels: {}, Transmission: {}",
            self.name, self.frame, self.engine, self.wheels, self.transmission
        )
    }
}
