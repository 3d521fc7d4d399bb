use std::fmt;

use crate::car::Car;
use crate::error::ShopError;

/// One step of car assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Name,
    Frame,
    Transmission,
    Engine,
    Wheels,
}

impl Part {
    /// The order in which the shop runs the build steps.
    pub const ORDER: [Part; 5] = [
        Part::Name,
        Part::Frame,
        Part::Transmission,
        Part::Engine,
        Part::Wheels,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Part::Name => "name",
            Part::Frame => "frame",
            Part::Transmission => "transmission",
            Part::Engine => "engine",
            Part::Wheels => "wheels",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A car under construction. Parts stay `None` until their step runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarParts {
    name: Option<String>,
    frame: Option<String>,
    transmission: Option<String>,
    engine: Option<u32>,
    wheels: Option<u32>,
}

impl CarParts {
    pub fn new() -> Self {
        CarParts::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn frame(&mut self, frame: impl Into<String>) -> &mut Self {
        self.frame = Some(frame.into());
        self
    }

    pub fn transmission(&mut self, transmission: impl Into<String>) -> &mut Self {
        self.transmission = Some(transmission.into());
        self
    }

    pub fn engine(&mut self, engine: u32) -> &mut Self {
        self.engine = Some(engine);
        self
    }

    pub fn wheels(&mut self, wheels: u32) -> &mut Self {
        self.wheels = Some(wheels);
        self
    }

    pub fn is_set(&self, part: Part) -> bool {
        match part {
            Part::Name => self.name.is_some(),
            Part::Frame => self.frame.is_some(),
            Part::Transmission => self.transmission.is_some(),
            Part::Engine => self.engine.is_some(),
            Part::Wheels => self.wheels.is_some(),
        }
    }

    /// First part, in step order, that has not been built yet.
    pub fn missing(&self) -> Option<Part> {
        Part::ORDER.into_iter().find(|part| !self.is_set(*part))
    }

    // Borrows, so a builder can hand out its car any number of times.
    pub fn build(&self) -> Result<Car, ShopError> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| ShopError::missing_part(Part::Name))?;
        let frame = self
            .frame
            .clone()
            .ok_or_else(|| ShopError::missing_part(Part::Frame))?;
        let transmission = self
            .transmission
            .clone()
            .ok_or_else(|| ShopError::missing_part(Part::Transmission))?;
        let engine = self
            .engine
            .ok_or_else(|| ShopError::missing_part(Part::Engine))?;
        let wheels = self
            .wheels
            .ok_or_else(|| ShopError::missing_part(Part::Wheels))?;

        Ok(Car::new(name, frame, transmission, engine, wheels))
    }

    pub fn reset(&mut self) {
        *self = CarParts::default();
    }
}

/// A step provider for [`Shop`](crate::shop::Shop).
///
/// Implementors decide *what* goes into each part; the shop decides the order
/// in which the steps run. The provided `car` and `reset` methods work on the
/// [`CarParts`] the builder exposes.
pub trait CarBuilder {
    /// Lookup key of the preset this builder produces, e.g. `"lanos"`.
    fn preset(&self) -> &str;

    fn parts(&self) -> &CarParts;
    fn parts_mut(&mut self) -> &mut CarParts;

    fn build_name(&mut self);
    fn build_frame(&mut self);
    fn build_transmission(&mut self);
    fn build_engine(&mut self);
    fn build_wheels(&mut self);

    fn car(&self) -> Result<Car, ShopError> {
        self.parts().build()
    }

    fn reset(&mut self) {
        self.parts_mut().reset();
    }
}
