use tracing::{debug, info};

use crate::builder::{CarBuilder, Part};
use crate::car::Car;
use crate::error::ShopError;

/// Runs a builder's steps in a fixed order.
///
/// The shop owns the sequence, the builder owns the values. Swapping the
/// builder changes which car comes out without touching the sequence.
pub struct Shop {
    builder: Box<dyn CarBuilder>,
}

impl Shop {
    pub fn new(builder: Box<dyn CarBuilder>) -> Self {
        Self { builder }
    }

    /// Replaces the builder and hands back the previous one.
    pub fn set_builder(&mut self, builder: Box<dyn CarBuilder>) -> Box<dyn CarBuilder> {
        std::mem::replace(&mut self.builder, builder)
    }

    pub fn builder(&self) -> &dyn CarBuilder {
        self.builder.as_ref()
    }

    pub fn construct_car(&mut self) {
        self.builder.reset();
        for part in Part::ORDER {
            debug!(preset = self.builder.preset(), step = %part, "running build step");
            match part {
                Part::Name => self.builder.build_name(),
                Part::Frame => self.builder.build_frame(),
                Part::Transmission => self.builder.build_transmission(),
                Part::Engine => self.builder.build_engine(),
                Part::Wheels => self.builder.build_wheels(),
            }
        }
    }

    pub fn car(&self) -> Result<Car, ShopError> {
        self.builder.car()
    }

    pub fn assemble(&mut self) -> Result<Car, ShopError> {
        self.construct_car();
        let car = self.car()?;
        info!(preset = self.builder.preset(), car = car.name(), "car assembled");
        Ok(car)
    }
}

/// Assembles one car per builder, in order, through a single shop.
pub fn build_lineup(builders: Vec<Box<dyn CarBuilder>>) -> Result<Vec<Car>, ShopError> {
    let mut builders = builders.into_iter();
    let Some(first) = builders.next() else {
        return Ok(Vec::new());
    };

    let mut shop = Shop::new(first);
    let mut cars = vec![shop.assemble()?];
    for builder in builders {
        shop.set_builder(builder);
        cars.push(shop.assemble()?);
    }
    Ok(cars)
}
