//! # car-shop
//!
//! Assembles cars with the builder pattern: a [`Shop`] runs a fixed sequence
//! of build steps against whichever [`CarBuilder`] it is given.
//!
//! ## Pieces
//!
//! 1. **Product**: [`Car`], five plain fields with accessors.
//! 2. **Builders**: [`CarBuilder`] plus the four built-in presets in
//!    [`presets`] and a [`SpecBuilder`] fed from configuration.
//! 3. **Director**: [`Shop`], which owns the step order
//!    (name, frame, transmission, engine, wheels).
//! 4. **Catalog**: [`Catalog`], lookup of builders by preset key.
//!
//! ```
//! use car_shop::{LanosBuilder, Shop};
//!
//! let mut shop = Shop::new(Box::new(LanosBuilder::new()));
//! let car = shop.assemble().unwrap();
//! assert_eq!(
//!     car.to_string(),
//!     "Name: Daewoo Lanos, Frame: Sedan, Engine: 98, Wheels: 13, Transmission: 5 Manual"
//! );
//! ```

pub mod builder;
pub mod car;
pub mod catalog;
pub mod config;
pub mod error;
pub mod presets;
pub mod report;
pub mod shop;

pub use builder::{CarBuilder, CarParts, Part};
pub use car::Car;
pub use catalog::Catalog;
pub use config::{CarSpec, ShopConfig};
pub use error::ShopError;
pub use presets::{
    default_lineup, GetzBuilder, LanosBuilder, PatriotBuilder, ProbeBuilder, SpecBuilder,
    DEFAULT_LINEUP,
};
pub use report::Format;
pub use shop::{build_lineup, Shop};
