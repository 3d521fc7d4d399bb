//! Built-in presets plus a builder for presets defined in configuration.

use crate::builder::{CarBuilder, CarParts};
use crate::config::CarSpec;

/// Presets built when nothing else is requested, in this order.
pub const DEFAULT_LINEUP: [&str; 4] = ["lanos", "probe", "patriot", "getz"];

#[derive(Debug, Default)]
pub struct LanosBuilder {
    parts: CarParts,
}

impl LanosBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for LanosBuilder {
    fn preset(&self) -> &str {
        "lanos"
    }

    fn parts(&self) -> &CarParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut CarParts {
        &mut self.parts
    }

    fn build_name(&mut self) {
        self.parts.name("Daewoo Lanos");
    }

    fn build_frame(&mut self) {
        self.parts.frame("Sedan");
    }

    fn build_transmission(&mut self) {
        self.parts.transmission("5 Manual");
    }

    fn build_engine(&mut self) {
        self.parts.engine(98);
    }

    fn build_wheels(&mut self) {
        self.parts.wheels(13);
    }
}

#[derive(Debug, Default)]
pub struct PatriotBuilder {
    parts: CarParts,
}

impl PatriotBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for PatriotBuilder {
    fn preset(&self) -> &str {
        "patriot"
    }

    fn parts(&self) -> &CarParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut CarParts {
        &mut self.parts
    }

    fn build_name(&mut self) {
        self.parts.name("UAZ Patriot");
    }

    fn build_frame(&mut self) {
        self.parts.frame("Universal");
    }

    fn build_transmission(&mut self) {
        self.parts.transmission("4 Manual");
    }

    fn build_engine(&mut self) {
        self.parts.engine(120);
    }

    fn build_wheels(&mut self) {
        self.parts.wheels(16);
    }
}

#[derive(Debug, Default)]
pub struct ProbeBuilder {
    parts: CarParts,
}

impl ProbeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for ProbeBuilder {
    fn preset(&self) -> &str {
        "probe"
    }

    fn parts(&self) -> &CarParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut CarParts {
        &mut self.parts
    }

    fn build_name(&mut self) {
        self.parts.name("Ford Probe");
    }

    fn build_frame(&mut self) {
        self.parts.frame("Cupe");
    }

    fn build_transmission(&mut self) {
        self.parts.transmission("4 Auto");
    }

    fn build_engine(&mut self) {
        self.parts.engine(160);
    }

    fn build_wheels(&mut self) {
        self.parts.wheels(14);
    }
}

#[derive(Debug, Default)]
pub struct GetzBuilder {
    parts: CarParts,
}

impl GetzBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarBuilder for GetzBuilder {
    fn preset(&self) -> &str {
        "getz"
    }

    fn parts(&self) -> &CarParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut CarParts {
        &mut self.parts
    }

    fn build_name(&mut self) {
        self.parts.name("Hyundai Getz");
    }

    fn build_frame(&mut self) {
        self.parts.frame("Hatchback");
    }

    fn build_transmission(&mut self) {
        self.parts.transmission("4 Auto");
    }

    fn build_engine(&mut self) {
        self.parts.engine(66);
    }

    fn build_wheels(&mut self) {
        self.parts.wheels(13);
    }
}

/// Builds whatever a [`CarSpec`] from a config file describes.
#[derive(Debug)]
pub struct SpecBuilder {
    spec: CarSpec,
    parts: CarParts,
}

impl SpecBuilder {
    /// The preset key is stored lowercased, matching how the catalog lists it.
    pub fn new(mut spec: CarSpec) -> Self {
        spec.key = spec.key.to_ascii_lowercase();
        Self {
            spec,
            parts: CarParts::new(),
        }
    }

    pub fn spec(&self) -> &CarSpec {
        &self.spec
    }
}

impl CarBuilder for SpecBuilder {
    fn preset(&self) -> &str {
        &self.spec.key
    }

    fn parts(&self) -> &CarParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut CarParts {
        &mut self.parts
    }

    fn build_name(&mut self) {
        self.parts.name(self.spec.name.clone());
    }

    fn build_frame(&mut self) {
        self.parts.frame(self.spec.frame.clone());
    }

    fn build_transmission(&mut self) {
        self.parts.transmission(self.spec.transmission.clone());
    }

    fn build_engine(&mut self) {
        self.parts.engine(self.spec.engine);
    }

    fn build_wheels(&mut self) {
        self.parts.wheels(self.spec.wheels);
    }
}

/// Fresh builders for [`DEFAULT_LINEUP`].
pub fn default_lineup() -> Vec<Box<dyn CarBuilder>> {
    vec![
        Box::new(LanosBuilder::new()),
        Box::new(ProbeBuilder::new()),
        Box::new(PatriotBuilder::new()),
        Box::new(GetzBuilder::new()),
    ]
}
