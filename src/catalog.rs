use tracing::debug;

use crate::builder::CarBuilder;
use crate::config::CarSpec;
use crate::error::ShopError;
use crate::presets::{GetzBuilder, LanosBuilder, PatriotBuilder, ProbeBuilder, SpecBuilder};

type BuilderFactory = Box<dyn Fn() -> Box<dyn CarBuilder> + Send + Sync>;

/// Registry of presets, keyed case-insensitively.
///
/// Each lookup produces a fresh builder, so two cars from the same preset never
/// share in-progress parts.
#[derive(Default)]
pub struct Catalog {
    entries: Vec<(String, BuilderFactory)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A catalog holding the four built-in presets.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.insert("lanos", factory::<LanosBuilder>());
        catalog.insert("patriot", factory::<PatriotBuilder>());
        catalog.insert("probe", factory::<ProbeBuilder>());
        catalog.insert("getz", factory::<GetzBuilder>());
        catalog
    }

    fn insert(&mut self, key: &str, factory: BuilderFactory) {
        self.entries.push((key.to_ascii_lowercase(), factory));
    }

    pub fn register(
        &mut self,
        key: &str,
        factory: impl Fn() -> Box<dyn CarBuilder> + Send + Sync + 'static,
    ) -> Result<(), ShopError> {
        if self.contains(key) {
            return Err(ShopError::DuplicatePreset {
                key: key.to_string(),
            });
        }
        debug!(preset = key, "registering preset");
        self.insert(key, Box::new(factory));
        Ok(())
    }

    pub fn register_spec(&mut self, spec: CarSpec) -> Result<(), ShopError> {
        let key = spec.key.clone();
        self.register(&key, move || -> Box<dyn CarBuilder> {
            Box::new(SpecBuilder::new(spec.clone()))
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn builder(&self, key: &str) -> Result<Box<dyn CarBuilder>, ShopError> {
        match self.position(key) {
            Some(idx) => Ok((self.entries[idx].1)()),
            None => {
                let suggestion = find_similar_key(&key.to_ascii_lowercase(), self.keys());
                Err(ShopError::unknown_preset(key, suggestion))
            }
        }
    }

    /// Keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }
}

fn factory<B: CarBuilder + Default + 'static>() -> BuilderFactory {
    Box::new(|| -> Box<dyn CarBuilder> { Box::new(B::default()) })
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        curr[0] = i;
        for j in 1..=b_chars.len() {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest key within an edit distance of 2, if any.
pub fn find_similar_key<'a>(typo: &str, keys: impl Iterator<Item = &'a str>) -> Option<String> {
    const MAX_DISTANCE: usize = 2;

    keys.map(|key| (levenshtein_distance(typo, key), key))
        .filter(|(distance, _)| *distance <= MAX_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, key)| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn niva() -> CarSpec {
        CarSpec {
            key: "Niva".to_string(),
            name: "Lada Niva".to_string(),
            frame: "SUV".to_string(),
            transmission: "5 Manual".to_string(),
            engine: 83,
            wheels: 16,
        }
    }

    #[test]
    fn test_defaults_registered_in_order() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, ["lanos", "patriot", "probe", "getz"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::with_defaults();
        let builder = catalog.builder("PATRIOT").unwrap();
        assert_eq!(builder.preset(), "patriot");
        assert!(catalog.contains("Getz"));
    }

    #[test]
    fn test_each_lookup_returns_fresh_builder() {
        let catalog = Catalog::with_defaults();
        let mut first = catalog.builder("lanos").unwrap();
        first.build_name();
        let second = catalog.builder("lanos").unwrap();
        assert!(!second.parts().is_set(crate::builder::Part::Name));
    }

    #[test]
    fn test_unknown_preset_suggests_close_key() {
        let catalog = Catalog::with_defaults();
        match catalog.builder("lanso") {
            Err(ShopError::UnknownPreset { name, suggestion }) => {
                assert_eq!(name, "lanso");
                assert_eq!(suggestion.as_deref(), Some("lanos"));
            }
            other => panic!(
                "expected unknown preset, got {:?}",
                other.map(|b| b.preset().to_string())
            ),
        }
    }

    #[test]
    fn test_unknown_preset_without_suggestion() {
        let catalog = Catalog::with_defaults();
        match catalog.builder("tesla") {
            Err(ShopError::UnknownPreset { suggestion, .. }) => assert!(suggestion.is_none()),
            _ => panic!("expected unknown preset"),
        }
    }

    #[test]
    fn test_register_spec_and_build() {
        let mut catalog = Catalog::with_defaults();
        catalog.register_spec(niva()).unwrap();
        assert_eq!(catalog.keys().last(), Some("niva"));

        let builder = catalog.builder("NIVA").unwrap();
        assert_eq!(builder.preset(), "niva");
        assert_eq!(catalog.keys().filter(|k| *k == builder.preset()).count(), 1);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut catalog = Catalog::with_defaults();
        let mut spec = niva();
        spec.key = "Lanos".to_string();
        assert!(matches!(
            catalog.register_spec(spec),
            Err(ShopError::DuplicatePreset { key }) if key == "Lanos"
        ));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "getz"), 4);
        assert_eq!(levenshtein_distance("probe", ""), 5);
        assert_eq!(levenshtein_distance("probe", "probe"), 0);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("patriot", "patriots"), 1);
    }

    #[test]
    fn test_find_similar_key_prefers_closest() {
        let keys = ["probe", "prob", "lanos"];
        assert_eq!(
            find_similar_key("probe1", keys.iter().copied()),
            Some("probe".to_string())
        );
        assert_eq!(find_similar_key("zzzzzz", keys.iter().copied()), None);
    }
}
