//! Trait holders
//!
//! `TraitHolder` starts every instance with the same single trait.
//! `ExtendedTraitHolder` owns a `TraitHolder` and appends caller-supplied
//! traits on top of it when constructed.

use serde::Serialize;

use super::render::render_list;

/// The trait every holder starts with
pub const BASE_TRAIT: &str = "flight";

/// Prefix of the rendered description
pub const DESCRIPTION_PREFIX: &str = "Superpowers";

/// Anything that holds an ordered list of traits and can print it
pub trait Describe {
    /// Current traits, in insertion order
    fn traits(&self) -> &[String];

    /// Render the current traits, e.g. `Superpowers ['flight']`
    fn describe(&self) -> String {
        format!("{} {}", DESCRIPTION_PREFIX, render_list(self.traits()))
    }

    /// Write the description to stdout
    fn print(&self) {
        println!("{}", self.describe());
    }
}

/// Base holder with a fixed starting trait
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitHolder {
    traits: Vec<String>,
}

impl TraitHolder {
    pub fn new() -> Self {
        Self {
            traits: vec![BASE_TRAIT.to_string()],
        }
    }

    /// Append labels in order; no validation is applied
    pub fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits.extend(labels.into_iter().map(Into::into));
    }
}

impl Default for TraitHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl Describe for TraitHolder {
    fn traits(&self) -> &[String] {
        &self.traits
    }
}

/// Holder that composes a `TraitHolder` and adds its own traits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedTraitHolder {
    #[serde(flatten)]
    base: TraitHolder,
}

impl ExtendedTraitHolder {
    /// Build the base holder, then append `additional_traits` in order
    pub fn new<I, S>(additional_traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut base = TraitHolder::new();
        base.extend(additional_traits);
        log::debug!("Built extended holder with {} traits", base.traits().len());
        Self { base }
    }

    #[allow(dead_code)]
    pub fn base(&self) -> &TraitHolder {
        &self.base
    }

    #[allow(dead_code)]
    pub fn base_mut(&mut self) -> &mut TraitHolder {
        &mut self.base
    }
}

impl Default for ExtendedTraitHolder {
    // Fresh empty sequence per instance
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl Describe for ExtendedTraitHolder {
    fn traits(&self) -> &[String] {
        self.base.traits()
    }

    fn describe(&self) -> String {
        self.base.describe()
    }
}
