//! Superpower holders
//!
//! A base holder owns an ordered list of trait labels. The extended holder
//! composes a base holder and appends extra labels at construction.

pub mod holder;
pub mod render;

pub use holder::{Describe, ExtendedTraitHolder, TraitHolder};
