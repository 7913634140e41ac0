//! Polynomial algebra and evaluation domains over the Goldilocks field.
//!
//! The transform in [`crate::ntt_goldilocks`] builds on these types to
//! accelerate multiplication; the AIR builder uses interpolation from here.

pub mod domain;
pub mod polynomial;
