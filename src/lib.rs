//! codecmap: legacy label normalization for media transcoding pipelines.
//!
//! Older presets and user-facing settings stored codec, mixdown, and
//! container choices as free-form labels with several historical spellings.
//! This crate maps those labels onto the canonical enums the pipeline
//! operates on ([`model`]) and formats canonical values back into the short
//! machine tokens the pipeline command surface expects ([`normalize`]).

pub mod cli;
pub mod model;
pub mod normalize;
