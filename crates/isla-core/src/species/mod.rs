//! Extinct species domain module.

mod model;
mod repository;

pub use model::{AnimationHint, DEFAULT_PALETTE, ExtinctSpecies, SpeciesCategory};
pub use repository::SpeciesRepository;
