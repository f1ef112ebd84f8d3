//! Core types shared across the burial-clock model

pub mod nuclide;
pub mod units;

pub use nuclide::{ClockSystem, Nuclide, NuclidePair};
pub use units::{
    AtomsPerGram, AtomsPerGramPerYear, MegaYears, PerYear, PerYearDelta, Ratio, Years,
};
