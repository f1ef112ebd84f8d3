//! Cosmogenic Burial-Clock Core Library
//!
//! A deterministic simulator for synthetic cosmogenic-nuclide
//! concentration-ratio histories (26Al/10Be and 36Cl/10Be) under alternating
//! burial and surface-exposure conditions.
//!
//! ## Model
//!
//! - Exact closed-form per-step updates of the burial/exposure ODEs: the
//!   step size controls sampling density only, never numerical error
//! - Caller-supplied segment programs drive all phase changes
//! - Explicit clock-system configuration, no process-wide constants
//! - An absolute-inventory companion model derives realistic starting
//!   ratios from a finite baseline exposure

// Core types and utilities
pub mod core_types;

// Scenario description and validation
pub mod scenario;

// Ratio evolution and inventory simulators
pub mod simulation;

// CSV/JSON trajectory export
pub mod export;

// Re-export core types
pub use core_types::{ClockSystem, Nuclide, NuclidePair};
pub use core_types::{MegaYears, PerYear, PerYearDelta, Ratio, Years};

// Re-export scenario and simulator types
pub use scenario::{InitialRatios, Phase, Scenario, ScenarioError, Segment};
pub use simulation::concentration::{baseline_initial_ratios, Inventory};
pub use simulation::{
    apparent_burial_age, RatioSimulator, RecordStatus, Trajectory, TrajectoryRecord,
};

// Re-export export entry points
pub use export::{load_json, save_json, write_csv, write_csv_to_path, ExportError};
