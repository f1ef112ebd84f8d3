//! Semantic unit types for type-safe geochronological quantity handling
//!
//! This module provides newtype wrappers for the physical quantities used by
//! the burial-clock model to prevent accidental mixing of incompatible units
//! (e.g., years with megayears, or a decay constant with a ratio).
//!
//! # Design Philosophy
//! - All types use f64: decay exponents over Myr timescales need the precision
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Provides explicit conversion methods between related types
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled via `total_cmp`)
//! - Private inner fields with validated constructors
//!
//! # Usage
//! ```
//! use cosmo_clock_core::core_types::units::{MegaYears, Years};
//!
//! let half_life = MegaYears::new(1.4).to_years();
//! assert!((half_life.value() - 1.4e6).abs() < 1e-6);
//!
//! // Use standard min/max from Ord trait
//! let t1 = Years::new(5_000.0);
//! let t2 = Years::new(10_000.0);
//! assert_eq!(t1.min(t2), Years::new(5_000.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Div, Mul, Neg, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TIME TYPES
// ============================================================================

/// Time duration in years
///
/// The model's base time unit: decay constants are per-year, step sizes and
/// segment durations are years.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Years(f64);

impl Eq for Years {}

impl PartialOrd for Years {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Years {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Years {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Years {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Years {
    /// Years per megayear conversion factor
    const YEARS_PER_MEGAYEAR: f64 = 1.0e6;

    /// Create a new duration in years. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Years::new: negative duration is invalid");
        Years(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative duration).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Years(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to megayears
    #[inline]
    #[must_use]
    pub fn to_megayears(self) -> MegaYears {
        MegaYears(self.0 / Self::YEARS_PER_MEGAYEAR)
    }
}

impl From<f64> for Years {
    fn from(v: f64) -> Self {
        Years::new(v)
    }
}

impl From<Years> for f64 {
    fn from(y: Years) -> f64 {
        y.0
    }
}

impl Add for Years {
    type Output = Years;
    fn add(self, rhs: Years) -> Years {
        Years(self.0 + rhs.0)
    }
}

impl AddAssign for Years {
    fn add_assign(&mut self, rhs: Years) {
        self.0 += rhs.0;
    }
}

impl Sub for Years {
    type Output = Years;
    fn sub(self, rhs: Years) -> Years {
        let result = self.0 - rhs.0;
        assert!(result >= 0.0, "Negative duration: {result:.1} yr");
        Years(result)
    }
}

impl Mul<f64> for Years {
    type Output = Years;
    fn mul(self, rhs: f64) -> Years {
        Years(self.0 * rhs)
    }
}

impl Div<f64> for Years {
    type Output = Years;
    fn div(self, rhs: f64) -> Years {
        Years(self.0 / rhs)
    }
}

// Cross-type operation: duration / duration = dimensionless step count
impl Div for Years {
    type Output = f64;
    fn div(self, rhs: Years) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Years {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} yr", self.0)
    }
}

/// Time duration in megayears (Myr)
///
/// Display/interface unit: the exported time column and the demo's duration
/// arguments are megayears.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MegaYears(f64);

impl Eq for MegaYears {}

impl PartialOrd for MegaYears {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MegaYears {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MegaYears {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MegaYears {
    /// Create a new duration in megayears. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "MegaYears::new: negative duration is invalid");
        MegaYears(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative duration).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        MegaYears(value)
    }

    /// Convert to years
    #[inline]
    #[must_use]
    pub fn to_years(self) -> Years {
        Years::new(self.0 * Years::YEARS_PER_MEGAYEAR)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<MegaYears> for Years {
    fn from(m: MegaYears) -> Years {
        m.to_years()
    }
}

impl From<Years> for MegaYears {
    fn from(y: Years) -> MegaYears {
        y.to_megayears()
    }
}

impl From<f64> for MegaYears {
    fn from(v: f64) -> Self {
        MegaYears::new(v)
    }
}

impl Add for MegaYears {
    type Output = MegaYears;
    fn add(self, rhs: MegaYears) -> MegaYears {
        MegaYears(self.0 + rhs.0)
    }
}

impl Mul<f64> for MegaYears {
    type Output = MegaYears;
    fn mul(self, rhs: f64) -> MegaYears {
        MegaYears(self.0 * rhs)
    }
}

impl fmt::Display for MegaYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} Myr", self.0)
    }
}

// ============================================================================
// DECAY CONSTANT TYPES
// ============================================================================

/// Radioactive decay constant in 1/years (λ = ln 2 / t½)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PerYear(f64);

impl Eq for PerYear {}

impl PartialOrd for PerYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PerYear {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for PerYear {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl PerYear {
    /// Create a new decay constant. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "PerYear::new: negative decay constant is invalid"
        );
        PerYear(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative rate).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        PerYear(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<PerYear> for f64 {
    fn from(r: PerYear) -> f64 {
        r.0
    }
}

// PerYear - PerYear = PerYearDelta (difference of two decay constants)
impl Sub for PerYear {
    type Output = PerYearDelta;
    fn sub(self, rhs: PerYear) -> PerYearDelta {
        // Result is a delta - can be any sign
        PerYearDelta(self.0 - rhs.0)
    }
}

// Cross-type operation: rate × time = dimensionless decay exponent
impl Mul<Years> for PerYear {
    type Output = f64;
    fn mul(self, rhs: Years) -> f64 {
        self.0 * rhs.0
    }
}

impl fmt::Display for PerYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4e} /yr", self.0)
    }
}

/// Signed difference between two decay constants in 1/years
///
/// The burial-clock equations are driven by `λ_tracked − λ_reference`, which
/// is positive whenever the tracked nuclide decays faster than the reference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PerYearDelta(f64);

impl Eq for PerYearDelta {}

impl PartialOrd for PerYearDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PerYearDelta {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for PerYearDelta {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl PerYearDelta {
    /// Create a decay-constant delta (can be any value, positive or negative)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        PerYearDelta(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute value of the delta
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        PerYearDelta(self.0.abs())
    }
}

impl Neg for PerYearDelta {
    type Output = PerYearDelta;
    fn neg(self) -> PerYearDelta {
        PerYearDelta(-self.0)
    }
}

// Cross-type operation: rate delta × time = dimensionless decay exponent
impl Mul<Years> for PerYearDelta {
    type Output = f64;
    fn mul(self, rhs: Years) -> f64 {
        self.0 * rhs.0
    }
}

impl fmt::Display for PerYearDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.4e} /yr", self.0)
    }
}

// ============================================================================
// RATIO / INVENTORY TYPES
// ============================================================================

/// Dimensionless concentration ratio of a tracked nuclide to the reference
/// nuclide (e.g., 26Al/10Be)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Ratio(f64);

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Ratio {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Ratio {
    /// Create a new concentration ratio. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Ratio::new: negative ratio is invalid");
        Ratio(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative ratio).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Ratio(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Ratio> for f64 {
    fn from(r: Ratio) -> f64 {
        r.0
    }
}

impl PartialEq<f64> for Ratio {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for Ratio {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Nuclide inventory in atoms per gram of quartz
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AtomsPerGram(f64);

impl Eq for AtomsPerGram {}

impl PartialOrd for AtomsPerGram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AtomsPerGram {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for AtomsPerGram {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl AtomsPerGram {
    /// Create a new inventory. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "AtomsPerGram::new: negative inventory is invalid"
        );
        AtomsPerGram(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<AtomsPerGram> for f64 {
    fn from(n: AtomsPerGram) -> f64 {
        n.0
    }
}

impl fmt::Display for AtomsPerGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3e} atoms/g", self.0)
    }
}

/// Surface production rate in atoms per gram per year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AtomsPerGramPerYear(f64);

impl Eq for AtomsPerGramPerYear {}

impl PartialOrd for AtomsPerGramPerYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AtomsPerGramPerYear {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for AtomsPerGramPerYear {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl AtomsPerGramPerYear {
    /// Create a new production rate. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "AtomsPerGramPerYear::new: negative production rate is invalid"
        );
        AtomsPerGramPerYear(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<AtomsPerGramPerYear> for f64 {
    fn from(p: AtomsPerGramPerYear) -> f64 {
        p.0
    }
}

impl Mul<f64> for AtomsPerGramPerYear {
    type Output = AtomsPerGramPerYear;
    fn mul(self, rhs: f64) -> AtomsPerGramPerYear {
        AtomsPerGramPerYear(self.0 * rhs)
    }
}

impl fmt::Display for AtomsPerGramPerYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} atoms/g/yr", self.0)
    }
}
