//! Escape-time classification of a single point `c`.
//!
//! Points inside the main cardioid or the period-2 bulb are recognised in
//! closed form and never iterated. Everything else runs `z ← z² + c` from
//! `z = 0` until `|z|² > 16` or the iteration cap is reached.
//!
//! The bailout of 16 (`|z| > 4`) is wider than the minimal 4 so the smoothed
//! count below stays free of visible bands.

use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 16.0;

/// Outcome of running the iteration loop for one point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationResult {
    pub escaped: bool,
    pub iteration_count: u32,
    pub final_magnitude_squared: f64,
}

impl IterationResult {
    /// Continuous escape-time estimate `n − log2(log2(|z|²)) + 4`.
    ///
    /// `None` for points that never escaped.
    #[must_use]
    pub fn smooth_iteration_count(&self) -> Option<f64> {
        if !self.escaped {
            return None;
        }

        Some(f64::from(self.iteration_count) - self.final_magnitude_squared.log2().log2() + 4.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointClass {
    /// Inside the main cardioid; no iterations were run.
    MainCardioid,
    /// Inside the period-2 bulb around `-1`; no iterations were run.
    PeriodTwoBulb,
    Iterated(IterationResult),
}

impl PointClass {
    /// True for every point drawn black.
    #[must_use]
    pub fn is_interior(&self) -> bool {
        match self {
            Self::MainCardioid | Self::PeriodTwoBulb => true,
            Self::Iterated(result) => !result.escaped,
        }
    }

    #[must_use]
    pub fn smooth_iteration_count(&self) -> Option<f64> {
        match self {
            Self::Iterated(result) => result.smooth_iteration_count(),
            Self::MainCardioid | Self::PeriodTwoBulb => None,
        }
    }
}

#[must_use]
pub fn in_main_cardioid(c: Complex) -> bool {
    let c2 = c.magnitude_squared();
    256.0 * c2 * c2 - 96.0 * c2 + 32.0 * c.real - 3.0 < 0.0
}

#[must_use]
pub fn in_period_two_bulb(c: Complex) -> bool {
    let c2 = c.magnitude_squared();
    16.0 * (c2 + 2.0 * c.real + 1.0) - 1.0 < 0.0
}

#[must_use]
pub fn iterate(c: Complex, max_iterations: u32) -> IterationResult {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            break;
        }
        z = z.square() + c;
        iteration += 1;
    }

    IterationResult {
        escaped: iteration < max_iterations,
        iteration_count: iteration,
        final_magnitude_squared: z.magnitude_squared(),
    }
}

#[must_use]
pub fn classify_point(c: Complex, max_iterations: u32) -> PointClass {
    if in_main_cardioid(c) {
        return PointClass::MainCardioid;
    }

    if in_period_two_bulb(c) {
        return PointClass::PeriodTwoBulb;
    }

    PointClass::Iterated(iterate(c, max_iterations))
}
