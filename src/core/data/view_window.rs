use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const HOME_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const HOME_DIAMETER: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewWindowError {
    NonPositiveDiameter { diameter: f64 },
    NonFiniteCenter { center: Complex },
}

impl fmt::Display for ViewWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDiameter { diameter } => {
                write!(f, "view diameter must be positive and finite: {}", diameter)
            }
            Self::NonFiniteCenter { center } => {
                write!(
                    f,
                    "view center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewWindowError {}

/// Square region of the complex plane shown on screen: `center` ± `diameter / 2`
/// on both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewWindow {
    center: Complex,
    diameter: f64,
}

impl ViewWindow {
    pub fn new(center: Complex, diameter: f64) -> Result<Self, ViewWindowError> {
        if !(diameter.is_finite() && diameter > 0.0) {
            return Err(ViewWindowError::NonPositiveDiameter { diameter });
        }

        if !center.is_finite() {
            return Err(ViewWindowError::NonFiniteCenter { center });
        }

        Ok(Self { center, diameter })
    }

    /// The full set: centered on `-0.5 + 0i` with a diameter of 3.
    #[must_use]
    pub const fn home() -> Self {
        Self {
            center: HOME_CENTER,
            diameter: HOME_DIAMETER,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn min_corner(&self) -> Complex {
        let half = self.diameter * 0.5;
        Complex::new(self.center.real - half, self.center.imag - half)
    }

    #[must_use]
    pub fn max_corner(&self) -> Complex {
        let half = self.diameter * 0.5;
        Complex::new(self.center.real + half, self.center.imag + half)
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::home()
    }
}
