use crate::core::data::view_window::ViewWindow;
use std::error::Error;
use std::fmt;

pub const ZOOM_IN_FACTOR: f64 = 0.75;
pub const ZOOM_OUT_FACTOR: f64 = 1.33;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationSettingsError {
    InvalidZoomFactor { factor: f64 },
    InvalidDiameterBounds { min: f64, max: f64 },
    HomeOutsideBounds { diameter: f64 },
}

impl fmt::Display for NavigationSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite: {}", factor)
            }
            Self::InvalidDiameterBounds { min, max } => {
                write!(
                    f,
                    "diameter bounds must satisfy 0 < min <= max < inf: [{}, {}]",
                    min, max
                )
            }
            Self::HomeOutsideBounds { diameter } => {
                write!(f, "home diameter {} lies outside the diameter bounds", diameter)
            }
        }
    }
}

impl Error for NavigationSettingsError {}

/// Tunables for the view controller.
///
/// The diameter bounds default to the full positive range of `f64`, which only
/// guards against underflow to zero and overflow to infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub home: ViewWindow,
    pub min_diameter: f64,
    pub max_diameter: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            home: ViewWindow::home(),
            min_diameter: f64::MIN_POSITIVE,
            max_diameter: f64::MAX,
        }
    }
}

impl NavigationSettings {
    pub fn validate(&self) -> Result<(), NavigationSettingsError> {
        for factor in [self.zoom_in_factor, self.zoom_out_factor] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(NavigationSettingsError::InvalidZoomFactor { factor });
            }
        }

        let (min, max) = (self.min_diameter, self.max_diameter);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(NavigationSettingsError::InvalidDiameterBounds { min, max });
        }

        let home = self.home.diameter();
        if home < min || home > max {
            return Err(NavigationSettingsError::HomeOutsideBounds { diameter: home });
        }

        Ok(())
    }

    /// Clamps `diameter` into the configured bounds, reporting whether it moved.
    #[must_use]
    pub fn clamp_diameter(&self, diameter: f64) -> (f64, bool) {
        let clamped = diameter.clamp(self.min_diameter, self.max_diameter);
        (clamped, clamped != diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn default_settings_are_valid() {
        let settings = NavigationSettings::default();

        assert_eq!(settings.zoom_in_factor, 0.75);
        assert_eq!(settings.zoom_out_factor, 1.33);
        assert_eq!(settings.home, ViewWindow::home());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn non_positive_zoom_factor_is_rejected() {
        let settings = NavigationSettings {
            zoom_in_factor: 0.0,
            ..NavigationSettings::default()
        };

        assert_eq!(
            settings.validate(),
            Err(NavigationSettingsError::InvalidZoomFactor { factor: 0.0 })
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let settings = NavigationSettings {
            min_diameter: 2.0,
            max_diameter: 1.0,
            ..NavigationSettings::default()
        };

        assert_eq!(
            settings.validate(),
            Err(NavigationSettingsError::InvalidDiameterBounds { min: 2.0, max: 1.0 })
        );
    }

    #[test]
    fn home_must_fit_bounds() {
        let settings = NavigationSettings {
            home: ViewWindow::new(Complex::ZERO, 10.0).unwrap(),
            max_diameter: 5.0,
            ..NavigationSettings::default()
        };

        assert_eq!(
            settings.validate(),
            Err(NavigationSettingsError::HomeOutsideBounds { diameter: 10.0 })
        );
    }

    #[test]
    fn clamp_reports_only_real_changes() {
        let settings = NavigationSettings {
            min_diameter: 1e-10,
            max_diameter: 10.0,
            ..NavigationSettings::default()
        };

        assert_eq!(settings.clamp_diameter(3.0), (3.0, false));
        assert_eq!(settings.clamp_diameter(1e-12), (1e-10, true));
        assert_eq!(settings.clamp_diameter(f64::INFINITY), (10.0, true));
    }
}
