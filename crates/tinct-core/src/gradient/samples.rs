//! Sample gradient factories.
//!
//! Each function returns fresh data (fresh stop ids included) so sessions
//! never share state through a common constant.

use crate::color::token::ColorToken;
use crate::gradient::data::{GradientData, GradientShape};
use crate::gradient::geometry::UnitPoint;
use crate::gradient::stop::GradientStop;

fn stop(r: f32, g: f32, b: f32, location: f32) -> GradientStop {
    GradientStop::new(ColorToken::rgb(r / 255.0, g / 255.0, b / 255.0), location)
}

/// Plain black-to-white horizontal gradient, the session default.
pub fn default_gradient() -> GradientData {
    GradientData::new(
        "Gradient",
        vec![
            GradientStop::new(ColorToken::rgb(0.0, 0.0, 0.0), 0.0),
            GradientStop::new(ColorToken::rgb(1.0, 1.0, 1.0), 1.0),
        ],
        GradientShape::horizontal(),
    )
}

/// Pink-to-indigo radial sweep.
pub fn sunset() -> GradientData {
    GradientData::new(
        "Sunset",
        vec![stop(252.0, 70.0, 107.0, 0.0), stop(63.0, 94.0, 251.0, 1.0)],
        GradientShape::Radial {
            center: UnitPoint::CENTER,
            start_radius: 0.0,
            end_radius: 0.5,
        },
    )
}

/// Deep violet to pale blue, leading to trailing.
pub fn periwinkle() -> GradientData {
    GradientData::new(
        "Periwinkle",
        vec![stop(63.0, 43.0, 150.0, 0.0), stop(168.0, 192.0, 255.0, 1.0)],
        GradientShape::horizontal(),
    )
}

/// Seven-stop spectral wheel for the angular picker.
pub fn rainbow() -> GradientData {
    GradientData::new(
        "Rainbow",
        vec![
            stop(148.0, 0.0, 211.0, 0.0),
            stop(75.0, 0.0, 130.0, 0.16),
            stop(0.0, 0.0, 255.0, 0.32),
            stop(0.0, 255.0, 0.0, 0.48),
            stop(255.0, 255.0, 0.0, 0.65),
            stop(255.0, 127.0, 0.0, 0.81),
            stop(255.0, 0.0, 0.0, 0.97),
        ],
        GradientShape::Angular {
            center: UnitPoint::CENTER,
            start_angle: 0.0,
            end_angle: 0.95,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_return_fresh_ids() {
        let a = rainbow();
        let b = rainbow();
        for (left, right) in a.stops.iter().zip(&b.stops) {
            assert_ne!(left.id(), right.id());
            assert_eq!(left.color, right.color);
            assert_eq!(left.location, right.location);
        }
    }

    #[test]
    fn test_rainbow_is_angular_with_seven_stops() {
        let g = rainbow();
        assert_eq!(g.stops.len(), 7);
        assert!(matches!(g.shape, GradientShape::Angular { .. }));
    }

    #[test]
    fn test_default_gradient_spans_black_to_white() {
        let g = default_gradient();
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.sample(0.0), ColorToken::rgb(0.0, 0.0, 0.0));
        assert_eq!(g.sample(1.0), ColorToken::rgb(1.0, 1.0, 1.0));
    }
}
