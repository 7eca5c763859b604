//! The gradient aggregate: named stop collection plus shape metadata.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::token::ColorToken;
use crate::gradient::geometry::UnitPoint;
use crate::gradient::stop::{GradientStop, StopId};

/// Geometry of the gradient's parametrized axis.
///
/// Radii are in unit-square lengths; angles are in fractions of a full turn,
/// measured clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GradientShape {
    Linear {
        start: UnitPoint,
        end: UnitPoint,
    },
    Radial {
        center: UnitPoint,
        start_radius: f32,
        end_radius: f32,
    },
    Angular {
        center: UnitPoint,
        start_angle: f32,
        end_angle: f32,
    },
}

impl GradientShape {
    /// Leading-to-trailing linear axis, the default picker shape.
    pub const fn horizontal() -> Self {
        Self::Linear {
            start: UnitPoint::LEADING,
            end: UnitPoint::TRAILING,
        }
    }

    /// Direction of a linear axis in unit space; `None` for the other
    /// variants and for degenerate (zero-length) axes.
    pub fn axis(&self) -> Option<Vec2> {
        match self {
            Self::Linear { start, end } => {
                let dir = end.as_vec2() - start.as_vec2();
                (dir != Vec2::ZERO).then(|| dir.normalize())
            }
            _ => None,
        }
    }
}

/// A named, ordered collection of gradient stops plus shape metadata.
///
/// Insertion order of `stops` is paint order; stops are NOT kept sorted by
/// location. Sorting happens only transiently inside [`GradientData::sample`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientData {
    pub name: String,
    pub stops: Vec<GradientStop>,
    pub shape: GradientShape,
}

impl GradientData {
    /// Builds a gradient, seeding a single default stop when `stops` is
    /// empty so the one-stop floor holds from the start.
    pub fn new(name: impl Into<String>, stops: Vec<GradientStop>, shape: GradientShape) -> Self {
        let stops = if stops.is_empty() {
            vec![GradientStop::new(ColorToken::default(), 0.0)]
        } else {
            stops
        };
        Self {
            name: name.into(),
            stops,
            shape,
        }
    }

    /// Looks up a stop by id with a linear scan. Stop counts are tens at
    /// most, so no index is kept.
    pub fn stop(&self, id: StopId) -> Option<&GradientStop> {
        self.stops.iter().find(|s| s.id() == id)
    }

    /// The color of the gradient's parametrized axis at `t`.
    ///
    /// Stops are ordered by location for the lookup (paint order is
    /// irrelevant here); `t` outside the outermost stops pads with the edge
    /// stop's color. Interpolation is componentwise in straight-alpha sRGB.
    pub fn sample(&self, t: f32) -> ColorToken {
        let mut ordered: Vec<&GradientStop> = self.stops.iter().collect();
        ordered.sort_by(|a, b| a.location.total_cmp(&b.location));

        let Some(&first) = ordered.first() else {
            return ColorToken::default();
        };
        if t <= first.location {
            return first.color;
        }
        let mut prev = first;
        for &stop in &ordered[1..] {
            if t <= stop.location {
                let span = (stop.location - prev.location).max(f32::EPSILON);
                let u = ((t - prev.location) / span).clamp(0.0, 1.0);
                return lerp_srgb(prev.color, stop.color, u);
            }
            prev = stop;
        }
        prev.color
    }
}

fn lerp_srgb(from: ColorToken, to: ColorToken, u: f32) -> ColorToken {
    let lerp = |a: f32, b: f32| a + (b - a) * u;
    ColorToken::rgba(
        lerp(from.red(), to.red()),
        lerp(from.green(), to.green()),
        lerp(from.blue(), to.blue()),
        lerp(from.alpha(), to.alpha()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn black_to_white() -> GradientData {
        GradientData::new(
            "bw",
            vec![
                GradientStop::new(ColorToken::rgb(0.0, 0.0, 0.0), 0.0),
                GradientStop::new(ColorToken::rgb(1.0, 1.0, 1.0), 1.0),
            ],
            GradientShape::horizontal(),
        )
    }

    #[test]
    fn test_empty_stop_list_is_seeded() {
        let g = GradientData::new("empty", Vec::new(), GradientShape::horizontal());
        assert_eq!(g.stops.len(), 1);
    }

    #[test]
    fn test_sample_at_midpoint_interpolates() {
        let c = black_to_white().sample(0.5);
        for channel in [c.red(), c.green(), c.blue()] {
            assert!((channel - 0.5).abs() < EPSILON, "channel: {channel}");
        }
    }

    #[test]
    fn test_sample_pads_beyond_outer_stops() {
        let g = black_to_white();
        assert_eq!(g.sample(-2.0), g.sample(0.0));
        assert_eq!(g.sample(3.0), ColorToken::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_sample_single_stop_is_constant() {
        let g = GradientData::new(
            "solid",
            vec![GradientStop::new(ColorToken::rgb(0.2, 0.4, 0.6), 0.5)],
            GradientShape::horizontal(),
        );
        assert_eq!(g.sample(0.0), g.sample(1.0));
    }

    #[test]
    fn test_sample_orders_unsorted_stops_by_location() {
        // Paint order deliberately reversed; sampling must still run
        // black→white left to right.
        let g = GradientData::new(
            "reversed",
            vec![
                GradientStop::new(ColorToken::rgb(1.0, 1.0, 1.0), 1.0),
                GradientStop::new(ColorToken::rgb(0.0, 0.0, 0.0), 0.0),
            ],
            GradientShape::horizontal(),
        );
        assert!(g.sample(0.1).red() < g.sample(0.9).red());
    }

    #[test]
    fn test_linear_axis_direction() {
        let axis = GradientShape::horizontal().axis().unwrap();
        assert!((axis.x - 1.0).abs() < EPSILON);
        assert!(axis.y.abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_axis_is_none() {
        let shape = GradientShape::Linear {
            start: UnitPoint::CENTER,
            end: UnitPoint::CENTER,
        };
        assert!(shape.axis().is_none());
    }

    #[test]
    fn test_serde_round_trip_preserves_stops_and_shape() {
        let g = GradientData::new(
            "round trip",
            vec![
                GradientStop::new(ColorToken::rgb(1.0, 0.0, 0.0), 0.0),
                GradientStop::new(ColorToken::rgb(0.0, 0.0, 1.0), 1.0),
            ],
            GradientShape::Radial {
                center: UnitPoint::CENTER,
                start_radius: 0.0,
                end_radius: 0.5,
            },
        );
        let json = serde_json::to_string(&g).unwrap();
        let back: GradientData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, g.name);
        assert_eq!(back.shape, g.shape);
        assert_eq!(back.stops.len(), g.stops.len());
        assert_eq!(back.stops[0].color, g.stops[0].color);
    }
}
