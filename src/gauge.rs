use std::f64::consts::PI;

/// Default outer size of a gauge, in points.
pub const DEFAULT_GAUGE_DIAMETER: f64 = 120.;
/// Total inset between the outer size and the ring's centre line.
const RING_INSET: f64 = 20.;

/// Stroke-dash parameters for a circular progress ring.
///
/// The filled arc of the ring is `circumference - dash_offset` long, so a ring
/// at 100% has no offset and a ring at 0% is offset by its whole length.
/// Percentages outside `[0, 100]` are not clamped: they extrapolate linearly,
/// which over-draws past a full turn above 100 and yields a negative arc below 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl GaugeGeometry {
    pub fn new(percentage: f64, diameter: f64) -> Self {
        let radius = (diameter - RING_INSET) / 2.;
        let circumference = 2. * PI * radius;
        let dash_offset = circumference * (1. - percentage / 100.);
        Self {
            radius,
            circumference,
            dash_offset,
        }
    }

    pub fn with_default_size(percentage: f64) -> Self {
        Self::new(percentage, DEFAULT_GAUGE_DIAMETER)
    }

    /// Length of the drawn part of the ring.
    pub fn filled_length(&self) -> f64 {
        self.circumference - self.dash_offset
    }

    /// Angle swept by the drawn arc, in radians, starting at 12 o'clock.
    pub fn sweep_angle(&self) -> f64 {
        if self.radius == 0. {
            return 0.;
        }
        self.filled_length() / self.radius
    }
}
