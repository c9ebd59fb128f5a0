//! Fixed zigzag polyline the scroll indicator draws along.
//!
//! The path lives in an abstract `width x height` viewBox that the host
//! stretches to the sidebar (`preserveAspectRatio="none"`). Its nominal height
//! is far larger than any real container so the amplitude reads as constant
//! on screen. Dash lengths are therefore in viewBox units, not pixels.

use itertools::Itertools as _;

/// Upper bound on generated segments; a vanishing pitch clamps here.
pub const MAX_SEGMENTS: usize = 1 << 16;

/// Zigzag shape parameters, in viewBox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZigzagParams {
    /// Horizontal swing either side of the centre line.
    pub amplitude: f64,
    /// Vertical extent of one segment (two diagonals).
    pub pitch: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ZigzagParams {
    fn default() -> Self {
        Self {
            amplitude: 6.0,
            pitch: 40.0,
            width: 20.0,
            height: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZigzagPath {
    params: ZigzagParams,
    segments: usize,
    points: Vec<(f64, f64)>,
}

impl ZigzagPath {
    /// Build the polyline: from `(width / 2, 0)`, each segment `i` swings to
    /// `centre + dir * amplitude` at its mid-height and to
    /// `centre - dir * amplitude` at its end, `dir` alternating from `+1`.
    pub fn new(params: ZigzagParams) -> Self {
        let count = (params.height / params.pitch).floor();
        let segments = if params.pitch > 0.0 && count.is_finite() {
            count.clamp(0.0, MAX_SEGMENTS as f64) as usize
        } else {
            0
        };
        let centre = params.width / 2.0;
        let mut points = Vec::with_capacity(1 + 2 * segments);
        points.push((centre, 0.0));
        for i in 0..segments {
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            let top = i as f64 * params.pitch;
            points.push((centre + dir * params.amplitude, top + params.pitch / 2.0));
            points.push((centre - dir * params.amplitude, top + params.pitch));
        }
        Self {
            params,
            segments,
            points,
        }
    }

    pub fn params(&self) -> ZigzagParams {
        self.params
    }

    /// `floor(height / pitch)`, at most [`MAX_SEGMENTS`]. Zero when the
    /// parameters are not finite or the pitch is not positive.
    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Nominal length of one diagonal, `sqrt(amplitude^2 + (pitch / 2)^2)`.
    pub fn diag_length(&self) -> f64 {
        self.params.amplitude.hypot(self.params.pitch / 2.0)
    }

    /// Arclength used for dash arithmetic: two diagonals per segment.
    pub fn total_length(&self) -> f64 {
        2.0 * self.segments as f64 * self.diag_length()
    }

    /// SVG path data, e.g. `M 10 0 L 16 20 L 4 40 ...`.
    pub fn d(&self) -> String {
        let (x, y) = self.points[0];
        let lines = self.points[1..]
            .iter()
            .map(|(x, y)| format!(" L {x} {y}"))
            .join("");
        format!("M {x} {y}{lines}")
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.params.width, self.params.height)
    }
}

impl Default for ZigzagPath {
    fn default() -> Self {
        Self::new(ZigzagParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let path = ZigzagPath::default();
        assert_eq!(path.segments(), 25);
        assert_eq!(path.points().len(), 51);
        assert!((path.diag_length() - 436f64.sqrt()).abs() < 1e-12);
        assert!((path.total_length() - 1044.0306).abs() < 1e-3);
        assert_eq!(path.view_box(), "0 0 20 1000");
    }

    #[test]
    fn path_data_alternates_around_centre() {
        let path = ZigzagPath::default();
        let d = path.d();
        assert!(d.starts_with("M 10 0 L 16 20 L 4 40 L 4 60 L 16 80 L 16 100 L 4 120 "), "{d}");
        assert!(d.ends_with("L 16 980 L 4 1000"), "{d}");
        assert_eq!(d.matches(" L ").count(), 50);
    }

    #[test]
    fn remainder_height_is_dropped() {
        let path = ZigzagPath::new(ZigzagParams {
            height: 99.0,
            ..Default::default()
        });
        assert_eq!(path.segments(), 2);
        assert_eq!(path.points().last(), Some(&(16.0, 80.0)));
    }

    #[test]
    fn degenerate_pitch_has_no_segments() {
        let path = ZigzagPath::new(ZigzagParams {
            pitch: 0.0,
            ..Default::default()
        });
        assert_eq!(path.segments(), 0);
        assert_eq!(path.total_length(), 0.0);
        assert_eq!(path.d(), "M 10 0");
    }

    #[test]
    fn vanishing_pitch_is_clamped() {
        let path = ZigzagPath::new(ZigzagParams {
            pitch: 1e-300,
            ..Default::default()
        });
        assert_eq!(path.segments(), MAX_SEGMENTS);
        assert_eq!(path.points().len(), 1 + 2 * MAX_SEGMENTS);
        assert!(path.total_length().is_finite());

        let unbounded = ZigzagPath::new(ZigzagParams {
            pitch: f64::MIN_POSITIVE,
            height: f64::MAX,
            ..Default::default()
        });
        assert_eq!(unbounded.segments(), 0);
    }
}
