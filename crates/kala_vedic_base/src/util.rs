//! Shared angle helpers for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, +180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// 0-based segment index of `lon_deg` for a circle cut into `count` equal
/// arcs of `span_deg`. Clamped to `count - 1` against the 360.0 edge.
pub(crate) fn segment_index(lon_deg: f64, span_deg: f64, count: u8) -> u8 {
    let lon = normalize_360(lon_deg);
    let idx = (lon / span_deg).floor() as u8;
    idx.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn pm180_basic() {
        assert!((normalize_to_pm180(0.0) - 0.0).abs() < 1e-10);
        assert!((normalize_to_pm180(180.0) - 180.0).abs() < 1e-10);
        assert!((normalize_to_pm180(-180.0) - 180.0).abs() < 1e-10);
        assert!((normalize_to_pm180(270.0) - (-90.0)).abs() < 1e-10);
        assert!((normalize_to_pm180(-270.0) - 90.0).abs() < 1e-10);
        assert!((normalize_to_pm180(450.0) - 90.0).abs() < 1e-10);
    }

    #[test]
    fn segment_index_clamps_edge() {
        assert_eq!(segment_index(359.999_999_999_999_9, 12.0, 30), 29);
        assert_eq!(segment_index(12.0, 12.0, 30), 1);
        assert_eq!(segment_index(-1.0, 12.0, 30), 29);
    }
}
