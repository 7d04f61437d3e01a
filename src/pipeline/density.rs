//! # Density Calculation
//!
//! The Object Density Descriptor (ODD): distinct object mentions per unit
//! of caller-supplied area. The area is an external constant or context
//! value, not something derived from pixel data.

/// Compute the object density for `count` detected objects over `area`.
///
/// Returns `count / area` when `area` is positive, and `0.0` otherwise.
/// The guard covers zero, negative, and NaN areas, so this function never
/// divides by zero and never panics.
///
/// # Examples
///
/// ```
/// use object_density::pipeline::density;
///
/// assert_eq!(density(3, 100.0), 0.03);
/// assert_eq!(density(3, 0.0), 0.0);
/// ```
pub fn density(count: usize, area: f64) -> f64 {
    if area > 0.0 {
        count as f64 / area
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_basic() {
        assert_eq!(density(0, 100.0), 0.0);
        assert_eq!(density(5, 100.0), 0.05);
        assert_eq!(density(3, 100.0), 0.03);
    }

    #[test]
    fn test_density_zero_area_guard() {
        assert_eq!(density(3, 0.0), 0.0);
    }

    #[test]
    fn test_density_negative_area_guard() {
        assert_eq!(density(3, -10.0), 0.0);
    }

    #[test]
    fn test_density_nan_area_guard() {
        assert_eq!(density(3, f64::NAN), 0.0);
    }
}
