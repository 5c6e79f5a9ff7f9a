/// Linearly maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The result is not clamped: values outside the input domain extrapolate
/// past the output range.
///
/// ```
/// use hueline::range::map_range;
///
/// assert_eq!(map_range(0.5, 0.0, 1.0, 20.0, 80.0), 50.0);
/// assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
/// assert_eq!(map_range(5.0, 5.0, 50.0, -15.0, 15.0), -15.0);
/// ```
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
