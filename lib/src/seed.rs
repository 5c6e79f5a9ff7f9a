/// Hashes `text` into a non-negative seed.
///
/// Each UTF-16 code unit of `text` is folded into a 32-bit signed accumulator
/// as `hash * 31 + unit`, wrapping on overflow. The absolute value of the
/// accumulator is returned. `i32::MIN` has no positive counterpart in `i32`,
/// which is why the seed is unsigned: its absolute value is `2^31`.
///
/// ```
/// use hueline::seed::hash;
///
/// assert_eq!(hash(""), 0);
/// assert_eq!(hash("a"), 97);
/// assert_eq!(hash("ab"), 97 * 31 + 98);
/// ```
pub fn hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}
