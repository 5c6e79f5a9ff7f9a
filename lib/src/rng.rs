/// A linear congruential generator over `u32`.
///
/// `state' = state * 1664525 + 1013904223 (mod 2^32)`. Every draw advances
/// the state first and yields `state' / 2^32`, so the seed itself is never
/// produced and every draw lies in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

impl Lcg {
    pub const fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }

    /// Advances the generator and returns the next draw in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }
}

impl Iterator for Lcg {
    type Item = f64;

    #[inline(always)]
    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Returns a closure drawing from a fresh stream seeded with `seed`.
///
/// ```
/// let mut a = hueline::rng::make_rng(42);
/// let mut b = hueline::rng::make_rng(42);
/// assert_eq!(a(), b());
/// assert_eq!(a(), b());
/// ```
pub fn make_rng(seed: u32) -> impl FnMut() -> f64 {
    let mut lcg = Lcg::new(seed);
    move || lcg.next_f64()
}
