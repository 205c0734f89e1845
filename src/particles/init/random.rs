/// xorshift32 - small, fast, good enough for visual effects
///
/// State must be non-zero; zero is a fixed point of the shift sequence.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}
