use num_traits::PrimInt;

/// Returns the number of significant bits in `value`, or 0 if `value` is 0.
#[inline]
pub fn bits_required<T: PrimInt>(value: T) -> u32 {
    (std::mem::size_of::<T>() as u32 * 8) - value.leading_zeros()
}

/// Returns the smallest bit width that can represent every value in `values`.
///
/// The result is in `[0, 32]` and is 0 iff all values are 0 (or `values` is empty).
#[inline]
pub fn max_bits(values: &[u32]) -> u32 {
    // OR-ing the values keeps the highest set bit of the maximum without a compare per element.
    bits_required(values.iter().fold(0u32, |acc, v| acc | *v))
}

/// Rounds `value` down to the nearest multiple of `divisor`.
///
/// # Panics
///
/// - If `divisor == 0`.
#[inline]
pub fn floor_by(value: usize, divisor: usize) -> usize {
    value - value % divisor
}
