//! Q8 fixed-point helpers.
//!
//! The filter state lives in Q8: the low 8 bits of an `i16` hold the
//! fractional part. These helpers name the two operations the signal chain
//! leans on so the call sites read as arithmetic, not bit tricks.

/// Extract the integer part of a Q8 value, truncating toward zero.
///
/// This is a division, not a shift: an arithmetic shift would round
/// negative values toward negative infinity and skew the filter feedback.
#[inline]
pub fn q8_to_i8(v: i16) -> i8 {
    (v / 256) as i8
}

/// 16-bit add that clamps at the representable extremes instead of wrapping.
#[inline]
pub fn saturating_add(a: i16, b: i16) -> i16 {
    a.saturating_add(b)
}
