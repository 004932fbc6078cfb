//! Fixed-point arithmetic for rate conversion.
//! Rates carry 1e8 scaling, matching the precision reported by the provider.

/// Fixed-point scale factor for rates.
pub const SCALE: i128 = 100_000_000; // 1e8

/// Computes `a * b / denominator`, rounding toward zero.
/// Returns `None` on overflow or a zero denominator.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }
    a.checked_mul(b)?.checked_div(denominator)
}

/// Output amount for `amount_in` at a scaled `rate`: floor(amount_in * rate / SCALE).
pub fn quote(amount_in: i128, rate: i128) -> Option<i128> {
    mul_div(amount_in, rate, SCALE)
}
