//! Present value helpers shared by the shortfall calculations
//!
//! Both helpers branch on `rate > 0` and fall back to a linear
//! `amount * periods` otherwise, so a zero (or negative) rate never divides.

/// Present value of a level payment at the end of each of `periods` periods
///
/// # Arguments
/// * `amount` - Payment per period
/// * `periods` - Number of payments
/// * `rate` - Discount rate per period as a decimal
pub fn pv_annuity(amount: f64, periods: u32, rate: f64) -> f64 {
    if rate > 0.0 {
        amount * (1.0 - (1.0 + rate).powf(-(periods as f64))) / rate
    } else {
        amount * periods as f64
    }
}

/// Rule-of-thumb capitalization: the perpetuity value `amount / rate`
///
/// Falls back to `amount * fallback_periods` when the rate is not positive.
pub fn capitalize(amount: f64, rate: f64, fallback_periods: u32) -> f64 {
    if rate > 0.0 {
        amount / rate
    } else {
        amount * fallback_periods as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pv_annuity() {
        // $100 for 12 periods at 0.5%: 100 * (1 - 1.005^-12) / 0.005 ≈ 1161.89
        let pv = pv_annuity(100.0, 12, 0.005);
        assert!((pv - 1161.89).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_falls_back_to_linear() {
        assert_relative_eq!(pv_annuity(250.0, 8, 0.0), 2000.0);
        assert_relative_eq!(capitalize(250.0, 0.0, 8), 2000.0);
        assert_relative_eq!(pv_annuity(250.0, 8, -0.01), 2000.0);
    }

    #[test]
    fn test_annuity_below_perpetuity() {
        let perpetuity = capitalize(1000.0, 0.04, 30);
        assert_relative_eq!(perpetuity, 25_000.0);
        assert!(pv_annuity(1000.0, 30, 0.04) < perpetuity);
        assert_relative_eq!(pv_annuity(1000.0, 0, 0.04), 0.0);
    }
}
