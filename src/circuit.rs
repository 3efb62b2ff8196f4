//! Resistor network and current transformer arithmetic.
//!
//! None of these functions fail. Divisions that would hit zero are checked explicitly and
//! saturate to infinity, so results are identical across platforms regardless of how the
//! hardware treats `x / 0.0`.

/// Lower supply rail of the sensing front end, in volts.
pub const VCC_LOW: f64 = 2.1;
/// Upper supply rail of the sensing front end, in volts.
pub const VCC_HIGH: f64 = 3.75;
/// ADC full scale voltage, in volts.
pub const ADC_FULL_SCALE: f64 = 1.8;

/// Resistance of `r1` and `r2` in parallel.
///
/// An infinite value is an absent resistor, so it leaves the other one unchanged. If `r1 + r2`
/// is zero the result is infinite.
///
/// ```
/// use burden_calc::parallel;
///
/// assert_eq!(parallel(20.0, 20.0), 10.0);
/// assert_eq!(parallel(47.0, std::f64::INFINITY), 47.0);
/// ```
pub fn parallel(r1: f64, r2: f64) -> f64 {
    if r1.is_infinite() {
        return r2;
    }
    if r2.is_infinite() {
        return r1;
    }
    let sum = r1 + r2;
    if sum == 0.0 {
        std::f64::INFINITY
    } else {
        r1 * r2 / sum
    }
}

/// Target burden resistance that maps `max_current` onto the usable ADC window.
///
/// `turns` is the current transformer ratio and `safety_factor` the headroom kept above the
/// expected peak current.
pub fn ideal_burden(max_current: f64, turns: f64, safety_factor: f64) -> f64 {
    turns * VCC_LOW * ADC_FULL_SCALE
        / (max_current * 2f64.sqrt() * safety_factor * (VCC_LOW + VCC_HIGH))
}

/// Sense ratio achieved by burden `r1 ∥ r2` on a transformer with `turns` turns.
pub fn calculate_beta(r1: f64, r2: f64, turns: f64) -> f64 {
    let burden = parallel(r1, r2);
    if burden == 0.0 {
        std::f64::INFINITY
    } else {
        turns / burden
    }
}
