//! Scoring of candidate burden networks. Higher is better.

use crate::circuit::parallel;

use std::f64::INFINITY;

/// Score how closely `r1 ∥ r2` approximates `ideal`, as `1 / |ideal - (r1 ∥ r2)|`.
///
/// An exact match scores infinity.
pub fn resistor_score(r1: f64, r2: f64, ideal: f64) -> f64 {
    let diff = (ideal - parallel(r1, r2)).abs();
    if diff == 0.0 {
        INFINITY
    } else {
        1.0 / diff
    }
}

/// Combine two pair scores as `1 / (1/score1 + 1/score2)`.
///
/// An infinite score contributes nothing to the sum. Whenever the formula would divide by zero
/// the result is 0: that is, when either score is 0, and also when *both* scores are infinite.
/// The latter means a network matching both targets exactly ranks below every imperfect one.
/// This is kept deliberately for compatibility with existing reports, though it is almost
/// certainly not what anybody wants.
pub fn pair_score(score1: f64, score2: f64) -> f64 {
    if score1 == 0.0 || score2 == 0.0 {
        return 0.0;
    }
    let sum = recip(score1) + recip(score2);
    if sum == 0.0 {
        0.0
    } else {
        1.0 / sum
    }
}

/// Score the triple `(b1, b2, bc)`: `b1 ∥ bc` against `ideal1` and `bc ∥ b2` against `ideal2`.
pub fn combination_score(b1: f64, b2: f64, bc: f64, ideal1: f64, ideal2: f64) -> f64 {
    pair_score(
        resistor_score(b1, bc, ideal1),
        resistor_score(bc, b2, ideal2),
    )
}

fn recip(score: f64) -> f64 {
    if score.is_infinite() {
        0.0
    } else {
        1.0 / score
    }
}
