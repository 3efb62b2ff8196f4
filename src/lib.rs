//! A burden resistor optimiser for current transformer sensing circuits.
//!
//! A current transformer sensed by an ADC needs a burden resistance that maps the expected peak
//! current onto the usable ADC window. This crate picks three standard resistors `b1`, `b2` and
//! `bc` so that `b1 ∥ bc` and `b2 ∥ bc` approximate two such ideal burdens at once, for example
//! to give a sensor two switchable current ranges. Every triple from a resistor catalog is
//! scored and the best few are kept, best first.
//!
//! # Example
//! ```rust no_run
//! use burden_calc::*;
//!
//! fn main() {
//!     // 100A : 50mA transformer, ranges of 30A and 50A with 1.5x headroom
//!     let problem = BurdenProblem::new(100.0, 0.05, 30.0, 50.0, 1.5);
//!     let calc = problem.calc(&STANDARD, 50);
//!
//!     println!("Number of combinations: {}", calc.combinations());
//!
//!     let res = calc.search();
//!     let best = res.best().expect("Error: empty catalog");
//!     println!("{}", best);
//!     println!("beta 1: {}", best.beta_1(problem.turns));
//!     println!("beta 2: {}", best.beta_2(problem.turns));
//! }
//! ```

#[macro_use]
extern crate lazy_static;

use itertools::Itertools;

use std::cmp::Ordering;
use std::f64::INFINITY;

pub mod circuit;
pub mod config;
pub mod error;
mod expr_input;
pub mod report;
pub mod score;
pub mod search;

pub use crate::circuit::{calculate_beta, ideal_burden, parallel};
pub use crate::config::Config;
pub use crate::error::{CatalogError, ConfigError, Error, Result};
pub use crate::score::{combination_score, pair_score, resistor_score};
pub use crate::search::{BurdenCalc, BurdenProblem, Combination, SearchResult, TopK};

const POWERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

const E3_BASE: &[f64] = &[1.0, 2.2, 4.7];
const E6_EXTRA: &[f64] = &[1.5, 3.3, 6.8];
const E12_EXTRA: &[f64] = &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2];
const E24_EXTRA: &[f64] = &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1];

#[rustfmt::skip]
const STANDARD_VALUES: &[f64] = &[
    1.0, 1.2, 1.5, 1.8, 2.0, 2.4, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1, 5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
    10.0, 12.0, 15.0, 18.0, 20.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0, 43.0, 47.0, 51.0, 56.0,
    62.0, 68.0, 75.0, 82.0, 91.0,
    100.0, 120.0, 150.0, 180.0, 200.0, 220.0, 240.0, 270.0, 300.0, 330.0, 360.0, 390.0, 430.0,
    470.0, 510.0, 560.0, 620.0, 680.0, 750.0, 820.0, 910.0,
    1000.0, 1500.0, 1800.0, 2000.0, 2200.0, 2400.0, 2700.0, 3000.0, 3300.0, 3600.0, 3900.0,
    4300.0, 4700.0, 5100.0, 5600.0, 6200.0, 6800.0, 7200.0, 7500.0, 8200.0, 9100.0,
    10e3, 12e3, 15e3, 18e3, 20e3, 22e3, 24e3, 27e3, 30e3, 33e3, 36e3, 39e3, 43e3, 47e3, 51e3,
    56e3, 62e3, 68e3, 75e3, 82e3, 91e3,
    100e3, 120e3, 150e3, 180e3, 200e3, 220e3, 240e3, 270e3, 300e3, 330e3, 360e3, 390e3, 430e3,
    450e3, 510e3, 560e3, 620e3, 680e3, 750e3, 820e3, 910e3,
    1e6, 1.5e6, 2e6, 3e6,
];

lazy_static! {
    /// The stocked value table the burden search has always been run against, 1R to 3M.
    pub static ref STANDARD: Catalog = Catalog::from_sorted(STANDARD_VALUES.to_vec());
    /// Catalog for the E3 standard series
    pub static ref E3: Catalog = Catalog::series(&[E3_BASE]);
    /// Catalog for the E6 standard series
    pub static ref E6: Catalog = Catalog::series(&[E3_BASE, E6_EXTRA]);
    /// Catalog for the E12 standard series
    pub static ref E12: Catalog = Catalog::series(&[E3_BASE, E6_EXTRA, E12_EXTRA]);
    /// Catalog for the E24 standard series
    pub static ref E24: Catalog = Catalog::series(&[E3_BASE, E6_EXTRA, E12_EXTRA, E24_EXTRA]);
}

/// An ascending list of resistor values to draw from, terminated by `f64::INFINITY` which
/// stands for "no resistor fitted".
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    values: Box<[f64]>,
}

impl Catalog {
    fn from_sorted(mut values: Vec<f64>) -> Self {
        values.push(INFINITY);
        Catalog {
            values: values.into_boxed_slice(),
        }
    }

    fn series(bases: &[&[f64]]) -> Self {
        let mut values = bases
            .iter()
            .flat_map(|b| b.iter())
            .cartesian_product(POWERS.iter())
            .map(|(val, pow)| val * pow)
            .collect::<Vec<f64>>();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Self::from_sorted(values)
    }

    /// Builds a catalog from arbitrary values in ohms. They are sorted, duplicates are dropped
    /// and the open circuit sentinel is appended.
    /// # Examples
    /// ```
    ///     # use burden_calc::Catalog;
    ///     let cat = Catalog::from_values(vec![470.0, 100.0, 220.0]).unwrap();
    ///     assert_eq!(cat.len(), 4);
    ///     assert_eq!(cat.iter().next(), Some(&100.0));
    /// ```
    pub fn from_values<I>(values: I) -> std::result::Result<Self, CatalogError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut finite = Vec::new();
        for v in values {
            if v == INFINITY {
                continue;
            }
            if !(v > 0.0) || !v.is_finite() {
                return Err(CatalogError::InvalidValue(v));
            }
            finite.push(v);
        }
        if finite.is_empty() {
            return Err(CatalogError::Empty);
        }
        finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        finite.dedup();
        Ok(Self::from_sorted(finite))
    }

    /// Looks up one of the built in catalogs: `standard`, `e3`, `e6`, `e12` or `e24`.
    pub fn by_name(name: &str) -> Option<&'static Catalog> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(&*STANDARD),
            "e3" => Some(&*E3),
            "e6" => Some(&*E6),
            "e12" => Some(&*E12),
            "e24" => Some(&*E24),
            _ => None,
        }
    }

    /// Iterates the values in ascending order, the open circuit sentinel last.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    /// Number of values including the open circuit sentinel.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of `(b1, b2, bc)` triples a search over this catalog evaluates.
    pub fn combinations(&self) -> u128 {
        (self.len() as u128).pow(3)
    }
}

fn _format_rval(r: f64, unit: &str) -> String {
    let mut val = format!("{}", r);
    if val.contains('.') {
        val.replace(".", unit)
    } else {
        val.push_str(unit);
        val
    }
}

/// Formats a resistance the way it is marked on parts and schematics: `4R7`, `470R`, `4K7`,
/// `1M5`. An absent resistor is shown as `open`.
pub fn format_r(r: f64) -> String {
    if r.is_infinite() {
        "open".to_string()
    } else if r < 1000.0 {
        _format_rval(r, "R")
    } else if r < 1_000_000.0 {
        _format_rval(r / 1000.0, "K")
    } else {
        _format_rval(r / 1_000_000.0, "M")
    }
}
