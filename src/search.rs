//! Exhaustive search over resistor triples with bounded retention of the best candidates.

use itertools::Itertools;
use tracing::{debug, info, trace};

use std::fmt;
use std::time::Instant;

use crate::circuit::{calculate_beta, ideal_burden, parallel};
use crate::score::combination_score;
use crate::{format_r, Catalog};

/// Number of combinations kept when nothing else is configured.
pub const DEFAULT_KEEP: usize = 50;

/// The electrical requirements a burden network has to meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurdenProblem {
    /// Current transformer ratio, rated input current over rated output current.
    pub turns: f64,
    /// Burden that `b1 ∥ bc` should approximate.
    pub ideal_burden_1: f64,
    /// Burden that `b2 ∥ bc` should approximate.
    pub ideal_burden_2: f64,
}

impl BurdenProblem {
    /// Derives the transformer ratio and both target burdens. Currents are in amps.
    pub fn new(
        max_rated_input_current: f64,
        max_rated_output_current: f64,
        max_practical_input_current_1: f64,
        max_practical_input_current_2: f64,
        safety_factor: f64,
    ) -> Self {
        let turns = max_rated_input_current / max_rated_output_current;
        BurdenProblem {
            turns,
            ideal_burden_1: ideal_burden(max_practical_input_current_1, turns, safety_factor),
            ideal_burden_2: ideal_burden(max_practical_input_current_2, turns, safety_factor),
        }
    }

    /// Creates a calculator searching `catalog` for this problem, keeping the best `keep`
    /// combinations.
    pub fn calc<'a>(&self, catalog: &'a Catalog, keep: usize) -> BurdenCalc<'a> {
        BurdenCalc::new(catalog, self.ideal_burden_1, self.ideal_burden_2, keep)
    }
}

/// A scored `(b1, b2, bc)` triple. `b1` and `b2` each sit in parallel with the common `bc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    pub score: f64,
    pub b1: f64,
    pub b2: f64,
    pub bc: f64,
}

impl Combination {
    /// Resistance of the first burden, `b1 ∥ bc`.
    pub fn burden_1(&self) -> f64 {
        parallel(self.b1, self.bc)
    }

    /// Resistance of the second burden, `b2 ∥ bc`.
    pub fn burden_2(&self) -> f64 {
        parallel(self.b2, self.bc)
    }

    pub fn beta_1(&self, turns: f64) -> f64 {
        calculate_beta(self.b1, self.bc, turns)
    }

    pub fn beta_2(&self, turns: f64) -> f64 {
        calculate_beta(self.bc, self.b2, turns)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = if f.alternate() { "\n" } else { ", " };
        write!(
            f,
            "Score: {:.3}{}{}",
            self.score,
            sep,
            [("b1", self.b1), ("b2", self.b2), ("bc", self.bc)]
                .iter()
                .map(|(name, r)| format!("{}: {}", name, format_r(*r)))
                .join(sep)
        )
    }
}

/// Keeps the `k` highest scored items offered to it, best first.
///
/// Items scoring the same keep the order they were offered in, so an item never displaces an
/// equal one that arrived earlier. NaN scores are never kept.
#[derive(Debug, Clone)]
pub struct TopK<T> {
    k: usize,
    items: Vec<(f64, T)>,
}

impl<T> TopK<T> {
    pub fn with_capacity(k: usize) -> Self {
        TopK {
            k,
            items: Vec::with_capacity(k + 1),
        }
    }

    /// Lowest score still able to enter: 0 until `k` items are held, then the score of the
    /// last kept item.
    pub fn cutoff(&self) -> f64 {
        if self.items.len() < self.k {
            0.0
        } else {
            self.items.last().map_or(0.0, |(s, _)| *s)
        }
    }

    /// Offers `item`, returning whether it was kept.
    pub fn offer(&mut self, score: f64, item: T) -> bool {
        if score.is_nan() || score < self.cutoff() {
            return false;
        }
        let pos = self.items.partition_point(|(s, _)| *s >= score);
        if pos >= self.k {
            return false;
        }
        self.items.insert(pos, (score, item));
        self.items.truncate(self.k);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, T)> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<(f64, T)> {
        self.items
    }
}

/// Calculator searching every `(b1, b2, bc)` triple of a catalog.
#[derive(Debug)]
pub struct BurdenCalc<'a> {
    catalog: &'a Catalog,
    ideal1: f64,
    ideal2: f64,
    keep: usize,
}

impl<'a> BurdenCalc<'a> {
    /// Creates a calculator matching `b1 ∥ bc` to `ideal1` and `b2 ∥ bc` to `ideal2`, keeping
    /// the best `keep` combinations.
    pub fn new(catalog: &'a Catalog, ideal1: f64, ideal2: f64, keep: usize) -> Self {
        BurdenCalc {
            catalog,
            ideal1,
            ideal2,
            keep,
        }
    }

    /// Returns the number of triples the search will score.
    pub fn combinations(&self) -> u128 {
        self.catalog.combinations()
    }

    /// Scores every triple and returns the best `keep` of them, highest score first. Triples are
    /// visited with `b1` outermost and `bc` innermost, each in catalog order; among equal scores
    /// the earliest visited ranks first.
    pub fn search(&self) -> SearchResult {
        debug!(
            ideal1 = self.ideal1,
            ideal2 = self.ideal2,
            catalog_len = self.catalog.len(),
            keep = self.keep,
            "starting burden search"
        );
        let start = Instant::now();
        let mut top = TopK::with_capacity(self.keep);
        let mut evaluated = 0u64;
        let mut rejected = 0u64;

        for ((&b1, &b2), &bc) in self
            .catalog
            .iter()
            .cartesian_product(self.catalog.iter())
            .cartesian_product(self.catalog.iter())
        {
            evaluated += 1;
            let score = combination_score(b1, b2, bc, self.ideal1, self.ideal2);
            if top.offer(score, Combination { score, b1, b2, bc }) {
                trace!(score, b1, b2, bc, cutoff = top.cutoff(), "retained");
            } else {
                rejected += 1;
            }
        }

        info!(
            evaluated,
            rejected,
            retained = top.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "burden search complete"
        );

        SearchResult {
            combinations: top.into_vec().into_iter().map(|(_, c)| c).collect(),
            evaluated,
            rejected,
        }
    }
}

/// Stores the result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    combinations: Vec<Combination>,
    /// Number of triples scored.
    pub evaluated: u64,
    /// Number of triples turned away on arrival. Triples retained for a while and then pushed
    /// out by better ones are not counted.
    pub rejected: u64,
}

impl SearchResult {
    /// The highest scoring combination, if the catalog was not empty.
    pub fn best(&self) -> Option<&Combination> {
        self.combinations.first()
    }

    /// Iterates the retained combinations from highest to lowest score.
    pub fn iter(&self) -> impl Iterator<Item = &Combination> {
        self.combinations.iter()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}
