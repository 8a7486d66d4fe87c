//! Trail-following strategies.
//!
//! A strategy picks the next cell from the in-bounds neighbours of the
//! agent, given the pheromone concentration at each. Both strategies below
//! are interchangeable behind [`TrailFollowing`]; [`TrailPolicy`] selects
//! one from configuration.

use forage_core::Coord;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Chooses a neighbour to move to while following a trail.
///
/// `candidates` holds `(cell, concentration)` in neighbour-table order.
/// Returning `None` means the strategy declines; the caller falls back to a
/// plain random walk.
pub trait TrailFollowing: Send + Sync {
    /// Human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Pick the next cell.
    fn choose(&self, candidates: &[(Coord, f64)], rng: &mut dyn RngCore) -> Option<Coord>;
}

/// Move to the highest-concentration neighbour.
///
/// Ties among the maxima are broken uniformly at random. Declines when every
/// neighbour is at zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl TrailFollowing for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&self, candidates: &[(Coord, f64)], rng: &mut dyn RngCore) -> Option<Coord> {
        let mut best = 0.0;
        let mut tied: SmallVec<[Coord; 8]> = SmallVec::new();
        for &(cell, v) in candidates {
            if v > best {
                best = v;
                tied.clear();
                tied.push(cell);
            } else if v == best && v > 0.0 {
                tied.push(cell);
            }
        }
        tied.choose(rng).copied()
    }
}

/// Sample a neighbour with probability proportional to its concentration.
///
/// When the neighbours sum to zero the choice is uniform over all of them.
/// Declines only when there are no candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Proportional;

impl TrailFollowing for Proportional {
    fn name(&self) -> &'static str {
        "proportional"
    }

    fn choose(&self, candidates: &[(Coord, f64)], rng: &mut dyn RngCore) -> Option<Coord> {
        if candidates.is_empty() {
            return None;
        }
        match WeightedIndex::new(candidates.iter().map(|&(_, v)| v)) {
            Ok(dist) => Some(candidates[dist.sample(rng)].0),
            // All-zero weights.
            Err(_) => Some(candidates[rng.random_range(0..candidates.len())].0),
        }
    }
}

/// Configuration selector for a [`TrailFollowing`] strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailPolicy {
    /// [`Greedy`].
    Greedy,
    /// [`Proportional`].
    #[default]
    Proportional,
}

static GREEDY: Greedy = Greedy;
static PROPORTIONAL: Proportional = Proportional;

impl TrailPolicy {
    /// The strategy this policy names.
    pub fn strategy(self) -> &'static dyn TrailFollowing {
        match self {
            Self::Greedy => &GREEDY,
            Self::Proportional => &PROPORTIONAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    // ── Greedy ──────────────────────────────────────────────────

    #[test]
    fn greedy_picks_unique_maximum() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let cands = [(c(0, 0), 10.0), (c(0, 1), 80.0), (c(1, 0), 30.0)];
        for _ in 0..20 {
            assert_eq!(Greedy.choose(&cands, &mut rng), Some(c(0, 1)));
        }
    }

    #[test]
    fn greedy_breaks_ties_among_maxima_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cands = [(c(0, 0), 50.0), (c(0, 1), 20.0), (c(1, 0), 50.0)];
        let mut seen_a = false;
        let mut seen_b = false;
        for _ in 0..200 {
            match Greedy.choose(&cands, &mut rng) {
                Some(p) if p == c(0, 0) => seen_a = true,
                Some(p) if p == c(1, 0) => seen_b = true,
                other => panic!("unexpected choice {other:?}"),
            }
        }
        assert!(seen_a && seen_b);
    }

    #[test]
    fn greedy_declines_on_all_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let cands = [(c(0, 0), 0.0), (c(0, 1), 0.0)];
        assert_eq!(Greedy.choose(&cands, &mut rng), None);
    }

    // ── Proportional ────────────────────────────────────────────

    #[test]
    fn proportional_never_picks_zero_weight_when_total_positive() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let cands = [(c(0, 0), 0.0), (c(0, 1), 40.0), (c(1, 0), 0.0)];
        for _ in 0..100 {
            assert_eq!(Proportional.choose(&cands, &mut rng), Some(c(0, 1)));
        }
    }

    #[test]
    fn proportional_frequencies_follow_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let cands = [(c(0, 0), 75.0), (c(0, 1), 25.0)];
        let n = 4000;
        let hits = (0..n)
            .filter(|_| Proportional.choose(&cands, &mut rng) == Some(c(0, 0)))
            .count();
        let frac = hits as f64 / n as f64;
        assert!((frac - 0.75).abs() < 0.05, "fraction {frac}");
    }

    #[test]
    fn proportional_all_zero_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let cands = [(c(0, 0), 0.0), (c(0, 1), 0.0), (c(1, 0), 0.0)];
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            let pick = Proportional.choose(&cands, &mut rng).unwrap();
            let i = cands.iter().position(|&(p, _)| p == pick).unwrap();
            counts[i] += 1;
        }
        assert!(counts.iter().all(|&k| k > 800), "{counts:?}");
    }

    #[test]
    fn proportional_empty_declines() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(Proportional.choose(&[], &mut rng), None);
    }

    #[test]
    fn policy_selects_strategy() {
        assert_eq!(TrailPolicy::Greedy.strategy().name(), "greedy");
        assert_eq!(TrailPolicy::default().strategy().name(), "proportional");
    }
}
