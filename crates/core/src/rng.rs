//! RNG module - tile placement and value sampling
//!
//! The engine never touches a global RNG. It draws through [`TileSampler`],
//! so the terminal front end can plug in a seeded `SmallRng` while tests
//! replay a fixed script with [`ScriptedSampler`].

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the two random draws a spawn needs.
pub trait TileSampler {
    /// Uniform index in `0..upper`. Callers guarantee `upper > 0`.
    fn pick(&mut self, upper: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<S: TileSampler + ?Sized> TileSampler for &mut S {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// Production sampler backed by `SmallRng`.
#[derive(Debug, Clone)]
pub struct RngSampler {
    rng: SmallRng,
}

impl RngSampler {
    /// Deterministic sampler: same seed, same game.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Default for RngSampler {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl TileSampler for RngSampler {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays queued draws in order.
///
/// Once a queue runs dry the sampler falls back to `0` for picks (first empty
/// slot) and `0.0` for units (a 2 tile). Picks are clamped into range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    picks: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl ScriptedSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }
}

impl TileSampler for ScriptedSampler {
    fn pick(&mut self, upper: usize) -> usize {
        let raw = self.picks.pop_front().unwrap_or(0);
        raw.min(upper.saturating_sub(1))
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}
