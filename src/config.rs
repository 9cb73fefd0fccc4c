//! Command-line configuration.

use clap::builder::RangedU64ValueParser;
use clap::Parser;

use crate::core::RngSampler;
use crate::types::{DEFAULT_SIZE, MIN_SIZE};

/// Largest board the terminal view is laid out for.
pub const MAX_SIZE: usize = 64;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Play 2048 in the terminal", long_about = None)]
pub struct Config {
    /// The side length of the board.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_SIZE as u64..=MAX_SIZE as u64)
    )]
    pub size: usize,

    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    pub seed: Option<u64>,
}

impl Config {
    /// Tile sampler for this run: seeded when `--seed` was given.
    pub fn sampler(&self) -> RngSampler {
        match self.seed {
            Some(seed) => RngSampler::seeded(seed),
            None => RngSampler::from_os_rng(),
        }
    }
}
