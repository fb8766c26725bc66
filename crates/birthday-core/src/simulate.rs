//! Monte Carlo driver — aggregates many independent trials into a
//! probability estimate.

use rand::Rng;
use serde::Serialize;

use crate::collision::find_shared_birthday;
use crate::sample::{generate_birthdays, GroupSize};

/// Trial count used by the reference configuration.
pub const DEFAULT_TRIALS: u64 = 100_000;

/// Number of progress notifications per run (one per 1% of trials).
const PROGRESS_REPORTS: u64 = 100;

/// Result of one full simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Total trials executed.
    pub trials: u64,
    /// Trials that contained at least one shared birthday.
    pub matches: u64,
    /// `(matches / trials) * 100`, rounded to two decimals.
    pub probability_percent: f64,
}

/// Run `trials` independent trials for a group of `group_size` people and
/// estimate the probability of at least one shared birthday.
///
/// Each trial draws a fresh birthday set and classifies it with
/// [`find_shared_birthday`]. Every `trials / 100` iterations (interval at
/// least 1), `on_progress` is invoked with the current iteration count —
/// purely advisory, safe to ignore, and without effect on the estimate.
///
/// Larger `trials` values tighten the estimate at proportional cost.
/// `trials == 0` yields a summary with probability `0.0`.
pub fn run_simulation<R: Rng + ?Sized>(
    rng: &mut R,
    group_size: GroupSize,
    trials: u64,
    mut on_progress: impl FnMut(u64),
) -> SimulationSummary {
    let interval = (trials / PROGRESS_REPORTS).max(1);
    let count = group_size.get() as usize;

    let mut matches = 0u64;
    for i in 0..trials {
        if i % interval == 0 {
            on_progress(i);
        }
        let birthdays = generate_birthdays(rng, count);
        if find_shared_birthday(&birthdays).is_some() {
            matches += 1;
        }
    }

    let probability_percent = if trials == 0 {
        0.0
    } else {
        round_two_decimals(matches as f64 / trials as f64 * 100.0)
    };

    SimulationSummary {
        trials,
        matches,
        probability_percent,
    }
}

fn round_two_decimals(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
