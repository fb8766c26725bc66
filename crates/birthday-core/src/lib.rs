//! # birthday-core
//!
//! Monte Carlo estimation of the **birthday paradox**: the surprisingly high
//! probability that in a group of N people with uniformly random birthdays,
//! at least two share one.
//!
//! The crate is pure computation — no I/O, no global state. Randomness is
//! threaded through an explicit [`rand::Rng`] handle so callers (and tests)
//! can seed deterministically.
//!
//! ## Quick start
//!
//! ```rust
//! use birthday_core::{run_simulation, GroupSize};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let group = GroupSize::new(23).unwrap();
//! let summary = run_simulation(&mut rng, group, 10_000, |_| {});
//!
//! assert_eq!(summary.trials, 10_000);
//! // The true probability for 23 people is ~50.7%.
//! assert!(summary.probability_percent > 40.0 && summary.probability_percent < 60.0);
//! ```
//!
//! ## Modules
//!
//! - [`day`] — `DayOfYear` ordinal type and its calendar display
//! - [`sample`] — uniform day sampling and birthday-set generation
//! - [`collision`] — shared-birthday detection
//! - [`simulate`] — the Monte Carlo driver and its summary
//! - [`error`] — error types

pub mod collision;
pub mod day;
pub mod error;
pub mod sample;
pub mod simulate;

pub use collision::find_shared_birthday;
pub use day::{DayOfYear, DAYS_IN_YEAR};
pub use error::BirthdayError;
pub use sample::{generate_birthdays, sample_day, GroupSize, MAX_GROUP_SIZE};
pub use simulate::{run_simulation, SimulationSummary, DEFAULT_TRIALS};
