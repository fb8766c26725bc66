//! Uniform day sampling and birthday-set generation.
//!
//! The random source is an explicit `rand::Rng` handle passed by the caller,
//! never ambient process state — seeding with `SmallRng::seed_from_u64`
//! makes whole runs reproducible.

use rand::Rng;

use crate::day::{DayOfYear, DAYS_IN_YEAR};
use crate::error::{BirthdayError, Result};

/// Largest group size the simulation driver accepts.
pub const MAX_GROUP_SIZE: u32 = 100;

/// A validated group size in `1..=MAX_GROUP_SIZE`.
///
/// This is the boundary type the presentation layer constructs before
/// handing a run to [`run_simulation`](crate::simulate::run_simulation);
/// the core itself never re-checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSize(u32);

impl GroupSize {
    /// # Errors
    /// Returns [`BirthdayError::InvalidGroupSize`] if `size` is outside
    /// `1..=MAX_GROUP_SIZE`.
    pub fn new(size: u32) -> Result<Self> {
        if (1..=MAX_GROUP_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(BirthdayError::InvalidGroupSize(size))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Draw one uniformly random day of the year.
pub fn sample_day<R: Rng + ?Sized>(rng: &mut R) -> DayOfYear {
    DayOfYear(rng.gen_range(1..=DAYS_IN_YEAR))
}

/// Draw `count` independent birthdays, preserving draw order.
///
/// `count` has no relationship to the 365-day domain: counts of 366 or more
/// are allowed and simply make a shared birthday certain by pigeonhole.
pub fn generate_birthdays<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DayOfYear> {
    (0..count).map(|_| sample_day(rng)).collect()
}
