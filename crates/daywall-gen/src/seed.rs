//! Calendar-day seeds.
//!
//! A seed is `year * 1000 + day_of_year`. Day-of-year never exceeds 366, so
//! consecutive years never collide and consecutive days differ by one.

use chrono::{Datelike, Local, NaiveDate};

/// Integer that fully determines one generation.
pub type Seed = i64;

/// Abstraction over the calendar so seed derivation can be tested.
pub trait Clock: Send + Sync {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Production clock reading the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Seed for a calendar date.
#[inline]
pub fn seed_for_date(date: NaiveDate) -> Seed {
    i64::from(date.year()) * 1000 + i64::from(date.ordinal())
}

/// Seed for the date reported by `clock`.
#[inline]
pub fn seed_from_clock(clock: &dyn Clock) -> Seed {
    seed_for_date(clock.today())
}

/// Seed for today's local date.
pub fn today_seed() -> Seed {
    seed_from_clock(&SystemClock)
}

/// Inverse of [`seed_for_date`]; `None` when `seed` does not encode a date.
pub fn date_for_seed(seed: Seed) -> Option<NaiveDate> {
    if seed < 0 {
        return None;
    }
    let year = i32::try_from(seed / 1000).ok()?;
    let day = u32::try_from(seed % 1000).ok()?;
    NaiveDate::from_yo_opt(year, day)
}
