//! Clock and randomness providers.
//!
//! Nothing in the engine reads the wall clock or a global RNG. Both are
//! injected: a [`Clock`] when a session locks its [`RuleContext`], and a
//! [`RandomSource`] when a level resolves its random puzzle variants.

use crate::RuleContext;
use chrono::{Local, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub trait RandomSource {
    /// A value in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32;
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Reproducible RNG, e.g. for `--seed` on the command line.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.0.gen_range(0..bound)
    }
}

/// Always yields the same value (modulo the bound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 { 0 } else { self.0 % bound }
    }
}

/// Pick one of `items` uniformly. `items` must not be empty.
pub(crate) fn pick<'a, T>(random: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    let bound = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let index = random.below(bound) as usize;
    &items[index.min(items.len() - 1)]
}

/// Lowest and highest target number handed out to a session (inclusive).
pub const TARGET_NUMBER_RANGE: (u32, u32) = (10, 99);

impl RuleContext {
    /// Lock the context for a new session: the current hour and minute, plus a
    /// random two-digit target number.
    pub fn locked(clock: &dyn Clock, random: &mut dyn RandomSource) -> Self {
        let now = clock.now();
        let (low, high) = TARGET_NUMBER_RANGE;
        RuleContext {
            minute: Some(now.minute()),
            hour: Some(now.hour()),
            target_number: Some(low + random.below(high - low + 1)),
        }
    }
}
