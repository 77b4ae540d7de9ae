//! Time sources
//!
//! Date helpers that need "now" take a [`Clock`] instead of reading the
//! wall clock directly, so tests can pin the current time with
//! [`ManualClock`].

use chrono::{DateTime, Local, TimeDelta, Utc};

use crate::error::{Error, Result};

/// A source of the current time
pub trait Clock {
    /// Current instant in UTC
    fn utc_now(&self) -> DateTime<Utc>;

    /// Current instant in the local time zone
    fn now(&self) -> DateTime<Local> {
        self.utc_now().with_timezone(&Local)
    }
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualClock {
    current: DateTime<Utc>,
}

impl ManualClock {
    /// Clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: start }
    }

    /// Move the clock to `instant`
    pub fn set(&mut self, instant: DateTime<Utc>) {
        self.current = instant;
    }

    /// Move the clock by `delta`, which may be negative
    ///
    /// Fails with [`Error::OutOfRange`], leaving the clock unchanged, when
    /// the result falls outside the representable range.
    pub fn advance(&mut self, delta: TimeDelta) -> Result<()> {
        self.current = self
            .current
            .checked_add_signed(delta)
            .ok_or_else(|| Error::out_of_range("delta", delta))?;
        Ok(())
    }
}

impl Clock for ManualClock {
    fn utc_now(&self) -> DateTime<Utc> {
        self.current
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn utc_now(&self) -> DateTime<Utc> {
        (**self).utc_now()
    }

    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}
