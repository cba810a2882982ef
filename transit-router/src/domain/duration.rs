//! Travel durations.

use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

use chrono::Duration;

/// An additive travel time.
///
/// Durations accumulate with [`add`](Self::add) and are duplicated with
/// [`copy`](Self::copy). Being a plain value, a copy never shares storage with
/// its source, so summing into an aggregate can't alter the duration an edge
/// reports for itself.
///
/// # Examples
///
/// ```
/// use transit_router::domain::DurationJourney;
///
/// let leg = DurationJourney::from_secs(90);
/// let mut total = leg.copy();
/// total.add(&DurationJourney::from_mins(2));
///
/// assert_eq!(total.as_secs(), 210);
/// assert_eq!(leg.as_secs(), 90);
/// assert_eq!(total.to_string(), "0:03:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationJourney(Duration);

impl DurationJourney {
    /// A zero-length duration.
    pub fn zero() -> Self {
        Self(Duration::zero())
    }

    /// Create a duration from whole seconds, saturating at the bounds of
    /// the representable range.
    pub fn from_secs(secs: i64) -> Self {
        Duration::try_seconds(secs).map_or_else(|| Self::saturated(secs < 0), Self)
    }

    /// Create a duration from whole seconds, or `None` if it is out of range.
    pub fn try_from_secs(secs: i64) -> Option<Self> {
        Duration::try_seconds(secs).map(Self)
    }

    /// Create a duration from whole minutes, saturating like
    /// [`from_secs`](Self::from_secs).
    pub fn from_mins(mins: i64) -> Self {
        Duration::try_minutes(mins).map_or_else(|| Self::saturated(mins < 0), Self)
    }

    /// Accumulate `other` into this duration.
    ///
    /// Saturates instead of overflowing.
    pub fn add(&mut self, other: &DurationJourney) {
        self.0 = match self.0.checked_add(&other.0) {
            Some(sum) => sum,
            None => Self::saturated(other.0 < Duration::zero()).0,
        };
    }

    /// Returns an independent duplicate.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Returns the duration in whole seconds.
    pub fn as_secs(&self) -> i64 {
        self.0.num_seconds()
    }

    fn saturated(negative: bool) -> Self {
        Self(if negative { Duration::MIN } else { Duration::MAX })
    }

    /// Returns the underlying chrono duration.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for DurationJourney {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Duration> for DurationJourney {
    fn from(d: Duration) -> Self {
        Self(d)
    }
}

impl AddAssign<&DurationJourney> for DurationJourney {
    fn add_assign(&mut self, rhs: &DurationJourney) {
        DurationJourney::add(self, rhs);
    }
}

impl Sum for DurationJourney {
    fn sum<I: Iterator<Item = DurationJourney>>(iter: I) -> Self {
        iter.fold(DurationJourney::zero(), |mut acc, d| {
            acc += &d;
            acc
        })
    }
}

impl<'a> Sum<&'a DurationJourney> for DurationJourney {
    fn sum<I: Iterator<Item = &'a DurationJourney>>(iter: I) -> Self {
        iter.fold(DurationJourney::zero(), |mut acc, d| {
            acc += d;
            acc
        })
    }
}

/// Formats as `H:MM:SS`.
impl fmt::Display for DurationJourney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.as_secs();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.unsigned_abs();
        write!(
            f,
            "{sign}{}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}
