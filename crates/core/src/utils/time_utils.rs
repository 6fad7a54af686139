use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for evaluation dates.
/// The inventory is kept in Jakarta, so "today" is a Jakarta calendar date.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::Asia::Jakarta;

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// Use this whenever you need to derive a "business date" from a timestamp.
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Source of the evaluation date for depreciation.
///
/// Services take a clock instead of reading the system time so that tests
/// can pin "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_VALUATION_TZ)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        valuation_date_from_utc(Utc::now(), self.tz)
    }
}

/// Clock that always answers the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_valuation_date_crosses_midnight_in_jakarta() {
        // 18:30 UTC is already the next day in UTC+7
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 18, 30, 0).unwrap();
        assert_eq!(
            valuation_date_from_utc(instant, DEFAULT_VALUATION_TZ),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), clock.today());
    }
}
