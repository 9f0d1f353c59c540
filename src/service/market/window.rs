use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

use crate::service::market::MarketServiceError;

/// Sampling granularity accepted by the history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
    Earnings,
}

impl Interval {
    /// Wire value for the `interval` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
            Interval::Earnings => "earnings",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = MarketServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Interval::Daily),
            "weekly" => Ok(Interval::Weekly),
            "monthly" => Ok(Interval::Monthly),
            "earnings" => Ok(Interval::Earnings),
            other => Err(MarketServiceError::InvalidInterval(other.to_string())),
        }
    }
}

/// Lookback token for seasonal views, `"1y"` through `"5y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalDuration {
    OneYear,
    TwoYears,
    ThreeYears,
    FourYears,
    FiveYears,
}

impl SeasonalDuration {
    pub fn years(self) -> u32 {
        match self {
            SeasonalDuration::OneYear => 1,
            SeasonalDuration::TwoYears => 2,
            SeasonalDuration::ThreeYears => 3,
            SeasonalDuration::FourYears => 4,
            SeasonalDuration::FiveYears => 5,
        }
    }
}

impl FromStr for SeasonalDuration {
    type Err = MarketServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1y" => Ok(SeasonalDuration::OneYear),
            "2y" => Ok(SeasonalDuration::TwoYears),
            "3y" => Ok(SeasonalDuration::ThreeYears),
            "4y" => Ok(SeasonalDuration::FourYears),
            "5y" => Ok(SeasonalDuration::FiveYears),
            other => Err(MarketServiceError::InvalidDuration(other.to_string())),
        }
    }
}

/// Inclusive start/end pair for one history query. `start <= end` always
/// holds for the durations this crate accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoricalWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
}

/// Compute the query window for a seasonal view.
///
/// Daily series subtract the lookback from today exactly (a Feb 29 start
/// clamps to Feb 28 in non-leap years). Aggregated series end on the first
/// of the current month and start on Jan 1 of the lookback year, so the
/// endpoint never returns a ragged leading partial period.
pub fn compute_window(
    lookback: SeasonalDuration,
    interval: Interval,
    today: NaiveDate,
) -> HistoricalWindow {
    let years = lookback.years();

    let (start, end) = match interval {
        Interval::Daily => (today - Months::new(12 * years), today),
        Interval::Weekly | Interval::Monthly | Interval::Earnings => {
            let month_start = today
                .with_day(1)
                .expect("the first of the month always exists");
            let year_start = NaiveDate::from_ymd_opt(today.year() - years as i32, 1, 1)
                .expect("Jan 1 always exists");
            (year_start, month_start)
        }
    };

    HistoricalWindow {
        start,
        end,
        interval,
    }
}
