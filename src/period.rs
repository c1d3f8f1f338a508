use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Revenue-aggregation window selectable on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Unknown tokens degrade silently to `Week` so the dashboard is
    /// always renderable.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "day" => Period::Day,
            "week" => Period::Week,
            "month" => Period::Month,
            "year" => Period::Year,
            _ => Period::Week,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Day => "Today",
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Year => "This Year",
        }
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::Week
    }
}

/// Inclusive `[start, end]` window for period math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodRange {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Maps a period to its concrete window anchored at `now`. The end is
/// always today at 23:59:59.999; the start depends on the period.
pub fn resolve_range(period: Period, now: NaiveDateTime) -> PeriodRange {
    let today = now.date();
    let start_date = match period {
        Period::Day => today,
        Period::Week => week_start(today),
        Period::Month => today.with_day(1).unwrap_or(today),
        Period::Year => today.with_day(1).and_then(|d| d.with_month(1)).unwrap_or(today),
    };

    PeriodRange {
        start: start_date.and_time(NaiveTime::MIN),
        end: today.and_time(end_of_day()),
    }
}

/// Most recent Sunday, inclusive of today.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}
