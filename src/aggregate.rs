use crate::filter::in_range;
use crate::models::Appointment;
use crate::period::{resolve_range, Period, PeriodRange};
use chrono::NaiveDateTime;

/// Landing-view aggregates. `count` covers the whole scoped list,
/// `week_count` always uses the week window, `period_amount` follows
/// the period toggle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub count: usize,
    pub week_count: usize,
    pub period_amount: f64,
}

/// Coerces a decimal string to a number; empty or malformed input
/// contributes exactly 0, never NaN.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

pub fn sum_amounts<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a Appointment>,
{
    records
        .into_iter()
        .map(|record| parse_amount(&record.amount))
        .sum()
}

pub fn amount_in_range(records: &[Appointment], range: &PeriodRange) -> f64 {
    sum_amounts(in_range(records, range).into_iter())
}

pub fn count_in_range(records: &[Appointment], range: &PeriodRange) -> usize {
    in_range(records, range).len()
}

pub fn compute_totals(records: &[Appointment], period: Period, now: NaiveDateTime) -> Totals {
    let week = resolve_range(Period::Week, now);
    let selected = resolve_range(period, now);
    Totals {
        count: records.len(),
        week_count: count_in_range(records, &week),
        period_amount: amount_in_range(records, &selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, amount: &str, date: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            client_name: "Ana".to_string(),
            appointment_date: date.to_string(),
            service_type: "tarot".to_string(),
            amount: amount.to_string(),
            payment_status: None,
            attention_flag: false,
            attention_note: None,
            extra: serde_json::Map::new(),
        }
    }

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn parse_amount_coerces_malformed_input_to_zero() {
        assert_eq!(parse_amount("10.50"), 10.50);
        assert_eq!(parse_amount(" 5 "), 5.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn sum_coerces_mixed_amounts() {
        let records = vec![
            record("a1", "10.50", "2026-08-19"),
            record("a2", "", "2026-08-19"),
            record("a3", "abc", "2026-08-19"),
            record("a4", "5", "2026-08-19"),
        ];
        assert_eq!(sum_amounts(&records), 15.50);
        assert!(!sum_amounts(&records).is_nan());
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn totals_count_ignores_the_period_toggle() {
        let records = vec![
            record("today", "100", "2026-08-19"),
            record("old", "25", "2026-02-01"),
        ];
        let week = compute_totals(&records, Period::Week, anchor());
        let year = compute_totals(&records, Period::Year, anchor());

        assert_eq!(week.count, 2);
        assert_eq!(year.count, 2);
        assert_eq!(week.week_count, year.week_count);
        assert_eq!(week.week_count, 1);
        assert_eq!(week.period_amount, 100.0);
        assert_eq!(year.period_amount, 125.0);
    }

    #[test]
    fn unparsable_date_never_reaches_the_period_amount() {
        let records = vec![
            record("good", "40", "2026-08-19"),
            record("bad", "50", "someday"),
        ];
        let totals = compute_totals(&records, Period::Year, anchor());
        assert_eq!(totals.count, 2);
        assert_eq!(totals.period_amount, 40.0);
    }
}
