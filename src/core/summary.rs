//! Monthly aggregation of job durations.

use crate::models::job::Job;
use crate::utils::date::month_year_es;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Total minutes logged in one calendar month. Derived on demand, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub total_minutes: i64,
}

impl MonthTotal {
    /// Spanish display label, e.g. "Marzo 2024".
    pub fn label(&self) -> String {
        month_year_es(self.year, self.month)
    }
}

/// Group jobs by calendar month and sum their durations, most recent
/// month first. Empty input yields an empty vec.
pub fn aggregate_monthly(jobs: &[Job]) -> Vec<MonthTotal> {
    let mut acc: BTreeMap<(i32, u32), i64> = BTreeMap::new();

    for job in jobs {
        let key = (job.date.year(), job.date.month());
        *acc.entry(key).or_insert(0) += job.duration as i64;
    }

    acc.into_iter()
        .rev()
        .map(|((year, month), total_minutes)| MonthTotal {
            year,
            month,
            total_minutes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::Location;
    use chrono::NaiveDate;

    fn job(date: &str, duration: u32) -> Job {
        Job {
            id: 0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            location: Location::Otro,
            duration,
            description: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_monthly(&[]).is_empty());
    }

    #[test]
    fn sums_within_a_month() {
        let jobs = [job("2024-03-05", 90), job("2024-03-20", 45)];
        let totals = aggregate_monthly(&jobs);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].year, 2024);
        assert_eq!(totals[0].month, 3);
        assert_eq!(totals[0].total_minutes, 135);
        assert_eq!(totals[0].label(), "Marzo 2024");
    }

    #[test]
    fn orders_months_descending_without_duplicates() {
        let jobs = [
            job("2024-01-10", 30),
            job("2024-03-05", 60),
            job("2023-12-31", 15),
            job("2024-03-28", 60),
        ];
        let totals = aggregate_monthly(&jobs);

        let keys: Vec<(i32, u32)> = totals.iter().map(|t| (t.year, t.month)).collect();
        assert_eq!(keys, vec![(2024, 3), (2024, 1), (2023, 12)]);

        let mut seen = keys.clone();
        seen.dedup();
        assert_eq!(seen, keys);
    }

    #[test]
    fn conserves_total_duration() {
        let jobs = [
            job("2024-01-10", 30),
            job("2024-02-01", 120),
            job("2024-02-29", 45),
            job("2025-06-15", 7),
        ];
        let per_month: i64 = aggregate_monthly(&jobs).iter().map(|t| t.total_minutes).sum();
        let direct: i64 = jobs.iter().map(|j| j.duration as i64).sum();
        assert_eq!(per_month, direct);
    }
}
