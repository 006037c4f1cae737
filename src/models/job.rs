use super::location::Location;
use chrono::{Local, NaiveDate};

/// A logged maintenance job.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: i64,
    pub date: NaiveDate,       // ⇔ jobs.date (TEXT "YYYY-MM-DD")
    pub location: Location,    // ⇔ jobs.location ('delegacion'..'otro')
    pub duration: u32,         // ⇔ jobs.duration (minutes, >= 0)
    pub description: String,   // ⇔ jobs.description
    pub created_at: String,    // ⇔ jobs.created_at (TEXT, ISO8601)
}

impl Job {
    /// Constructor for jobs created from the CLI.
    /// `created_at` is stamped with the local clock; the id is assigned
    /// by the database on insert.
    pub fn new(
        date: NaiveDate,
        location: Location,
        duration: u32,
        description: String,
    ) -> Self {
        Self {
            id: 0,
            date,
            location,
            duration,
            description,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
