// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, csv_row};
use crate::models::job::Job;
use csv::Writer;

/// Render the tabular report into an in-memory buffer: one header row
/// plus one row per job, in store order. No totals row.
pub(crate) fn render_csv(jobs: &[Job]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(CSV_HEADERS).map_err(csv_err)?;

    for job in jobs {
        wtr.write_record(csv_row(job)).map_err(csv_err)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))
}

fn csv_err(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV write error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::Location;
    use chrono::NaiveDate;

    fn job(date: &str, location: Location, duration: u32, desc: &str) -> Job {
        Job {
            id: 0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            location,
            duration,
            description: desc.to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn one_line_per_job_plus_header() {
        let jobs = [
            job("2024-03-20", Location::Farmacia, 45, "poda de setos"),
            job("2024-03-05", Location::Delegacion, 90, "corte de césped"),
        ];

        let out = String::from_utf8(render_csv(&jobs).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Fecha,Locación,Duración (min),Descripción");
        assert_eq!(lines[1], "2024-03-20,Farmacia,45,poda de setos");
        assert_eq!(lines[2], "2024-03-05,Delegación,90,corte de césped");
    }

    #[test]
    fn empty_set_yields_header_only() {
        let out = String::from_utf8(render_csv(&[]).unwrap()).unwrap();
        assert_eq!(out.lines().count(), 1);
    }
}
