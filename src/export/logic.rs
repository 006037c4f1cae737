// src/export/logic.rs

use crate::core::summary::aggregate_monthly;
use crate::errors::AppResult;
use crate::export::csv::render_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::pdf_export::render_pdf;
use crate::export::xlsx::render_xlsx;
use crate::export::{
    ExportFormat, JobStore, ReportFile, ReportStyle, notify_export_success, report_filename,
};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export driver.
pub struct ExportLogic;

impl ExportLogic {
    /// Run one export end to end: load the full job set, render it, and
    /// write the named byte buffer to disk. Returns the destination path.
    ///
    /// - `out_dir`: directory receiving the auto-named file
    /// - `file`: explicit destination path, overrides `out_dir`
    pub fn export<S: JobStore>(
        store: &mut S,
        style: &ReportStyle,
        format: &ExportFormat,
        out_dir: &Path,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let stamp = Local::now();
        let report = Self::render(store, style, format, &stamp)?;

        let dest = match file {
            Some(f) => PathBuf::from(f),
            None => out_dir.join(&report.filename),
        };

        ensure_writable(&dest, force)?;
        fs::write(&dest, &report.bytes)?;

        notify_export_success(&format.as_str().to_uppercase(), &dest);
        Ok(dest)
    }

    /// Produce the report for one request. The generation timestamp feeds
    /// the subtitle, the download stamp, and the filename alike, so two
    /// exports a minute apart get different names.
    pub fn render<S: JobStore>(
        store: &mut S,
        style: &ReportStyle,
        format: &ExportFormat,
        stamp: &DateTime<Local>,
    ) -> AppResult<ReportFile> {
        let jobs = store.jobs_by_date_desc()?;

        let bytes = match format {
            ExportFormat::Csv => render_csv(&jobs)?,
            ExportFormat::Xlsx => render_xlsx(&jobs, style, stamp)?,
            ExportFormat::Pdf => {
                let totals = aggregate_monthly(&jobs);
                render_pdf(&jobs, &totals, style, stamp)?
            }
        };

        Ok(ReportFile {
            filename: report_filename(format, stamp),
            content_type: format.content_type(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Job;
    use crate::models::location::Location;
    use chrono::{NaiveDate, TimeZone};

    struct FakeStore(Vec<Job>);

    impl JobStore for FakeStore {
        fn jobs_by_date_desc(&mut self) -> AppResult<Vec<Job>> {
            Ok(self.0.clone())
        }
    }

    fn job(date: &str, duration: u32) -> Job {
        Job {
            id: 0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            location: Location::Otro,
            duration,
            description: "desmalezado".to_string(),
            created_at: String::new(),
        }
    }

    fn style() -> ReportStyle {
        ReportStyle {
            title: "Mantenimiento de Espacios Verdes".to_string(),
            author: "Lucas Soria".to_string(),
            logo_path: None,
        }
    }

    #[test]
    fn render_names_and_types_the_buffer() {
        let mut store = FakeStore(vec![job("2024-03-20", 45), job("2024-03-05", 90)]);
        let stamp = Local.with_ymd_and_hms(2024, 3, 25, 18, 7, 0).unwrap();

        let report = ExportLogic::render(&mut store, &style(), &ExportFormat::Csv, &stamp).unwrap();

        assert_eq!(report.filename, "trabajos_20240325_1807.csv");
        assert_eq!(report.content_type, "text/csv");

        let text = String::from_utf8(report.bytes).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn store_totals_conserve_minutes() {
        let mut store = FakeStore(vec![
            job("2024-01-10", 30),
            job("2024-02-01", 120),
            job("2024-02-29", 45),
        ]);

        let totals = store.monthly_totals().unwrap();
        let sum: i64 = totals.iter().map(|t| t.total_minutes).sum();
        assert_eq!(sum, 195);
        assert_eq!(totals.len(), 2);
    }
}
