// src/export/mod.rs

mod csv;
mod fs_utils;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;

use crate::config::Config;
use crate::core::summary::{MonthTotal, aggregate_monthly};
use crate::errors::AppResult;
use crate::models::job::Job;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// MIME type sent along with the generated file.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Read-only view of the job records. The reporting code only ever needs
/// the full set in display order plus the per-month sums, so this is the
/// whole surface; the SQLite layer implements it.
pub trait JobStore {
    fn jobs_by_date_desc(&mut self) -> AppResult<Vec<Job>>;

    fn monthly_totals(&mut self) -> AppResult<Vec<MonthTotal>> {
        Ok(aggregate_monthly(&self.jobs_by_date_desc()?))
    }
}

/// Presentation inputs shared by the XLSX and PDF reports.
pub struct ReportStyle {
    pub title: String,
    pub author: String,
    pub logo_path: Option<PathBuf>,
}

impl ReportStyle {
    pub fn from_config(cfg: &Config) -> Self {
        let logo = cfg.logo_path.trim();
        Self {
            title: cfg.report_title.clone(),
            author: cfg.author.clone(),
            logo_path: if logo.is_empty() {
                None
            } else {
                Some(expand_tilde(logo))
            },
        }
    }
}

/// One generated report: a named byte buffer plus its content type.
/// Lives only for the duration of a single export request.
pub struct ReportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// `trabajos_<YYYYMMDD_HHMM>.<ext>`, stamped with the generation time.
pub(crate) fn report_filename(format: &ExportFormat, stamp: &DateTime<Local>) -> String {
    format!("trabajos_{}.{}", stamp.format("%Y%m%d_%H%M"), format.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_embeds_generation_time() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(
            report_filename(&ExportFormat::Csv, &stamp),
            "trabajos_20240305_1430.csv"
        );
        assert_eq!(
            report_filename(&ExportFormat::Pdf, &stamp),
            "trabajos_20240305_1430.pdf"
        );
    }

    #[test]
    fn content_types() {
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
        assert_eq!(
            ExportFormat::Xlsx.content_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
    }
}
