// src/export/pdf_export.rs

use crate::core::summary::MonthTotal;
use crate::errors::AppResult;
use crate::export::ReportStyle;
use crate::export::model::{PDF_HEADERS, description_or_na};
use crate::export::pdf::{JobTableRow, PdfManager};
use crate::models::job::Job;
use crate::utils::date::month_es;
use crate::utils::formatting::hours_minutes;
use chrono::{DateTime, Local};

/// Wrap width (in characters) matching the description column.
const DESC_WRAP_COLS: usize = 64;

/// Render the document report: cover, jobs table, monthly totals and the
/// grand total.
pub(crate) fn render_pdf(
    jobs: &[Job],
    totals: &[MonthTotal],
    style: &ReportStyle,
    stamp: &DateTime<Local>,
) -> AppResult<Vec<u8>> {
    let rows: Vec<JobTableRow> = jobs
        .iter()
        .map(|job| JobTableRow {
            date: job.date.format("%d/%m/%Y").to_string(),
            desc: textwrap::wrap(description_or_na(job), DESC_WRAP_COLS)
                .into_iter()
                .map(|line| line.into_owned())
                .collect(),
            duration: hours_minutes(job.duration as i64),
        })
        .collect();

    let total_all: i64 = jobs.iter().map(|j| j.duration as i64).sum();

    let mut pdf = PdfManager::new();

    let month_year = format!(
        "{} {}",
        month_es(&stamp.format("%B").to_string()),
        stamp.format("%Y")
    );

    pdf.cover(
        &style.title,
        &format!("Informe de trabajos realizados – {month_year}"),
        &style.author,
        &format!("Fecha de descarga: {}", stamp.format("%d/%m/%Y %H:%M")),
    );

    pdf.jobs_table(&PDF_HEADERS, &rows);

    if !totals.is_empty() {
        pdf.section_title("Totales Mensuales");
        for total in totals {
            pdf.totals_line(
                &format!("{}:", total.label()),
                &hours_minutes(total.total_minutes),
            );
        }
    }

    // Shown only when something was actually logged
    if total_all > 0 {
        pdf.section_title(&format!("Total General: {}", hours_minutes(total_all)));
    }

    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::aggregate_monthly;
    use crate::models::location::Location;
    use chrono::{NaiveDate, TimeZone};

    fn style() -> ReportStyle {
        ReportStyle {
            title: "Mantenimiento de Espacios Verdes".to_string(),
            author: "Lucas Soria".to_string(),
            logo_path: None,
        }
    }

    fn job(date: &str, duration: u32, desc: &str) -> Job {
        Job {
            id: 0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            location: Location::Delegacion,
            duration,
            description: desc.to_string(),
            created_at: String::new(),
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn renders_totals_sections() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 25, 9, 0, 0).unwrap();
        let jobs = [
            job("2024-03-05", 90, "corte de césped y bordes"),
            job("2024-03-20", 45, "poda"),
        ];
        let totals = aggregate_monthly(&jobs);

        let bytes = render_pdf(&jobs, &totals, &style(), &stamp).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"Totales Mensuales"));
        assert!(contains(&bytes, b"Total General: 2h 15m"));
    }

    #[test]
    fn empty_set_omits_grand_total() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 25, 9, 0, 0).unwrap();
        let bytes = render_pdf(&[], &[], &style(), &stamp).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(!contains(&bytes, b"Total General"));
        assert!(!contains(&bytes, b"Totales Mensuales"));
    }

    #[test]
    fn long_descriptions_wrap_into_multiple_lines() {
        let long = "mantenimiento integral de canteros, desmalezado completo del \
                    sector norte, riego profundo y reposición de especies dañadas \
                    por la última tormenta de verano";
        let wrapped: Vec<_> = textwrap::wrap(long, DESC_WRAP_COLS);
        assert!(wrapped.len() > 1);

        let stamp = Local.with_ymd_and_hms(2024, 3, 25, 9, 0, 0).unwrap();
        let jobs = [job("2024-03-05", 30, long)];
        let bytes = render_pdf(&jobs, &aggregate_monthly(&jobs), &style(), &stamp).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
