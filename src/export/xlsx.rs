// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::ReportStyle;
use crate::export::model::XLSX_HEADERS;
use crate::models::job::Job;
use crate::utils::date::month_es;
use crate::utils::formatting::hours_minutes;
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, FormatAlign, Image, Workbook};

/// Fixed presentation constants.
const COL_WIDTHS: [f64; 5] = [14.0, 20.0, 16.0, 20.0, 40.0];
const LOGO_SIZE_PX: f64 = 80.0;

/// Render the spreadsheet report: title block, optional logo, one row per
/// job and a trailing TOTAL row.
pub(crate) fn render_xlsx(
    jobs: &[Job],
    style: &ReportStyle,
    stamp: &DateTime<Local>,
) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Trabajos").map_err(xlsx_err)?;

    // ---------------------------
    // Styles
    // ---------------------------
    let title_fmt = Format::new().set_bold().set_font_size(16.0);
    let subtitle_fmt = Format::new().set_italic().set_font_size(12.0);
    let bold = Format::new().set_bold();
    let right = Format::new().set_align(FormatAlign::Right);
    let bold_right = Format::new().set_bold().set_align(FormatAlign::Right);

    // ---------------------------
    // Title block
    // ---------------------------
    let month_year = format!(
        "{} {}",
        month_es(&stamp.format("%B").to_string()),
        stamp.format("%Y")
    );

    worksheet
        .write_with_format(0, 0, style.title.as_str(), &title_fmt)
        .map_err(xlsx_err)?;
    worksheet
        .write_with_format(
            1,
            0,
            format!("Informe de trabajos realizados – {month_year}"),
            &subtitle_fmt,
        )
        .map_err(xlsx_err)?;
    worksheet
        .write_with_format(2, 0, style.author.as_str(), &bold)
        .map_err(xlsx_err)?;
    worksheet
        .write(
            3,
            0,
            format!("Fecha de descarga: {}", stamp.format("%d/%m/%Y %H:%M")),
        )
        .map_err(xlsx_err)?;

    // ---------------------------
    // Logo (skipped silently when the file is missing)
    // ---------------------------
    if let Some(path) = &style.logo_path
        && path.exists()
        && let Ok(image) = Image::new(path)
    {
        let (w, h) = (image.width(), image.height());
        if w > 0.0 && h > 0.0 {
            let image = image
                .set_scale_width(LOGO_SIZE_PX / w)
                .set_scale_height(LOGO_SIZE_PX / h);
            worksheet.insert_image(0, 4, &image).map_err(xlsx_err)?;
        }
    }

    // ---------------------------
    // Table header (two blank rows after the title block)
    // ---------------------------
    let header_row: u32 = 6;
    for (col, header) in XLSX_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &bold)
            .map_err(xlsx_err)?;
    }

    // ---------------------------
    // Data rows
    // ---------------------------
    let mut total_minutes: i64 = 0;

    for (i, job) in jobs.iter().enumerate() {
        let row = header_row + 1 + i as u32;

        worksheet.write(row, 0, job.date_str()).map_err(xlsx_err)?;
        worksheet
            .write(row, 1, job.location.label())
            .map_err(xlsx_err)?;
        worksheet.write(row, 2, job.duration).map_err(xlsx_err)?;
        worksheet
            .write_with_format(row, 3, hours_minutes(job.duration as i64), &right)
            .map_err(xlsx_err)?;
        worksheet
            .write(row, 4, job.description.as_str())
            .map_err(xlsx_err)?;

        total_minutes += job.duration as i64;
    }

    // ---------------------------
    // TOTAL row (one blank row after the data)
    // ---------------------------
    let total_row = header_row + jobs.len() as u32 + 2;

    worksheet
        .write_with_format(total_row, 1, "TOTAL", &bold)
        .map_err(xlsx_err)?;
    worksheet
        .write_with_format(total_row, 2, total_minutes, &bold_right)
        .map_err(xlsx_err)?;
    worksheet
        .write_with_format(total_row, 3, hours_minutes(total_minutes), &bold_right)
        .map_err(xlsx_err)?;

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in COL_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w)
            .map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

fn xlsx_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::Location;
    use chrono::{NaiveDate, TimeZone};

    fn style() -> ReportStyle {
        ReportStyle {
            title: "Mantenimiento de Espacios Verdes".to_string(),
            author: "Lucas Soria".to_string(),
            logo_path: None,
        }
    }

    fn job(date: &str, duration: u32) -> Job {
        Job {
            id: 0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            location: Location::Optica,
            duration,
            description: "riego".to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn produces_a_workbook() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let jobs = [job("2024-03-05", 90), job("2024-03-20", 45)];

        let bytes = render_xlsx(&jobs, &style(), &stamp).unwrap();

        // XLSX files are zip containers
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn empty_set_still_renders_title_and_total() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let bytes = render_xlsx(&[], &style(), &stamp).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn missing_logo_is_not_an_error() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let mut style = style();
        style.logo_path = Some("static/img/no-such-logo.png".into());

        assert!(render_xlsx(&[job("2024-03-05", 60)], &style, &stamp).is_ok());
    }
}
