// src/export/model.rs

use crate::models::job::Job;

/// Column headers per report format.
pub(crate) const CSV_HEADERS: [&str; 4] = ["Fecha", "Locación", "Duración (min)", "Descripción"];

pub(crate) const XLSX_HEADERS: [&str; 5] = [
    "Fecha",
    "Locación",
    "Duración (min)",
    "Duración (hh:mm)",
    "Descripción",
];

pub(crate) const PDF_HEADERS: [&str; 3] = ["Fecha", "Descripción", "Duración"];

pub(crate) fn csv_row(job: &Job) -> [String; 4] {
    [
        job.date_str(),
        job.location.label().to_string(),
        job.duration.to_string(),
        job.description.clone(),
    ]
}

/// The document report never leaves a description cell blank.
pub(crate) fn description_or_na(job: &Job) -> &str {
    if job.description.trim().is_empty() {
        "N/A"
    } else {
        &job.description
    }
}
