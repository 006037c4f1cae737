//! Date helpers and the Spanish month-name table used by reports.

use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Fixed English → Spanish month-name table, loaded once at compile time.
const MESES_ES: [(&str, &str); 12] = [
    ("January", "Enero"),
    ("February", "Febrero"),
    ("March", "Marzo"),
    ("April", "Abril"),
    ("May", "Mayo"),
    ("June", "Junio"),
    ("July", "Julio"),
    ("August", "Agosto"),
    ("September", "Septiembre"),
    ("October", "Octubre"),
    ("November", "Noviembre"),
    ("December", "Diciembre"),
];

/// Translate an English month name to Spanish. Names not present in the
/// table pass through untranslated.
pub fn month_es(name_en: &str) -> &str {
    for (en, es) in MESES_ES {
        if en == name_en {
            return es;
        }
    }
    name_en
}

/// "Mes Año" label, e.g. `month_year_es(2024, 3)` → "Marzo 2024".
pub fn month_year_es(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => format!("{} {}", month_es(&d.format("%B").to_string()), year),
        None => format!("{} {}", month, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_all_twelve_months() {
        assert_eq!(month_es("January"), "Enero");
        assert_eq!(month_es("March"), "Marzo");
        assert_eq!(month_es("September"), "Septiembre");
        assert_eq!(month_es("December"), "Diciembre");
    }

    #[test]
    fn unknown_month_passes_through() {
        assert_eq!(month_es("Brumaire"), "Brumaire");
        assert_eq!(month_es(""), "");
    }

    #[test]
    fn month_year_label() {
        assert_eq!(month_year_es(2024, 3), "Marzo 2024");
        assert_eq!(month_year_es(2025, 12), "Diciembre 2025");
    }
}
