use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::hours_minutes;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let jobs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?;
    let photos: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM job_photos", [], |row| row.get(0))?;
    let tags: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))?;

    println!("{}• Jobs:{} {}{}{}", CYAN, RESET, GREEN, jobs, RESET);
    println!("{}• Photos:{} {}", CYAN, RESET, photos);
    println!("{}• Tags:{} {}", CYAN, RESET, tags);

    //
    // 3) DATE RANGE + TOTAL DURATION
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM jobs", [], |row| row.get(0))?;
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM jobs", [], |row| row.get(0))?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    let total_minutes: i64 = pool
        .conn
        .query_row("SELECT IFNULL(SUM(duration), 0) FROM jobs", [], |row| {
            row.get(0)
        })?;

    println!(
        "{}• Total logged:{} {} ({} min)",
        CYAN,
        RESET,
        hours_minutes(total_minutes),
        total_minutes
    );

    println!();
    Ok(())
}
