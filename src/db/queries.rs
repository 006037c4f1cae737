use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::JobStore;
use crate::models::job::Job;
use crate::models::location::Location;
use crate::models::photo::{JobPhoto, PhotoKind};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

/// Mapping DB → Job (reused for every job query).
pub fn map_row(row: &Row) -> Result<Job> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let loc_str: String = row.get("location")?;
    let location = Location::from_db_str(&loc_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidLocation(loc_str.clone())),
        )
    })?;

    Ok(Job {
        id: row.get("id")?,
        date,
        location,
        duration: row.get("duration")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
    })
}

/// All jobs, newest first (same ordering the list and the reports use).
pub fn load_jobs_desc(pool: &mut DbPool) -> AppResult<Vec<Job>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, date, location, duration, description, created_at
         FROM jobs
         ORDER BY date DESC, created_at DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_job(pool: &mut DbPool, id: i64) -> AppResult<Option<Job>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, date, location, duration, description, created_at
         FROM jobs
         WHERE id = ?1",
    )?;

    let mut rows = stmt.query_map([id], map_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn insert_job(conn: &Connection, job: &Job) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO jobs (date, location, duration, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            job.date_str(),
            job.location.to_db_str(),
            job.duration,
            job.description,
            job.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_job(conn: &Connection, id: i64) -> AppResult<usize> {
    conn.execute("DELETE FROM job_tags WHERE job_id = ?1", [id])?;
    conn.execute("DELETE FROM job_photos WHERE job_id = ?1", [id])?;
    let n = conn.execute("DELETE FROM jobs WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn insert_photo(conn: &Connection, job_id: i64, photo: &str, kind: PhotoKind) -> AppResult<()> {
    conn.execute(
        "INSERT INTO job_photos (job_id, photo, kind, uploaded_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            job_id,
            photo,
            kind.to_db_str(),
            chrono::Local::now().to_rfc3339()
        ],
    )?;
    Ok(())
}

pub fn load_photos(pool: &mut DbPool, job_id: i64) -> AppResult<Vec<JobPhoto>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, job_id, photo, kind, uploaded_at
         FROM job_photos
         WHERE job_id = ?1
         ORDER BY uploaded_at ASC",
    )?;

    let rows = stmt.query_map([job_id], |row| {
        let kind_str: String = row.get("kind")?;
        let kind = PhotoKind::from_db_str(&kind_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidPhoto(kind_str.clone())),
            )
        })?;

        Ok(JobPhoto {
            id: row.get("id")?,
            job_id: row.get("job_id")?,
            photo: row.get("photo")?,
            kind,
            uploaded_at: row.get("uploaded_at")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Attach a tag by name, creating it on first use.
pub fn attach_tag(conn: &Connection, job_id: i64, name: &str) -> AppResult<()> {
    conn.execute("INSERT OR IGNORE INTO tags (name) VALUES (?1)", [name])?;
    conn.execute(
        "INSERT OR IGNORE INTO job_tags (job_id, tag_id)
         SELECT ?1, id FROM tags WHERE name = ?2",
        params![job_id, name],
    )?;
    Ok(())
}

pub fn tag_names(pool: &mut DbPool, job_id: i64) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare(
        "SELECT t.name FROM tags t
         JOIN job_tags jt ON jt.tag_id = t.id
         WHERE jt.job_id = ?1
         ORDER BY t.name ASC",
    )?;

    let rows = stmt.query_map([job_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Read-only view the reporting core works against.
impl JobStore for DbPool {
    fn jobs_by_date_desc(&mut self) -> AppResult<Vec<Job>> {
        load_jobs_desc(self)
    }
}
