use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::job::Job;
use crate::models::location::Location;
use crate::models::photo::PhotoKind;
use crate::ui::messages::success;
use crate::utils::date;

/// Register a maintenance job.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        location,
        duration,
        description,
        tags,
        photos,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse location
        //
        let loc = Location::from_code(location)
            .ok_or_else(|| AppError::InvalidLocation(location.to_string()))?;

        //
        // 3. Parse photo specs ("before:PATH" / "after:PATH")
        //
        let mut parsed_photos: Vec<(PhotoKind, String)> = Vec::new();
        for spec in photos {
            parsed_photos.push(parse_photo_spec(spec)?);
        }

        //
        // 4. Open DB and insert
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let job = Job::new(d, loc, *duration, description.clone());
        let id = AddLogic::apply(&mut pool, job, tags, &parsed_photos)?;

        success(format!("Job #{} registered for {}.", id, d));
    }

    Ok(())
}

fn parse_photo_spec(spec: &str) -> AppResult<(PhotoKind, String)> {
    if let Some((kind_str, path)) = spec.split_once(':')
        && let Some(kind) = PhotoKind::from_db_str(kind_str)
        && !path.is_empty()
    {
        return Ok((kind, path.to_string()));
    }
    Err(AppError::InvalidPhoto(spec.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_spec_parsing() {
        let (kind, path) = parse_photo_spec("before:fotos/a.jpg").unwrap();
        assert_eq!(kind, PhotoKind::Before);
        assert_eq!(path, "fotos/a.jpg");

        assert!(parse_photo_spec("during:x.jpg").is_err());
        assert!(parse_photo_spec("before:").is_err());
        assert!(parse_photo_spec("no-colon").is_err());
    }
}
