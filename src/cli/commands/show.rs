use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_job, load_photos, tag_names};
use crate::errors::{AppError, AppResult};
use crate::models::photo::PhotoKind;
use crate::utils::formatting::split_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let job = load_job(&mut pool, *id)?.ok_or(AppError::JobNotFound(*id))?;
        let photos = load_photos(&mut pool, *id)?;
        let tags = tag_names(&mut pool, *id)?;

        let (hours, minutes) = split_minutes(job.duration);

        println!("\n=== Trabajo #{} ===", job.id);
        println!("Fecha:       {}", job.date_str());
        println!("Locación:    {}", job.location.label());
        println!(
            "Duración:    {}h {:02}m ({} min)",
            hours, minutes, job.duration
        );

        if job.description.is_empty() {
            println!("Descripción: --");
        } else {
            println!("Descripción: {}", job.description);
        }

        if tags.is_empty() {
            println!("Etiquetas:   --");
        } else {
            let labels: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
            println!("Etiquetas:   {}", labels.join(" "));
        }

        let before = photos.iter().filter(|p| p.kind == PhotoKind::Before).count();
        let after = photos.iter().filter(|p| p.kind == PhotoKind::After).count();

        println!("Fotos:       {} antes / {} después", before, after);
        if before > 0 && after > 0 {
            println!("             Comparativa antes/después disponible");
        }

        for photo in &photos {
            println!("  [{}] {}", photo.kind.label(), photo.photo);
        }
        println!();
    }
    Ok(())
}
