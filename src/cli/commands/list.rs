use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_jobs_desc;
use crate::errors::AppResult;
use crate::export::JobStore;
use crate::ui::messages::info;
use crate::utils::formatting::hours_minutes;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { page } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let jobs = load_jobs_desc(&mut pool)?;

        if jobs.is_empty() {
            info("No hay trabajos registrados.");
            return Ok(());
        }

        let page_size = cfg.page_size.max(1);
        let pages = jobs.len().div_ceil(page_size);
        let current = page.unwrap_or(1).clamp(1, pages);

        let start = (current - 1) * page_size;
        let end = (start + page_size).min(jobs.len());

        let mut table = Table::new(vec![
            Column { header: "ID".into(), width: 4 },
            Column { header: "Fecha".into(), width: 10 },
            Column { header: "Locación".into(), width: 12 },
            Column { header: "Duración".into(), width: 9 },
            Column { header: "Descripción".into(), width: 40 },
        ]);

        for job in &jobs[start..end] {
            table.add_row(vec![
                job.id.to_string(),
                job.date_str(),
                job.location.label().to_string(),
                hours_minutes(job.duration as i64),
                job.description.clone(),
            ]);
        }

        println!("\n{}", table.render());
        println!("Página {} de {} ({} trabajos)", current, pages, jobs.len());

        // Monthly totals over the WHOLE set, not just the visible page
        let totals = pool.monthly_totals()?;

        println!("\nTotales mensuales:");
        for total in &totals {
            println!("  {}: {}", total.label(), hours_minutes(total.total_minutes));
        }
        println!();
    }
    Ok(())
}
