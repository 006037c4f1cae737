use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::export::ReportStyle;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let style = ReportStyle::from_config(cfg);

        let out_dir = out.as_deref().unwrap_or(".");

        ExportLogic::export(
            &mut pool,
            &style,
            format,
            Path::new(out_dir),
            file.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
