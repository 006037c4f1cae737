use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg)
                    .unwrap_or_else(|e| format!("<unreadable config: {e}>"))
            );
        }

        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if launch(&chosen, &path) {
                success(format!("Configuration edited with '{}'.", chosen));
            } else if chosen != fallback {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'.",
                    chosen, fallback
                ));
                if launch(&fallback, &path) {
                    success(format!("Configuration edited with '{}'.", fallback));
                } else {
                    error(format!("Could not open an editor for {}", path.display()));
                }
            } else {
                error(format!("Could not open an editor for {}", path.display()));
            }
        }
    }

    Ok(())
}

/// $EDITOR / $VISUAL, or the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
