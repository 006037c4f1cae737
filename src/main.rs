//! jardinlog main entrypoint.

use jardinlog::run;
use jardinlog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e.to_string());
        std::process::exit(1);
    }
}
