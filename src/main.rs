//! rPoolBoard main entrypoint.

use rpoolboard::run;
use rpoolboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
