//! boathours main entrypoint.

use boathours::run;

fn main() {
    if let Err(e) = run() {
        boathours::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
