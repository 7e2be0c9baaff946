//! rStatusCheck main entrypoint.

use rstatuscheck::run;
use rstatuscheck::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
