//! rAlarm main entrypoint.

use ralarm::run;

fn main() {
    env_logger::init();

    println!();
    if let Err(e) = run() {
        log::error!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
