use levelog::logger::*;

fn main() {
    if let Err(err) = levelog::run() {
        error!("levelog failed: {}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
