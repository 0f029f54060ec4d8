fn main() {
    teller::telemetry::init();

    if let Err(err) = teller::app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
