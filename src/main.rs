use driftfield::field::FieldConfig;

fn main() {
    env_logger::init();

    if let Err(e) = driftfield::window::run(FieldConfig::default()) {
        eprintln!("backdrop failed: {}", e);
        std::process::exit(1);
    }
}
