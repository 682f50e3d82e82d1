use instruction_set::{generate, Config, CONFIG_FILE_NAME};
use tracing::error;

fn run() -> instruction_set::Result<()> {
    let config = Config::load_or_default(CONFIG_FILE_NAME)?;
    generate(&config)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
