use colored::Colorize;
use ip_subnet_check::config::Config;
use ip_subnet_check::{logging, Session};
use std::error::Error;
use std::io;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = run() {
        log::error!("Unexpected error: {e}");
        println!("{}", format!("An unexpected error occurred: {e}").red());
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.color.apply();
    logging::init(&config)?;
    config.log_warnings();
    log::info!("#Start main()");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run()?;

    log::info!("#End main()");
    Ok(())
}
