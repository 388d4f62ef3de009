use clap::Parser;
use gym_management::{logger, GymConfig, Menu};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GymConfig::parse();

    logger::init_logger(config.verbose, config.json_logs);
    tracing::debug!("config: {:?}", config);

    let logic = config.build_logic();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(logic, stdin.lock(), stdout.lock());

    menu.run().await?;

    Ok(())
}
