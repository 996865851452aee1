use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use usermenu::core::config;
use usermenu::tui;

#[derive(Parser)]
#[command(
    name = "usermenu",
    version,
    about = "Interactive menu for creating and deleting user accounts"
)]
struct Args {}

fn main() -> std::io::Result<()> {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, loaded) = match config::load_config() {
        Ok((c, source)) => (c, Ok(source)),
        Err(e) => (config::UserMenuConfig::default(), Err(e)),
    };
    let config = config::resolve(&file_config);

    // File logger only: the terminal belongs to the menu
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    // Logged only now: the log file comes out of the config itself
    match loaded {
        Ok(source) => log::info!("{}", source),
        Err(e) => log::warn!("Ignoring config file: {}", e),
    }
    log::debug!("Config: {:?}", file_config);
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::info!(
        "usermenu starting up (home root {}, shell {})",
        config.home_root.display(),
        config.login_shell
    );

    tui::run(config)
}
