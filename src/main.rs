use std::process::ExitCode;

use dotenv::dotenv;
use employee_tracker::config::DbConfig;
use employee_tracker::errors::AppError;
use employee_tracker::prompt::LinePrompter;
use employee_tracker::{db, menu};
use log::info;

async fn run() -> Result<(), AppError> {
    let config = DbConfig::from_env()?;
    let pool = db::connect(&config).await?;

    let mut prompter = LinePrompter::stdio();
    menu::run(&pool, &mut prompter).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    info!("Starting employee tracker");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
