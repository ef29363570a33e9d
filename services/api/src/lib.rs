mod cli;
mod demo;
mod infra;
mod reports;
mod routes;
mod server;

use broker_readiness::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
