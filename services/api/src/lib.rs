mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use skills_pathway::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
