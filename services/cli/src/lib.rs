mod cli;
mod demo;
mod infra;

use nil_scoring::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
