//! Seed command - Ensures the demo accounts exist.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserStore};
use crate::services::seed_demo_users;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let report = seed_demo_users(&UserStore::new(db.get_connection())).await;
    println!(
        "created: {}, skipped: {}, failed: {}",
        report.created, report.skipped, report.failed
    );

    if report.failed > 0 {
        return Err(AppError::internal(format!(
            "{} demo account(s) could not be seeded",
            report.failed
        )));
    }

    Ok(())
}
