use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{CatalogConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        department::PostgresDepartmentRepository,
        health::PostgresHealthCheckRepository,
        product::PostgresProductRepository,
    },
};

pub type CatalogService =
    Service<PostgresDepartmentRepository, PostgresProductRepository, PostgresHealthCheckRepository>;

/// Wires the Postgres repositories around an existing connection.
pub fn build_service(db: Arc<DatabaseConnection>) -> CatalogService {
    Service::new(
        PostgresDepartmentRepository::new(Arc::clone(&db)),
        PostgresProductRepository::new(Arc::clone(&db)),
        PostgresHealthCheckRepository::new(db),
    )
}

pub async fn connect(config: &CatalogConfig) -> Result<Postgres, anyhow::Error> {
    Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
        max_connections: config.database.max_connections,
    })
    .await
}

pub async fn create_service(config: CatalogConfig) -> Result<CatalogService, anyhow::Error> {
    let postgres = connect(&config).await?;

    Ok(build_service(postgres.get_db()))
}
