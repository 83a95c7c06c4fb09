use std::{net::SocketAddr, sync::Arc};

use catalog_api::{
    application::http::server::http_server::{router, state},
    args::{Args, Command, LogArgs},
};
use catalog_core::{
    application::{build_service, connect},
    domain::{
        common::CatalogConfig,
        seed::{ports::SeedService, value_objects::LoadCatalogInput},
    },
    infrastructure::seed::csv_reader::read_seed_file,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn serve(args: Arc<Args>) -> Result<(), anyhow::Error> {
    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    let app_state = state(args).await?;
    let router = router(app_state)?;

    info!("listening on {}", addr);
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

async fn migrate(args: Arc<Args>) -> Result<(), anyhow::Error> {
    let config = CatalogConfig::from(args.as_ref().clone());
    connect(&config).await?.migrate().await
}

async fn seed(args: Arc<Args>) -> Result<(), anyhow::Error> {
    let config = CatalogConfig::from(args.as_ref().clone());
    let postgres = connect(&config).await?;
    postgres.migrate().await?;

    let records = read_seed_file(&args.seed.csv_path)?;
    info!(
        rows = records.len(),
        path = %args.seed.csv_path.display(),
        "loaded seed file"
    );

    let report = build_service(postgres.get_db())
        .load_catalog(LoadCatalogInput {
            records,
            batch_size: args.seed.batch_size,
        })
        .await?;

    info!(
        rows_read = report.rows_read,
        departments_created = report.departments_created,
        products_inserted = report.products_inserted,
        products_skipped = report.products_skipped,
        batches = report.batches,
        "catalog seeded"
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    match args.command() {
        Command::Serve => serve(args).await,
        Command::Migrate => migrate(args).await,
        Command::Seed => seed(args).await,
    }
}
