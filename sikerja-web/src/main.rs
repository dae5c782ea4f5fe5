//! sikerja-web - Employee performance evaluation dashboard
//!
//! Single-user web UI for HR staff: enter or upload P/K scores, bucket them
//! into ordinal categories, assign a cluster via the pre-trained K-Means
//! model, and map the bucket pair to a Nilai Kinerja label.

use anyhow::Result;
use clap::Parser;
use sikerja_common::model::KMeansModel;
use sikerja_common::{config, db};
use sikerja_web::{build_router, AppState};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "sikerja-web", about = "SI-KERJA performance evaluation dashboard")]
struct Cli {
    /// Root folder holding sikerja.db and kmeans_model.json
    #[arg(long)]
    root_folder: Option<String>,

    /// Port to listen on
    #[arg(long, env = "SIKERJA_PORT", default_value_t = 5750)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SI-KERJA dashboard (sikerja-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();

    let root_folder =
        config::resolve_root_folder(cli.root_folder.as_deref(), "SIKERJA_ROOT_FOLDER");
    config::ensure_root_folder(&root_folder)?;
    info!("Root folder: {}", root_folder.display());

    let db_path = config::database_path(&root_folder);
    let pool = db::init_database(&db_path).await?;
    info!("✓ Database ready: {}", db_path.display());

    // Load the cluster model exactly once; it is immutable for the life of
    // the process and shared across requests
    let model = KMeansModel::load_or_default(&config::model_path(&root_folder))?;
    info!("✓ Cluster model ready (k={})", model.k);

    let state = AppState::new(pool, model);
    let app = build_router(state);

    let addr = format!("127.0.0.1:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("sikerja-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
