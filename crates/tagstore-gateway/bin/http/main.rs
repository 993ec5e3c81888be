mod cli;

use std::sync::Arc;
use std::time::Duration;

use crate::cli::CLI;
use clap::Parser;
use tagstore_core::{Snapshot, SnapshotStore};
use tagstore_gateway::{telemetry, App, AppState};
use tagstore_search::{QueryService, ServiceConfig};
use tagstore_storage::JsonFileSnapshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format.into()).map_err(|e| anyhow::anyhow!(e))?;

    let (snapshots, snapshot) = match config.data_path.clone().map(JsonFileSnapshot::new) {
        Some(snapshots) => match snapshots.load_or_recover().await {
            Ok(snapshot) => (Some(snapshots), snapshot),
            Err(e) => {
                error!(
                    error = %e,
                    path = %snapshots.path().display(),
                    "persistence disabled for this run"
                );
                (None, Snapshot::default())
            }
        },
        None => (None, Snapshot::default()),
    };
    let service_config = ServiceConfig::builder()
        .duplicate_policy(config.duplicate_policy())
        .stats(snapshot.stats)
        .build();
    let service = Arc::new(QueryService::with_config(snapshot.records, service_config));

    let autosave = match (&snapshots, config.save_interval()) {
        (Some(snapshots), Some(every)) => Some(spawn_autosave(
            snapshots.clone(),
            Arc::clone(&service),
            every,
        )),
        _ => None,
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        data_path = ?config.data_path,
        records = service.len(),
        log_format = %config.log_format,
        "starting tagstore server"
    );

    let app = App::router(AppState::new(service.clone()));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(task) = autosave {
        task.abort();
    }
    if let Some(snapshots) = &snapshots {
        snapshots.save_or_log(&service.snapshot()).await;
    }

    info!("tagstore server stopped");
    Ok(())
}

fn spawn_autosave(
    snapshots: JsonFileSnapshot,
    service: Arc<QueryService>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            snapshots.save_or_log(&service.snapshot()).await;
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
