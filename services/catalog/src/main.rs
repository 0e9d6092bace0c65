//! Catalog HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the catalog store, the health check, and the HTTP
//! router, then starts the API server and the metrics endpoint.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup
//! logic.
mod api;
mod app;
mod config;
mod health;
mod model;
mod observability;
mod store;

use app::{AppState, build_router};
use health::{CatalogHealthCheck, HealthCheckConfig};
use std::future::Future;
use std::sync::Arc;
use store::CatalogStore;
use store::memory::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::CatalogConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::CatalogConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("catalog-api");
    let state = build_state(config.clone());
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "catalog api listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: config::CatalogConfig) -> AppState {
    let store: Arc<dyn CatalogStore> = Arc::new(InMemoryStore::with_sample_data());
    let health = Arc::new(CatalogHealthCheck::new(
        store.clone(),
        HealthCheckConfig {
            store_key: config.store_key,
            instance_id: config.instance_id,
            version: config::VERSION.to_string(),
        },
    ));
    AppState { store, health }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> config::CatalogConfig {
        config::CatalogConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            store_key: "abcdef0123".to_string(),
            instance_id: "test".to_string(),
        }
    }

    #[test]
    fn build_state_seeds_memory_backend() {
        let state = build_state(test_config());
        assert_eq!(state.store.backend_name(), "memory");
    }

    #[tokio::test]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(test_config(), async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }
}
