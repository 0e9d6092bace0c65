use catalog::app::{AppState, build_router};
use catalog::health::{CatalogHealthCheck, HealthCheckConfig};
use catalog::store::CatalogStore;
use catalog::store::memory::InMemoryStore;
use std::sync::Arc;

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn read_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

pub fn app_with_store(
    store: Arc<dyn CatalogStore>,
) -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    let health = Arc::new(CatalogHealthCheck::new(
        store.clone(),
        HealthCheckConfig {
            store_key: "abcdef0123456789".to_string(),
            instance_id: "test-instance".to_string(),
            version: "0.1.0".to_string(),
        },
    ));
    build_router(AppState { store, health }).into_service()
}

pub fn sample_app() -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    app_with_store(Arc::new(InMemoryStore::with_sample_data()))
}
