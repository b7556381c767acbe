use std::sync::Arc;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

pub mod blog;
pub mod config;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;

pub fn app(state: Arc<state::State>) -> NormalizePath<axum::Router> {
    let compression_layer = CompressionLayer::new().br(true);

    NormalizePathLayer::trim_trailing_slash().layer(
        axum::Router::new()
            .merge(routes::page::route())
            .nest("/api", routes::api::route())
            .layer(compression_layer)
            .with_state(state),
    )
}
