use anyhow::Context;
use envconfig::Envconfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = blog_render::config::Config::init_from_env()
        .context("error reading configuration from the environment")?;
    let bind_address = config.bind_address;
    tracing::info!("Serving posts from {:?}", config.store_path);

    let state = std::sync::Arc::new(blog_render::state::State::new(config));
    let app = blog_render::app(state);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("error binding to {bind_address}"))?;
    tracing::info!("Listening on {bind_address}");

    axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
    .context("error serving app")
}
