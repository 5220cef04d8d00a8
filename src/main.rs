use anyhow::Context;
use todo_service::{
    config::{Config, StoreKind},
    routes,
    state::AppState,
    store::{MemoryStore, PgTodoStore},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let state = match &config.store {
        StoreKind::Postgres { database_url } => {
            let store = PgTodoStore::connect(database_url)
                .await
                .context("Error connecting DB")?;
            tracing::info!("DB connected");
            AppState::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store, todos will not survive a restart");
            AppState::new(MemoryStore::new())
        }
    };

    let mut app = todo_service::app(state);
    if let Some(origin) = config.cors_origin.clone() {
        app = app.layer(routes::cors(origin));
    }

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;

    tracing::info!("server is listening at http://{}", config.addr());

    axum::serve(listener, app).await?;
    Ok(())
}
