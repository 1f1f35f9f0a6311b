mod model;
mod server;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::app(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| InternalError::BindListener {
            address: config.bind_address.clone(),
            source,
        })?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .map_err(InternalError::Serve)?;

    Ok(())
}
