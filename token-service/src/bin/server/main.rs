use std::net::SocketAddr;
use std::sync::Arc;

use credentials::PasswordHasher;
use credentials::TokenSigner;
use token_service::auth::clock::SystemClock;
use token_service::auth::service::AuthOptions;
use token_service::auth::service::AuthService;
use token_service::config::Config;
use token_service::inbound::http::router::create_router;
use token_service::outbound::InMemoryRefreshTokenStore;
use token_service::outbound::InMemoryUserDirectory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "token_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "token-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_issuer = %config.jwt.issuer,
        jwt_audience = %config.jwt.audience,
        access_token_minutes = config.jwt.access_token_minutes,
        refresh_token_days = config.auth.refresh_token_days,
        "Configuration loaded"
    );

    let hasher = PasswordHasher::new();
    let directory = Arc::new(InMemoryUserDirectory::seeded(&hasher));
    let store = Arc::new(InMemoryRefreshTokenStore::new());
    let signer = TokenSigner::new(
        config.jwt.secret.as_bytes(),
        config.jwt.issuer.clone(),
        config.jwt.audience.clone(),
        config.jwt.access_token_minutes,
    );

    let auth_service = Arc::new(AuthService::new(
        directory,
        store,
        signer,
        SystemClock,
        AuthOptions {
            access_token_minutes: config.jwt.access_token_minutes,
            refresh_token_days: config.auth.refresh_token_days,
            refresh_token_length: config.auth.refresh_token_length,
        },
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service);
    axum::serve(
        http_listener,
        application.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
