use std::sync::Arc;

use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenValidator;
use identity_service::config::Config;
use identity_service::domain::user::ports::AuthServicePort;
use identity_service::domain::user::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;
use identity_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_seconds = config.jwt.expiration_seconds,
        token_leeway_seconds = config.jwt.leeway_seconds,
        persistent_store = config.database.is_some(),
        "Configuration loaded"
    );

    let jwt_handler = Arc::new(JwtHandler::new(config.jwt.secret.as_bytes())?);
    let token_issuer = Arc::new(TokenIssuer::new(
        Arc::clone(&jwt_handler),
        config.jwt.lifetime(),
    ));
    let token_validator =
        Arc::new(TokenValidator::new(Arc::clone(&jwt_handler)).with_leeway(config.jwt.leeway()));
    let password_hasher = Arc::new(PasswordHasher::new());

    let auth_service: Arc<dyn AuthServicePort> = match &config.database {
        Some(database) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database.url)
                .await?;
            tracing::info!(
                max_connections = 5,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            Arc::new(AuthService::new(
                Arc::new(PostgresUserRepository::new(pg_pool)),
                password_hasher,
                token_issuer,
            ))
        }
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            Arc::new(AuthService::new(
                Arc::new(InMemoryUserRepository::new()),
                password_hasher,
                token_issuer,
            ))
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, token_validator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
