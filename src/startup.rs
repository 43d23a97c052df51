use crate::{
    app_state::AppState,
    configuration::{ApplicationSettings, DatabaseSettings, Settings},
    routes::{dataset, health_check, home, language, onboarding, question},
    session::require_onboarded,
    telemetry::{request_span, UuidRequestId},
};
use anyhow::{anyhow, Context};
use axum::{middleware, Router};
use axum_messages::MessagesManagerLayer;
use secrecy::ExposeSecret;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tower_sessions::{cookie::Key, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

pub struct Application {
    address: SocketAddr,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let db_pool =
            get_connection_pool(&config.database).context("Invalid database settings")?;

        let completion_client = config
            .completion_client
            .client()
            .context("Failed to build the completion client")?;
        if completion_client.is_none() {
            tracing::warn!("No completion API key configured, question answering is disabled");
        }

        let app_state = AppState {
            db_pool,
            completion_client,
            speech_client: config
                .speech
                .client()
                .context("Failed to build the speech client")?,
            speaker: config.speech.speaker(),
            require_onboarding: config.application.require_onboarding,
        };

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .await
            .context("Failed to bind address")?;
        let address = listener.local_addr()?;
        let router = router(app_state, &config.application)?;

        Ok(Self {
            address,
            listener,
            router,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.address
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.address);
        axum::serve(self.listener, self.router).await
    }
}

/// The pool connects lazily so the application starts without a database.
pub fn get_connection_pool(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    Ok(PgPoolOptions::new()
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(config.with_db()?))
}

fn router(app_state: AppState, config: &ApplicationSettings) -> Result<Router, anyhow::Error> {
    let key = Key::try_from(config.hmac_secret.expose_secret().as_bytes())
        .map_err(|e| anyhow!("Invalid hmac secret: {e:?}"))?;
    let session_store = MokaStore::new(Some(config.max_sessions));
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(config.session_expiry())
        .with_secure(config.secure_cookies)
        .with_private(key);

    let mut dashboard_actions = Router::new()
        .merge(dataset::router())
        .merge(question::router());
    if app_state.require_onboarding {
        dashboard_actions = dashboard_actions.route_layer(middleware::from_fn(require_onboarded));
    }

    Ok(Router::new()
        .merge(health_check::router())
        .merge(home::router())
        .merge(language::router())
        .merge(onboarding::router())
        .merge(dashboard_actions)
        .layer(MessagesManagerLayer)
        .layer(session_layer)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(app_state))
}
