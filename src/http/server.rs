//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, limits, timeouts, security headers)
//! - Cap request bodies; an oversized form reaches the step as a rejection
//! - Own the session store and start the idle sweeper
//! - Serve over plain TCP or TLS with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::http::handlers;
use crate::lifecycle::{SessionSweeper, Shutdown};
use crate::render::{Catalog, START_SCRIPT_PATH};
use crate::security::headers::with_security_headers;
use crate::session::{MemorySessionStore, SessionCookie, SessionStore};
use crate::workflow::{Clock, SystemClock};

/// How long in-flight TLS connections get to finish after shutdown.
const TLS_DRAIN_SECS: u64 = 10;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub cookie: SessionCookie,
    pub catalog: Arc<Catalog>,
    pub clock: Arc<dyn Clock>,
}

/// HTTP server for the note workflow.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    sessions: Arc<dyn SessionStore>,
}

impl HttpServer {
    /// Create a server using the host's calendar.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a server with an explicit source of "today".
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let catalog = Arc::new(Catalog::load(&config.i18n)?);
        let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

        let state = AppState {
            sessions: sessions.clone(),
            cookie: SessionCookie::new(&config.session),
            catalog,
            clock,
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            sessions,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/", get(handlers::entry))
            .route("/start", get(handlers::start))
            .route(START_SCRIPT_PATH, get(handlers::start_script))
            .route("/review", any(handlers::review))
            .route("/done", any(handlers::done))
            .with_state(state);

        let router = if config.security.enable_headers {
            with_security_headers(router)
        } else {
            router
        };

        router
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Router with all layers, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The store holding every client session.
    pub fn sessions(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn spawn_sweeper(&self, shutdown: &Shutdown) {
        let sweeper = SessionSweeper::new(self.sessions.clone(), &self.config.session);
        tokio::spawn(sweeper.run(shutdown.subscribe()));
    }

    /// Serve plain HTTP on `listener` until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), AppError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        self.spawn_sweeper(&shutdown);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS on `addr` until `shutdown` fires.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        shutdown: Shutdown,
    ) -> Result<(), AppError> {
        tracing::info!(address = %addr, "HTTPS server starting");

        self.spawn_sweeper(&shutdown);

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        let stop = shutdown.wait();
        tokio::spawn(async move {
            stop.await;
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}
