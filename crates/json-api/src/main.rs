//! Offora JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use offora_app::context::AppContext;

use crate::{
    config::ServerConfig,
    observability::{Observability, RequestLogging, metrics_handler},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod accounts;
mod auth;
mod config;
mod extensions;
mod favorites;
mod healthcheck;
mod listing;
mod observability;
mod offers;
mod reviews;
mod router;
mod shutdown;
mod state;
mod stores;
mod subscriptions;
#[cfg(test)]
mod test_helpers;

/// Offora JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|source| exit_early("Configuration", &source));

    let observability =
        Observability::init(&config).unwrap_or_else(|source| exit_early("Observability", &source));

    let gateway = Arc::new(config.payments.gateway());

    let app = match AppContext::from_database_url(&config.database.database_url, gateway).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            observability.shutdown();
            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;
    let server = Server::new(listener);
    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service_router(app, &config)).await;

    observability.shutdown();
}

/// Report a startup failure that happened before logging could take over.
fn exit_early(stage: &str, source: &dyn std::error::Error) -> ! {
    #[expect(
        clippy::print_stderr,
        reason = "the tracing subscriber is not installed yet"
    )]
    {
        eprintln!("{stage} error: {source}");
    }

    process::exit(1);
}

/// The API routes, documented in the OpenAPI spec, plus the undocumented operational routes.
fn service_router(app: AppContext, config: &ServerConfig) -> Router {
    let api = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(RequestLogging::new(&config.telemetry))
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let doc = OpenApi::new("Offora API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&api);

    api.push(Router::with_path("metrics").get(metrics_handler))
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
