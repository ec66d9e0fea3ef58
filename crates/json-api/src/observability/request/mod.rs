//! Request-level logging, request IDs and parent trace extraction.

mod parent_context;
mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use crate::config::telemetry::TelemetryConfig;

use super::metrics;

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Per-request span, request id, metrics and completion logging.
///
/// `/metrics` scrapes pass straight through so they never show up in their own numbers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
    propagate_parent: bool,
}

impl RequestLogging {
    pub(crate) fn new(telemetry: &TelemetryConfig) -> Self {
        Self {
            slow_request_threshold: telemetry.slow_request_threshold(),
            propagate_parent: telemetry.propagates_parent(),
        }
    }
}

impl Default for RequestLogging {
    fn default() -> Self {
        Self {
            slow_request_threshold: Duration::from_secs(1),
            propagate_parent: false,
        }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        if req.uri().path() == "/metrics" {
            ctrl.call_next(req, depot, res).await;

            return;
        }

        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

        depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
        request_ids::set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();
        let label = spans::RouteLabel::new(&method, &path);
        let _in_flight = metrics::InFlightRequestGuard::track();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            otel.name = %label.span_name,
            otel.kind = "server",
            request_id = %request_id,
            method = %method,
            route = %label.route,
            remote_addr = %req.remote_addr(),
            user_uuid = tracing::field::Empty,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        if self.propagate_parent
            && let Some(parent_context) = parent_context::extract_parent_context(req.headers())
            && let Err(source) = span.set_parent(parent_context)
        {
            warn!("failed to set parent context on request span: {source}");
        }

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = request_ids::response_status_or_ok(res.status_code);

        metrics::observe_request(&method, &label.route, status.as_u16(), elapsed.as_secs_f64());

        span.record("status", status.as_u16());
        span.record("duration_ms", elapsed.as_millis());

        span.in_scope(|| self.log_completion(status, elapsed));
    }
}

impl RequestLogging {
    fn log_completion(&self, status: StatusCode, elapsed: Duration) {
        let status_code = status.as_u16();
        let duration_ms = elapsed.as_millis();

        info!(status = status_code, duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = status_code, "server error response");
        } else if status.is_client_error() {
            warn!(status = status_code, "client error response");
        }

        if elapsed > self.slow_request_threshold {
            warn!(
                duration_ms,
                threshold_ms = self.slow_request_threshold.as_millis(),
                "slow request detected"
            );
        }
    }
}
