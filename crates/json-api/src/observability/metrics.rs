//! Prometheus metrics: HTTP traffic plus marketplace events, exposed at `/metrics`.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// What a review was left on.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ReviewTarget {
    Offer,
    Shop,
}

impl ReviewTarget {
    const fn label(self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Shop => "shop",
        }
    }
}

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    offers_created_total: IntCounterVec,
    subscription_activations_total: IntCounter,
    offers_approved_on_activation_total: IntCounter,
    reviews_created_total: IntCounterVec,
}

static METRICS: OnceLock<Option<Metrics>> = OnceLock::new();

#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class(&status_code), status_code.as_str()])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Count an offer by the approval the subscription gate gave it.
pub(crate) fn record_offer_created(is_approved: bool) {
    if let Some(metrics) = metrics() {
        let approval = if is_approved { "approved" } else { "pending" };

        metrics
            .offers_created_total
            .with_label_values(&[approval])
            .inc();
    }
}

/// Count a verified subscription payment and the offers it released.
pub(crate) fn record_subscription_activation(approved_offers: u64) {
    if let Some(metrics) = metrics() {
        metrics.subscription_activations_total.inc();
        metrics
            .offers_approved_on_activation_total
            .inc_by(approved_offers);
    }
}

pub(crate) fn record_review_created(target: ReviewTarget) {
    if let Some(metrics) = metrics() {
        metrics
            .reviews_created_total
            .with_label_values(&[target.label()])
            .inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response, _req: &mut Request) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();
    let mut body = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut body) {
        error!("failed to encode metrics: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        Err(source) => {
            error!("invalid metrics content type: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    }

    res.render(String::from_utf8_lossy(&body).into_owned());
}

fn metrics() -> Option<&'static Metrics> {
    METRICS
        .get_or_init(|| {
            build_metrics()
                .inspect_err(|source| error!("failed to build metrics: {source}"))
                .ok()
        })
        .as_ref()
}

fn counter_vec(name: &str, help: &str, labels: &[&str]) -> Result<IntCounterVec, prometheus::Error> {
    IntCounterVec::new(Opts::new(name, help), labels)
}

fn build_metrics() -> Result<Metrics, prometheus::Error> {
    let registry = Registry::new_custom(Some("offora".to_string()), None)?;

    let requests_total = counter_vec(
        "http_requests_total",
        "HTTP requests by method, route, status class and status code.",
        &["method", "route", "status_class", "status_code"],
    )?;

    let request_duration_seconds = HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration in seconds by method and route.",
        )
        .buckets(DURATION_BUCKETS.to_vec()),
        &["method", "route"],
    )?;

    let requests_in_flight = IntGauge::new(
        "http_requests_in_flight",
        "HTTP requests currently being served.",
    )?;

    let offers_created_total = counter_vec(
        "offers_created_total",
        "Offers created, by the approval the subscription gate gave them.",
        &["approval"],
    )?;

    let subscription_activations_total = IntCounter::new(
        "subscription_activations_total",
        "Verified subscription payments.",
    )?;

    let offers_approved_on_activation_total = IntCounter::new(
        "offers_approved_on_activation_total",
        "Pending offers approved by a subscription activation.",
    )?;

    let reviews_created_total = counter_vec(
        "reviews_created_total",
        "Reviews created, by target.",
        &["target"],
    )?;

    registry.register(Box::new(requests_total.clone()))?;
    registry.register(Box::new(request_duration_seconds.clone()))?;
    registry.register(Box::new(requests_in_flight.clone()))?;
    registry.register(Box::new(offers_created_total.clone()))?;
    registry.register(Box::new(subscription_activations_total.clone()))?;
    registry.register(Box::new(offers_approved_on_activation_total.clone()))?;
    registry.register(Box::new(reviews_created_total.clone()))?;

    Ok(Metrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        offers_created_total,
        subscription_activations_total,
        offers_approved_on_activation_total,
        reviews_created_total,
    })
}

fn status_class(status_code: &str) -> &'static str {
    match status_code.as_bytes().first() {
        Some(b'1') => "1xx",
        Some(b'2') => "2xx",
        Some(b'3') => "3xx",
        Some(b'4') => "4xx",
        Some(b'5') => "5xx",
        _ => "other",
    }
}
