//! OTLP span export.

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig as _;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::telemetry::TelemetryConfig;

use super::ObservabilityError;

/// Batch-export spans to the configured collector over gRPC.
///
/// Upstream sampling decisions are honoured; new traces are sampled by trace id ratio.
pub(super) fn build_tracer_provider(
    telemetry: &TelemetryConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(telemetry.otlp_endpoint.clone())
        .with_timeout(telemetry.otlp_timeout())
        .build()?;

    let sampler = Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
        telemetry.sample_ratio(),
    )));

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler)
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource(telemetry))
        .with_batch_exporter(exporter)
        .build())
}

fn resource(telemetry: &TelemetryConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(telemetry.service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", telemetry.service_version.clone()),
            KeyValue::new("deployment.environment.name", telemetry.environment.clone()),
        ])
        .build()
}
