//! Low-cardinality route labels for spans and metrics.

use uuid::Uuid;

/// A request path with identifiers replaced by placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RouteLabel {
    pub(super) route: String,
    pub(super) span_name: String,
}

impl RouteLabel {
    pub(super) fn new(method: &str, path: &str) -> Self {
        let route = route_template(path);
        let span_name = format!("{method} {route}");

        Self { route, span_name }
    }
}

fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
