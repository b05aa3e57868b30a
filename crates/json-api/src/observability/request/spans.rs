//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Replace identifier segments so spans and metric labels stay low-cardinality.
///
/// CMS slugs are user-facing and unbounded, so the segment after a content
/// prefix becomes `{slug}`.
fn normalise_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut normalised = Vec::with_capacity(segments.len());
    let mut previous: Option<&str> = None;

    for segment in segments {
        let replaced = if Uuid::parse_str(segment).is_ok() {
            "{uuid}"
        } else if matches!(previous, Some("tours" | "courses" | "destinations")) {
            "{slug}"
        } else {
            segment
        };

        normalised.push(replaced);
        previous = Some(segment);
    }

    format!("/{}", normalised.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_stays_root() {
        assert_eq!(normalise_path("/"), "/");
    }

    #[test]
    fn uuid_segments_are_collapsed() {
        assert_eq!(
            normalise_path("/dashboard/bookings/0190f3c4-8a2b-7c3d-9e4f-5a6b7c8d9e0f/confirmation"),
            "/dashboard/bookings/{uuid}/confirmation"
        );
    }

    #[test]
    fn content_slugs_are_collapsed() {
        assert_eq!(normalise_path("/tours/lofoten-aurora"), "/tours/{slug}");
        assert_eq!(normalise_path("/destinations/islanda"), "/destinations/{slug}");
    }

    #[test]
    fn span_name_carries_method() {
        assert_eq!(
            request_span_name("POST", "/gift-cards/apply").otel_span_name,
            "POST /gift-cards/apply"
        );
    }
}
