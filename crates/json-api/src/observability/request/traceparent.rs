//! Continuing a caller's trace from W3C `traceparent`/`tracestate` headers.

use opentelemetry::{
    Context,
    propagation::{Extractor, TextMapPropagator},
    trace::TraceContextExt as _,
};
use salvo::http::{HeaderMap, HeaderName};

/// The caller's span context, if the headers carry a valid one.
///
/// Extraction starts from an empty context so a request without trace headers
/// never picks up whatever span happens to be current on this task.
pub(super) fn remote_parent<P>(headers: &HeaderMap, propagator: &P) -> Option<Context>
where
    P: TextMapPropagator + ?Sized,
{
    let context = propagator.extract_with_context(&Context::new(), &RequestHeaders(headers));
    let is_remote = context.span().span_context().is_remote();

    is_remote.then_some(context)
}

struct RequestHeaders<'a>(&'a HeaderMap);

impl Extractor for RequestHeaders<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}
