use anyhow::Context;
use axum::{
    body::Body,
    http::{HeaderValue, Request},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::{Span, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};
use uuid::Uuid;

/// Bunyan JSON subscriber writing to `sink`. `RUST_LOG` overrides
/// `default_directive`.
pub fn get_subscriber<Sink>(
    name: &str,
    default_directive: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let formatting_layer = BunyanFormattingLayer::new(name.to_owned(), sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs `subscriber` globally and forwards `log` records to it.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), anyhow::Error> {
    LogTracer::init().context("Failed to forward log records to tracing")?;
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the global tracing subscriber")
}

/// Gives every request a random UUID as its `x-request-id`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        HeaderValue::try_from(Uuid::new_v4().hyphenated().to_string())
            .map(RequestId::new)
            .map_err(|e| tracing::warn!("Generated request id is not a header value: {e}"))
            .ok()
    }
}

pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok());

    tracing::info_span!(
        "HTTP request",
        request_id,
        method = %request.method(),
        path = request.uri().path(),
        query = request.uri().query(),
    )
}
