use std::time::Instant;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};
use tracing::info;

/// Logs one line per request once the response is ready.
pub struct RequestLogger;

#[derive(Clone, Copy)]
struct RequestStart(Option<Instant>);

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        request.local_cache(|| RequestStart(Some(Instant::now())));
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let start = request.local_cache(|| RequestStart(None));
        let elapsed_ms = start.0.map(|t| t.elapsed().as_millis() as u64).unwrap_or_default();
        info!(
            method = %request.method(),
            uri = %request.uri(),
            status = response.status().code,
            elapsed_ms,
            "request"
        );
    }
}
