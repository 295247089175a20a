use std::io::Cursor;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};

const ALLOWED_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Permissive CORS for browser clients.
///
/// Every response carries the allow headers. No route handles OPTIONS, so a
/// preflight reaches the 404 catcher; it is rewritten here into an empty 200.
pub struct Cors;

fn is_preflight(request: &Request<'_>, response: &Response<'_>) -> bool {
    request.method() == Method::Options && response.status() == Status::NotFound
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers and preflight",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        if is_preflight(request, response) {
            response.set_status(Status::Ok);
            response.remove_header("Content-Type");
            response.set_sized_body(0, Cursor::new(""));
        }

        response.set_header(Header::new("Access-Control-Allow-Origin", ALLOWED_ORIGIN));
        response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
        response.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
    }
}
