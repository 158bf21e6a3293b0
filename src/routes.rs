/* src/routes.rs */

use std::net::{IpAddr, SocketAddr};

use axum::{
    Router,
    extract::ConnectInfo,
    http::HeaderMap,
    response::Redirect,
    routing::get,
};

use crate::resolver;

/// Build the service router. Any path outside the three known routes is
/// redirected to `/`.
pub fn app() -> Router {
    Router::new()
        .route("/", get(any_ip))
        .route("/full", get(full_info))
        .route("/source-ip", get(source_ip))
        .fallback(redirect_to_root)
}

async fn redirect_to_root() -> Redirect {
    Redirect::temporary("/")
}

/// Header-trusting variant. The first populated forwarding header is
/// returned verbatim when it parses as an IP address, so a client that sets
/// `X-Forwarded-For` itself can spoof the answer. Falls back to the
/// connection peer address when no header holds a well-formed IP.
async fn any_ip(ConnectInfo(peer): ConnectInfo<SocketAddr>, headers: HeaderMap) -> String {
    if let Some(value) = resolver::resolve_from_headers(&headers) {
        if value.parse::<IpAddr>().is_ok() {
            return value.to_owned();
        }
    }

    match resolver::resolve_from_connection(&peer.to_string()) {
        Ok(ip) => ip.to_string(),
        Err(err) => err.to_string(),
    }
}

/// Dump all request headers (sorted, uppercased names) followed by the
/// connection-derived IP.
async fn full_info(ConnectInfo(peer): ConnectInfo<SocketAddr>, headers: HeaderMap) -> String {
    let mut lines: Vec<String> = headers
        .keys()
        .filter_map(|name| {
            let value = headers.get(name)?.to_str().ok()?;
            Some(format!("{} : {}\n", name.as_str().to_uppercase(), value))
        })
        .collect();
    lines.sort();

    let mut body: String = lines.concat();
    match resolver::resolve_from_connection(&peer.to_string()) {
        Ok(ip) => {
            body.push_str("------------------------------------\n");
            body.push_str("Source IP : ");
            body.push_str(&ip.to_string());
            body.push('\n');
        }
        Err(err) => body.push_str(&err.to_string()),
    }
    body
}

/// Ignores all headers and returns the TCP peer address only.
async fn source_ip(ConnectInfo(peer): ConnectInfo<SocketAddr>) -> String {
    match resolver::resolve_from_connection(&peer.to_string()) {
        Ok(ip) => ip.to_string(),
        Err(err) => err.to_string(),
    }
}
