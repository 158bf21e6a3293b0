/* src/resolver.rs */

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use axum::http::HeaderMap;

use crate::error::{ResolveError, Result};

/// Forwarding headers consulted by [`resolve_from_headers`], in order of
/// preference. The first header carrying a non-empty value wins.
pub const FORWARDING_HEADERS: [&str; 7] = [
    "x-forwarded-for",
    "x-real-ip",
    "x-true-client-ip",
    "true-client-ip",
    "x-originating-ip",
    "x-remote-ip",
    "x-remote-addr",
];

/// Address family of a raw `host:port` peer string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrFamily {
    V4,
    V6,
}

/// Classify a raw peer string by counting colons. The port contributes one
/// colon; an IPv6 host contributes at least two more, so fewer than two
/// colons means IPv4.
pub fn classify(peer: &str) -> AddrFamily {
    if peer.matches(':').count() < 2 {
        AddrFamily::V4
    } else {
        AddrFamily::V6
    }
}

/// Extract the host from an `a.b.c.d:port` peer string and validate it as
/// an IPv4 address.
pub fn extract_ipv4(peer: &str) -> Result<IpAddr> {
    let host = peer.split_once(':').map_or(peer, |(host, _)| host);
    let ip = host
        .parse::<Ipv4Addr>()
        .map_err(|_| ResolveError::InvalidAddress(peer.to_owned()))?;
    Ok(IpAddr::V4(ip))
}

/// Extract the host from a bracketed `[addr]:port` peer string and validate
/// it as an IPv6 address. Fails if the brackets are absent or the contents
/// don't validate.
pub fn extract_ipv6(peer: &str) -> Result<IpAddr> {
    let host = peer
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .map(|(host, _)| host)
        .ok_or_else(|| ResolveError::InvalidAddress(peer.to_owned()))?;
    let ip = host
        .parse::<Ipv6Addr>()
        .map_err(|_| ResolveError::InvalidAddress(peer.to_owned()))?;
    Ok(IpAddr::V6(ip))
}

/// Resolve the client IP from the connection peer string alone, ignoring
/// any headers.
pub fn resolve_from_connection(peer: &str) -> Result<IpAddr> {
    match classify(peer) {
        AddrFamily::V4 => extract_ipv4(peer),
        AddrFamily::V6 => extract_ipv6(peer),
    }
}

/// Return the first non-empty forwarding header value, if any.
///
/// The value is returned verbatim and is NOT validated as an IP address;
/// callers that need a well-formed address must check it themselves.
pub fn resolve_from_headers(headers: &HeaderMap) -> Option<&str> {
    FORWARDING_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
    })
}
