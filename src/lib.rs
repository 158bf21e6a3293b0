/* src/lib.rs */
//! # ipecho
//!
//! A small HTTP service that reports the caller's IP address, read from
//! common forwarding headers such as `X-Forwarded-For` and `X-Real-Ip`,
//! with a fallback to the remote socket address.
//!
//! ## Routes
//!
//! - `GET /` — forwarding headers first, connection peer as fallback
//! - `GET /full` — all request headers plus the connection-derived IP
//! - `GET /source-ip` — connection-derived IP only, headers ignored
//!
//! ## Examples
//!
//! ```rust
//! use ipecho::resolver;
//!
//! let ip = resolver::resolve_from_connection("192.168.113.1:8842").unwrap();
//! assert_eq!(ip, "192.168.113.1".parse::<std::net::IpAddr>().unwrap());
//! ```

pub mod error;
pub mod resolver;
pub mod routes;

pub use error::{ResolveError, Result};
pub use resolver::{AddrFamily, classify, resolve_from_connection, resolve_from_headers};
pub use routes::app;
