//! Source address of the submitting client.
//!
//! Checked in order: `CF-Connecting-IP`, the first `X-Forwarded-For` hop, the
//! TCP peer address (when the server runs with connect info), then `"unknown"`.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());
        Ok(Self(resolve(&parts.headers, peer)))
    }
}

fn resolve(headers: &HeaderMap, peer: Option<String>) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    };

    header("cf-connecting-ip")
        .or_else(|| header("x-forwarded-for"))
        .or(peer)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn cloudflare_header_wins() {
        let h = headers(&[
            ("cf-connecting-ip", "198.51.100.7"),
            ("x-forwarded-for", "203.0.113.1"),
        ]);
        assert_eq!(resolve(&h, Some("10.0.0.1".into())), "198.51.100.7");
    }

    #[test]
    fn first_forwarded_hop_is_used() {
        let h = headers(&[("x-forwarded-for", "203.0.113.1, 10.0.0.2")]);
        assert_eq!(resolve(&h, None), "203.0.113.1");
    }

    #[test]
    fn peer_then_unknown() {
        assert_eq!(resolve(&HeaderMap::new(), Some("10.0.0.1".into())), "10.0.0.1");
        assert_eq!(resolve(&HeaderMap::new(), None), "unknown");
        assert_eq!(resolve(&headers(&[("x-forwarded-for", " ")]), None), "unknown");
    }
}
