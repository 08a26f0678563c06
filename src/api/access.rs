//! Access Control
//!
//! Middleware restricting the admin API to callers on the loopback interface.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::handlers::AppState;
use crate::error::{CacheError, Result};

/// Rejects any request whose peer address is not loopback.
///
/// The peer address comes from axum's `ConnectInfo`, so the server must be
/// started with `into_make_service_with_connect_info::<SocketAddr>()`.
/// A request without connection info is treated as remote.
pub async fn require_loopback(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    if !state.loopback_only {
        return Ok(next.run(req).await);
    }

    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    match peer {
        Some(addr) if is_loopback(addr.ip()) => Ok(next.run(req).await),
        other => {
            warn!(peer = ?other, uri = %req.uri(), "Rejected non-loopback caller");
            Err(CacheError::Forbidden(
                "Can only be run from localhost".to_string(),
            ))
        }
    }
}

/// True for 127.0.0.0/8, ::1 and IPv4-mapped loopback addresses.
pub fn is_loopback(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_loopback(),
        IpAddr::V6(v6) => {
            v6.is_loopback() || v6.to_ipv4_mapped().map_or(false, |v4| v4.is_loopback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_ipv4_loopback() {
        assert!(is_loopback(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert!(is_loopback(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2))));
        assert!(!is_loopback(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
    }

    #[test]
    fn test_ipv6_loopback() {
        assert!(is_loopback(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert!(is_loopback(IpAddr::V6(Ipv4Addr::LOCALHOST.to_ipv6_mapped())));
        assert!(!is_loopback(IpAddr::V6(Ipv6Addr::UNSPECIFIED)));
    }
}
