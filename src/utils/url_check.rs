//! Candidate URL validation.
//!
//! A candidate is accepted when it looks like an absolute `http(s)` URL
//! and its hostname currently resolves. The syntactic gate matches the
//! public contract: a lowercase `http`/`https` scheme followed by `://`
//! and non-space, non-quote characters.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

/// Compiled pattern for the syntactic gate.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^https?://[^ "]+$"#).unwrap());

/// Reasons a candidate URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("candidate does not match http(s)://...")]
    Syntax,

    #[error("candidate does not parse as a URL: {0}")]
    Unparseable(String),

    #[error("candidate has no hostname")]
    MissingHost,

    #[error("hostname did not resolve: {0}")]
    UnresolvedHost(String),

    #[error("hostname resolution timed out")]
    DnsTimeout,
}

/// Runs the network-free half of the check: pattern match and structural
/// parse.
///
/// # Errors
///
/// Returns [`UrlCheckError::Syntax`] when the pattern does not match,
/// [`UrlCheckError::Unparseable`] when the `url` crate rejects the
/// candidate, and [`UrlCheckError::MissingHost`] for host-less URLs.
pub fn parse_candidate(candidate: &str) -> Result<Url, UrlCheckError> {
    if !URL_PATTERN.is_match(candidate) {
        return Err(UrlCheckError::Syntax);
    }

    let url = Url::parse(candidate).map_err(|e| UrlCheckError::Unparseable(e.to_string()))?;

    if url.host_str().is_none() {
        return Err(UrlCheckError::MissingHost);
    }

    Ok(url)
}

/// Validates a candidate URL: syntax, structure, and DNS existence.
///
/// The DNS lookup is bounded by `dns_timeout`; a timeout rejects the
/// candidate like any other resolution failure.
///
/// # Errors
///
/// All [`UrlCheckError`] variants; see [`parse_candidate`] for the
/// network-free ones.
pub async fn check_url(candidate: &str, dns_timeout: Duration) -> Result<Url, UrlCheckError> {
    let url = parse_candidate(candidate)?;

    match url.host_str() {
        Some(host) => resolve_host(host, dns_timeout).await?,
        None => return Err(UrlCheckError::MissingHost),
    }

    Ok(url)
}

/// Resolves `host` via the system resolver, bounded by `timeout`.
async fn resolve_host(host: &str, timeout: Duration) -> Result<(), UrlCheckError> {
    // `lookup_host` wants a port, and IPv6 literals arrive bracketed from
    // the URL parser but must be bare for the resolver.
    let host = host.trim_start_matches('[').trim_end_matches(']');

    let lookup = tokio::net::lookup_host((host, 80u16));

    let mut addrs = tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| UrlCheckError::DnsTimeout)?
        .map_err(|e| UrlCheckError::UnresolvedHost(e.to_string()))?;

    if addrs.next().is_none() {
        return Err(UrlCheckError::UnresolvedHost(host.to_string()));
    }

    Ok(())
}
