//! Human-readable labels for mining pool hosts.
//!
//! `domain_from_host("stratum+tcp://us-east.nicehash.com:3333")` yields
//! `"nicehash"`: the URL host with its first label dropped when it looks like a
//! subdomain, and its TLD dropped when what is left is still long.

use std::borrow::Cow;
use std::net::IpAddr;

use url::{Host, Url};

use crate::domain::model::DomainDerivation;
use crate::domain::ports::DomainCache;

const DEFAULT_SCHEME: &str = "http://";
const MAX_LABEL_WITH_TLD: usize = 7;

/// Short domain label for `host`, memoized in `cache`.
///
/// Lookups use the input as given, but entries are stored under the
/// scheme-prepended form, so a bare host such as `pool.example.com` is
/// recomputed on every call while `stratum+tcp://...` inputs hit the cache.
pub fn domain_from_host<C: DomainCache + ?Sized>(host: &str, cache: &C) -> String {
    if host.is_empty() {
        return String::new();
    }

    if let Some(label) = cache.get(host) {
        return label;
    }

    let derivation = derive_domain(host);
    if let DomainDerivation::Fallback { reason, .. } = &derivation {
        tracing::debug!(host, reason = %reason, "falling back to raw host");
    }

    let label = derivation.into_label();
    cache.insert(with_default_scheme(host).into_owned(), label.clone());
    label
}

/// The uncached heuristic behind [`domain_from_host`].
pub fn derive_domain(host: &str) -> DomainDerivation {
    let trimmed = host.trim();
    let working = with_default_scheme(host);

    let url = match Url::parse(&working) {
        Ok(url) => url,
        Err(e) => {
            return DomainDerivation::Fallback {
                label: trimmed.to_string(),
                reason: e.to_string(),
            }
        }
    };

    match url.host() {
        Some(Host::Domain(name)) if name.parse::<IpAddr>().is_err() => {
            DomainDerivation::Parsed(shorten_dns_name(name))
        }
        Some(other) => DomainDerivation::Parsed(other.to_string()),
        // `host:port` without a scheme parses with `host` as the scheme and no host.
        None => DomainDerivation::Parsed(String::new()),
    }
}

/// Strip `http://` and `stratum+tcp://` prefixes and trailing slashes.
pub fn short_host_from_host(host: &str) -> String {
    host.replace("http://", "")
        .replace("stratum+tcp://", "")
        .trim_end_matches('/')
        .to_string()
}

fn with_default_scheme(host: &str) -> Cow<'_, str> {
    if host.contains(':') {
        Cow::Borrowed(host)
    } else {
        Cow::Owned(format!("{}{}", DEFAULT_SCHEME, host))
    }
}

fn shorten_dns_name(name: &str) -> String {
    let mut label = name;

    // subdomain
    if label.split('.').count() > 2 {
        if let Some((_, rest)) = label.split_once('.') {
            label = rest;
        }
    }

    // TLD
    if label.chars().count() > MAX_LABEL_WITH_TLD {
        if let Some((without_tld, _)) = label.rsplit_once('.') {
            label = without_tld;
        }
    }

    label.to_string()
}
