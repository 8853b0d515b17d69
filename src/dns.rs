//! DNS TXT and CNAME record verification.
//!
//! Each check issues a single query of the relevant type against the chosen
//! resolver. A query that comes back with a non-success response code (the
//! record simply is not there) is a non-match, not an error; only transport
//! failures (network, timeout) surface as errors. No retries, no caching.

use std::net::IpAddr;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;
use tracing::debug;

use crate::domain::is_valid_domain_name;
use crate::error::{Error, Result};

/// Zone apex marker: a record host of `@` means "the domain itself".
pub const ROOT_DOMAIN: &str = "@";

/// Which public resolver to query.
///
/// An explicit parameter on the `*_with` verifiers; the plain verifiers
/// default to Cloudflare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DnsResolver {
    #[default]
    Cloudflare,
    Google,
    Quad9,
    /// A custom nameserver, queried over plain DNS on port 53.
    Custom(IpAddr),
}

impl DnsResolver {
    fn config(&self) -> ResolverConfig {
        match self {
            DnsResolver::Cloudflare => ResolverConfig::cloudflare(),
            DnsResolver::Google => ResolverConfig::google(),
            DnsResolver::Quad9 => ResolverConfig::quad9(),
            DnsResolver::Custom(ip) => ResolverConfig::from_parts(
                None,
                Vec::new(),
                NameServerConfigGroup::from_ips_clear(&[*ip], 53, true),
            ),
        }
    }
}

/// Check that the domain publishes a TXT record with exactly
/// `expected_content`, querying the default (Cloudflare) resolver.
///
/// `host_name` is `@` for the zone apex or a subdomain label to prepend.
pub async fn check_txt_record(
    domain: &str,
    host_name: &str,
    expected_content: &str,
) -> Result<bool> {
    check_txt_record_with(DnsResolver::default(), domain, host_name, expected_content).await
}

/// [`check_txt_record`] against an explicit resolver.
pub async fn check_txt_record_with(
    resolver: DnsResolver,
    domain: &str,
    host_name: &str,
    expected_content: &str,
) -> Result<bool> {
    let Some(lookup) = query(resolver, domain, host_name, RecordType::TXT).await? else {
        return Ok(false);
    };
    for record in lookup.record_iter() {
        if let Some(txt) = record.data().and_then(|d| d.as_txt()) {
            debug!(domain, txt = %txt, "found TXT record");
            if txt_matches(txt.txt_data(), expected_content) {
                return Ok(true);
            }
        }
    }
    debug!(domain, "no TXT record matched the expected content");
    Ok(false)
}

/// Check that `{record_name}.{domain}` (or the domain itself) is a CNAME for
/// `expected_target`, querying the default (Cloudflare) resolver.
///
/// The comparison is insensitive to the trailing dot DNS canonical names
/// carry.
pub async fn check_cname_record(
    domain: &str,
    record_name: &str,
    expected_target: &str,
) -> Result<bool> {
    check_cname_record_with(DnsResolver::default(), domain, record_name, expected_target).await
}

/// [`check_cname_record`] against an explicit resolver.
pub async fn check_cname_record_with(
    resolver: DnsResolver,
    domain: &str,
    record_name: &str,
    expected_target: &str,
) -> Result<bool> {
    let Some(lookup) = query(resolver, domain, record_name, RecordType::CNAME).await? else {
        return Ok(false);
    };
    for record in lookup.record_iter() {
        if let Some(cname) = record.data().and_then(|d| d.as_cname()) {
            let target = cname.to_string();
            debug!(domain, cname = %target, "found CNAME record");
            if cname_matches(&target, expected_target) {
                return Ok(true);
            }
        }
    }
    debug!(domain, "no CNAME record matched the expected target");
    Ok(false)
}

/// Issue one query for `record_type`. `Ok(None)` means the resolver answered
/// with a non-success response code or an empty answer; the record is not
/// published, which is a legitimate verification outcome.
async fn query(
    resolver: DnsResolver,
    domain: &str,
    record_name: &str,
    record_type: RecordType,
) -> Result<Option<Lookup>> {
    if !is_valid_domain_name(domain) {
        return Err(Error::InvalidDomain);
    }

    let name = query_name(domain, record_name);
    let resolver = TokioAsyncResolver::tokio(resolver.config(), ResolverOpts::default());

    debug!(name = %name, %record_type, "issuing DNS query");
    match resolver.lookup(name.as_str(), record_type).await {
        Ok(lookup) => Ok(Some(lookup)),
        Err(err) if matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. }) => {
            debug!(name = %name, %record_type, "no records found");
            Ok(None)
        }
        Err(err) => Err(Error::Dns(err)),
    }
}

/// Resolve the name to query: the apex marker or the bare domain query the
/// domain as-is, anything else is prepended as a subdomain label. The result
/// is fully qualified so no search suffix gets appended.
fn query_name(domain: &str, record_name: &str) -> String {
    let name = if record_name == ROOT_DOMAIN || record_name == domain {
        domain.to_string()
    } else {
        format!("{record_name}.{domain}")
    };
    if name.ends_with('.') {
        name
    } else {
        format!("{name}.")
    }
}

/// Exact, case-sensitive match of any returned TXT string. No trimming, no
/// normalization.
fn txt_matches(txt_data: &[Box<[u8]>], expected: &str) -> bool {
    txt_data.iter().any(|chunk| chunk.as_ref() == expected.as_bytes())
}

/// Trailing-dot-insensitive CNAME target comparison. The as-given form is
/// checked first since resolver formatting is not guaranteed consistent.
fn cname_matches(target: &str, expected: &str) -> bool {
    if target == expected {
        return true;
    }
    if expected.ends_with('.') {
        return false;
    }
    target == format!("{expected}.")
}
