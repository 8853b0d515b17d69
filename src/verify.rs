//! Verification of published meta tags and JSON/XML files.
//!
//! Each check performs a single HTTP round trip via [`crate::http::fetch`]
//! and compares what the server published against what the caller expects.
//! A reachable page whose content simply does not match yields `Ok(false)`;
//! only structural failures (network, non-200 status, malformed body) are
//! errors.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::is_valid_domain_name;
use crate::error::{Error, Result};
use crate::http::fetch;

static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("meta selector parses"));

/// Check that the page at the domain root carries
/// `<meta name="{tag_name}" content="{expected_content}" />`.
///
/// Absence of the tag or of its `content` attribute is a non-match, not an
/// error.
pub async fn check_html_meta_tag(
    domain: &str,
    tag_name: &str,
    expected_content: &str,
) -> Result<bool> {
    if !is_valid_domain_name(domain) {
        return Err(Error::InvalidDomain);
    }

    let client = reqwest::Client::new();
    let response = fetch(&client, domain).await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::InvalidResponse(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(html_meta_matches(&body, tag_name, expected_content))
}

/// Check that `https://{domain}/{file_name}` serves a JSON document equal to
/// `expected_value`.
///
/// The expected value must be a composite (record-like) shape; scalars are
/// rejected before any network access. Every field must match exactly.
pub async fn check_json_file<T>(domain: &str, file_name: &str, expected_value: &T) -> Result<bool>
where
    T: Serialize + DeserializeOwned + PartialEq,
{
    check_file(domain, file_name, expected_value, FileFormat::Json).await
}

/// Check that `https://{domain}/{file_name}` serves an XML document equal to
/// `expected_value`.
///
/// Same contract as [`check_json_file`], decoding the body as XML.
pub async fn check_xml_file<T>(domain: &str, file_name: &str, expected_value: &T) -> Result<bool>
where
    T: Serialize + DeserializeOwned + PartialEq,
{
    check_file(domain, file_name, expected_value, FileFormat::Xml).await
}

#[derive(Clone, Copy)]
enum FileFormat {
    Json,
    Xml,
}

async fn check_file<T>(
    domain: &str,
    file_name: &str,
    expected_value: &T,
    format: FileFormat,
) -> Result<bool>
where
    T: Serialize + DeserializeOwned + PartialEq,
{
    if !is_valid_domain_name(domain) {
        return Err(Error::InvalidDomain);
    }
    ensure_composite(expected_value)?;

    let client = reqwest::Client::new();
    let response = fetch(&client, &format!("{domain}/{file_name}")).await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::InvalidResponse(status.as_u16()));
    }

    let body = response.text().await?;
    match format {
        FileFormat::Json => json_matches(&body, expected_value),
        FileFormat::Xml => xml_matches(&body, expected_value),
    }
}

/// Reject scalar expected values: the decode-and-compare contract only makes
/// sense for record-like shapes that map fields to JSON keys / XML elements.
fn ensure_composite<T: Serialize>(expected_value: &T) -> Result<()> {
    let shape = serde_json::to_value(expected_value).map_err(Error::JsonDecode)?;
    if shape.is_object() {
        Ok(())
    } else {
        Err(Error::ScalarExpectedValue)
    }
}

fn html_meta_matches(body: &str, tag_name: &str, expected_content: &str) -> bool {
    let document = Html::parse_document(body);
    for element in document.select(&META_SELECTOR) {
        if element.value().attr("name") != Some(tag_name) {
            continue;
        }
        let Some(content) = element.value().attr("content") else {
            debug!(tag_name, "meta tag found but has no content attribute");
            return false;
        };
        return content == expected_content;
    }
    debug!(tag_name, "meta tag not found");
    false
}

fn json_matches<T>(body: &str, expected_value: &T) -> Result<bool>
where
    T: DeserializeOwned + PartialEq,
{
    let decoded: T = serde_json::from_str(body).map_err(Error::JsonDecode)?;
    Ok(decoded == *expected_value)
}

fn xml_matches<T>(body: &str, expected_value: &T) -> Result<bool>
where
    T: DeserializeOwned + PartialEq,
{
    let decoded: T = quick_xml::de::from_str(body).map_err(Error::XmlDecode)?;
    Ok(decoded == *expected_value)
}
