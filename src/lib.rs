//! Proof-of-domain-ownership generation and verification.
//!
//! Third-party platforms (search consoles, SaaS onboarding) commonly ask a
//! user to publish a small artifact proving they control a domain. This crate
//! generates those artifacts and later checks that they are actually
//! published, for five methods:
//!
//! - HTML meta tag on the site's home page
//! - JSON file at the site root
//! - XML file at the site root
//! - DNS TXT record
//! - DNS CNAME record
//!
//! Generation is pure and synchronous; verification performs a single HTTP
//! round trip or DNS query per call and holds no cross-call state, so calls
//! are safe to issue concurrently.
//!
//! ```no_run
//! use domainproof::{check_txt_record, generate_txt_record};
//!
//! # async fn demo() -> domainproof::Result<()> {
//! // 1. Generate the record the user must publish.
//! let instruction = generate_txt_record("My Super App")?;
//! println!("{}", instruction.action);
//!
//! // 2. Later, check that it is live.
//! let verified = check_txt_record("example.com", "@", &instruction.record).await?;
//! # Ok(())
//! # }
//! ```

mod code;
mod config;
mod dns;
mod domain;
mod error;
mod generate;
mod http;
mod verify;

pub use code::VerificationCode;
pub use config::{
    CnameRecordConfig, GeneratorConfig, JsonFileConfig, MetaTagConfig, TxtRecordConfig,
    XmlFileConfig,
};
pub use dns::{check_cname_record, check_cname_record_with, check_txt_record,
    check_txt_record_with, DnsResolver, ROOT_DOMAIN};
pub use domain::is_valid_domain_name;
pub use error::{Error, Result};
pub use generate::{
    generate_cname_record, generate_cname_record_from_config, generate_html_meta,
    generate_html_meta_from_config, generate_json, generate_json_from_config, generate_txt_record,
    generate_txt_record_from_config, generate_xml, generate_xml_from_config, DnsRecordInstruction,
    FileInstruction, HtmlMetaInstruction,
};
pub use http::is_secure;
pub use verify::{check_html_meta_tag, check_json_file, check_xml_file};
