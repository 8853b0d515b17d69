//! Per-method generator configuration.
//!
//! One config struct per verification method. Every non-code field must be
//! non-empty after trimming; [`GeneratorConfig::validate`] enforces that and
//! the generators in [`crate::generate`] run it after any code substitution.

use crate::error::{Error, Result};

/// Shared validation contract implemented by all five method configs.
pub trait GeneratorConfig {
    fn validate(&self) -> Result<()>;
}

fn require(field: &str, name: &'static str) -> Result<()> {
    if field.trim().is_empty() {
        return Err(Error::EmptyField(name));
    }
    Ok(())
}

/// Config for the HTML meta tag method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTagConfig {
    /// Name of the meta tag, e.g. `myapp-site-verification`.
    pub tag_name: String,
    /// Proof value placed in the tag's `content` attribute.
    pub code: String,
}

impl GeneratorConfig for MetaTagConfig {
    fn validate(&self) -> Result<()> {
        require(&self.tag_name, "tag name")?;
        require(&self.code, "code")
    }
}

/// Config for the JSON file method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileConfig {
    /// File name; a `.json` suffix is appended when missing.
    pub file_name: String,
    /// Top-level JSON key, e.g. `myapp_site_verification`.
    pub attribute: String,
    pub code: String,
}

impl GeneratorConfig for JsonFileConfig {
    fn validate(&self) -> Result<()> {
        require(&self.file_name, "file name")?;
        require(&self.attribute, "attribute")?;
        require(&self.code, "code")
    }
}

/// Config for the XML file method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFileConfig {
    /// File name; an `.xml` suffix is appended when missing.
    pub file_name: String,
    /// Name of the document's root element.
    pub root_name: String,
    pub code: String,
}

impl XmlFileConfig {
    /// Render the exact file content:
    /// `<?xml version="1.0" encoding="UTF-8"?>\n<ROOT><code>CODE</code></ROOT>`
    pub fn to_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<{root}><code>{code}</code></{root}>",
            root = self.root_name,
            code = self.code,
        )
    }
}

impl GeneratorConfig for XmlFileConfig {
    fn validate(&self) -> Result<()> {
        require(&self.file_name, "file name")?;
        require(&self.root_name, "root name")?;
        require(&self.code, "code")
    }
}

/// Config for the DNS TXT record method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecordConfig {
    /// Record host: `@` for the zone apex, or a subdomain label.
    pub host_name: String,
    /// Attribute part of the record value, e.g. `myapp-site-verification`.
    pub attribute: String,
    /// Value part; the published record reads `attribute=value`.
    pub value: String,
}

impl GeneratorConfig for TxtRecordConfig {
    fn validate(&self) -> Result<()> {
        require(&self.host_name, "host name")?;
        require(&self.attribute, "record attribute")?;
        require(&self.value, "record attribute value")
    }
}

/// Config for the DNS CNAME record method.
///
/// The target is caller-supplied; no code is ever synthesized into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnameRecordConfig {
    pub record_name: String,
    pub record_target: String,
}

impl GeneratorConfig for CnameRecordConfig {
    fn validate(&self) -> Result<()> {
        require(&self.record_name, "record name")?;
        require(&self.record_target, "record target")
    }
}
