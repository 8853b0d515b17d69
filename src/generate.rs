//! Instruction generation for the five verification methods.
//!
//! Each `generate_*_from_config` function takes an optional config (absent
//! config is an error distinct from an empty field) and an
//! `use_generated_code` flag: when set, the method's code/value field is
//! overwritten with a fresh [`VerificationCode`] before validation, so a
//! caller can generate instructions without supplying their own code.
//!
//! The `generate_*` convenience constructors derive the method-specific
//! field names from a sanitized app name plus fixed suffixes and always
//! synthesize the code.

use crate::code::VerificationCode;
use crate::config::{
    CnameRecordConfig, GeneratorConfig, JsonFileConfig, MetaTagConfig, TxtRecordConfig,
    XmlFileConfig,
};
use crate::error::{Error, Result};

const JSON_KEY_SUFFIX: &str = "_site_verification";
const JSON_FILE_NAME_SUFFIX: &str = "-site-verification.json";
const XML_ROOT_NAME: &str = "verification";
const XML_FILE_NAME_SUFFIX: &str = "SiteAuth.xml";
const TXT_RECORD_ATTRIBUTE_SUFFIX: &str = "-site-verification";

/// Instructions for the HTML meta tag method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlMetaInstruction {
    /// The exact tag to publish: `<meta name="NAME" content="CODE" />`.
    pub code: String,
    /// Human-readable publishing instructions.
    pub action: String,
}

/// Instructions for the JSON and XML file methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInstruction {
    pub file_name: String,
    /// The exact bytes the published file must contain.
    pub file_content: String,
    pub action: String,
}

/// Instructions for the DNS TXT and CNAME record methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordInstruction {
    /// Record host: `@` for the zone apex, or the record name.
    pub host_name: String,
    /// The exact record value to publish.
    pub record: String,
    pub action: String,
}

/// Generate HTML meta tag instructions from an explicit config.
pub fn generate_html_meta_from_config(
    config: Option<MetaTagConfig>,
    use_generated_code: bool,
) -> Result<HtmlMetaInstruction> {
    let mut config = config.ok_or(Error::MissingConfig)?;
    if use_generated_code {
        config.code = VerificationCode::generate().into_string();
    }
    config.validate()?;

    Ok(HtmlMetaInstruction {
        code: meta_tag_content(&config.tag_name, &config.code),
        action: meta_tag_instruction(&config.tag_name, &config.code),
    })
}

/// Generate HTML meta tag instructions for an app name, with a fresh code.
///
/// The app name becomes the meta tag name; when `sanitize_app_name` is set
/// it is lowercased and stripped of spaces and punctuation first.
pub fn generate_html_meta(app_name: &str, sanitize_app_name: bool) -> Result<HtmlMetaInstruction> {
    if app_name.trim().is_empty() {
        return Err(Error::InvalidAppName);
    }
    let tag_name = if sanitize_app_name {
        sanitize(app_name)
    } else {
        app_name.to_string()
    };
    generate_html_meta_from_config(
        Some(MetaTagConfig {
            tag_name,
            code: VerificationCode::generate().into_string(),
        }),
        false,
    )
}

/// Generate JSON file instructions from an explicit config.
///
/// The file name gets an implicit `.json` suffix when missing.
pub fn generate_json_from_config(
    config: Option<JsonFileConfig>,
    use_generated_code: bool,
) -> Result<FileInstruction> {
    let mut config = config.ok_or(Error::MissingConfig)?;
    if use_generated_code {
        config.code = VerificationCode::generate().into_string();
    }
    config.validate()?;

    let file_name = ensure_extension(&config.file_name, ".json");
    let file_content = json_content(&config.attribute, &config.code);
    let action = json_instruction(&file_name, &file_content);
    Ok(FileInstruction {
        file_name,
        file_content,
        action,
    })
}

/// Generate JSON file instructions for an app name, with a fresh code.
///
/// The sanitized app name prefixes both the file name and the JSON key:
/// `{app}-site-verification.json` containing `{"{app}_site_verification": ...}`.
pub fn generate_json(app_name: &str) -> Result<FileInstruction> {
    if app_name.trim().is_empty() {
        return Err(Error::InvalidAppName);
    }
    let app_name = sanitize(app_name);
    generate_json_from_config(
        Some(JsonFileConfig {
            file_name: format!("{app_name}{JSON_FILE_NAME_SUFFIX}"),
            attribute: format!("{app_name}{JSON_KEY_SUFFIX}"),
            code: VerificationCode::generate().into_string(),
        }),
        false,
    )
}

/// Generate XML file instructions from an explicit config.
///
/// The file name gets an implicit `.xml` suffix when missing.
pub fn generate_xml_from_config(
    config: Option<XmlFileConfig>,
    use_generated_code: bool,
) -> Result<FileInstruction> {
    let mut config = config.ok_or(Error::MissingConfig)?;
    if use_generated_code {
        config.code = VerificationCode::generate().into_string();
    }
    config.validate()?;

    let file_name = ensure_extension(&config.file_name, ".xml");
    let file_content = config.to_xml();
    let action = xml_instruction(&file_name, &file_content);
    Ok(FileInstruction {
        file_name,
        file_content,
        action,
    })
}

/// Generate XML file instructions for an app name, with a fresh code.
///
/// File name is `{app}SiteAuth.xml`; the root element is `verification`.
pub fn generate_xml(app_name: &str, sanitize_app_name: bool) -> Result<FileInstruction> {
    if app_name.trim().is_empty() {
        return Err(Error::InvalidAppName);
    }
    let app_name = if sanitize_app_name {
        sanitize(app_name)
    } else {
        app_name.to_string()
    };
    generate_xml_from_config(
        Some(XmlFileConfig {
            file_name: format!("{app_name}{XML_FILE_NAME_SUFFIX}"),
            root_name: XML_ROOT_NAME.to_string(),
            code: VerificationCode::generate().into_string(),
        }),
        false,
    )
}

/// Generate TXT record instructions from an explicit config.
pub fn generate_txt_record_from_config(
    config: Option<TxtRecordConfig>,
    use_generated_code: bool,
) -> Result<DnsRecordInstruction> {
    let mut config = config.ok_or(Error::MissingConfig)?;
    if use_generated_code {
        config.value = VerificationCode::generate().into_string();
    }
    config.validate()?;

    let record = format!("{}={}", config.attribute, config.value);
    let action = txt_record_instruction(&config.host_name, &record);
    Ok(DnsRecordInstruction {
        host_name: config.host_name,
        record,
        action,
    })
}

/// Generate TXT record instructions for an app name, with a fresh value.
///
/// The host defaults to the zone apex (`@`); the record reads
/// `{app}-site-verification={code}`.
pub fn generate_txt_record(app_name: &str) -> Result<DnsRecordInstruction> {
    if app_name.trim().is_empty() {
        return Err(Error::InvalidAppName);
    }
    let app_name = sanitize(app_name);
    generate_txt_record_from_config(
        Some(TxtRecordConfig {
            host_name: crate::dns::ROOT_DOMAIN.to_string(),
            attribute: format!("{app_name}{TXT_RECORD_ATTRIBUTE_SUFFIX}"),
            value: VerificationCode::generate().into_string(),
        }),
        false,
    )
}

/// Generate CNAME record instructions from an explicit config.
///
/// No code substitution applies: the target is caller-supplied, not
/// synthesized.
pub fn generate_cname_record_from_config(
    config: Option<CnameRecordConfig>,
) -> Result<DnsRecordInstruction> {
    let config = config.ok_or(Error::MissingConfig)?;
    config.validate()?;

    let action = cname_record_instruction(&config.record_name, &config.record_target);
    Ok(DnsRecordInstruction {
        host_name: config.record_name,
        record: config.record_target,
        action,
    })
}

/// Generate CNAME record instructions pointing at a caller-supplied target.
///
/// The record name is a fresh [`VerificationCode`]; the target is used
/// verbatim. The app name is only checked for emptiness, for parity with the
/// other convenience constructors.
pub fn generate_cname_record(app_name: &str, record_target: &str) -> Result<DnsRecordInstruction> {
    if app_name.trim().is_empty() {
        return Err(Error::InvalidAppName);
    }
    generate_cname_record_from_config(Some(CnameRecordConfig {
        record_name: VerificationCode::generate().into_string(),
        record_target: record_target.to_string(),
    }))
}

fn meta_tag_content(name: &str, content: &str) -> String {
    format!(r#"<meta name="{name}" content="{content}" />"#)
}

fn meta_tag_instruction(name: &str, content: &str) -> String {
    format!(
        "Copy and paste the <meta> tag into your site's home page.\n\
         It should go in the <head> section, before the first <body> section.\n\
         {}\n\
         * To stay verified, don't remove the meta tag even after verification succeeds.",
        meta_tag_content(name, content)
    )
}

fn json_content(key: &str, value: &str) -> String {
    format!(r#"{{"{key}": "{value}"}}"#)
}

fn json_instruction(file_name: &str, content: &str) -> String {
    format!(
        "Create a JSON file named {file_name} with the content\n{content}\nand upload it to the root of your site."
    )
}

fn xml_instruction(file_name: &str, content: &str) -> String {
    format!(
        "Create an XML file named {file_name} with the content:\n{content}\nand upload it to the root of your site."
    )
}

fn txt_record_instruction(host_name: &str, record: &str) -> String {
    format!(
        "Create a TXT record with the host name {host_name} and the value\n{record}\nin your DNS provider's configuration.\n\
         * DNS changes may take up to 72 hours to propagate."
    )
}

fn cname_record_instruction(record_name: &str, target: &str) -> String {
    format!(
        "Create a CNAME record named {record_name} pointing to {target}\nin your DNS provider's configuration.\n\
         * DNS changes may take up to 72 hours to propagate."
    )
}

/// Lowercase a string and strip everything that is not a letter or digit.
fn sanitize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Append `extension` to `file_name` unless already present.
fn ensure_extension(file_name: &str, extension: &str) -> String {
    if file_name.ends_with(extension) {
        file_name.to_string()
    } else {
        format!("{file_name}{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_case_spaces_and_punctuation() {
        for (input, want) in [
            ("   abc 123 ", "abc123"),
            ("abc@123", "abc123"),
            ("abc#123", "abc123"),
            ("Abc 123", "abc123"),
            ("Abc_123", "abc123"),
            ("Abc-123", "abc123"),
            ("My Super App", "mysuperapp"),
        ] {
            assert_eq!(sanitize(input), want, "sanitize({input:?})");
        }
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in ["My Super App", "abc@123", "", "ALREADY-clean_42"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn ensure_extension_appends_only_when_missing() {
        assert_eq!(ensure_extension("proof", ".json"), "proof.json");
        assert_eq!(ensure_extension("proof.json", ".json"), "proof.json");
        assert_eq!(ensure_extension("proofSiteAuth.xml", ".xml"), "proofSiteAuth.xml");
    }

    #[test]
    fn html_meta_with_generated_code_embeds_a_fresh_code() {
        let instruction = generate_html_meta_from_config(
            Some(MetaTagConfig {
                tag_name: "example-tag".into(),
                code: String::new(),
            }),
            true,
        )
        .unwrap();
        assert!(instruction.code.starts_with(r#"<meta name="example-tag" content=""#));
        assert!(instruction.code.ends_with(r#"" />"#));
        // The generated code itself must be non-empty.
        assert_ne!(instruction.code, r#"<meta name="example-tag" content="" />"#);
        assert!(instruction.action.contains(&instruction.code));
    }

    #[test]
    fn html_meta_with_external_code_preserves_it() {
        let instruction = generate_html_meta_from_config(
            Some(MetaTagConfig {
                tag_name: "example-tag".into(),
                code: "external-code".into(),
            }),
            false,
        )
        .unwrap();
        assert_eq!(
            instruction.code,
            r#"<meta name="example-tag" content="external-code" />"#
        );
    }

    #[test]
    fn missing_config_is_its_own_error() {
        for use_generated_code in [true, false] {
            assert!(matches!(
                generate_html_meta_from_config(None, use_generated_code),
                Err(Error::MissingConfig)
            ));
        }
        assert!(matches!(
            generate_json_from_config(None, true),
            Err(Error::MissingConfig)
        ));
        assert!(matches!(
            generate_xml_from_config(None, true),
            Err(Error::MissingConfig)
        ));
        assert!(matches!(
            generate_txt_record_from_config(None, true),
            Err(Error::MissingConfig)
        ));
        assert!(matches!(
            generate_cname_record_from_config(None),
            Err(Error::MissingConfig)
        ));
    }

    #[test]
    fn code_substitution_runs_before_validation() {
        // An empty code passes validation when a code is generated for it.
        let config = JsonFileConfig {
            file_name: "example".into(),
            attribute: "code".into(),
            code: String::new(),
        };
        assert!(generate_json_from_config(Some(config.clone()), true).is_ok());
        assert!(matches!(
            generate_json_from_config(Some(config), false),
            Err(Error::EmptyField("code"))
        ));
    }

    #[test]
    fn html_meta_sanitizes_app_name_on_request() {
        let instruction = generate_html_meta("my super app", false).unwrap();
        assert!(instruction.code.starts_with(r#"<meta name="my super app" content=""#));

        let instruction = generate_html_meta("my super app", true).unwrap();
        assert!(instruction.code.starts_with(r#"<meta name="mysuperapp" content=""#));
    }

    #[test]
    fn empty_app_name_is_rejected_everywhere() {
        assert!(matches!(generate_html_meta("", true), Err(Error::InvalidAppName)));
        assert!(matches!(generate_json("  "), Err(Error::InvalidAppName)));
        assert!(matches!(generate_xml("", true), Err(Error::InvalidAppName)));
        assert!(matches!(generate_txt_record(""), Err(Error::InvalidAppName)));
        assert!(matches!(
            generate_cname_record("", "verify.myapp.com"),
            Err(Error::InvalidAppName)
        ));
    }

    #[test]
    fn json_generation_applies_suffixes() {
        let instruction = generate_json("My Super App").unwrap();
        assert_eq!(instruction.file_name, "mysuperapp-site-verification.json");
        assert!(instruction
            .file_content
            .starts_with(r#"{"mysuperapp_site_verification": ""#));
        assert!(instruction.action.contains(&instruction.file_name));
        assert!(instruction.action.contains(&instruction.file_content));
    }

    #[test]
    fn json_file_name_gets_implicit_extension() {
        let instruction = generate_json_from_config(
            Some(JsonFileConfig {
                file_name: "example".into(),
                attribute: "code".into(),
                code: "external-code".into(),
            }),
            false,
        )
        .unwrap();
        assert_eq!(instruction.file_name, "example.json");
        assert_eq!(instruction.file_content, r#"{"code": "external-code"}"#);
    }

    #[test]
    fn xml_generation_uses_fixed_root_and_suffix() {
        let instruction = generate_xml("My Super App", true).unwrap();
        assert_eq!(instruction.file_name, "mysuperappSiteAuth.xml");
        assert!(instruction
            .file_content
            .starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<verification><code>"));
        assert!(instruction.file_content.ends_with("</code></verification>"));
    }

    #[test]
    fn xml_file_name_gets_implicit_extension() {
        let instruction = generate_xml_from_config(
            Some(XmlFileConfig {
                file_name: "example".into(),
                root_name: "example-root".into(),
                code: "internal-code".into(),
            }),
            false,
        )
        .unwrap();
        assert_eq!(instruction.file_name, "example.xml");
        assert!(instruction
            .file_content
            .contains("<example-root><code>internal-code</code></example-root>"));
    }

    #[test]
    fn txt_record_defaults_to_zone_apex() {
        let instruction = generate_txt_record("My Super App").unwrap();
        assert_eq!(instruction.host_name, "@");
        let (attribute, value) = instruction.record.split_once('=').unwrap();
        assert_eq!(attribute, "mysuperapp-site-verification");
        assert!(!value.is_empty());
    }

    #[test]
    fn cname_record_uses_target_verbatim() {
        let instruction = generate_cname_record("My Super App", "verify.myapp.com").unwrap();
        assert_eq!(instruction.record, "verify.myapp.com");
        assert!(!instruction.host_name.is_empty());
        assert!(instruction.action.contains("verify.myapp.com"));
    }
}
