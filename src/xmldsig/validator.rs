// ============================================================================
// Structural Signature Validation
// Presence checks over a signed document's Signature block
// ============================================================================

use super::errors::{SignError, SignResult};
use regex::Regex;
use std::sync::LazyLock;

/// Structurally validate an enveloped signature.
///
/// Confirms the presence, in order, of `Signature`, `SignatureValue`,
/// `X509Certificate`, `DigestValue` and a `Reference` carrying a `URI="#..."`
/// attribute, naming the first missing element. This is a
/// structural-completeness check ONLY: the digest is not recomputed and the
/// signature is not verified against the certificate. Callers needing trust
/// verification must run a full XML-DSig verifier on top of this check.
pub fn validate_signature(signed_xml: &str) -> SignResult<()> {
    if !signed_xml.contains("<Signature") {
        return Err(SignError::MissingElement("Signature"));
    }
    if !signed_xml.contains("<SignatureValue>") {
        return Err(SignError::MissingElement("SignatureValue"));
    }
    if !signed_xml.contains("<X509Certificate>") {
        return Err(SignError::MissingElement("X509Certificate"));
    }
    if !signed_xml.contains("<DigestValue>") {
        return Err(SignError::MissingElement("DigestValue"));
    }
    if !has_reference_uri(signed_xml) {
        return Err(SignError::MissingReferenceUri);
    }
    Ok(())
}

fn has_reference_uri(signed_xml: &str) -> bool {
    static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r##"<Reference\b[^>]*\bURI\s*=\s*"#[^"]*""##).expect("valid Reference pattern")
    });
    PATTERN.is_match(signed_xml)
}
