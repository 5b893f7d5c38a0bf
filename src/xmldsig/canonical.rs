// ============================================================================
// Simplified Canonicalization
// Whitespace/declaration normalization applied before digesting
// ============================================================================
//
// This is NOT Canonical XML 1.0 (xml-c14n-20010315), even though the signed
// document advertises that algorithm URI. It reproduces the normalization the
// original fiscal pipeline applied: strip the XML declaration, collapse
// whitespace between tags, trim. Upgrading to full C14N would change every
// digest and must be validated against tax-authority acceptance first, so
// the simplification is preserved deliberately.

use regex::Regex;
use std::sync::LazyLock;

static XML_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?xml[^?]*\?>").expect("valid declaration pattern"));

static INTER_TAG_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("valid whitespace pattern"));

/// Normalize an XML fragment for digesting.
///
/// Strips any `<?xml ...?>` declaration, collapses whitespace runs between
/// adjacent tags, and trims the result. Text content inside elements is left
/// untouched.
pub fn canonicalize(xml: &str) -> String {
    let without_declaration = XML_DECLARATION.replace_all(xml, "");
    let collapsed = INTER_TAG_WHITESPACE.replace_all(&without_declaration, "><");
    collapsed.trim().to_string()
}
