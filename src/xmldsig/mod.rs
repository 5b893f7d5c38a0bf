// ============================================================================
// XML-DSig Module
// Enveloped digital signatures for Brazilian fiscal documents (NFe/CTe)
// ============================================================================
//
// This module provides:
// - sign_xml / sign_xml_with: RSA-SHA1 enveloped signature pipeline
// - validate_signature: structural completeness check on signed documents
// - load_certificate / certificate_thumbprint: PEM and X.509 handling
// - SignError: typed failures with operator-facing Portuguese messages
//
// Design principles:
// - No exceptions across the boundary: anticipated failures are SignError
// - Simplified canonicalization preserved for digest compatibility (the
//   canonical module documents the gap versus real C14N)
// - Structural validation never claims cryptographic trust
// - Key/certificate material is loaded per call and never cached

mod canonical;
mod certificate;
mod errors;
mod signer;
mod validator;

#[cfg(test)]
pub(crate) mod testdata;

pub use canonical::canonicalize;
pub use certificate::{certificate_thumbprint, load_certificate, CertificateInfo};
pub use errors::{PemKind, SignError, SignResult};
pub use signer::{sign_xml, sign_xml_with, SignerConfig};
pub use validator::validate_signature;
