// ============================================================================
// Signature Errors
// Error types for the XML-DSig signing and validation pipeline
// ============================================================================

use std::fmt;

/// Errors produced while signing or validating a fiscal XML document.
///
/// Messages are in Portuguese because they surface directly to back-office
/// operators of the fiscal module. Every anticipated failure crosses the
/// module boundary as a value of this type; nothing panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    /// The tag designated for signing is absent from the document
    TagNotFound(String),
    /// The designated tag carries no `Id="..."` attribute
    IdNotFound(String),
    /// The parent element's closing tag could not be located for splicing
    ParentTagNotFound(String),
    /// The parent element could not be derived from the tag name and no
    /// explicit parent was configured
    ParentTagUnknown(String),
    /// A PEM envelope is structurally invalid (missing BEGIN/END markers)
    InvalidPem(PemKind),
    /// The certificate body is not valid base64/DER
    InvalidCertificate(String),
    /// A named structural element is missing from a signed document
    MissingElement(&'static str),
    /// The `Reference` element carries no `URI="#..."` attribute
    MissingReferenceUri,
    /// Underlying cryptographic library failure (malformed key, etc.)
    Crypto(String),
}

/// Which PEM artifact failed structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PemKind {
    PrivateKey,
    Certificate,
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignError::TagNotFound(tag) => {
                write!(f, "Tag <{tag}> não encontrada no XML")
            }
            SignError::IdNotFound(tag) => {
                write!(f, "Atributo Id não encontrado na tag <{tag}>")
            }
            SignError::ParentTagNotFound(tag) => {
                write!(f, "Tag de fechamento </{tag}> não encontrada no XML")
            }
            SignError::ParentTagUnknown(tag) => {
                write!(
                    f,
                    "Não foi possível derivar a tag pai de <{tag}>; informe parent_tag na configuração"
                )
            }
            SignError::InvalidPem(PemKind::PrivateKey) => {
                write!(f, "Chave privada não está em formato PEM válido")
            }
            SignError::InvalidPem(PemKind::Certificate) => {
                write!(f, "Certificado não está em formato PEM válido")
            }
            SignError::InvalidCertificate(detail) => {
                write!(f, "Certificado inválido: {detail}")
            }
            SignError::MissingElement(element) => {
                write!(f, "{element} não encontrado na assinatura")
            }
            SignError::MissingReferenceUri => {
                write!(f, "Reference URI não encontrada na assinatura")
            }
            SignError::Crypto(detail) => {
                write!(f, "Erro criptográfico: {detail}")
            }
        }
    }
}

impl std::error::Error for SignError {}

/// Result type alias for signature operations
pub type SignResult<T> = Result<T, SignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SignError::TagNotFound("infNFe".to_string()).to_string(),
            "Tag <infNFe> não encontrada no XML"
        );
        assert_eq!(
            SignError::IdNotFound("infNFe".to_string()).to_string(),
            "Atributo Id não encontrado na tag <infNFe>"
        );
        assert_eq!(
            SignError::MissingElement("X509Certificate").to_string(),
            "X509Certificate não encontrado na assinatura"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            SignError::InvalidPem(PemKind::Certificate),
            SignError::InvalidPem(PemKind::Certificate)
        );
        assert_ne!(
            SignError::InvalidPem(PemKind::Certificate),
            SignError::InvalidPem(PemKind::PrivateKey)
        );
    }
}
