/// Errors raised by the external capabilities the lookup depends on.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.transport")]
    Transport,
    #[error("catalog.http_status")]
    HttpStatus(u16),
    #[error("catalog.invalid_payload")]
    InvalidPayload,
}

impl CatalogError {
    pub fn transport() -> Self {
        CatalogError::Transport
    }
    pub fn http_status(status: u16) -> Self {
        CatalogError::HttpStatus(status)
    }
    pub fn invalid_payload() -> Self {
        CatalogError::InvalidPayload
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnotationError {
    #[error("annotation.image_unreadable")]
    ImageUnreadable,
    #[error("annotation.transport")]
    Transport,
    #[error("annotation.http_status")]
    HttpStatus(u16),
    #[error("annotation.service_error")]
    Service(String),
    #[error("annotation.invalid_payload")]
    InvalidPayload,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslationError {
    #[error("translation.transport")]
    Transport,
    #[error("translation.http_status")]
    HttpStatus(u16),
    #[error("translation.invalid_payload")]
    InvalidPayload,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BarcodeError {
    #[error("barcode.decoder_failure")]
    Decoder(String),
}
