/// Remote collaborator errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("remote.request_failed")]
    RequestFailed,
    #[error("remote.unexpected_status")]
    UnexpectedStatus(u16),
}

impl GatewayError {
    pub fn request_failed() -> Self {
        GatewayError::RequestFailed
    }
    pub fn unexpected_status(status: u16) -> Self {
        GatewayError::UnexpectedStatus(status)
    }

    /// True when the collaborator answered 404 for an addressed record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::UnexpectedStatus(404))
    }
}
