use async_trait::async_trait;

/// Asks the operator to confirm a destructive action.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}
