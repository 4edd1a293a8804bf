use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::Mutex;

use business::domain::catalog::confirmation::ConfirmationPrompt;

/// Line reader shared by the command loop and the confirmation prompt.
pub struct ConsoleInput<R> {
    lines: Mutex<Lines<R>>,
}

impl<R> ConsoleInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    /// Next line of input, or `None` at end of input.
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

/// Asks the operator a yes/no question on the console. Anything but an
/// explicit yes, including end of input, declines.
pub struct ConsoleConfirmation<R> {
    input: Arc<ConsoleInput<R>>,
}

impl<R> ConsoleConfirmation<R> {
    pub fn new(input: Arc<ConsoleInput<R>>) -> Self {
        Self { input }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl<R> ConfirmationPrompt for ConsoleConfirmation<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = std::io::stdout().flush();

        match self.input.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}
