use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 16;

/// Transient message for the operator (a toast, in a graphical front end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(message) | Notification::Error(message) => message,
        }
    }
}

/// Publish/subscribe channel owned by a view. Dropping the owner closes it,
/// so subscribers see `RecvError::Closed` once the view is gone.
pub struct NotificationChannel {
    sender: broadcast::Sender<Notification>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Publishing with no subscribers is not an error; the message is dropped.
    pub fn publish(&self, notification: Notification) {
        let _ = self.sender.send(notification);
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}
