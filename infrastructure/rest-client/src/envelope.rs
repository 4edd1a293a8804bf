use serde::Deserialize;

/// Every success body wraps its value in `payload`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub payload: T,
}
