//! Transport failure reported by a [`super::Fetch`] implementation.

/// One or more human-readable messages from the HTTP layer.
///
/// Displayed as the messages joined with `"; "`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .messages.join("; "))]
pub struct FetchError {
    messages: Vec<String>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Builds an error from several messages. An empty list gets a generic one.
    pub fn with_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Self::new("request failed");
        }
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        Self::with_messages(std::iter::once(e.description()).chain(e.extra_description()))
    }
}
