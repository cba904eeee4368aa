//! Rendered message ready for the notifier

/// Subject and HTML body of an outbound email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

impl RenderedEmail {
    pub fn new(subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            html: html.into(),
        }
    }
}
