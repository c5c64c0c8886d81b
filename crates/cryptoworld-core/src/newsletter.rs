//! Newsletter sign-up stub.
//!
//! There is no mailing list behind this. A subscription ignores an empty
//! field, otherwise waits a fixed artificial delay and always succeeds. The
//! address is dropped afterwards.
//!
//! Address syntax is the caller's concern: the desktop form relies on its
//! `type="email"` input, the CLI runs [`EmailAddress::parse`] first.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Artificial latency of a subscription
pub const SUBSCRIBE_DELAY: Duration = Duration::from_secs(1);

/// Toast text shown after a successful subscription
pub const SUCCESS_MESSAGE: &str = "Successfully subscribed to newsletter!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    /// Nothing was entered; the form does nothing
    #[error("Email address is empty")]
    Empty,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// A syntactically plausible email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts `local@domain.tld`: one `@`, a non-empty local part, and a
    /// domain with a dot that is neither first nor last. Surrounding
    /// whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, NewsletterError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NewsletterError::Empty);
        }

        let invalid = || NewsletterError::InvalidEmail(trimmed.to_string());

        let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') || trimmed.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let dot = domain.rfind('.').ok_or_else(invalid)?;
        if domain.starts_with('.') || dot + 1 == domain.len() {
            return Err(invalid());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receipt for a completed (simulated) subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    _private: (),
}

impl Subscription {
    pub fn message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }
}

/// The simulated newsletter endpoint
#[derive(Debug, Clone, Copy)]
pub struct Newsletter {
    delay: Duration,
}

impl Default for Newsletter {
    fn default() -> Self {
        Self {
            delay: SUBSCRIBE_DELAY,
        }
    }
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay and report success.
    ///
    /// A blank `email` returns [`NewsletterError::Empty`] immediately; any
    /// other input is accepted as-is.
    pub async fn subscribe(&self, email: &str) -> Result<Subscription, NewsletterError> {
        let address = email.trim();
        if address.is_empty() {
            return Err(NewsletterError::Empty);
        }

        tracing::info!("Subscribing {} to newsletter", address);
        tokio::time::sleep(self.delay).await;
        tracing::debug!("Subscription for {} completed", address);

        Ok(Subscription { _private: () })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let email = EmailAddress::parse("  satoshi@example.com ").unwrap();
        assert_eq!(email.as_str(), "satoshi@example.com");
        assert!(EmailAddress::parse("a.b+news@mail.example.org").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(EmailAddress::parse(""), Err(NewsletterError::Empty));
        assert_eq!(EmailAddress::parse("   "), Err(NewsletterError::Empty));
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@localhost",
            "user@.com",
            "user@example.",
            "a@b@example.com",
            "sat oshi@example.com",
        ] {
            assert!(
                matches!(EmailAddress::parse(bad), Err(NewsletterError::InvalidEmail(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_waits_for_delay() {
        let newsletter = Newsletter::new();
        let start = tokio::time::Instant::now();

        let receipt = newsletter.subscribe("hodler@example.com").await.unwrap();

        assert!(start.elapsed() >= SUBSCRIBE_DELAY);
        assert_eq!(receipt.message(), "Successfully subscribed to newsletter!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_email_does_not_wait() {
        let newsletter = Newsletter::new();
        let start = tokio::time::Instant::now();

        assert_eq!(newsletter.subscribe("").await, Err(NewsletterError::Empty));
        assert_eq!(newsletter.subscribe("  ").await, Err(NewsletterError::Empty));
        assert_eq!(start.elapsed(), std::time::Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_accepts_any_non_empty_input() {
        let newsletter = Newsletter::new();

        for email in ["user@localhost", "nope", "a@b@c"] {
            let start = tokio::time::Instant::now();
            let receipt = newsletter.subscribe(email).await.unwrap();
            assert!(start.elapsed() >= SUBSCRIBE_DELAY, "{} should wait", email);
            assert_eq!(receipt.message(), SUCCESS_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_custom_delay() {
        let newsletter = Newsletter::with_delay(Duration::ZERO);
        assert_eq!(newsletter.delay(), Duration::ZERO);
        assert!(newsletter.subscribe("a@b.io").await.is_ok());
    }
}
