//! Mail transport configuration value object

use crate::contact::is_email_shaped;
use crate::core::error::DomainError;

/// Port that selects implicit TLS instead of STARTTLS
pub const IMPLICIT_TLS_PORT: u16 = 465;

/// How the connection to the mail server is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportSecurity {
    /// TLS from the first byte (port 465)
    ImplicitTls,
    /// Plaintext connection upgraded with STARTTLS
    StartTls,
}

/// One configured mail-sending account (Value Object)
///
/// Validated on construction; never mutated by the pipeline.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportConfig {
    label: Option<String>,
    server: String,
    port: u16,
    username: String,
    password: String,
    sender_email: String,
}

impl TransportConfig {
    pub fn new(
        server: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        sender_email: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let server = server.into().trim().to_string();
        let username = username.into().trim().to_string();
        let sender_email = sender_email.into().trim().to_string();

        if server.is_empty() {
            return Err(DomainError::InvalidTransport("server is empty".to_string()));
        }
        if port == 0 {
            return Err(DomainError::InvalidTransport(format!(
                "port 0 is not usable for {}",
                server
            )));
        }
        if username.is_empty() {
            return Err(DomainError::InvalidTransport(format!(
                "username is empty for {}",
                server
            )));
        }
        if !is_email_shaped(&mailbox_address(&sender_email).to_lowercase()) {
            return Err(DomainError::InvalidTransport(format!(
                "sender address '{}' is not an email address",
                sender_email
            )));
        }

        Ok(Self {
            label: None,
            server,
            port,
            username,
            password: password.into(),
            sender_email,
        })
    }

    /// Attach a human-readable name used in reports
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.trim().is_empty()).then_some(label);
        self
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// `From` address for messages sent through this transport
    pub fn sender_email(&self) -> &str {
        &self.sender_email
    }

    pub fn security(&self) -> TransportSecurity {
        if self.port == IMPLICIT_TLS_PORT {
            TransportSecurity::ImplicitTls
        } else {
            TransportSecurity::StartTls
        }
    }

    /// Name shown in reports: the label, or `server, username`
    pub fn describe(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}, {}", self.server, self.username),
        }
    }
}

impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConfig")
            .field("label", &self.label)
            .field("server", &self.server)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender_email", &self.sender_email)
            .finish()
    }
}

/// The bare address of `Name <addr>` or `addr`
fn mailbox_address(value: &str) -> &str {
    match (value.rfind('<'), value.rfind('>')) {
        (Some(start), Some(end)) if start < end => value[start + 1..end].trim(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(port: u16) -> TransportConfig {
        TransportConfig::new("smtp.foo.com", port, "me", "secret", "me@foo.com").unwrap()
    }

    #[test]
    fn test_security_follows_port() {
        assert_eq!(config(465).security(), TransportSecurity::ImplicitTls);
        assert_eq!(config(587).security(), TransportSecurity::StartTls);
        assert_eq!(config(25).security(), TransportSecurity::StartTls);
    }

    #[test]
    fn test_describe_defaults_to_server_and_user() {
        assert_eq!(config(587).describe(), "smtp.foo.com, me");
        assert_eq!(config(587).with_label("Primary").describe(), "Primary");
        assert_eq!(config(587).with_label("  ").describe(), "smtp.foo.com, me");
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", config(587));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_named_sender_is_accepted() {
        let cfg = TransportConfig::new("smtp.foo.com", 587, "me", "pw", "Ada <Ada@Foo.com>");
        assert!(cfg.is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert!(TransportConfig::new(" ", 587, "me", "pw", "me@foo.com").is_err());
        assert!(TransportConfig::new("smtp.foo.com", 0, "me", "pw", "me@foo.com").is_err());
        assert!(TransportConfig::new("smtp.foo.com", 587, "", "pw", "me@foo.com").is_err());
        let err = TransportConfig::new("smtp.foo.com", 587, "me", "pw", "not-an-address")
            .unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}
