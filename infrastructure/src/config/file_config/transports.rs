//! Mail transport configuration from TOML (`[[transports]]` array)

use outreach_domain::{DomainError, TransportConfig};
use serde::{Deserialize, Serialize};

/// One SMTP sending account.
///
/// ```toml
/// [[transports]]
/// label = "primary"
/// server = "smtp.example.com"
/// port = 465
/// username = "me@example.com"
/// password = "app-password"
/// sender_email = "Me <me@example.com>"
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTransportConfig {
    pub label: Option<String>,
    pub server: String,
    /// 465 uses implicit TLS, anything else STARTTLS.
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender_email: String,
}

impl Default for FileTransportConfig {
    fn default() -> Self {
        Self {
            label: None,
            server: String::new(),
            port: 587,
            username: String::new(),
            password: String::new(),
            sender_email: String::new(),
        }
    }
}

impl std::fmt::Debug for FileTransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileTransportConfig")
            .field("label", &self.label)
            .field("server", &self.server)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender_email", &self.sender_email)
            .finish()
    }
}

impl FileTransportConfig {
    /// Validate into a domain transport
    pub fn to_transport(&self) -> Result<TransportConfig, DomainError> {
        let transport = TransportConfig::new(
            &self.server,
            self.port,
            &self.username,
            &self.password,
            &self.sender_email,
        )?;

        Ok(match &self.label {
            Some(label) => transport.with_label(label),
            None => transport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use outreach_domain::TransportSecurity;

    #[test]
    fn test_transports_deserialize() {
        let toml_str = r#"
[[transports]]
label = "primary"
server = "smtp.one.com"
port = 465
username = "me"
password = "secret"
sender_email = "me@one.com"

[[transports]]
server = "smtp.two.com"
username = "me"
password = "secret"
sender_email = "me@two.com"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.transports.len(), 2);
        assert_eq!(config.transports[1].port, 587);

        let first = config.transports[0].to_transport().unwrap();
        assert_eq!(first.describe(), "primary");
        assert_eq!(first.security(), TransportSecurity::ImplicitTls);

        let second = config.transports[1].to_transport().unwrap();
        assert_eq!(second.describe(), "smtp.two.com, me");
        assert_eq!(second.security(), TransportSecurity::StartTls);
    }

    #[test]
    fn test_debug_redacts_password() {
        let toml_str = r#"
[[transports]]
server = "smtp.one.com"
password = "hunter2"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let debug = format!("{:?}", config.transports[0]);
        assert!(!debug.contains("hunter2"));
    }
}
