//! Connection configuration for executor implementations.

use std::fmt;

/// Connection settings an executor implementation needs to reach the server.
///
/// All credentials are required at construction; there are no implicit
/// fallback defaults. Session options are free-form key/value pairs passed
/// through to the driver.
#[derive(Clone)]
pub struct ConnectionConfig {
    dsn: String,
    user: String,
    password: String,
    options: Vec<(String, String)>,
}

impl ConnectionConfig {
    /// Create a configuration. Every field is required.
    pub fn new(
        dsn: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            dsn: dsn.into(),
            user: user.into(),
            password: password.into(),
            options: Vec::new(),
        }
    }

    /// Add a session option, e.g. `("names", "utf8mb4")`.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }

    /// The data source name.
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// The user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Session options in insertion order.
    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("dsn", &self.dsn)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}
