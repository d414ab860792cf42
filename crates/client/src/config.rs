//! Client configuration.

/// Backend location and fixture selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Versioned base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// When set, the client runs against the fixture server with a fixed
    /// stand-in token and the access gate is bypassed.
    pub use_fixture: bool,
}

impl ClientConfig {
    /// Default base URL, matching the fixture server's default bind address.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:7071/api/v1";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            use_fixture: false,
        }
    }

    pub fn with_fixture(mut self, use_fixture: bool) -> Self {
        self.use_fixture = use_fixture;
        self
    }

    /// Read configuration from the process environment, with development
    /// defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SPNPORTAL_API_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        let use_fixture = std::env::var("SPNPORTAL_USE_FIXTURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { base_url, use_fixture }
    }

    /// Configuration baked in at build time, for WASM builds where there is
    /// no process environment at runtime.
    pub fn compiled() -> Self {
        let base_url = option_env!("SPNPORTAL_API_URL").unwrap_or(Self::DEFAULT_BASE_URL);
        let use_fixture = matches!(option_env!("SPNPORTAL_USE_FIXTURE"), Some("1" | "true"));
        Self {
            base_url: base_url.to_string(),
            use_fixture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_real_backend() {
        let config = ClientConfig::new("http://localhost:7071/api/v1");
        assert!(!config.use_fixture);
        assert!(config.with_fixture(true).use_fixture);
    }
}
