// src/config.rs

/// Default backend origin serving compile/fmt/share/version requests.
pub const BACKEND_URL: &str = "https://play.golang.org";

/// Default frontend origin used to build human-visitable share links.
pub const FRONTEND_URL: &str = "https://go.dev/play";

/// Endpoint origins for a client.
///
/// Origins are resolved once, at client construction, so a client's targets
/// stay fixed for its lifetime regardless of later environment changes.
#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    /// Origin for compile/fmt/share/version requests.
    pub backend_url: String,
    /// Origin for constructing share links.
    pub frontend_url: String,
}

impl PlaygroundConfig {
    /// Load endpoint origins from environment variables, falling back to the
    /// public playground defaults.
    pub fn from_env() -> Self {
        let backend_url = std::env::var("PLAYGROUND_BACKEND_URL")
            .unwrap_or_else(|_| BACKEND_URL.to_string());
        let frontend_url = std::env::var("PLAYGROUND_FRONTEND_URL")
            .unwrap_or_else(|_| FRONTEND_URL.to_string());

        PlaygroundConfig {
            backend_url,
            frontend_url,
        }
    }
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        PlaygroundConfig {
            backend_url: BACKEND_URL.to_string(),
            frontend_url: FRONTEND_URL.to_string(),
        }
    }
}
