use campus_alert_events::PushConfig;

/// Relay server configuration loaded from environment variables.
///
/// Defaults match a single-machine demo: the server listens on port 5000,
/// serves its own pages (hence the same-origin CORS default) and uses the
/// built-in student directory. Deployments set `PUBLIC_BASE_URL` so dispatch
/// pushes link to a reachable dashboard, and `DIRECTORY_PATH` for real
/// students. There is no auth configuration: the relay has no accounts.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Externally reachable base URL used to build dashboard links.
    /// When unset the request `Host` header is used instead.
    pub public_base_url: Option<String>,
    /// Student id baked into the activation page. Demo placeholder only;
    /// there is no authentication behind it.
    pub demo_student_id: String,
    /// Optional JSON file with the student directory.
    pub directory_path: Option<String>,
    /// Push provider configuration.
    pub push: PushConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_BASE_URL`      | unset                      |
    /// | `DEMO_STUDENT_ID`      | `S12345`                   |
    /// | `DIRECTORY_PATH`       | unset (built-in seed)      |
    ///
    /// Push settings are read by [`PushConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url = non_empty_var("PUBLIC_BASE_URL");
        let demo_student_id =
            non_empty_var("DEMO_STUDENT_ID").unwrap_or_else(|| "S12345".into());
        let directory_path = non_empty_var("DIRECTORY_PATH");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            demo_student_id,
            directory_path,
            push: PushConfig::from_env(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
