//! API server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use posture_analysis::PostureThresholds;
use posture_landmarks::LandmarkSourceConfig;

/// Environment variable prefix, e.g. `POSTURE_HTTP__BIND_ADDR`
pub const ENV_PREFIX: &str = "POSTURE";

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Verbose logging
    pub debug: bool,

    /// HTTP server configuration
    pub http: HttpConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Pose-estimation sidecar
    pub landmarks: LandmarkSourceConfig,

    /// Posture rule thresholds
    pub thresholds: PostureThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Listen address
    pub bind_addr: SocketAddr,

    /// Maximum request body size (bytes)
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins, `*` allows any
    pub allowed_origins: Vec<String>,

    /// Max age (seconds)
    pub max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            debug: false,
            http: HttpConfig {
                bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
                max_body_size: 10 * 1024 * 1024, // 10MB
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
                max_age_secs: 3600,
            },
            landmarks: LandmarkSourceConfig::default(),
            thresholds: PostureThresholds::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration: defaults, then an optional file, then environment
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&ApiConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load from environment variables on top of the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug,hyper=info"
        } else {
            "info,tower_http=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.http.bind_addr.port(), 5000);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.thresholds, PostureThresholds::default());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ApiConfig::load(None).unwrap();
        assert_eq!(config.thresholds.squat_knee_hip_angle, 120.0);
        assert_eq!(config.http.max_body_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("POSTURE_THRESHOLDS__FORWARD_HEAD_NECK_ANGLE", "140");
        std::env::set_var("POSTURE_HTTP__BIND_ADDR", "127.0.0.1:8080");

        let config = ApiConfig::from_env();

        std::env::remove_var("POSTURE_THRESHOLDS__FORWARD_HEAD_NECK_ANGLE");
        std::env::remove_var("POSTURE_HTTP__BIND_ADDR");

        let config = config.unwrap();
        assert_eq!(config.thresholds.forward_head_neck_angle, 140.0);
        assert_eq!(config.thresholds.slouch_horizontal_offset, 0.1);
        assert_eq!(config.http.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.http.max_body_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_file_overrides() {
        let path = std::env::temp_dir().join(format!("posture-api-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "debug = true\n\n[http]\nbind_addr = \"127.0.0.1:8080\"\n\n[thresholds]\nforward_head_neck_angle = 140.0"
        )
        .unwrap();

        let config = ApiConfig::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(config.debug);
        assert_eq!(config.http.bind_addr.port(), 8080);
        assert_eq!(config.thresholds.forward_head_neck_angle, 140.0);
        assert_eq!(config.thresholds.rounded_back_angle, 150.0);
        assert_eq!(config.log_filter(), "debug,hyper=info");
    }
}
