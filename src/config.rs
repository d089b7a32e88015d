use std::env;
use std::path::PathBuf;

/// Fixed chart artifact location under the static directory. Every report view
/// overwrites the same file; `CHART_URL` is what pages reference.
pub const CHART_FILE: &str = "img/water_report.svg";
pub const CHART_URL: &str = "/static/img/water_report.svg";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/health.db".into())
                .into(),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".into())
                .into(),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.static_dir.join(CHART_FILE)
    }
}
