use anyhow::{bail, Context};
use axum::http::HeaderValue;
use financeflow_ai::{AiProvider, ProviderConfig};
use std::net::SocketAddr;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub ai: ProviderConfig,
    pub json_logs: bool,
}

impl Config {
    /// Reads `FF_*` variables, loading a `.env` file first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen_addr: SocketAddr = var("FF_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FF_LISTEN_ADDR")?;
        let db_path = var("FF_DB_PATH").unwrap_or_else(|| "./db/financeflow.db".into());

        let cors_allow: Vec<String> = var("FF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_allow.iter().filter(|origin| origin.as_str() != "*") {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid origin '{}' in FF_CORS_ALLOW_ORIGINS", origin))?;
        }

        let provider: AiProvider = var("FF_AI_PROVIDER")
            .unwrap_or_else(|| "openai".into())
            .parse()
            .context("Invalid FF_AI_PROVIDER")?;
        let mut ai = ProviderConfig::new(provider);
        if let Some(model) = var("FF_AI_MODEL") {
            ai = ai.with_model(model.trim());
        }
        if let Some(api_key) = var("FF_AI_API_KEY") {
            ai = ai.with_api_key(api_key.trim());
        }
        if let Some(base_url) = var("FF_AI_BASE_URL") {
            ai = ai.with_base_url(base_url.trim());
        }

        let json_logs = match var("FF_LOG_FORMAT").as_deref().map(str::trim) {
            None => false,
            Some(format) if format.eq_ignore_ascii_case("text") => false,
            Some(format) if format.eq_ignore_ascii_case("json") => true,
            Some(other) => bail!("Invalid FF_LOG_FORMAT '{}', expected 'text' or 'json'", other),
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            ai,
            json_logs,
        })
    }
}
