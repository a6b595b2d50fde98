use anyhow::{Context, Result};

/// Configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Required variables
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY not set; add it to the environment or a .env file")?;

    // Optional variables with defaults
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let timeout_secs = match std::env::var("OPENAI_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("OPENAI_TIMEOUT_SECS is not a number: '{raw}'"))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };
    Ok(Config {
        api_key,
        model,
        timeout_secs,
    })
}
