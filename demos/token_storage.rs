// Token storage example
// Author: Gabriel Demetrios Lafis

use std::fs;
use std::path::Path;

use anyhow::Context;
use rust_analytics_client::{utils::init_logging, AnalyticsClient, ClientLogin, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    init_logging(config.log_level_filter())?;

    let email = std::env::var("ANALYTICS_EMAIL").context("ANALYTICS_EMAIL is not set")?;
    let password = std::env::var("ANALYTICS_PASSWORD").context("ANALYTICS_PASSWORD is not set")?;

    // Reuse a token from an earlier run when there is one
    let token_file = std::env::temp_dir().join("analytics_auth_token");
    let mut auth = ClientLogin::new(&email, &password, &config.service);
    if let Some(token) = stored_token(&token_file) {
        auth = auth.with_token(&token);
    }

    let client = AnalyticsClient::connect(config, auth)?;
    let token = client
        .auth_token()
        .context("the client holds no token after connecting")?;

    fs::write(&token_file, token)
        .with_context(|| format!("failed to store token in {}", token_file.display()))?;

    println!("Token: {}", token);
    Ok(())
}

fn stored_token(path: &Path) -> Option<String> {
    let token = fs::read_to_string(path).ok()?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
