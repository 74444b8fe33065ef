// Report example
// Author: Gabriel Demetrios Lafis

use anyhow::Context;
use rust_analytics_client::{
    utils::init_logging, AnalyticsClient, Config, OAuth2, RefreshCredentials,
};

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{} is not set", name))
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    init_logging(config.log_level_filter())?;

    let credentials = RefreshCredentials {
        client_id: env("ANALYTICS_CLIENT_ID")?,
        client_secret: env("ANALYTICS_CLIENT_SECRET")?,
        refresh_token: env("ANALYTICS_REFRESH_TOKEN")?,
    };
    let profile_id = env("ANALYTICS_PROFILE_ID")?;

    let auth = OAuth2::with_refresh_token(credentials, &config.service);
    let mut client = AnalyticsClient::connect(config, auth)?;

    let query = client
        .report_query(&profile_id)
        .dimensions(["browser", "browserVersion"])
        .metrics(["pageviews", "visits"])
        .build()?;

    let report = client.request_report_data(&query)?;

    // Print the rows
    println!("{:<40} {:>12} {:>12}", "Browser & Browser Version", "Pageviews", "Visits");
    for row in report.rows() {
        println!(
            "{:<40} {:>12} {:>12}",
            row.to_string(),
            row.metric("pageviews")?.to_string(),
            row.metric("visits")?.to_string()
        );
    }

    // Print the totals
    println!();
    println!("Total Results:   {}", report.total_results().unwrap_or_default());
    println!("Total Pageviews: {}", report.get("pageviews")?);
    println!("Total Visits:    {}", report.get("visits")?);

    Ok(())
}
