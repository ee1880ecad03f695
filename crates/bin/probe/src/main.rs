//! # registrar-probe
//!
//! Manual smoke check against a locally running server. Sends one
//! unauthenticated GET and prints the status line and body. The exit code
//! only reflects transport failures, never the HTTP status.

use anyhow::Context;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";
const PATH: &str = "/api/student/course-registration";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = format!("{BASE_URL}{PATH}");
    tracing::debug!(%url, "sending probe request");

    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("request to {url} failed"))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .context("failed to read response body")?;

    println!("Status: {}", status.as_u16());
    println!("Body:\n{}", render(&text));

    Ok(())
}

/// Pretty-print `body` as JSON, or return it untouched when it is not JSON.
fn render(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string())
}
