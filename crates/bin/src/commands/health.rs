//! Health check command - checks a running aiguide server.

use std::time::Duration;

use crate::cli::HealthArgs;

/// Run the health check command
pub async fn run(args: &HealthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let base = args.url.trim_end_matches('/');
    let url = if base.ends_with("/health") {
        base.to_string()
    } else {
        format!("{base}/health")
    };
    let timeout = Duration::from_secs(args.timeout);

    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("unhealthy: failed to connect to {url}: {e}"))?;

    if !response.status().is_success() {
        return Err(format!(
            "unhealthy: server returned HTTP status {}",
            response.status()
        )
        .into());
    }

    let body: serde_json::Value = response.json().await?;
    let status = body.get("status").and_then(|s| s.as_str()).unwrap_or("");
    if status != "healthy" {
        return Err(format!("unhealthy: server returned status {status:?}").into());
    }

    println!("healthy: {body}");
    Ok(())
}
