use fedfin_http::FredClient;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let series = std::env::var("FRED_SERIES").unwrap_or_else(|_| "DGS10".to_owned());

    let client = FredClient::from_env()?;
    match client.get_series_observations(&series, ()).await {
        Ok(data) => {
            let count = data
                .get("observations")
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            tracing::info!("fetched {count} observations for {series}");
        }
        Err(err) => tracing::error!("failed to fetch series {series}: {err}"),
    }

    Ok(())
}
