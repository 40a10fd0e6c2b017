use fedfin_http::{save_json, FfiecClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // FDIC certificate number; 628 is JPMorgan Chase Bank, NA.
    let cert = std::env::args().nth(1).unwrap_or_else(|| "628".to_owned());

    let client = FfiecClient::from_env()?;
    match client.find_institution(&cert).await {
        Ok(data) => {
            save_json(&data, "institution.json")?;
            tracing::info!("institution data saved to institution.json");
        }
        Err(err) => tracing::error!("failed to fetch institution {cert}: {err}"),
    }

    Ok(())
}
