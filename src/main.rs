use anyhow::Result;
use chrono::Utc;
use tracing::info;

mod preview;

use preview::PreviewConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    info!("Rendering embed preview from environment");

    let config = PreviewConfig::from_env();
    let embed = config.to_embed(Utc::now().into());

    println!("{}", serde_json::to_string_pretty(&embed)?);

    Ok(())
}
