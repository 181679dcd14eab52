//! Checks every configured provider credential with a one-word prompt.

use summarizer::ai::probe::probe_chain;
use summarizer::ai::registry::build_chain;
use summarizer::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    summarizer::setup_logging();

    let config = AppConfig::from_env()?;
    let chain = build_chain(&config);

    println!("Checking provider credentials ({})...", chain.provider_names().join(" -> "));
    let reports = probe_chain(&chain).await;

    if reports.is_empty() {
        println!("No credentials configured.");
    }
    for report in &reports {
        println!("{report}");
    }

    if reports.iter().any(|r| r.is_ok()) {
        println!("At least one provider credential works.");
        Ok(())
    } else {
        anyhow::bail!("no working provider credential; check your API keys or billing balance")
    }
}
