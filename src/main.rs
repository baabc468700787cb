use anyhow::Result;
use clap::Parser;
use revenue_estimator::{
    config::AppConfig,
    estimator::{EstimateResult, compute_estimate},
    loader,
    utils::{self, display_label, format_money},
};

#[derive(Parser)]
#[command(name = "revenue-estimator")]
#[command(about = "Estimate monthly ad revenue from niche CPM/RPM rate ranges")]
struct Cli {
    /// Content niche to estimate for (defaults to the first table entry)
    niche: Option<String>,

    /// Monthly view count
    #[arg(default_value_t = 10_000.0, allow_negative_numbers = true)]
    views: f64,

    /// Rate table source: an http(s) URL or a local JSON file
    #[arg(long)]
    source: Option<String>,

    /// List available niches and exit
    #[arg(long)]
    list: bool,

    /// Emit the estimate as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let args = Cli::parse();
    let mut config = AppConfig::load();
    if let Some(source) = args.source {
        config.data_source = source;
    }

    tracing::info!(source = %config.data_source, "[INIT] revenue-estimator starting");

    let table = loader::load_table(&config).await;

    if args.list {
        for key in table.keys() {
            println!("{:<16} {}", key, display_label(key));
        }
        return Ok(());
    }

    // An empty or missing niche falls back to the first table entry.
    let niche = args
        .niche
        .filter(|n| !n.is_empty())
        .or_else(|| table.first_key().map(str::to_string))
        .unwrap_or_else(|| "general".to_string());

    let result = compute_estimate(&niche, &table, args.views);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&niche, &result);
    }
    Ok(())
}

fn print_summary(niche: &str, result: &EstimateResult) {
    println!(
        "Estimated monthly revenue (RPM mid): {}",
        format_money(result.rpm_estimate.mid)
    );
    println!(
        "Range: {} - {} (RPM)",
        format_money(result.rpm_estimate.low),
        format_money(result.rpm_estimate.high)
    );
    println!(
        "Advertiser CPM range: {} - {} (CPM)",
        format_money(result.cpm_estimate.low),
        format_money(result.cpm_estimate.high)
    );
    println!();
    println!("Selected niche: {}", display_label(niche));
    println!(
        "RPM (per 1,000 views): {} - {} - {}",
        format_money(result.rpm.low),
        format_money(result.rpm.mid),
        format_money(result.rpm.high)
    );
    println!(
        "CPM (advertiser): {} - {} - {}",
        format_money(result.cpm.low),
        format_money(result.cpm.mid),
        format_money(result.cpm.high)
    );
}
