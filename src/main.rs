use chrono::Utc;
use clap::Parser;
use whatsdue::core::dates;
use whatsdue::utils::{logger, validation::Validate};
use whatsdue::{Aggregator, CliConfig, HttpFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }
    config.validate()?;

    let codes = config.courses.clone();
    let as_json = config.json;
    let aggregator = Aggregator::new(HttpFetcher::new(), config);

    match aggregator.aggregate(&codes).await {
        Ok(records) => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let now = Utc::now().with_timezone(&dates::brisbane_offset());
                for record in &records {
                    let past = if record.is_past(now) { " [past due]" } else { "" };
                    println!(
                        "{}: {} ({}) {}{}",
                        record.subject, record.task, record.due_date_raw, record.weighting, past
                    );
                }
            }
        }
        Err(e) => {
            tracing::error!("aggregation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
