//! Render Bench CLI
//! Times every enabled template engine on the same synthetic dataset

use render_bench::{Config, Harness};
use std::env;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize logging
    let level: Level = config.logging.level.parse().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false);
    if config.logging.json_output {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║          RENDER BENCH v0.1.0 - TEMPLATE ENGINES               ║");
    println!("║          tera | liquid | handlebars | minijinja               ║");
    println!("╚═══════════════════════════════════════════════════════════════╝\n");

    info!("✅ Configuration loaded");
    info!("   Records: {}", config.dataset.size);
    info!("   Engines: {}", config.engines.enabled.join(", "));

    // Check CLI args
    let args: Vec<String> = env::args().collect();
    let json_report = args.len() > 1 && args[1] == "json";

    let harness = Harness::new(config)?;

    if harness.config().bench.iterations > 1 {
        info!("Running sampled measurements...");
        for stats in harness.run_sampled()? {
            println!("{stats}");
        }
        return Ok(());
    }

    let report = harness.run()?;

    if json_report {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}
