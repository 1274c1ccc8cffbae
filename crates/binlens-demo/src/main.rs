mod cli;

use anyhow::Context;
use binlens_labeler::{Classify, GarbageDetector, LabelerOptions};
use clap::Parser;
use cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = match &cli.config {
        Some(path) => LabelerOptions::from_file(path)?,
        None => LabelerOptions::new(&cli.model),
    };

    let image = image::open(&cli.image)
        .with_context(|| format!("failed to decode {}", cli.image.display()))?;

    let detector = GarbageDetector::new(options)?;
    let category = detector.process_image(&image).await?;

    println!("Category: {} (index {})", category, category.index());
    println!("Garbage:  {}", if category.is_garbage() { "yes" } else { "no" });

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "binlens_labeler=debug,binlens_demo=debug"
    } else {
        "binlens_labeler=info,binlens_demo=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
