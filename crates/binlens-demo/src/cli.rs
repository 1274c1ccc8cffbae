use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "binlens")]
#[command(
    author,
    version,
    about = "Classify an image into one of seven garbage categories"
)]
pub struct Cli {
    /// Image file to classify
    pub image: PathBuf,

    /// Path to the bundled ONNX model
    #[arg(short, long, default_value = "models/garbage.onnx")]
    pub model: PathBuf,

    /// Labeler options file (YAML); takes precedence over --model
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
