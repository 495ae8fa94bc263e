use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use text_grabber::{GrabberConfig, TextGrabber, logging};

/// Downloads a web page and stores its title and article text in a text file
/// whose path mirrors the URL
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL to grab html from
    url: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Directory the output path is created under
    #[arg(short, long, env = "TEXT_GRABBER_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {

    let args = Args::parse();

    logging::init_logging(args.verbose)?;

    let config = GrabberConfig {
        output_root: args.output_dir,
        verbose: args.verbose,
        ..GrabberConfig::default()
    };

    let mut grabber = TextGrabber::new(&args.url, config);

    grabber.build().with_context(|| format!("can't grab {}", args.url))?;

    Ok(())
}
