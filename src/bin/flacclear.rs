use clap::Parser;
use log::info;
use std::path::PathBuf;
use tagbridge::clear_flac;
use tagbridge::cli::init_env_logger;

#[derive(Parser, Debug)]
#[command(version, about = "Clear all tags and pictures from FLAC files")]
struct Args {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// FLAC file(s) to remove tags from
    #[arg(required = true)]
    flac_files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_env_logger(args.verbose);

    for path in &args.flac_files {
        info!("Removing FLAC tags and pictures from {}...", path.display());
        clear_flac(path)?;
    }
    Ok(())
}
