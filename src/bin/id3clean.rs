use clap::Parser;
use log::info;
use std::path::PathBuf;
use tagbridge::clean_id3;
use tagbridge::cli::init_env_logger;

#[derive(Parser, Debug)]
#[command(version, about = "Removes private identifying tags from MP3 files")]
struct Args {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// MP3 file(s) to strip tracker tags from
    #[arg(required = true)]
    id3_files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_env_logger(args.verbose);

    for path in &args.id3_files {
        info!("Stripping private identifying tags from {}...", path.display());
        for identity in clean_id3(path)? {
            info!("  Removing Tag {identity}...");
        }
    }
    Ok(())
}
