use clap::Parser;
use log::info;
use std::path::PathBuf;
use tagbridge::clear_id3;
use tagbridge::cli::init_env_logger;

#[derive(Parser, Debug)]
#[command(version, about = "Clear all ID3 tags from files")]
struct Args {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// ID3 containing file(s) to remove tags from
    #[arg(required = true)]
    id3_files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_env_logger(args.verbose);

    for path in &args.id3_files {
        info!("Removing ID3 tags from {}...", path.display());
        if !clear_id3(path)? {
            info!("  no tag found");
        }
    }
    Ok(())
}
