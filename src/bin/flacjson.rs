use clap::Parser;
use std::path::PathBuf;
use tagbridge::cli::{init_env_logger, print_json};
use tagbridge::{RenderOptions, flac_to_json};

#[derive(Parser, Debug)]
#[command(version, about = "Renders a FLAC file's Vorbis comments in JSON format")]
struct Args {
    /// Don't flatten single-entry arrays
    #[arg(short, long)]
    no_flatten: bool,

    /// Include base64-encoded pictures in output
    #[arg(short, long)]
    pictures: bool,

    /// Log warnings and progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// File(s) to extract information from
    #[arg(required = true)]
    flac_files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_env_logger(args.verbose);

    let options = RenderOptions::new(args.pictures, !args.no_flatten);
    let rendered = args
        .flac_files
        .iter()
        .map(|path| flac_to_json(path, options))
        .collect::<anyhow::Result<Vec<_>>>()?;

    print_json(&rendered)
}
