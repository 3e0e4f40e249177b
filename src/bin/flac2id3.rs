use clap::Parser;
use std::path::PathBuf;
use tagbridge::cli::init_env_logger;
use tagbridge::copy_flac_to_id3;

#[derive(Parser, Debug)]
#[command(version, about = "Copies FLAC Vorbis tags to an ID3 compliant file")]
struct Args {
    /// Delete all tags in the destination file before copying tags over
    #[arg(short, long)]
    delete: bool,

    /// Log each converted frame
    #[arg(short, long)]
    verbose: bool,

    /// FLAC file to copy tags from
    flac_file: PathBuf,

    /// ID3 compliant file to copy tags to
    id3_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_env_logger(args.verbose);

    copy_flac_to_id3(&args.flac_file, &args.id3_file, args.delete)?;
    Ok(())
}
