//! Adapters between on-disk containers and the in-memory tag model.
//!
//! FLAC files are read through `metaflac`, MP3 (ID3v2) tags through `id3`.

mod flac_file;
mod id3_file;

pub use flac_file::{clear_flac, read_source_tags, source_tags_from_flac};
pub use id3_file::{
    Id3File, clear_id3, frame_from_id3, frame_to_id3, frames_from_id3, frames_to_id3,
};

#[derive(thiserror::Error, Debug)]
pub enum ContainerError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("flac: {0}")]
    Flac(#[from] metaflac::Error),
    #[error("id3: {0}")]
    Id3(#[from] id3::Error),
}

pub type Result<T> = std::result::Result<T, ContainerError>;
