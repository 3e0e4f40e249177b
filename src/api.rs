use crate::container::{Id3File, read_source_tags};
use crate::convert::map_tags;
use crate::filters::{Persist, strip_private};
use crate::render::{RenderOptions, render};
use log::info;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

pub use crate::container::{clear_flac, clear_id3};

/// Rendered tags of one file, as printed by `flacjson` and `id3json`.
///
/// Serializes to `{"file": "...", "tags": {...}}`.
#[derive(Debug, Serialize)]
pub struct FileTags {
    /// Path of the file, as given
    pub file: String,
    /// Tags rendered by [`render`], keys sorted
    pub tags: Map<String, Value>,
}

/// Read the Vorbis comments of a FLAC file and render them as JSON.
///
/// # Example
/// ```no_run
/// use tagbridge::{RenderOptions, flac_to_json};
///
/// let rendered = flac_to_json("song.flac", RenderOptions::new(false, true))?;
/// println!("{}", serde_json::to_string_pretty(&rendered)?);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn flac_to_json(path: impl AsRef<Path>, options: RenderOptions) -> anyhow::Result<FileTags> {
    let path = path.as_ref();
    let source = read_source_tags(path)?;
    Ok(FileTags {
        file: path.display().to_string(),
        tags: render(&source, options)?,
    })
}

/// Read the ID3v2 tag of a file and render it as JSON.
///
/// A file without a tag renders as an empty object.
pub fn id3_to_json(path: impl AsRef<Path>, options: RenderOptions) -> anyhow::Result<FileTags> {
    let path = path.as_ref();
    let file = Id3File::open(path)?;
    Ok(FileTags {
        file: path.display().to_string(),
        tags: render(file.frames(), options)?,
    })
}

/// Convert the tags of `flac` and write them into the ID3v2.4 tag of `id3`.
///
/// Existing frames of the destination are kept unless `delete_existing` is
/// set; converted frames replace existing frames with the same identity.
/// Returns the number of frames written.
pub fn copy_flac_to_id3(
    flac: impl AsRef<Path>,
    id3: impl AsRef<Path>,
    delete_existing: bool,
) -> anyhow::Result<usize> {
    let source = read_source_tags(flac.as_ref())?;
    let frames = map_tags(&source)?;
    let count = frames.len();

    let mut file = Id3File::open(id3.as_ref())?;
    let tags = file.as_mut();
    if delete_existing {
        tags.clear();
    }
    tags.extend(frames);
    file.persist()?;

    info!(
        "copied {} frames from {} to {}",
        count,
        flac.as_ref().display(),
        id3.as_ref().display()
    );
    Ok(count)
}

/// Strip private vendor frames from an ID3 tag and save it.
///
/// Returns the identities of the removed frames.
pub fn clean_id3(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let mut file = Id3File::open(path)?;
    Ok(strip_private(&mut file, true)?)
}
