use super::Result;
use crate::picture::{Picture, PictureType};
use crate::source::SourceTagSet;
use log::info;
use metaflac::BlockType;
use metaflac::block::PictureType as FlacPictureType;
use std::path::Path;

/// Read the Vorbis comments and picture blocks of a FLAC file.
pub fn read_source_tags(path: impl AsRef<Path>) -> Result<SourceTagSet> {
    let tag = metaflac::Tag::read_from_path(path)?;
    Ok(source_tags_from_flac(&tag))
}

/// Copy the comments and pictures out of a parsed FLAC tag.
///
/// Comment keys are visited in sorted order so repeated reads agree.
pub fn source_tags_from_flac(tag: &metaflac::Tag) -> SourceTagSet {
    let mut tags = SourceTagSet::new();
    if let Some(vorbis) = tag.vorbis_comments() {
        let mut comments: Vec<_> = vorbis.comments.iter().collect();
        comments.sort_by(|a, b| a.0.cmp(b.0));
        for (key, values) in comments {
            tags.insert(key, values.iter().map(String::as_str));
        }
    }
    for picture in tag.pictures() {
        tags.push_picture(Picture::new(
            picture_type(picture.picture_type),
            picture.mime_type.clone(),
            picture.description.clone(),
            picture.data.clone(),
        ));
    }
    tags
}

/// Remove every Vorbis comment and picture block and save the file.
pub fn clear_flac(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut tag = metaflac::Tag::read_from_path(path)?;
    tag.remove_blocks(BlockType::VorbisComment);
    tag.remove_blocks(BlockType::Picture);
    tag.write_to_path(path)?;
    info!("cleared {}", path.display());
    Ok(())
}

fn picture_type(flac: FlacPictureType) -> PictureType {
    match flac {
        FlacPictureType::Other => PictureType::Other,
        FlacPictureType::Icon => PictureType::FileIcon,
        FlacPictureType::OtherIcon => PictureType::OtherFileIcon,
        FlacPictureType::CoverFront => PictureType::CoverFront,
        FlacPictureType::CoverBack => PictureType::CoverBack,
        FlacPictureType::Leaflet => PictureType::LeafletPage,
        FlacPictureType::Media => PictureType::Media,
        FlacPictureType::LeadArtist => PictureType::LeadArtist,
        FlacPictureType::Artist => PictureType::Artist,
        FlacPictureType::Conductor => PictureType::Conductor,
        FlacPictureType::Band => PictureType::Band,
        FlacPictureType::Composer => PictureType::Composer,
        FlacPictureType::Lyricist => PictureType::Lyricist,
        FlacPictureType::RecordingLocation => PictureType::RecordingLocation,
        FlacPictureType::DuringRecording => PictureType::DuringRecording,
        FlacPictureType::DuringPerformance => PictureType::DuringPerformance,
        FlacPictureType::ScreenCapture => PictureType::ScreenCapture,
        FlacPictureType::BrightFish => PictureType::Fish,
        FlacPictureType::Illustration => PictureType::Illustration,
        FlacPictureType::BandLogo => PictureType::BandLogotype,
        FlacPictureType::PublisherLogo => PictureType::PublisherLogotype,
    }
}
