use super::Result;
use crate::filters::Persist;
use crate::frames::{
    BinaryFrame, FieldValue, Frame, FrameId, FrameSet, KeyedTextFrame, OwnerDataFrame,
    PictureFrame, StructuredFrame, SubField, TextFrame, UrlFrame,
};
use crate::known_frames::KnownFrame;
use crate::picture::{Picture, PictureType};
use id3::frame::{
    Comment, EncapsulatedObject, ExtendedLink, ExtendedText, InvolvedPeopleList, Lyrics,
    PictureType as Id3PictureType, Popularimeter, Private, SynchronisedLyricsType,
    TimestampFormat, UniqueFileIdentifier, Unknown,
};
use id3::{Content, ErrorKind, TagLike, Version};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Convert every frame of an `id3` tag, skipping frames with unusable ids.
pub fn frames_from_id3(tag: &id3::Tag) -> FrameSet {
    tag.frames().filter_map(frame_from_id3).collect()
}

/// Map one `id3` frame onto the frame model.
///
/// Returns `None` when the frame id is not a four character ID3v2.3/2.4 id.
pub fn frame_from_id3(frame: &id3::Frame) -> Option<Frame> {
    let Some(id) = FrameId::new(frame.id()) else {
        warn!("skipping frame with id {:?}", frame.id());
        return None;
    };

    let converted = match frame.content() {
        Content::Text(text) => TextFrame::new(id, split_text(text)).into(),
        Content::ExtendedText(extended) => KeyedTextFrame {
            id,
            description: extended.description.clone(),
            text: split_text(&extended.value),
        }
        .into(),
        Content::Link(link) => UrlFrame {
            id,
            urls: vec![link.clone()],
        }
        .into(),
        Content::ExtendedLink(extended) => UrlFrame {
            id,
            urls: vec![extended.link.clone()],
        }
        .into(),
        Content::Picture(picture) => PictureFrame {
            id,
            picture: Picture::new(
                picture_type(picture.picture_type),
                picture.mime_type.clone(),
                picture.description.clone(),
                picture.data.clone(),
            ),
        }
        .into(),
        Content::Private(private) => OwnerDataFrame {
            id,
            owner: private.owner_identifier.clone(),
            data: private.private_data.clone(),
        }
        .into(),
        Content::UniqueFileIdentifier(ufid) => OwnerDataFrame {
            id,
            owner: ufid.owner_identifier.clone(),
            data: ufid.identifier.clone(),
        }
        .into(),
        Content::Comment(comment) => structured(
            id,
            vec![
                text_field("lang", &comment.lang),
                text_field("desc", &comment.description),
                text_field("text", &comment.text),
            ],
        ),
        Content::Lyrics(lyrics) => structured(
            id,
            vec![
                text_field("lang", &lyrics.lang),
                text_field("desc", &lyrics.description),
                text_field("text", &lyrics.text),
            ],
        ),
        Content::Popularimeter(popm) => structured(
            id,
            vec![
                text_field("email", &popm.user),
                SubField::new("rating", FieldValue::Integer(i64::from(popm.rating))),
                SubField::new(
                    "count",
                    FieldValue::Integer(i64::try_from(popm.counter).unwrap_or(i64::MAX)),
                ),
            ],
        ),
        Content::EncapsulatedObject(object) => structured(
            id,
            vec![
                text_field("mime", &object.mime_type),
                text_field("filename", &object.filename),
                text_field("desc", &object.description),
                SubField::new("data", FieldValue::Binary(object.data.clone())),
            ],
        ),
        Content::SynchronisedLyrics(sylt) => structured(
            id,
            vec![
                text_field("lang", &sylt.lang),
                SubField::new(
                    "format",
                    FieldValue::Integer(timestamp_format_code(&sylt.timestamp_format)),
                ),
                SubField::new("type", FieldValue::Integer(lyrics_type_code(&sylt.content_type))),
                text_field("desc", &sylt.description),
                SubField::new("text", FieldValue::Unsupported("timed lyrics".to_string())),
            ],
        ),
        Content::InvolvedPeopleList(list) => structured(id, involvement_fields(list)),
        Content::Chapter(chapter) => structured(
            id,
            vec![
                text_field("element_id", &chapter.element_id),
                SubField::new("start_time", FieldValue::Integer(chapter.start_time.into())),
                SubField::new("end_time", FieldValue::Integer(chapter.end_time.into())),
                SubField::new("start_offset", FieldValue::Integer(chapter.start_offset.into())),
                SubField::new("end_offset", FieldValue::Integer(chapter.end_offset.into())),
                SubField::new("sub_frames", FieldValue::Unsupported("embedded frames".to_string())),
            ],
        ),
        Content::TableOfContents(toc) => structured(
            id,
            vec![
                text_field("element_id", &toc.element_id),
                SubField::new("top_level", FieldValue::Integer(toc.top_level.into())),
                SubField::new("ordered", FieldValue::Integer(toc.ordered.into())),
                text_field("child_element_ids", &toc.elements.join("/")),
                SubField::new("sub_frames", FieldValue::Unsupported("embedded frames".to_string())),
            ],
        ),
        Content::MpegLocationLookupTable(mllt) => structured(
            id,
            vec![
                SubField::new("frames", FieldValue::Integer(mllt.frames_between_reference.into())),
                SubField::new("bytes", FieldValue::Integer(mllt.bytes_between_reference.into())),
                SubField::new(
                    "milliseconds",
                    FieldValue::Integer(mllt.millis_between_reference.into()),
                ),
                SubField::new("bits_for_bytes", FieldValue::Integer(mllt.bits_for_bytes.into())),
                SubField::new(
                    "bits_for_milliseconds",
                    FieldValue::Integer(mllt.bits_for_millis.into()),
                ),
                SubField::new("data", FieldValue::Unsupported("reference table".to_string())),
            ],
        ),
        other => opaque_frame(id, other),
    };
    Some(converted)
}

/// Convert frames back into `id3` frames, in order.
pub fn frames_to_id3(frames: &FrameSet) -> Vec<id3::Frame> {
    frames.iter().flat_map(frame_to_id3).collect()
}

/// Map one frame onto `id3` frames.
///
/// Url frames holding several links expand into one frame per link. Structured
/// frames that cannot be rebuilt produce nothing.
pub fn frame_to_id3(frame: &Frame) -> Vec<id3::Frame> {
    let id = frame.id();
    let known = KnownFrame::from(id);
    let content = match frame {
        Frame::Text(f) => Content::Text(f.text.join("\0")),
        Frame::KeyedText(f) => Content::ExtendedText(ExtendedText {
            description: f.description.clone(),
            value: f.text.join("\0"),
        }),
        Frame::Url(f) => {
            return f
                .urls
                .iter()
                .map(|url| {
                    let content = if known == KnownFrame::Wxxx {
                        Content::ExtendedLink(ExtendedLink {
                            description: String::new(),
                            link: url.clone(),
                        })
                    } else {
                        Content::Link(url.clone())
                    };
                    id3::Frame::with_content(id.as_str(), content)
                })
                .collect();
        }
        Frame::Binary(f) => Content::Unknown(Unknown {
            data: f.data.clone(),
            version: Version::Id3v24,
        }),
        Frame::Picture(f) => Content::Picture(id3::frame::Picture {
            mime_type: f.picture.mime.clone(),
            picture_type: id3_picture_type(f.picture.picture_type),
            description: f.picture.description.clone(),
            data: f.picture.data.clone(),
        }),
        Frame::OwnerData(f) if known == KnownFrame::Ufid => {
            Content::UniqueFileIdentifier(UniqueFileIdentifier {
                owner_identifier: f.owner.clone(),
                identifier: f.data.clone(),
            })
        }
        Frame::OwnerData(f) => Content::Private(Private {
            owner_identifier: f.owner.clone(),
            private_data: f.data.clone(),
        }),
        Frame::Structured(f) => match structured_content(known, f) {
            Some(content) => content,
            None => {
                warn!("{id}: cannot rebuild frame, dropping it");
                return Vec::new();
            }
        },
    };
    vec![id3::Frame::with_content(id.as_str(), content)]
}

/// An ID3 tag loaded from disk together with its frame model.
///
/// Edits go through [`AsMut<FrameSet>`]; [`Persist::persist`] writes the
/// frames back as ID3v2.4. Frames that survived untouched are written from the
/// original `id3` frames so nothing is lost in translation.
#[derive(Debug)]
pub struct Id3File {
    path: PathBuf,
    originals: Vec<(String, id3::Frame)>,
    frames: FrameSet,
}

impl Id3File {
    /// Load the tag at `path`. A missing file or a file without a tag starts
    /// out empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let tag = if path.exists() {
            match id3::Tag::read_from_path(&path) {
                Ok(tag) => tag,
                Err(err) if matches!(err.kind, ErrorKind::NoTag) => id3::Tag::new(),
                Err(err) => return Err(err.into()),
            }
        } else {
            id3::Tag::new()
        };

        let mut originals = Vec::new();
        let mut frames = FrameSet::new();
        for frame in tag.frames() {
            if let Some(converted) = frame_from_id3(frame) {
                originals.push((converted.identity(), frame.clone()));
                frames.add(converted);
            }
        }
        Ok(Self {
            path,
            originals,
            frames,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    fn build_tag(&self) -> id3::Tag {
        let mut tag = id3::Tag::with_version(Version::Id3v24);
        for frame in &self.frames {
            let identity = frame.identity();
            let original = self
                .originals
                .iter()
                .find(|(known, original)| {
                    *known == identity && frame_from_id3(original).as_ref() == Some(frame)
                })
                .map(|(_, original)| original.clone());
            // pushed directly: add_frame would merge pictures sharing a type
            match original {
                Some(original) => tag.frames_vec_mut().push(original),
                None => tag.frames_vec_mut().extend(frame_to_id3(frame)),
            }
        }
        tag
    }
}

impl AsMut<FrameSet> for Id3File {
    fn as_mut(&mut self) -> &mut FrameSet {
        &mut self.frames
    }
}

impl Persist for Id3File {
    type Error = super::ContainerError;

    fn persist(&mut self) -> Result<()> {
        if !self.path.exists() {
            std::fs::File::create(&self.path)?;
        }
        let tag = self.build_tag();
        tag.write_to_path(&self.path, Version::Id3v24)?;
        info!("saved {} frames to {}", self.frames.len(), self.path.display());
        Ok(())
    }
}

/// Remove the ID3 tag from the file entirely.
pub fn clear_id3(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let removed = id3::Tag::remove_from_path(path)?;
    if removed {
        info!("cleared {}", path.display());
    }
    Ok(removed)
}

fn split_text(text: &str) -> Vec<String> {
    text.split('\0').map(String::from).collect()
}

/// Frames without a dedicated decoding keep their raw body.
fn opaque_frame(id: FrameId, content: &Content) -> Frame {
    let data = match content.to_unknown() {
        Ok(unknown) => unknown.into_owned().data,
        Err(err) => {
            warn!("{id}: cannot encode frame body: {err}");
            let kind = KnownFrame::from(id).full_name().to_string();
            return structured(id, vec![SubField::new("data", FieldValue::Unsupported(kind))]);
        }
    };
    if KnownFrame::from(id).is_binary() {
        BinaryFrame { id, data }.into()
    } else {
        structured(id, vec![SubField::new("data", FieldValue::Binary(data))])
    }
}

/// One text field per involvement. Repeated involvements join their people
/// with `/`.
fn involvement_fields(list: &InvolvedPeopleList) -> Vec<SubField> {
    let mut fields: Vec<SubField> = Vec::new();
    for item in &list.items {
        let existing = fields.iter_mut().find(|f| f.name == item.involvement);
        match existing.map(|f| &mut f.value) {
            Some(FieldValue::Text(people)) => {
                people.push('/');
                people.push_str(&item.involvee);
            }
            _ => fields.push(text_field(&item.involvement, &item.involvee)),
        }
    }
    fields
}

fn timestamp_format_code(format: &TimestampFormat) -> i64 {
    match format {
        TimestampFormat::Mpeg => 1,
        TimestampFormat::Ms => 2,
    }
}

fn lyrics_type_code(content_type: &SynchronisedLyricsType) -> i64 {
    match content_type {
        SynchronisedLyricsType::Other => 0,
        SynchronisedLyricsType::Lyrics => 1,
        SynchronisedLyricsType::Transcription => 2,
        SynchronisedLyricsType::PartName => 3,
        SynchronisedLyricsType::Event => 4,
        SynchronisedLyricsType::Chord => 5,
        SynchronisedLyricsType::Trivia => 6,
    }
}

fn structured(id: FrameId, fields: Vec<SubField>) -> Frame {
    StructuredFrame { id, fields }.into()
}

fn text_field(name: &str, value: &str) -> SubField {
    SubField::new(name, FieldValue::Text(value.to_string()))
}

fn structured_content(known: KnownFrame, frame: &StructuredFrame) -> Option<Content> {
    let text = |name: &str| {
        frame.fields.iter().find_map(|f| match &f.value {
            FieldValue::Text(text) if f.name == name => Some(text.clone()),
            _ => None,
        })
    };
    let integer = |name: &str| {
        frame.fields.iter().find_map(|f| match f.value {
            FieldValue::Integer(n) if f.name == name => Some(n),
            _ => None,
        })
    };
    let binary = |name: &str| {
        frame.fields.iter().find_map(|f| match &f.value {
            FieldValue::Binary(data) if f.name == name => Some(data.clone()),
            _ => None,
        })
    };

    let content = match known {
        KnownFrame::Comm => Content::Comment(Comment {
            lang: text("lang")?,
            description: text("desc")?,
            text: text("text")?,
        }),
        KnownFrame::Uslt => Content::Lyrics(Lyrics {
            lang: text("lang")?,
            description: text("desc")?,
            text: text("text")?,
        }),
        KnownFrame::Popm => Content::Popularimeter(Popularimeter {
            user: text("email")?,
            rating: u8::try_from(integer("rating")?).ok()?,
            counter: u64::try_from(integer("count")?).ok()?,
        }),
        KnownFrame::Geob => Content::EncapsulatedObject(EncapsulatedObject {
            mime_type: text("mime")?,
            filename: text("filename")?,
            description: text("desc")?,
            data: binary("data")?,
        }),
        _ => Content::Unknown(Unknown {
            data: binary("data")?,
            version: Version::Id3v24,
        }),
    };
    Some(content)
}

fn picture_type(id3: Id3PictureType) -> PictureType {
    match id3 {
        Id3PictureType::Other => PictureType::Other,
        Id3PictureType::Icon => PictureType::FileIcon,
        Id3PictureType::OtherIcon => PictureType::OtherFileIcon,
        Id3PictureType::CoverFront => PictureType::CoverFront,
        Id3PictureType::CoverBack => PictureType::CoverBack,
        Id3PictureType::Leaflet => PictureType::LeafletPage,
        Id3PictureType::Media => PictureType::Media,
        Id3PictureType::LeadArtist => PictureType::LeadArtist,
        Id3PictureType::Artist => PictureType::Artist,
        Id3PictureType::Conductor => PictureType::Conductor,
        Id3PictureType::Band => PictureType::Band,
        Id3PictureType::Composer => PictureType::Composer,
        Id3PictureType::Lyricist => PictureType::Lyricist,
        Id3PictureType::RecordingLocation => PictureType::RecordingLocation,
        Id3PictureType::DuringRecording => PictureType::DuringRecording,
        Id3PictureType::DuringPerformance => PictureType::DuringPerformance,
        Id3PictureType::ScreenCapture => PictureType::ScreenCapture,
        Id3PictureType::BrightFish => PictureType::Fish,
        Id3PictureType::Illustration => PictureType::Illustration,
        Id3PictureType::BandLogo => PictureType::BandLogotype,
        Id3PictureType::PublisherLogo => PictureType::PublisherLogotype,
        Id3PictureType::Undefined(code) => PictureType::Undefined(code),
    }
}

fn id3_picture_type(picture_type: PictureType) -> Id3PictureType {
    match picture_type {
        PictureType::Other => Id3PictureType::Other,
        PictureType::FileIcon => Id3PictureType::Icon,
        PictureType::OtherFileIcon => Id3PictureType::OtherIcon,
        PictureType::CoverFront => Id3PictureType::CoverFront,
        PictureType::CoverBack => Id3PictureType::CoverBack,
        PictureType::LeafletPage => Id3PictureType::Leaflet,
        PictureType::Media => Id3PictureType::Media,
        PictureType::LeadArtist => Id3PictureType::LeadArtist,
        PictureType::Artist => Id3PictureType::Artist,
        PictureType::Conductor => Id3PictureType::Conductor,
        PictureType::Band => Id3PictureType::Band,
        PictureType::Composer => Id3PictureType::Composer,
        PictureType::Lyricist => Id3PictureType::Lyricist,
        PictureType::RecordingLocation => Id3PictureType::RecordingLocation,
        PictureType::DuringRecording => Id3PictureType::DuringRecording,
        PictureType::DuringPerformance => Id3PictureType::DuringPerformance,
        PictureType::ScreenCapture => Id3PictureType::ScreenCapture,
        PictureType::Fish => Id3PictureType::BrightFish,
        PictureType::Illustration => Id3PictureType::Illustration,
        PictureType::BandLogotype => Id3PictureType::BandLogo,
        PictureType::PublisherLogotype => Id3PictureType::PublisherLogo,
        PictureType::Undefined(code) => Id3PictureType::Undefined(code),
    }
}
