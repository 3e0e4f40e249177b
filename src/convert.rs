//! Vorbis comment → ID3v2 frame mapping.
//!
//! [`TagMapper::map`] walks a fixed list of rules over a private copy of the
//! source tags. Every rule that fires claims the keys it used, and whatever is
//! left at the end becomes a `TXXX` frame keyed by the original comment name.

use crate::codec::{Toc, TocError};
use crate::frames::{BinaryFrame, Frame, KeyedTextFrame, OwnerDataFrame, PictureFrame, TextFrame};
use crate::known_frames::KnownFrame;
use crate::picture::Picture;
use crate::source::{Scalar, SourceTagSet};
use crate::util::{claim_first_of, first, first_text};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Owner URI of the `UFID` frame produced from a `mbid` comment.
pub const MUSICBRAINZ_OWNER: &str = "http://musicbrainz.org";

/// Composite "number/total" form of a track number.
pub const PART_OF_SET_PATTERN: &str = r"^(?P<number>[0-9]+)/(?P<total>[0-9]+)$";

static DEFAULT_MAPPER: LazyLock<TagMapper> = LazyLock::new(TagMapper::new);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("{field} is not a non-negative integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },
    #[error("malformed cdtoc: {0}")]
    Toc(#[from] TocError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Maps a [`SourceTagSet`] onto ID3v2 frames.
#[derive(Debug, Clone)]
pub struct TagMapper {
    part_of_set: Regex,
}

impl Default for TagMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TagMapper {
    pub fn new() -> Self {
        let part_of_set = Regex::new(PART_OF_SET_PATTERN).expect("part-of-set pattern is valid");
        Self::with_part_of_set_pattern(part_of_set)
    }

    /// Use another composite track number pattern.
    ///
    /// The pattern must define the named groups `number` and `total`; a match
    /// missing either group is ignored.
    pub fn with_part_of_set_pattern(part_of_set: Regex) -> Self {
        Self { part_of_set }
    }

    /// Convert `source` into frames, in rule order.
    ///
    /// The caller's tag set is never modified. Any malformed number or table
    /// of contents aborts the whole conversion.
    pub fn map(&self, source: &SourceTagSet) -> Result<Vec<Frame>> {
        let mut tags = source.clone();
        let mut frames = Vec::new();

        if tags.remove("crc").is_some() {
            debug!("dropping crc");
        }

        if let Some(values) = claim_first_of(&mut tags, &["albumartist", "album artist"]) {
            emit(&mut frames, "albumartist", text_frame(KnownFrame::Tpe2, &values));
        }
        if let Some(values) = claim_first_of(&mut tags, &["artist", "author"]) {
            emit(&mut frames, "artist", text_frame(KnownFrame::Tpe1, &values));
        }
        if let Some(values) = tags.remove("composer") {
            emit(&mut frames, "composer", text_frame(KnownFrame::Tcom, &values));
        }

        if let Some(values) = tags.remove("album") {
            emit(&mut frames, "album", text_frame(KnownFrame::Talb, &values));
        }
        if let Some(genre) = tags.remove("genre") {
            let style = tags.remove("style").unwrap_or_default();
            emit(&mut frames, "genre", convert_genre(&genre, &style));
        }
        if let Some(disc) = tags.remove("discnumber") {
            let total = claim_first_of(&mut tags, &["totaldiscs", "disctotal"])
                .and_then(|values| first_text(&values));
            let disc = first_text(&disc).unwrap_or_default();
            emit(
                &mut frames,
                "discnumber",
                convert_disc_number(&disc, total.as_deref())?,
            );
        }
        if let Some(values) = claim_first_of(&mut tags, &["date", "year"]) {
            emit(&mut frames, "date", text_frame(KnownFrame::Tdrc, &values));
        }
        if let Some(values) = tags.remove("organization") {
            emit(&mut frames, "organization", text_frame(KnownFrame::Tpub, &values));
        }
        if let Some(values) = tags.remove("cdtoc") {
            emit(&mut frames, "cdtoc", convert_toc(&values)?);
        }
        if let Some(values) = tags.remove("mbid") {
            emit(&mut frames, "mbid", convert_mbid(&values));
        }

        if let Some(values) = tags.remove("title") {
            emit(&mut frames, "title", text_frame(KnownFrame::Tit2, &values));
        }
        if let Some(track) = tags.remove("tracknumber") {
            let mut number = first_text(&track).unwrap_or_default();
            let mut total = claim_first_of(&mut tags, &["totaltracks", "tracktotal"])
                .and_then(|values| first_text(&values));
            // the composite form wins over an explicit total
            if let Some((n, t)) = self.split_part_of_set(&number) {
                number = n;
                total = Some(t);
            }
            emit(
                &mut frames,
                "tracknumber",
                convert_track_number(&number, total.as_deref())?,
            );
        }
        if let Some(values) = tags.remove("length") {
            emit(&mut frames, "length", convert_length(&values));
        }

        if let Some(values) = tags.remove("encoder") {
            emit(&mut frames, "encoder", keyed_text("original encoder", &values));
        }
        if let Some(values) = tags.remove("encoded by") {
            emit(&mut frames, "encoded by", keyed_text("originally encoded by", &values));
        }
        if let Some(values) = tags.remove("encoder settings") {
            emit(
                &mut frames,
                "encoder settings",
                keyed_text("original encoder settings", &values),
            );
        }

        for (key, values) in tags.into_entries() {
            let frame = keyed_text(&key, &values);
            emit(&mut frames, &key, frame);
        }

        for picture in source.pictures() {
            emit(&mut frames, "picture", convert_picture(picture));
        }

        let tpos = KnownFrame::Tpos.id();
        if !frames.iter().any(|f| f.id() == tpos) {
            emit(&mut frames, "(default)", convert_disc_number("1", Some("1"))?);
        }

        Ok(frames)
    }

    fn split_part_of_set(&self, value: &str) -> Option<(String, String)> {
        let caps = self.part_of_set.captures(value)?;
        let number = caps.name("number")?.as_str().to_string();
        let total = caps.name("total")?.as_str().to_string();
        Some((number, total))
    }
}

/// Convert with the process-wide default [`TagMapper`].
pub fn map_tags(source: &SourceTagSet) -> Result<Vec<Frame>> {
    DEFAULT_MAPPER.map(source)
}

fn emit(frames: &mut Vec<Frame>, key: &str, frame: Frame) {
    debug!("{key} -> {}", frame.identity());
    frames.push(frame);
}

fn text_frame(known: KnownFrame, values: &[Scalar]) -> Frame {
    TextFrame::new(known, values.iter().map(Scalar::to_text).collect()).into()
}

/// `TCON` holding every genre followed by every style.
pub fn convert_genre(genre: &[Scalar], style: &[Scalar]) -> Frame {
    let genres: Vec<Scalar> = genre.iter().chain(style).cloned().collect();
    text_frame(KnownFrame::Tcon, &genres)
}

/// `TPOS` as `"{disc}"` or `"{disc}/{total}"`. An empty total counts as absent.
pub fn convert_disc_number(disc: &str, total: Option<&str>) -> Result<Frame> {
    let mut value = parse_number("discnumber", disc)?.to_string();
    if let Some(total) = total.filter(|t| !t.is_empty()) {
        value = format!("{value}/{}", parse_number("totaldiscs", total)?);
    }
    Ok(TextFrame::new(KnownFrame::Tpos, vec![value]).into())
}

/// `TRCK` with both numbers padded to two digits.
pub fn convert_track_number(number: &str, total: Option<&str>) -> Result<Frame> {
    let mut value = format!("{:02}", parse_number("tracknumber", number)?);
    if let Some(total) = total.filter(|t| !t.is_empty()) {
        value = format!("{value}/{:02}", parse_number("totaltracks", total)?);
    }
    Ok(TextFrame::new(KnownFrame::Trck, vec![value]).into())
}

/// `TLEN` from the first length value, in milliseconds.
pub fn convert_length(length: &[Scalar]) -> Frame {
    let value = first_text(length).unwrap_or_default();
    TextFrame::new(KnownFrame::Tlen, vec![value]).into()
}

/// MusicBrainz id as a `UFID` frame. Text ids are stored as UTF-8 bytes.
pub fn convert_mbid(mbid: &[Scalar]) -> Frame {
    let data = first(mbid)
        .map(|value| value.as_bytes().into_owned())
        .unwrap_or_default();
    OwnerDataFrame {
        id: KnownFrame::Ufid.id(),
        owner: MUSICBRAINZ_OWNER.to_string(),
        data,
    }
    .into()
}

/// `CDTOC` comment packed into an `MCDI` frame.
pub fn convert_toc(cdtoc: &[Scalar]) -> Result<Frame> {
    let text = first_text(cdtoc).unwrap_or_default();
    let data = Toc::parse(&text)?.to_mcdi();
    Ok(BinaryFrame {
        id: KnownFrame::Mcdi.id(),
        data,
    }
    .into())
}

/// `TXXX` frame with a free-form description.
pub fn keyed_text(description: &str, values: &[Scalar]) -> Frame {
    KeyedTextFrame {
        id: KnownFrame::Txxx.id(),
        description: description.to_string(),
        text: values.iter().map(Scalar::to_text).collect(),
    }
    .into()
}

pub fn convert_picture(picture: &Picture) -> Frame {
    PictureFrame {
        id: KnownFrame::Apic.id(),
        picture: picture.clone(),
    }
    .into()
}

fn parse_number(field: &'static str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConvertError::NotAnInteger {
            field,
            value: value.to_string(),
        })
}
