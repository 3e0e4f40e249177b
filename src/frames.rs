use crate::known_frames::KnownFrame;
use crate::picture::Picture;
use std::convert::Infallible;
use std::fmt;

/// Four-character ID3v2 frame identifier (e.g. `TIT2`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FrameId(pub [u8; 4]);

impl FrameId {
    /// Parse a frame id: exactly four upper-case ASCII letters or digits.
    pub fn new(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() == 4
            && b.iter()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            Some(FrameId([b[0], b[1], b[2], b[3]]))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}
impl fmt::Debug for FrameId { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) } }
impl fmt::Display for FrameId { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) } }

impl From<KnownFrame> for FrameId {
    fn from(known: KnownFrame) -> Self {
        known.id()
    }
}

/// Text information frame (`T***`). Multiple values are kept separately.
///
/// `numeric` marks frames whose values are integers (`TBPM`, `TLEN`, ...);
/// it is derived from the frame id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    pub id: FrameId,
    pub text: Vec<String>,
    pub numeric: bool,
}

impl TextFrame {
    pub fn new(id: impl Into<FrameId>, text: Vec<String>) -> Self {
        let id = id.into();
        Self {
            id,
            text,
            numeric: KnownFrame::from(id).is_numeric_text(),
        }
    }
}

/// URL link frame (`W***`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFrame {
    pub id: FrameId,
    pub urls: Vec<String>,
}

/// Frame with an opaque binary body (e.g. `MCDI`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFrame {
    pub id: FrameId,
    pub data: Vec<u8>,
}

/// Attached picture (`APIC`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFrame {
    pub id: FrameId,
    pub picture: Picture,
}

/// User-defined text frame (`TXXX`): free-form description plus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedTextFrame {
    pub id: FrameId,
    pub description: String,
    pub text: Vec<String>,
}

/// Owner URI plus opaque payload (`UFID`, `PRIV`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerDataFrame {
    pub id: FrameId,
    pub owner: String,
    pub data: Vec<u8>,
}

/// Any other frame, described as an ordered list of named sub-fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredFrame {
    pub id: FrameId,
    pub fields: Vec<SubField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubField {
    pub name: String,
    pub value: FieldValue,
}

impl SubField {
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Declared kind and value of a structured frame's sub-field.
///
/// `Unsupported` names a field kind that has no JSON representation; it is
/// dropped when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Binary(Vec<u8>),
    Text(String),
    Integer(i64),
    Unsupported(String),
}

/// A destination (ID3v2) frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(TextFrame),
    Url(UrlFrame),
    Binary(BinaryFrame),
    Picture(PictureFrame),
    KeyedText(KeyedTextFrame),
    OwnerData(OwnerDataFrame),
    Structured(StructuredFrame),
}

impl Frame {
    pub fn id(&self) -> FrameId {
        match self {
            Frame::Text(f) => f.id,
            Frame::Url(f) => f.id,
            Frame::Binary(f) => f.id,
            Frame::Picture(f) => f.id,
            Frame::KeyedText(f) => f.id,
            Frame::OwnerData(f) => f.id,
            Frame::Structured(f) => f.id,
        }
    }

    /// Key that tells this frame apart from others sharing its frame id.
    ///
    /// `TXXX:description`, `APIC:description`, `UFID:owner`,
    /// `PRIV:owner:payload`; plain frames use the bare frame id.
    pub fn identity(&self) -> String {
        match self {
            Frame::Text(f) => f.id.to_string(),
            Frame::Url(f) => f.id.to_string(),
            Frame::Binary(f) => f.id.to_string(),
            Frame::Picture(f) => format!("{}:{}", f.id, f.picture.description),
            Frame::KeyedText(f) => format!("{}:{}", f.id, f.description),
            Frame::OwnerData(f) if KnownFrame::from(f.id) == KnownFrame::Ufid => {
                format!("{}:{}", f.id, f.owner)
            }
            Frame::OwnerData(f) => {
                let payload = match std::str::from_utf8(&f.data) {
                    Ok(text) => text.to_string(),
                    Err(_) => hex::encode(&f.data),
                };
                format!("{}:{}:{}", f.id, f.owner, payload)
            }
            Frame::Structured(f) => {
                let mut identity = f.id.to_string();
                for field in &f.fields {
                    if let FieldValue::Text(text) = &field.value {
                        identity.push(':');
                        identity.push_str(text);
                    }
                }
                identity
            }
        }
    }

    pub fn is_picture(&self) -> bool {
        matches!(self, Frame::Picture(_))
    }
}

impl From<TextFrame> for Frame { fn from(f: TextFrame) -> Self { Frame::Text(f) } }
impl From<UrlFrame> for Frame { fn from(f: UrlFrame) -> Self { Frame::Url(f) } }
impl From<BinaryFrame> for Frame { fn from(f: BinaryFrame) -> Self { Frame::Binary(f) } }
impl From<PictureFrame> for Frame { fn from(f: PictureFrame) -> Self { Frame::Picture(f) } }
impl From<KeyedTextFrame> for Frame { fn from(f: KeyedTextFrame) -> Self { Frame::KeyedText(f) } }
impl From<OwnerDataFrame> for Frame { fn from(f: OwnerDataFrame) -> Self { Frame::OwnerData(f) } }
impl From<StructuredFrame> for Frame { fn from(f: StructuredFrame) -> Self { Frame::Structured(f) } }

/// An in-memory ID3v2 tag: an ordered collection of frames.
///
/// Several frames may share a frame id; [`Frame::identity`] is what must be
/// unique. Adding a frame whose identity is already present replaces the old
/// frame in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSet {
    frames: Vec<Frame>,
}

impl FrameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame, returning the frame it replaced (if any).
    pub fn add(&mut self, frame: impl Into<Frame>) -> Option<Frame> {
        let frame = frame.into();
        let identity = frame.identity();
        match self.frames.iter().position(|f| f.identity() == identity) {
            Some(pos) => Some(std::mem::replace(&mut self.frames[pos], frame)),
            None => {
                self.frames.push(frame);
                None
            }
        }
    }

    pub fn get(&self, identity: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.identity() == identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.get(identity).is_some()
    }

    /// Remove the frame with the given identity.
    pub fn remove(&mut self, identity: &str) -> Option<Frame> {
        let pos = self.frames.iter().position(|f| f.identity() == identity)?;
        Some(self.frames.remove(pos))
    }

    /// All frames sharing `id`, in order.
    pub fn frames_with_id(&self, id: FrameId) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(move |f| f.id() == id)
    }

    pub fn identities(&self) -> Vec<String> {
        self.frames.iter().map(Frame::identity).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl FromIterator<Frame> for FrameSet {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        let mut set = FrameSet::new();
        for frame in iter {
            set.add(frame);
        }
        set
    }
}

impl Extend<Frame> for FrameSet {
    fn extend<I: IntoIterator<Item = Frame>>(&mut self, iter: I) {
        for frame in iter {
            self.add(frame);
        }
    }
}

impl IntoIterator for FrameSet {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrameSet {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl AsMut<FrameSet> for FrameSet {
    fn as_mut(&mut self) -> &mut FrameSet {
        self
    }
}

// A bare frame set has no backing storage, committing it never fails.
impl crate::filters::Persist for FrameSet {
    type Error = Infallible;

    fn persist(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
