use crate::picture::Picture;
use std::borrow::Cow;
use std::fmt;

/// A single Vorbis comment value.
///
/// Comments read from a FLAC file are always text, but callers building a tag
/// set by hand may supply numbers or raw bytes (e.g. a CDTOC byte string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Bytes(Vec<u8>),
}

impl Scalar {
    /// Text form of the value; bytes are decoded lossily as UTF-8.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        }
    }

    /// Raw byte form of the value; text is encoded as UTF-8.
    pub fn as_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Scalar::Text(s) => Cow::Borrowed(s.as_bytes()),
            Scalar::Integer(n) => Cow::Owned(n.to_string().into_bytes()),
            Scalar::Bytes(b) => Cow::Borrowed(b),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(b: Vec<u8>) -> Self {
        Scalar::Bytes(b)
    }
}

impl From<&[u8]> for Scalar {
    fn from(b: &[u8]) -> Self {
        Scalar::Bytes(b.to_vec())
    }
}

/// Vorbis comments plus embedded pictures of a FLAC file.
///
/// Keys are case-insensitive: they are lower-cased on insert and on lookup.
/// Entries keep their insertion order, and every stored value is a non-empty
/// sequence, so single-valued and multi-valued comments look the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTagSet {
    entries: Vec<(String, Vec<Scalar>)>,
    pictures: Vec<Picture>,
}

impl SourceTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append values to `key`. An existing entry keeps its position.
    ///
    /// Inserting an empty sequence is a no-op.
    pub fn insert<V, I>(&mut self, key: &str, values: I)
    where
        V: Into<Scalar>,
        I: IntoIterator<Item = V>,
    {
        let mut values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return;
        }
        let key = key.to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.append(&mut values),
            None => self.entries.push((key, values)),
        }
    }

    /// Builder form of [`SourceTagSet::insert`].
    pub fn with<V, I>(mut self, key: &str, values: I) -> Self
    where
        V: Into<Scalar>,
        I: IntoIterator<Item = V>,
    {
        self.insert(key, values);
        self
    }

    /// Builder form of [`SourceTagSet::push_picture`].
    pub fn with_picture(mut self, picture: Picture) -> Self {
        self.push_picture(picture);
        self
    }

    pub fn get(&self, key: &str) -> Option<&[Scalar]> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` and return its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<Scalar>> {
        let key = key.to_lowercase();
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Scalar])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn push_picture(&mut self, picture: Picture) {
        self.pictures.push(picture);
    }

    /// Consume the set, yielding its comment entries in order.
    pub fn into_entries(self) -> Vec<(String, Vec<Scalar>)> {
        self.entries
    }
}
