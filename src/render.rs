//! JSON rendering of tag collections.
//!
//! Destination frames are grouped by frame id, and each group becomes one
//! entry of the resulting map. The shape of the entry depends on the kind of
//! frame the group holds:
//!
//! | kind | JSON |
//! | --- | --- |
//! | user-defined text (`TXXX`) | `{ description: [text, ...] }` |
//! | owner data (`UFID`, `PRIV`) | `{ owner: payload }` |
//! | numeric text (`TBPM`, `TLEN`, ...) | `[int, ...]` |
//! | text | `[string, ...]` |
//! | url | `[url, ...]` |
//! | binary (`MCDI`) | `[base64, ...]` |
//! | picture (`APIC`) | `[{ data, desc, mime, type, type_friendly }, ...]` |
//! | anything else | `[{ field: value, ... }, ...]` |
//!
//! Source tag sets are rendered key by key, with an optional `pictures` array.

use crate::codec::{encode_base64, picture_json};
use crate::frames::{FieldValue, Frame, FrameId, FrameSet, StructuredFrame};
use crate::source::{Scalar, SourceTagSet};
use crate::util::fold_text_keys;
use log::{debug, warn};
use serde_json::{Map, Value};

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include embedded pictures (base64-encoded, potentially large).
    pub include_pictures: bool,
    /// Collapse single-element arrays to their only value.
    pub flatten: bool,
}

impl RenderOptions {
    pub fn new(include_pictures: bool, flatten: bool) -> Self {
        Self {
            include_pictures,
            flatten,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("{frame} holds non-numeric text {value:?}")]
    NotNumeric { frame: FrameId, value: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Anything that can be rendered into a JSON object.
pub trait Render {
    fn render_map(&self, options: RenderOptions) -> Result<Map<String, Value>>;
}

/// Render `tags` into a JSON object with sorted keys.
pub fn render<T: Render + ?Sized>(tags: &T, options: RenderOptions) -> Result<Map<String, Value>> {
    tags.render_map(options)
}

impl Render for FrameSet {
    fn render_map(&self, options: RenderOptions) -> Result<Map<String, Value>> {
        render_frames(self.iter(), options)
    }
}

impl Render for [Frame] {
    fn render_map(&self, options: RenderOptions) -> Result<Map<String, Value>> {
        render_frames(self.iter(), options)
    }
}

impl Render for SourceTagSet {
    fn render_map(&self, options: RenderOptions) -> Result<Map<String, Value>> {
        let mut out = Map::new();
        for (key, values) in self.iter() {
            let values = values.iter().map(scalar_json).collect();
            out.insert(key.to_string(), Value::Array(values));
        }

        if options.include_pictures && !self.pictures().is_empty() {
            let pictures = self.pictures().iter().map(picture_json).collect();
            out.insert("pictures".to_string(), Value::Array(pictures));
        }

        if options.flatten {
            flatten(&mut out);
        }
        Ok(out)
    }
}

/// Collapse single-element arrays of a string or integer, at the top level
/// and one level into every object-valued entry.
pub fn flatten(map: &mut Map<String, Value>) {
    fold_text_keys(map);
    for value in map.values_mut() {
        if let Value::Object(inner) = value {
            fold_text_keys(inner);
        }
    }
}

fn render_frames<'a>(
    frames: impl Iterator<Item = &'a Frame>,
    options: RenderOptions,
) -> Result<Map<String, Value>> {
    // group by frame id, in order of first appearance
    let mut groups: Vec<(FrameId, Vec<&Frame>)> = Vec::new();
    for frame in frames {
        if frame.is_picture() && !options.include_pictures {
            continue;
        }
        match groups.iter_mut().find(|(id, _)| *id == frame.id()) {
            Some((_, group)) => group.push(frame),
            None => groups.push((frame.id(), vec![frame])),
        }
    }

    let mut out = Map::new();
    for (id, group) in groups {
        out.insert(id.to_string(), render_group(id, &group)?);
    }

    if options.flatten {
        flatten(&mut out);
    }
    Ok(out)
}

/// Render frames sharing one frame id. The first frame decides the shape.
fn render_group(id: FrameId, group: &[&Frame]) -> Result<Value> {
    let Some(head) = group.first() else {
        return Ok(Value::Null);
    };

    let value = match head {
        Frame::KeyedText(_) => {
            let mut object = Map::new();
            for frame in group {
                match frame {
                    Frame::KeyedText(f) => {
                        object.insert(f.description.clone(), Value::from(f.text.clone()));
                    }
                    other => skip(id, other),
                }
            }
            Value::Object(object)
        }
        Frame::OwnerData(_) => {
            let mut object = Map::new();
            for frame in group {
                match frame {
                    Frame::OwnerData(f) => {
                        object.insert(f.owner.clone(), owner_payload(&f.data));
                    }
                    other => skip(id, other),
                }
            }
            Value::Object(object)
        }
        Frame::Text(_) => {
            let mut values = Vec::new();
            for frame in group {
                match frame {
                    Frame::Text(f) if f.numeric => {
                        for text in &f.text {
                            values.push(Value::from(parse_numeric(id, text)?));
                        }
                    }
                    Frame::Text(f) => values.extend(f.text.iter().cloned().map(Value::from)),
                    other => skip(id, other),
                }
            }
            Value::Array(values)
        }
        Frame::Url(_) => {
            let mut values = Vec::new();
            for frame in group {
                match frame {
                    Frame::Url(f) => values.extend(f.urls.iter().cloned().map(Value::from)),
                    other => skip(id, other),
                }
            }
            Value::Array(values)
        }
        Frame::Binary(_) => {
            let mut values = Vec::new();
            for frame in group {
                match frame {
                    Frame::Binary(f) => values.push(Value::from(encode_base64(&f.data))),
                    other => skip(id, other),
                }
            }
            Value::Array(values)
        }
        Frame::Picture(_) => {
            let mut values = Vec::new();
            for frame in group {
                match frame {
                    Frame::Picture(f) => values.push(picture_json(&f.picture)),
                    other => skip(id, other),
                }
            }
            Value::Array(values)
        }
        Frame::Structured(_) => {
            let mut values = Vec::new();
            for frame in group {
                match frame {
                    Frame::Structured(f) => values.push(structured_json(f)),
                    other => skip(id, other),
                }
            }
            Value::Array(values)
        }
    };
    Ok(value)
}

fn skip(id: FrameId, frame: &Frame) {
    warn!("{id}: skipping {} of a different kind", frame.identity());
}

fn structured_json(frame: &StructuredFrame) -> Value {
    let mut object = Map::new();
    for field in &frame.fields {
        let value = match &field.value {
            FieldValue::Binary(data) => Value::from(encode_base64(data)),
            FieldValue::Text(text) => Value::from(text.clone()),
            FieldValue::Integer(n) => Value::from(*n),
            FieldValue::Unsupported(kind) => {
                debug!("{}: omitting {} field {:?}", frame.id, kind, field.name);
                continue;
            }
        };
        object.insert(field.name.clone(), value);
    }
    Value::Object(object)
}

fn owner_payload(data: &[u8]) -> Value {
    match std::str::from_utf8(data) {
        Ok(text) => Value::from(text),
        Err(_) => Value::from(encode_base64(data)),
    }
}

fn parse_numeric(id: FrameId, text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| RenderError::NotNumeric {
            frame: id,
            value: text.to_string(),
        })
}

fn scalar_json(value: &Scalar) -> Value {
    match value {
        Scalar::Text(text) => Value::from(text.clone()),
        Scalar::Integer(n) => Value::from(*n),
        Scalar::Bytes(data) => Value::from(encode_base64(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::{SubField, TextFrame};
    use crate::known_frames::KnownFrame;
    use serde_json::json;

    #[test]
    fn flatten_reaches_one_level_into_objects() {
        let mut map = json!({
            "TXXX": { "a": ["one"], "b": ["one", "two"], "c": { "deep": ["x"] } },
            "TIT2": ["Title"],
            "TPE1": ["A", "B"],
        })
        .as_object()
        .cloned()
        .unwrap();
        flatten(&mut map);

        assert_eq!(
            Value::Object(map),
            json!({
                "TXXX": { "a": "one", "b": ["one", "two"], "c": { "deep": ["x"] } },
                "TIT2": "Title",
                "TPE1": ["A", "B"],
            })
        );
    }

    #[test]
    fn unsupported_sub_fields_are_omitted() {
        let frame = StructuredFrame {
            id: FrameId::new("ETCO").unwrap(),
            fields: vec![
                SubField::new("format", FieldValue::Integer(2)),
                SubField::new("events", FieldValue::Unsupported("timing list".into())),
            ],
        };
        assert_eq!(structured_json(&frame), json!({ "format": 2 }));
    }

    #[test]
    fn numeric_text_must_parse() {
        let frames = [Frame::from(TextFrame::new(
            KnownFrame::Tbpm,
            vec!["fast".to_string()],
        ))];
        assert_eq!(
            render(&frames[..], RenderOptions::default()),
            Err(RenderError::NotNumeric {
                frame: KnownFrame::Tbpm.id(),
                value: "fast".to_string(),
            })
        );
    }
}
