use serde_json::{Value, json};
use tagbridge::codec::pack_toc;
use tagbridge::frames::{
    BinaryFrame, FieldValue, Frame, FrameId, FrameSet, KeyedTextFrame, OwnerDataFrame,
    PictureFrame, StructuredFrame, SubField, TextFrame, UrlFrame,
};
use tagbridge::{KnownFrame, Picture, PictureType, RenderOptions, SourceTagSet, render};

fn id(s: &str) -> FrameId {
    FrameId::new(s).unwrap()
}

fn txxx(description: &str, text: &[&str]) -> Frame {
    KeyedTextFrame {
        id: KnownFrame::Txxx.id(),
        description: description.to_string(),
        text: text.iter().map(|t| t.to_string()).collect(),
    }
    .into()
}

fn text(frame: KnownFrame, text: &[&str]) -> Frame {
    TextFrame::new(frame, text.iter().map(|t| t.to_string()).collect()).into()
}

fn owner(frame: KnownFrame, owner: &str, data: &[u8]) -> Frame {
    OwnerDataFrame {
        id: frame.id(),
        owner: owner.to_string(),
        data: data.to_vec(),
    }
    .into()
}

fn cover() -> Frame {
    PictureFrame {
        id: KnownFrame::Apic.id(),
        picture: Picture::new(PictureType::CoverFront, "image/jpeg", "Cover", vec![1, 2, 3]),
    }
    .into()
}

fn sample_id3() -> FrameSet {
    let mut tags = FrameSet::new();
    tags.add(text(KnownFrame::Tit2, &["Title"]));
    tags.add(text(KnownFrame::Tpe1, &["Artist 1", "Artist 2"]));
    tags.add(text(KnownFrame::Tbpm, &["120"]));
    tags.add(text(KnownFrame::Tyer, &["2017"]));
    tags.add(txxx("source", &["CD"]));
    tags.add(txxx("profile", &["Default", "Other"]));
    tags.add(owner(KnownFrame::Ufid, "http://musicbrainz.org", b"a56e6f46"));
    tags.add(owner(KnownFrame::Priv, "Google/StoreId", b"rT9HEn6sL6tN7yhk6oDQfpi1ip6"));
    tags.add(owner(KnownFrame::Priv, "Naftuli/Word", b"hello"));
    tags.add(UrlFrame {
        id: KnownFrame::Wcom.id(),
        urls: vec!["https://a.example".into(), "https://b.example".into()],
    });
    tags.add(BinaryFrame {
        id: KnownFrame::Mcdi.id(),
        data: pack_toc("1C+96").unwrap(),
    });
    tags.add(cover());
    tags
}

#[test]
fn renders_each_frame_kind() {
    let rendered = render(&sample_id3(), RenderOptions::default()).unwrap();

    assert_eq!(rendered["TIT2"], json!(["Title"]));
    assert_eq!(rendered["TPE1"], json!(["Artist 1", "Artist 2"]));
    assert_eq!(rendered["TBPM"], json!([120]));
    assert_eq!(rendered["TYER"], json!([2017]));
    assert_eq!(
        rendered["TXXX"],
        json!({ "source": ["CD"], "profile": ["Default", "Other"] })
    );
    assert_eq!(rendered["UFID"], json!({ "http://musicbrainz.org": "a56e6f46" }));
    assert_eq!(
        rendered["PRIV"],
        json!({
            "Google/StoreId": "rT9HEn6sL6tN7yhk6oDQfpi1ip6",
            "Naftuli/Word": "hello",
        })
    );
    assert_eq!(rendered["WCOM"], json!(["https://a.example", "https://b.example"]));
    assert_eq!(rendered["MCDI"], json!(["AAAAHAAAAAAAAACW"]));
    assert!(!rendered.contains_key("APIC"));
}

#[test]
fn pictures_on_request() {
    let rendered = render(&sample_id3(), RenderOptions::new(true, true)).unwrap();
    assert_eq!(
        rendered["APIC"],
        json!([{
            "data": "AQID",
            "desc": "Cover",
            "mime": "image/jpeg",
            "type": 3,
            "type_friendly": "COVER_FRONT",
        }])
    );
}

#[test]
fn flatten_unwraps_single_values() {
    let rendered = render(&sample_id3(), RenderOptions::new(false, true)).unwrap();

    assert_eq!(rendered["TIT2"], "Title");
    assert_eq!(rendered["TBPM"], 120);
    assert_eq!(rendered["TPE1"], json!(["Artist 1", "Artist 2"]));
    assert_eq!(rendered["TXXX"], json!({ "source": "CD", "profile": ["Default", "Other"] }));
    assert_eq!(rendered["MCDI"], "AAAAHAAAAAAAAACW");
}

#[test]
fn flatten_leaves_scalars_alone() {
    let once = render(&sample_id3(), RenderOptions::new(false, true)).unwrap();
    let mut twice = once.clone();
    tagbridge::render::flatten(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn flatten_keeps_single_picture_array() {
    let mut tags = FrameSet::new();
    tags.add(cover());
    let rendered = render(&tags, RenderOptions::new(true, true)).unwrap();
    assert!(rendered["APIC"].is_array());
}

#[test]
fn later_descriptions_overwrite_earlier_ones() {
    let frames = vec![txxx("note", &["first"]), txxx("note", &["second"])];
    let rendered = render(&frames[..], RenderOptions::default()).unwrap();
    assert_eq!(rendered["TXXX"], json!({ "note": ["second"] }));
}

#[test]
fn binary_owner_payload_is_base64() {
    let mut tags = FrameSet::new();
    tags.add(owner(KnownFrame::Priv, "Vendor", &[0xff, 0xfe]));
    let rendered = render(&tags, RenderOptions::default()).unwrap();
    assert_eq!(rendered["PRIV"], json!({ "Vendor": "//4=" }));
}

#[test]
fn structured_frames_render_declared_fields() {
    let mut tags = FrameSet::new();
    tags.add(StructuredFrame {
        id: id("POPM"),
        fields: vec![
            SubField::new("email", FieldValue::Text("me@example.com".into())),
            SubField::new("rating", FieldValue::Integer(196)),
            SubField::new("count", FieldValue::Integer(3)),
        ],
    });
    tags.add(StructuredFrame {
        id: id("SYLT"),
        fields: vec![
            SubField::new("lang", FieldValue::Text("eng".into())),
            SubField::new("text", FieldValue::Unsupported("synchronised lyrics".into())),
            SubField::new("raw", FieldValue::Binary(vec![0, 1])),
        ],
    });

    let rendered = render(&tags, RenderOptions::new(false, true)).unwrap();
    assert_eq!(
        rendered["POPM"],
        json!([{ "email": "me@example.com", "rating": 196, "count": 3 }])
    );
    assert_eq!(rendered["SYLT"], json!([{ "lang": "eng", "raw": "AAE=" }]));
}

#[test]
fn keys_are_sorted() {
    let rendered = render(&sample_id3(), RenderOptions::default()).unwrap();
    let keys: Vec<_> = rendered.keys().cloned().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn renders_source_tags() {
    let source = SourceTagSet::new()
        .with("ALBUM", ["Album"])
        .with("artist", ["Artist 1", "Artist 2"])
        .with("length", [12345i64])
        .with("cdtoc", [vec![0u8, 1]])
        .with_picture(Picture::new(PictureType::CoverFront, "image/png", "", vec![1, 2, 3]));

    let rendered = render(&source, RenderOptions::default()).unwrap();
    assert_eq!(
        Value::Object(rendered),
        json!({
            "album": ["Album"],
            "artist": ["Artist 1", "Artist 2"],
            "length": [12345],
            "cdtoc": ["AAE="],
        })
    );

    let rendered = render(&source, RenderOptions::new(true, true)).unwrap();
    assert_eq!(rendered["album"], "Album");
    assert_eq!(rendered["artist"], json!(["Artist 1", "Artist 2"]));
    assert_eq!(rendered["length"], 12345);
    assert_eq!(rendered["pictures"][0]["type_friendly"], "COVER_FRONT");
    assert_eq!(rendered["pictures"].as_array().map(Vec::len), Some(1));
}

#[test]
fn source_without_pictures_has_no_pictures_key() {
    let source = SourceTagSet::new().with("album", ["Album"]);
    let rendered = render(&source, RenderOptions::new(true, false)).unwrap();
    assert!(!rendered.contains_key("pictures"));
}
