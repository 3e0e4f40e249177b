use id3::TagLike;
use tagbridge::container::{frames_from_id3, frames_to_id3, source_tags_from_flac};
use tagbridge::frames::Frame;
use tagbridge::{PictureType, RenderOptions, map_tags, render};

fn flac_fixture() -> metaflac::Tag {
    let mut tag = metaflac::Tag::new();
    tag.set_vorbis("ALBUM", vec!["Album"]);
    tag.set_vorbis("ARTIST", vec!["Artist 1", "Artist 2"]);
    tag.set_vorbis("TRACKNUMBER", vec!["4"]);
    tag.set_vorbis("DISCNUMBER", vec!["1"]);
    tag.set_vorbis("TOTALDISCS", vec!["2"]);
    tag.add_picture(
        "image/jpeg",
        metaflac::block::PictureType::CoverFront,
        vec![0u8; 8],
    );
    tag
}

#[test]
fn flac_tags_render_like_source_json() {
    let source = source_tags_from_flac(&flac_fixture());
    let rendered = render(&source, RenderOptions::default()).unwrap();
    assert_eq!(rendered["album"], serde_json::json!(["Album"]));
    assert_eq!(rendered["artist"], serde_json::json!(["Artist 1", "Artist 2"]));
    assert!(!rendered.contains_key("pictures"));

    let rendered = render(&source, RenderOptions::new(true, true)).unwrap();
    assert_eq!(rendered["album"], "Album");
    assert_eq!(rendered["pictures"][0]["type"], 3);
    assert_eq!(rendered["pictures"][0]["data"], "AAAAAAAAAAA=");
}

#[test]
fn flac_to_id3_tag_in_memory() {
    let source = source_tags_from_flac(&flac_fixture());
    let frames = map_tags(&source).unwrap();

    let mut tag = id3::Tag::with_version(id3::Version::Id3v24);
    for frame in frames_to_id3(&frames.into_iter().collect()) {
        let _ = tag.add_frame(frame);
    }

    assert_eq!(tag.album(), Some("Album"));
    assert_eq!(tag.get("TRCK").and_then(|f| f.content().text()), Some("04"));
    assert_eq!(tag.get("TPOS").and_then(|f| f.content().text()), Some("1/2"));
    let picture = tag.pictures().next().expect("picture copied");
    assert_eq!(picture.picture_type, id3::frame::PictureType::CoverFront);
    assert_eq!(picture.mime_type, "image/jpeg");

    let back = frames_from_id3(&tag);
    match back.get("TPE1") {
        Some(Frame::Text(f)) => assert_eq!(f.text, ["Artist 1", "Artist 2"]),
        other => panic!("TPE1: unexpected {other:?}"),
    }
    match back.get("APIC:") {
        Some(Frame::Picture(f)) => assert_eq!(f.picture.picture_type, PictureType::CoverFront),
        other => panic!("APIC: unexpected {other:?}"),
    }
}

#[test]
fn id3_extended_text_becomes_keyed_text() {
    let mut tag = id3::Tag::new();
    let _ = tag.add_frame(id3::Frame::with_content(
        "TXXX",
        id3::Content::ExtendedText(id3::frame::ExtendedText {
            description: "source".to_string(),
            value: "CD".to_string(),
        }),
    ));
    let frames = frames_from_id3(&tag);
    assert!(frames.contains("TXXX:source"));
}

#[test]
fn timed_lyrics_and_credits_render_their_fields() {
    use id3::frame::{
        InvolvedPeopleList, InvolvedPeopleListItem, SynchronisedLyrics, SynchronisedLyricsType,
        TimestampFormat,
    };

    let mut tag = id3::Tag::new();
    tag.add_frame(SynchronisedLyrics {
        lang: "eng".to_string(),
        timestamp_format: TimestampFormat::Ms,
        content_type: SynchronisedLyricsType::Lyrics,
        description: "verses".to_string(),
        content: vec![(0, "la".to_string()), (1500, "la la".to_string())],
    });
    tag.add_frame(id3::Frame::with_content(
        "TIPL",
        id3::Content::InvolvedPeopleList(InvolvedPeopleList {
            items: vec![InvolvedPeopleListItem {
                involvement: "producer".to_string(),
                involvee: "Alice".to_string(),
            }],
        }),
    ));

    let rendered = render(&frames_from_id3(&tag), RenderOptions::new(false, true)).unwrap();
    assert_eq!(
        serde_json::Value::Object(rendered),
        serde_json::json!({
            "SYLT": [{ "lang": "eng", "format": 2, "type": 1, "desc": "verses" }],
            "TIPL": [{ "producer": "Alice" }],
        })
    );
}
