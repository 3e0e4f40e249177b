use std::collections::BTreeSet;
use tagbridge::frames::{Frame, FrameSet, OwnerDataFrame, PictureFrame, TextFrame};
use tagbridge::{
    KnownFrame, Persist, Picture, PictureType, PrivateTagFilter, non_picture, pictures,
    strip_private,
};

const GOOGLE_IDENTITY: &str = "PRIV:Google/StoreId:rT9HEn6sL6tN7yhk6oDQfpi1ip6";

fn private(owner: &str, data: &[u8]) -> Frame {
    OwnerDataFrame {
        id: KnownFrame::Priv.id(),
        owner: owner.to_string(),
        data: data.to_vec(),
    }
    .into()
}

fn picture(description: &str) -> Frame {
    PictureFrame {
        id: KnownFrame::Apic.id(),
        picture: Picture::new(PictureType::CoverFront, "image/png", description, vec![0]),
    }
    .into()
}

fn fixture() -> FrameSet {
    let mut tags = FrameSet::new();
    tags.add(TextFrame::new(KnownFrame::Tit2, vec!["Title".to_string()]));
    tags.add(private("Google/StoreId", b"rT9HEn6sL6tN7yhk6oDQfpi1ip6"));
    tags.add(private("Naftuli/Word", b"naftuli"));
    tags.add(picture("Front"));
    tags.add(picture("Back"));
    tags
}

/// Frame set that counts commits and can be told to fail.
#[derive(Default)]
struct Recorder {
    frames: FrameSet,
    saves: usize,
    fail: bool,
}

impl AsMut<FrameSet> for Recorder {
    fn as_mut(&mut self) -> &mut FrameSet {
        &mut self.frames
    }
}

impl Persist for Recorder {
    type Error = String;

    fn persist(&mut self) -> Result<(), String> {
        self.saves += 1;
        if self.fail {
            Err("disk full".to_string())
        } else {
            Ok(())
        }
    }
}

#[test]
fn strips_only_google_frames() {
    let mut tags = fixture();
    let removed = strip_private(&mut tags, false).unwrap();

    assert_eq!(removed, vec![GOOGLE_IDENTITY.to_string()]);
    assert!(!tags.contains(GOOGLE_IDENTITY));
    assert!(tags.contains("PRIV:Naftuli/Word:naftuli"));
    assert_eq!(tags.len(), 4);
}

#[test]
fn stripping_is_idempotent() {
    let mut tags = fixture();
    assert_eq!(strip_private(&mut tags, false).unwrap().len(), 1);
    assert!(strip_private(&mut tags, false).unwrap().is_empty());
}

#[test]
fn persists_once_when_asked() {
    let mut recorder = Recorder {
        frames: fixture(),
        ..Default::default()
    };
    strip_private(&mut recorder, false).unwrap();
    assert_eq!(recorder.saves, 0);

    recorder.frames = fixture();
    let removed = strip_private(&mut recorder, true).unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(recorder.saves, 1);

    // persistence does not depend on what matched
    assert!(strip_private(&mut recorder, true).unwrap().is_empty());
    assert_eq!(recorder.saves, 2);
}

#[test]
fn persist_failure_propagates_and_keeps_removals() {
    let mut recorder = Recorder {
        frames: fixture(),
        fail: true,
        ..Default::default()
    };
    assert_eq!(strip_private(&mut recorder, true), Err("disk full".to_string()));
    assert!(!recorder.frames.contains(GOOGLE_IDENTITY));
}

#[test]
fn private_frames_lists_without_removing() {
    let tags = fixture();
    let filter = PrivateTagFilter::new();
    assert_eq!(filter.private_frames(&tags), vec![GOOGLE_IDENTITY.to_string()]);
    assert_eq!(tags.len(), 5);
}

#[test]
fn non_picture_and_pictures_partition_the_set() {
    let tags = fixture();
    let others = non_picture(&tags);
    let images = pictures(&tags);

    assert_eq!(
        others.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        vec!["TIT2", GOOGLE_IDENTITY, "PRIV:Naftuli/Word:naftuli"]
    );
    assert!(others.iter().all(|(_, f)| !f.is_picture()));
    assert_eq!(
        images.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        vec!["APIC:Front", "APIC:Back"]
    );

    let left: BTreeSet<_> = others.iter().map(|(k, _)| k.clone()).collect();
    let right: BTreeSet<_> = images.iter().map(|(k, _)| k.clone()).collect();
    assert!(left.is_disjoint(&right));
    let union: BTreeSet<_> = left.union(&right).cloned().collect();
    let all: BTreeSet<String> = tags.identities().into_iter().collect();
    assert_eq!(union, all);
}
