/// Picture type codes shared by FLAC picture blocks and ID3v2 `APIC` frames.
///
/// Codes 0..=20 come from the ID3v2 picture type table (reused verbatim by
/// FLAC). Anything else is kept as `Undefined(code)` so that no information is
/// lost when copying between formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PictureType {
    Other,
    FileIcon,
    OtherFileIcon,
    CoverFront,
    CoverBack,
    LeafletPage,
    Media,
    LeadArtist,
    Artist,
    Conductor,
    Band,
    Composer,
    Lyricist,
    RecordingLocation,
    DuringRecording,
    DuringPerformance,
    ScreenCapture,
    Fish,
    Illustration,
    BandLogotype,
    PublisherLogotype,
    Undefined(u8),
}

impl From<u8> for PictureType {
    fn from(code: u8) -> Self {
        match code {
            0 => PictureType::Other,
            1 => PictureType::FileIcon,
            2 => PictureType::OtherFileIcon,
            3 => PictureType::CoverFront,
            4 => PictureType::CoverBack,
            5 => PictureType::LeafletPage,
            6 => PictureType::Media,
            7 => PictureType::LeadArtist,
            8 => PictureType::Artist,
            9 => PictureType::Conductor,
            10 => PictureType::Band,
            11 => PictureType::Composer,
            12 => PictureType::Lyricist,
            13 => PictureType::RecordingLocation,
            14 => PictureType::DuringRecording,
            15 => PictureType::DuringPerformance,
            16 => PictureType::ScreenCapture,
            17 => PictureType::Fish,
            18 => PictureType::Illustration,
            19 => PictureType::BandLogotype,
            20 => PictureType::PublisherLogotype,
            other => PictureType::Undefined(other),
        }
    }
}

impl From<PictureType> for u8 {
    fn from(picture_type: PictureType) -> Self {
        picture_type.code()
    }
}

impl PictureType {
    /// Numeric code as stored in the container.
    pub fn code(self) -> u8 {
        match self {
            PictureType::Other => 0,
            PictureType::FileIcon => 1,
            PictureType::OtherFileIcon => 2,
            PictureType::CoverFront => 3,
            PictureType::CoverBack => 4,
            PictureType::LeafletPage => 5,
            PictureType::Media => 6,
            PictureType::LeadArtist => 7,
            PictureType::Artist => 8,
            PictureType::Conductor => 9,
            PictureType::Band => 10,
            PictureType::Composer => 11,
            PictureType::Lyricist => 12,
            PictureType::RecordingLocation => 13,
            PictureType::DuringRecording => 14,
            PictureType::DuringPerformance => 15,
            PictureType::ScreenCapture => 16,
            PictureType::Fish => 17,
            PictureType::Illustration => 18,
            PictureType::BandLogotype => 19,
            PictureType::PublisherLogotype => 20,
            PictureType::Undefined(code) => code,
        }
    }

    /// Upper-snake-case name used in JSON output (e.g. `COVER_FRONT`).
    pub fn friendly_name(self) -> &'static str {
        match self {
            PictureType::Other => "OTHER",
            PictureType::FileIcon => "FILE_ICON",
            PictureType::OtherFileIcon => "OTHER_FILE_ICON",
            PictureType::CoverFront => "COVER_FRONT",
            PictureType::CoverBack => "COVER_BACK",
            PictureType::LeafletPage => "LEAFLET_PAGE",
            PictureType::Media => "MEDIA",
            PictureType::LeadArtist => "LEAD_ARTIST",
            PictureType::Artist => "ARTIST",
            PictureType::Conductor => "CONDUCTOR",
            PictureType::Band => "BAND",
            PictureType::Composer => "COMPOSER",
            PictureType::Lyricist => "LYRICIST",
            PictureType::RecordingLocation => "RECORDING_LOCATION",
            PictureType::DuringRecording => "DURING_RECORDING",
            PictureType::DuringPerformance => "DURING_PERFORMANCE",
            PictureType::ScreenCapture => "SCREEN_CAPTURE",
            PictureType::Fish => "FISH",
            PictureType::Illustration => "ILLUSTRATION",
            PictureType::BandLogotype => "BAND_LOGOTYPE",
            PictureType::PublisherLogotype => "PUBLISHER_LOGOTYPE",
            PictureType::Undefined(_) => "UNDEFINED",
        }
    }
}

/// An embedded image, as carried by a FLAC picture block or an `APIC` frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub picture_type: PictureType,
    pub mime: String,
    pub description: String,
    pub data: Vec<u8>,
}

impl Picture {
    pub fn new(
        picture_type: PictureType,
        mime: impl Into<String>,
        description: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            picture_type,
            mime: mime.into(),
            description: description.into(),
            data,
        }
    }
}
