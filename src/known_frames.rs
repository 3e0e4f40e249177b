use crate::frames::FrameId;

macro_rules! known_frames {
    ($($variant:ident => $id:literal, $name:literal;)*) => {
        /// Typed view over common ID3v2.3 / ID3v2.4 frames.
        ///
        /// Anything not in this list becomes `KnownFrame::Unknown(id)`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KnownFrame {
            $($variant,)*
            Unknown(FrameId),
        }

        impl From<FrameId> for KnownFrame {
            fn from(id: FrameId) -> Self {
                match &id.0 {
                    $($id => KnownFrame::$variant,)*
                    _ => KnownFrame::Unknown(id),
                }
            }
        }

        impl KnownFrame {
            pub fn id(&self) -> FrameId {
                match self {
                    $(KnownFrame::$variant => FrameId(*$id),)*
                    KnownFrame::Unknown(id) => *id,
                }
            }

            /// Human-readable frame name (e.g. "Part of a set").
            pub fn full_name(&self) -> &'static str {
                match self {
                    $(KnownFrame::$variant => $name,)*
                    KnownFrame::Unknown(_) => "Unknown Frame",
                }
            }
        }
    };
}

known_frames! {
    // Structured frames
    Aenc => b"AENC", "Audio encryption";
    Apic => b"APIC", "Attached picture";
    Aspi => b"ASPI", "Audio seek point index";
    Chap => b"CHAP", "Chapter";
    Comm => b"COMM", "Comments";
    Comr => b"COMR", "Commercial frame";
    Ctoc => b"CTOC", "Table of contents";
    Encr => b"ENCR", "Encryption method registration";
    Equ2 => b"EQU2", "Equalisation (2)";
    Equa => b"EQUA", "Equalisation";
    Etco => b"ETCO", "Event timing codes";
    Geob => b"GEOB", "General encapsulated object";
    Grid => b"GRID", "Group identification registration";
    Ipls => b"IPLS", "Involved people list";
    Link => b"LINK", "Linked information";
    Mcdi => b"MCDI", "Music CD identifier";
    Mllt => b"MLLT", "MPEG location lookup table";
    Owne => b"OWNE", "Ownership frame";
    Pcnt => b"PCNT", "Play counter";
    Popm => b"POPM", "Popularimeter";
    Poss => b"POSS", "Position synchronisation frame";
    Priv => b"PRIV", "Private frame";
    Rbuf => b"RBUF", "Recommended buffer size";
    Rva2 => b"RVA2", "Relative volume adjustment (2)";
    Rvad => b"RVAD", "Relative volume adjustment";
    Rvrb => b"RVRB", "Reverb";
    Seek => b"SEEK", "Seek frame";
    Sign => b"SIGN", "Signature frame";
    Sylt => b"SYLT", "Synchronised lyric/text";
    Sytc => b"SYTC", "Synchronised tempo codes";
    Ufid => b"UFID", "Unique file identifier";
    User => b"USER", "Terms of use";
    Uslt => b"USLT", "Unsynchronised lyric/text transcription";

    // Text information frames
    Talb => b"TALB", "Album/Movie/Show title";
    Tbpm => b"TBPM", "BPM (beats per minute)";
    Tcmp => b"TCMP", "iTunes compilation flag";
    Tcom => b"TCOM", "Composer";
    Tcon => b"TCON", "Content type";
    Tcop => b"TCOP", "Copyright message";
    Tdat => b"TDAT", "Date";
    Tden => b"TDEN", "Encoding time";
    Tdly => b"TDLY", "Playlist delay";
    Tdor => b"TDOR", "Original release time";
    Tdrc => b"TDRC", "Recording time";
    Tdrl => b"TDRL", "Release time";
    Tdtg => b"TDTG", "Tagging time";
    Tenc => b"TENC", "Encoded by";
    Text => b"TEXT", "Lyricist/Text writer";
    Tflt => b"TFLT", "File type";
    Time => b"TIME", "Time";
    Tipl => b"TIPL", "Involved people list";
    Tit1 => b"TIT1", "Content group description";
    Tit2 => b"TIT2", "Title/songname/content description";
    Tit3 => b"TIT3", "Subtitle/Description refinement";
    Tkey => b"TKEY", "Initial key";
    Tlan => b"TLAN", "Language(s)";
    Tlen => b"TLEN", "Length";
    Tmcl => b"TMCL", "Musician credits list";
    Tmed => b"TMED", "Media type";
    Tmoo => b"TMOO", "Mood";
    Toal => b"TOAL", "Original album/movie/show title";
    Tofn => b"TOFN", "Original filename";
    Toly => b"TOLY", "Original lyricist(s)/text writer(s)";
    Tope => b"TOPE", "Original artist(s)/performer(s)";
    Tory => b"TORY", "Original release year";
    Town => b"TOWN", "File owner/licensee";
    Tpe1 => b"TPE1", "Lead performer(s)/Soloist(s)";
    Tpe2 => b"TPE2", "Band/orchestra/accompaniment";
    Tpe3 => b"TPE3", "Conductor/performer refinement";
    Tpe4 => b"TPE4", "Interpreted, remixed, or otherwise modified by";
    Tpos => b"TPOS", "Part of a set";
    Tpro => b"TPRO", "Produced notice";
    Tpub => b"TPUB", "Publisher";
    Trck => b"TRCK", "Track number/Position in set";
    Trda => b"TRDA", "Recording dates";
    Trsn => b"TRSN", "Internet radio station name";
    Trso => b"TRSO", "Internet radio station owner";
    Tsiz => b"TSIZ", "Size";
    Tso2 => b"TSO2", "Album artist sort order";
    Tsoa => b"TSOA", "Album sort order";
    Tsoc => b"TSOC", "Composer sort order";
    Tsop => b"TSOP", "Performer sort order";
    Tsot => b"TSOT", "Title sort order";
    Tsrc => b"TSRC", "ISRC (international standard recording code)";
    Tsse => b"TSSE", "Software/Hardware and settings used for encoding";
    Tsst => b"TSST", "Set subtitle";
    Txxx => b"TXXX", "User defined text information frame";
    Tyer => b"TYER", "Year";

    // URL link frames
    Wcom => b"WCOM", "Commercial information";
    Wcop => b"WCOP", "Copyright/Legal information";
    Woaf => b"WOAF", "Official audio file webpage";
    Woar => b"WOAR", "Official artist/performer webpage";
    Woas => b"WOAS", "Official audio source webpage";
    Wors => b"WORS", "Official Internet radio station homepage";
    Wpay => b"WPAY", "Payment";
    Wpub => b"WPUB", "Publishers official webpage";
    Wxxx => b"WXXX", "User defined URL link frame";
}

impl KnownFrame {
    /// Text frame whose values are integers.
    pub fn is_numeric_text(&self) -> bool {
        matches!(
            self,
            KnownFrame::Tbpm
                | KnownFrame::Tdly
                | KnownFrame::Tlen
                | KnownFrame::Tory
                | KnownFrame::Tsiz
                | KnownFrame::Tyer
        )
    }

    /// Frame whose whole body is one opaque blob.
    pub fn is_binary(&self) -> bool {
        matches!(self, KnownFrame::Mcdi)
    }
}
