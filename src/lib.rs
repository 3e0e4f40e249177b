pub mod api;
pub mod cli;
pub mod codec;
pub mod container;
pub mod convert;
pub mod filters;
pub mod frames;
pub mod known_frames;
pub mod picture;
pub mod render;
pub mod source;
pub mod util;

pub use api::{FileTags, clean_id3, clear_flac, clear_id3, copy_flac_to_id3, flac_to_json, id3_to_json};
pub use container::{ContainerError, Id3File};
pub use convert::{ConvertError, TagMapper, map_tags};
pub use filters::{Persist, PrivateTagFilter, non_picture, pictures, strip_private};
pub use frames::{Frame, FrameId, FrameSet};
pub use known_frames::KnownFrame;
pub use picture::{Picture, PictureType};
pub use render::{Render, RenderError, RenderOptions, render};
pub use source::{Scalar, SourceTagSet};
