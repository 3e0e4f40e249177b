use crate::picture::Picture;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use byteorder::{BigEndian, ByteOrder};
use serde_json::{Value, json};

/// Standard (padded) base64, as used for every binary payload in JSON output.
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// JSON object describing an embedded picture.
///
/// `{ data, desc, mime, type, type_friendly }` with `data` base64-encoded.
pub fn picture_json(picture: &Picture) -> Value {
    json!({
        "data": encode_base64(&picture.data),
        "desc": picture.description,
        "mime": picture.mime,
        "type": picture.picture_type.code(),
        "type_friendly": picture.picture_type.friendly_name(),
    })
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TocError {
    #[error("invalid hexadecimal entry {0:?}")]
    InvalidEntry(String),
    #[error("track count {0:#x} does not fit in 32 bits")]
    TrackCountOverflow(u64),
    #[error("payload of {0} bytes is not a valid MCDI body")]
    InvalidPayload(usize),
}

/// A CD table of contents: track count followed by sector addresses.
///
/// FLAC files store it in the `CDTOC` comment as `+`-separated hexadecimal
/// numbers (`1C+96+2D5C+...`). The ID3v2 `MCDI` body is the same list packed
/// big-endian: the track count as a `u32`, each address as a `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toc {
    pub track_count: u32,
    pub addresses: Vec<u64>,
}

impl Toc {
    /// Parse the `CDTOC` comment form.
    pub fn parse(cdtoc: &str) -> Result<Self, TocError> {
        let mut entries = cdtoc.split('+').map(parse_hex);
        // split() always yields at least one item
        let track_count = entries.next().unwrap_or(Ok(0))?;
        let track_count = u32::try_from(track_count)
            .map_err(|_| TocError::TrackCountOverflow(track_count))?;
        let addresses = entries.collect::<Result<Vec<_>, _>>()?;
        Ok(Toc {
            track_count,
            addresses,
        })
    }

    /// Pack into an `MCDI` frame body.
    pub fn to_mcdi(&self) -> Vec<u8> {
        let mut payload = vec![0u8; 4 + 8 * self.addresses.len()];
        BigEndian::write_u32(&mut payload[..4], self.track_count);
        for (chunk, address) in payload[4..].chunks_exact_mut(8).zip(&self.addresses) {
            BigEndian::write_u64(chunk, *address);
        }
        payload
    }

    /// Unpack an `MCDI` frame body produced by [`Toc::to_mcdi`].
    pub fn from_mcdi(payload: &[u8]) -> Result<Self, TocError> {
        if payload.len() < 4 || (payload.len() - 4) % 8 != 0 {
            return Err(TocError::InvalidPayload(payload.len()));
        }
        let track_count = BigEndian::read_u32(&payload[..4]);
        let addresses = payload[4..]
            .chunks_exact(8)
            .map(BigEndian::read_u64)
            .collect();
        Ok(Toc {
            track_count,
            addresses,
        })
    }
}

/// `CDTOC` comment to `MCDI` body in one step.
pub fn pack_toc(cdtoc: &str) -> Result<Vec<u8>, TocError> {
    Ok(Toc::parse(cdtoc)?.to_mcdi())
}

fn parse_hex(token: &str) -> Result<u64, TocError> {
    let trimmed = token.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u64::from_str_radix(digits, 16).map_err(|_| TocError::InvalidEntry(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::PictureType;

    #[test]
    fn packs_track_count_and_addresses() {
        let payload = pack_toc("1C+96+2D5C").unwrap();
        assert_eq!(payload.len(), 4 + 2 * 8);
        assert_eq!(&payload[..4], &[0, 0, 0, 0x1C]);
        assert_eq!(BigEndian::read_u64(&payload[4..12]), 0x96);
        assert_eq!(BigEndian::read_u64(&payload[12..20]), 0x2D5C);
    }

    #[test]
    fn lower_case_hex_is_accepted() {
        assert_eq!(pack_toc("1c+96").unwrap(), pack_toc("1C+96").unwrap());
    }

    #[test]
    fn rejects_non_hex_tokens() {
        assert_eq!(
            Toc::parse("1C+XYZ"),
            Err(TocError::InvalidEntry("XYZ".to_string()))
        );
        assert_eq!(Toc::parse(""), Err(TocError::InvalidEntry(String::new())));
        assert_eq!(
            Toc::parse("1C++96"),
            Err(TocError::InvalidEntry(String::new()))
        );
    }

    #[test]
    fn rejects_track_count_overflow() {
        assert_eq!(
            Toc::parse("100000000+96"),
            Err(TocError::TrackCountOverflow(0x1_0000_0000))
        );
    }

    #[test]
    fn mcdi_body_unpacks() {
        let toc = Toc::parse("3+96+1000+2000").unwrap();
        assert_eq!(Toc::from_mcdi(&toc.to_mcdi()).unwrap(), toc);
        assert_eq!(Toc::from_mcdi(&[0, 0, 0]), Err(TocError::InvalidPayload(3)));
        assert_eq!(Toc::from_mcdi(&[0; 7]), Err(TocError::InvalidPayload(7)));
    }

    #[test]
    fn picture_object_shape() {
        let picture = Picture::new(PictureType::CoverBack, "image/png", "Back", vec![0u8; 3]);
        let v = picture_json(&picture);
        assert_eq!(v["data"], "AAAA");
        assert_eq!(v["desc"], "Back");
        assert_eq!(v["mime"], "image/png");
        assert_eq!(v["type"], 4);
        assert_eq!(v["type_friendly"], "COVER_BACK");
    }
}
