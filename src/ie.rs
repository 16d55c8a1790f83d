//! Information Elements: the tag-length-value stream that trails the
//! fixed-parameter block of most Management frames.

use crate::cursor::ByteCursor;
use crate::error::Result;

pub const EID_SSID: u8 = 0;
pub const EID_SUPPORTED_RATES: u8 = 1;
pub const EID_FH: u8 = 2;
pub const EID_DS: u8 = 3;
pub const EID_CF: u8 = 4;
pub const EID_TIM: u8 = 5;
pub const EID_IBSS: u8 = 6;
pub const EID_EXT_RATES: u8 = 50;
pub const EID_VEND_SPEC: u8 = 221;

/// An Information Element body, distinguishing the two shapes this crate
/// gives special treatment to from the generic opaque case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IeBody {
    /// EID 1 or 50: each byte is a legacy rate, decoded to Mb/s.
    Rates(Vec<f32>),
    /// EID 221: a 3-byte OUI followed by vendor-specific content.
    Vendor { oui: String, data: Vec<u8> },
    /// Every other EID: the raw tag body, untouched.
    Raw(Vec<u8>),
}

/// A single decoded Information Element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InfoElement {
    pub id: u8,
    pub len: u8,
    pub body: IeBody,
}

/// Converts a legacy rate byte to Mb/s. Std Table 8-56: the low 7 bits are
/// the rate in 500 kb/s units; bit 7 marks the rate as basic (BSS-mandatory).
pub fn rate_mbps(byte: u8) -> f32 {
    (byte & 0x7F) as f32 * 0.5
}

fn format_oui(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join("-")
}

/// Decodes one `(id, len, body)` Information Element from `cur`, consuming
/// `2 + len` bytes.
pub fn parse_one(cur: &mut ByteCursor) -> Result<InfoElement> {
    let id = cur.read_u8()?;
    let len = cur.read_u8()?;
    let raw = cur.read_bytes(len as usize)?;
    let body = match id {
        EID_SUPPORTED_RATES | EID_EXT_RATES => {
            IeBody::Rates(raw.iter().copied().map(rate_mbps).collect())
        }
        EID_VEND_SPEC if raw.len() >= 3 => IeBody::Vendor {
            oui: format_oui(&raw[..3]),
            data: raw[3..].to_vec(),
        },
        _ => IeBody::Raw(raw.to_vec()),
    };
    Ok(InfoElement { id, len, body })
}

/// Decodes every Information Element remaining in `cur`, stopping cleanly at
/// the end of the buffer. A short read on a trailing, truncated IE is
/// propagated rather than silently dropped.
pub fn parse_all(cur: &mut ByteCursor) -> Result<Vec<InfoElement>> {
    let mut ies = Vec::new();
    while cur.remaining() > 0 {
        ies.push(parse_one(cur)?);
    }
    Ok(ies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_byte_examples_from_standard() {
        assert_eq!(rate_mbps(0x82), 1.0);
        assert_eq!(rate_mbps(0x84), 2.0);
        assert_eq!(rate_mbps(0x0B), 5.5);
        assert_eq!(rate_mbps(0x24), 18.0);
    }

    #[test]
    fn parses_supported_rates_ie() {
        let data = [EID_SUPPORTED_RATES, 2, 0x82, 0x84];
        let mut cur = ByteCursor::new(&data);
        let ie = parse_one(&mut cur).unwrap();
        assert_eq!(ie.id, EID_SUPPORTED_RATES);
        assert_eq!(ie.body, IeBody::Rates(vec![1.0, 2.0]));
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn parses_vendor_ie_oui_and_data() {
        let data = [EID_VEND_SPEC, 5, 0x00, 0x50, 0xF2, 0x01, 0x01];
        let mut cur = ByteCursor::new(&data);
        let ie = parse_one(&mut cur).unwrap();
        match ie.body {
            IeBody::Vendor { oui, data } => {
                assert_eq!(oui, "00-50-F2");
                assert_eq!(data, vec![0x01, 0x01]);
            }
            other => panic!("expected Vendor, got {:?}", other),
        }
    }

    #[test]
    fn parses_chain_of_ies_until_exhausted() {
        let data = [EID_SSID, 2, b'h', b'i', EID_DS, 1, 6];
        let mut cur = ByteCursor::new(&data);
        let ies = parse_all(&mut cur).unwrap();
        assert_eq!(ies.len(), 2);
        assert_eq!(ies[0].id, EID_SSID);
        assert_eq!(ies[1].id, EID_DS);
    }

    #[test]
    fn short_read_on_truncated_tag_propagates() {
        let data = [EID_SSID, 5, 1, 2];
        let mut cur = ByteCursor::new(&data);
        assert!(parse_all(&mut cur).is_err());
    }
}
