//! Frame Control byte classification: (frame-type, subtype) lookup tables
//! and subtype name strings.

use crate::error::{DecodeError, Result};

/// The three frame families a Frame Control byte can resolve to, plus the
/// reserved type that must never successfully reach the header parsers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameType {
    Mgmt,
    Ctrl,
    Data,
    Rsrv,
}

pub const MGMT_ASSOC_REQ: u8 = 0;
pub const MGMT_ASSOC_RESP: u8 = 1;
pub const MGMT_REASSOC_REQ: u8 = 2;
pub const MGMT_REASSOC_RESP: u8 = 3;
pub const MGMT_PROBE_REQ: u8 = 4;
pub const MGMT_PROBE_RESP: u8 = 5;
pub const MGMT_TIMING_ADV: u8 = 6;
pub const MGMT_RSRV_7: u8 = 7;
pub const MGMT_BEACON: u8 = 8;
pub const MGMT_ATIM: u8 = 9;
pub const MGMT_DISASSOC: u8 = 10;
pub const MGMT_AUTH: u8 = 11;
pub const MGMT_DEAUTH: u8 = 12;
pub const MGMT_ACTION: u8 = 13;
pub const MGMT_ACTION_NOACK: u8 = 14;
pub const MGMT_RSRV_15: u8 = 15;

pub static MGMT_SUBTYPE_NAMES: [&str; 16] = [
    "assoc-req",
    "assoc-resp",
    "reassoc-req",
    "reassoc-resp",
    "probe-req",
    "probe-resp",
    "timing-adv",
    "rsrv",
    "beacon",
    "atim",
    "disassoc",
    "auth",
    "deauth",
    "action",
    "action-noack",
    "rsrv",
];

pub const CTRL_WRAPPER: u8 = 7;
pub const CTRL_BLOCK_ACK_REQ: u8 = 8;
pub const CTRL_BLOCK_ACK: u8 = 9;
pub const CTRL_PSPOLL: u8 = 10;
pub const CTRL_RTS: u8 = 11;
pub const CTRL_CTS: u8 = 12;
pub const CTRL_ACK: u8 = 13;
pub const CTRL_CFEND: u8 = 14;
pub const CTRL_CFEND_CFACK: u8 = 15;

pub static CTRL_SUBTYPE_NAMES: [&str; 16] = [
    "rsrv", "rsrv", "rsrv", "rsrv", "rsrv", "rsrv", "rsrv", "wrapper", "block-ack-req",
    "block-ack", "pspoll", "rts", "cts", "ack", "cfend", "cfend-cfack",
];

pub const DATA_DATA: u8 = 0;
pub const DATA_QOS_DATA: u8 = 8;
pub const DATA_QOS_DATA_CFACK: u8 = 9;
pub const DATA_QOS_DATA_CFPOLL: u8 = 10;
pub const DATA_QOS_DATA_CFACK_CFPOLL: u8 = 11;
pub const DATA_QOS_NULL: u8 = 12;
pub const DATA_RSRV_13: u8 = 13;
pub const DATA_QOS_CFPOLL: u8 = 14;
pub const DATA_QOS_CFACK_CFPOLL: u8 = 15;

pub static DATA_SUBTYPE_NAMES: [&str; 16] = [
    "data",
    "cfack",
    "cfpoll",
    "cfack-cfpoll",
    "null",
    "null-cfack",
    "null-cfpoll",
    "null-cfack-cfpoll",
    "qos-data",
    "qos-data-cfack",
    "qos-data-cfpoll",
    "qos-data-cfack-cfpoll",
    "qos-null",
    "rsrv",
    "qos-cfpoll",
    "qos-cfack-cfpoll",
];

/// Returns the human-readable subtype name for `(ft, subtype)`.
pub fn subtype_name(ft: FrameType, subtype: u8) -> &'static str {
    match ft {
        FrameType::Mgmt => MGMT_SUBTYPE_NAMES[subtype as usize],
        FrameType::Ctrl => CTRL_SUBTYPE_NAMES[subtype as usize],
        FrameType::Data => DATA_SUBTYPE_NAMES[subtype as usize],
        FrameType::Rsrv => "rsrv",
    }
}

/// Classifies the first byte of a frame into `(frame_type, subtype)`.
///
/// `0x00, 0x10, .. 0xF0` are Management; `0x04, 0x14, .. 0xF4` are Control;
/// `0x08, 0x18, .. 0xF8` are Data. Any other byte (including every byte with
/// a nonzero protocol version, or frame type `Rsrv`) is invalid.
pub fn classify(byte: u8) -> Result<(FrameType, u8)> {
    let subtype = byte >> 4;
    match byte & 0x0F {
        0x00 => Ok((FrameType::Mgmt, subtype)),
        0x04 => Ok((FrameType::Ctrl, subtype)),
        0x08 => Ok((FrameType::Data, subtype)),
        _ => Err(DecodeError::InvalidFrameType(byte)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_table_entry() {
        for st in 0u8..16 {
            assert_eq!(classify(st << 4).unwrap(), (FrameType::Mgmt, st));
            assert_eq!(classify((st << 4) | 0x04).unwrap(), (FrameType::Ctrl, st));
            assert_eq!(classify((st << 4) | 0x08).unwrap(), (FrameType::Data, st));
        }
    }

    #[test]
    fn rejects_nonzero_version_and_reserved_type() {
        assert!(classify(0x01).is_err());
        assert!(classify(0x0C).is_err()); // type == Rsrv (0b11), version 0
        assert!(classify(0x02).is_err());
    }

    #[test]
    fn subtype_names_cover_control_table() {
        assert_eq!(subtype_name(FrameType::Ctrl, CTRL_CTS), "cts");
        assert_eq!(subtype_name(FrameType::Ctrl, CTRL_RTS), "rts");
        assert_eq!(subtype_name(FrameType::Mgmt, MGMT_BEACON), "beacon");
        assert_eq!(subtype_name(FrameType::Data, DATA_QOS_NULL), "qos-null");
    }
}
