//! A decoder for IEEE 802.11 MAC frames (MPDUs) captured off a monitor-mode
//! radio.
//!
//! Implements IEEE Std 802.11-2012 §8: Frame Control classification, header
//! parsing for Management/Control/Data frames, and the Information Element
//! tag stream that trails most Management frames. The decoder is stateless,
//! synchronous, and performs no I/O; it borrows its input buffer only for
//! the duration of a single [`decode`] call.

pub mod bits;
mod ctrl;
mod cursor;
mod data;
pub mod dispatch;
pub mod error;
pub mod ie;
mod mgmt;
pub mod subfield;

pub use ctrl::{BaInfo, CtrlBody};
pub use data::DataBody;
pub use dispatch::FrameType;
pub use error::{DecodeError, Result};
pub use ie::{IeBody, InfoElement};
pub use mgmt::{FixedParams, MgmtBody};
pub use subfield::{BaType, FrameControlFlags, QosControl, SeqControl};

use cursor::ByteCursor;
use dispatch::classify;
use subfield::frame_control_flags;

/// The largest MPDU this decoder is required to accept. Larger buffers are
/// still decoded; rejecting them upstream is the caller's responsibility.
pub const MAX_MPDU: usize = 7991;

const MIN_HEADER_LEN: usize = 10;
const FCS_LEN: usize = 4;

/// The decoded Frame Control field: frame type, subtype, and flag byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameControl {
    pub frame_type: FrameType,
    pub subtype: u8,
    pub flags: FrameControlFlags,
}

/// The subtype-specific body of a decoded frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FrameBody {
    Ctrl(CtrlBody),
    Mgmt(MgmtBody),
    Data(DataBody),
}

/// A fully decoded 802.11 MPDU.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeRecord {
    /// Always 0.
    pub version: u8,
    /// `(header_bytes_consumed, total_bytes_consumed)`; differ by 4 only
    /// when an FCS was requested.
    pub size: (usize, usize),
    /// Names of every populated optional field, in decode order.
    pub present: Vec<&'static str>,
    pub frame_control: FrameControl,
    pub duration: u16,
    pub addr1: String,
    pub body: FrameBody,
    pub fcs: Option<u32>,
}

/// Renders a 6-byte MAC address as colon-separated uppercase hex.
pub(crate) fn format_mac(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Decodes a single MPDU from `buffer`.
///
/// `has_fcs` indicates whether the last 4 bytes of `buffer` are a trailing
/// Frame Check Sequence; when set, those bytes are read as a little-endian
/// `u32` and excluded from header parsing.
pub fn decode(buffer: &[u8], has_fcs: bool) -> Result<DecodeRecord> {
    if buffer.len() < MIN_HEADER_LEN {
        return Err(DecodeError::InvalidFrameSize(buffer.len()));
    }

    let (header, fcs) = if has_fcs {
        let split = buffer.len() - FCS_LEN;
        let fcs_bytes = &buffer[split..];
        let fcs = u32::from_le_bytes([fcs_bytes[0], fcs_bytes[1], fcs_bytes[2], fcs_bytes[3]]);
        (&buffer[..split], Some(fcs))
    } else {
        (buffer, None)
    };

    let (frame_type, subtype) = classify(header[0])?;
    let flags = frame_control_flags(header[1]);
    let frame_control = FrameControl {
        frame_type,
        subtype,
        flags,
    };

    let mut present = vec!["frame_control", "duration", "addr1"];

    let mut cur = ByteCursor::new(&header[2..]);
    let duration = cur.read_u16_le()?;
    let addr1 = format_mac(cur.read_bytes(6)?);

    let body = match frame_type {
        FrameType::Ctrl => {
            let b = ctrl::parse_ctrl(subtype, &mut cur)?;
            if b.addr2.is_some() {
                present.push("addr2");
            }
            if b.bar_control.is_some() {
                present.push("bar_control");
                present.push("bar_info");
            }
            if b.ba_control.is_some() {
                present.push("ba_control");
                present.push("ba_info");
            }
            if b.carried_frame_control.is_some() {
                present.push("carried_frame_control");
                present.push("htc");
                present.push("carried_frame");
            }
            FrameBody::Ctrl(b)
        }
        FrameType::Mgmt => {
            let b = mgmt::parse_mgmt(subtype, &mut cur)?;
            present.push("addr2");
            present.push("addr3");
            present.push("seq_control");
            if b.fixed_params.is_some() {
                present.push("fixed_params");
            }
            if !b.info_elements.is_empty() {
                present.push("info_elements");
            }
            FrameBody::Mgmt(b)
        }
        FrameType::Data => {
            let b = data::parse_data(subtype, flags.td, flags.fd, &mut cur)?;
            present.push("addr2");
            present.push("addr3");
            present.push("seq_control");
            if b.addr4.is_some() {
                present.push("addr4");
            }
            if b.qos.is_some() {
                present.push("qos");
            }
            FrameBody::Data(b)
        }
        FrameType::Rsrv => return Err(DecodeError::UnresolvedFrameType),
    };

    let header_len = header.len() - cur.remaining();
    let total_len = header_len + if has_fcs { FCS_LEN } else { 0 };
    if fcs.is_some() {
        present.push("fcs");
    }

    Ok(DecodeRecord {
        version: 0,
        size: (header_len, total_len),
        present,
        frame_control,
        duration,
        addr1,
        body,
        fcs,
    })
}
