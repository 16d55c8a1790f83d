//! The error type returned by this crate.

use quick_error::quick_error;

quick_error! {
    /// An error that can occur while decoding an 802.11 MPDU.
    #[derive(Debug, Eq, PartialEq, Clone)]
    pub enum DecodeError {
        /// The buffer is shorter than the 10-byte minimum header.
        InvalidFrameSize(len: usize) {
            display("frame is {} bytes, shorter than the 10-byte minimum header", len)
        }
        /// The first byte does not match any Management/Control/Data subtype table entry.
        InvalidFrameType(byte: u8) {
            display("invalid frame type/subtype byte: {:#04x}", byte)
        }
        /// The frame control flags byte could not be read.
        ///
        /// Unreachable once the minimum-size check has passed; kept for defense.
        InvalidFlags {
            display("frame control flags byte could not be read")
        }
        /// The cursor ran out of bytes before a fixed field or IE body could be read.
        ShortRead(field: &'static str, needed: usize, remaining: usize) {
            display("short read of '{}': needed {} bytes, {} remaining", field, needed, remaining)
        }
        /// A reserved control subtype (0..6) was encountered.
        UnknownControlSubtype(subtype: u8) {
            display("unknown/reserved control subtype: {}", subtype)
        }
        /// The frame classified as the reserved frame type.
        UnresolvedFrameType {
            display("frame type did not resolve to Mgmt, Ctrl, or Data")
        }
        /// A bitmask utility was asked about a flag name not present in its table.
        UnknownFlag(name: &'static str) {
            display("unknown flag name: {}", name)
        }
    }
}

/// A return type to use across this crate.
pub type Result<T> = std::result::Result<T, DecodeError>;
