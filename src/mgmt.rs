//! Management frame body parsing. Std 8.3.3.

use crate::cursor::ByteCursor;
use crate::dispatch::{
    MGMT_ACTION, MGMT_ACTION_NOACK, MGMT_ASSOC_REQ, MGMT_ASSOC_RESP, MGMT_ATIM, MGMT_AUTH,
    MGMT_BEACON, MGMT_DEAUTH, MGMT_DISASSOC, MGMT_PROBE_REQ, MGMT_PROBE_RESP, MGMT_REASSOC_REQ,
    MGMT_REASSOC_RESP, MGMT_RSRV_15, MGMT_RSRV_7, MGMT_TIMING_ADV,
};
use crate::error::Result;
use crate::ie::{parse_all, InfoElement};
use crate::subfield::{sequence_control, SeqControl};

/// The fixed-parameter block that precedes the Information Elements,
/// shaped by subtype. Std Figures 8-32 through 8-42.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FixedParams {
    AssocReq {
        capability: u16,
        listen_int: u16,
    },
    AssocOrReassocResp {
        capability: u16,
        status_code: u16,
        aid: u16,
    },
    ReassocReq {
        capability: u16,
        listen_int: u16,
        current_ap: String,
    },
    TimingAdv {
        timestamp: u64,
        capability: u16,
    },
    ProbeOrBeaconResp {
        timestamp: u64,
        /// Interval in microseconds (the wire unit, a count of 1024 us Time
        /// Units, already multiplied out).
        beacon_int: u32,
        capability: u16,
    },
    DisassocOrDeauth {
        reason_code: u16,
    },
    Auth {
        algorithm_no: u16,
        auth_seq: u16,
        status_code: u16,
    },
    Action {
        category: u8,
        action: u8,
        action_element: Vec<u8>,
    },
}

/// A decoded Management frame body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MgmtBody {
    pub addr2: String,
    pub addr3: String,
    pub seq_control: SeqControl,
    pub fixed_params: Option<FixedParams>,
    pub info_elements: Vec<InfoElement>,
}

fn read_addr(cur: &mut ByteCursor) -> Result<String> {
    Ok(crate::format_mac(cur.read_bytes(6)?))
}

/// Parses a Management frame body. Std 8.3.3.
///
/// HT Control is never read here even when the Order bit is set on a
/// non-QoS-capable network: this crate, like the one it is modeled on,
/// leaves that field undecoded for Management frames.
pub fn parse_mgmt(subtype: u8, cur: &mut ByteCursor) -> Result<MgmtBody> {
    let addr2 = read_addr(cur)?;
    let addr3 = read_addr(cur)?;
    let seq_control = sequence_control(cur.read_u16_le()?);

    let fixed_params = match subtype {
        MGMT_ASSOC_REQ => Some(FixedParams::AssocReq {
            capability: cur.read_u16_le()?,
            listen_int: cur.read_u16_le()?,
        }),
        MGMT_ASSOC_RESP | MGMT_REASSOC_RESP => {
            let capability = cur.read_u16_le()?;
            let status_code = cur.read_u16_le()?;
            let aid = cur.read_u16_le()? & 0x3FFF;
            Some(FixedParams::AssocOrReassocResp {
                capability,
                status_code,
                aid,
            })
        }
        MGMT_REASSOC_REQ => {
            let capability = cur.read_u16_le()?;
            let listen_int = cur.read_u16_le()?;
            let current_ap = read_addr(cur)?;
            Some(FixedParams::ReassocReq {
                capability,
                listen_int,
                current_ap,
            })
        }
        MGMT_PROBE_REQ => None,
        MGMT_TIMING_ADV => Some(FixedParams::TimingAdv {
            timestamp: cur.read_u64_le()?,
            capability: cur.read_u16_le()?,
        }),
        MGMT_PROBE_RESP | MGMT_BEACON => {
            let timestamp = cur.read_u64_le()?;
            let beacon_int = cur.read_u16_le()? as u32 * 1024;
            let capability = cur.read_u16_le()?;
            Some(FixedParams::ProbeOrBeaconResp {
                timestamp,
                beacon_int,
                capability,
            })
        }
        MGMT_DISASSOC | MGMT_DEAUTH => Some(FixedParams::DisassocOrDeauth {
            reason_code: cur.read_u16_le()?,
        }),
        MGMT_AUTH => Some(FixedParams::Auth {
            algorithm_no: cur.read_u16_le()?,
            auth_seq: cur.read_u16_le()?,
            status_code: cur.read_u16_le()?,
        }),
        MGMT_ACTION | MGMT_ACTION_NOACK => {
            let category = cur.read_u8()?;
            let action = cur.read_u8()?;
            let action_element = cur.take_remaining().to_vec();
            Some(FixedParams::Action {
                category,
                action,
                action_element,
            })
        }
        MGMT_ATIM | MGMT_RSRV_7 | MGMT_RSRV_15 => {
            return Ok(MgmtBody {
                addr2,
                addr3,
                seq_control,
                fixed_params: None,
                info_elements: Vec::new(),
            })
        }
        _ => None,
    };

    let info_elements = parse_all(cur)?;

    Ok(MgmtBody {
        addr2,
        addr3,
        seq_control,
        fixed_params,
        info_elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::MGMT_BEACON;

    #[test]
    fn beacon_multiplies_interval_and_reads_ies() {
        let mut data = vec![0u8; 6]; // addr2
        data.extend_from_slice(&[0u8; 6]); // addr3
        data.extend_from_slice(&0u16.to_le_bytes()); // seqctrl
        data.extend_from_slice(&1234u64.to_le_bytes()); // timestamp
        data.extend_from_slice(&100u16.to_le_bytes()); // beacon interval
        data.extend_from_slice(&0x0411u16.to_le_bytes()); // capability
        data.extend_from_slice(&[0, 2, b'h', b'i']); // ssid ie

        let mut cur = ByteCursor::new(&data);
        let body = parse_mgmt(MGMT_BEACON, &mut cur).unwrap();
        match body.fixed_params {
            Some(FixedParams::ProbeOrBeaconResp { beacon_int, .. }) => {
                assert_eq!(beacon_int, 100 * 1024);
            }
            other => panic!("expected ProbeOrBeaconResp, got {:?}", other),
        }
        assert_eq!(body.info_elements.len(), 1);
    }

    #[test]
    fn atim_stops_before_fixed_params_and_ies() {
        let mut data = vec![0u8; 6];
        data.extend_from_slice(&[0u8; 6]);
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&[0xDE, 0xAD]); // would be garbage fixed-params/ie

        let mut cur = ByteCursor::new(&data);
        let body = parse_mgmt(MGMT_ATIM, &mut cur).unwrap();
        assert!(body.fixed_params.is_none());
        assert!(body.info_elements.is_empty());
        assert_eq!(cur.remaining(), 2);
    }

    #[test]
    fn action_frame_consumes_trailer_as_action_element() {
        let mut data = vec![0u8; 6];
        data.extend_from_slice(&[0u8; 6]);
        data.extend_from_slice(&0u16.to_le_bytes());
        data.extend_from_slice(&[3, 1, 9, 9, 9]); // category, action, element bytes

        let mut cur = ByteCursor::new(&data);
        let body = parse_mgmt(MGMT_ACTION, &mut cur).unwrap();
        match body.fixed_params {
            Some(FixedParams::Action {
                category,
                action,
                action_element,
            }) => {
                assert_eq!(category, 3);
                assert_eq!(action, 1);
                assert_eq!(action_element, vec![9, 9, 9]);
            }
            other => panic!("expected Action, got {:?}", other),
        }
        assert!(body.info_elements.is_empty());
    }
}
