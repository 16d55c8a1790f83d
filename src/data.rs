//! Data frame body parsing. Std 8.3.2.

use crate::cursor::ByteCursor;
use crate::dispatch::{DATA_QOS_CFACK_CFPOLL, DATA_QOS_DATA, DATA_RSRV_13};
use crate::error::Result;
use crate::subfield::{qos_control, sequence_control, QosControl, SeqControl};

/// A decoded Data frame body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataBody {
    pub addr2: String,
    pub addr3: String,
    pub seq_control: SeqControl,
    pub addr4: Option<String>,
    pub qos: Option<QosControl>,
}

fn read_addr(cur: &mut ByteCursor) -> Result<String> {
    Ok(crate::format_mac(cur.read_bytes(6)?))
}

/// Parses a Data frame body. Std Figure 8-30.
///
/// `to_ds`/`from_ds` come from the already-decoded Frame Control flags:
/// Address 4 is present only when both are set.
pub fn parse_data(subtype: u8, to_ds: bool, from_ds: bool, cur: &mut ByteCursor) -> Result<DataBody> {
    let addr2 = read_addr(cur)?;
    let addr3 = read_addr(cur)?;
    let seq_control = sequence_control(cur.read_u16_le()?);

    let addr4 = if to_ds && from_ds {
        Some(read_addr(cur)?)
    } else {
        None
    };

    let qos = if (DATA_QOS_DATA..=DATA_QOS_CFACK_CFPOLL).contains(&subtype) && subtype != DATA_RSRV_13 {
        let lsb = cur.read_u8()?;
        let msb = cur.read_u8()?;
        Some(qos_control((lsb, msb)))
    } else {
        None
    };

    Ok(DataBody {
        addr2,
        addr3,
        seq_control,
        addr4,
        qos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{DATA_DATA, DATA_QOS_DATA, DATA_RSRV_13};

    fn base() -> Vec<u8> {
        let mut data = vec![0x11u8; 6]; // addr2
        data.extend_from_slice(&[0x22u8; 6]); // addr3
        data.extend_from_slice(&0x0001u16.to_le_bytes()); // seqctrl
        data
    }

    #[test]
    fn plain_data_has_no_addr4_or_qos() {
        let data = base();
        let mut cur = ByteCursor::new(&data);
        let body = parse_data(DATA_DATA, false, false, &mut cur).unwrap();
        assert!(body.addr4.is_none());
        assert!(body.qos.is_none());
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn to_and_from_ds_adds_addr4() {
        let mut data = base();
        data.extend_from_slice(&[0x33u8; 6]);
        let mut cur = ByteCursor::new(&data);
        let body = parse_data(DATA_DATA, true, true, &mut cur).unwrap();
        assert_eq!(body.addr4.unwrap(), "33:33:33:33:33:33");
    }

    #[test]
    fn qos_subtype_reads_qos_control() {
        let mut data = base();
        data.extend_from_slice(&[0x05, 0x00]);
        let mut cur = ByteCursor::new(&data);
        let body = parse_data(DATA_QOS_DATA, false, false, &mut cur).unwrap();
        assert_eq!(body.qos.unwrap().tid, 5);
    }

    #[test]
    fn reserved_subtype_13_does_not_read_qos() {
        let data = base();
        let mut cur = ByteCursor::new(&data);
        let body = parse_data(DATA_RSRV_13, false, false, &mut cur).unwrap();
        assert!(body.qos.is_none());
        assert_eq!(cur.remaining(), 0);
    }
}
