//! Pure subfield decoders: raw integers to named-field records.
//!
//! Every function here is total given an integer input of the declared
//! width — no cursor, no error path.

use crate::bits::{flags_list, least, mid, most, FlagTable};

/// Frame Control flag bits (byte 1 of the frame control field). Std 8.2.4.1.1.
pub static FC_FIELDS: FlagTable = &[
    ("td", 1 << 0),
    ("fd", 1 << 1),
    ("mf", 1 << 2),
    ("r", 1 << 3),
    ("pm", 1 << 4),
    ("md", 1 << 5),
    ("pf", 1 << 6),
    ("o", 1 << 7),
];

/// Decoded Frame Control flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct FrameControlFlags {
    /// To DS.
    pub td: bool,
    /// From DS.
    pub fd: bool,
    /// More fragments.
    pub mf: bool,
    /// Retry.
    pub r: bool,
    /// Power management.
    pub pm: bool,
    /// More data.
    pub md: bool,
    /// Protected frame.
    pub pf: bool,
    /// Order.
    pub o: bool,
}

/// Decodes the frame control flags byte. Std 8.2.4.1.1.
pub fn frame_control_flags(b: u8) -> FrameControlFlags {
    let names = flags_list(FC_FIELDS, b as u32);
    let has = |n: &str| names.contains(&n);
    FrameControlFlags {
        td: has("td"),
        fd: has("fd"),
        mf: has("mf"),
        r: has("r"),
        pm: has("pm"),
        md: has("md"),
        pf: has("pf"),
        o: has("o"),
    }
}

/// A Sequence Control field. Std 8.2.4.4.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeqControl {
    /// Fragment number, 4 bits.
    pub fragno: u8,
    /// Sequence number, 12 bits.
    pub seqno: u16,
}

const SEQCTRL_DIVIDER: u32 = 4;

/// Decodes a Sequence Control field.
pub fn sequence_control(v: u16) -> SeqControl {
    SeqControl {
        fragno: least(SEQCTRL_DIVIDER, v as u32) as u8,
        seqno: most(SEQCTRL_DIVIDER, v as u32) as u16,
    }
}

const QOS_TID_END: u32 = 4;
const QOS_ACK_POLICY_START: u32 = 5;
const QOS_ACK_POLICY_LEN: u32 = 2;

/// A QoS Control field. Std 8.2.4.5.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QosControl {
    /// Traffic identifier.
    pub tid: u8,
    /// End of service period.
    pub eosp: bool,
    /// Ack policy, 2 bits.
    pub ack_policy: u8,
    /// A-MSDU present.
    pub a_msdu: bool,
    /// The most significant byte, recorded verbatim. Its meaning varies by
    /// sender role and subtype (Std Table 8-4); full disambiguation is not
    /// performed.
    pub txop: u8,
}

/// Decodes a QoS Control field from its (lsb, msb) byte pair.
pub fn qos_control((lsb, msb): (u8, u8)) -> QosControl {
    QosControl {
        tid: least(QOS_TID_END, lsb as u32) as u8,
        eosp: (lsb & (1 << 4)) != 0,
        ack_policy: (mid(QOS_ACK_POLICY_START, QOS_ACK_POLICY_LEN, lsb as u32)
            >> QOS_ACK_POLICY_START) as u8,
        a_msdu: (lsb & (1 << 7)) != 0,
        txop: msb,
    }
}

const QOS_AP_PS_BUFFER_HIGH_PRI_START: u32 = 2;
const QOS_AP_PS_BUFFER_HIGH_PRI_LEN: u32 = 2;
const QOS_AP_PS_BUFFER_AP_BUFF_START: u32 = 4;

/// The AP-PS buffer-state variant of the QoS Control high byte. Std Table 8-4.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QosApPsBuffer {
    /// Reserved bit.
    pub rsrv: bool,
    /// Buffer state indicated.
    pub buffer_state_indicated: bool,
    /// High-priority buffered AC, 2 bits.
    pub high_pri: u8,
    /// AP-buffered traffic count, 4 bits.
    pub ap_buffered: u8,
}

/// Decodes the AP-PS buffer-state variant of a QoS Control high byte.
pub fn qos_ap_ps_buffer(v: u8) -> QosApPsBuffer {
    QosApPsBuffer {
        rsrv: (v & (1 << 0)) != 0,
        buffer_state_indicated: (v & (1 << 1)) != 0,
        high_pri: (mid(
            QOS_AP_PS_BUFFER_HIGH_PRI_START,
            QOS_AP_PS_BUFFER_HIGH_PRI_LEN,
            v as u32,
        ) >> QOS_AP_PS_BUFFER_HIGH_PRI_START) as u8,
        ap_buffered: most(QOS_AP_PS_BUFFER_AP_BUFF_START, v as u32) as u8,
    }
}

const QOS_MESH_RSRV_START: u32 = 3;

/// The Mesh variant of the QoS Control high byte. Std Table 8-4.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QosMesh {
    /// Mesh control present.
    pub mesh_control: bool,
    /// Mesh power-save level.
    pub pwr_save_lvl: bool,
    /// RSPI.
    pub rspi: bool,
    /// Reserved, 5 bits.
    pub high_pri: u8,
}

/// Decodes the Mesh variant of a QoS Control high byte.
pub fn qos_mesh(v: u8) -> QosMesh {
    QosMesh {
        mesh_control: (v & (1 << 0)) != 0,
        pwr_save_lvl: (v & (1 << 1)) != 0,
        rspi: (v & (1 << 2)) != 0,
        high_pri: most(QOS_MESH_RSRV_START, v as u32) as u8,
    }
}

/// HT Control flag bits. Std 8.2.4.6.
pub static HTC_FIELDS: FlagTable = &[
    ("lac-rsrv", 1 << 0),
    ("lac-trq", 1 << 1),
    ("lac-mai-mrq", 1 << 2),
    ("ndp-announcement", 1 << 24),
    ("ac-constraint", 1 << 30),
    ("rdg-more-ppdu", 1 << 31),
];

const HTC_LAC_MAI_MSI_START: u32 = 3;
const HTC_LAC_MAI_MSI_LEN: u32 = 3;
const HTC_LAC_MFSI_START: u32 = 6;
const HTC_LAC_MFSI_LEN: u32 = 3;
const HTC_LAC_MFBASEL_CMD_START: u32 = 9;
const HTC_LAC_MFBASEL_CMD_LEN: u32 = 3;
const HTC_LAC_MFBASEL_DATA_START: u32 = 12;
const HTC_LAC_MFBASEL_DATA_LEN: u32 = 4;
const HTC_CALIBRATION_POS_START: u32 = 16;
const HTC_CALIBRATION_POS_LEN: u32 = 2;
const HTC_CALIBRATION_SEQ_START: u32 = 18;
const HTC_CALIBRATION_SEQ_LEN: u32 = 2;
const HTC_RSRV1_START: u32 = 20;
const HTC_RSRV1_LEN: u32 = 2;
const HTC_CSI_STEERING_START: u32 = 22;
const HTC_CSI_STEERING_LEN: u32 = 2;
const HTC_RSRV2_START: u32 = 25;
const HTC_RSRV2_LEN: u32 = 5;

fn bits_at(start: u32, len: u32, v: u32) -> u32 {
    mid(start, len, v) >> start
}

/// A decoded HT Control field. Std 8.2.4.6.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HtControl {
    /// Link Adaptation Control reserved bit.
    pub lac_rsrv: bool,
    /// Link Adaptation Control TRQ.
    pub lac_trq: bool,
    /// Link Adaptation Control MAI MRQ.
    pub lac_mai_mrq: bool,
    /// NDP announcement.
    pub ndp_announcement: bool,
    /// AC constraint.
    pub ac_constraint: bool,
    /// RDG / More PPDU.
    pub rdg_more_ppdu: bool,
    /// Link Adaptation Control MAI MSI, 3 bits.
    pub lac_mai_msi: u8,
    /// Link Adaptation Control MFSI, 3 bits.
    pub lac_mfsi: u8,
    /// Link Adaptation Control MFB/ASEL command, 3 bits.
    pub lac_mfbasel_cmd: u8,
    /// Link Adaptation Control MFB/ASEL data, 4 bits.
    pub lac_mfbasel_data: u8,
    /// Calibration position, 2 bits.
    pub calibration_pos: u8,
    /// Calibration sequence, 2 bits.
    pub calibration_seq: u8,
    /// Reserved, 2 bits.
    pub rsrv1: u8,
    /// CSI/steering, 2 bits.
    pub csi_steering: u8,
    /// Reserved, 5 bits.
    pub rsrv2: u8,
}

/// Decodes a 4-octet HT Control field.
pub fn ht_control(v: u32) -> HtControl {
    let names = flags_list(HTC_FIELDS, v);
    let has = |n: &str| names.contains(&n);
    HtControl {
        lac_rsrv: has("lac-rsrv"),
        lac_trq: has("lac-trq"),
        lac_mai_mrq: has("lac-mai-mrq"),
        ndp_announcement: has("ndp-announcement"),
        ac_constraint: has("ac-constraint"),
        rdg_more_ppdu: has("rdg-more-ppdu"),
        lac_mai_msi: bits_at(HTC_LAC_MAI_MSI_START, HTC_LAC_MAI_MSI_LEN, v) as u8,
        lac_mfsi: bits_at(HTC_LAC_MFSI_START, HTC_LAC_MFSI_LEN, v) as u8,
        lac_mfbasel_cmd: bits_at(HTC_LAC_MFBASEL_CMD_START, HTC_LAC_MFBASEL_CMD_LEN, v) as u8,
        lac_mfbasel_data: bits_at(HTC_LAC_MFBASEL_DATA_START, HTC_LAC_MFBASEL_DATA_LEN, v) as u8,
        calibration_pos: bits_at(HTC_CALIBRATION_POS_START, HTC_CALIBRATION_POS_LEN, v) as u8,
        calibration_seq: bits_at(HTC_CALIBRATION_SEQ_START, HTC_CALIBRATION_SEQ_LEN, v) as u8,
        rsrv1: bits_at(HTC_RSRV1_START, HTC_RSRV1_LEN, v) as u8,
        csi_steering: bits_at(HTC_CSI_STEERING_START, HTC_CSI_STEERING_LEN, v) as u8,
        rsrv2: bits_at(HTC_RSRV2_START, HTC_RSRV2_LEN, v) as u8,
    }
}

/// BA/BAR Control type, resolved from the (multi-tid, compressed-bm) bit pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaType {
    /// Basic BlockAck(Req). Std 8.3.1.8.2 / 8.3.1.9.2.
    Basic,
    /// Compressed BlockAck(Req). Std 8.3.1.8.3 / 8.3.1.9.3.
    Compressed,
    /// Reserved combination.
    Reserved,
    /// Multi-TID BlockAck(Req). Std 8.3.1.8.4 / 8.3.1.9.4.
    MultiTid,
}

/// Flag bits shared by BA Control and BAR Control. Std Table 8.16.
pub static BACTRL_FIELDS: FlagTable = &[
    ("ackpolicy", 1 << 0),
    ("multi-tid", 1 << 1),
    ("compressed-bm", 1 << 2),
];

const BACTRL_RSRV_START: u32 = 3;
const BACTRL_RSRV_LEN: u32 = 9;
const BACTRL_TID_INFO_START: u32 = 12;

/// A decoded BA or BAR Control field, before its `ba_type`/`bar_type` is
/// resolved by the caller from `multi_tid`/`compressed_bm`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BaControl {
    /// Ack policy.
    pub ackpolicy: bool,
    /// Multi-TID.
    pub multi_tid: bool,
    /// Compressed bitmap.
    pub compressed_bm: bool,
    /// Reserved, 9 bits.
    pub rsrv: u16,
    /// TID info, 4 bits.
    pub tid_info: u8,
}

/// Decodes a BA or BAR Control field.
pub fn ba_control(v: u16) -> BaControl {
    let names = flags_list(BACTRL_FIELDS, v as u32);
    let has = |n: &str| names.contains(&n);
    BaControl {
        ackpolicy: has("ackpolicy"),
        multi_tid: has("multi-tid"),
        compressed_bm: has("compressed-bm"),
        rsrv: (mid(BACTRL_RSRV_START, BACTRL_RSRV_LEN, v as u32) >> BACTRL_RSRV_START) as u16,
        tid_info: most(BACTRL_TID_INFO_START, v as u32) as u8,
    }
}

const BACTRL_PERTID_DIVIDER: u32 = 12;

/// A decoded Per-TID Info subfield plus its accompanying Sequence Control.
/// Std Fig 8-22, 8-23.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PerTid {
    /// Sequence control carried in the second word.
    pub seq_control: SeqControl,
    /// Reserved, 12 bits.
    pub pertid_rsrv: u16,
    /// TID, 4 bits.
    pub pertid_tid: u8,
}

/// Decodes a (word0, word1) Per-TID Info + Sequence Control pair.
pub fn per_tid((w0, w1): (u16, u16)) -> PerTid {
    PerTid {
        seq_control: sequence_control(w1),
        pertid_rsrv: least(BACTRL_PERTID_DIVIDER, w0 as u32) as u16,
        pertid_tid: most(BACTRL_PERTID_DIVIDER, w0 as u32) as u8,
    }
}

/// Capability Info flag bits. Std 8.4.1.4.
pub static CAP_INFO: FlagTable = &[
    ("ess", 1 << 0),
    ("ibss", 1 << 1),
    ("cfpollable", 1 << 2),
    ("cf-poll-req", 1 << 3),
    ("privacy", 1 << 4),
    ("short-pre", 1 << 5),
    ("pbcc", 1 << 6),
    ("ch-agility", 1 << 7),
    ("spec-mgmt", 1 << 8),
    ("qos", 1 << 9),
    ("time-slot", 1 << 10),
    ("apsd", 1 << 11),
    ("rdo-meas", 1 << 12),
    ("dfss-ofdm", 1 << 13),
    ("delayed-ba", 1 << 14),
    ("immediate-ba", 1 << 15),
];

/// Decoded Capability Information flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct CapabilityInfo {
    pub ess: bool,
    pub ibss: bool,
    pub cfpollable: bool,
    pub cf_poll_req: bool,
    pub privacy: bool,
    pub short_pre: bool,
    pub pbcc: bool,
    pub ch_agility: bool,
    pub spec_mgmt: bool,
    pub qos: bool,
    pub time_slot: bool,
    pub apsd: bool,
    pub rdo_meas: bool,
    pub dfss_ofdm: bool,
    pub delayed_ba: bool,
    pub immediate_ba: bool,
}

/// Decodes a Capability Information field.
pub fn capability_info(v: u16) -> CapabilityInfo {
    let names = flags_list(CAP_INFO, v as u32);
    let has = |n: &str| names.contains(&n);
    CapabilityInfo {
        ess: has("ess"),
        ibss: has("ibss"),
        cfpollable: has("cfpollable"),
        cf_poll_req: has("cf-poll-req"),
        privacy: has("privacy"),
        short_pre: has("short-pre"),
        pbcc: has("pbcc"),
        ch_agility: has("ch-agility"),
        spec_mgmt: has("spec-mgmt"),
        qos: has("qos"),
        time_slot: has("time-slot"),
        apsd: has("apsd"),
        rdo_meas: has("rdo-meas"),
        dfss_ofdm: has("dfss-ofdm"),
        delayed_ba: has("delayed-ba"),
        immediate_ba: has("immediate-ba"),
    }
}
