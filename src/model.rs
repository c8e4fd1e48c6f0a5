use crate::band::BAND_TABLE;

/// Operating modes as flagged in the database, one bool per `Y`/`N` column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub wfm: bool,
    pub nfm: bool,
    pub dstar_dv: bool,
    pub dstar_dd: bool,
    pub dmr: bool,
    pub ysf: bool,
    pub p25: bool,
    pub p25_phase2: bool,
    pub nxdn: bool,
    pub nxdn_mixed: bool, // carried, never rendered
    pub atv: bool,
    pub datv: bool,
}

/// Access codes, `None` when the cell was empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessCodes {
    pub ctcss_in: Option<String>,
    pub ctcss_out: Option<String>,
    pub dcs: Option<String>,
    pub dmr_cc: Option<String>,
    pub ysf_dsc: Option<String>,
    pub p25_nac: Option<String>,
    pub nxdn_ran: Option<String>,
}

/// One parsed row, before any derived field is computed.
#[derive(Clone, Debug, PartialEq)]
pub struct RepeaterRow {
    pub line: u64,
    pub call: String,
    pub sponsor: String,
    pub url: Option<String>,
    pub city: String,
    pub coverage_area: String,
    pub latitude: f64,
    pub longitude: f64,
    pub freq_out: f64,
    pub freq_in: f64,
    pub codes: AccessCodes,
    pub modes: ModeFlags,
}

/// Amateur bands a repeater can be filed under, in folder order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    TenMeter,
    SixMeter,
    TwoMeter,
    OneTwentyFiveCm,
    SeventyCm,
    ThirtyThreeCm,
    TwentyThreeCm,
}

impl Band {
    pub const ALL: [Band; 7] = [
        Band::TenMeter,
        Band::SixMeter,
        Band::TwoMeter,
        Band::OneTwentyFiveCm,
        Band::SeventyCm,
        Band::ThirtyThreeCm,
        Band::TwentyThreeCm,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn folder_name(self) -> &'static str {
        BAND_TABLE[self.index()].folder
    }
}

/// How the measured offset compares with the band plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetSign {
    Minus,
    Plus,
    Simplex,
    Odd,
}

impl OffsetSign {
    pub fn label(self) -> &'static str {
        match self {
            OffsetSign::Minus => "-",
            OffsetSign::Plus => "+",
            OffsetSign::Simplex => "",
            OffsetSign::Odd => " Odd",
        }
    }
}

/// A row with every presentation field derived; immutable from here on.
#[derive(Clone, Debug, PartialEq)]
pub struct Repeater {
    pub row: RepeaterRow,
    pub mode_label: String,
    pub code_label: String,
    pub offset_khz: i64,
    pub sign: OffsetSign,
    pub band: Band,
}
