use crate::errors::AppError;
use crate::model::{Band, OffsetSign, RepeaterRow};

pub struct BandPlan {
    pub band: Band,
    pub low_mhz: f64,
    pub high_mhz: f64,
    pub offset_khz: i64,
    pub folder: &'static str,
}

/// Closed ranges, disjoint, in folder order.
pub const BAND_TABLE: [BandPlan; 7] = [
    BandPlan { band: Band::TenMeter, low_mhz: 28.0, high_mhz: 29.7, offset_khz: 100, folder: "10M Repeaters" },
    BandPlan { band: Band::SixMeter, low_mhz: 50.0, high_mhz: 54.0, offset_khz: 1700, folder: "6M Repeaters" },
    BandPlan { band: Band::TwoMeter, low_mhz: 144.0, high_mhz: 148.0, offset_khz: 600, folder: "2M Repeaters" },
    BandPlan { band: Band::OneTwentyFiveCm, low_mhz: 222.0, high_mhz: 225.0, offset_khz: 1600, folder: "1.25M Repeaters" },
    BandPlan { band: Band::SeventyCm, low_mhz: 420.0, high_mhz: 450.0, offset_khz: 5000, folder: "70CM Repeaters" },
    BandPlan { band: Band::ThirtyThreeCm, low_mhz: 902.0, high_mhz: 928.0, offset_khz: 25000, folder: "33CM Repeaters" },
    BandPlan { band: Band::TwentyThreeCm, low_mhz: 1240.0, high_mhz: 1300.0, offset_khz: 20000, folder: "23CM Repeaters" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Classified(Band),
    Unclassified,
}

/// Input minus output in kHz. Each side is scaled then truncated toward zero
/// before subtracting so results match the published list exactly.
pub fn offset_khz(freq_in: f64, freq_out: f64) -> i64 {
    (freq_in * 1000.0) as i64 - (freq_out * 1000.0) as i64
}

pub fn classify_freq(freq_out: f64) -> Classification {
    BAND_TABLE
        .iter()
        .find(|p| freq_out >= p.low_mhz && freq_out <= p.high_mhz)
        .map(|p| Classification::Classified(p.band))
        .unwrap_or(Classification::Unclassified)
}

pub fn offset_sign(band: Band, offset: i64) -> OffsetSign {
    let expected = BAND_TABLE[band.index()].offset_khz;
    match offset {
        0 => OffsetSign::Simplex,
        o if o == -expected => OffsetSign::Minus,
        o if o == expected => OffsetSign::Plus,
        _ => OffsetSign::Odd,
    }
}

/// Offset, sign and band for one row, or `UnclassifiedBand` when the output
/// frequency sits outside every range of the table.
pub fn classify(row: &RepeaterRow) -> Result<(i64, OffsetSign, Band), AppError> {
    let offset = offset_khz(row.freq_in, row.freq_out);
    match classify_freq(row.freq_out) {
        Classification::Classified(band) => Ok((offset, offset_sign(band, offset), band)),
        Classification::Unclassified => Err(AppError::UnclassifiedBand {
            line: row.line,
            call: row.call.clone(),
            freq: row.freq_out,
        }),
    }
}
