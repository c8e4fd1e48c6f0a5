//! Fixed column positions of the WWARA database extract (0-based).

pub const HEADER_LINES: usize = 2;

pub const FREQ_OUT: usize = 2; // C
pub const FREQ_IN: usize = 3; // D
pub const CITY: usize = 5; // F
pub const COVERAGE_AREA: usize = 6; // G
pub const CALL: usize = 7; // H
pub const SPONSOR: usize = 8; // I
pub const CTCSS_IN: usize = 9; // J
pub const CTCSS_OUT: usize = 10; // K
pub const DCS: usize = 11; // L
pub const WFM: usize = 14; // O
pub const NFM: usize = 15; // P
pub const DSTAR_DV: usize = 16; // Q
pub const DSTAR_DD: usize = 17; // R
pub const DMR: usize = 18; // S
pub const DMR_CC: usize = 19; // T
pub const YSF: usize = 20; // U
pub const YSF_DSC: usize = 21; // V
pub const P25: usize = 22; // W
pub const P25_PHASE2: usize = 23; // X
pub const P25_NAC: usize = 24; // Y
pub const NXDN: usize = 25; // Z
pub const NXDN_MIXED: usize = 26; // AA
pub const NXDN_RAN: usize = 27; // AB
pub const ATV: usize = 28; // AC
pub const DATV: usize = 29; // AD
pub const URL: usize = 33; // AH
pub const LATITUDE: usize = 34; // AI
pub const LONGITUDE: usize = 35; // AJ

/// Every row must reach at least this many columns.
pub const MIN_COLUMNS: usize = LONGITUDE + 1;

pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_match_spreadsheet_columns() {
        assert_eq!(column_letter(FREQ_OUT), "C");
        assert_eq!(column_letter(DATV), "AD");
        assert_eq!(column_letter(LONGITUDE), "AJ");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
    }
}
