use crate::columns::{self, column_letter};
use crate::errors::AppError;
use crate::model::{AccessCodes, ModeFlags, RepeaterRow};
use csv::{ReaderBuilder, StringRecord};
use log::{trace, warn};
use std::io::Read;

/// Streams repeater rows out of a WWARA extract, header lines already skipped.
pub struct RowReader<R: Read> {
    inner: csv::StringRecordsIntoIter<R>,
    headers_seen: usize,
}

impl<R: Read> RowReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();
        Self { inner, headers_seen: 0 }
    }

    fn skip_headers(&mut self) -> Result<(), AppError> {
        while self.headers_seen < columns::HEADER_LINES {
            let Some(rec) = self.inner.next() else { return Ok(()) };
            let rec = rec?;
            self.headers_seen += 1;
            if self.headers_seen == columns::HEADER_LINES && rec.len() < columns::MIN_COLUMNS {
                warn!(
                    "column header has {} columns, expected at least {}",
                    rec.len(),
                    columns::MIN_COLUMNS
                );
            }
        }
        Ok(())
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<RepeaterRow, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.skip_headers() {
            return Some(Err(e));
        }
        let rec = match self.inner.next()? {
            Ok(r) => r,
            Err(e) => return Some(Err(e.into())),
        };
        Some(parse_row(&rec))
    }
}

fn line_of(rec: &StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

fn field<'a>(rec: &'a StringRecord, column: usize) -> Result<&'a str, AppError> {
    rec.get(column).ok_or_else(|| AppError::MalformedRow {
        line: line_of(rec),
        column,
        reason: format!(
            "row has {} columns, column {} ({}) is missing",
            rec.len(),
            column,
            column_letter(column)
        ),
    })
}

fn number(rec: &StringRecord, column: usize) -> Result<f64, AppError> {
    let raw = field(rec, column)?;
    raw.trim().parse::<f64>().map_err(|_| AppError::MalformedRow {
        line: line_of(rec),
        column,
        reason: format!("{:?} in column {} is not a number", raw, column_letter(column)),
    })
}

fn flag(rec: &StringRecord, column: usize) -> Result<bool, AppError> {
    Ok(field(rec, column)? == "Y")
}

fn code(rec: &StringRecord, column: usize) -> Result<Option<String>, AppError> {
    let s = field(rec, column)?;
    Ok(if s.is_empty() { None } else { Some(s.to_string()) })
}

/// Maps one data row onto named fields by column position.
pub fn parse_row(rec: &StringRecord) -> Result<RepeaterRow, AppError> {
    let line = line_of(rec);
    if rec.len() < columns::MIN_COLUMNS {
        return Err(AppError::MalformedRow {
            line,
            column: rec.len(),
            reason: format!(
                "row has {} columns, expected at least {} (through column {})",
                rec.len(),
                columns::MIN_COLUMNS,
                column_letter(columns::LONGITUDE)
            ),
        });
    }
    trace!("line {}: {:?}", line, rec);

    let codes = AccessCodes {
        ctcss_in: code(rec, columns::CTCSS_IN)?,
        ctcss_out: code(rec, columns::CTCSS_OUT)?,
        dcs: code(rec, columns::DCS)?,
        dmr_cc: code(rec, columns::DMR_CC)?,
        ysf_dsc: code(rec, columns::YSF_DSC)?,
        p25_nac: code(rec, columns::P25_NAC)?,
        nxdn_ran: code(rec, columns::NXDN_RAN)?,
    };

    let modes = ModeFlags {
        wfm: flag(rec, columns::WFM)?,
        nfm: flag(rec, columns::NFM)?,
        dstar_dv: flag(rec, columns::DSTAR_DV)?,
        dstar_dd: flag(rec, columns::DSTAR_DD)?,
        dmr: flag(rec, columns::DMR)?,
        ysf: flag(rec, columns::YSF)?,
        p25: flag(rec, columns::P25)?,
        p25_phase2: flag(rec, columns::P25_PHASE2)?,
        nxdn: flag(rec, columns::NXDN)?,
        nxdn_mixed: flag(rec, columns::NXDN_MIXED)?,
        atv: flag(rec, columns::ATV)?,
        datv: flag(rec, columns::DATV)?,
    };

    Ok(RepeaterRow {
        line,
        call: field(rec, columns::CALL)?.to_string(),
        sponsor: field(rec, columns::SPONSOR)?.to_string(),
        url: code(rec, columns::URL)?,
        city: field(rec, columns::CITY)?.to_string(),
        coverage_area: field(rec, columns::COVERAGE_AREA)?.to_string(),
        latitude: number(rec, columns::LATITUDE)?,
        longitude: number(rec, columns::LONGITUDE)?,
        freq_out: number(rec, columns::FREQ_OUT)?,
        freq_in: number(rec, columns::FREQ_IN)?,
        codes,
        modes,
    })
}
