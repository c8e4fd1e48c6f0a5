use crate::band;
use crate::csv_in::RowReader;
use crate::errors::AppError;
use crate::kml::KmlDocument;
use crate::labels::{code_label, mode_label};
use crate::model::{Band, Repeater, RepeaterRow};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Cursor, Read, Write};
use std::path::Path;

/// What to do with a repeater whose output frequency fits no band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnclassifiedPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConvertOptions {
    pub unclassified: UnclassifiedPolicy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub records: usize,
    pub skipped: usize,
    pub per_band: [usize; 7],
}

/// Computes the presentation fields of one row.
pub fn derive(row: RepeaterRow) -> Result<Repeater, AppError> {
    let (offset_khz, sign, band) = band::classify(&row)?;
    Ok(Repeater {
        mode_label: mode_label(&row.modes),
        code_label: code_label(&row.codes),
        offset_khz,
        sign,
        band,
        row,
    })
}

/// Derives each row and appends it to `doc`. Stops at the first row error.
pub fn convert_rows<I>(rows: I, doc: &mut KmlDocument, opts: ConvertOptions) -> Result<ConvertSummary, AppError>
where
    I: IntoIterator<Item = Result<RepeaterRow, AppError>>,
{
    let mut summary = ConvertSummary::default();
    for row in rows {
        let rep = match derive(row?) {
            Ok(r) => r,
            Err(e @ AppError::UnclassifiedBand { .. }) if opts.unclassified == UnclassifiedPolicy::Skip => {
                warn!("skipping: {}", e);
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        debug!(
            "line {} {} {:.4} -> {} offset={} sign={:?} modes={:?} codes={:?}",
            rep.row.line,
            rep.row.call,
            rep.row.freq_out,
            rep.band.folder_name(),
            rep.offset_khz,
            rep.sign,
            rep.mode_label,
            rep.code_label
        );
        doc.add(&rep);
        summary.records += 1;
        summary.per_band[rep.band.index()] += 1;
    }
    Ok(summary)
}

pub fn convert_reader<R: Read>(reader: R, opts: ConvertOptions) -> Result<(KmlDocument, ConvertSummary), AppError> {
    let mut doc = KmlDocument::new();
    let summary = convert_rows(RowReader::new(reader), &mut doc, opts)?;
    Ok((doc, summary))
}

/// Buffers a whole stream so it can be parsed after the source is drained.
pub fn buffer_input<R: Read>(mut src: R) -> Result<Cursor<Vec<u8>>, AppError> {
    let mut buf = Vec::new();
    src.read_to_end(&mut buf)
        .map_err(|e| AppError::IO(format!("read stdin: {}", e)))?;
    Ok(Cursor::new(buf))
}

/// `-` reads all of stdin up front; anything else is streamed from disk.
pub fn open_input(path: &str) -> Result<Box<dyn Read>, AppError> {
    if path == "-" {
        Ok(Box::new(buffer_input(io::stdin().lock())?))
    } else {
        let f = File::open(path).map_err(|e| AppError::IO(format!("open {}: {}", path, e)))?;
        Ok(Box::new(f))
    }
}

pub fn write_kml<W: Write>(doc: &KmlDocument, out: W, trailing_newline: bool) -> Result<(), AppError> {
    let mut w = BufWriter::new(out);
    doc.write_to(&mut w)?;
    if trailing_newline {
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

/// Writes to `out_path`, or to stdout followed by a newline.
pub fn write_output(doc: &KmlDocument, out_path: Option<&Path>) -> Result<(), AppError> {
    match out_path {
        Some(p) => {
            let f = File::create(p).map_err(|e| AppError::IO(format!("create {}: {}", p.display(), e)))?;
            write_kml(doc, f, false).map_err(|e| match e {
                AppError::IO(m) => AppError::IO(format!("write {}: {}", p.display(), m)),
                other => other,
            })
        }
        None => write_kml(doc, io::stdout().lock(), true),
    }
}

pub fn run(input: &str, output: Option<&Path>, opts: ConvertOptions) -> Result<ConvertSummary, AppError> {
    info!("Reading {}", if input == "-" { "stdin" } else { input });
    let reader = open_input(input)?;
    let (doc, summary) = convert_reader(reader, opts)?;
    write_output(&doc, output)?;
    for band in Band::ALL {
        info!("{}: {}", band.folder_name(), doc.folder(band).placemarks.len());
    }
    Ok(summary)
}
