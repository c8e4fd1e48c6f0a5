use crate::converter::{ConvertOptions, UnclassifiedPolicy};
use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use std::io::Write;
use std::path::PathBuf;

pub struct CliArgs {
    pub input: String,
    pub output: Option<PathBuf>,
    pub skip_unclassified: bool,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: None,
            skip_unclassified: false,
            log_level: "essential".into(),
        }
    }
}

impl CliArgs {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            unclassified: if self.skip_unclassified {
                UnclassifiedPolicy::Skip
            } else {
                UnclassifiedPolicy::Abort
            },
        }
    }
}

const DESCRIPTION: &str = "\
Converts the WWARA repeater list to a Google Earth KML file.
The current list can be downloaded from www.wwara.org/DataBaseExtract.zip

If the input file is \"-\", the input CSV is read from STDIN.
If no output file is given, the output KML is written to STDOUT.

Example: rptrlist2kml -i WWARA-rptrlist.csv Repeaters.kml";

fn parse_into(
    args: &mut CliArgs,
    argv: Vec<String>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<(), i32> {
    let mut ap = ArgumentParser::new();
    ap.set_description(DESCRIPTION);
    ap.refer(&mut args.input)
        .add_option(&["-i"], Store, "CSV Input File (\"-\" for STDIN)")
        .metavar("Input")
        .required();
    ap.refer(&mut args.output)
        .add_argument("Output", StoreOption, "KML Output File");
    ap.refer(&mut args.skip_unclassified)
        .add_option(&["--skip-unclassified"], StoreTrue, "Skip repeaters outside every band instead of failing");
    ap.refer(&mut args.log_level)
        .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
    ap.parse(argv, stdout, stderr)
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    let argv: Vec<String> = std::env::args().collect();
    if let Err(code) = parse_into(&mut args, argv, &mut std::io::stdout(), &mut std::io::stderr()) {
        std::process::exit(code);
    }
    args
}
