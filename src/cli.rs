use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "unahs")]
#[command(version)]
#[command(about = "Analyze and extract HPE Active Health System (.ahs) archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  unahs dump.ahs               list records inside dump.ahs\n  \
  unahs -v dump.ahs            list records with offsets and sizes\n  \
  unahs -x dump.ahs            extract all records into ./dump\n  \
  unahs -x -d out dump.ahs     extract all records into ./out")]
pub struct Cli {
    /// AHS archive path
    #[arg(value_name = "FILE")]
    pub source: String,

    /// Extract all records from the archive
    #[arg(short = 'x', long = "extract")]
    pub extract: bool,

    /// List records (short format, the default)
    #[arg(short = 'l')]
    pub list: bool,

    /// List records verbosely
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Extract records into exdir
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<String>,

    /// Quiet mode (suppress per-record messages)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_ahs(&self) -> bool {
        self.source.ends_with(".ahs")
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    /// Destination directory for extraction: `-d` when given, otherwise
    /// the source path with its `.ahs` suffix stripped.
    pub fn output_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.extract_dir {
            return PathBuf::from(dir);
        }
        PathBuf::from(self.source.strip_suffix(".ahs").unwrap_or(&self.source))
    }
}
