use clap::Parser;
use std::path::PathBuf;

use super::types::{ActionArg, CaseTypeArg, OutputFormatArg};

/// Batch rename the files in a directory
#[derive(Parser, Debug)]
#[command(name = "batchren")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose files are renamed (not recursive)
    pub folder: PathBuf,

    /// Renaming action to apply
    #[arg(long, value_enum)]
    pub action: ActionArg,

    /// Prefix to add (prefix, sequence)
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Suffix to add before the extension (prefix, sequence)
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Text to search for (replace, remove)
    #[arg(long, allow_hyphen_values = true)]
    pub old: Option<String>,

    /// Replacement text (replace)
    #[arg(long, allow_hyphen_values = true)]
    pub new: Option<String>,

    /// Match --old case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// First sequence number [default: 1]
    #[arg(long)]
    pub start: Option<u64>,

    /// Zero-padded width of sequence numbers [default: 3]
    #[arg(long)]
    pub digits: Option<usize>,

    /// Case to convert to (case)
    #[arg(long, value_enum)]
    pub case_type: Option<CaseTypeArg>,

    /// Text that replaces each special character (clean)
    #[arg(long, default_value = "", hide_default_value = true)]
    pub replace_with: String,

    /// Treat the extension as part of the name (prefix, sequence)
    #[arg(long)]
    pub no_keep_extension: bool,

    /// Output format for the report
    #[arg(long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
