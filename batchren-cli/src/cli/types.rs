use batchren_core::{CaseMode, OutputFormat, TransformKind};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    /// Add a prefix and/or suffix
    Prefix,
    /// Replace text (needs --old and --new)
    Replace,
    /// Number files sequentially
    Sequence,
    /// Remove text (needs --old)
    Remove,
    /// Change case (needs --case-type)
    Case,
    /// Strip special characters
    Clean,
}

impl From<ActionArg> for TransformKind {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Prefix => Self::AddAffix,
            ActionArg::Replace => Self::ReplaceText,
            ActionArg::Sequence => Self::SequentialNumber,
            ActionArg::Remove => Self::RemoveText,
            ActionArg::Case => Self::ChangeCase,
            ActionArg::Clean => Self::StripSpecialChars,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseTypeArg {
    Lower,
    Upper,
    Title,
}

impl From<CaseTypeArg> for CaseMode {
    fn from(arg: CaseTypeArg) -> Self {
        match arg {
            CaseTypeArg::Lower => Self::Lower,
            CaseTypeArg::Upper => Self::Upper,
            CaseTypeArg::Title => Self::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Summary,
    Json,
    Table,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Summary => Self::Summary,
            OutputFormatArg::Json => Self::Json,
            OutputFormatArg::Table => Self::Table,
        }
    }
}
