use anyhow::Result;
use batchren_core::{
    batch_rename_operation, BatchReport, Config, OutputFormat, RenameError, TransformKind,
    TransformParams,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::cli::{ActionArg, Cli};

/// Translate the command line into a transform, applying config defaults.
pub fn build_params(
    cli: &Cli,
    config: &Config,
) -> Result<(TransformKind, TransformParams), RenameError> {
    let defaults = &config.defaults;
    let mut params = TransformParams {
        keep_extension: defaults.keep_extension && !cli.no_keep_extension,
        case_sensitive: cli.case_sensitive,
        ..TransformParams::default()
    };

    match cli.action {
        ActionArg::Prefix => {
            params.prefix = cli.prefix.clone().unwrap_or_default();
            params.suffix = cli.suffix.clone().unwrap_or_default();
        },
        ActionArg::Replace => {
            let (Some(old), Some(new)) = (&cli.old, &cli.new) else {
                return Err(RenameError::invalid(
                    "the replace action requires --old and --new",
                ));
            };
            if new.is_empty() {
                return Err(RenameError::invalid(
                    "the replace action requires a non-empty --new (use --action remove to delete text)",
                ));
            }
            params.search_text = old.clone();
            params.replace_text = new.clone();
        },
        ActionArg::Sequence => {
            params.prefix = cli
                .prefix
                .clone()
                .unwrap_or_else(|| defaults.sequence_prefix.clone());
            params.suffix = cli.suffix.clone().unwrap_or_default();
            params.start_number = cli.start.unwrap_or(defaults.start_number);
            params.digit_width = cli.digits.unwrap_or(defaults.digit_width);
        },
        ActionArg::Remove => {
            let Some(old) = &cli.old else {
                return Err(RenameError::invalid("the remove action requires --old"));
            };
            params.search_text = old.clone();
        },
        ActionArg::Case => {
            let Some(case_type) = cli.case_type else {
                return Err(RenameError::invalid(
                    "the case action requires --case-type (lower, upper or title)",
                ));
            };
            params.case_mode = Some(case_type.into());
        },
        ActionArg::Clean => {
            params.replacement_char = cli.replace_with.clone();
        },
    }

    Ok((cli.action.into(), params))
}

pub fn handle_batch(
    cli: &Cli,
    config: &Config,
    use_color: bool,
    interrupted: Arc<AtomicBool>,
) -> Result<BatchReport> {
    let (kind, params) = build_params(cli, config)?;

    let report = batch_rename_operation(&cli.folder, kind, params, Some(interrupted))?;

    let format = cli
        .output
        .map_or_else(|| config.defaults.output_format(), OutputFormat::from);

    // Handle output based on format
    match format {
        OutputFormat::Json => {
            println!("{}", report.render(format, false));
        },
        OutputFormat::Summary | OutputFormat::Table => {
            if !cli.quiet {
                print!("{}", report.render(format, use_color));
            }
        },
    }

    if cli.quiet {
        for outcome in report.outcomes.iter().filter(|o| o.error_detail.is_some()) {
            eprintln!(
                "Failed to rename {}: {}",
                outcome.original_name,
                outcome.error_detail.as_deref().unwrap_or_default()
            );
        }
    }

    Ok(report)
}
