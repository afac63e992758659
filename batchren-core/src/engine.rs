use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{RenameError, Result};
use crate::fs::FileSystem;
use crate::name::validate_file_name;
use crate::output::{BatchReport, RenameOutcome, RenameStatus};
use crate::resolver::{resolve_collision, Resolution, TakenNames};
use crate::transform::{Transform, TransformKind, TransformParams};

/// One file's pending rename, built when the batch reaches that file.
#[derive(Debug, Clone, Copy)]
pub struct RenameRequest<'a> {
    pub original_name: &'a str,
    pub transform: &'a Transform,
    /// Number handed to sequential numbering for this file
    pub sequence_number: u64,
}

impl RenameRequest<'_> {
    pub fn proposed_name(&self) -> String {
        self.transform
            .apply(self.original_name, self.sequence_number)
    }
}

/// Applies a transform to every file directly inside a directory.
///
/// Files are processed one at a time in listing order. A failed rename is
/// recorded in the report and the batch moves on; nothing is rolled back.
pub struct BatchRenamer<F: FileSystem> {
    fs: F,
    cancel: Option<Arc<AtomicBool>>,
}

impl<F: FileSystem> BatchRenamer<F> {
    pub fn new(fs: F) -> Self {
        Self { fs, cancel: None }
    }

    /// Stop before the next file once `flag` is set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Validate the inputs and run the batch.
    pub fn run(
        &self,
        dir: &Path,
        kind: TransformKind,
        params: TransformParams,
    ) -> Result<BatchReport> {
        self.ensure_directory(dir)?;
        let transform = Transform::new(kind, params)?;
        self.run_transform(dir, &transform)
    }

    pub fn run_transform(&self, dir: &Path, transform: &Transform) -> Result<BatchReport> {
        self.ensure_directory(dir)?;

        let started_at = chrono::Local::now().to_rfc3339();
        let names = self.fs.list_files(dir).map_err(|source| RenameError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        tracing::info!(
            directory = %dir.display(),
            transform = %transform.kind(),
            files = names.len(),
            "starting batch rename"
        );

        let mut taken = TakenNames::new(names.iter().cloned());
        let mut sequence_number = transform.params().start_number;
        let mut outcomes = Vec::with_capacity(names.len());
        let mut interrupted = false;

        for name in &names {
            if self.is_cancelled() {
                tracing::warn!(
                    processed = outcomes.len(),
                    remaining = names.len() - outcomes.len(),
                    "batch interrupted"
                );
                interrupted = true;
                break;
            }

            let request = RenameRequest {
                original_name: name,
                transform,
                sequence_number,
            };
            let outcome = self.process(dir, &request, &mut taken);

            // A skipped file already carries its number; only failures leave it unused
            if transform.kind() == TransformKind::SequentialNumber
                && outcome.status != RenameStatus::Failed
            {
                sequence_number += 1;
            }

            outcomes.push(outcome);
        }

        let report = BatchReport {
            directory: dir.to_path_buf(),
            transform: transform.kind(),
            started_at,
            interrupted,
            outcomes,
        };

        tracing::info!(
            renamed = report.renamed(),
            skipped = report.skipped(),
            failed = report.failed(),
            "batch rename finished"
        );

        Ok(report)
    }

    fn process(
        &self,
        dir: &Path,
        request: &RenameRequest<'_>,
        taken: &mut TakenNames,
    ) -> RenameOutcome {
        let original = request.original_name;
        let proposed = request.proposed_name();

        if let Err(err) = validate_file_name(&proposed) {
            tracing::warn!(file = original, error = %err, "cannot use computed name");
            return RenameOutcome::failed(original, proposed, err.to_string());
        }

        let target = if request.transform.kind().resolves_collisions() {
            let (stem, ext) = request.transform.split_candidate(&proposed);
            match resolve_collision(stem, ext, original, taken) {
                Resolution::Unchanged => {
                    tracing::debug!(file = original, "name unchanged, skipping");
                    return RenameOutcome::skipped(original);
                },
                Resolution::Available(name) => name,
            }
        } else if proposed == original {
            tracing::debug!(file = original, "name unchanged, skipping");
            return RenameOutcome::skipped(original);
        } else {
            proposed
        };

        match self.fs.rename(&dir.join(original), &dir.join(&target)) {
            Ok(()) => {
                tracing::debug!(from = original, to = %target, "renamed");
                taken.claim(target.clone());
                RenameOutcome::success(original, target)
            },
            Err(source) => {
                let detail = source.to_string();
                let err = RenameError::RenameFailed {
                    from: original.to_string(),
                    to: target.clone(),
                    source,
                };
                tracing::warn!(error = %err, "rename failed");
                RenameOutcome::failed(original, target, detail)
            },
        }
    }

    fn ensure_directory(&self, dir: &Path) -> Result<()> {
        if self.fs.is_dir(dir) {
            Ok(())
        } else {
            Err(RenameError::DirectoryNotFound(dir.to_path_buf()))
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}
