use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::engine::BatchRenamer;
use crate::error::Result;
use crate::fs::LocalFileSystem;
use crate::output::BatchReport;
use crate::transform::{TransformKind, TransformParams};

/// Batch rename operation on the local filesystem - returns structured data
pub fn batch_rename_operation(
    folder: &Path,
    kind: TransformKind,
    params: TransformParams,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<BatchReport> {
    let mut renamer = BatchRenamer::new(LocalFileSystem::new());
    if let Some(flag) = cancel {
        renamer = renamer.with_cancel_flag(flag);
    }
    renamer.run(folder, kind, params)
}
