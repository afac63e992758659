#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod engine;
pub mod error;
pub mod fs;
pub mod name;
pub mod operations;
pub mod output;
pub mod resolver;
pub mod transform;

pub use config::Config;
pub use engine::{BatchRenamer, RenameRequest};
pub use error::RenameError;
pub use fs::{detect_case_insensitive_fs, FileSystem, LocalFileSystem};
pub use name::{split_extension, validate_file_name, with_counter};
pub use operations::batch_rename_operation;
pub use output::{
    BatchReport, OutputFormat, OutputFormatter, RenameOutcome, RenameStatus,
};
pub use resolver::{resolve_collision, Resolution, TakenNames};
pub use transform::{
    apply_transform, CaseMode, Transform, TransformKind, TransformParams,
};
