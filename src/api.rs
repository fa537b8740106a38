use crate::{compress, config::CompressConfig};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GzpackError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Compress(#[from] compress::CompressError),
}

/// Compresses every eligible asset under the configured source root into a
/// gzip artifact at the mirrored destination path.
///
/// A missing source root is reported on the console and treated as a
/// successful run with no artifacts.
///
/// # Errors
///
/// Returns a [`GzpackError`] if:
///
/// - The source tree cannot be enumerated or a source file cannot be read.
/// - A destination directory or artifact cannot be created or written to.
pub fn compress_assets(config: &CompressConfig) -> Result<(), GzpackError> {
    log::debug!(
        "compressing assets from '{}' into '{}'",
        config.source_root.display(),
        config.dest_root.display()
    );

    compress::compress_tree(config)?;

    Ok(())
}
