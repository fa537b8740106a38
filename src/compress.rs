use crate::{
    config::CompressConfig,
    errors::{FileOperation, IoError},
};
use colored::Colorize;
use flate2::{write::GzEncoder, Compression};
use miette::Diagnostic;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum CompressError {
    #[error("I/O error within compress domain")]
    #[diagnostic(code(gzpack::compress::io))]
    Io(#[from] IoError),

    #[error("unable to strip prefix from directory")]
    #[diagnostic(code(gzpack::compress::strip_prefix))]
    StripPrefix {
        path: std::path::PathBuf,
        dir: std::path::PathBuf,
        source: std::path::StripPrefixError,
    },
}

const COMPRESSION_MARKER: &str = "gz";

/// A file qualifies when its name carries one of the configured suffixes and
/// is not itself a compressed artifact.
fn is_eligible(path: &Path, extensions: &[String]) -> bool {
    let Some(extension) = path.extension().map(|ext| ext.to_string_lossy()) else {
        return false;
    };

    if extension == COMPRESSION_MARKER {
        return false;
    }

    extensions.iter().any(|candidate| *candidate == extension)
}

/// Mirrors `relative` under `dest_root`, appending the compression marker to
/// the full filename ("page.html" becomes "page.html.gz").
fn marked_destination(dest_root: &Path, relative: &Path) -> PathBuf {
    let mut destination = dest_root.join(relative).into_os_string();

    destination.push(format!(".{}", COMPRESSION_MARKER));

    PathBuf::from(destination)
}

/// Walks the configured source tree and compresses every eligible file into
/// the mirrored destination path.
///
/// An absent source root is a benign condition: a notice is printed and the
/// run completes without producing artifacts.
///
/// # Errors
///
/// Returns a [`CompressError`] if directory enumeration fails or any file
/// cannot be compressed.
pub fn compress_tree(config: &CompressConfig) -> Result<(), CompressError> {
    if !config.source_root.exists() {
        println!(
            "No '{}/' folder found, skipping compression.",
            config.source_root.display()
        );

        return Ok(());
    }

    for entry in WalkDir::new(&config.source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                let path = error.path().unwrap_or_else(|| Path::new(""));

                Err(IoError::new(
                    FileOperation::Read,
                    path.to_path_buf(),
                    error.into(),
                ))?
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let full_path = entry.path();

        if !is_eligible(full_path, &config.extensions) {
            log::debug!("skipping ineligible file: {}", full_path.display());
            continue;
        }

        let relative = match full_path.strip_prefix(&config.source_root) {
            Ok(r) => r,
            Err(error) => Err(CompressError::StripPrefix {
                path: full_path.to_path_buf(),
                dir: config.source_root.to_path_buf(),
                source: error,
            })?,
        };

        let destination = marked_destination(&config.dest_root, relative);

        compress_one(full_path, &destination)?;
    }

    Ok(())
}

/// Streams the bytes of `source` through a gzip encoder into `destination`,
/// creating the destination's parent directories as needed.
///
/// A pre-existing artifact at `destination` is overwritten. Additionally,
/// this function prints a progress line identifying both paths.
///
/// # Errors
///
/// Returns a [`CompressError`] if directory creation, either file open, the
/// stream copy, or finalizing the gzip frame fails due to I/O issues.
pub fn compress_one(source: &Path, destination: &Path) -> Result<(), CompressError> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .map_err(|error| IoError::new(FileOperation::Mkdir, parent.to_path_buf(), error))?;
    }

    let mut reader = fs::File::open(source)
        .map_err(|error| IoError::new(FileOperation::Read, source.to_path_buf(), error))?;

    let writer = fs::File::create(destination)
        .map_err(|error| IoError::new(FileOperation::Write, destination.to_path_buf(), error))?;

    let mut encoder = GzEncoder::new(writer, Compression::default());

    io::copy(&mut reader, &mut encoder)
        .map_err(|error| IoError::new(FileOperation::Write, destination.to_path_buf(), error))?;

    encoder
        .finish()
        .map_err(|error| IoError::new(FileOperation::Write, destination.to_path_buf(), error))?;

    let msg = format!(
        "{} {} → {}",
        "Compressed:".green(),
        source.display(),
        destination.display()
    );

    println!("{}", &msg);

    Ok(())
}
