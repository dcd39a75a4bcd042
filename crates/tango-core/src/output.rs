use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tango_types::Record;

/// Failing to write the dataset aborts the run
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error writing records: {0}")]
    Write(#[source] io::Error),

    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to move finished output into {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serialize records as one JSON array; non-ASCII text is written as-is
pub fn write_records<W: Write>(
    records: &[Record],
    mut writer: W,
    pretty: bool,
) -> Result<(), OutputError> {
    let encoded = if pretty {
        serde_json::to_writer_pretty(&mut writer, records)
    } else {
        serde_json::to_writer(&mut writer, records)
    };
    encoded.map_err(|e| {
        if e.is_io() {
            OutputError::Write(e.into())
        } else {
            OutputError::Serialize(e)
        }
    })?;

    writeln!(writer).map_err(OutputError::Write)?;
    writer.flush().map_err(OutputError::Write)?;
    Ok(())
}

/// Write records to `path` all at once.
///
/// Data goes to a temporary file next to the target, is synced, and is then
/// renamed over it, so the target is either the complete dataset or untouched.
pub fn write_records_to_path(
    records: &[Record],
    path: &Path,
    pretty: bool,
) -> Result<(), OutputError> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(io_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
    write_records(records, io::BufWriter::new(tmp.as_file_mut()), pretty).map_err(|e| match e {
        OutputError::Write(source) => io_err(source),
        other => other,
    })?;
    tmp.as_file().sync_all().map_err(io_err)?;

    tmp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
