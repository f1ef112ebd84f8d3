//! Trajectory export
//!
//! Serializes a simulated trajectory to the row-oriented CSV consumed by
//! plotting tools and notebooks, and to JSON for later reloading.
//!
//! The CSV contract is fixed: header `t_cumulative,R_26_10,R_36_10,status`,
//! one row per record, time in Myr, status one of START/BURIAL/EXPOSURE.
//! Consumers rely on this exact column order and the non-decreasing time
//! column.

use crate::simulation::Trajectory;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// CSV header row, in the column order consumers depend on
pub const CSV_HEADER: &str = "t_cumulative,R_26_10,R_36_10,status";

/// Write a trajectory as CSV to any writer
///
/// # Errors
/// Returns `ExportError::WriteFailed` carrying the underlying I/O error
/// message unchanged.
pub fn write_csv<W: Write>(writer: &mut W, trajectory: &Trajectory) -> Result<(), ExportError> {
    writeln!(writer, "{CSV_HEADER}").map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    for record in trajectory {
        writeln!(
            writer,
            "{},{},{},{}",
            record.t_cumulative.to_megayears().value(),
            record.r1.value(),
            record.r2.value(),
            record.status
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    Ok(())
}

/// Write a trajectory as CSV to a file path
///
/// # Errors
/// Returns `ExportError::WriteFailed` if the file cannot be created or
/// written.
pub fn write_csv_to_path<P: AsRef<Path>>(
    path: P,
    trajectory: &Trajectory,
) -> Result<(), ExportError> {
    let mut file =
        fs::File::create(&path).map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    write_csv(&mut file, trajectory)?;

    info!(
        rows = trajectory.len(),
        path = %path.as_ref().display(),
        "wrote trajectory CSV"
    );
    Ok(())
}

/// Save a trajectory as pretty-printed JSON
///
/// # Errors
/// Returns error if the trajectory cannot be serialized or the file cannot
/// be written
pub fn save_json<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> Result<(), ExportError> {
    let contents = serde_json::to_string_pretty(trajectory)
        .map_err(|e| ExportError::SerializeFailed(e.to_string()))?;

    fs::write(path, contents).map_err(|e| ExportError::SaveFailed(e.to_string()))?;

    Ok(())
}

/// Load a previously saved JSON trajectory
///
/// # Errors
/// Returns error if the file cannot be read or parsed
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Trajectory, ExportError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ExportError::LoadFailed(e.to_string()))?;

    let trajectory: Trajectory =
        serde_json::from_str(&contents).map_err(|e| ExportError::ParseFailed(e.to_string()))?;

    Ok(trajectory)
}

/// Errors that can occur while exporting or reloading trajectories
#[derive(Debug)]
pub enum ExportError {
    /// Failed to write CSV output
    WriteFailed(String),
    /// Failed to serialize trajectory
    SerializeFailed(String),
    /// Failed to save file
    SaveFailed(String),
    /// Failed to load file
    LoadFailed(String),
    /// Failed to parse file contents
    ParseFailed(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::WriteFailed(msg) => write!(f, "Failed to write: {msg}"),
            ExportError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            ExportError::SaveFailed(msg) => write!(f, "Failed to save: {msg}"),
            ExportError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            ExportError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
