use crate::assemble_notes::{merge_bags, write_document, ReleaseUrls, VersionHeading};
use crate::error::{MergeError, Result};
use crate::parse_notes::{parse_fragment, parse_output_doc};
use crate::utils::read_file;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

pub struct MergeInputs {
    pub output: PathBuf,
    pub binary_notes: PathBuf,
    pub extra_notes: PathBuf,
}

impl MergeInputs {
    /// Every input must be an existing regular file.
    pub fn validate(&self) -> Result<()> {
        check_file(&self.binary_notes, "is not a valid binary list file")?;
        check_file(&self.extra_notes, "is not a valid extra notes file")?;
        check_file(&self.output, "is not a valid output file")?;
        Ok(())
    }
}

fn check_file(path: &Path, reason: &str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(MergeError::InvalidInput {
            path: path.to_owned(),
            reason: reason.to_owned(),
        })
    }
}

/// Merges the notes of the fragments into the output document and returns
/// the new document, stamped with `version` and `date`.
pub fn merge_notes(
    inputs: &MergeInputs,
    version: &str,
    date: NaiveDate,
    urls: &ReleaseUrls,
) -> Result<String> {
    inputs.validate()?;

    let output = read_file(&inputs.output)?;
    let binary_notes = read_file(&inputs.binary_notes)?;
    let extra_notes = read_file(&inputs.extra_notes)?;

    info!("start parsing file {}", inputs.output.display());
    let target = parse_output_doc(&output, version)?;
    info!("start parsing file {}", inputs.binary_notes.display());
    let binary_notes = parse_fragment(&binary_notes);
    info!("start parsing file {}", inputs.extra_notes.display());
    let extra_notes = parse_fragment(&extra_notes);

    let bag = merge_bags(target, binary_notes, extra_notes);
    if bag.upcoming.is_empty() {
        warn!("no release notes found for version {}", version);
    }
    let heading = VersionHeading {
        version,
        date,
        urls,
    };
    Ok(write_document(&bag, &heading))
}

/// Replaces `path` with `content`, going through a temporary file next to it.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| MergeError::io(dir, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| MergeError::io(path, e))?;
    file.persist(path)
        .map_err(|e| MergeError::io(path, e.error))?;

    info!("wrote {}", path.display());
    Ok(())
}
