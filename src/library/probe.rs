//! MP3 validation and duration lookup.
//!
//! Both the catalog (on import) and the coordinator (on play) go through
//! [`MetadataReader`], so tests can swap the disk for a table.

use std::path::Path;
use std::time::Duration;

use lofty::file::{AudioFile, FileType, TaggedFileExt};
use lofty::probe::Probe;

use crate::error::{PlayerError, Result};

pub trait MetadataReader: Send {
    /// Return the playing time of the MP3 at `path`, or `InvalidFile`.
    fn read_duration(&self, path: &Path) -> Result<Duration>;
}

/// Reads real files with `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyReader;

impl MetadataReader for LoftyReader {
    fn read_duration(&self, path: &Path) -> Result<Duration> {
        let probe = Probe::open(path).map_err(|e| PlayerError::invalid_file(path, e))?;
        // Trust the content over the extension: a renamed FLAC is not an MP3.
        let probe = probe
            .guess_file_type()
            .map_err(|e| PlayerError::invalid_file(path, e))?;
        let tagged = probe
            .read()
            .map_err(|e| PlayerError::invalid_file(path, e))?;

        if tagged.file_type() != FileType::Mpeg {
            return Err(PlayerError::invalid_file(
                path,
                format!("not an MP3 ({:?})", tagged.file_type()),
            ));
        }

        Ok(tagged.properties().duration())
    }
}
