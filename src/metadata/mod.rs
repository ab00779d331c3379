//! Audio file metadata reading.
//!
//! Uses the lofty crate for format-independent metadata access.
//! Supports MP3, FLAC, OGG, M4A, and WAV files.
//!
//! Tags are read once per selected file and sent along with the upload;
//! the gateway stores them, so nothing is ever written back to the file.
//! Unreadable files degrade to the file name as title.

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::Accessor;
use std::path::{Path, PathBuf};

/// Tag reading failure for a specific file
#[derive(Debug, thiserror::Error)]
#[error("failed to read tags from {path}: {message}")]
pub struct MetadataError {
    pub path: PathBuf,
    pub message: String,
}

impl MetadataError {
    fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Track metadata as read from a local audio file.
///
/// Missing tags are empty strings; display fallbacks are applied at the
/// rendering edge, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: u64,
    pub track_number: Option<u32>,
}

/// Read tags from an audio file.
///
/// Fails if the file can't be opened or isn't a recognized audio format.
pub fn read(path: &Path) -> Result<TrackMetadata, MetadataError> {
    // Probe the file to determine format and read tags
    let tagged_file = Probe::open(path)
        .map_err(|e| MetadataError::new(path, format!("failed to open file: {e}")))?
        .read()
        .map_err(|e| MetadataError::new(path, format!("failed to read metadata: {e}")))?;

    // Get the primary tag, or fall back to the first available tag
    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag());

    let title = tag
        .and_then(|t| t.title().map(|s| s.to_string()))
        .unwrap_or_default();

    let artist = tag
        .and_then(|t| t.artist().map(|s| s.to_string()))
        .unwrap_or_default();

    let album = tag
        .and_then(|t| t.album().map(|s| s.to_string()))
        .unwrap_or_default();

    let track_number = tag.and_then(|t| t.track());

    // Get duration from properties
    let properties = tagged_file.properties();
    let duration = properties.duration().as_secs();

    Ok(TrackMetadata {
        title,
        artist,
        album,
        duration,
        track_number,
    })
}

/// Read tags, degrading to the file name when the file is untaggable.
///
/// Never fails: an unreadable file yields its file name as title and
/// empty artist/album, and a readable file with no title gets the same
/// title substitution.
pub fn read_or_fallback(path: &Path) -> TrackMetadata {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match read(path) {
        Ok(mut meta) => {
            if meta.title.is_empty() {
                meta.title = file_name;
            }
            meta
        }
        Err(e) => {
            tracing::debug!("Tag read failed for {:?}, using file name: {}", path, e);
            TrackMetadata {
                title: file_name,
                ..TrackMetadata::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_rejects_non_audio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_audio.mp3");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"this is not an mp3 file at all").unwrap();

        let result = read(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_missing_file_errors() {
        let result = read(Path::new("/nonexistent/song.flac"));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_names_the_file() {
        let err = read(Path::new("/nonexistent/song.flac")).unwrap_err();
        assert!(err.to_string().contains("song.flac"));
    }

    #[test]
    fn test_fallback_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("My Song.mp3");
        std::fs::write(&path, b"garbage").unwrap();

        let meta = read_or_fallback(&path);
        assert_eq!(meta.title, "My Song.mp3");
        assert!(meta.artist.is_empty());
        assert!(meta.album.is_empty());
    }

    #[test]
    fn test_fallback_on_missing_file() {
        let meta = read_or_fallback(Path::new("/nonexistent/Track 7.flac"));
        assert_eq!(meta.title, "Track 7.flac");
    }
}
