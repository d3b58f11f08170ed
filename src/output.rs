use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::catalog::AudioEncoding;

/// File extension, dot included, for audio in the given encoding.
pub fn extension_for(encoding: AudioEncoding) -> &'static str {
    match encoding {
        AudioEncoding::Mp3 => ".mp3",
        _ => ".wav",
    }
}

/// Write `audio` to `path_without_extension` plus the encoding's extension,
/// replacing any existing file. Returns the path written.
#[instrument(skip(audio), fields(len = audio.len()))]
pub fn write_audio(
    path_without_extension: &Path,
    encoding: AudioEncoding,
    audio: &[u8],
) -> std::io::Result<PathBuf> {
    let mut path = path_without_extension.as_os_str().to_owned();
    path.push(extension_for(encoding));
    let path = PathBuf::from(path);

    fs::write(&path, audio)?;
    info!("Saved audio to {}", path.display());
    Ok(path)
}
