//! Audio container detection by magic number.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use strum::Display;

use crate::error::AgentError;

use super::validate_local_file;

/// Number of leading bytes inspected when sniffing a file.
pub const SNIFF_LEN: usize = 64;

/// Smallest file that can hold a recognizable header.
pub const MIN_HEADER_LEN: u64 = 12;

/// Brands accepted in an MP4 `ftyp` box: `M4A `, `isom`, `mp42`, `MSNV`, `MP41`.
const MP4_BRANDS: [u32; 5] = [0x4D34_4120, 0x6973_6F6D, 0x6D70_3432, 0x4D53_4E56, 0x4D50_3431];

/// Recognized audio container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AudioFormat {
    Wav,
    Flac,
    Ogg,
    Mp3,
    Mp4,
    Aac,
}

impl AudioFormat {
    /// Classify a byte prefix, if it starts a known container.
    pub fn detect(h: &[u8]) -> Option<Self> {
        if looks_like_wav(h) {
            Some(Self::Wav)
        } else if looks_like_flac(h) {
            Some(Self::Flac)
        } else if looks_like_ogg(h) {
            Some(Self::Ogg)
        } else if looks_like_mp4(h) {
            Some(Self::Mp4)
        } else if looks_like_adts(h) && h[1] & 0x06 == 0 {
            // ADTS shares the MP3 sync word; layer bits 00 tell them apart.
            Some(Self::Aac)
        } else if looks_like_mp3(h) {
            Some(Self::Mp3)
        } else {
            None
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Flac => "audio/flac",
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
            Self::Aac => "audio/aac",
        }
    }
}

/// Whether `prefix` begins with a supported audio container signature.
pub fn is_supported_audio(prefix: &[u8]) -> bool {
    AudioFormat::detect(prefix).is_some()
}

/// Check that `path` names a readable file holding supported audio.
///
/// Fails with [`AgentError::InvalidArgument`] for an empty path, a missing
/// file, a directory, a file too small to hold a header, or an unrecognized
/// format.
pub fn validate_audio_file(path: impl AsRef<Path>) -> Result<AudioFormat, AgentError> {
    let path = path.as_ref();
    let metadata = validate_local_file(path)?;
    if metadata.len() < MIN_HEADER_LEN {
        return Err(AgentError::InvalidArgument(format!(
            "Audio file too small to contain a valid header: {}",
            path.display()
        )));
    }

    let mut header = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;

    AudioFormat::detect(&header).ok_or_else(|| {
        AgentError::InvalidArgument(format!(
            "Unrecognized audio format: {}",
            path.display()
        ))
    })
}

fn looks_like_wav(h: &[u8]) -> bool {
    h.len() >= 12 && &h[0..4] == b"RIFF" && &h[8..12] == b"WAVE"
}

fn looks_like_flac(h: &[u8]) -> bool {
    h.starts_with(b"fLaC")
}

fn looks_like_ogg(h: &[u8]) -> bool {
    h.starts_with(b"OggS")
}

fn looks_like_mp3(h: &[u8]) -> bool {
    if h.len() >= 3 && h.starts_with(b"ID3") {
        return true;
    }
    // MPEG-1, MPEG-2 and MPEG-2.5 frame sync.
    h.len() >= 2 && h[0] == 0xFF && (h[1] & 0xE0) == 0xE0
}

fn looks_like_mp4(h: &[u8]) -> bool {
    if h.len() < 12 || &h[4..8] != b"ftyp" {
        return false;
    }
    let brand = u32::from_be_bytes([h[8], h[9], h[10], h[11]]);
    MP4_BRANDS.contains(&brand)
}

fn looks_like_adts(h: &[u8]) -> bool {
    h.len() >= 2 && h[0] == 0xFF && (h[1] & 0xF0) == 0xF0
}
