//! Speech payload decoding.
//!
//! The gateway returns speech as raw base64-encoded PCM samples, not a
//! playable container. Playback requires decoding to normalized floats and
//! handing the buffer to the shell's audio facility. This is a pure data
//! transform; the only recovery path is a generic playback-failure report.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use vitrine_core::MediaRef;
use vitrine_error::{PlaybackError, PlaybackErrorKind, VitrineResult};

/// Sample rate of gateway speech payloads.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

/// Channel count of gateway speech payloads.
pub const SPEECH_CHANNELS: u16 = 1;

/// A decoded speech buffer ready for a platform audio facility.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechBuffer {
    /// Samples normalized to [-1, 1]
    pub samples: Vec<f32>,
    /// Samples per second
    pub sample_rate: u32,
    /// Channel count
    pub channels: u16,
}

impl SpeechBuffer {
    /// Playback duration in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / (self.sample_rate as f32 * self.channels as f32)
    }
}

/// Decode a raw speech payload into a normalized sample buffer.
///
/// The payload is base64, holding 16-bit signed little-endian samples at
/// 24 kHz mono; each sample normalizes to [-1, 1] by dividing by 32768. A
/// trailing odd byte is ignored.
///
/// # Errors
///
/// Fails when the reference is not raw audio, the base64 is invalid, or the
/// payload decodes to zero bytes.
///
/// # Examples
///
/// ```
/// use base64::Engine as _;
/// use base64::engine::general_purpose::STANDARD;
/// use vitrine_core::MediaRef;
/// use vitrine_planner::playback::decode_speech;
///
/// // One sample at -32768, one at 16384
/// let payload = STANDARD.encode([0x00, 0x80, 0x00, 0x40]);
/// let buffer = decode_speech(&MediaRef::RawAudio(payload)).unwrap();
/// assert_eq!(buffer.samples, vec![-1.0, 0.5]);
/// ```
pub fn decode_speech(media: &MediaRef) -> VitrineResult<SpeechBuffer> {
    let payload = match media {
        MediaRef::RawAudio(data) => data,
        MediaRef::Url(_) => {
            return Err(PlaybackError::new(PlaybackErrorKind::NotAudio("url".to_string())).into());
        }
        MediaRef::DataUri { mime, .. } => {
            return Err(PlaybackError::new(PlaybackErrorKind::NotAudio(mime.clone())).into());
        }
    };

    let bytes = BASE64
        .decode(payload)
        .map_err(|e| PlaybackError::new(PlaybackErrorKind::Base64Decode(e.to_string())))?;

    if bytes.is_empty() {
        return Err(PlaybackError::new(PlaybackErrorKind::EmptyPayload).into());
    }

    let samples: Vec<f32> = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    Ok(SpeechBuffer {
        samples,
        sample_rate: SPEECH_SAMPLE_RATE,
        channels: SPEECH_CHANNELS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(bytes: &[u8]) -> MediaRef {
        MediaRef::RawAudio(BASE64.encode(bytes))
    }

    #[test]
    fn test_decode_normalizes_samples() {
        // i16::MIN, 0, i16::MAX
        let media = raw(&[0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F]);
        let buffer = decode_speech(&media).unwrap();

        assert_eq!(buffer.samples.len(), 3);
        assert_eq!(buffer.samples[0], -1.0);
        assert_eq!(buffer.samples[1], 0.0);
        assert!((buffer.samples[2] - 0.99997).abs() < 1e-4);
        assert!(buffer.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert_eq!(buffer.sample_rate, SPEECH_SAMPLE_RATE);
        assert_eq!(buffer.channels, SPEECH_CHANNELS);
    }

    #[test]
    fn test_decode_ignores_trailing_odd_byte() {
        let media = raw(&[0x00, 0x40, 0x7F]);
        let buffer = decode_speech(&media).unwrap();
        assert_eq!(buffer.samples, vec![0.5]);
    }

    #[test]
    fn test_empty_payload_is_error() {
        let media = MediaRef::RawAudio(String::new());
        assert!(decode_speech(&media).is_err());
    }

    #[test]
    fn test_invalid_base64_is_error() {
        let media = MediaRef::RawAudio("pas du base64 !".to_string());
        assert!(decode_speech(&media).is_err());
    }

    #[test]
    fn test_non_audio_reference_is_error() {
        let media = MediaRef::Url("https://example.com/clip.mp4".to_string());
        assert!(decode_speech(&media).is_err());
    }

    #[test]
    fn test_duration() {
        // 24000 samples of silence = one second of mono audio
        let bytes = vec![0u8; 48_000];
        let buffer = decode_speech(&raw(&bytes)).unwrap();
        assert!((buffer.duration_secs() - 1.0).abs() < f32::EPSILON);
    }
}
