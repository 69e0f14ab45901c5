//! Sample conversion for the native mixer's interleaved stereo output.

/// Largest batch `sm64_audio_tick` produces in one call, in stereo frames.
/// The library writes up to two batches per tick.
pub const AUDIO_BATCH_FRAMES: usize = 544;

/// One stereo frame with samples normalized to `[-1, 1]`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AudioFrame {
    pub left: f32,
    pub right: f32,
}

pub(crate) fn frames_from_interleaved(samples: &[i16]) -> Vec<AudioFrame> {
    samples
        .chunks_exact(2)
        .map(|pair| AudioFrame {
            left: pair[0] as f32 / 32768.0,
            right: pair[1] as f32 / 32768.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_samples_pair_into_frames() {
        let samples = [0i16, 16384, -16384, 32767];

        let frames = frames_from_interleaved(&samples);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], AudioFrame { left: 0.0, right: 0.5 });
        assert_eq!(frames[1].left, -0.5);
        assert!((frames[1].right - 32767.0 / 32768.0).abs() < 1e-6);
    }

    #[test]
    fn full_scale_negative_reaches_minus_one() {
        let frames = frames_from_interleaved(&[i16::MIN, i16::MIN]);
        assert_eq!(frames[0], AudioFrame { left: -1.0, right: -1.0 });
    }

    #[test]
    fn empty_input_yields_no_frames() {
        assert!(frames_from_interleaved(&[]).is_empty());
    }
}
