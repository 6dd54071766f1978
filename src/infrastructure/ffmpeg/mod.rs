// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`AudioTranscoder`] port.
//!
//! Any container `FFmpeg` can demux goes in; 16-bit PCM WAV at the requested
//! rate and channel count comes out. The WAV header is written by `hound`
//! into memory, so nothing touches the disk besides the input.
//!
//! [`AudioTranscoder`]: crate::application::port::AudioTranscoder

use std::io::Cursor;
use std::sync::OnceLock;

use ffmpeg_next::format::sample::Type as SampleLayout;
use ffmpeg_next::format::Sample;
use ffmpeg_next::software::resampling;
use ffmpeg_next::ChannelLayout;
use tokio_util::sync::CancellationToken;

use crate::application::port::AudioTranscoder;
use crate::domain::audio::{SelectedFile, TargetFormat, TranscodedAudio};
use crate::domain::error::TranscodeError;

static FFMPEG_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initializes `FFmpeg` once per process and remembers the outcome.
fn init_ffmpeg() -> Result<(), TranscodeError> {
    FFMPEG_INIT
        .get_or_init(|| {
            ffmpeg_next::init().map_err(|e| e.to_string())?;
            // SAFETY: av_log_set_level is thread-safe and only affects logging
            unsafe {
                ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
            }
            Ok(())
        })
        .clone()
        .map_err(TranscodeError::InitializationFailed)
}

/// Stateless transcoder. Every call opens its own demuxer and decoder, so a
/// single instance can serve concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegTranscoder;

impl FfmpegTranscoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AudioTranscoder for FfmpegTranscoder {
    fn initialize(&self) -> Result<(), TranscodeError> {
        init_ffmpeg()
    }

    fn transcode(
        &self,
        source: &SelectedFile,
        target: TargetFormat,
        cancel: &CancellationToken,
    ) -> Result<TranscodedAudio, TranscodeError> {
        init_ffmpeg()?;
        if cancel.is_cancelled() {
            return Err(TranscodeError::Cancelled);
        }

        let path = source.path();
        if !path.is_file() {
            return Err(TranscodeError::Io(format!(
                "{} is not a readable file",
                path.display()
            )));
        }

        let samples = decode_to_pcm(source, target, cancel)?;
        let bytes = encode_wav(&samples, target)?;
        Ok(TranscodedAudio::wav_for(source, bytes))
    }
}

/// Decodes the best audio stream of `source` into interleaved i16 samples.
fn decode_to_pcm(
    source: &SelectedFile,
    target: TargetFormat,
    cancel: &CancellationToken,
) -> Result<Vec<i16>, TranscodeError> {
    let mut ictx = ffmpeg_next::format::input(&source.path())
        .map_err(|e| TranscodeError::DecodingFailed(format!("Failed to open input: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or(TranscodeError::NoAudioStream)?;
    let audio_stream_index = input.index();

    let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| TranscodeError::DecodingFailed(format!("Bad codec parameters: {e}")))?;
    let mut decoder = context
        .decoder()
        .audio()
        .map_err(|e| TranscodeError::DecodingFailed(format!("No audio decoder: {e}")))?;

    // Some demuxers leave the layout unset and only report a channel count.
    let input_layout = if decoder.channel_layout().is_empty() {
        ChannelLayout::default(i32::from(decoder.channels()))
    } else {
        decoder.channel_layout()
    };
    let output_layout = match target.channels {
        1 => ChannelLayout::MONO,
        _ => ChannelLayout::STEREO,
    };
    let output_channels = usize::from(target.channels.clamp(1, 2));

    let mut resampler = resampling::Context::get(
        decoder.format(),
        input_layout,
        decoder.rate(),
        Sample::I16(SampleLayout::Packed),
        output_layout,
        target.sample_rate,
    )
    .map_err(|e| TranscodeError::EncodingFailed(format!("Failed to create resampler: {e}")))?;

    let mut pcm = Vec::new();
    let mut decoded = ffmpeg_next::frame::Audio::empty();

    for (stream, packet) in ictx.packets() {
        if cancel.is_cancelled() {
            return Err(TranscodeError::Cancelled);
        }
        if stream.index() != audio_stream_index {
            continue;
        }
        decoder
            .send_packet(&packet)
            .map_err(|e| TranscodeError::DecodingFailed(format!("Audio packet failed: {e}")))?;
        drain_decoder(
            &mut decoder,
            &mut decoded,
            &mut resampler,
            input_layout,
            output_channels,
            &mut pcm,
        )?;
    }

    decoder
        .send_eof()
        .map_err(|e| TranscodeError::DecodingFailed(format!("Flushing decoder failed: {e}")))?;
    drain_decoder(
        &mut decoder,
        &mut decoded,
        &mut resampler,
        input_layout,
        output_channels,
        &mut pcm,
    )?;

    // The resampler keeps a tail of buffered samples until flushed.
    loop {
        let mut tail = ffmpeg_next::frame::Audio::empty();
        let delay = resampler
            .flush(&mut tail)
            .map_err(|e| TranscodeError::EncodingFailed(format!("Resampler flush failed: {e}")))?;
        extract_samples(&tail, output_channels, &mut pcm);
        if delay.is_none() || tail.samples() == 0 {
            break;
        }
    }

    if cancel.is_cancelled() {
        return Err(TranscodeError::Cancelled);
    }
    Ok(pcm)
}

fn drain_decoder(
    decoder: &mut ffmpeg_next::decoder::Audio,
    decoded: &mut ffmpeg_next::frame::Audio,
    resampler: &mut resampling::Context,
    input_layout: ChannelLayout,
    output_channels: usize,
    pcm: &mut Vec<i16>,
) -> Result<(), TranscodeError> {
    while decoder.receive_frame(decoded).is_ok() {
        if decoded.channel_layout().is_empty() {
            decoded.set_channel_layout(input_layout);
        }
        let mut resampled = ffmpeg_next::frame::Audio::empty();
        resampler
            .run(decoded, &mut resampled)
            .map_err(|e| TranscodeError::EncodingFailed(format!("Resampling failed: {e}")))?;
        extract_samples(&resampled, output_channels, pcm);
    }
    Ok(())
}

/// Appends the i16 samples of a packed resampled frame to `out`.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: usize, out: &mut Vec<i16>) {
    if frame.samples() == 0 {
        return;
    }
    let data = frame.data(0);
    let byte_count = (frame.samples() * channels * 2).min(data.len());
    out.extend(
        data[..byte_count]
            .chunks_exact(2)
            .map(|pair| i16::from_ne_bytes([pair[0], pair[1]])),
    );
}

/// Wraps interleaved samples in a 16-bit PCM WAV container.
fn encode_wav(samples: &[i16], target: TargetFormat) -> Result<Vec<u8>, TranscodeError> {
    let spec = hound::WavSpec {
        channels: target.channels.clamp(1, 2),
        sample_rate: target.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;
        let mut i16_writer = writer.get_i16_writer(u32::try_from(samples.len()).map_err(|_| {
            TranscodeError::EncodingFailed("Output exceeds WAV size limit".to_string())
        })?);
        for &sample in samples {
            i16_writer.write_sample(sample);
        }
        i16_writer
            .flush()
            .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;
        writer
            .finalize()
            .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;
    }
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_tone(path: &Path, sample_rate: u32, channels: u16, seconds: f32) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).expect("create wav");
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let frames = (sample_rate as f32 * seconds) as u32;
        for n in 0..frames {
            #[allow(clippy::cast_precision_loss)]
            let t = n as f32 / sample_rate as f32;
            #[allow(clippy::cast_possible_truncation)]
            let value = ((t * 440.0 * std::f32::consts::TAU).sin() * 8000.0) as i16;
            for _ in 0..channels {
                writer.write_sample(value).expect("write sample");
            }
        }
        writer.finalize().expect("finalize wav");
    }

    fn selected(path: &Path) -> SelectedFile {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        SelectedFile::new(path, size)
    }

    #[test]
    fn encode_wav_writes_expected_header() {
        let bytes = encode_wav(&[0, 1, -1, 100], TargetFormat::SPEECH).expect("encode");
        let reader = hound::WavReader::new(Cursor::new(bytes)).expect("read back");
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 24_000);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.len(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let transcoder = FfmpegTranscoder::new();
        let source = SelectedFile::new("/definitely/not/here.mp3", 0);
        let err = transcoder
            .transcode(&source, TargetFormat::SPEECH, &CancellationToken::new())
            .unwrap_err();
        assert!(matches!(err, TranscodeError::Io(_)), "got {err:?}");
    }

    #[test]
    fn garbage_input_fails_to_decode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noise.mp3");
        std::fs::write(&path, b"this is not audio at all").expect("write");

        let err = FfmpegTranscoder::new()
            .transcode(&selected(&path), TargetFormat::SPEECH, &CancellationToken::new())
            .unwrap_err();
        assert!(
            matches!(
                err,
                TranscodeError::DecodingFailed(_) | TranscodeError::NoAudioStream
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn cancelled_token_stops_before_decoding() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tone.wav");
        write_tone(&path, 44_100, 2, 0.2);

        let token = CancellationToken::new();
        token.cancel();
        let err = FfmpegTranscoder::new()
            .transcode(&selected(&path), TargetFormat::SPEECH, &token)
            .unwrap_err();
        assert_eq!(err, TranscodeError::Cancelled);
    }

    #[test]
    fn stereo_44k_becomes_mono_24k() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tone.wav");
        write_tone(&path, 44_100, 2, 1.0);

        let audio = FfmpegTranscoder::new()
            .transcode(&selected(&path), TargetFormat::SPEECH, &CancellationToken::new())
            .expect("transcode");

        assert_eq!(audio.file_name, "tone.wav.wav");
        assert_eq!(audio.media_type, "audio/wav");

        let reader = hound::WavReader::new(Cursor::new(audio.bytes)).expect("valid wav");
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 24_000);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        // One second of input, give or take resampler latency.
        let frames = reader.len();
        assert!((23_000..=25_000).contains(&frames), "got {frames} frames");
    }
}
