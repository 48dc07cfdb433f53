use std::{fs::File, path::Path};

use symphonia::core::{
    codecs::CODEC_TYPE_NULL,
    errors::Error as SymphoniaError,
    formats::FormatOptions,
    io::MediaSourceStream,
    meta::MetadataOptions,
    probe::Hint,
};

use crate::KikimineError;

/// Clip-duration collaborator. The pipeline only ever consumes the scalar;
/// a missing or corrupt clip is fatal for the enclosing language's load.
pub trait AudioDurations: Sync {
    fn duration(&self, path: &Path) -> Result<f64, KikimineError>;
}

/// Duration via symphonia's format probe. Uses the container's frame count
/// when present and otherwise walks the packet timeline to the end of the
/// stream, which is the common case for the corpus mp3 clips.
pub struct SymphoniaDurations;

impl AudioDurations for SymphoniaDurations {
    fn duration(&self, path: &Path) -> Result<f64, KikimineError> {
        let file = File::open(path)?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(extension);
        }

        let probed = symphonia::default::get_probe().format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;
        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|track| track.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| KikimineError::NoAudioTrack(path.to_path_buf()))?;
        let track_id = track.id;
        let n_frames = track.codec_params.n_frames;
        let time_base = track
            .codec_params
            .time_base
            .ok_or_else(|| KikimineError::NoAudioTrack(path.to_path_buf()))?;

        if let Some(frames) = n_frames {
            let time = time_base.calc_time(frames);
            return Ok(time.seconds as f64 + time.frac);
        }

        let mut end: u64 = 0;
        loop {
            match format.next_packet() {
                Ok(packet) => {
                    if packet.track_id() == track_id {
                        end = end.max(packet.ts() + packet.dur());
                    }
                }
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let time = time_base.calc_time(end);
        Ok(time.seconds as f64 + time.frac)
    }
}
