//! General information about the tracks in a movie.
//!
//! Everything here is derived on demand by walking the decoded box
//! tree through the typed navigation accessors; nothing is cached.
//!
use std::fmt::{self, Debug, Display};
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::boxes::*;
use crate::mp4box::MP4;
use crate::types::IsoLanguageCode;

/// What kind of media a track carries, derived from its
/// handler reference box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackType {
    Video,
    Audio,
    Unknown,
}

impl Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrackType::Video => "video",
            TrackType::Audio => "audio",
            TrackType::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// General track information.
#[derive(Debug, Default, Serialize)]
pub struct TrackInfo {
    pub id:            u32,
    pub track_type:    String,
    #[serde(serialize_with = "seconds")]
    pub duration:      Duration,
    pub size:          u64,
    #[serde(serialize_with = "display")]
    pub language:      IsoLanguageCode,
    pub specific_info: SpecificTrackInfo,
}

/// Track-type specific info.
#[derive(Serialize)]
#[serde(untagged)]
pub enum SpecificTrackInfo {
    AudioTrackInfo(AudioTrackInfo),
    VideoTrackInfo(VideoTrackInfo),
    UnknownTrackInfo(UnknownTrackInfo),
}

impl Default for SpecificTrackInfo {
    fn default() -> SpecificTrackInfo {
        SpecificTrackInfo::UnknownTrackInfo(UnknownTrackInfo {
            codec_id:   "und".to_string(),
            codec_name: None,
        })
    }
}

impl Debug for SpecificTrackInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpecificTrackInfo::AudioTrackInfo(ref i) => Debug::fmt(i, f),
            SpecificTrackInfo::VideoTrackInfo(ref i) => Debug::fmt(i, f),
            SpecificTrackInfo::UnknownTrackInfo(ref i) => Debug::fmt(i, f),
        }
    }
}

/// Audio track details.
#[derive(Debug, Default, Serialize)]
pub struct AudioTrackInfo {
    pub codec_id:      String,
    pub codec_name:    Option<String>,
    pub channel_count: u16,
    pub bit_depth:     Option<u16>,
    pub sample_rate:   Option<u32>,
    pub avg_bitrate:   Option<u32>,
    pub max_bitrate:   Option<u32>,
}

/// Video track details.
#[derive(Debug, Default, Serialize)]
pub struct VideoTrackInfo {
    pub codec_id:   String,
    pub codec_name: Option<String>,
    pub width:      u16,
    pub height:     u16,
    pub frame_rate: f64,
}

/// Unclassified track details.
#[derive(Debug, Default, Serialize)]
pub struct UnknownTrackInfo {
    pub codec_id:   String,
    pub codec_name: Option<String>,
}

/// Extract the track information of all tracks in the movie.
pub fn track_info(mp4: &MP4) -> Vec<TrackInfo> {
    let mut v = Vec::new();

    let movie = match mp4.movie() {
        Some(movie) => movie,
        None => return v,
    };

    for track in movie.tracks() {
        let mut info = TrackInfo::default();

        if let Some(tkhd) = track.track_header() {
            info.id = tkhd.track_id;
        }
        info.track_type = track.track_type().to_string();

        let mdia = track.media();
        if let Some(mdhd) = mdia.and_then(|m| m.media_header()) {
            info.language = mdhd.language;
            let mut duration = mdhd.duration.0;
            if duration == 0 {
                // Some muxers leave the header duration empty;
                // fall back on the time-to-sample table.
                duration = track
                    .sample_table()
                    .and_then(|stbl| stbl.time_to_sample())
                    .map(|stts| stts.total_duration())
                    .unwrap_or(0);
            }
            if mdhd.timescale > 0 {
                info.duration = Duration::from_millis(duration * 1000 / mdhd.timescale as u64);
            }
        }

        let stbl = track.sample_table();
        if let Some(stsz) = stbl.and_then(|s| s.sample_size()) {
            info.size = stsz.total_size();
        }

        info.specific_info = match track.sample_description() {
            Some(stsd) => specific_info(track, stsd),
            None => SpecificTrackInfo::default(),
        };

        v.push(info);
    }
    v
}

// Codec details, distinguished by which sample entry variant decoded.
fn specific_info(track: &TrackBox, stsd: &SampleDescriptionBox) -> SpecificTrackInfo {
    if let Some(entry) = stsd.audio_entry() {
        let mut info = AudioTrackInfo {
            codec_id: entry.codec_id(),
            codec_name: Some(entry.codec_name().to_string()),
            channel_count: entry.channel_count,
            bit_depth: if entry.sample_size > 0 {
                Some(entry.sample_size)
            } else {
                None
            },
            sample_rate: Some(entry.sample_rate.to_f64() as u32),
            avg_bitrate: None,
            max_bitrate: None,
        };
        if let Some(esds) = entry.es_descriptor() {
            let config = &esds.es_descriptor.decoder_config;
            if config.avg_bitrate > 0 {
                info.avg_bitrate = Some(config.avg_bitrate);
            }
            if config.max_bitrate > 0 {
                info.max_bitrate = Some(config.max_bitrate);
            }
            if let Some(audio) = config.specific_info.as_ref().and_then(|si| si.audio.as_ref()) {
                if audio.channel_config > 0 {
                    info.channel_count = audio.channel_config as u16;
                }
            }
        }
        return SpecificTrackInfo::AudioTrackInfo(info);
    }

    if let Some(entry) = stsd.video_entry() {
        let mut frame_rate = 0f64;
        if let Some(stbl) = track.sample_table() {
            let samples = stbl.sample_size().map(|stsz| stsz.sample_count as u64).unwrap_or(0);
            let duration = stbl.time_to_sample().map(|stts| stts.total_duration()).unwrap_or(0);
            let timescale = track
                .media()
                .and_then(|m| m.media_header())
                .map(|mdhd| mdhd.timescale)
                .unwrap_or(0);
            if duration > 0 && timescale > 0 {
                frame_rate = samples as f64 * timescale as f64 / duration as f64;
                frame_rate = (frame_rate * 100.0).round() / 100.0;
            }
        }
        return SpecificTrackInfo::VideoTrackInfo(VideoTrackInfo {
            codec_id: entry.codec_id(),
            codec_name: Some(entry.codec_name().to_string()),
            width: entry.width,
            height: entry.height,
            frame_rate,
        });
    }

    SpecificTrackInfo::default()
}

// Serialize a Duration as fractional seconds.
fn seconds<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

// Serialize anything Display as a string.
fn display<S: Serializer, T: Display>(t: &T, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemReader;
    use crate::testutil::*;

    fn decode(data: &[u8]) -> MP4 {
        MP4::read(MemReader::new(data)).unwrap()
    }

    #[test]
    fn classify_audio_and_video_tracks() {
        let file = movie_file(&[
            trak_box(1, "soun", mp4a_box()),
            trak_box(2, "vide", avc1_box(1280, 720)),
        ]);
        let mp4 = decode(&file);
        assert!(mp4.is_valid());

        let movie = mp4.movie().unwrap();
        assert_eq!(movie.audio_track_count(), 1);
        assert_eq!(movie.video_track_count(), 1);
        assert_eq!(movie.tracks().len(), 2);

        let audio = movie.audio_track().unwrap();
        assert_eq!(audio.track_type(), TrackType::Audio);
        assert_eq!(audio.track_header().unwrap().track_id, 1);

        let video = movie.video_track().unwrap();
        assert_eq!(video.track_type(), TrackType::Video);
        assert_eq!(video.track_header().unwrap().track_id, 2);

        // The long lookup chain down to the sample entry.
        let entry = first_box!(
            audio,
            MediaBox / MediaInformationBox / SampleTableBox / SampleDescriptionBox / AacSampleEntry
        );
        assert_eq!(entry.unwrap().channel_count, 2);

        // Sample table lookups.
        let stbl = audio.sample_table().unwrap();
        assert_eq!(stbl.sample_to_chunk().unwrap().entries.len(), 1);
        assert_eq!(stbl.chunk_offset().unwrap().entries[0], 4096);
        assert!(stbl.sync_samples().is_none());
        assert!(stbl.composition_offset().is_none());

        // The media headers match the handler type.
        let minf = first_box!(video, MediaBox / MediaInformationBox).unwrap();
        assert!(minf.video_header().is_some());
        assert!(minf.sound_header().is_none());
        assert!(minf.data_information().is_some());
    }

    #[test]
    fn track_info_report() {
        let file = movie_file(&[
            trak_box(1, "soun", mp4a_box()),
            trak_box(2, "vide", avc1_box(1280, 720)),
        ]);
        let mp4 = decode(&file);
        let infos = track_info(&mp4);
        assert_eq!(infos.len(), 2);

        assert_eq!(infos[0].track_type, "audio");
        // 900_000 units at timescale 30_000 = 30 seconds.
        assert_eq!(infos[0].duration, Duration::from_secs(30));
        // 30 samples of constant size 100.
        assert_eq!(infos[0].size, 3000);
        match &infos[0].specific_info {
            SpecificTrackInfo::AudioTrackInfo(a) => {
                assert_eq!(a.codec_id, "mp4a.40.2");
                assert_eq!(a.codec_name.as_deref(), Some("AAC-LC"));
                assert_eq!(a.channel_count, 2);
                assert_eq!(a.sample_rate, Some(44100));
            },
            other => panic!("expected audio info, got {:?}", other),
        }

        assert_eq!(infos[1].track_type, "video");
        match &infos[1].specific_info {
            SpecificTrackInfo::VideoTrackInfo(v) => {
                assert_eq!(v.codec_id, "avc1.4d401f");
                assert_eq!(v.width, 1280);
                assert_eq!(v.height, 720);
                // 30 samples over 30_000 units at timescale 30_000 -> 30 fps.
                assert_eq!(v.frame_rate, 30.0);
            },
            other => panic!("expected video info, got {:?}", other),
        }
    }

    #[test]
    fn classification_without_handler_is_unknown() {
        // A track whose mdia has no hdlr at all.
        let mdia = boxb(
            "mdia",
            &full_boxb("mdhd", 0, 0, &mdhd_v0_payload(1000, 1000, 0x55c4)),
        );
        let trak = boxb(
            "trak",
            &concat(&[full_boxb("tkhd", 0, 7, &tkhd_v0_payload(1, 0, 0)), mdia]),
        );
        let file = movie_file(&[trak]);
        let mp4 = decode(&file);
        let movie = mp4.movie().unwrap();
        assert_eq!(movie.audio_track_count(), 0);
        assert_eq!(movie.video_track_count(), 0);
        assert_eq!(movie.tracks()[0].track_type(), TrackType::Unknown);
    }

    #[test]
    fn remove_boxes_reports_count() {
        let file = movie_file(&[
            trak_box(1, "soun", mp4a_box()),
            trak_box(2, "vide", avc1_box(640, 480)),
        ]);
        let mut mp4 = decode(&file);

        // Remove all tracks from the movie.
        if let Some(MP4Box::MovieBox(moov)) = mp4
            .boxes
            .iter_mut()
            .find(|b| matches!(b, MP4Box::MovieBox(_)))
        {
            let removed = remove_box!(moov.boxes, TrackBox);
            assert_eq!(removed, 2);
            assert_eq!(moov.tracks().len(), 0);
        } else {
            panic!("no moov");
        }
    }

    #[test]
    fn report_serializes_to_json() {
        let file = movie_file(&[trak_box(1, "soun", mp4a_box())]);
        let mp4 = decode(&file);
        let infos = track_info(&mp4);
        let json = serde_json::to_string_pretty(&infos).unwrap();
        assert!(json.contains("\"mp4a.40.2\""));
        assert!(json.contains("\"und\""));
    }
}
