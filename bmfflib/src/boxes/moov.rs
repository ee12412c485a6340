use crate::boxes::prelude::*;
use crate::boxes::{MovieHeaderBox, TrackBox};
use crate::track::TrackType;

def_box! {
    /// 8.2.1 Movie Box (ISO/IEC 14496-12:2015(E))
    MovieBox {
        boxes:      [MP4Box],
    },
    fourcc => "moov",
    version => [],
}

impl MovieBox {
    declare_box_methods_opt!(MovieHeaderBox, movie_header);

    /// All tracks in this movie.
    pub fn tracks(&self) -> Vec<&TrackBox> {
        iter_box!(self, TrackBox).collect()
    }

    /// The first audio track, if any.
    pub fn audio_track(&self) -> Option<&TrackBox> {
        iter_box!(self, TrackBox).find(|t| t.track_type() == TrackType::Audio)
    }

    /// The first video track, if any.
    pub fn video_track(&self) -> Option<&TrackBox> {
        iter_box!(self, TrackBox).find(|t| t.track_type() == TrackType::Video)
    }

    /// Number of audio tracks.
    pub fn audio_track_count(&self) -> usize {
        iter_box!(self, TrackBox).filter(|t| t.track_type() == TrackType::Audio).count()
    }

    /// Number of video tracks.
    pub fn video_track_count(&self) -> usize {
        iter_box!(self, TrackBox).filter(|t| t.track_type() == TrackType::Video).count()
    }

    /// Check if this movie is valid (has a header and at least one track).
    pub fn is_valid(&self) -> bool {
        let mut valid = true;
        if self.movie_header().is_none() {
            log::error!("MovieBox: no MovieHeaderBox present");
            valid = false;
        }
        let tracks = self.tracks();
        if tracks.is_empty() {
            log::error!("MovieBox: no TrackBoxes present");
            valid = false;
        }
        for t in &tracks {
            if !t.is_valid() {
                valid = false;
            }
        }
        valid
    }
}
