use crate::boxes::prelude::*;
use crate::boxes::{HandlerBox, MediaHeaderBox, MediaInformationBox};
use crate::track::TrackType;

def_box! {
    /// 8.4.1 Media Box (ISO/IEC 14496-12:2015(E))
    MediaBox {
        boxes:      [MP4Box],
    },
    fourcc => "mdia",
    version => [],
}

impl MediaBox {
    declare_box_methods_opt!(MediaHeaderBox, media_header);
    declare_box_methods_opt!(HandlerBox, handler);
    declare_box_methods_opt!(MediaInformationBox, media_info);

    /// Classify the containing track by its handler type.
    pub fn track_type(&self) -> TrackType {
        match self.handler() {
            Some(h) if h.is_audio() => TrackType::Audio,
            Some(h) if h.is_video() => TrackType::Video,
            _ => TrackType::Unknown,
        }
    }

    /// Check if this media is valid (has header, handler, and media-info).
    pub fn is_valid(&self) -> bool {
        let mut valid = true;
        if self.media_header().is_none() {
            log::error!("MediaBox: no MediaHeaderBox present");
            valid = false;
        }
        if self.handler().is_none() {
            log::error!("MediaBox: no HandlerBox present");
            valid = false;
        }
        if self.media_info().is_none() {
            log::error!("MediaBox: no MediaInformationBox present");
            valid = false;
        }
        valid
    }
}
