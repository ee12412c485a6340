use crate::boxes::prelude::*;
use crate::boxes::{MediaBox, MediaInformationBox, SampleDescriptionBox, SampleTableBox, TrackHeaderBox};
use crate::track::TrackType;

def_box! {
    /// 8.3.1 Track Box (ISO/IEC 14496-12:2015(E))
    TrackBox {
        boxes:      [MP4Box],
    },
    fourcc => "trak",
    version => [],
}

impl TrackBox {
    declare_box_methods_opt!(TrackHeaderBox, track_header);
    declare_box_methods_opt!(MediaBox, media);

    /// This track's sample table, found via media / media-information.
    pub fn sample_table(&self) -> Option<&SampleTableBox> {
        first_box!(self, MediaBox / MediaInformationBox / SampleTableBox)
    }

    /// This track's sample description box.
    pub fn sample_description(&self) -> Option<&SampleDescriptionBox> {
        self.sample_table().and_then(|stbl| stbl.sample_description())
    }

    /// What kind of media this track carries, derived from the
    /// handler reference box. Never cached; the tree is immutable.
    pub fn track_type(&self) -> TrackType {
        match self.media() {
            Some(mdia) => mdia.track_type(),
            None => TrackType::Unknown,
        }
    }

    /// Check if this track is valid (has header and media boxes).
    pub fn is_valid(&self) -> bool {
        let mut valid = true;
        let track_id = match self.track_header() {
            Some(th) => th.track_id,
            None => {
                log::error!("TrackBox: no TrackHeaderBox present");
                return false;
            },
        };
        match self.media() {
            Some(m) => {
                if !m.is_valid() {
                    valid = false;
                }
            },
            None => {
                log::error!("TrackBox(id {}): no MediaBox present", track_id);
                valid = false;
            },
        }
        valid
    }
}
