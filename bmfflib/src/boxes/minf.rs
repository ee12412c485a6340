use crate::boxes::prelude::*;
use crate::boxes::{DataInformationBox, SampleTableBox, SoundMediaHeaderBox, VideoMediaHeaderBox};

def_box! {
    /// 8.4.4 Media Information Box (ISO/IEC 14496-12:2015(E))
    MediaInformationBox {
        boxes:      [MP4Box],
    },
    fourcc => "minf",
    version => [],
}

impl MediaInformationBox {
    declare_box_methods_opt!(DataInformationBox, data_information);
    declare_box_methods_opt!(SampleTableBox, sample_table);
    declare_box_methods_opt!(VideoMediaHeaderBox, video_header);
    declare_box_methods_opt!(SoundMediaHeaderBox, sound_header);
}
