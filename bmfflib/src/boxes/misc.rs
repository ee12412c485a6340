//
// Declaratively defined boxes.
//
use crate::boxes::prelude::*;

def_box! {
    /// 4.3 File Type Box (ISO/IEC 14496-12:2015(E))
    FileTypeBox {
        major_brand:        FourCC,
        minor_version:      u32,
        compatible_brands:  [FourCC],
    },
    fourcc => "ftyp",
    version => [],
}

def_box! {
    /// 8.2.2 Movie Header Box (ISO/IEC 14496-12:2015(E))
    MovieHeaderBox {
        cr_time:    Time,
        mod_time:   Time,
        timescale:  u32,
        duration:   Duration_,
        rate:       FixedFloat16_16,
        volume:     FixedFloat8_8,
        skip:       10,
        matrix:     Matrix,
        skip:       24,
        next_track_id: u32,
    },
    fourcc => "mvhd",
    version => [1],
}

impl MovieHeaderBox {
    /// Duration of the whole movie in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        if self.timescale > 0 {
            self.duration.0 * 1000 / self.timescale as u64
        } else {
            0
        }
    }
}

def_box! {
    /// 8.3.2 Track Header Box (ISO/IEC 14496-12:2015(E))
    TrackHeaderBox {
        flags:      TrackFlags,
        cr_time:    Time,
        mod_time:   Time,
        track_id:   u32,
        skip:       4,
        duration:   Duration_,
        skip:       8,
        layer:      u16,
        alt_group:  u16,
        volume:     FixedFloat8_8,
        skip:       2,
        matrix:     Matrix,
        width:      FixedFloat16_16,
        height:     FixedFloat16_16,
    },
    fourcc => "tkhd",
    version => [1],
}

def_box! {
    /// 8.4.2 Media Header Box (ISO/IEC 14496-12:2015(E))
    MediaHeaderBox {
        cr_time:    Time,
        mod_time:   Time,
        timescale:  u32,
        duration:   Duration_,
        language:   IsoLanguageCode,
        skip:       2,
    },
    fourcc => "mdhd",
    version => [1],
}

impl MediaHeaderBox {
    /// Duration of this media in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        if self.timescale > 0 {
            self.duration.0 * 1000 / self.timescale as u64
        } else {
            0
        }
    }
}

def_box! {
    /// 12.1.2 Video Media Header Box (ISO/IEC 14496-12:2015(E))
    VideoMediaHeaderBox {
        graphics_mode:  u16,
        opcolor:        OpColor,
    },
    fourcc => "vmhd",
    version => [0],
}

def_struct! {
    /// OpColor
    #[derive(Clone)]
    OpColor,
        red:    u16,
        green:  u16,
        blue:   u16,
}

def_box! {
    /// 12.2.2 Sound Media Header Box (ISO/IEC 14496-12:2015(E))
    SoundMediaHeaderBox {
        balance:    FixedFloat8_8,
        skip:       2,
    },
    fourcc => "smhd",
    version => [0],
}

def_box! {
    /// 8.7.1 Data Information Box (ISO/IEC 14496-12:2015(E))
    DataInformationBox {
        boxes:      [MP4Box],
    },
    fourcc => "dinf",
    version => [],
}
