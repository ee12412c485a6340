use crate::boxes::prelude::*;
use crate::boxes::{AacSampleEntry, AvcSampleEntry};

def_box! {
    /// 8.5.2 Sample Description Box (ISO/IEC 14496-12:2015(E))
    ///
    /// The entries are sample-entry boxes, decoded through the same
    /// recursive machinery as any other child box.
    SampleDescriptionBox {
        entries:    [MP4Box, sized],
    },
    fourcc => "stsd",
    version => [0],
}

impl SampleDescriptionBox {
    /// The audio sample entry, if the first entries include one.
    pub fn audio_entry(&self) -> Option<&AacSampleEntry> {
        self.entries.iter().find_map(|e| match e {
            MP4Box::AacSampleEntry(ref b) => Some(b),
            _ => None,
        })
    }

    /// The video sample entry, if the first entries include one.
    pub fn video_entry(&self) -> Option<&AvcSampleEntry> {
        self.entries.iter().find_map(|e| match e {
            MP4Box::AvcSampleEntry(ref b) => Some(b),
            _ => None,
        })
    }
}
