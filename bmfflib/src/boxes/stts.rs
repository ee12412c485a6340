use crate::boxes::prelude::*;

def_box! {
    /// 8.6.1.2 Decoding Time to Sample Box (ISO/IEC 14496-12:2015(E))
    TimeToSampleBox {
        entries:        [TimeToSampleEntry, sized],
    },
    fourcc => "stts",
    version => [0],
}

def_struct! {
    /// Entry in TimeToSampleBox.
    #[derive(Clone)]
    TimeToSampleEntry,
        count:  u32,
        delta:  u32,
}

impl TimeToSampleBox {
    /// Total number of samples in the table.
    pub fn sample_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count as u64).sum()
    }

    /// Sum of all deltas: the track duration in media timescale units.
    pub fn total_duration(&self) -> u64 {
        self.entries.iter().map(|e| e.count as u64 * e.delta as u64).sum()
    }
}
