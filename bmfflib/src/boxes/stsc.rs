use crate::boxes::prelude::*;

def_box! {
    /// 8.7.4 Sample To Chunk Box (ISO/IEC 14496-12:2015(E))
    SampleToChunkBox {
        entries:        [SampleToChunkEntry, sized],
    },
    fourcc => "stsc",
    version => [0],
}

def_struct! {
    /// Entry in SampleToChunkBox.
    #[derive(Clone)]
    SampleToChunkEntry,
        first_chunk:                u32,
        samples_per_chunk:          u32,
        sample_description_index:   u32,
}
