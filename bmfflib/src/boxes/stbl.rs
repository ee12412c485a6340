use crate::boxes::prelude::*;
use crate::boxes::{
    ChunkOffsetBox, CompositionOffsetBox, SampleDescriptionBox, SampleSizeBox, SampleToChunkBox,
    SyncSampleBox, TimeToSampleBox,
};

def_box! {
    /// 8.5.1 Sample Table Box (ISO/IEC 14496-12:2015(E))
    SampleTableBox {
        boxes:      [MP4Box],
    },
    fourcc => "stbl",
    version => [],
}

impl SampleTableBox {
    declare_box_methods_opt!(SampleDescriptionBox, sample_description);
    declare_box_methods_opt!(TimeToSampleBox, time_to_sample);
    declare_box_methods_opt!(CompositionOffsetBox, composition_offset);
    declare_box_methods_opt!(SyncSampleBox, sync_samples);
    declare_box_methods_opt!(SampleToChunkBox, sample_to_chunk);
    declare_box_methods_opt!(SampleSizeBox, sample_size);
    declare_box_methods_opt!(ChunkOffsetBox, chunk_offset);
}
