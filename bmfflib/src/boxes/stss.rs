use crate::boxes::prelude::*;

def_box! {
    /// 8.6.2 Sync Sample Box (ISO/IEC 14496-12:2015(E))
    ///
    /// The numbers of the samples that are sync samples, in strictly
    /// increasing order. 1-based.
    SyncSampleBox {
        entries:        [u32, sized],
    },
    fourcc => "stss",
    version => [0],
}
