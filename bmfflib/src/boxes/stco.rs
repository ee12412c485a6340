use crate::boxes::prelude::*;

def_box! {
    /// 8.7.5 Chunk Offset Box (ISO/IEC 14496-12:2015(E))
    ///
    /// 32-bit offsets only ("stco"); the 64-bit "co64" variant
    /// decodes as an unknown box.
    ChunkOffsetBox {
        entries:        [u32, sized],
    },
    fourcc => "stco",
    version => [0],
}
