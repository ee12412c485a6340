use std::io;

use crate::boxes::prelude::*;

def_box! {
    /// 8.6.1.3 Composition Time to Sample Box (ISO/IEC 14496-12:2015(E))
    CompositionOffsetBox {
        entries:        [CompositionOffsetEntry, sized],
    },
    fourcc => "ctts",
    version => [1],
}

/// Composition offset entry.
///
/// The offset is unsigned in version 0 and signed in version 1.
#[derive(Clone, Debug, Default)]
pub struct CompositionOffsetEntry {
    pub count:  u32,
    pub offset: i32,
}

impl FromBytes for CompositionOffsetEntry {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<Self> {
        let count = u32::from_bytes(stream)?;
        let offset = if stream.version() == 0 {
            let offset = u32::from_bytes(stream)?;
            std::cmp::min(offset, 0x7fffffff) as i32
        } else {
            i32::from_bytes(stream)?
        };
        Ok(CompositionOffsetEntry { count, offset })
    }

    fn min_size() -> usize {
        8
    }
}
