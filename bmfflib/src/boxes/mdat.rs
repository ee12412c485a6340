use std::io;

use crate::boxes::prelude::*;

/// 8.1.1 Media Data Box (ISO/IEC 14496-12:2015(E))
///
/// The payload is the raw media data; it is not interpreted here,
/// just skipped, and the number of bytes is recorded.
#[derive(Clone)]
pub struct MediaDataBox {
    pub data_size: u64,
}

impl FromBytes for MediaDataBox {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<MediaDataBox> {
        let mut reader = BoxReader::new(stream)?;
        let data_size = reader.left();
        reader.skip(data_size)?;
        Ok(MediaDataBox { data_size })
    }
    fn min_size() -> usize {
        8
    }
}

impl BoxInfo for MediaDataBox {
    #[inline]
    fn fourcc(&self) -> FourCC {
        FourCC::new("mdat")
    }
}

impl std::fmt::Debug for MediaDataBox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut dbg = f.debug_struct("MediaDataBox");
        dbg.field("data", &format!("[u8; {}]", self.data_size));
        dbg.finish()
    }
}
