pub(crate) use crate::boxes::MP4Box;
pub(crate) use crate::mp4box::{BoxInfo, BoxReader};
pub(crate) use crate::serialize::{BoxBytes, FromBytes, ReadBytes};
pub(crate) use crate::types::*;
