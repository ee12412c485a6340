//! Box header framing, the budget-limited box reader, and the
//! top-level `MP4` entry point.
use std::fmt::Debug;
use std::io;

use crate::boxes::{FileTypeBox, MovieBox};
use crate::serialize::{BoxBytes, FromBytes, ReadBytes};
use crate::types::*;

pub use crate::boxes::MP4Box;

/// The design intentionally restricts box sizes to 31 bits for
/// overflow safety, not because the format forbids larger values.
pub const MAX_BOX_SIZE: u64 = 0x7fff_ffff;

/// Gets implemented for every box.
pub trait BoxInfo {
    /// The "fourcc" type tag of this box.
    fn fourcc(&self) -> FourCC;
    /// Highest full-box version that we recognize.
    /// If it is the default (None) this is a base box.
    fn max_version() -> Option<u8>
    where
        Self: Sized,
    {
        None
    }
}

//
//
// Helpers to read the box header.
//
//

#[derive(Debug, Clone)]
pub(crate) struct BoxHeader {
    /// Payload bytes following the header.
    pub(crate) size:        u64,
    /// Bytes consumed by the header itself, including the large size,
    /// extended type and version/flags extensions when present.
    pub(crate) header_len:  u64,
    pub(crate) fourcc:      FourCC,
    /// Extended type, present only for "uuid" boxes.
    pub(crate) usertype:    Option<[u8; 16]>,
    pub(crate) version:     Option<u8>,
    pub(crate) flags:       u32,
    pub(crate) max_version: Option<u8>,
}

impl BoxHeader {
    pub(crate) fn read(stream: &mut impl ReadBytes) -> io::Result<BoxHeader> {
        let size1 = u32::from_bytes(stream)?;
        let fourcc = FourCC::from_bytes(stream)?;
        let mut header_len = 8u64;

        // A small size of 0 means "extends to the end of the stream",
        // a small size of 1 means the actual size follows in 64 bits.
        let total = match size1 {
            0 => 8 + stream.left(),
            1 => {
                header_len += 8;
                u64::from_bytes(stream)?
            },
            x => x as u64,
        };
        if total > MAX_BOX_SIZE {
            return Err(ioerr!(InvalidData, "{}: box size {} exceeds 31 bits", fourcc, total));
        }

        let mut usertype = None;
        if fourcc == b"uuid" {
            let data = stream.read(16)?;
            let mut ut = [0u8; 16];
            ut.copy_from_slice(data);
            usertype = Some(ut);
            header_len += 16;
        }

        let mut size = total.checked_sub(header_len).ok_or_else(|| {
            ioerr!(
                InvalidData,
                "{}: declared size {} smaller than box header ({} bytes)",
                fourcc,
                total,
                header_len
            )
        })?;

        // For box types we know to be full boxes, the version and flags
        // are framed here, once; field decoders pick them up through the
        // version()/flags() accessors.
        let max_version = MP4Box::max_version_from_fourcc(fourcc);
        let mut version = None;
        let mut flags = 0;
        if max_version.is_some() {
            if size < 4 {
                return Err(ioerr!(InvalidData, "{}: no room for version and flags", fourcc));
            }
            let vf = u32::from_bytes(stream)?;
            version = Some((vf >> 24) as u8);
            flags = vf & 0x00ff_ffff;
            size -= 4;
            header_len += 4;
        }

        Ok(BoxHeader {
            size,
            header_len,
            fourcc,
            usertype,
            version,
            flags,
            max_version,
        })
    }

    pub(crate) fn peek(stream: &mut impl ReadBytes) -> io::Result<BoxHeader> {
        let amount = stream.left();
        let mut data = stream.peek(amount)?;
        BoxHeader::read(&mut data)
    }
}

/// Limited reader that reads no further than the box size.
pub(crate) struct BoxReader<'a> {
    pub(crate) header: BoxHeader,
    maxsize:           u64,
    pos:               u64,
    inner:             &'a mut dyn ReadBytes,
}

impl<'a> BoxReader<'a> {
    /// Read the box header, then return a size-limited reader.
    pub fn new(stream: &'a mut impl ReadBytes) -> io::Result<BoxReader<'a>> {
        let header = BoxHeader::read(stream)?;
        let maxsize = stream.pos() + header.size;
        log::trace!("BoxReader {:?} maxsize {} left {}", header, maxsize, stream.left());
        Ok(BoxReader {
            header,
            maxsize,
            pos: stream.pos(),
            inner: stream,
        })
    }
}

impl Drop for BoxReader<'_> {
    fn drop(&mut self) {
        if self.pos < self.maxsize {
            log::trace!(
                "BoxReader {} drop: skipping {}",
                self.header.fourcc,
                self.maxsize - self.pos
            );
            let _ = self.skip(self.maxsize - self.pos);
        }
    }
}

// Delegate ReadBytes to the inner reader, enforcing the byte budget.
impl ReadBytes for BoxReader<'_> {
    #[inline]
    fn read(&mut self, amount: u64) -> io::Result<&[u8]> {
        if self.pos + amount > self.maxsize {
            return Err(ioerr!(
                UnexpectedEof,
                "{}: read of {} bytes overruns the box",
                self.header.fourcc,
                amount
            ));
        }
        let res = self.inner.read(amount)?;
        self.pos += amount;
        Ok(res)
    }
    #[inline]
    fn peek(&mut self, amount: u64) -> io::Result<&[u8]> {
        if self.pos + amount > self.maxsize {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        self.inner.peek(amount)
    }
    #[inline]
    fn skip(&mut self, amount: u64) -> io::Result<()> {
        if self.pos + amount > self.maxsize {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        self.inner.skip(amount)?;
        self.pos += amount;
        Ok(())
    }
    #[inline]
    fn left(&self) -> u64 {
        if self.pos > self.maxsize {
            0
        } else {
            self.maxsize - self.pos
        }
    }
}

// Delegate BoxBytes to the inner reader.
impl BoxBytes for BoxReader<'_> {
    #[inline]
    fn pos(&self) -> u64 {
        self.pos
    }
    #[inline]
    fn size(&self) -> u64 {
        self.maxsize
    }
    fn version(&self) -> u8 {
        self.header.version.unwrap_or(0)
    }
    fn flags(&self) -> u32 {
        self.header.flags
    }
    fn fourcc(&self) -> FourCC {
        self.header.fourcc
    }
}

/// Main entry point for an ISOBMFF box structure.
pub struct MP4 {
    /// The boxes at the top level.
    pub boxes: Vec<MP4Box>,
}

impl Debug for MP4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut dbg = f.debug_struct("MP4");
        dbg.field("boxes", &self.boxes);
        dbg.finish()
    }
}

impl MP4 {
    /// Read an ISOBMFF box structure into memory.
    pub fn read<R: ReadBytes>(file: R) -> io::Result<MP4> {
        let boxes = read_boxes(file)?;
        Ok(MP4 { boxes })
    }

    /// Get a reference to the MovieBox.
    pub fn movie(&self) -> Option<&MovieBox> {
        first_box!(&self.boxes, MovieBox)
    }

    /// Get a reference to the FileTypeBox.
    pub fn file_type(&self) -> Option<&FileTypeBox> {
        first_box!(&self.boxes, FileTypeBox)
    }

    /// Check if the structure of the file is valid and contains all
    /// the primary boxes.
    pub fn is_valid(&self) -> bool {
        match self.movie() {
            Some(m) => m.is_valid(),
            None => {
                log::error!("no MovieBox present");
                false
            },
        }
    }
}

/// Read a collection of boxes from a stream.
///
/// Returns when the stream has no room for another box header;
/// a clean end-of-stream at a box boundary is not an error.
pub fn read_boxes<R: ReadBytes>(mut file: R) -> io::Result<Vec<MP4Box>> {
    let mut boxes = Vec::new();
    while file.left() >= 8 {
        let b = MP4Box::from_bytes(&mut file)?;
        boxes.push(b);
    }
    Ok(boxes)
}

//
//
// Helper types.
//
//

/// Any unknown box we encounter is put into a GenericBox.
///
/// Its payload is not interpreted, just skipped, so unrecognized
/// boxes never abort decoding.
#[derive(Clone)]
pub struct GenericBox {
    pub fourcc:   FourCC,
    pub usertype: Option<[u8; 16]>,
    /// Payload bytes that were skipped.
    pub skipped:  u64,
}

impl FromBytes for GenericBox {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<GenericBox> {
        let mut reader = BoxReader::new(stream)?;
        let skipped = reader.left();
        reader.skip(skipped)?;
        Ok(GenericBox {
            fourcc: reader.header.fourcc,
            usertype: reader.header.usertype,
            skipped,
        })
    }
    fn min_size() -> usize {
        8
    }
}

impl BoxInfo for GenericBox {
    #[inline]
    fn fourcc(&self) -> FourCC {
        self.fourcc
    }
}

impl Debug for GenericBox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut dbg = f.debug_struct("GenericBox");
        dbg.field("fourcc", &self.fourcc);
        if let Some(ref usertype) = self.usertype {
            dbg.field("usertype", usertype);
        }
        dbg.field("data", &format!("[u8; {}]", self.skipped));
        dbg.finish()
    }
}
