//! File and memory input sources.
//!
use std::fs;
use std::io::{self, ErrorKind};

use memmap::{Mmap, MmapOptions};

use crate::serialize::{BoxBytes, ReadBytes};

/// Reads an MP4 file.
///
/// The whole file is `mmap`ed; reading is still strictly sequential,
/// and skipping over `mdat` payloads never touches their pages.
///
/// Implements `ReadBytes`, so it can be passed to `MP4::read`.
pub struct Mp4File {
    map:            Option<Mmap>,
    pos:            u64,
    size:           u64,
    input_filename: String,
}

impl Mp4File {
    /// Open an mp4 file.
    pub fn open(path: impl AsRef<str>) -> io::Result<Mp4File> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        let size = file.metadata()?.len();
        let map = if size > 0 {
            Some(unsafe { MmapOptions::new().map(&file)? })
        } else {
            None
        };
        Ok(Mp4File {
            map,
            pos: 0,
            size,
            input_filename: path.to_string(),
        })
    }

    /// Name of the file we're reading.
    pub fn input_filename(&self) -> &str {
        &self.input_filename
    }

    #[inline]
    fn range(&self, amount: u64) -> io::Result<(usize, usize)> {
        if self.pos + amount > self.size {
            return Err(ioerr!(UnexpectedEof, "read past end of {}", self.input_filename));
        }
        Ok((self.pos as usize, (self.pos + amount) as usize))
    }
}

impl ReadBytes for Mp4File {
    #[inline]
    fn read(&mut self, amount: u64) -> io::Result<&[u8]> {
        let (start, end) = self.range(amount)?;
        self.pos += amount;
        Ok(&self.map.as_ref().map(|m| &m[..]).unwrap_or(b"")[start..end])
    }

    #[inline]
    fn peek(&mut self, amount: u64) -> io::Result<&[u8]> {
        let (start, end) = self.range(amount)?;
        Ok(&self.map.as_ref().map(|m| &m[..]).unwrap_or(b"")[start..end])
    }

    #[inline]
    fn skip(&mut self, amount: u64) -> io::Result<()> {
        if self.pos + amount > self.size {
            return Err(ioerr!(UnexpectedEof, "skip past end of {}", self.input_filename));
        }
        self.pos += amount;
        Ok(())
    }

    #[inline]
    fn left(&self) -> u64 {
        self.size - self.pos
    }
}

impl BoxBytes for Mp4File {
    #[inline]
    fn pos(&self) -> u64 {
        self.pos
    }

    #[inline]
    fn size(&self) -> u64 {
        self.size
    }
}

/// In-memory input source.
///
/// Useful when the box stream arrives from somewhere that is not a
/// file - and for tests.
pub struct MemReader<'a> {
    data: &'a [u8],
    pos:  usize,
}

impl<'a> MemReader<'a> {
    pub fn new(data: &'a [u8]) -> MemReader<'a> {
        MemReader { data, pos: 0 }
    }
}

impl<'a> ReadBytes for MemReader<'a> {
    fn read(&mut self, amount: u64) -> io::Result<&[u8]> {
        let amount = amount as usize;
        if self.pos + amount > self.data.len() {
            return Err(ErrorKind::UnexpectedEof.into());
        }
        let res = &self.data[self.pos..self.pos + amount];
        self.pos += amount;
        Ok(res)
    }

    fn peek(&mut self, amount: u64) -> io::Result<&[u8]> {
        let amount = amount as usize;
        if self.pos + amount > self.data.len() {
            return Err(ErrorKind::UnexpectedEof.into());
        }
        Ok(&self.data[self.pos..self.pos + amount])
    }

    fn skip(&mut self, amount: u64) -> io::Result<()> {
        if self.pos + amount as usize > self.data.len() {
            return Err(ErrorKind::UnexpectedEof.into());
        }
        self.pos += amount as usize;
        Ok(())
    }

    #[inline]
    fn left(&self) -> u64 {
        (self.data.len() - self.pos) as u64
    }
}

impl<'a> BoxBytes for MemReader<'a> {
    #[inline]
    fn pos(&self) -> u64 {
        self.pos as u64
    }

    #[inline]
    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}
