//! Read ISO-BMFF / MP4 containers into a tree of typed boxes.
//!
//! This is a decode-only library. It makes one forward, sequential
//! pass over the input and materializes every top-level box it finds,
//! with containers holding their decoded children. Unknown box types
//! are framed and skipped, never fatal.
//!
//! ```no_run
//! use bmfflib::{Mp4File, MP4};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = std::env::args().nth(1).expect("expected filename");
//!
//!     let reader = Mp4File::open(&file)?;
//!     let mp4 = MP4::read(reader)?;
//!     let res = bmfflib::track::track_info(&mp4);
//!     println!("{:#?}", res);
//!
//!     Ok(())
//! }
//! ```
//!
//! In general, you start by opening the file with [`Mp4File`](crate::io::Mp4File),
//! then reading it with [`MP4::read`](crate::mp4box::MP4::read). That returns a
//! [`MP4`](crate::mp4box::MP4) struct. The method [`mp4.movie`](crate::mp4box::MP4::movie)
//! gets you a [`MovieBox`](crate::boxes::MovieBox) and from there you can inspect
//! the tracks, etc.
//!
#[macro_use]
mod ioerr;
#[macro_use]
#[doc(hidden)]
pub mod macros;
#[macro_use]
pub mod serialize;
pub mod types;

mod bitreader;
pub mod boxes;
pub mod io;
pub mod mp4box;
pub mod track;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::io::Mp4File;
pub use crate::mp4box::{read_boxes, MP4};
