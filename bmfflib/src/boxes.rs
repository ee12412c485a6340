//! All the boxes we know.
//!
//! This module does not only contain boxes, but also the types
//! that are used in the boxes.
//!
use std::fmt::Debug;

pub(crate) mod misc;
pub(crate) mod prelude;

pub use self::misc::*;
use self::prelude::*;

use crate::mp4box::{BoxHeader, GenericBox};

def_boxes! {
    FileTypeBox, b"ftyp";
    MovieHeaderBox, b"mvhd";
    TrackHeaderBox, b"tkhd";
    MediaHeaderBox, b"mdhd";
    VideoMediaHeaderBox, b"vmhd";
    SoundMediaHeaderBox, b"smhd";
    DataInformationBox, b"dinf";

    // Below are boxes that are defined manually in boxes/ *.rs
    MovieBox, b"moov" => moov;
    TrackBox, b"trak" => trak;
    MediaBox, b"mdia" => mdia;
    MediaInformationBox, b"minf" => minf;
    SampleTableBox, b"stbl" => stbl;
    HandlerBox, b"hdlr" => hdlr;

    SampleDescriptionBox, b"stsd" => stsd;
    TimeToSampleBox, b"stts" => stts;
    CompositionOffsetBox, b"ctts" => ctts;
    SyncSampleBox, b"stss" => stss;
    SampleToChunkBox, b"stsc" => stsc;
    SampleSizeBox, b"stsz" => stsz;
    ChunkOffsetBox, b"stco" => stco;

    AvcSampleEntry, b"avc1" => avc1;
    AvcConfigurationBox, b"avcC";

    AacSampleEntry, b"mp4a" => mp4a;
    ESDescriptorBox, b"esds";

    MediaDataBox, b"mdat" => mdat;

    Free, b"free" => free;
    Skip, b"skip";
    UserDataBox, b"udta";
}
