//
// ISO/IEC 14496-12:2015(E) 8.5.2 Sample Description Box,
// ISO/IEC 14496-15 5.3.4 AVC Video Stream Definition.
//
use std::io;

use crate::boxes::prelude::*;

def_box! {
    /// AVC sample entry (VisualSampleEntry).
    AvcSampleEntry {
        skip:                   6,
        data_reference_index:   u16,
        skip:                   16,
        width:                  u16,
        height:                 u16,
        // defaults to 72 dpi
        horiz_resolution:       FixedFloat16_16,
        vert_resolution:        FixedFloat16_16,
        skip:                   4,
        // defaults to 1
        frame_count:            u16,
        compressor_name:        CompressorName,
        // defaults to 0x0018
        depth:                  u16,
        skip:                   2,
        // avcC and other boxes (pasp?)
        sub_boxes:              [MP4Box],
    },
    fourcc => "avc1",
    version => [],
}

impl AvcSampleEntry {
    /// The contained AVC decoder configuration box.
    pub fn avc_config(&self) -> Option<&AvcConfigurationBox> {
        first_box!(&self.sub_boxes, AvcConfigurationBox)
    }

    /// Return codec id, like "avc1.4d401f".
    pub fn codec_id(&self) -> String {
        match self.avc_config() {
            Some(c) => c.configuration.codec_id(),
            None => "avc1.unknown".to_string(),
        }
    }

    /// Return human name of the codec, like "AVC Baseline".
    pub fn codec_name(&self) -> &'static str {
        match self.avc_config() {
            Some(c) => c.configuration.codec_name(),
            None => "AVC",
        }
    }
}

def_box! {
    /// Box that contains the AVC Decoder Configuration Record.
    AvcConfigurationBox {
        configuration: AvcDecoderConfigurationRecord,
    },
    fourcc => "avcC",
    version => [],
}

def_struct! {
    /// AVC Decoder Configuration Record.
    ///
    /// Only the leading profile/level fields are interpreted; the
    /// parameter sets are kept as opaque data.
    #[derive(Clone)]
    AvcDecoderConfigurationRecord,
        configuration_version:  u8,
        profile_idc:            u8,
        constraint_set_flags:   u8,
        level_idc:              u8,
        data:                   Data,
}

impl AvcDecoderConfigurationRecord {
    /// Return human name of codec, like "Baseline" or "High".
    pub fn codec_name(&self) -> &'static str {
        match self.profile_idc {
            0x2c => "AVC CAVLC 4:4:4",
            0x42 => "AVC Baseline",
            0x4d => "AVC Main",
            0x58 => "AVC Extended",
            0x64 => "AVC High",
            0x6e => "AVC High 10",
            0x7a => "AVC High 4:2:2",
            0xf4 => "AVC High 4:4:4",
            _ => "AVC",
        }
    }

    /// Return codec id as avc1.4d401f
    pub fn codec_id(&self) -> String {
        format!(
            "avc1.{:02x}{:02x}{:02x}",
            self.profile_idc, self.constraint_set_flags, self.level_idc
        )
    }
}

/// Fixed 32-byte pascal string naming the video encoder.
#[derive(Clone, Default)]
pub struct CompressorName(pub String);

impl FromBytes for CompressorName {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<CompressorName> {
        let data = stream.read(32)?;
        let len = std::cmp::min(data[0] as usize, 31);
        let s = data[1..1 + len].iter().map(|&b| std::cmp::min(b, 127) as char).collect();
        Ok(CompressorName(s))
    }
    fn min_size() -> usize {
        32
    }
}

impl std::fmt::Debug for CompressorName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
