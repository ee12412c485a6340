//
// ISO/IEC 14496-12:2015(E) 8.5.2 Sample Description Box (mp4a),
// ISO/IEC 14496-1 7.2.6 Object Descriptors (esds).
//
use std::io;

use crate::bitreader::BitReader;
use crate::boxes::prelude::*;

def_box! {
    /// AAC sample entry (AudioSampleEntry).
    AacSampleEntry {
        skip:                   6,
        data_reference_index:   u16,
        skip:                   8,
        // (mono = 1 ; stereo = 2)
        channel_count:          u16,
        // audio sample number of bits, 8 or 16
        sample_size:            u16,
        skip:                   4,
        sample_rate:            FixedFloat16_16,
        // sub boxes, probably only esds.
        sub_boxes:              [MP4Box],
    },
    fourcc => "mp4a",
    version => [],
}

impl AacSampleEntry {
    /// The contained elementary stream descriptor box.
    pub fn es_descriptor(&self) -> Option<&ESDescriptorBox> {
        first_box!(&self.sub_boxes, ESDescriptorBox)
    }

    /// Return codec id, like "mp4a.40.2".
    pub fn codec_id(&self) -> String {
        match self.es_descriptor() {
            Some(b) => b.codec_id(),
            None => "mp4a".to_string(),
        }
    }

    /// Return description of the codec, like "AAC-LC".
    pub fn codec_name(&self) -> &'static str {
        match self.es_descriptor() {
            Some(b) => b.codec_name(),
            None => "MPEG-4 Audio",
        }
    }
}

def_box! {
    /// MPEG-4 Elementary Stream Descriptor box.
    ESDescriptorBox {
        es_descriptor:   ESDescriptor,
    },
    fourcc => "esds",
    version => [0],
}

impl ESDescriptorBox {
    /// Return human name of the codec, like "AAC-LC" or "HE-AAC".
    pub fn codec_name(&self) -> &'static str {
        let config = &self.es_descriptor.decoder_config;
        if config.stream_type != 5 {
            return "mp4a";
        }
        match config.specific_info.as_ref().and_then(|si| si.audio.as_ref()) {
            Some(audio) => match audio.profile {
                2 => "AAC-LC",
                5 => "HE-AAC",
                29 => "HE-AACv2",
                _ => "AAC",
            },
            None => "MPEG-4 Audio",
        }
    }

    /// Return codec id, like "mp4a.40.2".
    pub fn codec_id(&self) -> String {
        let config = &self.es_descriptor.decoder_config;
        if config.stream_type != 5 {
            return "mp4a".to_string();
        }
        match config.specific_info.as_ref().and_then(|si| si.audio.as_ref()) {
            Some(audio) => format!("mp4a.{:02x}.{}", config.object_type, audio.profile),
            None => format!("mp4a.{:02x}", config.object_type),
        }
    }
}

//
//
// The MPEG-4 descriptor family. Descriptors frame their own lengths
// (continuation-bit encoded), independent of the box framing; all
// descriptor reads still go through the owning box's limited reader,
// which is what keeps the two accountings reconciled.
//
//

const ES_DESCRIPTOR_TAG: u8 = 0x03;
const DECODER_CONFIG_DESCRIPTOR_TAG: u8 = 0x04;
const DECODER_SPECIFIC_INFO_TAG: u8 = 0x05;
const SL_CONFIG_DESCRIPTOR_TAG: u8 = 0x06;

/// Every descriptor starts with a tag and an expandable length.
#[derive(Clone, Debug)]
pub(crate) struct BaseDescriptor {
    pub tag:        u8,
    /// Declared payload length.
    pub size:       u32,
    /// Tag byte plus however many length bytes were needed.
    pub header_len: u32,
}

impl FromBytes for BaseDescriptor {
    // Read tag and continuation-bit encoded length: 7 value bits per
    // byte, high bit set means another length byte follows.
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<BaseDescriptor> {
        let tag = u8::from_bytes(stream)?;
        let mut size = 0u32;
        let mut header_len = 1u32;
        for i in 1..=4 {
            let b = u8::from_bytes(stream)?;
            size = (size << 7) | (b & 0x7f) as u32;
            header_len += 1;
            if b & 0x80 == 0 {
                break;
            }
            if i == 4 {
                return Err(ioerr!(InvalidData, "descriptor 0x{:02x}: length field > 4 bytes", tag));
            }
        }
        Ok(BaseDescriptor { tag, size, header_len })
    }

    fn min_size() -> usize {
        2
    }
}

impl BaseDescriptor {
    fn expect_tag(&self, tag: u8) -> io::Result<()> {
        if self.tag != tag {
            return Err(ioerr!(
                InvalidData,
                "descriptor: expected tag 0x{:02x}, got 0x{:02x}",
                tag,
                self.tag
            ));
        }
        Ok(())
    }
}

/// Elementary Stream Descriptor, tag 0x03.
///
/// In an MP4 file, depends_on_es_id, url, and ocr_es_id are normally
/// all absent.
#[derive(Clone, Debug)]
pub struct ESDescriptor {
    // lower 16 bits of the track id, or 0.
    pub es_id:            u16,
    pub stream_priority:  u8,
    pub depends_on_es_id: Option<u16>,
    pub url:              Option<PString>,
    pub ocr_es_id:        Option<u16>,
    pub decoder_config:   DecoderConfigDescriptor,
    pub sl_config:        SLConfigDescriptor,
    pub data:             Data,
}

impl FromBytes for ESDescriptor {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<ESDescriptor> {
        let base = BaseDescriptor::from_bytes(stream)?;
        base.expect_tag(ES_DESCRIPTOR_TAG)?;
        let start_left = stream.left();

        let es_id = u16::from_bytes(stream)?;
        let flags = u8::from_bytes(stream)?;
        let stream_priority = flags & 0x1f;
        let depends_on_es_id = if flags & 0x80 > 0 {
            Some(u16::from_bytes(stream)?)
        } else {
            None
        };
        let url = if flags & 0x40 > 0 {
            Some(PString::from_bytes(stream)?)
        } else {
            None
        };
        let ocr_es_id = if flags & 0x20 > 0 {
            Some(u16::from_bytes(stream)?)
        } else {
            None
        };
        let decoder_config = DecoderConfigDescriptor::from_bytes(stream)?;
        let sl_config = SLConfigDescriptor::from_bytes(stream)?;

        let data = trailing_data(stream, start_left, base.size)?;

        Ok(ESDescriptor {
            es_id,
            stream_priority,
            depends_on_es_id,
            url,
            ocr_es_id,
            decoder_config,
            sl_config,
            data,
        })
    }
    fn min_size() -> usize {
        0
    }
}

/// Decoder config, tag 0x04.
///
/// stream_type 0x05 is audio; object_type 0x40 is
/// Audio ISO/IEC 14496-3 (AAC).
#[derive(Clone, Debug)]
pub struct DecoderConfigDescriptor {
    pub object_type:   u8,
    pub stream_type:   u8,
    pub upstream:      bool,
    pub buffer_size:   u32,
    pub max_bitrate:   u32,
    pub avg_bitrate:   u32,
    pub specific_info: Option<DecoderSpecificInfo>,
    pub data:          Data,
}

impl FromBytes for DecoderConfigDescriptor {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<DecoderConfigDescriptor> {
        let base = BaseDescriptor::from_bytes(stream)?;
        base.expect_tag(DECODER_CONFIG_DESCRIPTOR_TAG)?;
        let start_left = stream.left();

        let object_type = u8::from_bytes(stream)?;
        let b = u32::from_bytes(stream)?;
        let b1 = (b >> 24) as u8;
        let stream_type = b1 >> 2;
        let upstream = b1 & 0x02 > 0;
        let buffer_size = b & 0x00ff_ffff;
        let max_bitrate = u32::from_bytes(stream)?;
        let avg_bitrate = u32::from_bytes(stream)?;

        // The decoder specific info is optional.
        let specific_info = if start_left - stream.left() < base.size as u64 {
            Some(DecoderSpecificInfo::from_bytes(stream, object_type)?)
        } else {
            None
        };

        let data = trailing_data(stream, start_left, base.size)?;

        Ok(DecoderConfigDescriptor {
            object_type,
            stream_type,
            upstream,
            buffer_size,
            max_bitrate,
            avg_bitrate,
            specific_info,
            data,
        })
    }
    fn min_size() -> usize {
        0
    }
}

/// Decoder specific info, tag 0x05.
#[derive(Clone, Debug, Default)]
pub struct DecoderSpecificInfo {
    pub data:  Data,
    pub audio: Option<AudioSpecificConfig>,
}

/// For mp4a.40.<profile>.
///
/// Common profiles:
/// 2:  AAC-LC
/// 5:  HE-AAC   (AAC-LC + SBR)
/// 29: HE-AACv2 (AAC-LC + SBR + PS)
#[derive(Clone, Debug, Default)]
pub struct AudioSpecificConfig {
    pub profile:                  u8,
    pub sampling_frequency_index: u8,
    pub sampling_frequency:       u32,
    pub channel_config:           u8,
}

impl DecoderSpecificInfo {
    fn from_bytes<R: ReadBytes>(stream: &mut R, object_type: u8) -> io::Result<DecoderSpecificInfo> {
        let base = BaseDescriptor::from_bytes(stream)?;
        base.expect_tag(DECODER_SPECIFIC_INFO_TAG)?;

        let data = Data::read(stream, base.size as usize)?;

        let audio = if object_type == 0x40 && data.len() >= 2 {
            let mut b = BitReader::new(&data.0);

            let mut profile = b.read_bits(5)? as u8;
            if profile == 31 {
                profile = 32 + b.read_bits(6)? as u8;
            }
            let sampling_frequency_index = b.read_bits(4)? as u8;
            let mut sampling_frequency = 0;
            if sampling_frequency_index == 0xf {
                sampling_frequency = b.read_bits(24)?;
            }
            let channel_config = b.read_bits(4)? as u8;

            Some(AudioSpecificConfig {
                profile,
                sampling_frequency_index,
                sampling_frequency,
                channel_config,
            })
        } else {
            None
        };

        Ok(DecoderSpecificInfo { data, audio })
    }
}

/// SL packet header configuration, tag 0x06.
#[derive(Clone, Debug, Default)]
pub struct SLConfigDescriptor {
    pub config_type: u8,
    pub data:        Data,
}

impl FromBytes for SLConfigDescriptor {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<SLConfigDescriptor> {
        let base = BaseDescriptor::from_bytes(stream)?;
        base.expect_tag(SL_CONFIG_DESCRIPTOR_TAG)?;
        let start_left = stream.left();

        let config_type = u8::from_bytes(stream)?;
        let data = trailing_data(stream, start_left, base.size)?;

        Ok(SLConfigDescriptor { config_type, data })
    }
    fn min_size() -> usize {
        0
    }
}

/// Pascal string: 1 byte of length followed by the string itself.
#[derive(Clone, Default)]
pub struct PString(pub String);

impl FromBytes for PString {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<PString> {
        let len = u8::from_bytes(stream)? as u64;
        let data = if len > 0 { stream.read(len)? } else { &b""[..] };
        let s = data.iter().map(|&b| std::cmp::min(b, 127) as char).collect();
        Ok(PString(s))
    }
    fn min_size() -> usize {
        1
    }
}

impl std::fmt::Debug for PString {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

// Read any unread remainder of the descriptor's declared length.
// Having consumed more than the declared length is a framing error.
//
// Consumption is measured as the drop in stream.left() since the
// descriptor's payload started, so it holds on any byte source.
fn trailing_data<R: ReadBytes>(stream: &mut R, start_left: u64, size: u32) -> io::Result<Data> {
    let done = start_left - stream.left();
    if done > size as u64 {
        return Err(ioerr!(
            InvalidData,
            "descriptor: consumed {} bytes of a declared {}",
            done,
            size
        ));
    }
    if done < size as u64 {
        Data::read(stream, (size as u64 - done) as usize)
    } else {
        Ok(Data::default())
    }
}
