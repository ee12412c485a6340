use std::io;

use crate::boxes::prelude::*;

/// 8.7.3.2 Sample Size Box (ISO/IEC 14496-12:2015(E))
///
/// If `sample_size` is non-zero it is the constant size of every
/// sample and the per-sample table is absent; if it is zero, exactly
/// `sample_count` per-sample sizes follow.
#[derive(Clone, Debug, Default)]
pub struct SampleSizeBox {
    pub sample_size:  u32,
    pub sample_count: u32,
    pub entries:      Vec<u32>,
}

impl FromBytes for SampleSizeBox {
    fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<SampleSizeBox> {
        let mut reader = BoxReader::new(stream)?;
        let stream = &mut reader;

        let sample_size = u32::from_bytes(stream)?;
        let sample_count = u32::from_bytes(stream)?;
        log::debug!("SampleSizeBox: sample_size {} sample_count {}", sample_size, sample_count);

        let mut entries = Vec::new();
        if sample_size == 0 {
            for _ in 0..sample_count {
                entries.push(u32::from_bytes(stream)?);
            }
        }
        Ok(SampleSizeBox {
            sample_size,
            sample_count,
            entries,
        })
    }

    fn min_size() -> usize {
        8
    }
}

impl BoxInfo for SampleSizeBox {
    #[inline]
    fn fourcc(&self) -> FourCC {
        FourCC::new("stsz")
    }
    #[inline]
    fn max_version() -> Option<u8> {
        Some(0)
    }
}

impl SampleSizeBox {
    /// Size of one sample. Sample indices are 0-based here.
    pub fn size_of(&self, sample: u32) -> Option<u32> {
        if sample >= self.sample_count {
            return None;
        }
        if self.sample_size != 0 {
            Some(self.sample_size)
        } else {
            self.entries.get(sample as usize).copied()
        }
    }

    /// Total size of all samples in bytes.
    pub fn total_size(&self) -> u64 {
        if self.sample_size != 0 {
            self.sample_size as u64 * self.sample_count as u64
        } else {
            self.entries.iter().map(|&s| s as u64).sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;

    #[test]
    fn constant_size_reads_no_table() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&100u32.to_be_bytes()); // sample_size
        payload.extend_from_slice(&10u32.to_be_bytes()); // sample_count
        let data = full_boxb("stsz", 0, 0, &payload);

        let stsz = SampleSizeBox::from_bytes(&mut &data[..]).unwrap();
        assert_eq!(stsz.entries.len(), 0);
        assert_eq!(stsz.size_of(0), Some(100));
        assert_eq!(stsz.size_of(9), Some(100));
        assert_eq!(stsz.size_of(10), None);
        assert_eq!(stsz.total_size(), 1000);
    }

    #[test]
    fn zero_size_reads_per_sample_table() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&0u32.to_be_bytes());
        payload.extend_from_slice(&3u32.to_be_bytes());
        for sz in &[10u32, 20, 30] {
            payload.extend_from_slice(&sz.to_be_bytes());
        }
        let data = full_boxb("stsz", 0, 0, &payload);

        let stsz = SampleSizeBox::from_bytes(&mut &data[..]).unwrap();
        assert_eq!(stsz.entries, vec![10, 20, 30]);
        assert_eq!(stsz.size_of(1), Some(20));
        assert_eq!(stsz.total_size(), 60);
    }

    #[test]
    fn truncated_table_is_an_error() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&0u32.to_be_bytes());
        payload.extend_from_slice(&3u32.to_be_bytes());
        payload.extend_from_slice(&10u32.to_be_bytes()); // only 1 of 3
        let data = full_boxb("stsz", 0, 0, &payload);

        let e = SampleSizeBox::from_bytes(&mut &data[..]).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
    }
}
