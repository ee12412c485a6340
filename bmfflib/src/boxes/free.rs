use std::io;

use crate::boxes::prelude::*;

// Boxes whose payload is skipped wholesale; only the number of
// skipped bytes is kept.
macro_rules! skip_box {
    ($(#[$outer:meta])* $name:ident, $fourcc:expr) => {
        $(#[$outer])*
        #[derive(Clone)]
        pub struct $name {
            pub skipped: u64,
        }

        impl FromBytes for $name {
            fn from_bytes<R: ReadBytes>(stream: &mut R) -> io::Result<$name> {
                let mut reader = BoxReader::new(stream)?;
                let skipped = reader.left();
                reader.skip(skipped)?;
                Ok($name { skipped })
            }
            fn min_size() -> usize {
                8
            }
        }

        impl BoxInfo for $name {
            #[inline]
            fn fourcc(&self) -> FourCC {
                FourCC::new($fourcc)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let mut dbg = f.debug_struct(stringify!($name));
                dbg.field("skipped", &self.skipped);
                dbg.finish()
            }
        }
    };
}

skip_box!(
    /// 8.1.2 Free Space Box (ISO/IEC 14496-12:2015(E))
    Free,
    "free"
);
skip_box!(
    /// 8.1.2 Free Space Box (ISO/IEC 14496-12:2015(E))
    Skip,
    "skip"
);
skip_box!(
    /// 8.10.1 User Data Box (ISO/IEC 14496-12:2015(E))
    UserDataBox,
    "udta"
);
