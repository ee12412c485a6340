//
// Several helper macros.
//
//

// List of all boxes, used in boxes.rs.
//
// For each box, include its module. Then build an enum with
// a variant for each box.
macro_rules! def_boxes {

    // main entry point.
    ($($name:ident, $fourcc:expr $(=> $mod:tt)? ; )+) => {

        // include modules.
        $(
            $(
                pub(crate) mod $mod;
                pub use self::$mod::*;
            )?
        )+

        // build enum.
        impl_enum!(MP4Box, $($name, $fourcc),*);
    };

}

// Define one box.
//
// def_box! {
//     TypeName {
//         member: type,
//         member: type,
//     },
//     fourcc => "fourcc",
//     version => [],       // base box
//     version => [1],      // full box, max version we support
//  }
macro_rules! def_box {
    ($(#[$outer:meta])* $name:ident $block:tt, fourcc => $fourcc:expr, version => $version:tt $(,)?) => {
        // Define the struct itself.
        def_box!(@def_struct $(#[$outer])* #[derive(Clone)] $name, $block);

        impl_boxinfo!($name, $fourcc, $version);
        impl_debug!($name, $block);
        impl_frombytes!($name, $block);
    };
    // def_struct! wants the block without braces.
    (@def_struct $(#[$outer:meta])* $name:ident, { $($block:tt)* }) => {
        def_struct!(@def_struct $(#[$outer])* $name, $($block)*);
    };
}

// Implement the BoxInfo trait for this struct.
macro_rules! impl_boxinfo {
    ($name:ident, $fourcc:expr, []) => {
        impl BoxInfo for $name {
            #[inline]
            fn fourcc(&self) -> FourCC {
                FourCC::new($fourcc)
            }
        }
    };
    ($name:ident, $fourcc:expr, [$maxver:tt]) => {
        impl BoxInfo for $name {
            #[inline]
            fn fourcc(&self) -> FourCC {
                FourCC::new($fourcc)
            }
            #[inline]
            fn max_version() -> Option<u8> {
                Some($maxver)
            }
        }
    };
}

// Implement the Debug trait for this struct.
macro_rules! impl_debug {
    ($name:ident, { $( $field:tt: $type:tt ),* $(,)? }) => {
        // Debug implementation that adds the fourcc field.
        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let mut dbg = f.debug_struct(stringify!($name));
                dbg.field("fourcc", &self.fourcc());
                $(
                    def_struct!(@filter_skip $field, dbg.field(stringify!($field), &self.$field););
                )*
                dbg.finish()
            }
        }
    }
}

// Implement the FromBytes trait for this struct.
macro_rules! impl_frombytes {
    ($name:ident, { $( $field:tt: $type:tt ),* $(,)? }) => {
        impl FromBytes for $name {
            #[allow(unused_variables)]
            fn from_bytes<R: ReadBytes>(stream: &mut R) -> std::io::Result<$name> {
                // Frame the header, then deserialize the fields through
                // a reader that stops at the box boundary.
                let mut reader = $crate::mp4box::BoxReader::new(stream)?;
                let reader = &mut reader;
                def_struct!(@from_bytes $name, [], reader, $(
                    $field: $type,
                )*)
            }

            fn min_size() -> usize {
                $(
                    def_struct!(@min_size $type) +
                )* 0
            }
        }
    };
}

// Define the MP4Box enum.
macro_rules! impl_enum {
    ($enum:ident, $($name:ident, $fourcc:expr),*) => {
        /// All the boxes we know.
        #[derive(Clone)]
        pub enum $enum {
            $(
                $name($name),
            )+
            GenericBox(GenericBox),
        }

        impl $enum {
            pub(crate) fn max_version_from_fourcc(fourcc: FourCC) -> Option<u8> {
                match &fourcc.to_be_bytes() {
                    $(
                        $fourcc => $name::max_version(),
                    )+
                    _ => None,
                }
            }
        }

        // Define FromBytes trait for the enum.
        impl FromBytes for $enum {
            fn from_bytes<R: ReadBytes>(mut stream: &mut R) -> std::io::Result<$enum> {

                // Peek at the header.
                let header = BoxHeader::peek(stream)?;
                log::trace!("MP4Box::from_bytes: header: {:?}", header);

                // If the version is too high, read it as a GenericBox.
                if let (Some(version), Some(max_version)) = (header.version, header.max_version) {
                    if version > max_version {
                        return Ok($enum::GenericBox(GenericBox::from_bytes(&mut stream)?));
                    }
                }

                // Read the body.
                let b = header.fourcc.to_be_bytes();
                let e = match &b {
                    $(
                        $fourcc => {
                            $enum::$name($name::from_bytes(stream)?)
                        },
                    )+
                    _ => $enum::GenericBox(GenericBox::from_bytes(stream)?),
                };
                Ok(e)
            }

            fn min_size() -> usize {
                8
            }
        }

        // Define BoxInfo trait for the enum.
        impl BoxInfo for $enum {
            #[inline]
            fn fourcc(&self) -> FourCC {
                match self {
                    $(
                        &$enum::$name(ref b) => b.fourcc(),
                    )+
                    &$enum::GenericBox(ref b) => b.fourcc(),
                }
            }
        }

        // Debug implementation that delegates to the variant.
        impl Debug for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match self {
                    $(
                        &$enum::$name(ref b) => Debug::fmt(b, f),
                    )+
                    &$enum::GenericBox(ref b) => Debug::fmt(b, f),
                }
            }
        }
    };
}

/// Find the first box of type $type in $vec.
#[macro_export]
macro_rules! first_box {
    (@FIELD $val:expr, SampleDescriptionBox) => {
        &$val.entries.0
    };
    (@FIELD $val:expr, $type:ident) => {
        &$val.boxes
    };
    (@MAIN $vec:expr, $type:ident) => {
        {
            let _x: Option<&$type> = $crate::iter_box!($vec, $type).next();
            _x
        }
    };
    (@MAIN $vec:expr, $type:ident $(/$path:ident)+) => {
        first_box!(@MAIN $vec, $type).and_then(|x| {
            let _i = first_box!(@FIELD x, $type);
            first_box!(@MAIN _i, $($path) / *)
        })
    };
    ($vec:ident, $type:ident $($tt:tt)*) => {
        first_box!(@MAIN $vec.boxes, $type $($tt)*)
    };
    ($vec:expr, $type:ident $($tt:tt)*) => {
        first_box!(@MAIN $vec, $type $($tt)*)
    };
}

/// Iterate over all boxes of type $type in $vec.
#[macro_export]
macro_rules! iter_box {
    ($vec:ident, $type:ident) => {
        $crate::iter_box!($vec.boxes, $type)
    };
    ($vec:expr, $type:ident) => {
        $vec.iter().filter_map(|x| match x {
            &$crate::boxes::MP4Box::$type(ref b) => Some(b),
            _ => None,
        })
    };
}

/// Remove all boxes of type $type from $vec; evaluates to the
/// number of boxes that were removed.
#[macro_export]
macro_rules! remove_box {
    ($vec:expr, $type:ident) => {{
        let _len = $vec.len();
        $vec.retain(|b| !matches!(b, $crate::boxes::MP4Box::$type(_)));
        _len - $vec.len()
    }};
}

/// Helper to declare typed child accessors on a container box.
macro_rules! declare_box_methods_opt {
    ($type:ident, $method:ident) => {
        /// Get a reference to the $type, if present.
        pub fn $method(&self) -> Option<&$type> {
            first_box!(&self.boxes, $type)
        }
    };
}
