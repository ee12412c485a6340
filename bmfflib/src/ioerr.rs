#[doc(hidden)]
#[macro_export]
macro_rules! ioerr {
    (@E $kind:expr, $arg:expr) => {
        ::std::io::Error::new($kind, $arg)
    };

    (InvalidData $($tt:tt)*) => ( ioerr!(::std::io::ErrorKind::InvalidData $($tt)*) );
    (UnexpectedEof $($tt:tt)*) => ( ioerr!(::std::io::ErrorKind::UnexpectedEof $($tt)*) );

    ($kind:expr, $fmt:expr, $($tt:tt)+) => (
        ioerr!(@E $kind, format!($fmt, $($tt)+))
    );
    ($kind:expr, $arg:expr) => (
        ioerr!(@E $kind, $arg)
    );
    ($kind:expr) => (
        ::std::io::Error::from($kind)
    );
}
