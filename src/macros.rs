/// Formatted debug entry on the global gate: `debugf!("loaded {} rows", n)`.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::std::format_args!($($arg)+))
    };
}

/// Formatted error entry: `errorf!(err, "saving {}", path)`.
#[macro_export]
macro_rules! errorf {
    ($cause:expr, $($arg:tt)+) => {
        $crate::errorf(&$cause, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! criticalf {
    ($cause:expr, $($arg:tt)+) => {
        $crate::criticalf(&$cause, ::std::format_args!($($arg)+))
    };
}
