/// Browser console logging for component code.
///
/// Each macro formats its arguments up front and prefixes the message with a
/// `js_sys::Date::now()` timestamp before handing a plain string to
/// `gloo_console`, so no Rust values cross the JS boundary.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => { $crate::__console_emit!(info, $($arg)*) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => { $crate::__console_emit!(warn, $($arg)*) };
}
