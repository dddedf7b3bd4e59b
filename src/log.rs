//! Logging macros
//!
//! - `rp2040` feature: forwards to `defmt`
//! - Host tests: `println!` / `eprintln!`
//! - Host non-test: arguments are evaluated and dropped
//!
//! Format strings must stay within the subset `defmt` and `core::fmt` both
//! accept (plain `{}` placeholders).

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2040"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2040"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2040")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rp2040"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(all(not(feature = "rp2040"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}
