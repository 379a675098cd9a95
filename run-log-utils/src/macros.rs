//! Patterns built on first use and kept for the life of the process.
//!
//! The caller needs `scraper` or `regex` for the respective macro; `once_cell`
//! comes through this crate.

#[doc(hidden)]
#[macro_export]
macro_rules! __static_pattern {
    ($ty: ty, $build: path, $source: expr) => {{
        static PATTERN: $crate::once_cell::sync::Lazy<$ty> =
            $crate::once_cell::sync::Lazy::new(|| {
                $build($source).unwrap_or_else(|e| panic!("Bad pattern {:?}: {e}", $source))
            });
        &*PATTERN
    }};
}

/// A `&'static scraper::Selector` for the CSS selector `$css`.
#[macro_export]
macro_rules! selector {
    ($css: expr) => {
        $crate::__static_pattern!(::scraper::Selector, ::scraper::Selector::parse, $css)
    };
}

/// A `&'static regex::Regex`.
#[macro_export]
macro_rules! regex {
    ($re: expr) => {
        $crate::__static_pattern!(::regex::Regex, ::regex::Regex::new, $re)
    };
}
