//! This module provides convenient macros for creating points and point lists.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a `Vec<Point>` from `(x, y)` pairs
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::pt!($x, $y)),*]
    };
}
