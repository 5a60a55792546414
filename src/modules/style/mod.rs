//! Visual styling of the construction scaffold
//!
//! Each scaffold segment keeps one randomly drawn color for the lifetime of
//! a construction, assigned lazily in [palette](palette/index.html).

pub mod palette;
