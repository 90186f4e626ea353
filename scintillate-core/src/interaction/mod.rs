//! Click-driven accents. Both machines are independent of the ambient loops.

pub(crate) mod glide;
pub(crate) mod panel;
