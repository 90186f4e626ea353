pub(crate) mod config;
pub(crate) mod gradient;
pub(crate) mod shape;
pub(crate) mod snapshot;
pub(crate) mod visualization;
