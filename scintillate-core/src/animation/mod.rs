pub(crate) mod cycler;
pub(crate) mod ease;
pub(crate) mod shape;
pub(crate) mod transition;
