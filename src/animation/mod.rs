//! Animation settings: wire directions, typed specs, the raw UI boundary, and validation.

pub(crate) mod direction;
pub(crate) mod raw;
pub(crate) mod spec;
pub(crate) mod validate;
