//! Data model for stored pattern definitions.
//!
//! A [`Pattern`] is the sole entity: the flags, expression(s) and engine
//! saved under a name. The name itself is extrinsic, given by the file the
//! definition is stored in, never serialized inside it.

pub mod pattern;

pub use pattern::Pattern;
