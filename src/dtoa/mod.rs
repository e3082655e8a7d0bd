mod bignum;
mod common;
mod exact;
mod fmt;
mod interval;
mod render;
mod table;
mod wide;
mod writer;

pub mod float;
pub mod format;
pub mod shortest;

pub(crate) use render::render;
