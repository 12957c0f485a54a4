//! Ornament imagery: decode, procedural generation, and the prepared set the
//! composer blits every frame. All IO happens here, once, at construction.

pub mod decode;
pub mod ornaments;
pub mod procedural;
