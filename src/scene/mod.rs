//! The fixed clock scene: geometry derived from the surface bounds and the
//! composer that turns an angle set into an ordered draw sequence.

pub mod composer;
pub mod layout;
