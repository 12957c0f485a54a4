//! Sprocket is an analog clock-face rendering and animation engine.
//!
//! Given a wall-clock time and a display mode it produces a frame depicting an
//! analog clock with rotating gear ornaments. The pipeline is small and fixed:
//!
//! 1. **Sample**: a [`TimeSource`] snapshot ([`WallTime`]) is taken once per frame
//! 2. **Model**: [`compute_angles`] turns the snapshot into hand/ornament angles
//! 3. **Compose**: [`SceneComposer`] emits an ordered draw sequence to a [`DrawSurface`]
//! 4. **Schedule**: [`RedrawScheduler`] requests the next frame only while the
//!    face is visible and interactive
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Tear-free hands**: all angles of a frame derive from one time snapshot.
//! - **No IO in the render path**: ornament decode/scale is front-loaded in
//!   [`OrnamentSet`] at engine construction.
//! - **Immutable styles**: low-fidelity overrides recompute an effective style
//!   instead of mutating the registry.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub mod clock;
pub mod engine;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod style;
pub mod surface;

pub use assets::decode::{RawImage, decode_image, scale_image};
pub use assets::ornaments::{Ornament, OrnamentSet, PreparedImage};
pub use assets::procedural::generate_gear;
pub use clock::{AngleSet, SystemTimeSource, TimeSource, WallTime, compute_angles};
pub use engine::{EngineHost, ModeState, WatchFaceEngine};
pub use foundation::core::{Affine, DisplayMode, Point, Rgba8, SurfaceBounds, Vec2, Visibility};
pub use foundation::error::{SprocketError, SprocketResult};
pub use render::cpu::{CpuSurface, FrameRGBA};
pub use scene::composer::SceneComposer;
pub use scene::layout::FaceLayout;
pub use scheduler::RedrawScheduler;
pub use style::config::{FaceConfig, HandStyleConfig, OrnamentConfig, OrnamentSource, StyleConfig};
pub use style::registry::{CapStyle, HandKind, HandStyle, StyleSet};
pub use surface::{DrawCmd, DrawSurface, RecordingSurface};
