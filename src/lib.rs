//! Stickgen procedurally generates stick-figure animation frames and packs
//! them into horizontally-tiled sprite sheets with JSON metadata.
//!
//! # Pipeline overview
//!
//! 1. **Pose**: `Action + FrameIndex -> Pose` (joint angles, anchors, effect
//!    tags) via closed-form per-action functions
//! 2. **Rasterize**: `Pose -> FrameRGBA` (CPU vector rasterization onto a
//!    fixed-size transparent canvas)
//! 3. **Write**: one numbered PNG per frame plus a combined `metadata.json`
//! 4. **Pack**: per-action frames concatenate left-to-right into one sheet
//!    PNG plus a metadata descriptor with measured geometry
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: pose synthesis and rasterization are pure
//!   for a given input; reruns reproduce byte-identical output.
//! - **Strictly sequential**: one action then the next, one frame then the
//!   next; no shared mutable state between frames.
//! - **Packing downgrades missing input to a skip**: a run only aborts on
//!   real encode/decode/write failures.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod output;
mod render;

pub use animation::action::{Action, ActionConfig};
pub use animation::pose::{Effect, Figure, Limb, Pose};
pub use foundation::core::{FrameIndex, FrameSize, Point, Rgba8, Vec2};
pub use foundation::error::{StickgenError, StickgenResult};
pub use output::frames::{generate_all, write_action_frames};
pub use output::metadata::{ActionMetadata, DEFAULT_SHEET_FPS, METADATA_FILE, SheetMetadata};
pub use output::sheet::{PackSummary, pack_action, pack_all};
pub use render::figure::{FrameRGBA, Palette, Renderer};
