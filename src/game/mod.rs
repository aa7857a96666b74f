//! Board gameplay module - the ECS side of the checkerboard
//!
//! # Module Organization
//!
//! - `resources` - [`ActiveBoard`](resources::ActiveBoard) and
//!   [`DragState`](resources::DragState)
//! - `events` - [`DropPiece`](events::DropPiece) in,
//!   [`DropResolved`](events::DropResolved) out
//! - `systems` - startup board generation and per-frame drop resolution
//! - `system_sets` - ordering of the drop systems
//! - `plugin` - [`CheckerBoardPlugin`] registering all of the above
//!
//! Data flows one way: pointer observers → `DropPiece` →
//! `apply_drop_requests` → board mutation → piece transforms.

pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use plugin::CheckerBoardPlugin;
