//! Core data structures: board geometry, the piece state machine and the grids.
//!
//! - [`CellIndex`] / [`Footprint`] - flat cell indices with sentinel-propagating
//!   neighbor steps
//! - [`Orientation`] - per-shape rotation state table
//! - [`PieceContext`] - the falling piece with its precomputed candidate moves
//! - [`Board`] - settled and composite grids, collision and row removal
//! - [`render_rows`] - text rendering of a grid

pub use self::{board::*, geometry::*, orientation::*, piece::*, render::*};

pub(crate) mod board;
pub(crate) mod geometry;
pub(crate) mod orientation;
pub(crate) mod piece;
pub(crate) mod render;
