//! Core data structures for the Cephalopods dice-capture puzzle.
//!
//! The puzzle is played on a 3×3 board. Each turn a die is placed on an
//! empty cell; if two or more orthogonal neighbors hold dice whose sum is at
//! most 6, those dice may be captured and replaced by a single die showing
//! their sum. This crate provides the compact types the search engine is
//! built on:
//!
//! - [`cell`]: [`Cell`] positions and the static adjacency table
//! - [`die`]: [`Die`] values 1-6
//! - [`board`]: [`Board`], nine 3-bit fields packed into a `u32`
//! - [`count`]: [`Count`], multiplicities reduced modulo 2³⁰
//! - [`symmetry`]: the eight [`Symmetry`] transforms, their composition
//!   table, and [`canonicalize`]
//! - [`orbit`]: [`OrbitCounts`], per-symmetry multiplicities for
//!   canonicalized boards
//!
//! # Examples
//!
//! ```
//! use cephalopods_core::{Board, Cell, Die};
//!
//! let board: Board = "555 005 555".parse()?;
//! let empty: Vec<_> = board.empty_cells().map(Cell::index).collect();
//! assert_eq!(empty, [3, 4]);
//!
//! let board = board.place(Cell::new(3), Die::D1).place(Cell::CENTER, Die::D1);
//! assert!(board.is_full());
//! # Ok::<(), cephalopods_core::BoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod count;
pub mod die;
mod error;
pub mod orbit;
pub mod symmetry;

pub use self::{
    board::Board,
    cell::Cell,
    count::Count,
    die::Die,
    error::BoardError,
    orbit::OrbitCounts,
    symmetry::{Symmetry, canonicalize},
};
