//! Face-selection propagation for triangle meshes.
//!
//! This crate provides the selection operations an interactive mesh
//! editor exposes: select all/none/invert, erode and dilate the
//! selection across mesh adjacency, select border faces, and delete the
//! selected faces. Operations mutate the `selected`/`deleted` flags of
//! an [`EditMesh`](mesh_types::EditMesh) in place; the mesh is
//! exclusively borrowed for the duration of one call and the engine
//! holds no state between calls.
//!
//! # Layers
//!
//! - [`update`] - the low-level selection-update passes (scatter
//!   face-to-vertex, gather vertex-to-face, in strict and loose
//!   variants)
//! - Composite operations - [`erode_selection`], [`dilate_selection`],
//!   [`select_border_faces`], [`delete_selected_faces`]
//! - [`FaceTopology`] / [`TopologyCache`] - face-face adjacency and
//!   border flags, built lazily and invalidated by destructive
//!   operations
//! - [`apply`] / [`SelectOp`] - the dispatch layer a host drives by
//!   operation identifier, with the [`OPERATIONS`] catalog for menus
//!
//! # Example
//!
//! ```
//! use mesh_select::{apply, SelectOp, SelectParams, TopologyCache};
//! use mesh_types::tetrahedron;
//!
//! let mut mesh = tetrahedron();
//! let mut cache = TopologyCache::new();
//! let params = SelectParams::default();
//!
//! mesh.faces[0].selected = true;
//! let outcome = apply(SelectOp::Dilate, &mut mesh, &mut cache, &params).unwrap();
//! assert_eq!(outcome.selected_faces, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod filter;
mod ops;
mod topology;
pub mod update;

pub use error::{SelectError, SelectResult};
pub use filter::{
    apply, OpInfo, SelectOp, SelectOutcome, SelectParams, TopologyPolicy, TopologyRequirement,
    OPERATIONS,
};
pub use ops::{delete_selected_faces, dilate_selection, erode_selection, select_border_faces};
pub use topology::{FaceTopology, TopologyCache};
