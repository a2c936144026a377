//! Core mesh types for interactive face selection.
//!
//! This crate provides the storage layer that the selection operations in
//! `mesh-select` run over:
//!
//! - [`Vertex`] - A point in 3D space with selection and deletion flags
//! - [`Face`] - A triangle referencing three vertices, with the same flags
//! - [`EditMesh`] - An indexed triangle mesh that keeps deleted elements
//!   in storage until an explicit compaction pass
//!
//! # Deletion model
//!
//! Removing an element never moves storage: the element's `deleted` flag is
//! set and the element stays in place, so indices held elsewhere (adjacency
//! tables, selection passes in flight) remain stable. [`EditMesh::compact`]
//! is the separate, explicit pass that actually reclaims storage and remaps
//! face indices.
//!
//! # Units and coordinates
//!
//! Unit-agnostic, all coordinates are `f64`. Right-handed coordinate
//! system; face winding is counter-clockwise when viewed from outside.
//!
//! # Example
//!
//! ```
//! use mesh_types::{EditMesh, Face, Vertex, Point3};
//!
//! let mut mesh = EditMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push(Face::new([0, 1, 2]));
//!
//! assert_eq!(mesh.live_face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod face;
mod mesh;
mod shapes;
mod vertex;

pub use face::Face;
pub use mesh::EditMesh;
pub use shapes::{tetrahedron, triangle_grid, unit_cube};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
