//! Operation catalog and dispatch.
//!
//! The host integration layer: an enumerated operation type, the static
//! table of display names and descriptions a host builds its menus
//! from, and [`apply`], the dispatch function mapping an operation to
//! the pass calls in [`ops`](crate::ops) and [`update`](crate::update).

use mesh_types::EditMesh;

use crate::error::{SelectError, SelectResult};
use crate::topology::TopologyCache;
use crate::{ops, update};

/// A face-selection operation, dispatched by [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOp {
    /// Select every live face.
    SelectAll,
    /// Deselect every live face.
    SelectNone,
    /// Flip the selection flag of every live face.
    Invert,
    /// Mark every selected live face as deleted.
    DeleteSelected,
    /// Shrink the selection by one topological ring.
    Erode,
    /// Grow the selection by one topological ring.
    Dilate,
    /// Replace the selection with the faces owning a border edge.
    SelectBorder,
}

/// Topology data an operation needs before it can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyRequirement {
    /// No topology data needed.
    None,
    /// Face-face adjacency with per-edge border flags.
    FaceBorder,
}

impl SelectOp {
    /// The topology data this operation requires.
    ///
    /// Explicit for every variant: an operation without extra
    /// requirements reports [`TopologyRequirement::None`] rather than
    /// leaving the answer undefined.
    #[must_use]
    pub const fn requirement(self) -> TopologyRequirement {
        match self {
            Self::SelectAll
            | Self::SelectNone
            | Self::Invert
            | Self::DeleteSelected
            | Self::Erode
            | Self::Dilate => TopologyRequirement::None,
            Self::SelectBorder => TopologyRequirement::FaceBorder,
        }
    }

    /// Display name for host menus.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SelectAll => "Select All",
            Self::SelectNone => "Select None",
            Self::Invert => "Invert Selection",
            Self::DeleteSelected => "Delete Selected Faces",
            Self::Erode => "Erode Selection",
            Self::Dilate => "Dilate Selection",
            Self::SelectBorder => "Select Border Faces",
        }
    }

    /// One-line description for host tooltips.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SelectAll => "Select all the faces of the current mesh",
            Self::SelectNone => "Clear the current set of selected faces",
            Self::Invert => "Invert the current set of selected faces",
            Self::DeleteSelected => "Remove the selected faces from the mesh",
            Self::Erode => "Erode (reduce) the current set of selected faces",
            Self::Dilate => "Dilate (expand) the current set of selected faces",
            Self::SelectBorder => "Select all the faces on the boundary",
        }
    }
}

/// One row of the operation catalog.
#[derive(Debug, Clone, Copy)]
pub struct OpInfo {
    /// The operation.
    pub op: SelectOp,
    /// Display name for host menus.
    pub name: &'static str,
    /// One-line description for host tooltips.
    pub description: &'static str,
}

/// The full operation catalog, in menu order.
pub const OPERATIONS: [OpInfo; 7] = [
    OpInfo {
        op: SelectOp::SelectAll,
        name: SelectOp::SelectAll.name(),
        description: SelectOp::SelectAll.description(),
    },
    OpInfo {
        op: SelectOp::SelectNone,
        name: SelectOp::SelectNone.name(),
        description: SelectOp::SelectNone.description(),
    },
    OpInfo {
        op: SelectOp::Invert,
        name: SelectOp::Invert.name(),
        description: SelectOp::Invert.description(),
    },
    OpInfo {
        op: SelectOp::DeleteSelected,
        name: SelectOp::DeleteSelected.name(),
        description: SelectOp::DeleteSelected.description(),
    },
    OpInfo {
        op: SelectOp::Erode,
        name: SelectOp::Erode.name(),
        description: SelectOp::Erode.description(),
    },
    OpInfo {
        op: SelectOp::Dilate,
        name: SelectOp::Dilate.name(),
        description: SelectOp::Dilate.description(),
    },
    OpInfo {
        op: SelectOp::SelectBorder,
        name: SelectOp::SelectBorder.name(),
        description: SelectOp::SelectBorder.description(),
    },
];

/// How border-dependent operations satisfy their topology requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopologyPolicy {
    /// Build topology through the cache when it is missing.
    #[default]
    BuildOnDemand,
    /// Fail with [`SelectError::TopologyMissing`] when the cache is
    /// empty.
    FailFast,
}

/// Configuration for [`apply`].
///
/// # Example
///
/// ```
/// use mesh_select::{SelectParams, TopologyPolicy};
///
/// let params = SelectParams::default()
///     .with_topology_policy(TopologyPolicy::FailFast);
/// assert_eq!(params.topology, TopologyPolicy::FailFast);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectParams {
    /// Policy for border-dependent operations. The same policy applies
    /// to every operation that requires topology.
    pub topology: TopologyPolicy,
}

impl SelectParams {
    /// Set the topology policy.
    #[must_use]
    pub fn with_topology_policy(mut self, policy: TopologyPolicy) -> Self {
        self.topology = policy;
        self
    }
}

/// What an [`apply`] call did to the mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectOutcome {
    /// Selected live faces after the operation.
    pub selected_faces: usize,
    /// Faces marked deleted by the operation.
    pub deleted_faces: usize,
    /// Whether cached topology was invalidated; the host must
    /// recompute adjacency before relying on it again.
    pub topology_invalidated: bool,
}

/// Run one selection operation against a mesh.
///
/// The mesh is exclusively borrowed for the duration of the call; the
/// engine holds no state across calls. `cache` is the caller-owned
/// topology holder: [`SelectOp::SelectBorder`] reads it (building on
/// demand under the default policy) and
/// [`SelectOp::DeleteSelected`] invalidates it.
///
/// # Errors
///
/// - [`SelectError::TopologyMissing`] for a border-dependent operation
///   under [`TopologyPolicy::FailFast`] with an empty cache.
/// - [`SelectError::InvalidVertexIndex`] if an on-demand topology build
///   finds a live face referencing a vertex out of range.
///
/// No error leaves the mesh partially mutated: validation happens
/// before the first flag is written.
///
/// # Example
///
/// ```
/// use mesh_select::{apply, SelectOp, SelectParams, TopologyCache};
/// use mesh_types::tetrahedron;
///
/// let mut mesh = tetrahedron();
/// let mut cache = TopologyCache::new();
/// let params = SelectParams::default();
///
/// let outcome = apply(SelectOp::SelectAll, &mut mesh, &mut cache, &params).unwrap();
/// assert_eq!(outcome.selected_faces, 4);
///
/// let outcome = apply(SelectOp::DeleteSelected, &mut mesh, &mut cache, &params).unwrap();
/// assert_eq!(outcome.deleted_faces, 4);
/// assert!(outcome.topology_invalidated);
/// ```
pub fn apply(
    op: SelectOp,
    mesh: &mut EditMesh,
    cache: &mut TopologyCache,
    params: &SelectParams,
) -> SelectResult<SelectOutcome> {
    let mut outcome = SelectOutcome::default();
    match op {
        SelectOp::SelectAll => outcome.selected_faces = update::select_all_faces(mesh),
        SelectOp::SelectNone => outcome.selected_faces = update::clear_face_selection(mesh),
        SelectOp::Invert => outcome.selected_faces = update::invert_face_selection(mesh),
        SelectOp::Erode => outcome.selected_faces = ops::erode_selection(mesh),
        SelectOp::Dilate => outcome.selected_faces = ops::dilate_selection(mesh),
        SelectOp::DeleteSelected => {
            outcome.deleted_faces = ops::delete_selected_faces(mesh);
            cache.invalidate();
            outcome.topology_invalidated = true;
        }
        SelectOp::SelectBorder => {
            let topology = match params.topology {
                TopologyPolicy::BuildOnDemand => cache.get_or_build(mesh)?,
                TopologyPolicy::FailFast => cache.get().ok_or(SelectError::TopologyMissing)?,
            };
            outcome.selected_faces = ops::select_border_faces(mesh, topology);
        }
    }
    Ok(outcome)
}
