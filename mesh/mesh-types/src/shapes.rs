//! Reference meshes for tests and benchmarks.

use crate::{EditMesh, Face, Vertex};

/// Create a tetrahedron (4 vertices, 4 faces, closed).
///
/// # Example
///
/// ```
/// use mesh_types::tetrahedron;
///
/// let mesh = tetrahedron();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 4);
/// ```
#[must_use]
pub fn tetrahedron() -> EditMesh {
    let mut mesh = EditMesh::with_capacity(4, 4);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
    mesh.vertices.push(Vertex::from_coords(0.5, 0.5, 1.0));

    mesh.faces.push(Face::new([0, 2, 1])); // bottom
    mesh.faces.push(Face::new([0, 1, 3])); // front
    mesh.faces.push(Face::new([1, 2, 3])); // right
    mesh.faces.push(Face::new([2, 0, 3])); // left

    mesh
}

/// Create a unit cube from (0,0,0) to (1,1,1) (8 vertices, 12 faces,
/// closed).
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let mesh = unit_cube();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> EditMesh {
    let mut mesh = EditMesh::with_capacity(8, 12);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    // Bottom face (z=0) - normal points -Z
    mesh.faces.push(Face::new([0, 2, 1]));
    mesh.faces.push(Face::new([0, 3, 2]));

    // Top face (z=1) - normal points +Z
    mesh.faces.push(Face::new([4, 5, 6]));
    mesh.faces.push(Face::new([4, 6, 7]));

    // Front face (y=0) - normal points -Y
    mesh.faces.push(Face::new([0, 1, 5]));
    mesh.faces.push(Face::new([0, 5, 4]));

    // Back face (y=1) - normal points +Y
    mesh.faces.push(Face::new([3, 7, 6]));
    mesh.faces.push(Face::new([3, 6, 2]));

    // Left face (x=0) - normal points -X
    mesh.faces.push(Face::new([0, 4, 7]));
    mesh.faces.push(Face::new([0, 7, 3]));

    // Right face (x=1) - normal points +X
    mesh.faces.push(Face::new([1, 2, 6]));
    mesh.faces.push(Face::new([1, 6, 5]));

    mesh
}

/// Create a flat grid of `nx` by `ny` quad cells in the z=0 plane, each
/// split into two triangles along the cell's main diagonal.
///
/// The grid has `(nx + 1) * (ny + 1)` vertices and `2 * nx * ny` faces.
/// Vertex `(i, j)` sits at `(i as f64, j as f64, 0.0)` with index
/// `j * (nx + 1) + i`. Cell `(i, j)` contributes faces `2 * (j * nx + i)`
/// and `2 * (j * nx + i) + 1`. An open mesh with disk topology.
///
/// # Example
///
/// ```
/// use mesh_types::triangle_grid;
///
/// let mesh = triangle_grid(3, 3);
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 18);
/// ```
#[must_use]
pub fn triangle_grid(nx: u32, ny: u32) -> EditMesh {
    let vertex_count = ((nx + 1) * (ny + 1)) as usize;
    let face_count = (2 * nx * ny) as usize;
    let mut mesh = EditMesh::with_capacity(vertex_count, face_count);

    for j in 0..=ny {
        for i in 0..=nx {
            mesh.vertices
                .push(Vertex::from_coords(f64::from(i), f64::from(j), 0.0));
        }
    }

    let index = |i: u32, j: u32| j * (nx + 1) + i;
    for j in 0..ny {
        for i in 0..nx {
            let v00 = index(i, j);
            let v10 = index(i + 1, j);
            let v11 = index(i + 1, j + 1);
            let v01 = index(i, j + 1);
            mesh.faces.push(Face::new([v00, v10, v11]));
            mesh.faces.push(Face::new([v00, v11, v01]));
        }
    }

    mesh
}
