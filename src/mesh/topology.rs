//! Immutable triangle topology view.
//!
//! The topology stores:
//! - Centroid coordinates, one (x, y) pair per triangle
//! - Vertex coordinates, three (x, y) pairs per triangle (counter-clockwise)
//! - True-neighbour table: `neighbours[k][i]` is the triangle sharing the
//!   edge opposite local vertex i, or `None` on the domain boundary
//! - Surrogate-neighbour table: same as `neighbours` but with the triangle's
//!   own index substituted where a true neighbour is missing, so gradient
//!   fits near boundaries stay well-defined
//! - Boundary count per triangle: how many of the three edges lack a true
//!   neighbour
//!
//! Edge convention (matching the local vertex ordering):
//! - Edge 0 is opposite vertex 0, i.e. between vertices 1 and 2
//! - Edge 1 is opposite vertex 1, i.e. between vertices 2 and 0
//! - Edge 2 is opposite vertex 2, i.e. between vertices 0 and 1

use std::collections::HashMap;

use crate::error::{check_len, QuantityError};

/// Immutable per-run topology of a triangular mesh.
///
/// All arrays are indexed by triangle id `k` in `[0, n_triangles)`; the
/// per-triangle vertex slots live at `3*k .. 3*k+3`. The topology outlives
/// every step and is never written by the kernel.
#[derive(Clone, Debug)]
pub struct TriangleTopology {
    /// Centroid coordinates: centroids[k] = (x, y)
    pub centroids: Vec<(f64, f64)>,

    /// Vertex coordinates, triangle-major: vertex_coordinates[3*k + i]
    pub vertex_coordinates: Vec<(f64, f64)>,

    /// True adjacency: neighbours[k][i] is the triangle across edge i,
    /// or None for a boundary edge
    pub neighbours: Vec<[Option<usize>; 3]>,

    /// Adjacency with self-substitution for missing neighbours
    pub surrogate_neighbours: Vec<[usize; 3]>,

    /// Number of edges without a true neighbour, in {0, 1, 2, 3}
    pub number_of_boundaries: Vec<u8>,

    /// Number of triangles
    pub n_triangles: usize,
}

impl TriangleTopology {
    /// Assemble a topology from centroid coordinates, vertex coordinates and
    /// a true-neighbour table.
    ///
    /// The surrogate-neighbour table and boundary counts are derived here:
    /// each missing neighbour is replaced by the triangle's own index and
    /// counted as a boundary edge.
    ///
    /// # Errors
    /// Returns [`QuantityError::SizeMismatch`] if the arrays disagree on the
    /// triangle count, or [`QuantityError::DegenerateTopology`] if a
    /// neighbour index is out of range.
    pub fn from_parts(
        centroids: Vec<(f64, f64)>,
        vertex_coordinates: Vec<(f64, f64)>,
        neighbours: Vec<[Option<usize>; 3]>,
    ) -> Result<Self, QuantityError> {
        let n = centroids.len();
        check_len("vertex_coordinates", vertex_coordinates.len(), 3 * n)?;
        check_len("neighbours", neighbours.len(), n)?;

        let mut surrogate_neighbours = Vec::with_capacity(n);
        let mut number_of_boundaries = Vec::with_capacity(n);

        for (k, nbrs) in neighbours.iter().enumerate() {
            let mut surrogate = [k; 3];
            let mut boundaries = 0u8;
            for (i, nbr) in nbrs.iter().enumerate() {
                match nbr {
                    Some(m) if *m < n => surrogate[i] = *m,
                    Some(_) => return Err(QuantityError::DegenerateTopology { triangle: k }),
                    None => boundaries += 1,
                }
            }
            surrogate_neighbours.push(surrogate);
            number_of_boundaries.push(boundaries);
        }

        Ok(Self {
            centroids,
            vertex_coordinates,
            neighbours,
            surrogate_neighbours,
            number_of_boundaries,
            n_triangles: n,
        })
    }

    /// Build a structured triangulation of the rectangle [x0, x1] × [y0, y1].
    ///
    /// Each of the nx × ny grid cells is split along its bottom-left to
    /// top-right diagonal into two counter-clockwise triangles, giving
    /// 2·nx·ny triangles. Returns the topology together with the
    /// node-averaging index tables for the underlying grid nodes.
    ///
    /// # Panics
    /// Panics if `nx` or `ny` is zero or the bounds are inverted.
    pub fn rectangular(
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        nx: usize,
        ny: usize,
    ) -> (Self, NodeAverageTables) {
        assert!(
            nx > 0 && ny > 0,
            "Need at least one cell in each direction"
        );
        assert!(x1 > x0 && y1 > y0, "Invalid domain bounds");

        let dx = (x1 - x0) / nx as f64;
        let dy = (y1 - y0) / ny as f64;

        // Grid nodes: (nx+1) × (ny+1), row-major
        let n_nodes = (nx + 1) * (ny + 1);
        let mut nodes = Vec::with_capacity(n_nodes);
        for j in 0..=ny {
            for i in 0..=nx {
                nodes.push((x0 + i as f64 * dx, y0 + j as f64 * dy));
            }
        }

        // Two triangles per grid cell, both counter-clockwise:
        //   lower: (bl, br, tr)   upper: (bl, tr, tl)
        let n_triangles = 2 * nx * ny;
        let mut triangles = Vec::with_capacity(n_triangles);
        for j in 0..ny {
            for i in 0..nx {
                let bl = j * (nx + 1) + i;
                let br = bl + 1;
                let tr = br + (nx + 1);
                let tl = bl + (nx + 1);
                triangles.push([bl, br, tr]);
                triangles.push([bl, tr, tl]);
            }
        }

        let neighbours = neighbour_table(&triangles);

        let mut centroids = Vec::with_capacity(n_triangles);
        let mut vertex_coordinates = Vec::with_capacity(3 * n_triangles);
        for tri in &triangles {
            let p = [nodes[tri[0]], nodes[tri[1]], nodes[tri[2]]];
            vertex_coordinates.extend_from_slice(&p);
            centroids.push((
                (p[0].0 + p[1].0 + p[2].0) / 3.0,
                (p[0].1 + p[1].1 + p[2].1) / 3.0,
            ));
        }

        let tables = NodeAverageTables::from_connectivity(&triangles, n_nodes);
        let topology = Self::from_parts(centroids, vertex_coordinates, neighbours)
            .expect("structured triangulation is always consistent");
        (topology, tables)
    }

    /// Centroid coordinates of triangle k.
    #[inline(always)]
    pub fn centroid(&self, k: usize) -> (f64, f64) {
        self.centroids[k]
    }

    /// Vertex coordinates of triangle k as three (x, y) pairs.
    #[inline(always)]
    pub fn triangle_vertices(&self, k: usize) -> [(f64, f64); 3] {
        let base = 3 * k;
        [
            self.vertex_coordinates[base],
            self.vertex_coordinates[base + 1],
            self.vertex_coordinates[base + 2],
        ]
    }

    /// Number of interior triangles (no boundary edges).
    pub fn n_interior(&self) -> usize {
        self.number_of_boundaries.iter().filter(|&&b| b == 0).count()
    }
}

/// Node-averaging index tables.
///
/// `vertex_value_indices` lists flat vertex slots `triangle*3 + local_vertex`
/// grouped by mesh node in node order; `triangles_per_node[node]` is the run
/// length of each group. These are precomputed once per mesh alongside the
/// topology and consumed by [`crate::average_vertex_values`].
#[derive(Clone, Debug)]
pub struct NodeAverageTables {
    /// Flat vertex slots grouped by node, in node order
    pub vertex_value_indices: Vec<usize>,
    /// Run length per node
    pub triangles_per_node: Vec<usize>,
    /// Number of mesh nodes
    pub n_nodes: usize,
}

impl NodeAverageTables {
    /// Derive the tables from triangle-node connectivity.
    pub fn from_connectivity(triangles: &[[usize; 3]], n_nodes: usize) -> Self {
        let mut per_node: Vec<Vec<usize>> = vec![Vec::new(); n_nodes];
        for (k, tri) in triangles.iter().enumerate() {
            for (i, &node) in tri.iter().enumerate() {
                per_node[node].push(3 * k + i);
            }
        }

        let mut vertex_value_indices = Vec::with_capacity(3 * triangles.len());
        let mut triangles_per_node = Vec::with_capacity(n_nodes);
        for group in &per_node {
            triangles_per_node.push(group.len());
            vertex_value_indices.extend_from_slice(group);
        }

        Self {
            vertex_value_indices,
            triangles_per_node,
            n_nodes,
        }
    }
}

/// Build the true-neighbour table by matching shared edges.
///
/// Edge i of a triangle is the edge opposite local vertex i. Interior edges
/// appear in exactly two triangles; the second occurrence links both sides.
fn neighbour_table(triangles: &[[usize; 3]]) -> Vec<[Option<usize>; 3]> {
    let mut neighbours = vec![[None; 3]; triangles.len()];
    let mut open_edges: HashMap<(usize, usize), (usize, usize)> = HashMap::new();

    for (k, tri) in triangles.iter().enumerate() {
        for i in 0..3 {
            let a = tri[(i + 1) % 3];
            let b = tri[(i + 2) % 3];
            let key = if a < b { (a, b) } else { (b, a) };

            match open_edges.remove(&key) {
                Some((other, other_edge)) => {
                    neighbours[k][i] = Some(other);
                    neighbours[other][other_edge] = Some(k);
                }
                None => {
                    open_edges.insert(key, (k, i));
                }
            }
        }
    }

    neighbours
}
