//! Unit cube generation.
//!
//! Four vertices per face so each face carries a flat normal. Triangles
//! wind counter-clockwise seen from outside, matching `FrontFace::Ccw`.

use glam::Vec3;

use super::types::{MeshData, MeshVertex};

/// Face normal with two in-plane axes where `u x v == normal`.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Generate an axis-aligned cube of side 1 centered at the origin.
///
/// 24 vertices, 36 `u16` indices.
pub fn cube_mesh() -> MeshData {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u16;
        let center = normal * 0.5;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            vertices.push(MeshVertex {
                position: (center + u * su + v * sv).to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_counts() {
        let mesh = cube_mesh();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn vertices_lie_on_unit_cube() {
        for v in cube_mesh().vertices {
            for c in v.position {
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn face_axes_are_right_handed() {
        for (normal, u, v) in FACES {
            assert!((u.cross(v) - normal).length() < 1e-6);
        }
    }

    #[test]
    fn triangles_wind_outward() {
        let mesh = cube_mesh();
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let pa = Vec3::from(a.position);
            let edge_normal = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
            assert!(edge_normal.dot(Vec3::from(a.normal)) > 0.0);
        }
    }

    #[test]
    fn normals_are_unit_and_point_away_from_center() {
        for v in cube_mesh().vertices {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            assert!(n.dot(Vec3::from(v.position)) > 0.0);
        }
    }
}
