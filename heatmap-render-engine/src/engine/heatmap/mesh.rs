/// Subdivided plane geometry for height displacement
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Build a `width` x `height` plane in the local XY frame facing +Z.
///
/// UV `v` runs from the top edge (+y) downward so image row 0 sits at the top.
pub fn build_plane_mesh(width: f32, height: f32, segments_x: u32, segments_y: u32) -> Mesh {
    let segments_x = segments_x.max(1);
    let segments_y = segments_y.max(1);
    let (half_w, half_h) = (width * 0.5, height * 0.5);

    let vertex_count = ((segments_x + 1) * (segments_y + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for iy in 0..=segments_y {
        let v = iy as f32 / segments_y as f32;
        for ix in 0..=segments_x {
            let u = ix as f32 / segments_x as f32;
            positions.push([u * width - half_w, half_h - v * height, 0.0]);
            normals.push([0.0, 0.0, 1.0]);
            uvs.push([u, v]);
        }
    }

    let row = segments_x + 1;
    let mut indices = Vec::with_capacity((segments_x * segments_y * 6) as usize);
    for iy in 0..segments_y {
        for ix in 0..segments_x {
            let a = iy * row + ix;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;
            // Counter-clockwise seen from +Z
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn vertex_and_index_counts() {
        let mesh = build_plane_mesh(100.0, 50.0, 4, 2);
        assert_eq!(mesh.count_vertices(), 5 * 3);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(4 * 2 * 6));
    }

    #[test]
    fn corners_and_uvs_line_up() {
        let mesh = build_plane_mesh(100.0, 50.0, 2, 2);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("uvs missing");
        };

        assert_eq!(positions[0], [-50.0, 25.0, 0.0]);
        assert_eq!(uvs[0], [0.0, 0.0]);
        assert_eq!(positions[8], [50.0, -25.0, 0.0]);
        assert_eq!(uvs[8], [1.0, 1.0]);
    }

    #[test]
    fn triangles_face_positive_z() {
        let mesh = build_plane_mesh(10.0, 10.0, 1, 1);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        let indices: Vec<usize> = mesh.indices().unwrap().iter().collect();

        for tri in indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(positions[i]));
            assert!((b - a).cross(c - a).z > 0.0);
        }
    }
}
