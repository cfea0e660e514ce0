use terrain_field::world::{load_scene, save_scene};
use terrain_field::{NormalMode, RenderSurface, Terrain, TerrainError, TerrainMesh};
use cgmath::{InnerSpace, Point3, Vector3};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Begin,
    Normal(Vector3<f64>),
    Vertex(Point3<f64>),
    End,
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<Call>,
}

impl RenderSurface for RecordingSurface {
    fn begin_triangles(&mut self) {
        self.calls.push(Call::Begin);
    }

    fn normal(&mut self, normal: Vector3<f64>) {
        self.calls.push(Call::Normal(normal));
    }

    fn vertex(&mut self, position: Point3<f64>) {
        self.calls.push(Call::Vertex(position));
    }

    fn end(&mut self) {
        self.calls.push(Call::End);
    }
}

fn bumpy_terrain(width: usize, depth: usize) -> Terrain {
    let mut terrain = Terrain::new(width, depth).unwrap();
    for x in 0..width {
        for z in 0..depth {
            // Distinct altitudes at every vertex
            let h = (x * depth + z) as f64 * 0.5 + (x as f64 * 0.7).sin();
            terrain.set_grid_altitude(x, z, h).unwrap();
        }
    }
    terrain
}

#[test]
fn test_interpolation_is_identity_on_grid_points() {
    let terrain = bumpy_terrain(5, 4);
    for x in 0..5 {
        for z in 0..4 {
            assert_eq!(
                terrain.altitude(x as f64, z as f64).unwrap(),
                terrain.grid_altitude(x, z).unwrap()
            );
        }
    }
}

#[test]
fn test_flat_terrain_is_flat_everywhere() {
    let mut terrain = Terrain::new(4, 6).unwrap();
    for x in 0..4 {
        for z in 0..6 {
            terrain.set_grid_altitude(x, z, 2.75).unwrap();
        }
    }
    for (x, z) in [(0.0, 0.0), (0.3, 4.9), (2.5, 2.5), (3.0, 5.0), (1.01, 0.99)] {
        assert!((terrain.altitude(x, z).unwrap() - 2.75).abs() < 1e-12);
    }
}

#[test]
fn test_linear_in_x_is_reproduced() {
    let (a, b) = (1.75, -0.5);
    let mut terrain = Terrain::new(5, 3).unwrap();
    for x in 0..5 {
        for z in 0..3 {
            terrain.set_grid_altitude(x, z, a * x as f64 + b).unwrap();
        }
    }
    for (x, z) in [(0.25, 0.0), (1.5, 1.5), (2.9, 0.1), (3.125, 2.0), (4.0, 1.3)] {
        let expected = a * x + b;
        assert!((terrain.altitude(x, z).unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_example_cell_average() {
    let mut terrain = Terrain::new(2, 2).unwrap();
    terrain.set_grid_altitude(0, 0, 0.0).unwrap();
    terrain.set_grid_altitude(1, 0, 2.0).unwrap();
    terrain.set_grid_altitude(0, 1, 4.0).unwrap();
    terrain.set_grid_altitude(1, 1, 6.0).unwrap();
    assert_eq!(terrain.altitude(0.5, 0.5).unwrap(), 3.0);
}

#[test]
fn test_resize_grow_and_shrink() {
    let mut terrain = bumpy_terrain(3, 4);
    let original = terrain.clone();

    terrain.set_size(5, 6).unwrap();
    assert_eq!(terrain.width(), 5);
    assert_eq!(terrain.depth(), 6);
    for x in 0..5 {
        for z in 0..6 {
            let h = terrain.grid_altitude(x, z).unwrap();
            if x < 3 && z < 4 {
                assert_eq!(h, original.grid_altitude(x, z).unwrap());
            } else {
                assert_eq!(h, 0.0);
            }
        }
    }

    terrain.set_size(2, 2).unwrap();
    for x in 0..2 {
        for z in 0..2 {
            assert_eq!(
                terrain.grid_altitude(x, z).unwrap(),
                original.grid_altitude(x, z).unwrap()
            );
        }
    }
    assert!(matches!(
        terrain.grid_altitude(2, 0),
        Err(TerrainError::GridIndexOutOfRange { .. })
    ));
}

#[test]
fn test_resize_keeps_objects() {
    let mut terrain = bumpy_terrain(3, 3);
    terrain.add_tree(1.0, 1.0).unwrap();
    terrain.add_road(0.5, vec![0.0, 0.0, 1.0, 1.0]);
    terrain.set_size(2, 2).unwrap();
    assert_eq!(terrain.trees().len(), 1);
    assert_eq!(terrain.roads().len(), 1);
}

#[test]
fn test_out_of_range_queries_fail() {
    let terrain = bumpy_terrain(3, 3);
    assert!(matches!(terrain.altitude(2.0001, 1.0), Err(TerrainError::OutOfBounds { .. })));
    assert!(matches!(terrain.altitude(1.0, -1.0), Err(TerrainError::OutOfBounds { .. })));
    assert!(matches!(terrain.altitude(f64::INFINITY, 1.0), Err(TerrainError::OutOfBounds { .. })));
    assert!(terrain.altitude(2.0, 2.0).is_ok());
}

#[test]
fn test_draw_emits_every_face_in_order() {
    let terrain = bumpy_terrain(4, 3);
    let mut surface = RecordingSurface::default();
    terrain.draw(&mut surface, NormalMode::Newell);

    let faces = 2 * 3 * 2;
    assert_eq!(surface.calls.len(), faces * 6);

    let triangles = terrain.triangles();
    assert_eq!(triangles.len(), faces);
    for (triangle, calls) in triangles.iter().zip(surface.calls.chunks(6)) {
        assert_eq!(calls[0], Call::Begin);
        assert_eq!(calls[1], Call::Normal(triangle.newell_normal()));
        for (i, vertex) in triangle.vertices().iter().enumerate() {
            assert_eq!(calls[2 + i], Call::Vertex(*vertex));
        }
        assert_eq!(calls[5], Call::End);
        assert!(triangle.area() > 0.0);
    }

    // First face of the first cell
    assert_eq!(surface.calls[2], Call::Vertex(Point3::new(0.0, terrain.grid_altitude(0, 0).unwrap(), 0.0)));
    assert_eq!(surface.calls[3], Call::Vertex(Point3::new(0.0, terrain.grid_altitude(0, 1).unwrap(), 1.0)));
    assert_eq!(surface.calls[4], Call::Vertex(Point3::new(1.0, terrain.grid_altitude(1, 0).unwrap(), 0.0)));
}

#[test]
fn test_unit_normals_point_up() {
    let terrain = bumpy_terrain(5, 5);
    let mut surface = RecordingSurface::default();
    terrain.draw(&mut surface, NormalMode::Unit);
    for call in &surface.calls {
        if let Call::Normal(n) = call {
            assert!((n.magnitude() - 1.0).abs() < 1e-12);
            assert!(n.y > 0.0);
        }
    }
}

#[test]
fn test_slope_normal_matches_gradient() {
    let mut terrain = Terrain::new(3, 3).unwrap();
    for x in 0..3 {
        for z in 0..3 {
            terrain.set_grid_altitude(x, z, 2.0 * x as f64).unwrap();
        }
    }
    for triangle in terrain.triangles() {
        assert_eq!(terrain.calculate_surface_normal(&triangle), Vector3::new(-2.0, 1.0, 0.0));
    }
}

#[test]
fn test_mesh_counts() {
    let terrain = bumpy_terrain(7, 5);
    let mesh = TerrainMesh::build(&terrain, NormalMode::Unit, true).unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 6 * 4);
    assert_eq!(mesh.vertices().len(), 3 * 2 * 6 * 4);
}

#[test]
fn test_scene_file_round_trip() {
    let mut terrain = Terrain::new(4, 3).unwrap();
    for x in 0..4 {
        for z in 0..3 {
            let h = ((x * 3 + z) as f64 * 0.1).sqrt() + (z as f64 * 1.3).cos() / 3.0;
            terrain.set_grid_altitude(x, z, h).unwrap();
        }
    }
    terrain.set_sunlight_dir(0.1, 0.7, -0.3);
    terrain.add_tree(1.25, 0.75).unwrap();
    terrain.add_tree(2.9, 1.7).unwrap();
    terrain.set_grid_altitude(1, 1, 1.0 / 7.0).unwrap();
    terrain.add_road(0.4, vec![0.0, 0.0, 1.0, 0.5, 2.0, 0.5, 3.0, 0.0]);

    let path = std::env::temp_dir().join(format!("terrain_field_scene_{}.json", std::process::id()));
    save_scene(&path, &terrain).unwrap();
    let loaded = load_scene(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, terrain);
}

#[test]
fn test_scene_file_after_shrink() {
    let mut terrain = bumpy_terrain(4, 4);
    terrain.add_tree(2.5, 2.5).unwrap();
    terrain.set_size(2, 2).unwrap();

    let path = std::env::temp_dir().join(format!("terrain_field_shrunk_{}.json", std::process::id()));
    save_scene(&path, &terrain).unwrap();
    let loaded = load_scene(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.unwrap(), terrain);
}
