use crate::world::Terrain;
use cgmath::{InnerSpace, Vector3};
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub direction: [f32; 3],
    // Due to uniforms requiring 16 byte alignment, we need to add some padding.
    pub _padding: u32,
    pub color: [f32; 3],
    pub _padding2: u32,
}

/// The sun: a direction with no position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub color: Vector3<f32>,
}

impl DirectionalLight {
    pub fn new(direction: Vector3<f32>) -> Self {
        Self {
            direction,
            color: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn from_terrain(terrain: &Terrain) -> Self {
        Self::new(terrain.sunlight().into())
    }

    pub fn to_uniform(&self) -> LightUniform {
        let length = self.direction.magnitude();
        let direction = if length > 0.0 { self.direction / length } else { self.direction };
        LightUniform {
            direction: direction.into(),
            _padding: 0,
            color: self.color.into(),
            _padding2: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 32);
        let light = DirectionalLight::new(Vector3::new(0.0, 3.0, 4.0));
        let bytes = bytemuck::bytes_of(&light.to_uniform()).to_vec();
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_direction_is_normalized() {
        let mut terrain = Terrain::new(2, 2).unwrap();
        terrain.set_sunlight_dir(0.0, 3.0, 4.0);
        let uniform = DirectionalLight::from_terrain(&terrain).to_uniform();
        assert!((uniform.direction[1] - 0.6).abs() < 1e-6);
        assert!((uniform.direction[2] - 0.8).abs() < 1e-6);
        assert_eq!(uniform.color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_unset_sun_stays_zero() {
        let terrain = Terrain::new(2, 2).unwrap();
        let uniform = DirectionalLight::from_terrain(&terrain).to_uniform();
        assert_eq!(uniform.direction, [0.0, 0.0, 0.0]);
    }
}
