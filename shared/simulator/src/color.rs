use nalgebra::{vector, Vector4};
use serde::{Deserialize, Serialize};

pub const PATH: u32 = 0x0000ff;
pub const TRAIL: u32 = 0x00ff00;
pub const VEHICLE: u32 = 0xff0000;
/// Drawn in the vehicle's color.
pub const TARGET: u32 = VEHICLE;

/// Opaque RGBA from a 0xRRGGBB value.
pub fn from_u24(c: u32) -> Vector4<f32> {
    let channel = |shift: u32| -> f32 { ((c >> shift) & 0xff) as f32 / 255.0 };
    vector![channel(16), channel(8), channel(0), 1.0]
}

/// Colors a renderer uses for each layer of a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub path: Vector4<f32>,
    pub trail: Vector4<f32>,
    pub vehicle: Vector4<f32>,
    pub target: Vector4<f32>,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            path: from_u24(PATH),
            trail: from_u24(TRAIL),
            vehicle: from_u24(VEHICLE),
            target: from_u24(TARGET),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn test_palette() {
        let palette = Palette::default();
        assert_eq!(palette.path, vector![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(palette.trail, vector![0.0, 1.0, 0.0, 1.0]);
        assert_eq!(palette.vehicle, vector![1.0, 0.0, 0.0, 1.0]);
        assert_eq!(palette.target, palette.vehicle);
        assert_eq!(from_u24(0x336699), vector![0.2, 0.4, 0.6, 1.0]);
    }
}
