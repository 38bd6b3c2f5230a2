//! Uniform Structs for Shaders
//!
//! GPU-compatible per-object matrices. The layout must match the vertex
//! shader's uniform block exactly.

use glam::Mat4;

use crate::camera::Camera;
use crate::math::{scale, translate};
use crate::world::{ObjectKind, ProximityEffect, StaticObject};

/// Per-object transform uniforms.
///
/// Layout (128 bytes total):
///   offset  0: mvp (mat4x4<f32>) = 64 bytes
///   offset 64: mv  (mat4x4<f32>) = 64 bytes
///
/// Both matrices are column-major.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    /// projection * view * model
    pub mvp: [[f32; 4]; 4],
    /// view * model, for view-space lighting
    pub mv: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(ObjectUniforms, [u8; 128]);

impl Default for ObjectUniforms {
    fn default() -> Self {
        Self::from_model(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

impl ObjectUniforms {
    /// Compose `MV = view * model` and `MVP = projection * MV`.
    pub fn from_model(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        let mv = view * model;
        let mvp = projection * mv;
        Self {
            mvp: mvp.to_cols_array_2d(),
            mv: mv.to_cols_array_2d(),
        }
    }

    /// Uniforms for `object` seen through the camera's cached matrices.
    pub fn for_object(object: &StaticObject, camera: &Camera) -> Self {
        Self::from_model(object.model_matrix(), camera.view, camera.projection)
    }
}

/// One draw call: which mesh to bind and the matrices to upload.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub kind: ObjectKind,
    pub uniforms: ObjectUniforms,
}

/// Model matrix actually drawn for `object`.
///
/// The teapot replaces its own rotation with the proximity spin; everything
/// else uses its static `translate * rotate * scale`.
pub fn draw_model_matrix(object: &StaticObject, effect: &ProximityEffect) -> Mat4 {
    match object.kind {
        ObjectKind::Teapot => {
            translate(object.position) * effect.teapot_spin() * scale(object.scale)
        }
        _ => object.model_matrix(),
    }
}

/// Build the draw list for a frame, in object list order.
pub fn build_draw_list(
    objects: &[StaticObject],
    camera: &Camera,
    effect: &ProximityEffect,
) -> Vec<DrawCommand> {
    objects
        .iter()
        .map(|object| DrawCommand {
            kind: object.kind,
            uniforms: ObjectUniforms::from_model(
                draw_model_matrix(object, effect),
                camera.view,
                camera.projection,
            ),
        })
        .collect()
}
