//! Scene Layout
//!
//! The static prop list and light list of the walkthrough arena. Objects are
//! created once at setup and never mutated afterwards; the movement
//! controller reads them for collision and ground checks and the renderer
//! reads them for draw dispatch.
//!
//! ## Arena
//! A 20 x 20 square room: walls at x/z = +/-10, floor at y = -0.85, ceiling at
//! y = 10. A teapot sits at the origin surrounded by five crates.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::{model_matrix, radians};

/// Draw dispatch tag. Not used by the kinematics beyond identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Teapot,
    Cube,
    Floor,
    Wall,
}

/// An immutable prop in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticObject {
    /// World-space centre
    pub position: Vec3,
    /// Rotation axis (need not be unit length)
    pub axis: Vec3,
    /// Per-axis scale; `scale.y` doubles as the platform height above `position.y`
    pub scale: Vec3,
    /// Rotation angle in radians
    pub angle: f32,
    pub kind: ObjectKind,
}

impl StaticObject {
    /// Unrotated object of the given kind.
    pub fn new(kind: ObjectKind, position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            axis: Vec3::Y,
            scale,
            angle: 0.0,
            kind,
        }
    }

    /// Same object rotated by `angle` radians about `axis`.
    pub fn rotated(mut self, angle: f32, axis: Vec3) -> Self {
        self.angle = angle;
        self.axis = axis;
        self
    }

    /// Height of the top surface used by the ground scan.
    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y + self.scale.y
    }

    /// `translate * rotate * scale` model matrix.
    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(self.position, self.angle, self.axis, self.scale)
    }
}

/// Light type, which decides how the proximity effect colours it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    Point,
    Spot,
}

/// A light in the scene. Shading parameters beyond these live with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub kind: LightKind,
    pub position: Vec3,
    pub colour: Vec3,
}

/// Full scene description: props in draw/collision order plus lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<StaticObject>,
    pub lights: Vec<LightSource>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::arena()
    }
}

impl Scene {
    /// The default arena layout. Object order matters: collision and the
    /// ground scan walk this list front to back.
    pub fn arena() -> Self {
        let mut objects = Vec::with_capacity(12);
        let diagonal = Vec3::ONE;

        objects.push(
            StaticObject::new(ObjectKind::Teapot, Vec3::new(0.0, 0.3, 0.0), Vec3::splat(0.5))
                .rotated(0.0, diagonal),
        );

        let crates = [
            Vec3::new(2.0, -0.5, 2.0),
            Vec3::new(-2.0, -0.5, 2.0),
            Vec3::new(2.0, -0.5, -2.0),
            Vec3::new(-2.0, -0.5, -2.0),
            Vec3::new(0.0, -0.5, 0.0),
        ];
        objects.extend(crates.into_iter().map(|position| {
            StaticObject::new(ObjectKind::Cube, position, Vec3::splat(0.4)).rotated(0.0, diagonal)
        }));

        // Floor, then the same plane flipped over as the ceiling
        objects.push(StaticObject::new(ObjectKind::Floor, Vec3::new(0.0, -0.85, 0.0), Vec3::ONE));
        objects.push(
            StaticObject::new(ObjectKind::Floor, Vec3::new(0.0, 10.0, 0.0), Vec3::ONE)
                .rotated(radians(180.0), Vec3::X),
        );

        let walls = [
            (Vec3::new(0.0, 0.5, -10.0), Vec3::X, 90.0),
            (Vec3::new(0.0, 0.5, 10.0), Vec3::NEG_X, 90.0),
            (Vec3::new(10.0, 0.5, 0.0), Vec3::new(0.0, 0.0, 2.0), 90.0),
            (Vec3::new(-10.0, 0.5, 0.0), Vec3::Z, -90.0),
        ];
        objects.extend(walls.into_iter().map(|(position, axis, degrees)| {
            StaticObject::new(ObjectKind::Wall, position, Vec3::splat(10.0))
                .rotated(radians(degrees), axis)
        }));

        let grey = Vec3::splat(0.5);
        let lights = vec![
            LightSource {
                kind: LightKind::Spot,
                position: Vec3::new(0.0, 3.0, 0.0),
                colour: Vec3::new(1.0, 0.0, 0.0),
            },
            LightSource { kind: LightKind::Point, position: Vec3::new(-6.0, 4.0, -6.0), colour: grey },
            LightSource { kind: LightKind::Point, position: Vec3::new(6.0, 4.0, -6.0), colour: grey },
            LightSource { kind: LightKind::Point, position: Vec3::new(6.0, 4.0, 6.0), colour: grey },
            LightSource { kind: LightKind::Point, position: Vec3::new(-6.0, 4.0, 6.0), colour: grey },
        ];

        Self { objects, lights }
    }

    /// Objects of one kind, in list order.
    pub fn objects_of(&self, kind: ObjectKind) -> impl Iterator<Item = &StaticObject> {
        self.objects.iter().filter(move |object| object.kind == kind)
    }
}
