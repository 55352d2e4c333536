//! Small f32 linear algebra used by the transform and the software pipeline.

pub mod mat4;
pub mod vec3;
pub mod vec4;
