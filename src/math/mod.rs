//! 数学工具模块
//!
//! 提供粒子动画所需的插值工具：
//! - `spline` - 分段线性插值查找表

pub mod spline;

pub use spline::{lerp_f32, lerp_vec3, LinearSpline};
