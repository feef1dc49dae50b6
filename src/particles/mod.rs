//! 尾焰粒子系统
//!
//! 有界寿命的粒子流模拟,用于表现火箭尾焰:
//! - `exhaust` - 发射、老化、深度排序的模拟核心
//! - `geometry` - 发布给渲染端的CPU侧属性缓冲

pub mod exhaust;
pub mod geometry;

pub use exhaust::{ExhaustParticle, ExhaustSystem};
pub use geometry::{ExhaustGeometry, ExhaustVertex};
