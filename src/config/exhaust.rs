use super::{ConfigError, ConfigResult};
use crate::impl_default;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 尾焰粒子调参
///
/// 默认值是手调常数,对应演示中的火箭尾焰效果。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustTuning {
    /// 每秒发射粒子数
    pub emission_rate: f32,

    /// 出生位置立方体半边长 (发射器局部空间)
    pub spawn_extent: f32,

    /// 最短寿命 (秒)
    pub life_min: f32,

    /// 最长寿命 (秒)
    pub life_max: f32,

    /// 最小基础尺寸
    pub size_min: f32,

    /// 最大基础尺寸
    pub size_max: f32,

    /// 初速度 (发射器局部空间)
    pub initial_velocity: Vec3,

    /// 自旋速率 (弧度/秒)
    pub spin_rate: f32,

    /// 阻力系数 (见 `ExhaustSystem` 的逐轴阻力模型)
    pub drag_coefficient: f32,
}

impl_default!(ExhaustTuning {
    emission_rate: 75.0,
    spawn_extent: 1.0,
    life_min: 2.5,
    life_max: 10.0,
    size_min: 2.0,
    size_max: 4.0,
    initial_velocity: Vec3::new(0.0, -15.0, 0.0),
    spin_rate: 0.5,
    drag_coefficient: 0.1,
});

impl ExhaustTuning {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.emission_rate <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "exhaust.emission_rate must be positive, got {}",
                self.emission_rate
            )));
        }
        if self.life_min <= 0.0 || self.life_min > self.life_max {
            return Err(ConfigError::ValidationError(format!(
                "exhaust lifetime range [{}, {}] is invalid",
                self.life_min, self.life_max
            )));
        }
        if self.size_min <= 0.0 || self.size_min > self.size_max {
            return Err(ConfigError::ValidationError(format!(
                "exhaust size range [{}, {}] is invalid",
                self.size_min, self.size_max
            )));
        }
        if self.spawn_extent < 0.0 {
            return Err(ConfigError::ValidationError(
                "exhaust.spawn_extent must not be negative".to_string(),
            ));
        }
        if self.drag_coefficient < 0.0 {
            return Err(ConfigError::ValidationError(
                "exhaust.drag_coefficient must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
