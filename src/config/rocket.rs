use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 火箭物理参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketPhysicsConfig {
    /// 推进加速度 (单位/帧²)
    pub thrust: f32,

    /// 转向速度 (弧度/帧)
    pub turn_speed: f32,

    /// 每帧速度衰减因子 (乘法阻力, (0, 1])
    pub drag: f32,

    /// 最大速度 (单位/帧)
    pub max_speed: f32,

    /// 加速档推力倍率
    pub boost_multiplier: f32,

    /// 起飞阶段的固定爬升速度 (单位/帧)
    pub ascent_speed: f32,

    /// 进入太空的高度阈值
    pub space_altitude: f32,
}

impl_default!(RocketPhysicsConfig {
    thrust: 0.007,
    turn_speed: 0.02,
    drag: 0.97,
    max_speed: 0.4,
    boost_multiplier: 1.8,
    ascent_speed: 0.2,
    space_altitude: 10.0,
});

impl RocketPhysicsConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.thrust <= 0.0 {
            return Err(ConfigError::ValidationError(
                "physics.thrust must be positive".to_string(),
            ));
        }
        if !(0.0 < self.drag && self.drag <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "physics.drag must be in (0, 1], got {}",
                self.drag
            )));
        }
        if self.max_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "physics.max_speed must be positive".to_string(),
            ));
        }
        if self.ascent_speed <= 0.0 || self.space_altitude <= 0.0 {
            return Err(ConfigError::ValidationError(
                "physics takeoff parameters must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_physics_valid() {
        assert!(RocketPhysicsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_drag_above_one_rejected() {
        let config = RocketPhysicsConfig {
            drag: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
