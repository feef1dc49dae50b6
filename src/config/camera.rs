use super::{ConfigError, ConfigResult};
use crate::impl_default;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 跟随相机参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// 默认相机偏移 (相对跟随目标)
    pub default_offset: Vec3,

    /// 起飞前拉远视角用的广角偏移
    pub wide_offset: Vec3,

    /// 相机位置插值系数 (每帧)
    pub position_lerp: f32,

    /// 注视点插值系数 (每帧)
    pub look_lerp: f32,

    /// 拉远过渡每帧推进量
    pub zoom_rate: f32,
}

impl_default!(CameraConfig {
    default_offset: Vec3::new(-10.0, 2.0, 15.0),
    wide_offset: Vec3::new(-15.0, 5.0, 25.0),
    position_lerp: 0.1,
    look_lerp: 0.2,
    zoom_rate: 0.02,
});

impl CameraConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("camera.position_lerp", self.position_lerp),
            ("camera.look_lerp", self.look_lerp),
            ("camera.zoom_rate", self.zoom_rate),
        ] {
            if !(0.0 < value && value <= 1.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
