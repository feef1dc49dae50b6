//! 跟随相机
//!
//! 平滑追踪移动目标的相机状态机:位置和注视点分别按
//! 不同系数插值逼近,支持目标切换时保持当前空间关系,
//! 以及起飞前的拉远过渡。投影和输入轮询属于宿主。

use glam::Vec3;

use crate::config::CameraConfig;

/// 被跟随的目标
#[derive(Debug, Clone, Copy)]
pub struct FollowTarget {
    /// 目标位置
    pub position: Vec3,
    /// 注视点相对目标的高度偏移 (人物用1,火箭用2)
    pub look_height: f32,
}

/// 拉远过渡状态
#[derive(Debug, Clone, Copy)]
struct OffsetTransition {
    from: Vec3,
    to: Vec3,
    progress: f32,
    rate: f32,
}

/// 跟随相机
///
/// `follow` 每帧调用一次。禁用时相机位置完全交给宿主的
/// 手动轨道控制,这里不再移动它。
#[derive(Debug, Clone)]
pub struct FollowCamera {
    position: Vec3,
    look_target: Vec3,
    offset: Vec3,
    enabled: bool,
    transition: Option<OffsetTransition>,
    config: CameraConfig,
}

impl FollowCamera {
    /// 创建相机,初始偏移取配置的默认偏移
    pub fn new(position: Vec3, config: CameraConfig) -> Self {
        Self {
            position,
            look_target: Vec3::ZERO,
            offset: config.default_offset,
            enabled: true,
            transition: None,
            config,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// 开关自动跟随 (对应原演示的 C 键)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// 切换跟随目标,保持相机与目标当前的空间关系
    ///
    /// 在切换瞬间用 `相机位置 - 旧目标位置` 作为新偏移,
    /// 避免镜头跳变。
    pub fn retarget(&mut self, old_target_position: Vec3) {
        self.offset = self.position - old_target_position;
        tracing::debug!(target: "camera", offset = ?self.offset, "camera retargeted");
    }

    /// 开始向广角偏移拉远 (起飞前的过渡镜头)
    pub fn begin_zoom_out(&mut self) {
        self.transition = Some(OffsetTransition {
            from: self.offset,
            to: self.config.wide_offset,
            progress: 0.0,
            rate: self.config.zoom_rate,
        });
    }

    /// 拉远过渡是否仍在进行
    pub fn zooming(&self) -> bool {
        self.transition.is_some()
    }

    /// 每帧推进:先推进拉远过渡,再插值逼近理想位置和注视点
    pub fn follow(&mut self, target: &FollowTarget) {
        if !self.enabled {
            return;
        }

        if let Some(transition) = &mut self.transition {
            transition.progress = (transition.progress + transition.rate).min(1.0);
            self.offset = transition.from.lerp(transition.to, transition.progress);
            if transition.progress >= 1.0 {
                self.transition = None;
                tracing::debug!(target: "camera", "zoom-out transition complete");
            }
        }

        let ideal = target.position + self.offset;
        self.position = self.position.lerp(ideal, self.config.position_lerp);

        let look = target.position + Vec3::Y * target.look_height;
        self.look_target = self.look_target.lerp(look, self.config.look_lerp);
    }
}
