//! 火箭飞行模型
//!
//! 键盘驱动的简单飞行物理 (帧步进制,和原演示一致):
//! 推进沿偏航方向施加,转向带轻微侧倾,速度有上限和乘法阻力。
//! 起飞流程由显式的阶段状态机描述,每帧推进一次,
//! 不依赖自我重调度的回调。

use glam::Vec3;
use std::f32::consts::TAU;

use crate::config::RocketPhysicsConfig;
use crate::input::InputState;
use crate::math::lerp_f32;

/// 起飞阶段
///
/// `Idle` 在发射台等待触发,`Ascending` 以固定速度爬升到
/// 太空高度,`Floating` 进入自由飞行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeoffPhase {
    /// 停在发射台
    Idle,
    /// 固定速度爬升
    Ascending,
    /// 太空中自由飞行
    Floating,
}

/// 可控火箭
#[derive(Debug, Clone)]
pub struct Rocket {
    /// 位置 (世界空间)
    pub position: Vec3,
    /// 偏航角 (弧度)
    pub yaw: f32,
    /// 俯仰角
    pub pitch: f32,
    /// 侧倾角
    pub roll: f32,
    /// 当前速度 (单位/帧)
    pub velocity: Vec3,
    physics: RocketPhysicsConfig,
}

impl Rocket {
    pub fn new(position: Vec3, physics: RocketPhysicsConfig) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            velocity: Vec3::ZERO,
            physics,
        }
    }

    pub fn physics(&self) -> &RocketPhysicsConfig {
        &self.physics
    }

    /// 水平前向 (跟随偏航,始终平行于xz平面)
    pub fn forward_dir(&self) -> Vec3 {
        Vec3::new((-self.yaw).sin(), 0.0, self.yaw.cos()).normalize()
    }

    /// 施加一帧按键控制并积分运动
    pub fn apply_controls(&mut self, input: &InputState) {
        let boost = if input.boost {
            self.physics.boost_multiplier
        } else {
            1.0
        };
        let thrust = self.physics.thrust * boost;

        // 前后推进,带轻微俯仰倾斜
        if input.forward {
            self.velocity += self.forward_dir() * thrust;
            self.pitch = lerp_f32(0.1, self.pitch, 0.1);
        } else if input.backward {
            self.velocity -= self.forward_dir() * thrust;
            self.pitch = lerp_f32(0.1, self.pitch, -0.1);
        } else {
            self.pitch = lerp_f32(0.1, self.pitch, 0.0);
        }

        // 转向,带轻微侧倾
        if input.turn_left {
            self.yaw += (self.physics.turn_speed * boost).min(0.05);
            self.roll = lerp_f32(0.1, self.roll, 0.1);
        } else if input.turn_right {
            self.yaw -= (self.physics.turn_speed * boost).min(0.05);
            self.roll = lerp_f32(0.1, self.roll, -0.1);
        } else {
            self.roll = lerp_f32(0.1, self.roll, 0.0);
        }
        self.yaw %= TAU;

        // 世界竖直推进
        if input.up {
            self.velocity.y += thrust;
        }
        if input.down {
            self.velocity.y -= thrust;
        }

        // 限速、积分、阻力
        if self.velocity.length() > self.physics.max_speed {
            self.velocity = self.velocity.normalize() * self.physics.max_speed;
        }
        self.position += self.velocity;
        self.velocity *= self.physics.drag;
    }

    /// 爬升一帧,返回是否已到达太空高度
    pub fn ascend(&mut self) -> bool {
        self.position.y += self.physics.ascent_speed;
        self.position.y >= self.physics.space_altitude
    }

    /// 是否已在太空
    pub fn in_space(&self) -> bool {
        self.position.y >= self.physics.space_altitude
    }
}
