//! 场景上下文
//!
//! 把火箭、尾焰、相机和输入聚合成一个显式的场景结构,
//! 每帧由 `update` 按固定顺序推进,取代原演示里散落的
//! 跨文件全局变量。另外提供星空点云生成和天空-太空的
//! 背景过渡色。渲染本身交给宿主。

use glam::Vec3;
use rand::Rng;

use crate::camera::{FollowCamera, FollowTarget};
use crate::config::DemoConfig;
use crate::input::InputState;
use crate::particles::ExhaustSystem;
use crate::rocket::{Rocket, TakeoffPhase};

/// 发射台上方的天空色 (0xa8def0)
const SKY_COLOR: Vec3 = Vec3::new(168.0 / 255.0, 222.0 / 255.0, 240.0 / 255.0);
/// 太空背景色 (0x000033)
const SPACE_COLOR: Vec3 = Vec3::new(0.0, 0.0, 51.0 / 255.0);

/// 按高度插值的背景色
///
/// 高度0是纯天空色,到 `space_altitude` 完全过渡成太空色。
pub fn sky_color(altitude: f32, space_altitude: f32) -> Vec3 {
    let t = (altitude / space_altitude).clamp(0.0, 1.0);
    SKY_COLOR.lerp(SPACE_COLOR, t)
}

/// 星空点云
///
/// 进入太空前隐藏。位置只生成一次,宿主负责画。
#[derive(Debug, Clone)]
pub struct Starfield {
    /// 星点位置
    pub positions: Vec<[f32; 3]>,
    /// 可见性
    pub visible: bool,
}

impl Starfield {
    /// 在 `±spread/2` 的立方体内均匀撒 `count` 个星点
    pub fn generate(count: usize, spread: f32, rng: &mut impl Rng) -> Self {
        let half = spread / 2.0;
        let positions = (0..count)
            .map(|_| {
                [
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                ]
            })
            .collect();
        Self {
            positions,
            visible: false,
        }
    }
}

/// 场景上下文
///
/// 宿主每帧调用一次 [`SceneContext::update`],顺序固定:
/// 起飞状态机 → 飞行控制 → 尾焰可见性 → 尾焰模拟 → 相机跟随。
pub struct SceneContext {
    pub rocket: Rocket,
    pub exhaust: ExhaustSystem,
    pub camera: FollowCamera,
    pub input: InputState,
    pub starfield: Starfield,
    phase: TakeoffPhase,
    launch_requested: bool,
    config: DemoConfig,
}

impl SceneContext {
    /// 组装场景,火箭初始停在发射台
    pub fn new(config: DemoConfig, rng: &mut impl Rng) -> Self {
        let rocket = Rocket::new(Vec3::new(0.0, -1.0, 30.0), config.physics.clone());
        let mut exhaust = ExhaustSystem::new(config.exhaust.clone());
        exhaust.set_visible(false);

        let camera = FollowCamera::new(Vec3::new(-10.0, 0.0, 15.0), config.camera.clone());
        let starfield = Starfield::generate(20_000, 2000.0, rng);

        Self {
            rocket,
            exhaust,
            camera,
            input: InputState::new(),
            starfield,
            phase: TakeoffPhase::Idle,
            launch_requested: false,
            config,
        }
    }

    pub fn phase(&self) -> TakeoffPhase {
        self.phase
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// 当前背景色
    pub fn background(&self) -> Vec3 {
        sky_color(self.rocket.position.y, self.config.physics.space_altitude)
    }

    /// 请求发射
    ///
    /// 相机先切换目标并拉远视角,拉远结束后才进入爬升阶段。
    pub fn request_launch(&mut self) {
        if self.phase != TakeoffPhase::Idle || self.launch_requested {
            return;
        }
        self.launch_requested = true;
        self.camera.retarget(self.rocket.position);
        self.camera.begin_zoom_out();
        tracing::info!(target: "scene", "launch requested, zooming out");
    }

    /// 推进一帧
    pub fn update(&mut self, dt: f32) {
        self.advance_phase();

        match self.phase {
            TakeoffPhase::Idle => {}
            TakeoffPhase::Ascending => {
                if self.rocket.ascend() {
                    self.transition(TakeoffPhase::Floating);
                }
            }
            TakeoffPhase::Floating => {
                self.rocket.apply_controls(&self.input);
                // 可见性只门控渲染,模拟照常推进
                self.exhaust.set_visible(self.input.is_thrusting());
            }
        }

        self.starfield.visible = self.rocket.in_space();

        if self.phase != TakeoffPhase::Idle {
            self.exhaust.set_camera_position(self.camera.position());
            self.exhaust.step(dt);
        }

        self.camera.follow(&FollowTarget {
            position: self.rocket.position,
            look_height: 2.0,
        });
    }

    /// 发射触发:等相机拉远完成后点火
    fn advance_phase(&mut self) {
        if self.phase == TakeoffPhase::Idle && self.launch_requested && !self.camera.zooming() {
            self.exhaust.set_visible(true);
            self.transition(TakeoffPhase::Ascending);
        }
    }

    fn transition(&mut self, next: TakeoffPhase) {
        tracing::debug!(target: "scene", from = ?self.phase, to = ?next, "takeoff phase transition");
        self.phase = next;
    }
}
