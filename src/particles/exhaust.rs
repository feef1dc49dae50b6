//! 尾焰粒子模拟核心
//!
//! 每帧由宿主调用一次 [`ExhaustSystem::step`],内部严格按
//! 发射 → 更新 → 发布 的顺序执行,保证新粒子在出生当帧
//! 就出现在渲染缓冲里。模拟全部在发射器局部空间进行,
//! 宿主负责把渲染图元定位到移动的发射器上。

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::config::ExhaustTuning;
use crate::math::{lerp_f32, lerp_vec3, LinearSpline};
use crate::particles::geometry::ExhaustGeometry;

/// 出生时的暖黄色 (0xFFFF80)
const WARM_YELLOW: Vec3 = Vec3::new(1.0, 1.0, 128.0 / 255.0);
/// 熄灭前的暖红色 (0xFF8080)
const WARM_RED: Vec3 = Vec3::new(1.0, 128.0 / 255.0, 128.0 / 255.0);

/// 单个尾焰粒子
///
/// 由粒子系统的存活池独占持有,寿命耗尽当帧即被移除。
#[derive(Debug, Clone, Copy)]
pub struct ExhaustParticle {
    /// 位置 (发射器局部空间)
    pub position: Vec3,
    /// 速度
    pub velocity: Vec3,
    /// 公告板旋转角 (弧度)
    pub rotation: f32,
    /// 出生时抽取的基础尺寸
    pub base_size: f32,
    /// 当前尺寸 (基础尺寸 × 尺寸样条)
    pub current_size: f32,
    /// 当前颜色 (颜色样条)
    pub color: Vec3,
    /// 当前透明度 (透明度样条)
    pub alpha: f32,
    /// 剩余寿命 (秒)
    pub life: f32,
    /// 出生时的总寿命 (秒)
    pub max_life: f32,
}

/// 尾焰粒子系统
///
/// 每个发射器独占一个实例,实例间无共享状态。
/// 三条属性样条在构造时建好,之后只读:
/// - 透明度: 快速淡入,保持,淡出
/// - 颜色: 从暖黄随寿命冷却到暖红
/// - 尺寸: 先膨胀到5倍再收缩
pub struct ExhaustSystem {
    particles: Vec<ExhaustParticle>,
    /// 发射累积器,跨帧保留小数余量,避免帧时间抖动造成发射率漂移
    accumulator: f32,
    enabled: bool,
    tuning: ExhaustTuning,
    alpha_spline: LinearSpline<f32>,
    size_spline: LinearSpline<f32>,
    color_spline: LinearSpline<Vec3>,
    camera_position: Vec3,
    geometry: ExhaustGeometry,
    rng: StdRng,
}

impl ExhaustSystem {
    /// 创建粒子系统
    pub fn new(tuning: ExhaustTuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    /// 用固定种子创建,测试用
    pub fn with_seed(tuning: ExhaustTuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tuning: ExhaustTuning, rng: StdRng) -> Self {
        let alpha_spline = LinearSpline::new(lerp_f32)
            .with_point(0.0, 0.0)
            .with_point(0.1, 1.0)
            .with_point(0.6, 1.0)
            .with_point(1.0, 0.0);

        let color_spline = LinearSpline::new(lerp_vec3)
            .with_point(0.0, WARM_YELLOW)
            .with_point(1.0, WARM_RED);

        let size_spline = LinearSpline::new(lerp_f32)
            .with_point(0.0, 1.0)
            .with_point(0.5, 5.0)
            .with_point(1.0, 1.0);

        let mut system = Self {
            particles: Vec::new(),
            accumulator: 0.0,
            enabled: true,
            tuning,
            alpha_spline,
            size_spline,
            color_spline,
            camera_position: Vec3::ZERO,
            geometry: ExhaustGeometry::new(),
            rng,
        };
        // 空几何也要发布一次,保证宿主拿到合法的零长度缓冲
        system.publish();
        system
    }

    /// 推进模拟 `dt` 秒
    ///
    /// 唯一的每帧入口,严格按 发射 → 更新 → 发布 执行。
    pub fn step(&mut self, dt: f32) {
        self.emit(dt);
        self.update(dt);
        self.publish();

        tracing::trace!(
            target: "exhaust",
            alive = self.particles.len(),
            "stepped particle system"
        );
    }

    /// 更新深度排序用的相机位置 (宿主每帧调用)
    pub fn set_camera_position(&mut self, position: Vec3) {
        self.camera_position = position;
    }

    /// 开关发射 (已存活的粒子继续老化)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// 当前存活粒子数
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// 存活粒子 (排序后顺序)
    pub fn particles(&self) -> &[ExhaustParticle] {
        &self.particles
    }

    /// 渲染几何
    pub fn geometry(&self) -> &ExhaustGeometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut ExhaustGeometry {
        &mut self.geometry
    }

    /// 切换渲染可见性 (只影响渲染,不影响模拟)
    pub fn set_visible(&mut self, visible: bool) {
        self.geometry.visible = visible;
    }

    fn emit(&mut self, dt: f32) {
        if !self.enabled {
            return;
        }

        self.accumulator += dt;
        let count = (self.accumulator * self.tuning.emission_rate).floor() as u32;
        self.accumulator -= count as f32 / self.tuning.emission_rate;

        let extent = self.tuning.spawn_extent;
        for _ in 0..count {
            let life = self.rng.gen_range(self.tuning.life_min..=self.tuning.life_max);
            let base_size = self.rng.gen_range(self.tuning.size_min..=self.tuning.size_max);
            let position = Vec3::new(
                (self.rng.gen::<f32>() * 2.0 - 1.0) * extent,
                (self.rng.gen::<f32>() * 2.0 - 1.0) * extent,
                (self.rng.gen::<f32>() * 2.0 - 1.0) * extent,
            );

            self.particles.push(ExhaustParticle {
                position,
                velocity: self.tuning.initial_velocity,
                rotation: self.rng.gen_range(0.0..TAU),
                base_size,
                current_size: base_size,
                color: WARM_YELLOW,
                alpha: 1.0,
                life,
                max_life: life,
            });
        }
    }

    fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.life -= dt;
        }

        // 原地压缩,寿命耗尽的粒子当帧移除
        self.particles.retain(|p| p.life > 0.0);

        let drag_factor = dt * self.tuning.drag_coefficient;
        let spin = dt * self.tuning.spin_rate;

        for p in &mut self.particles {
            let t = 1.0 - p.life / p.max_life;

            p.rotation += spin;
            p.alpha = self.alpha_spline.get(t);
            p.current_size = p.base_size * self.size_spline.get(t);
            p.color = self.color_spline.get(t);

            p.position += p.velocity * dt;
            p.velocity -= drag_vector(p.velocity, drag_factor);
        }

        // 远到近排序,让加法混合的透明粒子正确合成
        let camera = self.camera_position;
        self.particles.sort_by(|a, b| {
            let da = camera.distance_squared(a.position);
            let db = camera.distance_squared(b.position);
            db.total_cmp(&da)
        });
    }

    fn publish(&mut self) {
        self.geometry.rebuild(&self.particles);
    }
}

/// 逐轴阻力增量
///
/// 每个分量被钳制到该轴当前速度的模,因此速度分量单调趋零,
/// 永远不会过冲或反号。这是刻意保留的逐轴模型,不是严格的
/// 指数衰减。
fn drag_vector(velocity: Vec3, factor: f32) -> Vec3 {
    Vec3::new(
        drag_component(velocity.x, factor),
        drag_component(velocity.y, factor),
        drag_component(velocity.z, factor),
    )
}

fn drag_component(v: f32, factor: f32) -> f32 {
    // sign(v) * min(|v*factor|, |v|) == clamp(v*factor, -|v|, |v|) 当 factor >= 0
    (v * factor).clamp(-v.abs(), v.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn system() -> ExhaustSystem {
        ExhaustSystem::with_seed(ExhaustTuning::default(), 7)
    }

    #[test]
    fn test_one_second_emits_exactly_rate() {
        let mut exhaust = system();
        exhaust.step(1.0);
        assert_eq!(exhaust.particle_count(), 75);
    }

    #[test]
    fn test_accumulator_preserves_fraction() {
        let mut exhaust = system();
        // 120 帧 × 1/120 秒 ≈ 1 秒。floor(1/120 × 75) = 0,
        // 没有累积器的话一个粒子都发不出来;有累积器只剩浮点求和的±1误差
        for _ in 0..120 {
            exhaust.step(1.0 / 120.0);
        }
        let count = exhaust.particle_count();
        assert!((74..=76).contains(&count), "drifted to {}", count);
    }

    #[test]
    fn test_zero_step_is_idempotent() {
        let mut exhaust = system();
        exhaust.step(0.5);

        let before: Vec<_> = {
            let mut snapshot: Vec<_> = exhaust
                .particles()
                .iter()
                .map(|p| (p.position.to_array(), p.life.to_bits()))
                .collect();
            snapshot.sort_by(|a, b| a.1.cmp(&b.1));
            snapshot
        };
        let count = exhaust.particle_count();

        exhaust.step(0.0);

        assert_eq!(exhaust.particle_count(), count);
        let mut after: Vec<_> = exhaust
            .particles()
            .iter()
            .map(|p| (p.position.to_array(), p.life.to_bits()))
            .collect();
        after.sort_by(|a, b| a.1.cmp(&b.1));
        assert_eq!(after, before);
    }

    #[test]
    fn test_population_decays_to_zero_without_emission() {
        let mut exhaust = system();
        exhaust.step(1.0);
        assert!(exhaust.particle_count() > 0);

        exhaust.set_enabled(false);
        // 全部粒子的寿命上限是 life_max = 10 秒
        for _ in 0..25 {
            exhaust.step(0.5);
        }
        assert_eq!(exhaust.particle_count(), 0);
        assert!(exhaust.geometry().is_empty());
    }

    #[test]
    fn test_particles_sorted_far_to_near() {
        let mut exhaust = system();
        exhaust.set_camera_position(Vec3::new(3.0, 10.0, -2.0));
        exhaust.step(0.7);
        exhaust.step(0.3);

        let camera = Vec3::new(3.0, 10.0, -2.0);
        let particles = exhaust.particles();
        assert!(particles.len() > 1);
        for pair in particles.windows(2) {
            let da = camera.distance(pair[0].position);
            let db = camera.distance(pair[1].position);
            assert!(da >= db, "expected far-to-near order: {} < {}", da, db);
        }
    }

    #[test]
    fn test_geometry_published_same_frame_as_spawn() {
        let mut exhaust = system();
        assert!(exhaust.geometry().is_empty());

        exhaust.step(0.1);
        assert!(exhaust.particle_count() > 0);
        assert_eq!(exhaust.geometry().len(), exhaust.particle_count());
    }

    #[test]
    fn test_life_invariant_held() {
        let mut exhaust = system();
        for _ in 0..50 {
            exhaust.step(0.21);
            for p in exhaust.particles() {
                assert!(p.life > 0.0);
                assert!(p.life <= p.max_life);
            }
        }
    }

    #[test]
    fn test_spawned_attributes_in_range() {
        let tuning = ExhaustTuning::default();
        let mut exhaust = system();
        exhaust.step(0.5);

        for p in exhaust.particles() {
            assert!(p.max_life >= tuning.life_min && p.max_life <= tuning.life_max);
            assert!(p.base_size >= tuning.size_min && p.base_size <= tuning.size_max);
            assert!(p.rotation >= 0.0 && p.rotation < TAU + 0.5 * tuning.spin_rate);
        }
    }

    #[test]
    fn test_disabled_system_does_not_accumulate() {
        let mut exhaust = system();
        exhaust.set_enabled(false);
        exhaust.step(2.0);
        exhaust.set_enabled(true);
        // 关闭期间经过的时间不应折算成积压的发射量
        exhaust.step(0.0);
        assert_eq!(exhaust.particle_count(), 0);
    }

    #[test]
    fn test_drag_slows_but_never_stops_in_one_step() {
        let v = Vec3::new(0.0, -15.0, 0.0);
        let after = v - drag_vector(v, 0.016 * 0.1);
        assert!(after.y < 0.0);
        assert!(after.y > v.y);
    }

    proptest! {
        #[test]
        fn prop_drag_never_reverses_sign(
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
            vz in -100.0f32..100.0,
            factor in 0.0f32..10.0,
        ) {
            let v = Vec3::new(vx, vy, vz);
            let after = v - drag_vector(v, factor);
            for i in 0..3 {
                let sign_kept = after[i] == 0.0 || after[i].signum() == v[i].signum();
                prop_assert!(sign_kept, "axis {} reversed: {} -> {}", i, v[i], after[i]);
            }
        }

        #[test]
        fn prop_drag_magnitude_bounded(v in -100.0f32..100.0, factor in 0.0f32..10.0) {
            let d = drag_component(v, factor);
            prop_assert!(d.abs() <= v.abs() + f32::EPSILON);
        }
    }
}
