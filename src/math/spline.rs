//! 分段线性插值样条
//!
//! 将归一化进度 `t ∈ [0,1]` 映射到插值结果的查找表。
//! 这里的"样条"是粒子动画属性曲线,不是几何意义上的参数曲线。

use glam::Vec3;

/// 标量线性插值
pub fn lerp_f32(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// 颜色线性插值 (逐分量)
pub fn lerp_vec3(t: f32, a: Vec3, b: Vec3) -> Vec3 {
    a.lerp(b, t)
}

/// 分段线性样条
///
/// 控制点按插入顺序求值,`t` 应当非递减 (不强制检查,
/// 乱序的点集会产生看似合理但错误的插值,不会panic)。
///
/// 插值函数在构造时注入,标量和颜色类型共用同一套查表逻辑。
#[derive(Debug, Clone)]
pub struct LinearSpline<V> {
    points: Vec<(f32, V)>,
    lerp: fn(f32, V, V) -> V,
}

impl<V: Copy> LinearSpline<V> {
    /// 创建空样条
    pub fn new(lerp: fn(f32, V, V) -> V) -> Self {
        Self {
            points: Vec::new(),
            lerp,
        }
    }

    /// 追加控制点
    pub fn add_point(&mut self, t: f32, value: V) {
        self.points.push((t, value));
    }

    /// 链式追加控制点
    pub fn with_point(mut self, t: f32, value: V) -> Self {
        self.add_point(t, value);
        self
    }

    /// 控制点数量
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 求值
    ///
    /// 两端之外平坦外推: `t` 在首个控制点之前返回首值,
    /// 在末控制点之后返回末值。区间内部做线性混合。
    ///
    /// 前置条件: 至少有一个控制点。
    pub fn get(&self, t: f32) -> V {
        debug_assert!(!self.points.is_empty());

        let first = &self.points[0];
        if t <= first.0 {
            return first.1;
        }

        let last = &self.points[self.points.len() - 1];
        if t >= last.0 {
            return last.1;
        }

        // 找到第一个 t 不小于查询值的控制点
        let mut p1 = 0;
        for (i, point) in self.points.iter().enumerate() {
            if point.0 >= t {
                break;
            }
            p1 = i;
        }
        let p2 = (self.points.len() - 1).min(p1 + 1);

        if p1 == p2 {
            return self.points[p1].1;
        }

        let (t1, v1) = self.points[p1];
        let (t2, v2) = self.points[p2];
        (self.lerp)((t - t1) / (t2 - t1), v1, v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alpha_spline() -> LinearSpline<f32> {
        LinearSpline::new(lerp_f32)
            .with_point(0.0, 0.0)
            .with_point(0.1, 1.0)
            .with_point(0.6, 1.0)
            .with_point(1.0, 0.0)
    }

    #[test]
    fn test_flat_extrapolation_left() {
        let mut spline = LinearSpline::new(lerp_f32);
        spline.add_point(0.2, 3.0);
        spline.add_point(0.8, 7.0);

        assert_eq!(spline.get(0.2), 3.0);
        assert_eq!(spline.get(0.0), 3.0);
        assert_eq!(spline.get(-1.0), 3.0);
    }

    #[test]
    fn test_flat_extrapolation_right() {
        let mut spline = LinearSpline::new(lerp_f32);
        spline.add_point(0.2, 3.0);
        spline.add_point(0.8, 7.0);

        assert_eq!(spline.get(0.8), 7.0);
        assert_eq!(spline.get(1.0), 7.0);
        assert_eq!(spline.get(2.0), 7.0);
    }

    #[test]
    fn test_segment_midpoint() {
        let mut spline = LinearSpline::new(lerp_f32);
        spline.add_point(0.2, 3.0);
        spline.add_point(0.8, 7.0);

        let mid = spline.get((0.2 + 0.8) / 2.0);
        assert!((mid - lerp_f32(0.5, 3.0, 7.0)).abs() < 1e-6);
    }

    #[test]
    fn test_single_point() {
        let mut spline = LinearSpline::new(lerp_f32);
        spline.add_point(0.5, 42.0);

        assert_eq!(spline.get(0.0), 42.0);
        assert_eq!(spline.get(0.5), 42.0);
        assert_eq!(spline.get(1.0), 42.0);
    }

    #[test]
    fn test_alpha_curve() {
        let spline = alpha_spline();

        assert_eq!(spline.get(0.0), 0.0);
        assert!((spline.get(0.1) - 1.0).abs() < 1e-6);
        assert!((spline.get(0.3) - 1.0).abs() < 1e-6);
        assert_eq!(spline.get(1.0), 0.0);
        // 淡入段中点
        assert!((spline.get(0.05) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_color_spline() {
        let mut spline = LinearSpline::new(lerp_vec3);
        spline.add_point(0.0, Vec3::new(1.0, 1.0, 0.5));
        spline.add_point(1.0, Vec3::new(1.0, 0.5, 0.5));

        let mid = spline.get(0.5);
        assert!((mid.y - 0.75).abs() < 1e-6);
        assert!((mid.x - 1.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_result_within_value_bounds(t in -1.0f32..2.0) {
            let spline = alpha_spline();
            let v = spline.get(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }

        #[test]
        fn prop_flat_outside_domain(t in prop::num::f32::NORMAL) {
            let spline = alpha_spline();
            if t <= 0.0 {
                prop_assert_eq!(spline.get(t), 0.0);
            } else if t >= 1.0 {
                prop_assert_eq!(spline.get(t), 0.0);
            }
        }
    }
}
