//! 粒子渲染几何缓冲
//!
//! 粒子系统每帧重建四条并行属性数组 (位置/尺寸/颜色/旋转角),
//! 宿主渲染端只读取这些缓冲并在脏标记置位时重新上传。

use crate::particles::exhaust::ExhaustParticle;

/// 打包后的粒子顶点 (对应点精灵着色器的attribute布局)
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ExhaustVertex {
    /// 位置 (发射器局部空间)
    pub position: [f32; 3],
    /// 点尺寸
    pub size: f32,
    /// RGBA颜色 (alpha已预混入)
    pub color: [f32; 4],
    /// 公告板旋转角 (弧度)
    pub angle: f32,
}

/// 尾焰渲染几何
///
/// 属性缓冲由粒子系统独占持有并保持与粒子池同步;
/// 宿主只切换可见性或读取缓冲,从不直接写入。
#[derive(Debug, Clone, Default)]
pub struct ExhaustGeometry {
    /// 粒子位置
    pub positions: Vec<[f32; 3]>,
    /// 当前尺寸
    pub sizes: Vec<f32>,
    /// RGBA颜色
    pub colors: Vec<[f32; 4]>,
    /// 旋转角
    pub angles: Vec<f32>,
    /// 渲染可见性 (由宿主切换,只影响渲染,不影响模拟)
    pub visible: bool,
    dirty: bool,
}

impl ExhaustGeometry {
    pub fn new() -> Self {
        Self {
            visible: true,
            ..Default::default()
        }
    }

    /// 按排序后的粒子列表重建属性缓冲并置脏
    pub fn rebuild(&mut self, particles: &[ExhaustParticle]) {
        self.positions.clear();
        self.sizes.clear();
        self.colors.clear();
        self.angles.clear();

        for p in particles {
            self.positions.push(p.position.to_array());
            self.sizes.push(p.current_size);
            self.colors
                .push([p.color.x, p.color.y, p.color.z, p.alpha]);
            self.angles.push(p.rotation);
        }

        self.dirty = true;
    }

    /// 取走脏标记 (上传后调用,返回之前的值)
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// 当前顶点数
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 打包成交错顶点数组,可经bytemuck直接作为GPU上传数据
    pub fn vertices(&self) -> Vec<ExhaustVertex> {
        (0..self.len())
            .map(|i| ExhaustVertex {
                position: self.positions[i],
                size: self.sizes[i],
                color: self.colors[i],
                angle: self.angles[i],
            })
            .collect()
    }
}
