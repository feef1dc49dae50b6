//! 输入状态
//!
//! 显式的按键状态结构,由宿主在按键事件上喂入,
//! 取代跨文件共享的可变全局状态。不做任何输入轮询。

/// 演示用到的逻辑按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// 前向推进 (W)
    Forward,
    /// 后向推进 (S)
    Backward,
    /// 左转 (A)
    TurnLeft,
    /// 右转 (D)
    TurnRight,
    /// 上升 (Q)
    Up,
    /// 下降 (E)
    Down,
    /// 加速档 (Shift)
    Boost,
}

/// 当前按键状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次按键转换
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Forward => self.forward = pressed,
            Key::Backward => self.backward = pressed,
            Key::TurnLeft => self.turn_left = pressed,
            Key::TurnRight => self.turn_right = pressed,
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
            Key::Boost => self.boost = pressed,
        }
    }

    /// 是否有任一推进器在工作 (用于尾焰可见性)
    pub fn is_thrusting(&self) -> bool {
        self.forward || self.backward || self.up || self.down
    }

    /// 释放所有按键
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
