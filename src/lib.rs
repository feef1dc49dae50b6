//! # Rocket Exhaust
//!
//! A CPU particle exhaust and spline animation toolkit for 3D space demos.
//!
//! ## Features
//!
//! - **Linear Splines**: Piecewise-linear lookup tables driving particle
//!   alpha, color and size over normalized lifetime
//! - **Exhaust Simulation**: Emission accumulator, per-axis drag, in-place
//!   pool compaction and back-to-front depth sorting for additive blending
//! - **Render Publishing**: Parallel CPU attribute buffers with dirty
//!   tracking and a packed `bytemuck` vertex layout for GPU upload
//! - **Follow Camera**: Smooth pursuit with target switching and zoom-out
//!   transitions
//! - **Takeoff Sequence**: Explicit `Idle → Ascending → Floating` state
//!   machine with keyboard-driven flight physics
//! - **Configuration**: TOML/JSON tuning files with validation
//!
//! ## Architecture Design
//!
//! The crate only simulates; rendering, asset loading and input polling
//! stay on the host side. Each frame the host feeds key transitions into
//! [`input::InputState`], calls [`scene::SceneContext::update`] once, and
//! uploads the published [`particles::ExhaustGeometry`] buffers when their
//! dirty flag is set.
//!
//! ### Example
//!
//! ```
//! use rocket_exhaust::config::ExhaustTuning;
//! use rocket_exhaust::particles::ExhaustSystem;
//!
//! let mut exhaust = ExhaustSystem::new(ExhaustTuning::default());
//! exhaust.step(1.0 / 60.0);
//! assert_eq!(exhaust.geometry().len(), exhaust.particle_count());
//! ```

#[macro_use]
pub mod macros;

pub mod camera;
pub mod config;
pub mod input;
pub mod math;
pub mod particles;
pub mod rocket;
pub mod scene;

pub use camera::{FollowCamera, FollowTarget};
pub use config::{ConfigError, DemoConfig, ExhaustTuning};
pub use input::{InputState, Key};
pub use math::LinearSpline;
pub use particles::{ExhaustGeometry, ExhaustSystem, ExhaustVertex};
pub use rocket::{Rocket, TakeoffPhase};
pub use scene::SceneContext;
