//! 无头演示驱动
//!
//! 加载配置,运行火箭起飞序列若干帧并输出阶段日志。
//! 用法: `rocket_exhaust [config.toml]`

use rand::rngs::StdRng;
use rand::SeedableRng;

use rocket_exhaust::config::{ConfigResult, DemoConfig};
use rocket_exhaust::input::Key;
use rocket_exhaust::rocket::TakeoffPhase;
use rocket_exhaust::scene::SceneContext;

const FRAME_DT: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u32 = 600;

fn main() {
    if let Err(e) = run() {
        eprintln!("Demo failed to start: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ConfigResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    config.validate()?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .try_init();
    tracing::info!(target: "demo", "takeoff demo starting");

    let mut rng = StdRng::from_entropy();
    let mut scene = SceneContext::new(config, &mut rng);
    scene.request_launch();

    let mut last_phase = scene.phase();
    for frame in 0..TOTAL_FRAMES {
        // 漂浮阶段持续上推,让尾焰保持工作
        if scene.phase() == TakeoffPhase::Floating {
            scene.input.set(Key::Up, true);
        }

        scene.update(FRAME_DT);

        if scene.phase() != last_phase {
            tracing::info!(
                target: "demo",
                frame,
                phase = ?scene.phase(),
                altitude = scene.rocket.position.y,
                "phase changed"
            );
            last_phase = scene.phase();
        }
    }

    tracing::info!(
        target: "demo",
        particles = scene.exhaust.particle_count(),
        altitude = scene.rocket.position.y,
        stars_visible = scene.starfield.visible,
        "takeoff demo finished"
    );
    Ok(())
}
