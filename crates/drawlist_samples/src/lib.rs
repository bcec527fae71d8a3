//! Sample draw list scenes
//!
//! Three analog clocks (a minimal dial, a railway-style watch and a
//! grandfather clock with a pendulum) and a live line graph. Each scene owns
//! a [`CommandList`](drawlist_core::CommandList) and mutates its primitives
//! in place on [`Scene::update`].
//!
//! ```
//! use std::time::Duration;
//! use drawlist_core::{pack, PackOptions};
//! use drawlist_samples::{scene_by_name, ClockTime};
//!
//! let mut scene = scene_by_name("clock").unwrap();
//! scene.update(ClockTime::new(10, 10, 0, 0), Duration::ZERO);
//! let records = pack(scene.command_list(), &PackOptions::default()).unwrap();
//! assert!(!records.is_empty());
//! ```

pub mod clock;
pub mod grandfather;
pub mod graph;
pub mod scene;
pub mod swiss;
pub mod time;

pub use clock::ClockScene;
pub use grandfather::GrandfatherClockScene;
pub use graph::{GraphScene, NormalizedGraph};
pub use scene::Scene;
pub use swiss::SwissWatchScene;
pub use time::{hand_angle_turns, ClockTime, UpdateThrottle};

/// Names accepted by [`scene_by_name`]
pub const SCENE_NAMES: [&str; 4] = ["clock", "swiss", "grandfather", "graph"];

/// Build a scene by name, case-insensitively
pub fn scene_by_name(name: &str) -> Option<Box<dyn Scene>> {
    let scene: Box<dyn Scene> = match name.to_ascii_lowercase().as_str() {
        "clock" => Box::new(ClockScene::new()),
        "swiss" => Box::new(SwissWatchScene::new()),
        "grandfather" => Box::new(GrandfatherClockScene::new()),
        "graph" => Box::new(GraphScene::new()),
        _ => return None,
    };
    tracing::debug!("Created scene '{}'", scene.name());
    Some(scene)
}
