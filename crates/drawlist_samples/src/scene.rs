//! Common interface of the sample scenes

use std::time::Duration;

use drawlist_core::CommandList;

use crate::time::ClockTime;

/// An animated command list
pub trait Scene {
    fn name(&self) -> &'static str;

    fn command_list(&self) -> &CommandList;

    /// Move the scene to wall-clock `time`, `dt` after the previous update
    fn update(&mut self, time: ClockTime, dt: Duration);
}
