//! Line graph of a growing series, normalized into the unit square

use std::time::Duration;

use drawlist_core::{Color, CommandList, Line, Vec2};

use crate::scene::Scene;
use crate::time::{ClockTime, UpdateThrottle};

/// Series of samples tracking its running minimum and maximum
#[derive(Clone, Debug)]
pub struct NormalizedGraph {
    values: Vec<f32>,
    min: f32,
    max: f32,
}

impl NormalizedGraph {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    pub fn append(&mut self, value: f32) {
        self.values.push(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// One line per consecutive pair of samples
    ///
    /// Sample `i` of `n` sits at x = `i / (n - 1)`, and its value maps
    /// min..max onto y = 0..1. A constant series lies along y = 0. Fewer
    /// than two samples produce no lines.
    pub fn to_primitives(&self, thickness: f32, color: Color) -> Vec<Line> {
        let count = self.values.len();
        if count < 2 {
            return Vec::new();
        }

        let range = self.max - self.min;
        let inv_range = if range > 0.0 { 1.0 / range } else { 1.0 };
        let inv_steps = 1.0 / (count - 1) as f32;

        let point = |i: usize| Vec2::new(i as f32 * inv_steps, (self.values[i] - self.min) * inv_range);

        (0..count - 1)
            .map(|i| Line::new(point(i), point(i + 1), thickness, color))
            .collect()
    }
}

impl Default for NormalizedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f32> for NormalizedGraph {
    fn extend<T: IntoIterator<Item = f32>>(&mut self, iter: T) {
        for value in iter {
            self.append(value);
        }
    }
}

/// Scrolling sine wave, one new sample every 200 ms
pub struct GraphScene {
    graph: NormalizedGraph,
    list: CommandList,
    throttle: UpdateThrottle,
    elapsed: Duration,
    ticks: f32,
    pub line_thickness: f32,
    pub color: Color,
}

impl GraphScene {
    pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(200);
    const TICK_STEP: f32 = 0.1;

    pub fn new() -> Self {
        let mut graph = NormalizedGraph::new();
        // sin(x) for x in 0..=5, step 0.1
        graph.extend((0..=50).map(|i| (i as f32 * Self::TICK_STEP).sin()));

        let mut scene = Self {
            graph,
            list: CommandList::new(),
            throttle: UpdateThrottle::new(Self::SAMPLE_INTERVAL),
            elapsed: Duration::ZERO,
            ticks: 0.0,
            line_thickness: 0.01,
            color: Color::RED,
        };
        scene.rebuild();
        scene
    }

    pub fn graph(&self) -> &NormalizedGraph {
        &self.graph
    }

    /// Regenerate the command list from the graph
    pub fn rebuild(&mut self) {
        let lines = self.graph.to_primitives(self.line_thickness, self.color);
        self.list.replace_all(lines);
    }
}

impl Default for GraphScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for GraphScene {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn command_list(&self) -> &CommandList {
        &self.list
    }

    fn update(&mut self, _time: ClockTime, dt: Duration) {
        self.elapsed += dt;
        if !self.throttle.ready(self.elapsed) {
            return;
        }

        self.graph.append(self.ticks.sin());
        self.ticks += Self::TICK_STEP;
        tracing::trace!("Graph sample {} ({} total)", self.ticks, self.graph.len());
        self.rebuild();
    }
}
