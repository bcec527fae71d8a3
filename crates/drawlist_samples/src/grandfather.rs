//! Grandfather clock: double bezel, triangle hour markers and a swinging
//! pendulum below the dial

use std::time::Duration;

use drawlist_core::{
    Capsule, Circle, Color, CommandList, Disk, EquilateralTriangle, Primitive, PrimitiveKey,
    RadialLine, Vec2, TAU,
};

use crate::scene::Scene;
use crate::time::{hand_angle_turns, ClockTime};

const CENTER: Vec2 = Vec2::new(0.5, 0.5);
const DIAL_RADIUS: f32 = 0.4;
const MARKER_RADIUS: f32 = 0.33;

const PIVOT: Vec2 = Vec2::new(0.5, 0.45);
const BOB_REST: Vec2 = Vec2::new(0.5, 0.1);
/// Horizontal swing amplitude
const SWING: f32 = 0.1;
/// Angular frequency of the swing, radians per second
const SWING_RATE: f32 = 2.0;

const WOOD: Color = Color::rgb(0.15, 0.08, 0.02);
const BRASS: Color = Color::rgb(0.8, 0.65, 0.4);

pub struct GrandfatherClockScene {
    list: CommandList,
    hour_hand: PrimitiveKey,
    minute_hand: PrimitiveKey,
    second_hand: PrimitiveKey,
    rod: PrimitiveKey,
    bob: PrimitiveKey,
    /// Seconds of pendulum motion so far
    phase: f32,
}

fn hand(length_fraction: f32, thickness: f32, color: Color) -> RadialLine {
    RadialLine::new(
        CENTER,
        Vec2::new(0.0, length_fraction),
        DIAL_RADIUS,
        0.0,
        color,
        thickness,
    )
}

impl GrandfatherClockScene {
    pub fn new() -> Self {
        let mut list = CommandList::with_capacity(19);

        list.push(Circle::new(CENTER, 0.47, WOOD, 0.05));
        list.push(Circle::new(CENTER, DIAL_RADIUS, Color::rgb(0.9, 0.85, 0.7), 0.015));

        for i in 0..12 {
            let angle = i as f32 / 12.0 * TAU;
            list.push(EquilateralTriangle::new(
                CENTER + Vec2::from_angle(angle) * MARKER_RADIUS,
                0.03,
                angle + TAU / 4.0,
                Color::rgb(0.1, 0.08, 0.05),
            ));
        }

        let hour_hand = list.push(hand(0.45, 0.03, Color::BLACK));
        let minute_hand = list.push(hand(0.6, 0.02, Color::BLACK));
        let second_hand = list.push(hand(0.7, 0.01, Color::rgb(0.7, 0.1, 0.1)));

        let rod = list.push(Capsule::new(PIVOT, BOB_REST, 0.006, BRASS));
        let bob = list.push(Disk::new(BOB_REST, 0.05, Color::rgb(0.9, 0.75, 0.45)));

        Self {
            list,
            hour_hand,
            minute_hand,
            second_hand,
            rod,
            bob,
            phase: 0.0,
        }
    }

    fn set_hand(&mut self, key: PrimitiveKey, clock_turns: f32) {
        if let Some(Primitive::RadialLine(hand)) = self.list.get_mut(key) {
            hand.angle_turns = hand_angle_turns(clock_turns);
        }
    }

    /// Horizontal offset of the bob from rest
    pub fn swing_offset(&self) -> f32 {
        (self.phase * SWING_RATE).sin() * SWING
    }

    fn swing_pendulum(&mut self, dt: Duration) {
        self.phase += dt.as_secs_f32();
        let swing = self.swing_offset();

        let Some(Primitive::Capsule(rod)) = self.list.get_mut(self.rod) else {
            return;
        };
        let pivot = rod.endpoint_a;
        let length = rod.endpoint_b.y - pivot.y;
        let tip = Vec2::new(pivot.x + swing, pivot.y + length);
        rod.endpoint_b = tip;

        if let Some(Primitive::Disk(bob)) = self.list.get_mut(self.bob) {
            bob.center = tip;
        }
    }
}

impl Default for GrandfatherClockScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for GrandfatherClockScene {
    fn name(&self) -> &'static str {
        "grandfather"
    }

    fn command_list(&self) -> &CommandList {
        &self.list
    }

    fn update(&mut self, time: ClockTime, dt: Duration) {
        self.set_hand(self.hour_hand, time.hour_turns());
        self.set_hand(self.minute_hand, time.minute_turns());
        self.set_hand(self.second_hand, time.second_turns());
        self.swing_pendulum(dt);
    }
}
