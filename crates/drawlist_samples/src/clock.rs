//! Minimal analog clock: ring, tick dials and three radial hands

use std::time::Duration;

use drawlist_core::{
    Circle, Color, CommandList, PolarAngleSpanRadialLineArray, Primitive, PrimitiveKey,
    RadialLine, Vec2,
};

use crate::scene::Scene;
use crate::time::{hand_angle_turns, ClockTime};

const CENTER: Vec2 = Vec2::new(0.5, 0.5);
const RADIUS: f32 = 0.48;

const DAY_FACE: Color = Color::WHITE;
const NIGHT_FACE: Color = Color::rgb(0.1, 0.1, 0.1);

/// Analog clock drawn with radial lines
pub struct ClockScene {
    list: CommandList,
    face: PrimitiveKey,
    hour_hand: PrimitiveKey,
    minute_hand: PrimitiveKey,
    second_hand: PrimitiveKey,
}

fn ticks(inner_fraction: f32, thickness: f32, color: Color, count: i32) -> PolarAngleSpanRadialLineArray {
    let prototype = RadialLine::new(
        CENTER,
        Vec2::new(inner_fraction, 1.0),
        RADIUS,
        0.0,
        color,
        thickness,
    );
    PolarAngleSpanRadialLineArray::new(prototype, 1.0, count)
}

fn hand(length_fraction: f32, thickness: f32, color: Color) -> RadialLine {
    RadialLine::new(
        CENTER,
        Vec2::new(0.0, length_fraction),
        RADIUS,
        0.0,
        color,
        thickness,
    )
}

impl ClockScene {
    pub fn new() -> Self {
        let mut list = CommandList::with_capacity(6);

        let face = list.push(Circle::new(CENTER, RADIUS, DAY_FACE, 0.015));
        list.push(ticks(0.8, 0.015, Color::BLACK, 12));
        list.push(ticks(0.9, 0.006, Color::BLACK.with_alpha(0.5), 60));
        let hour_hand = list.push(hand(0.45, 0.03, Color::BLACK));
        let minute_hand = list.push(hand(0.6, 0.02, Color::BLACK));
        let second_hand = list.push(hand(0.7, 0.01, Color::RED));

        Self {
            list,
            face,
            hour_hand,
            minute_hand,
            second_hand,
        }
    }

    fn set_hand(&mut self, key: PrimitiveKey, clock_turns: f32) {
        if let Some(Primitive::RadialLine(hand)) = self.list.get_mut(key) {
            hand.angle_turns = hand_angle_turns(clock_turns);
        }
    }
}

impl Default for ClockScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for ClockScene {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn command_list(&self) -> &CommandList {
        &self.list
    }

    fn update(&mut self, time: ClockTime, _dt: Duration) {
        self.set_hand(self.hour_hand, time.hour_turns());
        self.set_hand(self.minute_hand, time.minute_turns());
        self.set_hand(self.second_hand, time.second_turns());

        if let Some(Primitive::Circle(face)) = self.list.get_mut(self.face) {
            face.color = if time.is_night() { NIGHT_FACE } else { DAY_FACE };
        }
    }
}
