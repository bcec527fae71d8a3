//! Railway-style watch face with capsule hands and a counterweighted
//! second hand

use std::time::Duration;

use drawlist_core::{
    turns_to_radians, Capsule, Circle, Color, CommandList, Disk, PolarAngleSpanRadialLineArray,
    Primitive, PrimitiveKey, RadialLine, Vec2,
};

use crate::scene::Scene;
use crate::time::{hand_angle_turns, ClockTime};

const CENTER: Vec2 = Vec2::new(0.5, 0.5);
const RADIUS: f32 = 0.48;

const HOUR_LENGTH: f32 = 0.28;
const MINUTE_LENGTH: f32 = 0.38;
const SECOND_LENGTH: f32 = 0.44;
const SECOND_TAIL: f32 = 0.22;

const DAY_FACE: Color = Color::rgb(0.98, 0.98, 0.98);
const NIGHT_FACE: Color = Color::rgb(0.12, 0.12, 0.16);
const DAY_RING: Color = Color::rgb(0.85, 0.85, 0.9);
const NIGHT_RING: Color = Color::rgb(0.55, 0.55, 0.6);

pub struct SwissWatchScene {
    list: CommandList,
    face: PrimitiveKey,
    ring: PrimitiveKey,
    hour_hand: PrimitiveKey,
    minute_hand: PrimitiveKey,
    second_hand: PrimitiveKey,
    counterweight: PrimitiveKey,
}

fn ticks(inner_fraction: f32, thickness: f32, color: Color, count: i32) -> PolarAngleSpanRadialLineArray {
    let prototype = RadialLine::new(
        CENTER,
        Vec2::new(inner_fraction, 0.98),
        RADIUS,
        0.0,
        color,
        thickness,
    );
    PolarAngleSpanRadialLineArray::new(prototype, 1.0, count)
}

/// Unit vector a hand points along at `clock_turns`
fn hand_direction(clock_turns: f32) -> Vec2 {
    Vec2::from_angle(turns_to_radians(hand_angle_turns(clock_turns)))
}

impl SwissWatchScene {
    pub fn new() -> Self {
        let mut list = CommandList::with_capacity(9);

        let face = list.push(Disk::new(CENTER, RADIUS, DAY_FACE));
        let ring = list.push(Circle::new(CENTER, RADIUS, DAY_RING, 0.03));
        list.push(ticks(0.74, 0.018, Color::BLACK, 12));
        list.push(ticks(0.88, 0.007, Color::BLACK.with_alpha(0.55), 60));

        let hour_hand = list.push(Capsule::new(
            CENTER,
            Vec2::new(0.5, 0.78),
            0.018,
            Color::BLACK,
        ));
        let minute_hand = list.push(Capsule::new(
            CENTER,
            Vec2::new(0.5, 0.88),
            0.012,
            Color::BLACK,
        ));
        let second_hand = list.push(Capsule::new(
            CENTER,
            Vec2::new(0.5, 0.94),
            0.006,
            Color::RED,
        ));
        // Opposite the second hand's tip
        let counterweight = list.push(Disk::new(
            CENTER - (Vec2::new(0.5, 0.94) - CENTER) * 0.4,
            0.02,
            Color::RED,
        ));
        list.push(Disk::new(CENTER, 0.025, Color::rgb(0.05, 0.05, 0.05)));

        Self {
            list,
            face,
            ring,
            hour_hand,
            minute_hand,
            second_hand,
            counterweight,
        }
    }

    fn set_capsule(&mut self, key: PrimitiveKey, a: Vec2, b: Vec2) {
        if let Some(Primitive::Capsule(hand)) = self.list.get_mut(key) {
            hand.endpoint_a = a;
            hand.endpoint_b = b;
        }
    }
}

impl Default for SwissWatchScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SwissWatchScene {
    fn name(&self) -> &'static str {
        "swiss"
    }

    fn command_list(&self) -> &CommandList {
        &self.list
    }

    fn update(&mut self, time: ClockTime, _dt: Duration) {
        let hour = hand_direction(time.hour_turns());
        let minute = hand_direction(time.minute_turns());
        let second = hand_direction(time.second_turns());

        self.set_capsule(self.hour_hand, CENTER, CENTER + hour * HOUR_LENGTH);
        self.set_capsule(self.minute_hand, CENTER, CENTER + minute * MINUTE_LENGTH);

        let tail = CENTER - second * SECOND_TAIL;
        self.set_capsule(self.second_hand, tail, CENTER + second * SECOND_LENGTH);
        if let Some(Primitive::Disk(weight)) = self.list.get_mut(self.counterweight) {
            weight.center = tail;
        }

        let night = time.is_night();
        if let Some(Primitive::Disk(face)) = self.list.get_mut(self.face) {
            face.color = if night { NIGHT_FACE } else { DAY_FACE };
        }
        if let Some(Primitive::Circle(ring)) = self.list.get_mut(self.ring) {
            ring.color = if night { NIGHT_RING } else { DAY_RING };
        }
    }
}
