//! Decorative animated props
//!
//! Five pieces of station equipment, each with its own on/off animation
//! toggle. They share one animation clock and have no gameplay effect.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::FLOOR_Y;

/// Station equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prop {
    SolarArray,
    CargoStack,
    RepairDrone,
    AirlockGate,
    ControlPanel,
}

impl Prop {
    pub const ALL: [Prop; 5] = [
        Prop::SolarArray,
        Prop::CargoStack,
        Prop::RepairDrone,
        Prop::AirlockGate,
        Prop::ControlPanel,
    ];

    fn index(self) -> usize {
        match self {
            Prop::SolarArray => 0,
            Prop::CargoStack => 1,
            Prop::RepairDrone => 2,
            Prop::AirlockGate => 3,
            Prop::ControlPanel => 4,
        }
    }

    /// Where the prop stands in the room
    pub fn anchor(self) -> Vec3 {
        match self {
            Prop::SolarArray => Vec3::new(-6.0, FLOOR_Y + 0.8, -5.0),
            Prop::CargoStack => Vec3::new(6.0, FLOOR_Y + 0.6, -5.0),
            Prop::RepairDrone => Vec3::new(0.0, FLOOR_Y + 1.6, -4.0),
            Prop::AirlockGate => Vec3::new(0.0, FLOOR_Y + 0.9, 6.0),
            Prop::ControlPanel => Vec3::new(-5.0, FLOOR_Y + 0.6, 4.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Prop::SolarArray => "solar array",
            Prop::CargoStack => "cargo stack",
            Prop::RepairDrone => "repair drone",
            Prop::AirlockGate => "airlock gate",
            Prop::ControlPanel => "control panel",
        }
    }
}

/// Animated value for one prop, in the unit the renderer applies it in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropPose {
    /// Panel hinge angle (degrees)
    Hinge(f32),
    /// Vertical offset of the stack
    Bob(f32),
    /// Rotor spin around +Y (degrees)
    Spin(f32),
    /// Door width scale
    DoorScale(f32),
    /// Screen brightness boost
    Pulse(f32),
}

/// Animation toggles and clock for every prop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    enabled: [bool; 5],
    /// Shared animation time (seconds)
    pub anim_time: f32,
}

impl Props {
    pub fn advance(&mut self, dt: f32) {
        self.anim_time += dt;
    }

    pub fn set_enabled(&mut self, prop: Prop, on: bool) {
        self.enabled[prop.index()] = on;
    }

    pub fn is_enabled(&self, prop: Prop) -> bool {
        self.enabled[prop.index()]
    }

    pub fn disable_all(&mut self) {
        self.enabled = [false; 5];
    }

    /// Current pose; disabled props sit at rest
    pub fn pose(&self, prop: Prop) -> PropPose {
        let t = self.anim_time;
        let on = self.is_enabled(prop);
        match prop {
            Prop::SolarArray => PropPose::Hinge(if on { 30.0 * (t * 0.6).sin() } else { 0.0 }),
            Prop::CargoStack => PropPose::Bob(if on { 0.15 * (t * 1.6).sin() } else { 0.0 }),
            Prop::RepairDrone => PropPose::Spin(if on { (t * 90.0) % 360.0 } else { 0.0 }),
            Prop::AirlockGate => {
                PropPose::DoorScale(if on { 1.0 + 0.5 * (t * 2.0).sin() } else { 1.0 })
            }
            Prop::ControlPanel => {
                PropPose::Pulse(if on { 0.5 * (0.5 + 0.5 * (t * 4.0).sin()) } else { 0.0 })
            }
        }
    }
}
