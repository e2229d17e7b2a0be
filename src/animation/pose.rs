use std::f64::consts::PI;

use crate::{
    animation::action::Action,
    foundation::core::{FrameSize, Point},
};

/// One limb as an angle/bend pair, both in degrees.
///
/// Angles are measured from the +x axis with y pointing down, so 90° points
/// straight down; a non-zero bend kinks the limb at its midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limb {
    pub angle_deg: f64,
    pub bend_deg: f64,
}

impl Limb {
    pub const fn new(angle_deg: f64, bend_deg: f64) -> Self {
        Self { angle_deg, bend_deg }
    }
}

/// Decorative overlay tags attached to a pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Sparkle,
    Shockwave,
    Dizzy,
    Angry,
}

/// The geometric description of the figure at one instant.
///
/// Arms hang off `body_top`, legs off `body_bottom`. Recomputed from scratch
/// for every frame; carries no state between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    pub head: Point,
    pub body_top: Point,
    pub body_bottom: Point,
    pub left_arm: Limb,
    pub right_arm: Limb,
    pub left_leg: Limb,
    pub right_leg: Limb,
    pub effects: Vec<Effect>,
}

impl Pose {
    pub fn has_effect(&self, effect: Effect) -> bool {
        self.effects.contains(&effect)
    }
}

/// Stick-figure proportions anchored to a frame canvas.
///
/// `ground` sits 20px above the bottom edge; the head, shoulder and hip
/// anchors hang at fixed offsets above it.
#[derive(Clone, Copy, Debug)]
pub struct Figure {
    center: f64,
    ground: f64,
}

impl Figure {
    pub fn new(size: FrameSize) -> Self {
        Self {
            center: f64::from(size.width) / 2.0,
            ground: f64::from(size.height) - 20.0,
        }
    }

    /// Compute the pose for `frame` of `action`.
    ///
    /// Pure and deterministic: identical inputs always produce identical
    /// records. `total` is the action's full frame count and only shapes the
    /// continuous cycles (idle); the phase-structured actions key off the
    /// absolute frame index.
    pub fn pose(&self, action: Action, frame: u32, total: u32) -> Pose {
        match action {
            Action::Idle => self.idle(frame, total),
            Action::Walk => self.walk(frame),
            Action::Run => self.run(frame),
            Action::AttackSlash => self.attack_slash(frame),
            Action::Hurt => self.hurt(frame),
            Action::Victory => self.victory(frame),
        }
    }

    /// Continuous breathing cycle: the whole body drifts on one sine, the
    /// arms sway on its double frequency.
    fn idle(&self, frame: u32, total: u32) -> Pose {
        let t = f64::from(frame) / f64::from(total.max(1)) * 2.0 * PI;
        let body_offset = t.sin() * 3.0;
        let arm_sway = (t * 2.0).sin() * 5.0;

        Pose {
            head: Point::new(self.center, self.ground - 55.0 + body_offset),
            body_top: Point::new(self.center, self.ground - 45.0 + body_offset),
            body_bottom: Point::new(self.center, self.ground - 20.0 + body_offset),
            left_arm: Limb::new(160.0 + arm_sway, 0.0),
            right_arm: Limb::new(20.0 - arm_sway, 0.0),
            left_leg: Limb::new(170.0, 0.0),
            right_leg: Limb::new(190.0, 0.0),
            effects: Vec::new(),
        }
    }

    /// 8-frame stride: phases 0-3 lead with the right foot, 4-7 mirror with
    /// the left, arms counter-swinging.
    fn walk(&self, frame: u32) -> Pose {
        let phase = f64::from(frame % 8);
        let swing = (phase * PI / 4.0).sin() * 20.0;

        let (leg_front, leg_back, arm_front, arm_back);
        if phase < 4.0 {
            leg_front = Limb::new(160.0 + swing * 0.5, -10.0);
            leg_back = Limb::new(190.0 - swing * 0.5, 5.0);
            arm_front = Limb::new(20.0 + swing, 0.0);
            arm_back = Limb::new(160.0 - swing, 0.0);
        } else {
            leg_front = Limb::new(200.0 - swing * 0.5, 10.0);
            leg_back = Limb::new(170.0 + swing * 0.5, -5.0);
            arm_front = Limb::new(160.0 - swing, 0.0);
            arm_back = Limb::new(20.0 + swing, 0.0);
        }

        let bounce = (phase * PI / 4.0).sin().abs() * 2.0;

        Pose {
            head: Point::new(self.center, self.ground - 55.0 + bounce),
            body_top: Point::new(self.center, self.ground - 45.0 + bounce),
            body_bottom: Point::new(self.center, self.ground - 20.0 + bounce),
            left_arm: arm_back,
            right_arm: arm_front,
            left_leg: leg_back,
            right_leg: leg_front,
            effects: Vec::new(),
        }
    }

    /// 6-frame sprint: long leg strides alternating stance every 3 frames,
    /// big arm swings, and a fixed forward lean of the upper body.
    fn run(&self, frame: u32) -> Pose {
        let phase = f64::from(frame % 6);
        let leg_swing = (phase * PI / 3.0).sin() * 35.0;
        let arm_swing = (phase * PI / 1.5).sin() * 40.0;
        let bounce = (phase * PI / 3.0).sin().abs() * 5.0;

        let (left_leg, right_leg) = if phase < 3.0 {
            (
                Limb::new(140.0 - leg_swing, -15.0),
                Limb::new(210.0 + leg_swing, 15.0),
            )
        } else {
            (
                Limb::new(210.0 + leg_swing, 15.0),
                Limb::new(140.0 - leg_swing, -15.0),
            )
        };

        Pose {
            head: Point::new(self.center + 2.0, self.ground - 55.0 + bounce),
            body_top: Point::new(self.center + 1.0, self.ground - 45.0 + bounce),
            body_bottom: Point::new(self.center, self.ground - 20.0 + bounce),
            left_arm: Limb::new(160.0 + arm_swing, -10.0),
            right_arm: Limb::new(20.0 - arm_swing, 10.0),
            left_leg,
            right_leg,
            effects: Vec::new(),
        }
    }

    /// Three sequential phases keyed off the absolute frame index:
    /// windup [0,3), swing [3,6) with a shockwave on frame 5, recovery [6,8).
    fn attack_slash(&self, frame: u32) -> Pose {
        let (lead_arm, body_twist, effects) = if frame < 3 {
            let t = f64::from(frame) / 3.0;
            (160.0 + t * 20.0, 0.0, Vec::new())
        } else if frame < 6 {
            let t = f64::from(frame - 3) / 3.0;
            let effects = if frame == 5 {
                vec![Effect::Shockwave]
            } else {
                Vec::new()
            };
            (180.0 - t * 100.0, 10.0, effects)
        } else {
            let t = f64::from(frame - 6) / 2.0;
            (80.0 + t * 40.0, 5.0, Vec::new())
        };

        Pose {
            head: Point::new(self.center + body_twist, self.ground - 55.0),
            body_top: Point::new(self.center + body_twist, self.ground - 45.0),
            body_bottom: Point::new(self.center + body_twist, self.ground - 20.0),
            left_arm: Limb::new(lead_arm, -20.0),
            right_arm: Limb::new(20.0, 0.0),
            left_leg: Limb::new(170.0, 0.0),
            right_leg: Limb::new(190.0, 0.0),
            effects,
        }
    }

    /// Hit reaction: initial hit [0,2), peak recoil [2,4) with dizzy eyes,
    /// recovery [4,6). The hips stay planted; only the upper body tilts back.
    fn hurt(&self, frame: u32) -> Pose {
        let (tilt, leg_spread, arm_fly, dizzy) = if frame < 2 {
            (-10.0, 0.0, 30.0, false)
        } else if frame < 4 {
            (-25.0, 15.0, 60.0, true)
        } else {
            (-5.0, 5.0, 15.0, false)
        };

        Pose {
            head: Point::new(self.center, self.ground - 55.0 + tilt),
            body_top: Point::new(self.center, self.ground - 45.0 + tilt),
            body_bottom: Point::new(self.center, self.ground - 20.0),
            left_arm: Limb::new(150.0 + arm_fly, 0.0),
            right_arm: Limb::new(30.0 - arm_fly, 0.0),
            left_leg: Limb::new(170.0 + leg_spread, 0.0),
            right_leg: Limb::new(190.0 - leg_spread, 0.0),
            effects: if dizzy { vec![Effect::Dizzy] } else { Vec::new() },
        }
    }

    /// Jump celebration: launch [0,3), airborne [3,6), landing [6,9),
    /// cheer [9,12). Sparkles while off the ground and through the landing.
    fn victory(&self, frame: u32) -> Pose {
        let (lift, arm_up, leg_bend) = if frame < 3 {
            (f64::from(frame) * 5.0, 140.0 - f64::from(frame) * 20.0, 5.0)
        } else if frame < 6 {
            let t = f64::from(frame - 3);
            (15.0 + (t * PI / 3.0).sin() * 5.0, 80.0, 20.0)
        } else if frame < 9 {
            (15.0 - f64::from(frame - 6) * 3.0, 100.0, 10.0)
        } else {
            let t = f64::from(frame - 9);
            (
                2.0 + (t * PI / 1.5).sin() * 3.0,
                60.0 + (t * PI).sin() * 20.0,
                5.0,
            )
        };

        let sparkle = (3..9).contains(&frame);

        Pose {
            head: Point::new(self.center, self.ground - 55.0 - lift),
            body_top: Point::new(self.center, self.ground - 45.0 - lift),
            body_bottom: Point::new(self.center, self.ground - 20.0 - lift),
            left_arm: Limb::new(arm_up + 20.0, 0.0),
            right_arm: Limb::new(arm_up - 20.0, 0.0),
            left_leg: Limb::new(170.0, leg_bend),
            right_leg: Limb::new(190.0, -leg_bend),
            effects: if sparkle {
                vec![Effect::Sparkle]
            } else {
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
