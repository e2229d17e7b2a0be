use super::*;
use crate::foundation::core::FrameSize;

fn fig() -> Figure {
    Figure::new(FrameSize::default())
}

// 128x128 canvas: center x = 64, ground y = 108, head base y = 53.

#[test]
fn pose_is_deterministic_for_every_action_and_frame() {
    let fig = fig();
    for action in Action::ALL {
        let total = action.config().frames;
        for frame in 0..total {
            assert_eq!(
                fig.pose(action, frame, total),
                fig.pose(action, frame, total),
                "{action:?} frame {frame}"
            );
        }
    }
}

#[test]
fn idle_frame_zero_is_the_neutral_stance() {
    let pose = fig().pose(Action::Idle, 0, 12);
    // sin(0) = 0: no body offset, no arm sway.
    assert_eq!(pose.head.y, 53.0);
    assert_eq!(pose.body_top.y, 63.0);
    assert_eq!(pose.body_bottom.y, 88.0);
    assert_eq!(pose.left_arm.angle_deg, 160.0);
    assert_eq!(pose.right_arm.angle_deg, 20.0);
    assert!(pose.effects.is_empty());
}

#[test]
fn idle_quarter_cycle_peaks_the_body_offset() {
    // frame 3 of 12: t = pi/2, sin(t) = 1 -> body 3px down.
    let pose = fig().pose(Action::Idle, 3, 12);
    assert!((pose.head.y - 56.0).abs() < 1e-9);
    // arm sway runs at double frequency: sin(pi) ~= 0.
    assert!((pose.left_arm.angle_deg - 160.0).abs() < 1e-9);
}

#[test]
fn walk_phase_zero_leads_with_the_right_foot() {
    let pose = fig().pose(Action::Walk, 0, 8);
    // swing = sin(0) = 0: bare branch angles.
    assert_eq!(pose.right_leg.angle_deg, 160.0);
    assert_eq!(pose.right_leg.bend_deg, -10.0);
    assert_eq!(pose.left_leg.angle_deg, 190.0);
    assert_eq!(pose.left_leg.bend_deg, 5.0);
    assert_eq!(pose.right_arm.angle_deg, 20.0);
    assert_eq!(pose.left_arm.angle_deg, 160.0);
    assert!(pose.effects.is_empty());
}

#[test]
fn walk_second_half_mirrors_to_the_left_foot() {
    let pose = fig().pose(Action::Walk, 4, 8);
    // phase 4: swing = sin(pi)*20 ~= 0; left-forward branch base angles.
    assert!((pose.right_leg.angle_deg - 200.0).abs() < 1e-9);
    assert_eq!(pose.right_leg.bend_deg, 10.0);
    assert!((pose.left_leg.angle_deg - 170.0).abs() < 1e-9);
    assert_eq!(pose.left_leg.bend_deg, -5.0);
}

#[test]
fn walk_cycle_wraps_after_eight_frames() {
    let fig = fig();
    assert_eq!(fig.pose(Action::Walk, 0, 8), fig.pose(Action::Walk, 8, 8));
}

#[test]
fn run_keeps_a_fixed_forward_lean() {
    let fig = fig();
    for frame in 0..6 {
        let pose = fig.pose(Action::Run, frame, 6);
        assert_eq!(pose.head.x, 66.0);
        assert_eq!(pose.body_top.x, 65.0);
        assert_eq!(pose.body_bottom.x, 64.0);
        assert!(pose.effects.is_empty());
    }
}

#[test]
fn run_alternates_leg_stance_every_three_frames() {
    let fig = fig();
    let early = fig.pose(Action::Run, 0, 6);
    let late = fig.pose(Action::Run, 3, 6);
    // At phases 0 and 3 the swing term vanishes, leaving swapped base angles.
    assert!((early.left_leg.angle_deg - 140.0).abs() < 1e-9);
    assert!((early.right_leg.angle_deg - 210.0).abs() < 1e-9);
    assert!((late.left_leg.angle_deg - 210.0).abs() < 1e-9);
    assert!((late.right_leg.angle_deg - 140.0).abs() < 1e-9);
}

#[test]
fn attack_fires_the_shockwave_exactly_on_frame_five() {
    let fig = fig();
    for frame in 0..8 {
        let pose = fig.pose(Action::AttackSlash, frame, 8);
        if frame == 5 {
            assert_eq!(pose.effects, vec![Effect::Shockwave]);
        } else {
            assert!(pose.effects.is_empty(), "frame {frame}");
        }
    }
}

#[test]
fn attack_lead_arm_tracks_the_three_phases() {
    let fig = fig();
    // Windup starts at 160, the swing phase starts at 180, recovery at 80.
    assert_eq!(fig.pose(Action::AttackSlash, 0, 8).left_arm.angle_deg, 160.0);
    assert_eq!(fig.pose(Action::AttackSlash, 3, 8).left_arm.angle_deg, 180.0);
    assert_eq!(fig.pose(Action::AttackSlash, 6, 8).left_arm.angle_deg, 80.0);
    assert_eq!(fig.pose(Action::AttackSlash, 7, 8).left_arm.angle_deg, 100.0);
}

#[test]
fn attack_twists_the_body_during_the_swing() {
    let fig = fig();
    assert_eq!(fig.pose(Action::AttackSlash, 1, 8).body_top.x, 64.0);
    assert_eq!(fig.pose(Action::AttackSlash, 4, 8).body_top.x, 74.0);
    assert_eq!(fig.pose(Action::AttackSlash, 7, 8).body_top.x, 69.0);
}

#[test]
fn hurt_peak_recoil_is_dizzy_with_full_tilt() {
    let pose = fig().pose(Action::Hurt, 3, 6);
    assert!(pose.has_effect(Effect::Dizzy));
    // tilt -25 moves head and shoulders up; the hips stay planted.
    assert_eq!(pose.head.y, 28.0);
    assert_eq!(pose.body_top.y, 38.0);
    assert_eq!(pose.body_bottom.y, 88.0);
    assert_eq!(pose.left_leg.angle_deg, 185.0);
    assert_eq!(pose.right_leg.angle_deg, 175.0);
}

#[test]
fn hurt_recovers_without_dizzy_eyes() {
    let fig = fig();
    for frame in [0, 1, 4, 5] {
        let pose = fig.pose(Action::Hurt, frame, 6);
        assert!(!pose.has_effect(Effect::Dizzy), "frame {frame}");
    }
    assert_eq!(fig.pose(Action::Hurt, 0, 6).head.y, 43.0);
    assert_eq!(fig.pose(Action::Hurt, 5, 6).head.y, 48.0);
}

#[test]
fn victory_sparkles_exactly_while_airborne_and_landing() {
    let fig = fig();
    for frame in 0..12 {
        let pose = fig.pose(Action::Victory, frame, 12);
        assert_eq!(
            pose.has_effect(Effect::Sparkle),
            (3..9).contains(&frame),
            "frame {frame}"
        );
    }
}

#[test]
fn victory_launch_raises_the_arms_while_lifting_off() {
    let fig = fig();
    let start = fig.pose(Action::Victory, 0, 12);
    assert_eq!(start.head.y, 53.0);
    assert_eq!(start.left_arm.angle_deg, 160.0);
    assert_eq!(start.right_arm.angle_deg, 120.0);

    let late_launch = fig.pose(Action::Victory, 2, 12);
    assert_eq!(late_launch.head.y, 43.0);
    assert_eq!(late_launch.left_arm.angle_deg, 120.0);

    let airborne = fig.pose(Action::Victory, 3, 12);
    assert_eq!(airborne.left_arm.angle_deg, 100.0);
    assert_eq!(airborne.left_leg.bend_deg, 20.0);
    assert_eq!(airborne.right_leg.bend_deg, -20.0);
}
