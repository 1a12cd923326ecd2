use anyhow::Result;
use armgym_manipulator::{
    geometry::{distance, norm, sub, IDENTITY_QUAT},
    sim::KinematicSim,
    task::{ARM_JOINT_NAMES, ZERO_OFFSET},
    ContactEvent, Pusher, Reacher, SimError, Simulation, Striker, Task, TaskError, Thrower,
};
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::PI;

const TOL: f64 = 1e-12;

fn load<T: Task>() -> Result<(KinematicSim, T)> {
    let sim = KinematicSim::load(T::SPEC.asset_id, T::SPEC.root_part)?;
    let task = T::build(&sim)?;
    Ok((sim, task))
}

/// Puts every arm joint out of range and in motion, resets, and checks that all of
/// them were resampled at rest.
fn check_arm_reset<T: Task>(seed: u64) -> Result<()> {
    let (mut sim, mut task) = load::<T>()?;
    for name in ARM_JOINT_NAMES {
        sim.reset_joint(sim.joint(name)?, 10.0, 1.0);
    }

    task.reset(&mut sim, &mut StdRng::seed_from_u64(seed))?;

    for name in ARM_JOINT_NAMES {
        let (q, v) = sim.joint_state(sim.joint(name)?);
        assert!(q.abs() <= PI, "{}: {}", name, q);
        assert_eq!(v, 0.0);
    }
    Ok(())
}

#[test]
fn test_arm_joints_are_all_reset() -> Result<()> {
    for seed in 0..20 {
        check_arm_reset::<Pusher>(seed)?;
        check_arm_reset::<Striker>(seed)?;
        check_arm_reset::<Thrower>(seed)?;
    }
    Ok(())
}

#[test]
fn test_pusher_placements() -> Result<()> {
    let (mut sim, mut task) = load::<Pusher>()?;
    for seed in 0..100 {
        task.reset(&mut sim, &mut StdRng::seed_from_u64(seed))?;
        task.compute_observation(&sim)?;
        let state = task.state();

        assert!(Pusher::TARGET_BAND.contains(norm(&state.target_position), TOL));
        assert!(Pusher::OBJECT_BAND
            .contains(distance(&state.object_position, &state.target_position), TOL));

        // Slide coordinates are offset so that the bodies land on the placements.
        for axis in 0..2 {
            assert!((state.observed.target[axis] - state.target_position[axis]).abs() < TOL);
            assert!((state.observed.object[axis] - state.object_position[axis]).abs() < TOL);
        }
        let x = sim.joint_position(sim.joint("goal_slidex")?);
        assert!((x - (state.target_position[0] - ZERO_OFFSET[0])).abs() < TOL);
    }
    Ok(())
}

#[test]
fn test_striker_placements() -> Result<()> {
    let (mut sim, mut task) = load::<Striker>()?;
    for seed in 0..100 {
        task.reset(&mut sim, &mut StdRng::seed_from_u64(seed))?;
        task.compute_observation(&sim)?;
        let state = task.state();

        assert!(Striker::OBJECT_BAND.contains(norm(&state.object_position), TOL));
        assert_eq!(state.target_position[2], Striker::TARGET_HEIGHT);
        assert!(state.target_position[..2]
            .iter()
            .all(|x| x.abs() <= Striker::TARGET_LIMIT));
        for axis in 0..2 {
            assert!((state.observed.target[axis] - state.target_position[axis]).abs() < TOL);
            assert!((state.observed.object[axis] - state.object_position[axis]).abs() < TOL);
        }
        assert!(!state.struck);
        assert_eq!(state.strike_position, None);
        assert!(state.min_strike_distance.is_finite());
    }
    Ok(())
}

#[test]
fn test_thrower_placements() -> Result<()> {
    let (mut sim, mut task) = load::<Thrower>()?;
    let ball = sim.part("ball")?;
    let goal = sim.part("goal")?;
    for seed in 0..100 {
        task.reset(&mut sim, &mut StdRng::seed_from_u64(seed))?;
        let state = task.state();

        assert!(Thrower::OBJECT_BAND.contains(norm(&state.object_position), TOL));
        assert!(Thrower::TARGET_BAND.contains(norm(&state.target_position), TOL));
        assert_eq!(
            sim.part_position(ball),
            sub(&state.object_position, &ZERO_OFFSET)
        );
        assert_eq!(
            sim.part_position(goal),
            sub(&state.target_position, &ZERO_OFFSET)
        );
        assert_eq!(sim.part_orientation(ball), IDENTITY_QUAT);
        assert!(!state.object_hit_ground);
    }
    Ok(())
}

#[test]
fn test_observation_dims() -> Result<()> {
    fn check<T: Task>() -> Result<()> {
        let (mut sim, mut task) = load::<T>()?;
        task.reset(&mut sim, &mut StdRng::seed_from_u64(1))?;
        let obs = task.compute_observation(&sim)?;
        assert_eq!(obs.len(), T::SPEC.observation_dim, "{}", T::SPEC.name);
        Ok(())
    }
    check::<Reacher>()?;
    check::<Pusher>()?;
    check::<Striker>()?;
    check::<Thrower>()
}

#[test]
fn test_arm_observation_layout() -> Result<()> {
    let (mut sim, mut task) = load::<Pusher>()?;
    task.reset(&mut sim, &mut StdRng::seed_from_u64(2))?;
    let obs = task.compute_observation(&sim)?;

    for (i, name) in ARM_JOINT_NAMES.iter().enumerate() {
        let (q, v) = sim.joint_state(sim.joint(name)?);
        assert_eq!(obs[i], q as f32);
        assert_eq!(obs[7 + i], v as f32);
    }
    let tip = sim.part_position(sim.part("tips_arm")?);
    let object = sim.part_position(sim.part("object")?);
    let goal = sim.part_position(sim.part("goal")?);
    let expected: Vec<f32> = tip.iter().chain(&object).chain(&goal).map(|&x| x as f32).collect();
    assert_eq!(&obs[14..23], &expected[..]);
    assert!(obs[23..].iter().all(|&x| x == 0.0));
    Ok(())
}

#[test]
fn test_reacher_scenario() -> Result<()> {
    let (mut sim, mut task) = load::<Reacher>()?;
    task.reset(&mut sim, &mut StdRng::seed_from_u64(0))?;

    let j0 = sim.joint("joint0")?;
    let j1 = sim.joint("joint1")?;
    task.apply_action(&mut sim, &[1.0, 1.0])?;
    assert_eq!(sim.motor_torque(j0), 0.05);
    assert_eq!(sim.motor_torque(j1), 0.05);

    // Stretched arm puts the fingertip at x = 0.21; the target sits 0.3 behind it.
    sim.reset_joint(j0, 0.0, 0.0);
    sim.reset_joint(j1, 0.0, 0.0);
    sim.reset_joint(sim.joint("target_x")?, -0.09, 0.0);
    sim.reset_joint(sim.joint("target_y")?, 0.0, 0.0);
    task.compute_observation(&sim)?;

    assert!((norm(&task.state().to_target) - 0.3).abs() < 1e-9);
    assert!((task.compute_potential() + 30.0).abs() < 1e-9);
    Ok(())
}

fn set_slides(sim: &mut KinematicSim, names: [&str; 2], values: [f64; 2]) -> Result<()> {
    for (name, x) in names.into_iter().zip(values) {
        sim.reset_joint(sim.joint(name)?, x, 0.0);
    }
    Ok(())
}

/// Object at (0.32, -0.6, -0.275), right below the fixed tip at (0.32, -0.6, -0.1);
/// goal at (0.32, -0.3, -0.323).
fn place_scene(sim: &mut KinematicSim) -> Result<(f64, f64)> {
    set_slides(sim, ["obj_slidex", "obj_slidey"], [-0.13, -1.15])?;
    set_slides(sim, ["goal_slidex", "goal_slidey"], [-0.13, -0.85])?;
    let dist = (0.3f64.powi(2) + 0.048f64.powi(2)).sqrt();
    let near = 0.175;
    Ok((dist, near))
}

#[test]
fn test_pusher_potential_value() -> Result<()> {
    let (mut sim, mut task) = load::<Pusher>()?;
    let (dist, near) = place_scene(&mut sim)?;
    task.compute_observation(&sim)?;

    let expected = -100.0 * (dist + 0.5 * near);
    assert!((task.compute_potential() - expected).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_striker_potential_follows_strike() -> Result<()> {
    let (mut sim, mut task) = load::<Striker>()?;
    let (dist, near) = place_scene(&mut sim)?;
    task.compute_observation(&sim)?;

    let expected = -100.0 * (3.0 * dist + 0.5 * near);
    assert!((task.compute_potential() - expected).abs() < 1e-9);
    assert!((task.state().min_strike_distance - dist).abs() < 1e-12);

    // Once struck, the near term measures from the strike position, 0.4 above the object.
    task.handle_contact(&ContactEvent::ObjectStruck {
        position: [0.32, -0.6, 0.125],
    });
    let expected = -100.0 * (3.0 * dist + 0.5 * 0.4);
    assert!((task.compute_potential() - expected).abs() < 1e-9);

    task.handle_contact(&ContactEvent::ObjectStruck {
        position: [0.0, 0.0, 0.0],
    });
    assert!((task.compute_potential() - expected).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_action_clipping_is_idempotent() -> Result<()> {
    let (mut sim, task) = load::<Pusher>()?;
    let joints: Vec<_> = ARM_JOINT_NAMES
        .iter()
        .map(|n| sim.joint(n))
        .collect::<Result<_, SimError>>()?;
    let action = [3.0, -2.0, 0.5, -0.5, 1.0, 0.0, -1.0];

    task.apply_action(&mut sim, &action)?;
    let first: Vec<f64> = joints.iter().map(|&j| sim.motor_torque(j)).collect();
    task.apply_action(&mut sim, &action)?;
    let second: Vec<f64> = joints.iter().map(|&j| sim.motor_torque(j)).collect();

    assert_eq!(first, second);
    assert_eq!(first[0], 0.05);
    assert_eq!(first[1], -0.05);
    assert_eq!(first[2], 0.025);
    Ok(())
}

#[test]
fn test_potential_is_pure() -> Result<()> {
    fn check<T: Task>() -> Result<()> {
        let (mut sim, mut task) = load::<T>()?;
        task.reset(&mut sim, &mut StdRng::seed_from_u64(3))?;
        task.compute_observation(&sim)?;
        let p1 = task.compute_potential();
        let p2 = task.compute_potential();
        assert_eq!(p1.to_bits(), p2.to_bits());
        assert!(p1 <= 0.0);
        Ok(())
    }
    check::<Reacher>()?;
    check::<Pusher>()?;
    check::<Striker>()?;
    check::<Thrower>()
}

#[test]
fn test_non_finite_action_commands_nothing() -> Result<()> {
    let (mut sim, task) = load::<Reacher>()?;
    let j0 = sim.joint("joint0")?;
    let j1 = sim.joint("joint1")?;

    let err = task.apply_action(&mut sim, &[0.5, f32::NAN]).unwrap_err();
    assert!(matches!(err, TaskError::NonFiniteAction { index: 1, .. }));
    let err = task
        .apply_action(&mut sim, &[f32::INFINITY, 0.0])
        .unwrap_err();
    assert!(matches!(err, TaskError::NonFiniteAction { index: 0, .. }));

    assert_eq!(sim.motor_torque(j0), 0.0);
    assert_eq!(sim.motor_torque(j1), 0.0);
    Ok(())
}

#[test]
fn test_action_dim_is_checked() -> Result<()> {
    let (mut sim, task) = load::<Thrower>()?;
    assert_eq!(
        task.apply_action(&mut sim, &[0.0; 2]),
        Err(TaskError::ActionDim {
            expected: 7,
            actual: 2
        })
    );
    Ok(())
}

#[test]
fn test_missing_names_fail_at_build() -> Result<()> {
    let sim = KinematicSim::load("reacher.xml", "body0")?;
    assert_eq!(
        sim.joint("joint7"),
        Err(SimError::MissingJoint("joint7".to_string()))
    );
    assert_eq!(
        Pusher::build(&sim).err(),
        Some(TaskError::Sim(SimError::MissingJoint(
            "r_shoulder_pan_joint".to_string()
        )))
    );

    let sim = KinematicSim::load("pusher.xml", "body0")?;
    assert_eq!(
        Striker::build(&sim).err(),
        Some(TaskError::Sim(SimError::MissingPart("coaster".to_string())))
    );
    Ok(())
}

#[test]
fn test_same_seed_same_scene() -> Result<()> {
    fn run<T: Task>(seed: u64) -> Result<Vec<f32>> {
        let (mut sim, mut task) = load::<T>()?;
        task.reset(&mut sim, &mut StdRng::seed_from_u64(seed))?;
        Ok(task.compute_observation(&sim)?)
    }
    assert_eq!(run::<Reacher>(11)?, run::<Reacher>(11)?);
    assert_eq!(run::<Striker>(11)?, run::<Striker>(11)?);
    assert_ne!(run::<Thrower>(11)?, run::<Thrower>(12)?);
    Ok(())
}
