use super::{
    arm::{Arm, ArmPositions, ZERO_OFFSET},
    base::{Task, TaskSpec, POTENTIAL_SCALE},
};
use crate::{
    geometry::{distance, sub, Vec3, IDENTITY_QUAT},
    placement::{sample_radial, RadiusBand},
    rng::UniformSource,
    sim::{ContactEvent, Simulation},
    TaskError,
};
use log::debug;

/// Episode state of [`Thrower`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThrowerState {
    /// Goal placement sampled at reset.
    pub target_position: Vec3,

    /// Ball placement sampled at reset.
    pub object_position: Vec3,

    /// Whether the ball has touched the ground.
    pub object_hit_ground: bool,

    /// Ball position at the first touchdown.
    pub hit_location: Option<Vec3>,

    /// Positions read by the last observation.
    pub observed: ArmPositions,
}

/// A seven-joint arm throwing a free ball onto a goal.
///
/// Ball and goal are free bodies; they are placed with pose resets.
#[derive(Clone, Debug)]
pub struct Thrower {
    arm: Arm,
    state: ThrowerState,
}

impl Thrower {
    /// Distance of the ball from the scene origin.
    pub const OBJECT_BAND: RadiusBand = RadiusBand::new(0.1, 0.8);

    /// Distance of the goal from the scene origin.
    pub const TARGET_BAND: RadiusBand = RadiusBand::new(0.1, 0.8);

    /// Returns the episode state.
    pub fn state(&self) -> &ThrowerState {
        &self.state
    }
}

impl Task for Thrower {
    const SPEC: TaskSpec = TaskSpec {
        name: "thrower",
        asset_id: "thrower.xml",
        root_part: "body0",
        action_dim: 7,
        observation_dim: 48,
    };

    fn build<S: Simulation>(sim: &S) -> Result<Self, TaskError> {
        Ok(Self {
            arm: Arm::build(sim, "r_wrist_roll_link", "ball", "goal")?,
            state: ThrowerState::default(),
        })
    }

    fn reset<S, R>(&mut self, sim: &mut S, rng: &mut R) -> Result<(), TaskError>
    where
        S: Simulation,
        R: UniformSource + ?Sized,
    {
        self.arm.randomize(sim, rng);

        let object: Vec3 = sample_radial(rng, Self::OBJECT_BAND)?;
        sim.reset_part_pose(self.arm.object, sub(&object, &ZERO_OFFSET), IDENTITY_QUAT);

        let target: Vec3 = sample_radial(rng, Self::TARGET_BAND)?;
        sim.reset_part_pose(self.arm.target, sub(&target, &ZERO_OFFSET), IDENTITY_QUAT);
        debug!("Thrower goal at {:?}, ball at {:?}", target, object);

        self.state = ThrowerState {
            target_position: target,
            object_position: object,
            ..ThrowerState::default()
        };
        Ok(())
    }

    fn apply_action<S: Simulation>(&self, sim: &mut S, action: &[f32]) -> Result<(), TaskError> {
        self.arm.apply_action(sim, action)
    }

    fn compute_observation<S: Simulation>(&mut self, sim: &S) -> Result<Vec<f32>, TaskError> {
        let (obs, observed) = self.arm.observe(sim, Self::SPEC.observation_dim)?;
        self.state.observed = observed;
        Ok(obs)
    }

    /// `-100 d`, where `d` is the planar distance from the touchdown point to the
    /// goal once the ball has landed, and the ball-to-goal distance before.
    fn compute_potential(&self) -> f64 {
        let p = &self.state.observed;
        let d = match &self.state.hit_location {
            Some(hit) => distance(&[hit[0], hit[1]], &[p.target[0], p.target[1]]),
            None => distance(&p.object, &p.target),
        };
        -POTENTIAL_SCALE * d
    }

    fn handle_contact(&mut self, event: &ContactEvent) {
        if let ContactEvent::ObjectHitGround { location } = event {
            if !self.state.object_hit_ground {
                debug!("Thrower ball landed at {:?}", location);
                self.state.object_hit_ground = true;
                self.state.hit_location = Some(*location);
            }
        }
    }
}
