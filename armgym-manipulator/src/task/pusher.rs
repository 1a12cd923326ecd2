use super::{
    arm::{place_on_slides, Arm, ArmPositions},
    base::{resolve_joints, Task, TaskSpec, POTENTIAL_SCALE},
};
use crate::{
    geometry::distance,
    placement::{sample_radial, sample_relative, RadiusBand},
    rng::UniformSource,
    sim::{JointHandle, Simulation},
    TaskError,
};
use log::debug;

/// Episode state of [`Pusher`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PusherState {
    /// Goal placement sampled at reset.
    pub target_position: [f64; 2],

    /// Object placement sampled at reset.
    pub object_position: [f64; 2],

    /// Positions read by the last observation.
    pub observed: ArmPositions,
}

/// A seven-joint arm pushing a sliding object onto a goal.
#[derive(Clone, Debug)]
pub struct Pusher {
    arm: Arm,
    goal_slides: [JointHandle; 2],
    object_slides: [JointHandle; 2],
    state: PusherState,
}

impl Pusher {
    /// Distance of the goal from the scene origin.
    pub const TARGET_BAND: RadiusBand = RadiusBand::new(0.5, 0.8);

    /// Distance of the object from the goal.
    pub const OBJECT_BAND: RadiusBand = RadiusBand::new(0.1, 0.4);

    /// Returns the episode state.
    pub fn state(&self) -> &PusherState {
        &self.state
    }
}

impl Task for Pusher {
    const SPEC: TaskSpec = TaskSpec {
        name: "pusher",
        asset_id: "pusher.xml",
        root_part: "body0",
        action_dim: 7,
        observation_dim: 55,
    };

    fn build<S: Simulation>(sim: &S) -> Result<Self, TaskError> {
        Ok(Self {
            arm: Arm::build(sim, "tips_arm", "object", "goal")?,
            goal_slides: resolve_joints(sim, ["goal_slidex", "goal_slidey"])?,
            object_slides: resolve_joints(sim, ["obj_slidex", "obj_slidey"])?,
            state: PusherState::default(),
        })
    }

    fn reset<S, R>(&mut self, sim: &mut S, rng: &mut R) -> Result<(), TaskError>
    where
        S: Simulation,
        R: UniformSource + ?Sized,
    {
        let target: [f64; 2] = sample_radial(rng, Self::TARGET_BAND)?;
        let object = sample_relative(rng, &target, Self::OBJECT_BAND)?;
        debug!("Pusher goal at {:?}, object at {:?}", target, object);

        place_on_slides(sim, &self.goal_slides, &target);
        place_on_slides(sim, &self.object_slides, &object);
        self.arm.randomize(sim, rng);

        self.state = PusherState {
            target_position: target,
            object_position: object,
            observed: ArmPositions::default(),
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

    /// `-100 (|object - goal| + 0.5 |object - fingertip|)`.
    fn compute_potential(&self) -> f64 {
        let p = &self.state.observed;
        let dist = distance(&p.object, &p.target);
        let near = distance(&p.object, &p.fingertip);
        -POTENTIAL_SCALE * (dist + 0.5 * near)
    }
}
