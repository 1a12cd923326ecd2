use super::{
    arm::{place_on_slides, Arm, ArmPositions},
    base::{resolve_joints, Task, TaskSpec, POTENTIAL_SCALE},
};
use crate::{
    geometry::{distance, Vec3},
    placement::{sample_box, sample_radial, RadiusBand},
    rng::UniformSource,
    sim::{ContactEvent, JointHandle, Simulation},
    TaskError,
};
use log::debug;

/// Episode state of [`Striker`].
#[derive(Clone, Debug, PartialEq)]
pub struct StrikerState {
    /// Coaster placement sampled at reset.
    pub target_position: Vec3,

    /// Object placement sampled at reset.
    pub object_position: Vec3,

    /// Smallest object-to-coaster distance observed in the episode.
    pub min_strike_distance: f64,

    /// Whether the object has been struck.
    pub struck: bool,

    /// End effector position at the first strike.
    pub strike_position: Option<Vec3>,

    /// Positions read by the last observation.
    pub observed: ArmPositions,
}

impl Default for StrikerState {
    fn default() -> Self {
        Self {
            target_position: [0.0; 3],
            object_position: [0.0; 3],
            min_strike_distance: f64::INFINITY,
            struck: false,
            strike_position: None,
            observed: ArmPositions::default(),
        }
    }
}

/// A seven-joint arm striking a sliding object towards a coaster.
#[derive(Clone, Debug)]
pub struct Striker {
    arm: Arm,
    goal_slides: [JointHandle; 2],
    object_slides: [JointHandle; 2],
    state: StrikerState,
}

impl Striker {
    /// Distance of the object from the scene origin.
    pub const OBJECT_BAND: RadiusBand = RadiusBand::new(0.1, 0.8);

    /// Planar coaster coordinates are reset uniformly in `[-TARGET_LIMIT, TARGET_LIMIT]`.
    pub const TARGET_LIMIT: f64 = 1.0;

    /// Height of the coaster placement.
    pub const TARGET_HEIGHT: f64 = -0.2;

    /// Returns the episode state.
    pub fn state(&self) -> &StrikerState {
        &self.state
    }
}

impl Task for Striker {
    const SPEC: TaskSpec = TaskSpec {
        name: "striker",
        asset_id: "striker.xml",
        root_part: "body0",
        action_dim: 7,
        observation_dim: 56,
    };

    fn build<S: Simulation>(sim: &S) -> Result<Self, TaskError> {
        Ok(Self {
            arm: Arm::build(sim, "tips_arm", "object", "coaster")?,
            goal_slides: resolve_joints(sim, ["goal_slidex", "goal_slidey"])?,
            object_slides: resolve_joints(sim, ["obj_slidex", "obj_slidey"])?,
            state: StrikerState::default(),
        })
    }

    fn reset<S, R>(&mut self, sim: &mut S, rng: &mut R) -> Result<(), TaskError>
    where
        S: Simulation,
        R: UniformSource + ?Sized,
    {
        self.arm.randomize(sim, rng);

        let object: Vec3 = sample_radial(rng, Self::OBJECT_BAND)?;
        place_on_slides(sim, &self.object_slides, &object);

        let [x, y]: [f64; 2] = sample_box(rng, Self::TARGET_LIMIT);
        let target = [x, y, Self::TARGET_HEIGHT];
        place_on_slides(sim, &self.goal_slides, &target);
        debug!("Striker coaster at {:?}, object at {:?}", target, object);

        self.state = StrikerState {
            target_position: target,
            object_position: object,
            ..StrikerState::default()
        };
        Ok(())
    }

    fn apply_action<S: Simulation>(&self, sim: &mut S, action: &[f32]) -> Result<(), TaskError> {
        self.arm.apply_action(sim, action)
    }

    fn compute_observation<S: Simulation>(&mut self, sim: &S) -> Result<Vec<f32>, TaskError> {
        let (obs, observed) = self.arm.observe(sim, Self::SPEC.observation_dim)?;
        let d = distance(&observed.object, &observed.target);
        self.state.min_strike_distance = self.state.min_strike_distance.min(d);
        self.state.observed = observed;
        Ok(obs)
    }

    /// `-100 (3 |object - coaster| + 0.5 near)`, where `near` measures from the
    /// strike position once struck and from the fingertip before.
    fn compute_potential(&self) -> f64 {
        let p = &self.state.observed;
        let dist = distance(&p.object, &p.target);
        let near = match &self.state.strike_position {
            Some(s) => distance(s, &p.object),
            None => distance(&p.object, &p.fingertip),
        };
        -POTENTIAL_SCALE * (3.0 * dist + 0.5 * near)
    }

    fn handle_contact(&mut self, event: &ContactEvent) {
        if let ContactEvent::ObjectStruck { position } = event {
            if !self.state.struck {
                debug!("Striker struck the object at {:?}", position);
                self.state.struck = true;
                self.state.strike_position = Some(*position);
            }
        }
    }
}
