//! Environment driving a [`Task`] on a [`Simulation`].
use crate::{
    sim::{KinematicSim, Simulation},
    task::Task,
    ManipulatorAct, ManipulatorEnvConfig, ManipulatorObs,
};
use anyhow::{ensure, Result};
use armgym_core::{
    record::{
        Record,
        RecordValue::{Array1, Scalar},
    },
    Env, Info, Step,
};
use log::{info, trace};
use rand::{rngs::StdRng, SeedableRng};

/// Information given at every step of the interaction with the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct ManipulatorInfo {
    /// Potential after the step.
    pub potential: f64,
}

impl Info for ManipulatorInfo {}

/// A manipulation task wrapped as an [`Env`].
///
/// The reward of a step is the change of the task's potential, minus
/// `ctrl_cost_weight` times the squared norm of the clipped action. The task never
/// terminates an episode; it is truncated after `max_steps` steps if configured.
///
/// The record of a step holds `reward`, `potential` and the observation as `obs`,
/// plus `episode_length` on the last step of an episode.
pub struct ManipulatorEnv<T: Task, S: Simulation = KinematicSim> {
    config: ManipulatorEnvConfig,
    sim: S,
    task: T,
    rng: StdRng,
    count_steps: usize,
    potential: f64,
}

impl<T: Task, S: Simulation> ManipulatorEnv<T, S> {
    /// Returns the task.
    pub fn task(&self) -> &T {
        &self.task
    }

    /// Returns the simulation.
    pub fn sim(&self) -> &S {
        &self.sim
    }

    /// Returns the simulation mutably, e.g. to inject engine events.
    pub fn sim_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    /// Potential computed by the last reset or step.
    pub fn potential(&self) -> f64 {
        self.potential
    }

    fn observe(&mut self) -> Result<ManipulatorObs> {
        let obs = self.task.compute_observation(&self.sim)?;
        Ok(obs.into())
    }

    fn ctrl_cost(&self, a: &[f32]) -> f64 {
        let sq: f64 = a
            .iter()
            .map(|x| (x.clamp(-1.0, 1.0) as f64).powi(2))
            .sum();
        self.config.ctrl_cost_weight * sq
    }
}

impl<T: Task, S: Simulation> Env for ManipulatorEnv<T, S> {
    type Config = ManipulatorEnvConfig;
    type Obs = ManipulatorObs;
    type Act = ManipulatorAct;
    type Info = ManipulatorInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        ensure!(config.frame_skip >= 1, "frame_skip must be at least 1");

        let asset_id = config.asset_id.as_deref().unwrap_or(T::SPEC.asset_id);
        let sim = S::load(asset_id, T::SPEC.root_part)?;
        let task = T::build(&sim)?;
        info!("Built {} environment on {}", T::SPEC.name, asset_id);

        Ok(Self {
            config: config.clone(),
            sim,
            task,
            rng: StdRng::seed_from_u64(seed as u64),
            count_steps: 0,
            potential: 0.0,
        })
    }

    /// Resets the environment and returns an observation.
    ///
    /// If `is_done` is given and its element is 0, the episode continues and the
    /// current observation is returned.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<ManipulatorObs> {
        trace!("ManipulatorEnv::reset()");

        let reset = match is_done {
            None => true,
            Some(v) => {
                ensure!(v.len() == 1, "is_done must have one entry, got {}", v.len());
                v[0] != 0
            }
        };
        if !reset {
            return self.observe();
        }

        self.task.reset(&mut self.sim, &mut self.rng)?;
        // Events of the previous episode must not leak into this one.
        self.sim.drain_contacts();
        self.count_steps = 0;

        let obs = self.observe()?;
        self.potential = self.task.compute_potential();
        Ok(obs)
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<ManipulatorObs> {
        self.rng = StdRng::seed_from_u64(ix as u64);
        self.reset(None)
    }

    /// Runs `frame_skip` engine steps with the given action.
    ///
    /// Fails without stepping if the action is rejected by the task.
    fn step(&mut self, a: &ManipulatorAct) -> Result<(Step<Self>, Record)> {
        trace!("ManipulatorEnv::step()");

        let act = a.act.to_vec();
        self.task.apply_action(&mut self.sim, &act)?;
        for _ in 0..self.config.frame_skip {
            self.sim.step()?;
            for event in self.sim.drain_contacts() {
                self.task.handle_contact(&event);
            }
        }

        let obs = self.observe()?;
        let potential_old = self.potential;
        self.potential = self.task.compute_potential();
        let reward = (self.potential - potential_old) - self.ctrl_cost(&act);

        self.count_steps += 1;
        let is_truncated = match self.config.max_steps {
            Some(max_steps) => (self.count_steps >= max_steps) as i8,
            None => 0,
        };

        let mut record = Record::empty();
        record.insert("reward", Scalar(reward as f32));
        record.insert("potential", Scalar(self.potential as f32));
        record.insert("obs", Array1(obs.obs.to_vec()));
        if is_truncated == 1 {
            info!(
                "{} episode finished after {} steps",
                T::SPEC.name,
                self.count_steps
            );
            record.insert("episode_length", Scalar(self.count_steps as f32));
        }

        let info = ManipulatorInfo {
            potential: self.potential,
        };
        let step = Step::new(
            obs,
            a.clone(),
            vec![reward as f32],
            vec![0],
            vec![is_truncated],
            info,
            None,
        );
        Ok((step, record))
    }

    fn step_with_reset(&mut self, a: &ManipulatorAct) -> Result<(Step<Self>, Record)> {
        let (mut step, record) = self.step(a)?;
        if step.is_done() {
            step.init_obs = Some(self.reset(None)?);
        }
        Ok((step, record))
    }
}
