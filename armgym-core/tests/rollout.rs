use anyhow::Result;
use armgym_core::{
    record::{BufferedRecorder, NullRecorder, Record},
    util::eval_with_recorder,
    Act, Env, Obs, Policy, Step,
};

#[derive(Clone, Debug)]
struct CountObs(usize);

impl Obs for CountObs {
    fn len(&self) -> usize {
        1
    }
}

#[derive(Clone, Debug)]
struct UnitAct;

impl Act for UnitAct {
    fn len(&self) -> usize {
        1
    }
}

/// Episodes last `config` steps and pay a reward of 1 per step.
struct CountEnv {
    episode_len: usize,
    count: usize,
    last_index: Option<usize>,
}

impl Env for CountEnv {
    type Config = usize;
    type Obs = CountObs;
    type Act = UnitAct;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            episode_len: *config,
            count: 0,
            last_index: None,
        })
    }

    fn step(&mut self, a: &UnitAct) -> Result<(Step<Self>, Record)> {
        self.count += 1;
        let done = (self.count >= self.episode_len) as i8;
        let step = Step::new(
            CountObs(self.count),
            a.clone(),
            vec![1.0],
            vec![0],
            vec![done],
            (),
            None,
        );
        Ok((step, Record::empty()))
    }

    fn reset(&mut self, _is_done: Option<&Vec<i8>>) -> Result<CountObs> {
        self.count = 0;
        Ok(CountObs(0))
    }

    fn step_with_reset(&mut self, a: &UnitAct) -> Result<(Step<Self>, Record)> {
        let (mut step, record) = self.step(a)?;
        if step.is_done() {
            step.init_obs = Some(self.reset(None)?);
        }
        Ok((step, record))
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<CountObs> {
        self.last_index = Some(ix);
        self.reset(None)
    }
}

struct ConstPolicy;

impl Policy<CountEnv> for ConstPolicy {
    fn sample(&mut self, _obs: &CountObs) -> UnitAct {
        UnitAct
    }
}

#[test]
fn test_eval_returns_per_episode() -> Result<()> {
    let mut env = CountEnv::build(&3, 0)?;
    let mut recorder = BufferedRecorder::new();

    let returns = eval_with_recorder(&mut env, &mut ConstPolicy, 2, &mut recorder)?;

    assert_eq!(returns, vec![3.0, 3.0]);
    assert_eq!(recorder.len(), 6);
    assert_eq!(env.last_index, Some(1));

    let last = recorder.iter().last().unwrap();
    assert_eq!(last.get_scalar("episode")?, 1.0);
    assert_eq!(last.get_scalar("step")?, 2.0);
    Ok(())
}

#[test]
fn test_step_with_reset_sets_init_obs() -> Result<()> {
    let mut env = CountEnv::build(&2, 0)?;
    env.reset(None)?;

    let (step, _) = env.step_with_reset(&UnitAct)?;
    assert!(step.init_obs.is_none());

    let (step, _) = env.step_with_reset(&UnitAct)?;
    assert!(step.is_done());
    assert_eq!(step.init_obs.map(|o| o.0), Some(0));

    let returns = eval_with_recorder(&mut env, &mut ConstPolicy, 1, &mut NullRecorder {})?;
    assert_eq!(returns, vec![2.0]);
    Ok(())
}
