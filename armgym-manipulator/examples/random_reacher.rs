use anyhow::Result;
use armgym_core::{record::BufferedRecorder, util::eval_with_recorder, Env as _, Policy};
use armgym_manipulator::{ManipulatorAct, ManipulatorEnv, ManipulatorEnvConfig, ManipulatorObs, Reacher};

type Env = ManipulatorEnv<Reacher>;

struct RandomPolicy;

impl Policy<Env> for RandomPolicy {
    fn sample(&mut self, _: &ManipulatorObs) -> ManipulatorAct {
        let x = 2. * fastrand::f32() - 1.;
        let y = 2. * fastrand::f32() - 1.;
        ManipulatorAct::new(vec![x, y])
    }
}

fn run(n_episodes: usize) -> Result<Vec<f32>> {
    let env_config = ManipulatorEnvConfig::default().max_steps(Some(50));
    let mut env = Env::build(&env_config, 0)?;
    let mut policy = RandomPolicy;
    let mut recorder = BufferedRecorder::new();

    let returns = eval_with_recorder(&mut env, &mut policy, n_episodes, &mut recorder)?;
    for record in recorder.iter().filter(|r| r.get_scalar("episode_length").is_ok()) {
        println!(
            "episode {:?}: final potential = {:?}",
            record.get_scalar("episode")?,
            record.get_scalar("potential")?
        );
    }
    Ok(returns)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let returns = run(5)?;
    println!("returns = {:?}", returns);

    Ok(())
}

#[test]
fn test_random_reacher() {
    fastrand::seed(42);

    let returns = run(2).unwrap();
    assert_eq!(returns.len(), 2);
    assert!(returns.iter().all(|r| r.is_finite()));
}
