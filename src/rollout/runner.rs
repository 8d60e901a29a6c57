use super::*;
use crate::agents::Agent;
use crate::engine::Engine;
use crate::env::BalatroEnv;
use crate::env::Transition;
use crate::env::VecEnv;

/// Play one episode from a fresh reset until it terminates.
/// `seed` is handed to `reset`. `each` sees every transition as it is produced.
pub fn episode<E>(
    env: &mut BalatroEnv<E>,
    seed: Option<u64>,
    agent: &mut dyn Agent,
    mut each: impl FnMut(&Transition),
) -> anyhow::Result<Summary>
where
    E: Engine,
{
    let (mut observation, mut info) = env.reset(seed)?;
    let mut summary = Summary::new(env.seed());
    loop {
        let action = agent.act(&observation, &info);
        let transition = env.step(action)?;
        each(&transition);
        summary.absorb(&transition);
        if transition.terminated || transition.truncated {
            log::debug!("{}", summary);
            return Ok(summary);
        }
        observation = transition.observation;
        info = transition.info;
    }
}

/// Drive a batch with one agent per environment until `episodes` episodes
/// have finished across the whole batch. Summaries come back in completion
/// order.
pub fn batch<E>(
    envs: &mut VecEnv<E>,
    agents: &mut [Box<dyn Agent>],
    episodes: usize,
) -> anyhow::Result<Vec<Summary>>
where
    E: Engine + Send,
{
    anyhow::ensure!(
        agents.len() == envs.len(),
        "expected {} agents, got {}",
        envs.len(),
        agents.len()
    );
    let mut views = envs.reset()?;
    let mut running = envs
        .envs()
        .iter()
        .map(|env| Summary::new(env.seed()))
        .collect::<Vec<_>>();
    let mut done = Vec::with_capacity(episodes);
    while done.len() < episodes {
        let actions = agents
            .iter_mut()
            .zip(views.iter())
            .map(|(agent, (observation, info))| agent.act(observation, info))
            .collect::<Vec<_>>();
        let transitions = envs.step(&actions)?;
        for (i, transition) in transitions.into_iter().enumerate() {
            running[i].absorb(&transition);
            if transition.terminated {
                let next = Summary::new(envs.envs()[i].seed());
                let summary = std::mem::replace(&mut running[i], next);
                log::debug!("{}", summary);
                done.push(summary);
            }
            views[i] = (transition.observation, transition.info);
        }
    }
    done.truncate(episodes);
    Ok(done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::First;
    use crate::agents::Kind;
    use crate::engine::Phase;
    use crate::engine::Sandbox;
    use crate::engine::Script;
    use crate::env::Config;
    use crate::episode::Ending;

    #[test]
    fn first_agent_clears_scripted_blind() {
        let config = Config::default().seeded(3).loud();
        let ref mut env = BalatroEnv::<Script>::new(config).expect("env");
        let mut seen = Vec::new();
        let summary = episode(env, None, &mut First, |t| seen.push(t.reward)).expect("episode");
        assert!(summary.steps == 3);
        assert!(seen.len() == 3);
        assert!(summary.remaps == 0);
        assert!(summary.blinds == 1);
        assert!(summary.phase == Some(Phase::RoundEnd));
        assert!(summary.ending == Some(Ending::Blind));
        assert!((summary.reward - seen.iter().sum::<f32>()).abs() < 1e-3);
    }

    #[test]
    fn sandbox_episodes_always_end() {
        let config = Config::default().seeded(99).loud().budget(200);
        let ref mut env = BalatroEnv::<Sandbox>::new(config).expect("env");
        for kind in [Kind::Fish, Kind::First, Kind::Noise] {
            let mut agent = kind.build(5);
            let summary = episode(env, Some(99), agent.as_mut(), |_| ()).expect("episode");
            assert!(summary.seed == 99);
            assert!(summary.is_done());
            assert!(summary.steps <= 200);
        }
    }

    #[test]
    fn noise_agent_gets_remapped() {
        let config = Config::default().seeded(8).loud().budget(50);
        let ref mut env = BalatroEnv::<Sandbox>::new(config).expect("env");
        let mut agent = Kind::Noise.build(1);
        let summary = episode(env, None, agent.as_mut(), |_| ()).expect("episode");
        assert!(summary.remaps > 0);
    }

    #[test]
    fn batch_collects_requested_episodes() {
        let config = Config::default().seeded(20).loud();
        let ref mut envs = VecEnv::<Script>::new(2, config).expect("vec env");
        let mut agents = (0..2).map(|i| Kind::First.build(i)).collect::<Vec<_>>();
        let summaries = batch(envs, &mut agents, 3).expect("batch");
        assert!(summaries.len() == 3);
        assert!(summaries.iter().all(|s| s.steps == 3));
        assert!(summaries.iter().all(|s| s.ending == Some(Ending::Blind)));
        assert!(summaries[0].seed == 20);
        assert!(summaries[1].seed == 21);
        assert!(summaries[2].seed == 22);
    }

    #[test]
    fn batch_rejects_agent_mismatch() {
        let config = Config::default().seeded(1).loud();
        let ref mut envs = VecEnv::<Script>::new(2, config).expect("vec env");
        let mut agents = vec![Kind::First.build(0)];
        assert!(batch(envs, &mut agents, 1).is_err());
    }
}
