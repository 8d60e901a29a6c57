use super::*;
use crate::Index;
use crate::engine::Engine;
use crate::observe::Observation;
use rand::Rng;
use rayon::prelude::*;

/// A batch of independent environments stepped in parallel.
///
/// Instance `i` starts from seed `base + i`. Each instance is reset as soon
/// as it terminates, moving its seed on by the batch size so no two episodes
/// in the batch ever share a seed. The reset's observation and info replace
/// the terminal ones in the returned [`Transition`].
pub struct VecEnv<E> {
    envs: Vec<BalatroEnv<E>>,
}

impl<E> VecEnv<E>
where
    E: Engine + Send,
{
    pub fn new(n: usize, config: Config) -> anyhow::Result<Self> {
        anyhow::ensure!(n > 0, "need at least one environment");
        let base = config
            .seed
            .unwrap_or_else(|| rand::rng().random_range(0..1u64 << 31));
        (0..n as u64)
            .map(|i| config.clone().seeded(base.wrapping_add(i)))
            .map(BalatroEnv::<E>::new)
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|envs| Self { envs })
    }

    pub fn len(&self) -> usize {
        self.envs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }
    pub fn envs(&self) -> &[BalatroEnv<E>] {
        &self.envs
    }

    pub fn reset(&mut self) -> anyhow::Result<Vec<(Observation, Info)>> {
        self.envs.par_iter_mut().map(|env| env.reset(None)).collect()
    }

    /// One action per environment, in order.
    pub fn step(&mut self, actions: &[Index]) -> anyhow::Result<Vec<Transition>> {
        anyhow::ensure!(
            actions.len() == self.envs.len(),
            "expected {} actions, got {}",
            self.envs.len(),
            actions.len()
        );
        let stride = self.envs.len() as u64;
        self.envs
            .par_iter_mut()
            .zip(actions.par_iter())
            .map(|(env, action)| Self::advance(env, *action, stride))
            .collect()
    }

    pub fn close(&mut self) {
        self.envs.iter_mut().for_each(|env| env.close());
    }

    fn advance(env: &mut BalatroEnv<E>, action: Index, stride: u64) -> anyhow::Result<Transition> {
        let mut transition = env.step(action)?;
        if transition.terminated {
            let seed = env.seed().wrapping_add(stride);
            let (observation, info) = env.reset(Some(seed))?;
            let observation = std::mem::replace(&mut transition.observation, observation);
            let info = std::mem::replace(&mut transition.info, info);
            transition.terminal = Some((observation, info));
        }
        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Phase;
    use crate::engine::Sandbox;
    use crate::engine::Script;

    #[test]
    fn seeds_are_consecutive() {
        let config = Config::default().seeded(40).loud();
        let vec = VecEnv::<Sandbox>::new(3, config).expect("vec env");
        let seeds = vec.envs().iter().map(|e| e.seed()).collect::<Vec<_>>();
        assert!(seeds == vec![40, 41, 42]);
    }

    #[test]
    fn seeds_wrap_at_the_top_of_the_range() {
        let config = Config::default().seeded(u64::MAX - 1).loud();
        let vec = VecEnv::<Sandbox>::new(3, config).expect("vec env");
        let seeds = vec.envs().iter().map(|e| e.seed()).collect::<Vec<_>>();
        assert!(seeds == vec![u64::MAX - 1, u64::MAX, 0]);
    }

    #[test]
    fn rejects_mismatched_actions() {
        let config = Config::default().seeded(1).loud();
        let mut vec = VecEnv::<Script>::new(2, config).expect("vec env");
        vec.reset().expect("reset");
        assert!(vec.step(&[1]).is_err());
    }

    #[test]
    fn instances_step_independently() {
        let config = Config::default().seeded(1).loud();
        let mut vec = VecEnv::<Script>::new(2, config).expect("vec env");
        vec.reset().expect("reset");
        let transitions = vec.step(&[1, 999]).expect("step");
        assert!(!transitions[0].info.action_mapped);
        assert!(transitions[1].info.action_mapped);
        assert!(transitions.iter().all(|t| t.info.phase == Some(Phase::Playing)));
    }

    #[test]
    fn terminated_instances_reset_in_place() {
        let config = Config::default().seeded(10).loud();
        let mut vec = VecEnv::<Script>::new(2, config).expect("vec env");
        vec.reset().expect("reset");
        vec.step(&[1, 1]).expect("select");
        vec.step(&[0, 0]).expect("play");
        let transitions = vec.step(&[0, 0]).expect("finish");
        for t in transitions.iter() {
            assert!(t.terminated);
            assert!(t.last().0.phase == Phase::RoundEnd.index());
            assert!(t.last().1.phase == Some(Phase::RoundEnd));
            assert!(t.observation.phase == Phase::BlindSelect.index());
            assert!(t.info.valid_actions == vec![1, 2]);
        }
        let seeds = vec.envs().iter().map(|e| e.seed()).collect::<Vec<_>>();
        assert!(seeds == vec![12, 13]);
    }
}
