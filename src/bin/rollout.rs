//! Rollout Binary
//!
//! Plays episodes against the sandbox engine with a built-in agent and logs
//! one summary per episode. `--json` streams every transition to stdout.

use balatro_gym::agents::Kind;
use balatro_gym::engine::Deck;
use balatro_gym::engine::Sandbox;
use balatro_gym::engine::Stake;
use balatro_gym::env::BalatroEnv;
use balatro_gym::env::Config;
use balatro_gym::env::VecEnv;
use balatro_gym::rollout;
use balatro_gym::rollout::Summary;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Roll out agents in the Balatro environment", long_about = None)]
struct Args {
    #[arg(long, help = "JSON config file; flags below override it")]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    deck: Option<Deck>,
    #[arg(long)]
    stake: Option<Stake>,
    #[arg(long = "max-steps")]
    max_steps: Option<usize>,
    #[arg(long, default_value_t = 1)]
    episodes: usize,
    #[arg(long, default_value_t = 1, help = "environments stepped in parallel")]
    envs: usize,
    #[arg(long, default_value = "fish", help = "fish | first | noise")]
    agent: Kind,
    #[arg(long, help = "let engine output through")]
    loud: bool,
    #[arg(long, help = "print every transition as a JSON line")]
    json: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };
        config.seed = self.seed.or(config.seed);
        config.deck = self.deck.unwrap_or(config.deck);
        config.stake = self.stake.unwrap_or(config.stake);
        config.max_episode_steps = self.max_steps.unwrap_or(config.max_episode_steps);
        config.quiet = config.quiet && !self.loud;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    balatro_gym::log();
    let args = Args::parse();
    let config = args.config()?;
    log::info!(
        "rolling out {} episode(s) of {:?} on {} / {} across {} env(s)",
        args.episodes,
        args.agent,
        config.deck,
        config.stake,
        args.envs
    );
    let summaries = match args.envs {
        0 | 1 => sequential(&args, config)?,
        n => parallel(&args, config, n)?,
    };
    summaries.iter().for_each(|s| log::info!("{}", s));
    let n = summaries.len().max(1) as f32;
    log::info!(
        "mean reward {:.2} mean steps {:.1} blinds cleared {}",
        summaries.iter().map(|s| s.reward).sum::<f32>() / n,
        summaries.iter().map(|s| s.steps).sum::<usize>() as f32 / n,
        summaries.iter().map(|s| s.blinds).sum::<usize>()
    );
    Ok(())
}

fn sequential(args: &Args, config: Config) -> anyhow::Result<Vec<Summary>> {
    let ref mut env = BalatroEnv::<Sandbox>::new(config)?;
    let mut agent = args.agent.build(env.seed());
    let base = env.seed();
    let mut summaries = Vec::with_capacity(args.episodes);
    for i in 0..args.episodes as u64 {
        let seed = base.wrapping_add(i);
        let summary = rollout::episode(env, Some(seed), agent.as_mut(), |t| {
            if args.json {
                match serde_json::to_string(t) {
                    Ok(line) => println!("{}", line),
                    Err(e) => log::warn!("skipping transition: {}", e),
                }
            }
        })?;
        summaries.push(summary);
    }
    Ok(summaries)
}

fn parallel(args: &Args, config: Config, n: usize) -> anyhow::Result<Vec<Summary>> {
    if args.json {
        log::warn!("--json is ignored with more than one environment");
    }
    let ref mut envs = VecEnv::<Sandbox>::new(n, config)?;
    let mut agents = envs
        .envs()
        .iter()
        .map(|env| args.agent.build(env.seed()))
        .collect::<Vec<_>>();
    rollout::batch(envs, &mut agents, args.episodes)
}
