//! Episodic reinforcement-learning environment over a decision-point game engine.
//!
//! The engine is an external collaborator that only speaks a narrow stepping
//! protocol ([`engine::Engine`]). This crate turns that protocol into the usual
//! `reset → step → terminal` loop: it tracks phases and blind lifecycle,
//! remaps illegal actions, shapes rewards and encodes fixed-shape observations.
#![allow(dead_code)]

pub mod agents;
pub mod engine;
pub mod env;
pub mod episode;
pub mod observe;
pub mod remap;
pub mod reward;
pub mod rollout;
pub mod tracker;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Engine-facing action index. Validity is decided per step by the engine.
pub type Index = usize;
/// Scores as reported by the engine, absolute or blind-relative.
pub type Score = i64;
/// Money as reported by the engine, absolute or blind-relative.
pub type Money = i64;
/// Shaped scalar reward handed to the learner.
pub type Reward = f32;

// ============================================================================
// SPACES
// ============================================================================
/// Size of the discrete action space. Engine indices must stay below this.
pub const ACTION_SPACE: usize = 100;
/// Width of the numeric `game_info` vector.
pub const GAME_INFO: usize = 10;
/// Number of engine phases that can appear in an observation.
pub const PHASES: usize = 6;

// ============================================================================
// REWARD SHAPING
// ============================================================================
/// Paid on every step to favour short episodes.
pub const STEP_REWARD: Reward = -0.01;
/// Paid once per blind cycle when the blind is played to completion.
pub const BLIND_BONUS: Reward = 1000.0;
/// Exchange rate of one unit of money into score points.
pub const MONEY_WEIGHT: Reward = 250.0;
/// Requested action was not legal and was remapped to the first legal one.
pub const REMAP_PENALTY: Reward = -10.0;
/// Requested action was remapped to 0 because the engine offered nothing.
pub const EMPTY_PENALTY: Reward = -0.5;

// ============================================================================
// EPISODES
// ============================================================================
/// Default step budget per episode.
pub const MAX_EPISODE_STEPS: usize = 1000;

// ============================================================================
// OBSERVATION DEFAULTS
// Progression counters the engine does not surface to the adapter yet.
// ============================================================================
pub const DEFAULT_ANTE: f32 = 1.0;
pub const DEFAULT_ROUND: f32 = 1.0;
pub const DEFAULT_HANDS: f32 = 4.0;
pub const DEFAULT_DISCARDS: f32 = 3.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
