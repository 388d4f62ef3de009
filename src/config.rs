use std::sync::Arc;

use clap::Parser;

use crate::adapters::memory::{
    member_registry::DEFAULT_MEMBER_CAPACITY, trainer_registry::DEFAULT_TRAINER_CAPACITY,
    MemoryMemberRegistry, MemoryTrainerRegistry,
};
use crate::commands::GymLogic;

#[derive(Debug, Clone, Parser)]
#[command(name = "gym-management")]
#[command(about = "Menu-driven record manager for gym members and trainers")]
pub struct GymConfig {
    /// Maximum number of members the registry accepts
    #[arg(long, default_value_t = DEFAULT_MEMBER_CAPACITY)]
    pub max_members: usize,

    /// Maximum number of trainers the roster accepts
    #[arg(long, default_value_t = DEFAULT_TRAINER_CAPACITY)]
    pub max_trainers: usize,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            max_members: DEFAULT_MEMBER_CAPACITY,
            max_trainers: DEFAULT_TRAINER_CAPACITY,
            verbose: false,
            json_logs: false,
        }
    }
}

impl GymConfig {
    /// Wire in-memory registries sized from this configuration
    pub fn build_logic(&self) -> GymLogic<MemoryMemberRegistry, MemoryTrainerRegistry> {
        GymLogic::new(
            Arc::new(MemoryMemberRegistry::new(self.max_members)),
            Arc::new(MemoryTrainerRegistry::new(self.max_trainers)),
        )
    }
}
