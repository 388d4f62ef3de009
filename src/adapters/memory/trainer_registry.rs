use crate::{
    domain::{PersonId, Trainer, FIRST_TRAINER_ID},
    ports::trainer::{Error, TrainerPort},
};
use std::sync::{Arc, Mutex};

/// Maximum number of trainers when none is configured
pub const DEFAULT_TRAINER_CAPACITY: usize = 50;

#[derive(Clone, Debug)]
pub struct MemoryTrainerRegistry {
    capacity: usize,
    state: Arc<Mutex<TrainerState>>,
}

#[derive(Debug)]
struct TrainerState {
    trainers: Vec<Trainer>,
    next_id: PersonId,
}

impl MemoryTrainerRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Arc::new(Mutex::new(TrainerState {
                trainers: Vec::new(),
                next_id: FIRST_TRAINER_ID,
            })),
        }
    }
}

impl Default for MemoryTrainerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TRAINER_CAPACITY)
    }
}

#[async_trait::async_trait]
impl TrainerPort for MemoryTrainerRegistry {
    async fn add(&self, name: String, specialization: String) -> Result<Trainer, Error> {
        let mut state = self.state.lock()?;
        if state.trainers.len() >= self.capacity {
            tracing::warn!(capacity = self.capacity, "trainer roster is full");
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let trainer = Trainer::new(state.next_id, name, specialization);
        state.next_id += 1;
        state.trainers.push(trainer.clone());
        tracing::info!(trainer_id = trainer.id(), "trainer added");

        Ok(trainer)
    }

    async fn is_full(&self) -> Result<bool, Error> {
        Ok(self.state.lock()?.trainers.len() >= self.capacity)
    }

    async fn list_all(&self) -> Result<Vec<Trainer>, Error> {
        Ok(self.state.lock()?.trainers.clone())
    }
}
