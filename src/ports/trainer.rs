use crate::domain::Trainer;

#[mockall::automock]
#[async_trait::async_trait]
pub trait TrainerPort {
    async fn add(&self, name: String, specialization: String) -> Result<Trainer, Error>;
    async fn is_full(&self) -> Result<bool, Error>;
    async fn list_all(&self) -> Result<Vec<Trainer>, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The roster already holds its maximum number of trainers
    #[error("Can't add more trainers.")]
    CapacityExceeded { capacity: usize },

    /// Concrete adapter errors
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
