use crate::domain::{Activation, Member, PersonId};

#[mockall::automock]
#[async_trait::async_trait]
pub trait MemberPort {
    /// Register a new, active member under the next sequential identifier
    async fn register(&self, name: String, membership_type: String) -> Result<Member, Error>;
    /// Whether a `register` call would be rejected for capacity
    async fn is_full(&self) -> Result<bool, Error>;
    async fn find_by_id(&self, member_id: PersonId) -> Result<Option<Member>, Error>;
    /// Change the activity of a member
    ///
    /// The lookup and the change happen atomically.
    async fn set_active(&self, member_id: PersonId, active: bool) -> Result<Activation, Error>;
    /// All members in registration order, inactive ones included
    async fn list_all(&self) -> Result<Vec<Member>, Error>;
    async fn count(&self) -> Result<usize, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registry already holds its maximum number of members
    #[error("Can't register more members.")]
    CapacityExceeded { capacity: usize },

    /// Domain-level error when a member does not exist
    #[error("No such member.")]
    NotFound(PersonId),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as a poisoned lock.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
