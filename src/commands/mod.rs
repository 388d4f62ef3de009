use std::sync::Arc;

use crate::domain::PersonId;
use crate::ports::{member, trainer};

pub mod add_trainer;
pub mod list_members;
pub mod list_trainers;
pub mod pay;
pub mod register_member;
pub mod registry_status;
pub mod set_active;

pub use add_trainer::AddTrainerRequest;
pub use list_members::ListMembersRequest;
pub use list_trainers::ListTrainersRequest;
pub use pay::{CheckPaymentRequest, PayRequest};
pub use register_member::RegisterMemberRequest;
pub use registry_status::{RegistryStatus, RegistryStatusRequest};
pub use set_active::{SetActiveRequest, SetActiveResponse};

/// Entry point for every gym operation
///
/// Each request type has its own `tower::Service` implementation.
pub struct GymLogic<M, T> {
    members: Arc<M>,
    trainers: Arc<T>,
}

impl<M, T> GymLogic<M, T> {
    pub fn new(members: Arc<M>, trainers: Arc<T>) -> Self {
        Self { members, trainers }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Member(#[from] member::Error),
    #[error("{0}")]
    Trainer(#[from] trainer::Error),

    #[error("No members registered.")]
    NoMembersRegistered,
    #[error("Member not found.")]
    MemberNotFound(PersonId),
    #[error("Member is inactive.")]
    MemberInactive(PersonId),
}

/// Broad classes of failures reported back to the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    CapacityExceeded,
    NotFound,
    /// Domain rule violation, e.g. paying for an inactive member
    InvalidOperation,
    Adapter,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Member(member::Error::CapacityExceeded { .. })
            | Error::Trainer(trainer::Error::CapacityExceeded { .. }) => ErrorKind::CapacityExceeded,
            Error::Member(member::Error::NotFound(_)) => ErrorKind::NotFound,
            Error::Member(member::Error::Adapter(_)) | Error::Trainer(trainer::Error::Adapter(_)) => {
                ErrorKind::Adapter
            }
            Error::NoMembersRegistered | Error::MemberNotFound(_) | Error::MemberInactive(_) => {
                ErrorKind::InvalidOperation
            }
        }
    }
}
