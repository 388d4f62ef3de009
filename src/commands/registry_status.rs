use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::ports::{member::MemberPort, trainer::TrainerPort};
use tower::Service;

use super::{Error, GymLogic};

/// Snapshot of both registries, used to reject an operation before asking for its input
pub struct RegistryStatusRequest;

#[derive(Debug, PartialEq, Eq)]
pub struct RegistryStatus {
    pub member_count: usize,
    pub members_full: bool,
    pub trainers_full: bool,
}

impl<M, T> Service<RegistryStatusRequest> for GymLogic<M, T>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
{
    type Response = RegistryStatus;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: RegistryStatusRequest) -> Self::Future {
        let members = self.members.clone();
        let trainers = self.trainers.clone();
        Box::pin(async move {
            Ok(RegistryStatus {
                member_count: members.count().await?,
                members_full: members.is_full().await?,
                trainers_full: trainers.is_full().await?,
            })
        })
    }
}
