use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::Member,
    ports::{member::MemberPort, trainer::TrainerPort},
};
use tower::Service;

use super::{Error, GymLogic};

pub struct ListMembersRequest;

impl<M, T> Service<ListMembersRequest> for GymLogic<M, T>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
{
    type Response = Vec<Member>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: ListMembersRequest) -> Self::Future {
        let members = self.members.clone();
        Box::pin(async move { Ok(members.list_all().await?) })
    }
}
