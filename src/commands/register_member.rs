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

pub struct RegisterMemberRequest {
    pub name: String,
    /// "Basic" or "Premium", anything that is not "Premium" is billed as basic
    pub membership_type: String,
}

impl<M, T> Service<RegisterMemberRequest> for GymLogic<M, T>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
{
    type Response = Member;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: RegisterMemberRequest) -> Self::Future {
        let members = self.members.clone();
        Box::pin(async move {
            let member = members.register(req.name, req.membership_type).await?;
            Ok(member)
        })
    }
}
