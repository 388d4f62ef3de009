use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Activation, PersonId},
    ports::{member::MemberPort, trainer::TrainerPort},
};
use tower::Service;

use super::{Error, GymLogic};

pub struct SetActiveRequest {
    pub member_id: PersonId,
    pub active: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SetActiveResponse {
    pub member_id: PersonId,
    pub activation: Activation,
}

impl<M, T> Service<SetActiveRequest> for GymLogic<M, T>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
{
    type Response = SetActiveResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: SetActiveRequest) -> Self::Future {
        let members = self.members.clone();
        Box::pin(async move {
            let activation = members.set_active(req.member_id, req.active).await?;
            Ok(SetActiveResponse {
                member_id: req.member_id,
                activation,
            })
        })
    }
}
