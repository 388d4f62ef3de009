use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::Trainer,
    ports::{member::MemberPort, trainer::TrainerPort},
};
use tower::Service;

use super::{Error, GymLogic};

pub struct AddTrainerRequest {
    pub name: String,
    pub specialization: String,
}

impl<M, T> Service<AddTrainerRequest> for GymLogic<M, T>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
{
    type Response = Trainer;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: AddTrainerRequest) -> Self::Future {
        let trainers = self.trainers.clone();
        Box::pin(async move { Ok(trainers.add(req.name, req.specialization).await?) })
    }
}
