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

pub struct ListTrainersRequest;

impl<M, T> Service<ListTrainersRequest> for GymLogic<M, T>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
{
    type Response = Vec<Trainer>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: ListTrainersRequest) -> Self::Future {
        let trainers = self.trainers.clone();
        Box::pin(async move { Ok(trainers.list_all().await?) })
    }
}
