use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Member, PaymentRecord, PersonId},
    ports::{member::MemberPort, trainer::TrainerPort},
};
use tower::Service;

use super::{Error, GymLogic};

/// Check that a member may pay, without paying
///
/// Returns the member with the fee it would be charged.
pub struct CheckPaymentRequest {
    pub member_id: PersonId,
}

pub struct PayRequest {
    pub member_id: PersonId,
    /// Payment method, e.g. "Cash", "UPI" or "Card"
    pub method: String,
}

impl<M, T> Service<PayRequest> for GymLogic<M, T>
where
    M: MemberPort + 'static,
    T: TrainerPort + 'static,
{
    type Response = PaymentRecord;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: PayRequest) -> Self::Future {
        let members = self.members.clone();
        Box::pin(async move {
            let member = eligible_member(members.as_ref(), req.member_id).await?;

            // The membership state is left untouched by a payment
            let payment = PaymentRecord::new(&member, req.method);
            tracing::info!(
                payment_id = %payment.payment_id,
                member_id = payment.member_id,
                amount = payment.amount,
                method = %payment.method,
                "payment processed"
            );

            Ok(payment)
        })
    }
}

impl<M, T> Service<CheckPaymentRequest> for GymLogic<M, T>
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

    fn call(&mut self, req: CheckPaymentRequest) -> Self::Future {
        let members = self.members.clone();
        Box::pin(async move { eligible_member(members.as_ref(), req.member_id).await })
    }
}

/// Resolve a member that is allowed to pay
async fn eligible_member<M>(members: &M, member_id: PersonId) -> Result<Member, Error>
where
    M: MemberPort,
{
    if members.count().await? == 0 {
        return Err(Error::NoMembersRegistered);
    }
    let member = members
        .find_by_id(member_id)
        .await?
        .ok_or(Error::MemberNotFound(member_id))?;
    if !member.is_active() {
        return Err(Error::MemberInactive(member.id()));
    }

    Ok(member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::memory::{MemoryMemberRegistry, MemoryTrainerRegistry},
        commands::{ErrorKind, RegisterMemberRequest, SetActiveRequest},
        ports::{member::MockMemberPort, trainer::MockTrainerPort},
    };
    use mockall::predicate::*;
    use rstest::*;
    use speculoos::prelude::*;
    use std::sync::Arc;
    use tower::{BoxError, ServiceExt};

    type MemoryLogic = GymLogic<MemoryMemberRegistry, MemoryTrainerRegistry>;

    #[fixture]
    fn domain() -> MemoryLogic {
        GymLogic::new(
            Arc::new(MemoryMemberRegistry::default()),
            Arc::new(MemoryTrainerRegistry::default()),
        )
    }

    fn pay(member_id: PersonId) -> PayRequest {
        PayRequest {
            member_id,
            method: "UPI".to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_call_no_members(domain: MemoryLogic) {
        let mut domain = domain;
        // GIVEN an empty member registry

        // WHEN paying for any member
        let res = (&mut domain).oneshot(pay(1001)).await;

        // THEN the payment is rejected
        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::NoMembersRegistered));
    }

    #[rstest]
    #[tokio::test]
    async fn test_call_not_found(domain: MemoryLogic) -> Result<(), BoxError> {
        let mut domain = domain;
        // GIVEN a registry with one member
        (&mut domain)
            .oneshot(RegisterMemberRequest {
                name: "Asha".to_string(),
                membership_type: "Basic".to_string(),
            })
            .await?;

        // WHEN paying for an unknown member
        let res = (&mut domain).oneshot(pay(1002)).await;

        // THEN the payment is rejected
        assert_that!(res).is_err().matches(|err| {
            matches!(err, Error::MemberNotFound(1002)) && err.kind() == ErrorKind::InvalidOperation
        });

        Ok(())
    }

    /// Register, deactivate, fail to pay, reactivate, then pay
    #[rstest]
    #[tokio::test]
    async fn test_call_inactive_then_active(domain: MemoryLogic) -> Result<(), BoxError> {
        let mut domain = domain;
        // GIVEN a deactivated premium member
        let member = (&mut domain)
            .oneshot(RegisterMemberRequest {
                name: "Asha".to_string(),
                membership_type: "Premium".to_string(),
            })
            .await?;
        assert_that!(member.id()).is_equal_to(1001);
        assert_that!(member.is_active()).is_true();
        (&mut domain)
            .oneshot(SetActiveRequest {
                member_id: 1001,
                active: false,
            })
            .await?;

        // WHEN paying
        let res = (&mut domain).oneshot(pay(1001)).await;

        // THEN the payment is rejected
        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::MemberInactive(1001)));

        // WHEN reactivating and paying again
        (&mut domain)
            .oneshot(SetActiveRequest {
                member_id: 1001,
                active: true,
            })
            .await?;
        let res = (&mut domain).oneshot(pay(1001)).await;

        // THEN the payment goes through at the premium rate
        assert_that!(res).is_ok().matches(|payment| {
            payment.member_id == 1001 && payment.amount == 1000.0 && payment.method == "UPI"
        });

        Ok(())
    }

    #[tokio::test]
    async fn test_call_leaves_member_untouched() -> Result<(), BoxError> {
        // GIVEN a member port with one active basic member
        let mut members = MockMemberPort::new();
        members.expect_count().times(1).returning(|| Ok(1));
        members
            .expect_find_by_id()
            .times(1)
            .with(eq(1001))
            .returning(|member_id| Ok(Some(Member::new(member_id, "Kiran", "Basic"))));
        members.expect_set_active().never();
        let mut domain = GymLogic::new(Arc::new(members), Arc::new(MockTrainerPort::new()));

        // WHEN paying by card
        let res = (&mut domain)
            .oneshot(PayRequest {
                member_id: 1001,
                method: "Card".to_string(),
            })
            .await;

        // THEN
        // * the basic fee is charged
        // * the member port is only read from
        assert_that!(res)
            .is_ok()
            .matches(|payment| payment.amount == 500.0 && payment.method == "Card");
        Arc::into_inner(domain.members).unwrap().checkpoint();

        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn test_check_payment(domain: MemoryLogic) -> Result<(), BoxError> {
        let mut domain = domain;
        // GIVEN a registered basic member
        (&mut domain)
            .oneshot(RegisterMemberRequest {
                name: "Kiran".to_string(),
                membership_type: "Basic".to_string(),
            })
            .await?;

        // WHEN checking eligibility for known, unknown and negative ids
        let known = (&mut domain)
            .oneshot(CheckPaymentRequest { member_id: 1001 })
            .await;
        let unknown = (&mut domain)
            .oneshot(CheckPaymentRequest { member_id: -5 })
            .await;

        // THEN only the registered member resolves
        assert_that!(known)
            .is_ok()
            .matches(|member| member.id() == 1001 && member.fee() == 500.0);
        assert_that!(unknown)
            .is_err()
            .matches(|err| matches!(err, Error::MemberNotFound(-5)));

        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn test_check_payment_inactive(domain: MemoryLogic) -> Result<(), BoxError> {
        let mut domain = domain;
        (&mut domain)
            .oneshot(RegisterMemberRequest {
                name: "Asha".to_string(),
                membership_type: "Premium".to_string(),
            })
            .await?;
        (&mut domain)
            .oneshot(SetActiveRequest {
                member_id: 1001,
                active: false,
            })
            .await?;

        let res = (&mut domain)
            .oneshot(CheckPaymentRequest { member_id: 1001 })
            .await;

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::MemberInactive(1001)));

        Ok(())
    }
}
