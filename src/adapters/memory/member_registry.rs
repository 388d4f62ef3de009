use crate::{
    domain::{Activation, Member, PersonId, FIRST_MEMBER_ID},
    ports::member::{Error, MemberPort},
};
use std::sync::{Arc, Mutex};

/// Maximum number of members when none is configured
pub const DEFAULT_MEMBER_CAPACITY: usize = 100;

#[derive(Clone, Debug)]
pub struct MemoryMemberRegistry {
    capacity: usize,
    /// Members and the id generator share a single lock
    state: Arc<Mutex<MemberState>>,
}

#[derive(Debug)]
struct MemberState {
    members: Vec<Member>,
    next_id: PersonId,
}

impl MemoryMemberRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Arc::new(Mutex::new(MemberState {
                members: Vec::new(),
                next_id: FIRST_MEMBER_ID,
            })),
        }
    }
}

impl Default for MemoryMemberRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBER_CAPACITY)
    }
}

#[async_trait::async_trait]
impl MemberPort for MemoryMemberRegistry {
    async fn register(&self, name: String, membership_type: String) -> Result<Member, Error> {
        let mut state = self.state.lock()?;
        if state.members.len() >= self.capacity {
            tracing::warn!(capacity = self.capacity, "member registry is full");
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let member = Member::new(state.next_id, name, membership_type);
        state.next_id += 1;
        state.members.push(member.clone());
        tracing::info!(member_id = member.id(), "member registered");

        Ok(member)
    }

    async fn find_by_id(&self, member_id: PersonId) -> Result<Option<Member>, Error> {
        let member = self
            .state
            .lock()?
            .members
            .iter()
            .find(|member| member.id() == member_id)
            .cloned();
        tracing::debug!(member_id, found = member.is_some(), "member lookup");

        Ok(member)
    }

    async fn set_active(&self, member_id: PersonId, active: bool) -> Result<Activation, Error> {
        let mut state = self.state.lock()?;
        let member = state
            .members
            .iter_mut()
            .find(|member| member.id() == member_id)
            .ok_or(Error::NotFound(member_id))?;

        let activation = if active {
            member.activate()
        } else {
            member.deactivate()
        };
        tracing::info!(member_id, ?activation, "member activity changed");

        Ok(activation)
    }

    async fn is_full(&self) -> Result<bool, Error> {
        Ok(self.state.lock()?.members.len() >= self.capacity)
    }

    async fn list_all(&self) -> Result<Vec<Member>, Error> {
        Ok(self.state.lock()?.members.clone())
    }

    async fn count(&self) -> Result<usize, Error> {
        Ok(self.state.lock()?.members.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[tokio::test]
    async fn test_register_sequential_ids() -> Result<(), Error> {
        let registry = MemoryMemberRegistry::new(5);

        let mut ids = Vec::new();
        for i in 0..5 {
            let member = registry
                .register(format!("Member {i}"), "Basic".to_string())
                .await?;
            assert_that!(member.is_active()).is_true();
            ids.push(member.id());
        }

        assert_that!(ids).is_equal_to(vec![1001, 1002, 1003, 1004, 1005]);
        Ok(())
    }

    #[tokio::test]
    async fn test_register_capacity() -> Result<(), Error> {
        let registry = MemoryMemberRegistry::new(2);
        registry
            .register("Asha".to_string(), "Premium".to_string())
            .await?;
        registry
            .register("Kiran".to_string(), "Basic".to_string())
            .await?;

        let res = registry
            .register("Meera".to_string(), "Basic".to_string())
            .await;

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::CapacityExceeded { capacity: 2 }));
        assert_that!(registry.count().await?).is_equal_to(2);
        Ok(())
    }

    #[tokio::test]
    async fn test_is_full() -> Result<(), Error> {
        let registry = MemoryMemberRegistry::new(1);
        assert_that!(registry.is_full().await?).is_false();

        registry
            .register("Asha".to_string(), "Premium".to_string())
            .await?;

        assert_that!(registry.is_full().await?).is_true();
        Ok(())
    }

    #[tokio::test]
    async fn test_unbounded_capacity_is_not_preallocated() -> Result<(), Error> {
        // GIVEN the largest capacity the configuration accepts
        let registry = MemoryMemberRegistry::new(usize::MAX);

        // WHEN registering a member
        let member = registry
            .register("Asha".to_string(), "Premium".to_string())
            .await?;

        // THEN it is stored like in any other registry
        assert_that!(member.id()).is_equal_to(1001);
        assert_that!(registry.is_full().await?).is_false();
        Ok(())
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_rejection() -> Result<(), Error> {
        let registry = MemoryMemberRegistry::new(1);
        registry
            .register("Asha".to_string(), "Premium".to_string())
            .await?;
        let _ = registry
            .register("Kiran".to_string(), "Basic".to_string())
            .await;

        let members = registry.list_all().await?;
        assert_that!(members).has_length(1);
        assert_that!(members[0].id()).is_equal_to(1001);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_id() -> Result<(), Error> {
        let registry = MemoryMemberRegistry::default();
        registry
            .register("Asha".to_string(), "Premium".to_string())
            .await?;
        registry
            .register("Kiran".to_string(), "Basic".to_string())
            .await?;

        let first = registry.find_by_id(1002).await?;
        let second = registry.find_by_id(1002).await?;
        assert_that!(first)
            .is_some()
            .matches(|member| member.name() == "Kiran");
        assert_that!(first).is_equal_to(second);

        assert_that!(registry.find_by_id(999).await?).is_none();
        assert_that!(registry.find_by_id(-5).await?).is_none();
        Ok(())
    }

    #[tokio::test]
    async fn test_set_active() -> Result<(), Error> {
        let registry = MemoryMemberRegistry::default();
        let member = registry
            .register("Asha".to_string(), "Premium".to_string())
            .await?;

        assert_that!(registry.set_active(member.id(), false).await?)
            .is_equal_to(Activation::Deactivated);
        assert_that!(registry.find_by_id(member.id()).await?)
            .is_some()
            .matches(|member| !member.is_active());

        assert_that!(registry.set_active(member.id(), true).await?)
            .is_equal_to(Activation::Activated);
        assert_that!(registry.set_active(member.id(), true).await?)
            .is_equal_to(Activation::AlreadyActive);
        assert_that!(registry.find_by_id(member.id()).await?)
            .is_some()
            .matches(|member| member.is_active());
        Ok(())
    }

    #[tokio::test]
    async fn test_set_active_not_found() {
        let registry = MemoryMemberRegistry::default();

        let res = registry.set_active(1001, false).await;

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::NotFound(1001)));
    }

    #[tokio::test]
    async fn test_list_all_keeps_inactive_members() -> Result<(), Error> {
        let registry = MemoryMemberRegistry::default();
        registry
            .register("Asha".to_string(), "Premium".to_string())
            .await?;
        registry
            .register("Kiran".to_string(), "Basic".to_string())
            .await?;
        registry.set_active(1001, false).await?;

        let members = registry.list_all().await?;

        let names: Vec<_> = members.iter().map(|member| member.name()).collect();
        assert_that!(names).is_equal_to(vec!["Asha", "Kiran"]);
        assert_that!(members[0].is_active()).is_false();
        Ok(())
    }
}
