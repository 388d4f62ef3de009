use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifier for a `Member` or a `Trainer`
///
/// Signed so that any integer typed at the menu is a lookup key, even one no registry hands out.
pub type PersonId = i32;

/// First identifier handed out by a member registry
pub const FIRST_MEMBER_ID: PersonId = 1001;
/// First identifier handed out by a trainer registry
pub const FIRST_TRAINER_ID: PersonId = 2001;

/// Identity shared by members and trainers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: PersonId,
    pub name: String,
}

impl Identity {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// Assigned once by the registry
    identity: Identity,
    /// Membership type as entered at registration
    ///
    /// This is kept verbatim for display. Use [`Member::tier`] for anything fee-related.
    membership_type: String,
    /// Whether the member can currently pay for their membership
    active: bool,
}

impl Member {
    /// Create a new, active member
    pub fn new(id: PersonId, name: impl Into<String>, membership_type: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(id, name),
            membership_type: membership_type.into(),
            active: true,
        }
    }

    pub fn id(&self) -> PersonId {
        self.identity.id
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn membership_type(&self) -> &str {
        &self.membership_type
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tier(&self) -> MembershipTier {
        MembershipTier::from_type(&self.membership_type)
    }

    /// Fee owed by this member for one payment
    pub fn fee(&self) -> f64 {
        self.tier().fee()
    }

    /// Reactivate the member
    ///
    /// Activating an already active member leaves it untouched and reports
    /// [`Activation::AlreadyActive`].
    pub fn activate(&mut self) -> Activation {
        if self.active {
            return Activation::AlreadyActive;
        }
        self.active = true;
        Activation::Activated
    }

    /// Deactivate the member
    ///
    /// There is no "already inactive" outcome: deactivating an inactive member succeeds silently.
    pub fn deactivate(&mut self) -> Activation {
        self.active = false;
        Activation::Deactivated
    }

    pub fn greeting(&self) -> String {
        format!("Hi {}, welcome to the gym!", self.name())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member ID: {} | Name: {} | Type: {} | Active: {}",
            self.id(),
            self.name(),
            self.membership_type(),
            self.is_active()
        )
    }
}

/// Fee class derived from the free-text membership type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipTier {
    Basic,
    Premium,
}

impl MembershipTier {
    /// Classify a membership type
    ///
    /// Only "Premium" (ignoring case) maps to [`MembershipTier::Premium`], anything else is
    /// billed as [`MembershipTier::Basic`].
    pub fn from_type(membership_type: &str) -> Self {
        if membership_type.eq_ignore_ascii_case("premium") {
            MembershipTier::Premium
        } else {
            MembershipTier::Basic
        }
    }

    pub fn fee(&self) -> f64 {
        match self {
            MembershipTier::Basic => 500.0,
            MembershipTier::Premium => 1000.0,
        }
    }
}

/// Outcome of an activity change on a `Member`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Activated,
    /// Informational no-op, the member was already active
    AlreadyActive,
    Deactivated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trainer {
    identity: Identity,
    specialization: String,
}

impl Trainer {
    pub fn new(id: PersonId, name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(id, name),
            specialization: specialization.into(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.identity.id
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn greeting(&self) -> String {
        format!("Trainer {} here, ready to help you!", self.name())
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trainer ID: {} | Name: {} | Specialization: {}",
            self.id(),
            self.name(),
            self.specialization()
        )
    }
}

/// A completed payment
///
/// Payments are not stored anywhere. The record only lives long enough to be reported back.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRecord {
    pub payment_id: Uuid,
    pub member_id: PersonId,
    pub amount: f64,
    /// Payment method, e.g. "Cash", "UPI" or "Card"
    ///
    /// This is free text since the set of methods is not validated.
    pub method: String,
    pub processed_at: DateTime<Utc>,
}

impl PaymentRecord {
    pub fn new(member: &Member, method: impl Into<String>) -> Self {
        Self {
            payment_id: Uuid::new_v4(),
            member_id: member.id(),
            amount: member.fee(),
            method: method.into(),
            processed_at: Utc::now(),
        }
    }
}

impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment of Rs{:.1} via {} completed for Member ID: {}",
            self.amount, self.method, self.member_id
        )
    }
}
