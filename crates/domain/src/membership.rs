use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipRole {
    Admin,
    Member,
}

impl Default for MembershipRole {
    fn default() -> Self {
        Self::Member
    }
}

/// Only `Active` members receive group reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Active,
    Pending,
}

impl Default for MembershipStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Error, Debug)]
#[error("Unknown membership value: `{0}`")]
pub struct InvalidMembershipValue(String);

impl Display for MembershipRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Member => write!(f, "Member"),
        }
    }
}

impl FromStr for MembershipRole {
    type Err = InvalidMembershipValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Member" => Ok(Self::Member),
            _ => Err(InvalidMembershipValue(s.to_string())),
        }
    }
}

impl Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

impl FromStr for MembershipStatus {
    type Err = InvalidMembershipValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Pending" => Ok(Self::Pending),
            _ => Err(InvalidMembershipValue(s.to_string())),
        }
    }
}

/// Links a `Customer` to a `ReminderGroup`.
///
/// `is_active` is independent of `status`: the former decides whether the
/// membership is listed at all, the latter whether the member receives
/// group reminders.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMembership {
    pub id: ID,
    pub customer_id: ID,
    pub group_id: ID,
    pub role: MembershipRole,
    pub status: MembershipStatus,
    pub is_active: bool,
    pub joined: DateTime<Utc>,
}

impl GroupMembership {
    pub fn new(customer_id: ID, group_id: ID, joined: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            customer_id,
            group_id,
            role: Default::default(),
            status: Default::default(),
            is_active: true,
            joined,
        }
    }

    /// Moves a `Pending` membership to `Active`.
    /// Returns false if the membership was already active.
    pub fn activate(&mut self) -> bool {
        match self.status {
            MembershipStatus::Pending => {
                self.status = MembershipStatus::Active;
                true
            }
            MembershipStatus::Active => false,
        }
    }

    pub fn receives_group_reminders(&self) -> bool {
        self.status == MembershipStatus::Active
    }
}

impl Entity<ID> for GroupMembership {
    fn id(&self) -> ID {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_memberships_are_pending_members() {
        let m = GroupMembership::new(ID::new(), ID::new(), Utc::now());
        assert_eq!(m.role, MembershipRole::Member);
        assert_eq!(m.status, MembershipStatus::Pending);
        assert!(m.is_active);
        assert!(!m.receives_group_reminders());
    }

    #[test]
    fn activation_only_happens_once() {
        let mut m = GroupMembership::new(ID::new(), ID::new(), Utc::now());
        assert!(m.activate());
        assert_eq!(m.status, MembershipStatus::Active);
        assert!(!m.activate());
        assert_eq!(m.status, MembershipStatus::Active);
        assert!(m.receives_group_reminders());
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("Admin".parse::<MembershipRole>().unwrap(), MembershipRole::Admin);
        assert_eq!(
            "Pending".parse::<MembershipStatus>().unwrap(),
            MembershipStatus::Pending
        );
        assert!("admin".parse::<MembershipRole>().is_err());
        assert!("Inactive".parse::<MembershipStatus>().is_err());
    }
}
