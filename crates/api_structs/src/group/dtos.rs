use chrono::{DateTime, Utc};
use remindly_domain::{
    Customer, GroupMembership, MembershipRole, MembershipStatus, ReminderGroup, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupDTO {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub join_code: String,
    pub created: DateTime<Utc>,
    /// Number of memberships in the group, regardless of status
    pub members: i64,
}

impl GroupDTO {
    pub fn new(group: ReminderGroup, members: i64) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            join_code: group.join_code,
            created: group.created,
            members,
        }
    }
}

/// A `GroupMembership` together with the contact details of its `Customer`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberDTO {
    pub id: ID,
    pub customer_id: ID,
    pub group_id: ID,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub role: MembershipRole,
    pub status: MembershipStatus,
    pub is_active: bool,
    pub joined: DateTime<Utc>,
}

impl MemberDTO {
    pub fn new(membership: GroupMembership, customer: Customer) -> Self {
        Self {
            id: membership.id,
            customer_id: membership.customer_id,
            group_id: membership.group_id,
            name: customer.name,
            email: customer.email,
            phone_number: customer.phone_number,
            role: membership.role,
            status: membership.status,
            is_active: membership.is_active,
            joined: membership.joined,
        }
    }
}
