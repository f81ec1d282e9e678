use crate::dtos::{GroupDTO, MemberDTO};
use remindly_domain::{Customer, GroupMembership, ReminderGroup, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub group: GroupDTO,
}

impl GroupResponse {
    pub fn new(group: ReminderGroup, members: i64) -> Self {
        Self {
            group: GroupDTO::new(group, members),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub message: String,
    pub member: MemberDTO,
}

impl MemberResponse {
    pub fn new(message: &str, membership: GroupMembership, customer: Customer) -> Self {
        Self {
            message: message.into(),
            member: MemberDTO::new(membership, customer),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GroupMemberPathParams {
    pub join_code: String,
    pub membership_id: ID,
}

pub mod create_group {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
    }

    pub type APIResponse = GroupResponse;
}

pub mod get_groups {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub groups: Vec<GroupDTO>,
    }

    impl APIResponse {
        pub fn new(groups: Vec<(ReminderGroup, i64)>) -> Self {
            Self {
                groups: groups
                    .into_iter()
                    .map(|(group, members)| GroupDTO::new(group, members))
                    .collect(),
            }
        }
    }
}

pub mod delete_group {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub group_id: ID,
    }

    pub type APIResponse = GroupResponse;
}

pub mod join_group {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub join_code: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub surname: String,
        pub phone_number: String,
        #[serde(default)]
        pub email: Option<String>,
    }

    pub type APIResponse = MemberResponse;
}

pub mod get_group_members {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub join_code: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub members: Vec<MemberDTO>,
    }

    impl APIResponse {
        pub fn new(members: Vec<(GroupMembership, Customer)>) -> Self {
            Self {
                members: members
                    .into_iter()
                    .map(|(membership, customer)| MemberDTO::new(membership, customer))
                    .collect(),
            }
        }
    }
}

pub mod activate_group_member {
    use super::*;

    pub type PathParams = GroupMemberPathParams;

    pub type APIResponse = MemberResponse;
}

pub mod remove_group_member {
    use super::*;

    pub type PathParams = GroupMemberPathParams;

    pub type APIResponse = MemberResponse;
}

pub mod admin_add_group_member {
    use super::*;

    /// Both ids are optional to be able to tell the client which one is missing
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub customer_id: Option<ID>,
        #[serde(default)]
        pub group_id: Option<ID>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        /// False when the customer already was a member of the group
        pub created: bool,
        pub member: MemberDTO,
    }

    impl APIResponse {
        pub fn new(created: bool, membership: GroupMembership, customer: Customer) -> Self {
            let message = if created {
                "Customer was added to the group."
            } else {
                "Customer is already in the group."
            };
            Self {
                message: message.into(),
                created,
                member: MemberDTO::new(membership, customer),
            }
        }
    }
}
