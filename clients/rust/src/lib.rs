mod base;
mod customer;
mod group;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use customer::CustomerClient;
pub use customer::CreateCustomerInput;
use group::GroupClient;
pub use group::{CreateGroupInput, GroupMemberInput, JoinGroupInput};
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
pub use remindly_api_structs::dtos::*;
pub use remindly_domain::{Channel, MembershipRole, MembershipStatus, ReminderType, Repeat, ID};
use status::StatusClient;
use std::sync::Arc;

/// Remindly Server SDK
///
/// The SDK contains methods for interacting with the Remindly server
/// API.
#[derive(Clone)]
pub struct RemindlySDK {
    pub customer: CustomerClient,
    pub group: GroupClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl RemindlySDK {
    /// `api_key` is only needed for the admin routes, pass an empty string otherwise
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        let base = Arc::new(base);

        Self {
            customer: CustomerClient::new(base.clone()),
            group: GroupClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base),
        }
    }
}
