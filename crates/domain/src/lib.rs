mod customer;
mod group;
mod membership;
mod reminder;
mod shared;

pub use customer::Customer;
pub use group::ReminderGroup;
pub use membership::{GroupMembership, InvalidMembershipValue, MembershipRole, MembershipStatus};
pub use reminder::{
    group_recipients, should_send_reminder, Channel, InvalidReminderValue, Reminder,
    ReminderNotification, ReminderType, Repeat,
};
pub use shared::entity::{Entity, InvalidIDError, ID};

pub use chrono_tz::Tz;
