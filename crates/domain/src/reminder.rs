use crate::{
    customer::Customer,
    membership::GroupMembership,
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderType {
    /// Addressed to a single contact or `Customer`
    Personal,
    /// Addressed to every active member of a `ReminderGroup`
    Group,
}

impl Display for ReminderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Personal => write!(f, "Personal"),
            Self::Group => write!(f, "Group"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidReminderValue {
    #[error("Unknown reminder type: `{0}`")]
    ReminderType(String),
    #[error("Unknown repeat kind: `{0}`. Expected one of Once, Daily, Weekly or Monthly")]
    Repeat(String),
    #[error("Unknown channel: `{0}`. Expected one of email or push")]
    Channel(String),
}

impl FromStr for ReminderType {
    type Err = InvalidReminderValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Personal" => Ok(Self::Personal),
            "Group" => Ok(Self::Group),
            _ => Err(InvalidReminderValue::ReminderType(s.to_string())),
        }
    }
}

/// A delivery mechanism a `Reminder` can opt into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Push,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Push => "push",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Channel {
    type Err = InvalidReminderValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "push" => Ok(Self::Push),
            _ => Err(InvalidReminderValue::Channel(s.to_string())),
        }
    }
}

/// Recurrence rule of a `Reminder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Daily,
    Weekly,
    Monthly,
    /// A stored value that is none of the known kinds. Such a
    /// `Reminder` never fires. It can only be produced when loading
    /// existing rows, new values are rejected by `FromStr`.
    Unsupported(String),
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Once
    }
}

impl Repeat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Once => "Once",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Unsupported(value) => value,
        }
    }

    /// Parses a value read back from storage, keeping unknown values around
    /// instead of failing.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => Self::Once,
            Some(value) => value
                .parse()
                .unwrap_or_else(|_| Self::Unsupported(value.to_string())),
        }
    }
}

impl FromStr for Repeat {
    type Err = InvalidReminderValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "None" | "Once" => Ok(Self::Once),
            "Daily" => Ok(Self::Daily),
            "Weekly" => Ok(Self::Weekly),
            "Monthly" => Ok(Self::Monthly),
            _ => Err(InvalidReminderValue::Repeat(s.to_string())),
        }
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Repeat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Repeat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RepeatVisitor;

        impl<'de> Visitor<'de> for RepeatVisitor {
            type Value = Repeat;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("One of Once, Daily, Weekly or Monthly")
            }

            fn visit_str<E>(self, value: &str) -> Result<Repeat, E>
            where
                E: serde::de::Error,
            {
                value.parse::<Repeat>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(RepeatVisitor)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub title: String,
    pub reminder_type: ReminderType,
    pub message: String,
    /// The first (or only) occurrence of the `Reminder`
    pub datetime: DateTime<Utc>,
    pub repeat: Repeat,
    pub channels: BTreeSet<Channel>,
    pub is_active: bool,
    pub customer_id: Option<ID>,
    pub group_id: Option<ID>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub created: DateTime<Utc>,
}

impl Reminder {
    pub fn new(
        title: String,
        reminder_type: ReminderType,
        datetime: DateTime<Utc>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            title,
            reminder_type,
            message: Default::default(),
            datetime,
            repeat: Default::default(),
            channels: Default::default(),
            is_active: true,
            customer_id: None,
            group_id: None,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
            created,
        }
    }

    /// Flips `is_active` and returns the new state
    pub fn toggle_active(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.is_active
    }

    pub fn notification(&self) -> ReminderNotification {
        ReminderNotification {
            reminder_id: self.id,
            title: self.title.clone(),
            message: self.message.clone(),
        }
    }

    /// Recipient of a personal `Reminder`. The explicit contact email
    /// wins over the email of the linked `Customer`.
    pub fn personal_recipient(&self, customer: Option<&Customer>) -> Option<String> {
        match self.contact_email.as_deref() {
            Some(email) if !email.is_empty() => Some(email.to_string()),
            _ => customer
                .and_then(|c| c.contact_email())
                .map(|email| email.to_string()),
        }
    }
}

impl Entity<ID> for Reminder {
    fn id(&self) -> ID {
        self.id
    }
}

/// Email addresses of the members of a group that should receive a group
/// `Reminder`, in membership order. Pending members and members without an
/// email are left out.
pub fn group_recipients(members: &[(GroupMembership, Option<Customer>)]) -> Vec<String> {
    members
        .iter()
        .filter(|(membership, _)| membership.receives_group_reminders())
        .filter_map(|(_, customer)| customer.as_ref().and_then(|c| c.contact_email()))
        .map(|email| email.to_string())
        .collect()
}

/// Decides if a `Reminder` should fire on the calendar day of `now`.
///
/// The reminder's datetime is converted into the timezone of `now` before
/// comparing dates. The decision is always made from the stored datetime,
/// nothing about previous deliveries is taken into account.
pub fn should_send_reminder<T: TimeZone>(reminder: &Reminder, now: &DateTime<T>) -> bool {
    let event_date = reminder.datetime.with_timezone(&now.timezone()).date_naive();
    let today = now.date_naive();

    match reminder.repeat {
        Repeat::Daily => event_date <= today,
        Repeat::Weekly => event_date.weekday() == today.weekday() && event_date <= today,
        Repeat::Monthly => event_date.day() == today.day() && event_date <= today,
        Repeat::Once => event_date == today,
        Repeat::Unsupported(_) => false,
    }
}

/// The content delivered over a `Channel` when a `Reminder` fires
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderNotification {
    pub reminder_id: ID,
    pub title: String,
    pub message: String,
}

impl ReminderNotification {
    pub fn subject(&self) -> String {
        format!("Reminder: {}", self.title)
    }
}
