use crate::shared::entity::{Entity, ID};

/// A person that can join `ReminderGroup`s and receive `Reminder`s.
///
/// `phone_number` is used to look up existing customers when someone joins a
/// group, but it is not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: ID,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: Option<String>,
}

impl Customer {
    pub fn new(name: String, surname: String, phone_number: String, email: Option<String>) -> Self {
        Self {
            id: Default::default(),
            name,
            surname,
            phone_number,
            email: email.filter(|e| !e.trim().is_empty()),
        }
    }

    /// The email address notifications can be delivered to, if any
    pub fn contact_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

impl Entity<ID> for Customer {
    fn id(&self) -> ID {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_treated_as_missing() {
        let c = Customer::new("Ada".into(), "L".into(), "123".into(), Some("  ".into()));
        assert_eq!(c.email, None);
        assert_eq!(c.contact_email(), None);

        let c = Customer::new("Ada".into(), "L".into(), "123".into(), Some("a@x.com".into()));
        assert_eq!(c.contact_email(), Some("a@x.com"));
    }
}
