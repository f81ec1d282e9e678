use super::find_reminder_group;
use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use remindly_api_structs::create_reminder::*;
use remindly_domain::{Channel, Customer, Reminder, ReminderType, Repeat, ID};
use remindly_infra::RemindlyContext;
use remindly_utils::create_placeholder_phone_number;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        title: body.title,
        reminder_type: body.reminder_type,
        datetime: body.datetime,
        message: body.message.unwrap_or_default(),
        repeat: body.repeat.unwrap_or_default(),
        channels: body.channels.unwrap_or_default(),
        is_active: body.is_active.unwrap_or(true),
        contact_name: body.contact_name,
        contact_phone: body.contact_phone,
        contact_email: body.contact_email,
        group_id: body.group_id,
    };

    let reminder = execute(usecase, &ctx)
        .await
        .map_err(RemindlyError::from)?;
    let group = find_reminder_group(&ctx, &reminder).await;
    Ok(HttpResponse::Created().json(APIResponse::new(reminder, group)))
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub title: String,
    pub reminder_type: ReminderType,
    pub datetime: DateTime<Utc>,
    pub message: String,
    pub repeat: Repeat,
    pub channels: Vec<Channel>,
    pub is_active: bool,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub group_id: Option<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyTitle,
    UnsupportedRepeat(String),
    MissingGroup,
    GroupNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyTitle => {
                Self::BadClientData("The reminder title can not be empty.".into())
            }
            UseCaseError::UnsupportedRepeat(repeat) => Self::BadClientData(format!(
                "The repeat value: {}, is not supported.",
                repeat
            )),
            UseCaseError::MissingGroup => {
                Self::BadClientData("Group reminders require a `groupId`.".into())
            }
            UseCaseError::GroupNotFound(group_id) => Self::NotFound(format!(
                "The group with id: {}, was not found.",
                group_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl CreateReminderUseCase {
    /// Finds the customer a personal reminder is about, by phone number
    /// first and email second. A customer is created when nothing matches.
    async fn resolve_customer(&self, ctx: &RemindlyContext) -> Result<Customer, UseCaseError> {
        let phone = non_blank(&self.contact_phone);
        let email = non_blank(&self.contact_email);

        let mut existing = match phone {
            Some(phone) => ctx.repos.customers.find_by_phone(phone).await,
            None => None,
        };
        if existing.is_none() {
            if let Some(email) = email {
                existing = ctx.repos.customers.find_by_email(email).await;
            }
        }
        if let Some(customer) = existing {
            return Ok(customer);
        }

        let customer = Customer::new(
            non_blank(&self.contact_name).unwrap_or("Unknown").to_string(),
            String::new(),
            phone
                .map(String::from)
                .unwrap_or_else(create_placeholder_phone_number),
            email.map(String::from),
        );
        ctx.repos
            .customers
            .insert(&customer)
            .await
            .map(|_| customer)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }
        if let Repeat::Unsupported(repeat) = &self.repeat {
            return Err(UseCaseError::UnsupportedRepeat(repeat.clone()));
        }

        let mut reminder = Reminder::new(
            title.to_string(),
            self.reminder_type,
            self.datetime,
            ctx.sys.now(),
        );
        reminder.message = self.message.clone();
        reminder.repeat = self.repeat.clone();
        reminder.channels = self.channels.iter().copied().collect();
        reminder.is_active = self.is_active;
        reminder.contact_name = non_blank(&self.contact_name).map(String::from);
        reminder.contact_phone = non_blank(&self.contact_phone).map(String::from);
        reminder.contact_email = non_blank(&self.contact_email).map(String::from);

        match self.reminder_type {
            ReminderType::Personal => {
                let customer = self.resolve_customer(ctx).await?;
                reminder.customer_id = Some(customer.id);
            }
            ReminderType::Group => {
                let group_id = self.group_id.ok_or(UseCaseError::MissingGroup)?;
                let group = ctx
                    .repos
                    .groups
                    .find(&group_id)
                    .await
                    .ok_or(UseCaseError::GroupNotFound(group_id))?;
                reminder.group_id = Some(group.id);
            }
        }

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remindly_domain::ReminderGroup;

    fn personal() -> CreateReminderUseCase {
        CreateReminderUseCase {
            title: "Dentist".into(),
            reminder_type: ReminderType::Personal,
            datetime: Utc::now(),
            message: "Bring the forms".into(),
            repeat: Repeat::Once,
            channels: vec![Channel::Email, Channel::Email, Channel::Push],
            is_active: true,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
            group_id: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn personal_reminder_reuses_customer_by_phone() {
        let ctx = RemindlyContext::create_inmemory();
        let customer = Customer::new("Ada".into(), "L".into(), "5551234567".into(), None);
        ctx.repos.customers.insert(&customer).await.unwrap();

        let mut usecase = personal();
        usecase.contact_phone = Some("5551234567".into());
        usecase.contact_email = Some("other@x.com".into());
        let reminder = execute(usecase, &ctx).await.unwrap();

        assert_eq!(reminder.customer_id, Some(customer.id));
        assert_eq!(reminder.channels.len(), 2);
        assert_eq!(ctx.repos.customers.find_all().await.unwrap().len(), 1);
        assert_eq!(ctx.repos.reminders.find(&reminder.id).await, Some(reminder));
    }

    #[actix_web::main]
    #[test]
    async fn personal_reminder_finds_customer_by_email_or_creates_one() {
        let ctx = RemindlyContext::create_inmemory();
        let customer = Customer::new(
            "Ada".into(),
            "L".into(),
            "5551234567".into(),
            Some("ada@x.com".into()),
        );
        ctx.repos.customers.insert(&customer).await.unwrap();

        let mut usecase = personal();
        usecase.contact_email = Some("ada@x.com".into());
        let reminder = execute(usecase, &ctx).await.unwrap();
        assert_eq!(reminder.customer_id, Some(customer.id));

        let mut usecase = personal();
        usecase.contact_name = Some("Grace".into());
        usecase.contact_email = Some("grace@x.com".into());
        let reminder = execute(usecase, &ctx).await.unwrap();
        let created = ctx
            .repos
            .customers
            .find(&reminder.customer_id.unwrap())
            .await
            .unwrap();
        assert_eq!(created.name, "Grace");
        assert_eq!(created.surname, "");
        assert_eq!(created.email.as_deref(), Some("grace@x.com"));
    }

    #[actix_web::main]
    #[test]
    async fn personal_reminder_falls_back_to_email_when_phone_misses() {
        let ctx = RemindlyContext::create_inmemory();
        let customer = Customer::new(
            "Ada".into(),
            "L".into(),
            "5551234567".into(),
            Some("ada@x.com".into()),
        );
        ctx.repos.customers.insert(&customer).await.unwrap();

        let mut usecase = personal();
        usecase.contact_phone = Some("5559999999".into());
        usecase.contact_email = Some("ada@x.com".into());
        let reminder = execute(usecase, &ctx).await.unwrap();

        assert_eq!(reminder.customer_id, Some(customer.id));
        assert_eq!(ctx.repos.customers.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn personal_reminder_without_contact_gets_placeholder_customer() {
        let ctx = RemindlyContext::create_inmemory();
        let reminder = execute(personal(), &ctx).await.unwrap();
        let customer = ctx
            .repos
            .customers
            .find(&reminder.customer_id.unwrap())
            .await
            .unwrap();
        assert_eq!(customer.name, "Unknown");
        assert!(customer.phone_number.starts_with("555"));
        assert_eq!(customer.phone_number.len(), 10);
    }

    #[actix_web::main]
    #[test]
    async fn group_reminder_requires_existing_group() {
        let ctx = RemindlyContext::create_inmemory();

        let mut usecase = personal();
        usecase.reminder_type = ReminderType::Group;
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::MissingGroup
        );

        let mut usecase = personal();
        usecase.reminder_type = ReminderType::Group;
        let missing = ID::new();
        usecase.group_id = Some(missing);
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::GroupNotFound(missing)
        );

        let group = ReminderGroup::new("Team".into(), "".into(), Utc::now());
        ctx.repos.groups.insert(&group).await.unwrap();
        let mut usecase = personal();
        usecase.reminder_type = ReminderType::Group;
        usecase.group_id = Some(group.id);
        let reminder = execute(usecase, &ctx).await.unwrap();
        assert_eq!(reminder.group_id, Some(group.id));
        assert_eq!(reminder.customer_id, None);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_empty_title_and_unsupported_repeat() {
        let ctx = RemindlyContext::create_inmemory();

        let mut usecase = personal();
        usecase.title = " ".into();
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::EmptyTitle
        );

        let mut usecase = personal();
        usecase.repeat = Repeat::Unsupported("Yearly".into());
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::UnsupportedRepeat(_))
        ));
    }
}
