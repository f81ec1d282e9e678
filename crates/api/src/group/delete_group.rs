use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::delete_group::*;
use remindly_domain::{ReminderGroup, ID};
use remindly_infra::RemindlyContext;
use tracing::warn;

pub async fn delete_group_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let usecase = DeleteGroupUseCase {
        group_id: path_params.group_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|group| HttpResponse::Ok().json(APIResponse::new(group, 0)))
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
struct DeleteGroupUseCase {
    group_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(group_id) => Self::NotFound(format!(
                "The group with id: {}, was not found.",
                group_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteGroupUseCase {
    type Response = ReminderGroup;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteGroup";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let group = ctx
            .repos
            .groups
            .delete(&self.group_id)
            .await
            .ok_or(UseCaseError::NotFound(self.group_id))?;

        if let Err(e) = ctx.repos.memberships.delete_by_group(&group.id).await {
            warn!("Unable to remove memberships of deleted group: {:?}", e);
        }
        if let Err(e) = ctx.repos.reminders.detach_group(&group.id).await {
            warn!("Unable to detach reminders of deleted group: {:?}", e);
        }

        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use remindly_domain::{GroupMembership, Reminder, ReminderType};

    #[actix_web::main]
    #[test]
    async fn deletes_group_and_cascades() {
        let ctx = RemindlyContext::create_inmemory();
        let group = ReminderGroup::new("Team".into(), "".into(), Utc::now());
        ctx.repos.groups.insert(&group).await.unwrap();
        let membership = GroupMembership::new(ID::new(), group.id, Utc::now());
        ctx.repos
            .memberships
            .insert_if_absent(&membership)
            .await
            .unwrap();
        let mut reminder = Reminder::new("Standup".into(), ReminderType::Group, Utc::now(), Utc::now());
        reminder.group_id = Some(group.id);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let usecase = DeleteGroupUseCase { group_id: group.id };
        assert_eq!(execute(usecase, &ctx).await.unwrap(), group);

        assert!(ctx.repos.groups.find(&group.id).await.is_none());
        assert_eq!(ctx.repos.memberships.count_by_group(&group.id).await.unwrap(), 0);
        assert_eq!(
            ctx.repos.reminders.find(&reminder.id).await.unwrap().group_id,
            None
        );
    }

    #[actix_web::main]
    #[test]
    async fn missing_group_is_not_found() {
        let ctx = RemindlyContext::create_inmemory();
        let usecase = DeleteGroupUseCase { group_id: ID::new() };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }
}
