use crate::error::RemindlyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use remindly_api_structs::create_group::*;
use remindly_domain::ReminderGroup;
use remindly_infra::RemindlyContext;
use tracing::warn;

pub async fn create_group_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindlyContext>,
) -> Result<HttpResponse, RemindlyError> {
    let body = body.0;
    let usecase = CreateGroupUseCase {
        name: body.name,
        description: body.description.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|group| HttpResponse::Created().json(APIResponse::new(group, 0)))
        .map_err(RemindlyError::from)
}

#[derive(Debug)]
pub struct CreateGroupUseCase {
    pub name: String,
    pub description: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    JoinCodeExhausted,
    StorageError,
}

impl From<UseCaseError> for RemindlyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => {
                Self::BadClientData("The group name can not be empty.".into())
            }
            UseCaseError::JoinCodeExhausted => Self::Conflict(
                "Unable to find a free join code for the group, please try again.".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

/// Attempts at drawing a join code that is not taken by another group
const MAX_JOIN_CODE_ATTEMPTS: usize = 5;

#[async_trait::async_trait(?Send)]
impl UseCase for CreateGroupUseCase {
    type Response = ReminderGroup;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateGroup";

    async fn execute(&mut self, ctx: &RemindlyContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }

        let group = ReminderGroup::new(
            name.to_string(),
            self.description.trim().to_string(),
            ctx.sys.now(),
        );
        insert_with_free_join_code(group, MAX_JOIN_CODE_ATTEMPTS, ctx).await
    }
}

/// Inserts the group, drawing a new join code every time the store reports
/// the current one as taken
async fn insert_with_free_join_code(
    mut group: ReminderGroup,
    attempts: usize,
    ctx: &RemindlyContext,
) -> Result<ReminderGroup, UseCaseError> {
    for _ in 0..attempts {
        let inserted = ctx
            .repos
            .groups
            .insert(&group)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if inserted {
            return Ok(group);
        }
        warn!("Join code collision for new group, drawing a new one");
        group.regenerate_join_code();
    }

    Err(UseCaseError::JoinCodeExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn creates_group_with_join_code() {
        let ctx = RemindlyContext::create_inmemory();
        let usecase = CreateGroupUseCase {
            name: " Book club ".into(),
            description: "".into(),
        };
        let group = execute(usecase, &ctx).await.unwrap();
        assert_eq!(group.name, "Book club");
        assert_eq!(group.join_code.len(), 8);
        assert_eq!(
            ctx.repos.groups.find_by_join_code(&group.join_code).await,
            Some(group)
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_empty_name() {
        let ctx = RemindlyContext::create_inmemory();
        let usecase = CreateGroupUseCase {
            name: "  ".into(),
            description: "desc".into(),
        };
        assert_eq!(
            execute(usecase, &ctx).await.unwrap_err(),
            UseCaseError::EmptyName
        );
    }

    #[actix_web::main]
    #[test]
    async fn draws_new_join_code_on_collision() {
        let ctx = RemindlyContext::create_inmemory();
        let taken = ReminderGroup::new("Book club".into(), "".into(), ctx.sys.now());
        ctx.repos.groups.insert(&taken).await.unwrap();

        let mut group = ReminderGroup::new("Chess club".into(), "".into(), ctx.sys.now());
        group.join_code = taken.join_code.clone();
        let group = insert_with_free_join_code(group, MAX_JOIN_CODE_ATTEMPTS, &ctx)
            .await
            .unwrap();

        assert_ne!(group.join_code, taken.join_code);
        assert_eq!(ctx.repos.groups.find(&group.id).await, Some(group.clone()));
        assert_eq!(ctx.repos.groups.find_all().await.unwrap().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn gives_up_when_join_codes_keep_colliding() {
        let ctx = RemindlyContext::create_inmemory();
        let taken = ReminderGroup::new("Book club".into(), "".into(), ctx.sys.now());
        ctx.repos.groups.insert(&taken).await.unwrap();

        let mut group = ReminderGroup::new("Chess club".into(), "".into(), ctx.sys.now());
        group.join_code = taken.join_code.clone();
        let group_id = group.id;
        let err = insert_with_free_join_code(group, 1, &ctx).await.unwrap_err();

        assert_eq!(err, UseCaseError::JoinCodeExhausted);
        assert!(matches!(RemindlyError::from(err), RemindlyError::Conflict(_)));
        assert!(ctx.repos.groups.find(&group_id).await.is_none());
    }
}
