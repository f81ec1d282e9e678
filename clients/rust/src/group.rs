use crate::{APIResponse, BaseClient, ID};
use remindly_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct GroupClient {
    base: Arc<BaseClient>,
}

pub struct CreateGroupInput {
    pub name: String,
    pub description: Option<String>,
}

pub struct JoinGroupInput {
    pub join_code: String,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: Option<String>,
}

pub struct GroupMemberInput {
    pub join_code: String,
    pub membership_id: ID,
}

impl GroupClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateGroupInput) -> APIResponse<create_group::APIResponse> {
        let body = create_group::RequestBody {
            name: input.name,
            description: input.description,
        };
        self.base
            .post(body, "groups".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_groups::APIResponse> {
        self.base.get("groups".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, group_id: ID) -> APIResponse<delete_group::APIResponse> {
        self.base
            .delete(format!("groups/{}", group_id), StatusCode::OK)
            .await
    }

    pub async fn join(&self, input: JoinGroupInput) -> APIResponse<join_group::APIResponse> {
        let body = join_group::RequestBody {
            name: input.name,
            surname: input.surname,
            phone_number: input.phone_number,
            email: input.email,
        };
        self.base
            .post(
                body,
                format!("groups/join/{}", input.join_code),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn members(&self, join_code: &str) -> APIResponse<get_group_members::APIResponse> {
        self.base
            .get(format!("groups/{}/members", join_code), StatusCode::OK)
            .await
    }

    pub async fn activate_member(
        &self,
        input: GroupMemberInput,
    ) -> APIResponse<activate_group_member::APIResponse> {
        self.base
            .patch(
                format!("groups/{}/members/{}", input.join_code, input.membership_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn remove_member(
        &self,
        input: GroupMemberInput,
    ) -> APIResponse<remove_group_member::APIResponse> {
        self.base
            .delete(
                format!("groups/{}/members/{}", input.join_code, input.membership_id),
                StatusCode::OK,
            )
            .await
    }

    /// Requires the sdk to be created with the admin api key
    pub async fn admin_add_member(
        &self,
        customer_id: ID,
        group_id: ID,
    ) -> APIResponse<admin_add_group_member::APIResponse> {
        let body = admin_add_group_member::RequestBody {
            customer_id: Some(customer_id),
            group_id: Some(group_id),
        };
        self.base
            .post_expecting(
                body,
                "admin/memberships".into(),
                &[StatusCode::CREATED, StatusCode::OK],
            )
            .await
    }
}
