use actix_web::web;

mod activate_group_member;
mod admin_add_group_member;
mod create_group;
mod delete_group;
mod get_group_members;
mod get_groups;
mod join_group;
mod remove_group_member;

use activate_group_member::activate_group_member_controller;
use admin_add_group_member::admin_add_group_member_controller;
use create_group::create_group_controller;
use delete_group::delete_group_controller;
use get_group_members::get_group_members_controller;
use get_groups::get_groups_controller;
use join_group::join_group_controller;
use remove_group_member::remove_group_member_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/groups", web::get().to(get_groups_controller));
    cfg.route("/groups", web::post().to(create_group_controller));
    cfg.route("/groups/{group_id}", web::delete().to(delete_group_controller));
    cfg.route(
        "/groups/join/{join_code}",
        web::post().to(join_group_controller),
    );
    cfg.route(
        "/groups/{join_code}/members",
        web::get().to(get_group_members_controller),
    );
    cfg.route(
        "/groups/{join_code}/members/{membership_id}",
        web::patch().to(activate_group_member_controller),
    );
    cfg.route(
        "/groups/{join_code}/members/{membership_id}",
        web::delete().to(remove_group_member_controller),
    );

    cfg.route(
        "/admin/memberships",
        web::post().to(admin_add_group_member_controller),
    );
}

/// Membership addressed through the join code of its group
#[derive(Debug)]
enum MemberLookupError {
    GroupNotFound,
    MembershipNotFound,
}

async fn find_group_member(
    ctx: &remindly_infra::RemindlyContext,
    join_code: &str,
    membership_id: &remindly_domain::ID,
) -> Result<remindly_domain::GroupMembership, MemberLookupError> {
    let group = ctx
        .repos
        .groups
        .find_by_join_code(join_code)
        .await
        .ok_or(MemberLookupError::GroupNotFound)?;

    match ctx.repos.memberships.find(membership_id).await {
        Some(membership) if membership.group_id == group.id => Ok(membership),
        _ => Err(MemberLookupError::MembershipNotFound),
    }
}
