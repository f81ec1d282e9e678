mod helpers;

use helpers::setup::spawn_app;
use remindly_sdk::{
    APIError, CreateCustomerInput, CreateGroupInput, GroupMemberInput, JoinGroupInput,
    MembershipRole, MembershipStatus, RemindlySDK, ID,
};

fn join_input(join_code: &str, phone_number: &str) -> JoinGroupInput {
    JoinGroupInput {
        join_code: join_code.into(),
        name: "Ada".into(),
        surname: "Lovelace".into(),
        phone_number: phone_number.into(),
        email: Some("ada@x.com".into()),
    }
}

async fn create_group(sdk: &RemindlySDK) -> remindly_sdk::GroupDTO {
    sdk.group
        .create(CreateGroupInput {
            name: "Book club".into(),
            description: None,
        })
        .await
        .expect("Expected to create group")
        .group
}

#[actix_web::main]
#[test]
async fn test_create_and_list_groups() {
    let (_, sdk) = spawn_app().await;

    let first = create_group(&sdk).await;
    assert_eq!(first.join_code.len(), 8);
    assert_eq!(first.description, "");
    assert_eq!(first.members, 0);
    let second = create_group(&sdk).await;
    assert_ne!(first.join_code, second.join_code);

    sdk.group
        .join(join_input(&first.join_code, "5551234567"))
        .await
        .unwrap();

    let groups = sdk.group.list().await.unwrap().groups;
    assert_eq!(groups.len(), 2);
    let listed_first = groups.iter().find(|g| g.id == first.id).unwrap();
    assert_eq!(listed_first.members, 1);
}

#[actix_web::main]
#[test]
async fn test_empty_group_name_is_rejected() {
    let (_, sdk) = spawn_app().await;
    let res = sdk
        .group
        .create(CreateGroupInput {
            name: " ".into(),
            description: Some("desc".into()),
        })
        .await;
    assert!(matches!(res, Err(APIError::BadClientData(_))));
}

#[actix_web::main]
#[test]
async fn test_join_group_twice_is_rejected() {
    let (_, sdk) = spawn_app().await;
    let group = create_group(&sdk).await;

    let res = sdk
        .group
        .join(join_input(&group.join_code, "5551234567"))
        .await
        .expect("Expected to join group");
    assert_eq!(res.member.role, MembershipRole::Member);
    assert_eq!(res.member.status, MembershipStatus::Pending);

    match sdk
        .group
        .join(join_input(&group.join_code, "5551234567"))
        .await
    {
        Err(APIError::BadClientData(message)) => {
            assert!(message.contains("Already registered"))
        }
        other => panic!("Expected the second join to fail, got {:?}", other),
    }

    let members = sdk.group.members(&group.join_code).await.unwrap().members;
    assert_eq!(members.len(), 1);
}

#[actix_web::main]
#[test]
async fn test_join_with_invalid_code() {
    let (_, sdk) = spawn_app().await;
    let res = sdk.group.join(join_input("notreal1", "5551234567")).await;
    assert!(matches!(res, Err(APIError::NotFound(_))));
    assert!(matches!(
        sdk.group.members("notreal1").await,
        Err(APIError::NotFound(_))
    ));
}

#[actix_web::main]
#[test]
async fn test_activate_and_remove_member() {
    let (_, sdk) = spawn_app().await;
    let group = create_group(&sdk).await;
    let member = sdk
        .group
        .join(join_input(&group.join_code, "5551234567"))
        .await
        .unwrap()
        .member;

    let activated = sdk
        .group
        .activate_member(GroupMemberInput {
            join_code: group.join_code.clone(),
            membership_id: member.id,
        })
        .await
        .expect("Expected to activate member")
        .member;
    assert_eq!(activated.status, MembershipStatus::Active);

    let res = sdk
        .group
        .activate_member(GroupMemberInput {
            join_code: group.join_code.clone(),
            membership_id: member.id,
        })
        .await;
    assert!(matches!(res, Err(APIError::BadClientData(_))));

    let removed = sdk
        .group
        .remove_member(GroupMemberInput {
            join_code: group.join_code.clone(),
            membership_id: member.id,
        })
        .await
        .expect("Expected to remove member")
        .member;
    assert_eq!(removed.id, member.id);
    assert!(sdk
        .group
        .members(&group.join_code)
        .await
        .unwrap()
        .members
        .is_empty());

    let res = sdk
        .group
        .remove_member(GroupMemberInput {
            join_code: group.join_code.clone(),
            membership_id: member.id,
        })
        .await;
    assert!(matches!(res, Err(APIError::NotFound(_))));
}

#[actix_web::main]
#[test]
async fn test_admin_add_member() {
    let (app, sdk) = spawn_app().await;
    let group = create_group(&sdk).await;
    let customer = sdk
        .customer
        .create(CreateCustomerInput {
            name: "Grace".into(),
            surname: "Hopper".into(),
            phone_number: "5559876543".into(),
            email: None,
        })
        .await
        .unwrap()
        .customer;

    let res = sdk.group.admin_add_member(customer.id, group.id).await;
    assert!(matches!(res, Err(APIError::Unauthorized)));

    let admin = app.admin_sdk();
    let res = admin
        .group
        .admin_add_member(customer.id, group.id)
        .await
        .expect("Expected admin to add member");
    assert!(res.created);
    assert_eq!(res.member.customer_id, customer.id);

    let res = admin
        .group
        .admin_add_member(customer.id, group.id)
        .await
        .unwrap();
    assert!(!res.created);

    let res = admin.group.admin_add_member(ID::new(), group.id).await;
    assert!(matches!(res, Err(APIError::NotFound(_))));
}

#[actix_web::main]
#[test]
async fn test_delete_group_removes_memberships() {
    let (_, sdk) = spawn_app().await;
    let group = create_group(&sdk).await;
    sdk.group
        .join(join_input(&group.join_code, "5551234567"))
        .await
        .unwrap();

    let deleted = sdk.group.delete(group.id).await.unwrap().group;
    assert_eq!(deleted.id, group.id);
    assert!(sdk.group.list().await.unwrap().groups.is_empty());
    assert!(matches!(
        sdk.group.delete(group.id).await,
        Err(APIError::NotFound(_))
    ));
}
