use sea_orm::{Database, DatabaseConnection, PaginatorTrait, QueryFilter, prelude::*};

use migration::MigratorTrait;
use uuid::Uuid;
use seeder::{
    AccountKind, CostType, PermissionSeed, Plan, SeedError, Seeder, Step, branch_users, branches,
    catalog, permissions, positions, roles, staff_positions, user_roles, users,
};

async fn seeder_with_db() -> (Seeder, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let seeder = Seeder::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (seeder, db)
}

async fn row_counts(db: &DatabaseConnection) -> Vec<u64> {
    vec![
        seeder::languages::Entity::find().count(db).await.unwrap(),
        seeder::translations::Entity::find().count(db).await.unwrap(),
        seeder::roles::Entity::find().count(db).await.unwrap(),
        permissions::Entity::find().count(db).await.unwrap(),
        seeder::role_permissions::Entity::find().count(db).await.unwrap(),
        branches::Entity::find().count(db).await.unwrap(),
        positions::Entity::find().count(db).await.unwrap(),
        seeder::position_roles::Entity::find().count(db).await.unwrap(),
        staff_positions::Entity::find().count(db).await.unwrap(),
        users::Entity::find().count(db).await.unwrap(),
        seeder::user_roles::Entity::find().count(db).await.unwrap(),
        branch_users::Entity::find().count(db).await.unwrap(),
        seeder::account_categories::Entity::find().count(db).await.unwrap(),
        seeder::account_items::Entity::find().count(db).await.unwrap(),
    ]
}

#[tokio::test]
async fn full_run_is_idempotent() {
    let (seeder, db) = seeder_with_db().await;
    let plan = Plan::full().unwrap();

    let first = seeder.run(&plan).await.unwrap();
    assert_eq!(first.steps.len(), Step::ALL.len());
    assert!(first.totals().created > 0);
    let after_first = row_counts(&db).await;

    let second = seeder.run(&plan).await.unwrap();
    for report in &second.steps {
        assert!(report.tally.is_noop(), "{} wrote {}", report.step, report.tally);
    }
    assert_eq!(second.totals().total(), first.totals().total());
    assert_eq!(row_counts(&db).await, after_first);
}

#[tokio::test]
async fn full_run_leaves_no_translation_gaps() {
    let (seeder, _db) = seeder_with_db().await;
    seeder.run(&Plan::full().unwrap()).await.unwrap();

    assert_eq!(seeder.missing_translations().await.unwrap(), vec![]);
    assert_eq!(
        seeder.translation("vi", "common", "save").await.unwrap(),
        Some("Lưu".to_string())
    );
    assert_eq!(
        seeder.translation("en", "accounting", "title").await.unwrap(),
        Some("Accounting".to_string())
    );
    assert_eq!(seeder.translation("fr", "common", "save").await.unwrap(), None);
}

#[tokio::test]
async fn progress_is_reported_per_committed_step() {
    let (seeder, _db) = seeder_with_db().await;
    let plan = Plan::select(&[Step::Branches], true).unwrap();

    let mut seen = Vec::new();
    let report = seeder
        .run_with_progress(&plan, |step| seen.push((step.step, step.tally.created)))
        .await
        .unwrap();

    assert_eq!(seen, vec![(Step::Branches, catalog::organization::BRANCHES.len())]);
    assert_eq!(report.last_step(), Some(Step::Branches));
}

#[tokio::test]
async fn failing_step_commits_nothing_and_names_the_last_good_step() {
    let (seeder, db) = seeder_with_db().await;
    // Roles are neither selected nor stored, so accounts cannot be linked.
    let plan = Plan::select(&[Step::Languages, Step::Branches, Step::TestAccounts], false).unwrap();

    let failure = seeder.run(&plan).await.unwrap_err();
    assert_eq!(failure.step, Step::TestAccounts);
    assert_eq!(failure.last_completed, Some(Step::Branches));
    assert_eq!(failure.completed.steps.len(), 2);
    assert_eq!(
        failure.source,
        SeedError::Referential {
            entity: "role",
            key: "super-admin".to_string(),
        }
    );
    assert_eq!(
        failure.to_string(),
        "step 'test_accounts' failed: role \"super-admin\" not found"
    );

    assert_eq!(users::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(
        branches::Entity::find().count(&db).await.unwrap(),
        catalog::organization::BRANCHES.len() as u64
    );
}

#[tokio::test]
async fn translations_need_their_languages() {
    let (seeder, db) = seeder_with_db().await;

    let err = seeder.run_step(Step::CoreTranslations).await.unwrap_err();
    assert!(
        matches!(err, SeedError::Referential { entity: "language", .. }),
        "{err}"
    );
    assert_eq!(seeder::translations::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn permissions_keep_the_latest_display_name() {
    let (seeder, db) = seeder_with_db().await;

    let first = seeder
        .seed_permissions(&[PermissionSeed::new("users", "view", "Xem")])
        .await
        .unwrap();
    assert_eq!(first.created, 1);

    let second = seeder
        .seed_permissions(&[PermissionSeed::new("users", "view", "Xem danh sách")])
        .await
        .unwrap();
    assert_eq!((second.created, second.updated), (0, 1));

    let stored = permissions::Entity::find()
        .filter(permissions::Column::Name.eq("users.view"))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].display_name, "Xem danh sách");
    assert_eq!(stored[0].module, "users");
    assert_eq!(stored[0].action, "view");
}

#[tokio::test]
async fn duplicate_permission_names_are_rejected() {
    let (seeder, db) = seeder_with_db().await;

    let err = seeder
        .seed_permissions(&[
            PermissionSeed::new("users", "view", "Xem"),
            PermissionSeed::new("users", "view", "Xem lại"),
        ])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SeedError::Constraint("duplicate permission \"users.view\"".to_string())
    );
    assert_eq!(permissions::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn roles_get_what_their_rules_select() {
    let (seeder, _db) = seeder_with_db().await;
    let plan = Plan::select(&[Step::RolePermissions], true).unwrap();
    seeder.run(&plan).await.unwrap();

    let everything = catalog::access::permissions().len();
    assert_eq!(seeder.role_permission_names("super-admin").await.unwrap().len(), everything);

    let admin = seeder.role_permission_names("admin").await.unwrap();
    assert_eq!(admin.len(), everything - 5);
    assert!(admin.iter().all(|name| !name.starts_with("roles.")));

    assert_eq!(
        seeder.role_permission_names("staff").await.unwrap(),
        vec!["orders.edit", "orders.view"]
    );
    assert_eq!(
        seeder.role_permission_names("teacher").await.unwrap(),
        vec!["attendance.quick_mark", "classes.view"]
    );
    assert!(seeder.role_permission_names("student").await.unwrap().is_empty());

    let manager = seeder.role_permission_names("manager").await.unwrap();
    assert!(manager.contains(&"branches.view".to_string()));
    assert!(!manager.contains(&"branches.edit".to_string()));
}

#[tokio::test]
async fn accounts_are_linked_to_roles_branches_and_managed_branches() {
    let (seeder, db) = seeder_with_db().await;
    seeder
        .run(&Plan::select(&[Step::TestAccounts], true).unwrap())
        .await
        .unwrap();

    let manager = users::Entity::find()
        .filter(users::Column::Email.eq("manager.multi@example.com"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(manager.password, "password");

    let memberships = branch_users::Entity::find()
        .filter(branch_users::Column::UserId.eq(manager.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(memberships.len(), 2);
    assert_eq!(memberships.iter().filter(|m| m.is_primary).count(), 1);

    let hcm = branches::Entity::find()
        .filter(branches::Column::Code.eq("HCM01"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hcm.manager_id, Some(manager.id));

    // Re-running branches must not clear the manager.
    seeder.run_step(Step::Branches).await.unwrap();
    let hcm = branches::Entity::find_by_id(hcm.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hcm.manager_id, Some(manager.id));
}

#[tokio::test]
async fn teachers_hold_their_position_at_their_primary_branch() {
    let (seeder, db) = seeder_with_db().await;
    seeder
        .run(&Plan::select(&[Step::Teachers], true).unwrap())
        .await
        .unwrap();

    assert_eq!(
        users::Entity::find().count(&db).await.unwrap(),
        catalog::organization::TEACHERS.len() as u64
    );
    assert_eq!(
        staff_positions::Entity::find().count(&db).await.unwrap(),
        catalog::organization::TEACHERS.len() as u64
    );

    let teacher = users::Entity::find()
        .filter(users::Column::Email.eq("pham.tuan@school.edu.vn"))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(teacher.name, "Phạm Minh Tuấn");
    assert_eq!(teacher.password, "password");

    let assignment = staff_positions::Entity::find()
        .filter(staff_positions::Column::UserId.eq(teacher.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    let position = positions::Entity::find_by_id(assignment.position_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    let branch = branches::Entity::find_by_id(assignment.branch_id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(position.code, "GVCN");
    assert_eq!(branch.code, "HN01");
    assert_eq!(assignment.department.as_deref(), Some("Khoa Toán - Lý"));

    let membership = branch_users::Entity::find_by_id((branch.id, teacher.id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(membership.is_primary);

    let role_ids: Vec<Uuid> = user_roles::Entity::find()
        .filter(user_roles::Column::UserId.eq(teacher.id))
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|link| link.role_id)
        .collect();
    let role_names: Vec<String> = roles::Entity::find()
        .filter(roles::Column::Id.is_in(role_ids))
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|role| role.name)
        .collect();
    assert_eq!(role_names, vec!["teacher".to_string()]);

    let again = seeder.run_step(Step::Teachers).await.unwrap();
    assert!(again.tally.is_noop(), "{}", again.tally);
}

#[tokio::test]
async fn teachers_need_their_positions() {
    let (seeder, db) = seeder_with_db().await;
    let plan = Plan::select(&[Step::Branches, Step::Teachers], false).unwrap();

    let failure = seeder.run(&plan).await.unwrap_err();
    assert_eq!(failure.step, Step::Teachers);
    assert_eq!(
        failure.source,
        SeedError::Referential {
            entity: "position",
            key: "GV01".to_string(),
        }
    );
    assert_eq!(users::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(staff_positions::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn account_passwords_are_only_set_on_creation() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let plan = Plan::select(&[Step::TestAccounts], true).unwrap();

    let first = Seeder::builder()
        .database(db.clone())
        .default_password("first-secret")
        .build()
        .await
        .unwrap();
    first.run(&plan).await.unwrap();

    let second = Seeder::builder()
        .database(db.clone())
        .default_password("second-secret")
        .build()
        .await
        .unwrap();
    let report = second.run(&plan).await.unwrap();
    assert!(report.totals().is_noop());

    let passwords: Vec<String> = users::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.password)
        .collect();
    assert_eq!(passwords.len(), catalog::organization::ACCOUNTS.len());
    assert!(passwords.iter().all(|password| password == "first-secret"));
}

#[tokio::test]
async fn blank_default_password_is_rejected() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let err = Seeder::builder()
        .database(db)
        .default_password("  ")
        .build()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SeedError::Constraint("default password must not be empty".to_string())
    );
}

#[tokio::test]
async fn account_categories_come_back_typed_with_parents() {
    let (seeder, _db) = seeder_with_db().await;
    seeder.run_step(Step::AccountCategories).await.unwrap();

    let categories = seeder.account_categories().await.unwrap();
    assert_eq!(categories.len(), catalog::accounting::CATEGORIES.len());

    let ielts = categories
        .iter()
        .find(|category| category.code == "THU-HP-IELTS")
        .unwrap();
    assert_eq!(ielts.kind, AccountKind::Income);
    assert_eq!(ielts.parent.as_deref(), Some("THU-HP"));
    assert_eq!(ielts.cost_type, None);

    let infrastructure = categories
        .iter()
        .find(|category| category.code == "CHI-CSVC")
        .unwrap();
    assert_eq!(infrastructure.kind, AccountKind::Expense);
    assert_eq!(infrastructure.cost_type, Some(CostType::Infrastructure));
    assert_eq!(infrastructure.parent, None);
}

#[tokio::test]
async fn account_items_need_their_categories() {
    let (seeder, db) = seeder_with_db().await;

    let err = seeder.run_step(Step::AccountItems).await.unwrap_err();
    assert!(
        matches!(err, SeedError::Referential { entity: "account category", .. }),
        "{err}"
    );
    assert_eq!(seeder::account_items::Entity::find().count(&db).await.unwrap(), 0);
}
