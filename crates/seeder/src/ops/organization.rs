use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseTransaction, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{
    AccountSeed, BranchSeed, Outcome, PositionSeed, ResultSeed, SeedError, Tally, TeacherSeed,
    branch_users, branches,
    loader::{ensure_unique, key_part},
    position_roles, positions, roles, staff_positions, user_roles, users,
};

use super::Seeder;

impl Seeder {
    pub(super) async fn upsert_branches(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[BranchSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("branch", seeds.iter().map(|seed| seed.code))?;

        let now = Utc::now();
        let mut tally = Tally::default();
        for seed in seeds {
            let code = key_part("branch code", seed.code)?;
            let text = |value: Option<&str>| value.map(ToString::to_string);
            let outcome = match branches::Entity::find()
                .filter(branches::Column::Code.eq(code.clone()))
                .one(db_tx)
                .await?
            {
                Some(model) => {
                    let same = model.name == seed.name
                        && model.phone == text(seed.phone)
                        && model.email == text(seed.email)
                        && model.address == text(seed.address)
                        && model.city == text(seed.city)
                        && model.district == text(seed.district)
                        && model.ward == text(seed.ward)
                        && model.description == text(seed.description)
                        && model.is_headquarters == seed.is_headquarters
                        && model.is_active;
                    if !same {
                        // manager_id belongs to the test accounts step.
                        let mut active: branches::ActiveModel = model.into();
                        active.name = ActiveValue::Set(seed.name.to_string());
                        active.phone = ActiveValue::Set(text(seed.phone));
                        active.email = ActiveValue::Set(text(seed.email));
                        active.address = ActiveValue::Set(text(seed.address));
                        active.city = ActiveValue::Set(text(seed.city));
                        active.district = ActiveValue::Set(text(seed.district));
                        active.ward = ActiveValue::Set(text(seed.ward));
                        active.description = ActiveValue::Set(text(seed.description));
                        active.is_headquarters = ActiveValue::Set(seed.is_headquarters);
                        active.is_active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(db_tx).await?;
                    }
                    Outcome::found(same)
                }
                None => {
                    let active = branches::ActiveModel {
                        id: ActiveValue::Set(Uuid::new_v4()),
                        code: ActiveValue::Set(code),
                        name: ActiveValue::Set(seed.name.to_string()),
                        phone: ActiveValue::Set(text(seed.phone)),
                        email: ActiveValue::Set(text(seed.email)),
                        address: ActiveValue::Set(text(seed.address)),
                        city: ActiveValue::Set(text(seed.city)),
                        district: ActiveValue::Set(text(seed.district)),
                        ward: ActiveValue::Set(text(seed.ward)),
                        description: ActiveValue::Set(text(seed.description)),
                        is_headquarters: ActiveValue::Set(seed.is_headquarters),
                        is_active: ActiveValue::Set(true),
                        manager_id: ActiveValue::Set(None),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                    };
                    active.insert(db_tx).await?;
                    Outcome::Created
                }
            };
            tracing::debug!(branch = seed.code, ?outcome, "branch");
            tally.record(outcome);
        }
        Ok(tally)
    }

    /// Upsert positions and attach the roles each one implies.
    pub(super) async fn upsert_positions(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[PositionSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("position", seeds.iter().map(|seed| seed.code))?;

        let now = Utc::now();
        let mut tally = Tally::default();
        for seed in seeds {
            let code = key_part("position code", seed.code)?;
            let description = seed.description.map(ToString::to_string);
            let (position_id, outcome) = match positions::Entity::find()
                .filter(positions::Column::Code.eq(code.clone()))
                .one(db_tx)
                .await?
            {
                Some(model) => {
                    let id = model.id;
                    let same = model.name == seed.name
                        && model.level == seed.level
                        && model.description == description
                        && model.sort_order == seed.sort_order
                        && model.is_active;
                    if !same {
                        let mut active: positions::ActiveModel = model.into();
                        active.name = ActiveValue::Set(seed.name.to_string());
                        active.level = ActiveValue::Set(seed.level);
                        active.description = ActiveValue::Set(description);
                        active.sort_order = ActiveValue::Set(seed.sort_order);
                        active.is_active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(db_tx).await?;
                    }
                    (id, Outcome::found(same))
                }
                None => {
                    let id = Uuid::new_v4();
                    let active = positions::ActiveModel {
                        id: ActiveValue::Set(id),
                        code: ActiveValue::Set(code),
                        name: ActiveValue::Set(seed.name.to_string()),
                        level: ActiveValue::Set(seed.level),
                        description: ActiveValue::Set(description),
                        sort_order: ActiveValue::Set(seed.sort_order),
                        is_active: ActiveValue::Set(true),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                    };
                    active.insert(db_tx).await?;
                    (id, Outcome::Created)
                }
            };
            tally.record(outcome);

            for role in seed.roles {
                let role_id = require_role(db_tx, role).await?;
                let attached = if position_roles::Entity::find_by_id((position_id, role_id))
                    .one(db_tx)
                    .await?
                    .is_some()
                {
                    Outcome::Unchanged
                } else {
                    position_roles::ActiveModel {
                        position_id: ActiveValue::Set(position_id),
                        role_id: ActiveValue::Set(role_id),
                    }
                    .insert(db_tx)
                    .await?;
                    Outcome::Created
                };
                tally.record(attached);
            }
            tracing::debug!(position = seed.code, ?outcome, "position");
        }
        Ok(tally)
    }

    /// Upsert demo users with their roles, branch memberships and managed branches.
    ///
    /// The stored password is set on creation only, so a password changed
    /// afterwards is left alone.
    pub(super) async fn upsert_accounts(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[AccountSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("account", seeds.iter().map(|seed| seed.email))?;
        ensure_unique(
            "managed branch",
            seeds.iter().flat_map(|seed| seed.manages.iter().copied()),
        )?;

        let now = Utc::now();
        let mut tally = Tally::default();
        for seed in seeds {
            let (user_id, outcome) = self.upsert_user(db_tx, seed.name, seed.email).await?;
            tally.record(outcome);

            for role in seed.roles {
                let role_id = require_role(db_tx, role).await?;
                tally.record(attach_role(db_tx, user_id, role_id).await?);
            }

            for (index, branch) in seed.branches.iter().enumerate() {
                let branch = require_branch(db_tx, branch).await?;
                tally.record(attach_branch(db_tx, branch.id, user_id, index == 0).await?);
            }

            for branch in seed.manages {
                let branch = require_branch(db_tx, branch).await?;
                if branch.manager_id == Some(user_id) {
                    tally.record(Outcome::Unchanged);
                    continue;
                }
                let mut active: branches::ActiveModel = branch.into();
                active.manager_id = ActiveValue::Set(Some(user_id));
                active.updated_at = ActiveValue::Set(now);
                active.update(db_tx).await?;
                tally.record(Outcome::Updated);
            }
            tracing::debug!(email = seed.email, ?outcome, "account");
        }
        Ok(tally)
    }

    /// Upsert sample teachers, each holding one position at their primary branch.
    ///
    /// A teacher gets every role their position implies. Like demo accounts,
    /// the password is only set when the user is created.
    pub(super) async fn upsert_teachers(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[TeacherSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("teacher", seeds.iter().map(|seed| seed.email))?;

        let mut tally = Tally::default();
        for seed in seeds {
            let (user_id, outcome) = self.upsert_user(db_tx, seed.name, seed.email).await?;
            tally.record(outcome);

            let branch = require_branch(db_tx, seed.branch).await?;
            let position_id = require_position(db_tx, seed.position).await?;

            let implied = position_roles::Entity::find()
                .filter(position_roles::Column::PositionId.eq(position_id))
                .all(db_tx)
                .await?;
            for link in implied {
                tally.record(attach_role(db_tx, user_id, link.role_id).await?);
            }

            tally.record(attach_branch(db_tx, branch.id, user_id, true).await?);
            tally.record(
                assign_position(db_tx, user_id, branch.id, position_id, seed.department).await?,
            );
            tracing::debug!(
                email = seed.email,
                position = seed.position,
                ?outcome,
                "teacher"
            );
        }
        Ok(tally)
    }

    /// User keyed by lowercased `email`; only `name` is kept in sync.
    async fn upsert_user(
        &self,
        db_tx: &DatabaseTransaction,
        name: &str,
        email: &str,
    ) -> ResultSeed<(Uuid, Outcome)> {
        let email = key_part("email", email)?.to_lowercase();
        let now = Utc::now();
        match users::Entity::find()
            .filter(users::Column::Email.eq(email.clone()))
            .one(db_tx)
            .await?
        {
            Some(model) => {
                let id = model.id;
                let same = model.name == name;
                if !same {
                    let mut active: users::ActiveModel = model.into();
                    active.name = ActiveValue::Set(name.to_string());
                    active.updated_at = ActiveValue::Set(now);
                    active.update(db_tx).await?;
                }
                Ok((id, Outcome::found(same)))
            }
            None => {
                let id = Uuid::new_v4();
                let active = users::ActiveModel {
                    id: ActiveValue::Set(id),
                    email: ActiveValue::Set(email),
                    name: ActiveValue::Set(name.to_string()),
                    password: ActiveValue::Set(self.default_password.clone()),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                };
                active.insert(db_tx).await?;
                Ok((id, Outcome::Created))
            }
        }
    }
}

async fn require_role(db_tx: &DatabaseTransaction, name: &str) -> ResultSeed<Uuid> {
    let role = roles::Entity::find()
        .filter(roles::Column::Name.eq(key_part("role", name)?))
        .one(db_tx)
        .await?
        .ok_or_else(|| SeedError::missing("role", name))?;
    Ok(role.id)
}

async fn require_position(db_tx: &DatabaseTransaction, code: &str) -> ResultSeed<Uuid> {
    let position = positions::Entity::find()
        .filter(positions::Column::Code.eq(key_part("position code", code)?))
        .one(db_tx)
        .await?
        .ok_or_else(|| SeedError::missing("position", code))?;
    Ok(position.id)
}

async fn require_branch(db_tx: &DatabaseTransaction, code: &str) -> ResultSeed<branches::Model> {
    branches::Entity::find()
        .filter(branches::Column::Code.eq(key_part("branch code", code)?))
        .one(db_tx)
        .await?
        .ok_or_else(|| SeedError::missing("branch", code))
}

async fn attach_role(
    db_tx: &DatabaseTransaction,
    user_id: Uuid,
    role_id: Uuid,
) -> ResultSeed<Outcome> {
    if user_roles::Entity::find_by_id((user_id, role_id))
        .one(db_tx)
        .await?
        .is_some()
    {
        return Ok(Outcome::Unchanged);
    }
    user_roles::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db_tx)
    .await?;
    Ok(Outcome::Created)
}

/// Membership keyed by (branch, user); `is_primary` is the payload.
async fn attach_branch(
    db_tx: &DatabaseTransaction,
    branch_id: Uuid,
    user_id: Uuid,
    is_primary: bool,
) -> ResultSeed<Outcome> {
    match branch_users::Entity::find_by_id((branch_id, user_id))
        .one(db_tx)
        .await?
    {
        Some(model) if model.is_primary == is_primary => Ok(Outcome::Unchanged),
        Some(model) => {
            let mut active: branch_users::ActiveModel = model.into();
            active.is_primary = ActiveValue::Set(is_primary);
            active.update(db_tx).await?;
            Ok(Outcome::Updated)
        }
        None => {
            branch_users::ActiveModel {
                branch_id: ActiveValue::Set(branch_id),
                user_id: ActiveValue::Set(user_id),
                is_primary: ActiveValue::Set(is_primary),
            }
            .insert(db_tx)
            .await?;
            Ok(Outcome::Created)
        }
    }
}

/// Assignment keyed by (user, branch); position and department are the payload.
async fn assign_position(
    db_tx: &DatabaseTransaction,
    user_id: Uuid,
    branch_id: Uuid,
    position_id: Uuid,
    department: Option<&str>,
) -> ResultSeed<Outcome> {
    let department = department.map(ToString::to_string);
    match staff_positions::Entity::find_by_id((user_id, branch_id))
        .one(db_tx)
        .await?
    {
        Some(model) if model.position_id == position_id && model.department == department => {
            Ok(Outcome::Unchanged)
        }
        Some(model) => {
            let mut active: staff_positions::ActiveModel = model.into();
            active.position_id = ActiveValue::Set(position_id);
            active.department = ActiveValue::Set(department);
            active.update(db_tx).await?;
            Ok(Outcome::Updated)
        }
        None => {
            staff_positions::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                branch_id: ActiveValue::Set(branch_id),
                position_id: ActiveValue::Set(position_id),
                department: ActiveValue::Set(department),
            }
            .insert(db_tx)
            .await?;
            Ok(Outcome::Created)
        }
    }
}
