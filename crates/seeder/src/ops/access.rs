use chrono::Utc;
use sea_orm::{
    ActiveValue, DatabaseTransaction, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
};
use uuid::Uuid;

use crate::{
    GrantRule, Outcome, PermissionSeed, ResultSeed, RoleGrant, RoleSeed, SeedError, Tally,
    loader::{ensure_unique, key_part},
    permissions, role_permissions, roles,
};

use super::{Seeder, with_tx};

impl Seeder {
    /// Upsert permissions in their own transaction.
    pub async fn seed_permissions(&self, seeds: &[PermissionSeed]) -> ResultSeed<Tally> {
        with_tx!(self, |db_tx| self.upsert_permissions(&db_tx, seeds).await)
    }

    /// Names of the permissions granted to `role`, sorted.
    pub async fn role_permission_names(&self, role: &str) -> ResultSeed<Vec<String>> {
        let role = roles::Entity::find()
            .filter(roles::Column::Name.eq(key_part("role", role)?))
            .one(&self.database)
            .await?
            .ok_or_else(|| SeedError::missing("role", role))?;

        let granted = permissions::Entity::find()
            .inner_join(role_permissions::Entity)
            .filter(role_permissions::Column::RoleId.eq(role.id))
            .order_by_asc(permissions::Column::Name)
            .all(&self.database)
            .await?;
        Ok(granted.into_iter().map(|model| model.name).collect())
    }

    pub(super) async fn upsert_roles(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[RoleSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("role", seeds.iter().map(|seed| seed.name))?;

        let now = Utc::now();
        let mut tally = Tally::default();
        for seed in seeds {
            let name = key_part("role", seed.name)?;
            let description = seed.description.map(ToString::to_string);
            let outcome = match roles::Entity::find()
                .filter(roles::Column::Name.eq(name.clone()))
                .one(db_tx)
                .await?
            {
                Some(model) => {
                    let same = model.display_name == seed.display_name
                        && model.description == description
                        && model.is_active;
                    if !same {
                        let mut active: roles::ActiveModel = model.into();
                        active.display_name = ActiveValue::Set(seed.display_name.to_string());
                        active.description = ActiveValue::Set(description);
                        active.is_active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(db_tx).await?;
                    }
                    Outcome::found(same)
                }
                None => {
                    let active = roles::ActiveModel {
                        id: ActiveValue::Set(Uuid::new_v4()),
                        name: ActiveValue::Set(name),
                        display_name: ActiveValue::Set(seed.display_name.to_string()),
                        description: ActiveValue::Set(description),
                        is_active: ActiveValue::Set(true),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                    };
                    active.insert(db_tx).await?;
                    Outcome::Created
                }
            };
            tracing::debug!(role = seed.name, ?outcome, "role");
            tally.record(outcome);
        }
        Ok(tally)
    }

    pub(super) async fn upsert_permissions(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[PermissionSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("permission", seeds.iter().map(|seed| seed.name.as_str()))?;

        let now = Utc::now();
        let mut tally = Tally::default();
        for seed in seeds {
            let name = key_part("permission", &seed.name)?;
            let module = key_part("module", &seed.module)?;
            let action = key_part("action", &seed.action)?;
            let outcome = match permissions::Entity::find()
                .filter(permissions::Column::Name.eq(name.clone()))
                .one(db_tx)
                .await?
            {
                Some(model) => {
                    let same = model.module == module
                        && model.action == action
                        && model.display_name == seed.display_name
                        && model.description == seed.description
                        && model.sort_order == seed.sort_order
                        && model.is_active;
                    if !same {
                        let mut active: permissions::ActiveModel = model.into();
                        active.module = ActiveValue::Set(module);
                        active.action = ActiveValue::Set(action);
                        active.display_name = ActiveValue::Set(seed.display_name.clone());
                        active.description = ActiveValue::Set(seed.description.clone());
                        active.sort_order = ActiveValue::Set(seed.sort_order);
                        active.is_active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(db_tx).await?;
                    }
                    Outcome::found(same)
                }
                None => {
                    let active = permissions::ActiveModel {
                        id: ActiveValue::Set(Uuid::new_v4()),
                        name: ActiveValue::Set(name),
                        module: ActiveValue::Set(module),
                        action: ActiveValue::Set(action),
                        display_name: ActiveValue::Set(seed.display_name.clone()),
                        description: ActiveValue::Set(seed.description.clone()),
                        sort_order: ActiveValue::Set(seed.sort_order),
                        is_active: ActiveValue::Set(true),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                    };
                    active.insert(db_tx).await?;
                    Outcome::Created
                }
            };
            tracing::debug!(permission = %seed.name, ?outcome, "permission");
            tally.record(outcome);
        }
        Ok(tally)
    }

    /// Attach to each role every permission its rules select.
    pub(super) async fn grant_permissions(
        &self,
        db_tx: &DatabaseTransaction,
        grants: &[RoleGrant],
    ) -> ResultSeed<Tally> {
        let catalog = permissions::Entity::find()
            .order_by_asc(permissions::Column::Name)
            .all(db_tx)
            .await?;

        let mut tally = Tally::default();
        for grant in grants {
            let role = roles::Entity::find()
                .filter(roles::Column::Name.eq(key_part("role", grant.role)?))
                .one(db_tx)
                .await?
                .ok_or_else(|| SeedError::missing("role", grant.role))?;

            for rule in grant.rules {
                if let GrantRule::Names(names) = rule {
                    for name in names.iter() {
                        if !catalog.iter().any(|permission| permission.name == *name) {
                            return Err(SeedError::missing("permission", *name));
                        }
                    }
                }
            }

            let selected = catalog.iter().filter(|permission| {
                grant.rules.iter().any(|rule| {
                    rule.matches(&permission.module, &permission.action, &permission.name)
                })
            });
            let mut granted = Tally::default();
            for permission in selected {
                granted.record(attach_permission(db_tx, role.id, permission.id).await?);
            }
            tracing::debug!(role = grant.role, %granted, "grants");
            tally.merge(granted);
        }
        Ok(tally)
    }
}

/// Insert the (role, permission) pair unless it is already there.
async fn attach_permission(
    db_tx: &DatabaseTransaction,
    role_id: Uuid,
    permission_id: Uuid,
) -> ResultSeed<Outcome> {
    if role_permissions::Entity::find_by_id((role_id, permission_id))
        .one(db_tx)
        .await?
        .is_some()
    {
        return Ok(Outcome::Unchanged);
    }
    let active = role_permissions::ActiveModel {
        role_id: ActiveValue::Set(role_id),
        permission_id: ActiveValue::Set(permission_id),
    };
    active.insert(db_tx).await?;
    Ok(Outcome::Created)
}
