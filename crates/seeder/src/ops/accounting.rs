use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseTransaction, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    AccountKind, CategorySeed, CostType, ItemSeed, Outcome, ResultSeed, SeedError, Tally,
    account_categories, account_items,
    loader::{ensure_unique, key_part},
};

use super::Seeder;

/// A stored account category with its kinds parsed back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountCategory {
    pub code: String,
    pub name: String,
    pub kind: AccountKind,
    pub cost_type: Option<CostType>,
    /// Code of the parent category.
    pub parent: Option<String>,
    pub sort_order: i32,
}

impl Seeder {
    /// Every stored account category, ordered by `sort_order` then code.
    pub async fn account_categories(&self) -> ResultSeed<Vec<AccountCategory>> {
        let models = account_categories::Entity::find()
            .order_by_asc(account_categories::Column::SortOrder)
            .order_by_asc(account_categories::Column::Code)
            .all(&self.database)
            .await?;
        let codes: HashMap<Uuid, String> = models
            .iter()
            .map(|model| (model.id, model.code.clone()))
            .collect();

        models
            .into_iter()
            .map(|model| -> ResultSeed<AccountCategory> {
                Ok(AccountCategory {
                    kind: AccountKind::try_from(model.kind.as_str())?,
                    cost_type: model
                        .cost_type
                        .as_deref()
                        .map(CostType::try_from)
                        .transpose()?,
                    parent: model.parent_id.and_then(|id| codes.get(&id).cloned()),
                    code: model.code,
                    name: model.name,
                    sort_order: model.sort_order,
                })
            })
            .collect()
    }

    /// Upsert categories, parents before children.
    ///
    /// A parent is looked up by code when its child is written, so it must be
    /// part of `seeds` or already stored.
    pub(super) async fn upsert_categories(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[CategorySeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("account category", seeds.iter().map(|seed| seed.code))?;

        let now = Utc::now();
        let mut tally = Tally::default();
        for seed in parents_first(seeds)? {
            let code = key_part("account category code", seed.code)?;
            let parent_id = match seed.parent {
                Some(parent) => Some(require_category(db_tx, parent).await?.id),
                None => None,
            };
            let cost_type = seed.cost_type.map(|cost| cost.code().to_string());
            let description = seed.description.map(ToString::to_string);

            let outcome = match account_categories::Entity::find()
                .filter(account_categories::Column::Code.eq(code.clone()))
                .one(db_tx)
                .await?
            {
                Some(model) => {
                    let same = model.name == seed.name
                        && model.kind == seed.kind.code()
                        && model.cost_type == cost_type
                        && model.parent_id == parent_id
                        && model.description == description
                        && model.sort_order == seed.sort_order
                        && model.is_active;
                    if !same {
                        let mut active: account_categories::ActiveModel = model.into();
                        active.name = ActiveValue::Set(seed.name.to_string());
                        active.kind = ActiveValue::Set(seed.kind.code().to_string());
                        active.cost_type = ActiveValue::Set(cost_type);
                        active.parent_id = ActiveValue::Set(parent_id);
                        active.description = ActiveValue::Set(description);
                        active.sort_order = ActiveValue::Set(seed.sort_order);
                        active.is_active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(db_tx).await?;
                    }
                    Outcome::found(same)
                }
                None => {
                    let active = account_categories::ActiveModel {
                        id: ActiveValue::Set(Uuid::new_v4()),
                        code: ActiveValue::Set(code),
                        name: ActiveValue::Set(seed.name.to_string()),
                        kind: ActiveValue::Set(seed.kind.code().to_string()),
                        cost_type: ActiveValue::Set(cost_type),
                        parent_id: ActiveValue::Set(parent_id),
                        description: ActiveValue::Set(description),
                        sort_order: ActiveValue::Set(seed.sort_order),
                        is_active: ActiveValue::Set(true),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                    };
                    active.insert(db_tx).await?;
                    Outcome::Created
                }
            };
            tracing::debug!(category = seed.code, ?outcome, "account category");
            tally.record(outcome);
        }
        Ok(tally)
    }

    pub(super) async fn upsert_items(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[ItemSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("account item", seeds.iter().map(|seed| seed.code.as_str()))?;

        let now = Utc::now();
        let mut tally = Tally::default();
        for seed in seeds {
            let code = key_part("account item code", &seed.code)?;
            let category = require_category(db_tx, &seed.category).await?;
            if category.kind != seed.kind.code() {
                return Err(SeedError::Constraint(format!(
                    "account item \"{code}\" is {} but category \"{}\" is {}",
                    seed.kind, category.code, category.kind
                )));
            }

            let outcome = match account_items::Entity::find()
                .filter(account_items::Column::Code.eq(code.clone()))
                .one(db_tx)
                .await?
            {
                Some(model) => {
                    let same = model.name == seed.name
                        && model.category_id == category.id
                        && model.kind == seed.kind.code()
                        && model.description == seed.description
                        && model.sort_order == seed.sort_order
                        && model.is_active;
                    if !same {
                        let mut active: account_items::ActiveModel = model.into();
                        active.name = ActiveValue::Set(seed.name.clone());
                        active.category_id = ActiveValue::Set(category.id);
                        active.kind = ActiveValue::Set(seed.kind.code().to_string());
                        active.description = ActiveValue::Set(seed.description.clone());
                        active.sort_order = ActiveValue::Set(seed.sort_order);
                        active.is_active = ActiveValue::Set(true);
                        active.updated_at = ActiveValue::Set(now);
                        active.update(db_tx).await?;
                    }
                    Outcome::found(same)
                }
                None => {
                    let active = account_items::ActiveModel {
                        id: ActiveValue::Set(Uuid::new_v4()),
                        code: ActiveValue::Set(code),
                        name: ActiveValue::Set(seed.name.clone()),
                        category_id: ActiveValue::Set(category.id),
                        kind: ActiveValue::Set(seed.kind.code().to_string()),
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
            tally.record(outcome);
        }
        tracing::debug!(items = seeds.len(), %tally, "account items");
        Ok(tally)
    }
}

async fn require_category(
    db_tx: &DatabaseTransaction,
    code: &str,
) -> ResultSeed<account_categories::Model> {
    account_categories::Entity::find()
        .filter(account_categories::Column::Code.eq(key_part("account category code", code)?))
        .one(db_tx)
        .await?
        .ok_or_else(|| SeedError::missing("account category", code))
}

/// Stable order in which every category follows its parent, when that parent
/// is part of `seeds`.
fn parents_first(seeds: &[CategorySeed]) -> ResultSeed<Vec<&CategorySeed>> {
    let parents: HashMap<&str, Option<&str>> = seeds
        .iter()
        .map(|seed| (seed.code, seed.parent))
        .collect();

    let mut depths = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let mut depth = 0usize;
        let mut current = seed.parent;
        while let Some(parent) = current {
            depth += 1;
            if depth > seeds.len() {
                return Err(SeedError::Constraint(format!(
                    "account category \"{}\" is its own ancestor",
                    seed.code
                )));
            }
            current = parents.get(parent).copied().flatten();
        }
        depths.push((depth, seed));
    }
    depths.sort_by_key(|(depth, _)| *depth);
    Ok(depths.into_iter().map(|(_, seed)| seed).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(code: &'static str, parent: Option<&'static str>) -> CategorySeed {
        CategorySeed {
            code,
            name: code,
            kind: AccountKind::Expense,
            cost_type: None,
            parent,
            description: None,
            sort_order: 0,
        }
    }

    #[test]
    fn children_follow_their_parents() {
        let seeds = [
            category("CHI-LUONG-GV", Some("CHI-LUONG")),
            category("CHI-LUONG", Some("CHI")),
            category("CHI", None),
            category("CHI-MKT", None),
        ];
        let codes: Vec<&str> = parents_first(&seeds)
            .unwrap()
            .into_iter()
            .map(|seed| seed.code)
            .collect();
        assert_eq!(codes, vec!["CHI", "CHI-MKT", "CHI-LUONG", "CHI-LUONG-GV"]);
    }

    #[test]
    fn ancestry_cycles_are_rejected() {
        let seeds = [category("A", Some("B")), category("B", Some("A"))];
        assert_eq!(
            parents_first(&seeds).unwrap_err(),
            SeedError::Constraint("account category \"A\" is its own ancestor".to_string())
        );
    }
}
