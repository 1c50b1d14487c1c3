use std::collections::{BTreeSet, HashMap, HashSet};

use sea_orm::{QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{ResultSeed, languages, translations};

use super::Seeder;

/// A (`group`, `key`) that some active locale has and `locale` lacks.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingTranslation {
    pub locale: String,
    pub group: String,
    pub key: String,
}

impl std::fmt::Display for MissingTranslation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}.{}", self.locale, self.group, self.key)
    }
}

impl Seeder {
    /// Translations missing for an active locale, sorted by locale, group and key.
    pub async fn missing_translations(&self) -> ResultSeed<Vec<MissingTranslation>> {
        let locales = languages::Entity::find()
            .filter(languages::Column::IsActive.eq(true))
            .order_by_asc(languages::Column::SortOrder)
            .all(&self.database)
            .await?;
        let active: HashSet<Uuid> = locales.iter().map(|language| language.id).collect();

        let mut all_keys: BTreeSet<(String, String)> = BTreeSet::new();
        let mut present: HashMap<Uuid, BTreeSet<(String, String)>> = HashMap::new();
        for model in translations::Entity::find().all(&self.database).await? {
            if !active.contains(&model.language_id) {
                continue;
            }
            all_keys.insert((model.group.clone(), model.key.clone()));
            present
                .entry(model.language_id)
                .or_default()
                .insert((model.group, model.key));
        }

        let mut missing = Vec::new();
        for language in &locales {
            let have = present.get(&language.id);
            for (group, key) in &all_keys {
                let found = have.is_some_and(|keys| keys.contains(&(group.clone(), key.clone())));
                if !found {
                    missing.push(MissingTranslation {
                        locale: language.code.clone(),
                        group: group.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        missing.sort();
        Ok(missing)
    }
}
