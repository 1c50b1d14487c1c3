use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseTransaction, QueryFilter, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    LanguageSeed, Outcome, ResultSeed, SeedError, Tally, TranslationRecord,
    adapters::dedupe,
    languages,
    loader::{ensure_unique, key_part},
    translations,
};

use super::{Seeder, with_tx};

impl Seeder {
    /// Upsert `languages` in their own transaction.
    pub async fn seed_languages(&self, seeds: &[LanguageSeed]) -> ResultSeed<Tally> {
        with_tx!(self, |db_tx| self.upsert_languages(&db_tx, seeds).await)
    }

    /// Upsert translation records in their own transaction.
    ///
    /// Every record's key parts are normalized again, so a blank part is a
    /// constraint error. Duplicates inside `records` follow the configured
    /// policy. Every locale is resolved before the first write, so an unknown
    /// locale commits nothing.
    pub async fn seed_translations(&self, records: Vec<TranslationRecord>) -> ResultSeed<Tally> {
        let records = records
            .iter()
            .map(|record| {
                TranslationRecord::new(&record.locale, &record.group, &record.key, &record.value)
            })
            .collect::<ResultSeed<Vec<_>>>()?;
        let records = dedupe(records, self.duplicate_policy)?;
        with_tx!(self, |db_tx| self.upsert_translations(&db_tx, &records).await)
    }

    /// Stored value of `group.key` in `locale`, if any.
    pub async fn translation(
        &self,
        locale: &str,
        group: &str,
        key: &str,
    ) -> ResultSeed<Option<String>> {
        let Some(language) = languages::Entity::find()
            .filter(languages::Column::Code.eq(key_part("locale", locale)?))
            .one(&self.database)
            .await?
        else {
            return Ok(None);
        };

        let model = translations::Entity::find()
            .filter(translations::Column::LanguageId.eq(language.id))
            .filter(translations::Column::Group.eq(key_part("group", group)?))
            .filter(translations::Column::Key.eq(key_part("key", key)?))
            .one(&self.database)
            .await?;
        Ok(model.map(|model| model.value))
    }

    pub(super) async fn upsert_languages(
        &self,
        db_tx: &DatabaseTransaction,
        seeds: &[LanguageSeed],
    ) -> ResultSeed<Tally> {
        ensure_unique("language", seeds.iter().map(|seed| seed.code))?;
        if seeds.iter().filter(|seed| seed.is_default).count() > 1 {
            return Err(SeedError::Constraint(
                "more than one default language".to_string(),
            ));
        }

        let mut tally = Tally::default();
        for seed in seeds {
            let outcome = self.upsert_language(db_tx, seed).await?;
            tracing::debug!(code = seed.code, ?outcome, "language");
            tally.record(outcome);
        }

        // A new default displaces whatever stored row held the flag before.
        if let Some(default) = seeds.iter().find(|seed| seed.is_default) {
            let code = key_part("language code", default.code)?;
            let displaced = languages::Entity::find()
                .filter(languages::Column::IsDefault.eq(true))
                .filter(languages::Column::Code.ne(code))
                .all(db_tx)
                .await?;
            for model in displaced {
                tracing::debug!(code = %model.code, "language no longer default");
                let mut active: languages::ActiveModel = model.into();
                active.is_default = ActiveValue::Set(false);
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(db_tx).await?;
                tally.record(Outcome::Updated);
            }
        }
        Ok(tally)
    }

    async fn upsert_language(
        &self,
        db_tx: &DatabaseTransaction,
        seed: &LanguageSeed,
    ) -> ResultSeed<Outcome> {
        let code = key_part("language code", seed.code)?;
        let now = Utc::now();
        let flag = seed.flag.map(ToString::to_string);

        match languages::Entity::find()
            .filter(languages::Column::Code.eq(code.clone()))
            .one(db_tx)
            .await?
        {
            Some(model) => {
                let same = model.name == seed.name
                    && model.flag == flag
                    && model.direction == seed.direction
                    && model.is_default == seed.is_default
                    && model.is_active == seed.is_active
                    && model.sort_order == seed.sort_order;
                if !same {
                    let mut active: languages::ActiveModel = model.into();
                    active.name = ActiveValue::Set(seed.name.to_string());
                    active.flag = ActiveValue::Set(flag);
                    active.direction = ActiveValue::Set(seed.direction.to_string());
                    active.is_default = ActiveValue::Set(seed.is_default);
                    active.is_active = ActiveValue::Set(seed.is_active);
                    active.sort_order = ActiveValue::Set(seed.sort_order);
                    active.updated_at = ActiveValue::Set(now);
                    active.update(db_tx).await?;
                }
                Ok(Outcome::found(same))
            }
            None => {
                let active = languages::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    code: ActiveValue::Set(code),
                    name: ActiveValue::Set(seed.name.to_string()),
                    flag: ActiveValue::Set(flag),
                    direction: ActiveValue::Set(seed.direction.to_string()),
                    is_default: ActiveValue::Set(seed.is_default),
                    is_active: ActiveValue::Set(seed.is_active),
                    sort_order: ActiveValue::Set(seed.sort_order),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                };
                active.insert(db_tx).await?;
                Ok(Outcome::Created)
            }
        }
    }

    pub(super) async fn upsert_translations(
        &self,
        db_tx: &DatabaseTransaction,
        records: &[TranslationRecord],
    ) -> ResultSeed<Tally> {
        let locales = self.resolve_locales(db_tx, records).await?;

        let mut tally = Tally::default();
        for record in records {
            let language_id = locales
                .get(record.locale.as_str())
                .copied()
                .ok_or_else(|| SeedError::missing("language", record.locale.clone()))?;
            let outcome = self.upsert_translation(db_tx, language_id, record).await?;
            tally.record(outcome);
        }
        tracing::debug!(records = records.len(), %tally, "translations");
        Ok(tally)
    }

    /// Map every locale used by `records` to its language id.
    async fn resolve_locales(
        &self,
        db_tx: &DatabaseTransaction,
        records: &[TranslationRecord],
    ) -> ResultSeed<HashMap<String, Uuid>> {
        let mut locales: HashMap<String, Uuid> = HashMap::new();
        for record in records {
            if locales.contains_key(&record.locale) {
                continue;
            }
            let language = languages::Entity::find()
                .filter(languages::Column::Code.eq(record.locale.clone()))
                .one(db_tx)
                .await?
                .ok_or_else(|| SeedError::missing("language", record.locale.clone()))?;
            locales.insert(record.locale.clone(), language.id);
        }
        Ok(locales)
    }

    async fn upsert_translation(
        &self,
        db_tx: &DatabaseTransaction,
        language_id: Uuid,
        record: &TranslationRecord,
    ) -> ResultSeed<Outcome> {
        let now = Utc::now();
        match translations::Entity::find()
            .filter(translations::Column::LanguageId.eq(language_id))
            .filter(translations::Column::Group.eq(record.group.clone()))
            .filter(translations::Column::Key.eq(record.key.clone()))
            .one(db_tx)
            .await?
        {
            Some(model) => {
                let same = model.value == record.value;
                if !same {
                    let mut active: translations::ActiveModel = model.into();
                    active.value = ActiveValue::Set(record.value.clone());
                    active.updated_at = ActiveValue::Set(now);
                    active.update(db_tx).await?;
                }
                Ok(Outcome::found(same))
            }
            None => {
                let active = translations::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    language_id: ActiveValue::Set(language_id),
                    group: ActiveValue::Set(record.group.clone()),
                    key: ActiveValue::Set(record.key.clone()),
                    value: ActiveValue::Set(record.value.clone()),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                };
                active.insert(db_tx).await?;
                Ok(Outcome::Created)
            }
        }
    }
}
