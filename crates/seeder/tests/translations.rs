use std::path::PathBuf;

use sea_orm::{Database, DatabaseConnection, PaginatorTrait, prelude::*};
use uuid::Uuid;

use migration::MigratorTrait;
use seeder::{
    DuplicatePolicy, GroupTable, LanguageSeed, MissingTranslation, SeedError, Seeder, Step,
    TranslationRecord, adapters, catalog, languages, translations,
};

async fn connect() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

async fn seeder_with_languages(policy: DuplicatePolicy) -> (Seeder, DatabaseConnection) {
    let db = connect().await;
    let seeder = Seeder::builder()
        .database(db.clone())
        .duplicate_policy(policy)
        .build()
        .await
        .unwrap();
    seeder
        .seed_languages(catalog::languages::LANGUAGES)
        .await
        .unwrap();
    (seeder, db)
}

fn record(locale: &str, group: &str, key: &str, value: &str) -> TranslationRecord {
    TranslationRecord::new(locale, group, key, value).unwrap()
}

fn scratch_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../target/test_dbs")
        .join(format!("translations_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const SAVE_CANCEL: &[GroupTable<'static>] = &[(
    "common",
    &[
        ("en", &[("save", "Save"), ("cancel", "Cancel")]),
        ("vi", &[("save", "Lưu"), ("cancel", "Hủy")]),
    ],
)];

#[tokio::test]
async fn nested_source_lands_one_row_per_locale_and_key() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    let records = adapters::from_nested(SAVE_CANCEL).unwrap();
    let tally = seeder.seed_translations(records.clone()).await.unwrap();
    assert_eq!(tally.created, 4);
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 4);
    assert_eq!(
        seeder.translation("vi", "common", "save").await.unwrap(),
        Some("Lưu".to_string())
    );

    let again = seeder.seed_translations(records).await.unwrap();
    assert_eq!(again.unchanged, 4);
    assert!(again.is_noop());
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 4);
}

#[tokio::test]
async fn later_load_overwrites_the_value() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    seeder
        .seed_translations(vec![record("en", "common", "save", "Save")])
        .await
        .unwrap();
    let tally = seeder
        .seed_translations(vec![record("en", "common", "save", "Store")])
        .await
        .unwrap();

    assert_eq!((tally.created, tally.updated), (0, 1));
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(
        seeder.translation("en", "common", "save").await.unwrap(),
        Some("Store".to_string())
    );
}

#[tokio::test]
async fn keys_are_normalized_before_lookup() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    seeder
        .seed_translations(vec![record(" vi ", "common", "save ", "Lưu")])
        .await
        .unwrap();
    seeder
        .seed_translations(vec![record("vi", " common", "save", "Lưu lại")])
        .await
        .unwrap();

    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(
        seeder.translation("vi", "common", "save").await.unwrap(),
        Some("Lưu lại".to_string())
    );
}

#[tokio::test]
async fn hand_built_records_with_blank_key_parts_are_rejected() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    let err = seeder
        .seed_translations(vec![
            record("en", "common", "save", "Save"),
            TranslationRecord {
                locale: "en".to_string(),
                group: String::new(),
                key: "  ".to_string(),
                value: "x".to_string(),
            },
        ])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SeedError::Constraint("group must not be empty".to_string())
    );
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn hand_built_records_are_trimmed_before_upsert() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    seeder
        .seed_translations(vec![TranslationRecord {
            locale: " vi".to_string(),
            group: "common ".to_string(),
            key: " save ".to_string(),
            value: "Lưu".to_string(),
        }])
        .await
        .unwrap();
    let again = seeder
        .seed_translations(vec![record("vi", "common", "save", "Lưu")])
        .await
        .unwrap();

    assert!(again.is_noop());
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn new_default_language_displaces_the_stored_one() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    let tally = seeder
        .seed_languages(&[LanguageSeed {
            code: "vi",
            name: "Tiếng Việt",
            flag: Some("🇻🇳"),
            direction: "ltr",
            is_default: true,
            is_active: true,
            sort_order: 2,
        }])
        .await
        .unwrap();
    // vi gains the flag and en loses it.
    assert_eq!(tally.updated, 2);

    let defaults: Vec<String> = languages::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .filter(|language| language.is_default)
        .map(|language| language.code)
        .collect();
    assert_eq!(defaults, vec!["vi".to_string()]);

    let again = seeder
        .seed_languages(catalog::languages::LANGUAGES)
        .await
        .unwrap();
    assert_eq!(again.updated, 2);
}

#[tokio::test]
async fn unknown_locale_commits_nothing() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    let err = seeder
        .seed_translations(vec![
            record("en", "common", "save", "Save"),
            record("fr", "common", "save", "Enregistrer"),
        ])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SeedError::Referential {
            entity: "language",
            key: "fr".to_string(),
        }
    );
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn duplicates_in_one_source_fail_by_default() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    let err = seeder
        .seed_translations(vec![
            record("en", "common", "save", "Save"),
            record("en", "common", "save", "Store"),
        ])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SeedError::Constraint("duplicate translation \"common.save\" for locale \"en\"".to_string())
    );
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn warn_policy_keeps_the_later_duplicate() {
    let (seeder, db) = seeder_with_languages(DuplicatePolicy::Warn).await;

    let tally = seeder
        .seed_translations(vec![
            record("en", "common", "save", "Save"),
            record("vi", "common", "save", "Lưu"),
            record("en", "common", "save", "Store"),
        ])
        .await
        .unwrap();

    assert_eq!(tally.created, 2);
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 2);
    assert_eq!(
        seeder.translation("en", "common", "save").await.unwrap(),
        Some("Store".to_string())
    );
}

#[tokio::test]
async fn gaps_are_reported_per_active_locale() {
    let (seeder, _db) = seeder_with_languages(DuplicatePolicy::Fail).await;

    seeder
        .seed_translations(vec![
            record("en", "common", "save", "Save"),
            record("en", "common", "cancel", "Cancel"),
            record("vi", "common", "save", "Lưu"),
            record("vi", "auth", "login", "Đăng nhập"),
        ])
        .await
        .unwrap();

    let missing = seeder.missing_translations().await.unwrap();
    assert_eq!(
        missing,
        vec![
            MissingTranslation {
                locale: "en".to_string(),
                group: "auth".to_string(),
                key: "login".to_string(),
            },
            MissingTranslation {
                locale: "vi".to_string(),
                group: "common".to_string(),
                key: "cancel".to_string(),
            },
        ]
    );
    assert_eq!(missing[1].to_string(), "vi: common.cancel");
}

#[tokio::test]
async fn json_files_are_loaded_from_the_data_directory() {
    let dir = scratch_dir();
    std::fs::write(
        dir.join("a_common.json"),
        r#"{ "common": { "en": { "save": "Save" }, "vi": { "save": "Lưu" } } }"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("b_extra.json"),
        r#"{ "extra": { "en": { "hello": "Hello" }, "vi": { "hello": "Xin chào" } } }"#,
    )
    .unwrap();
    std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let db = connect().await;
    let seeder = Seeder::builder()
        .database(db.clone())
        .data_dir(dir.clone())
        .build()
        .await
        .unwrap();
    seeder.run_step(Step::Languages).await.unwrap();

    let report = seeder.run_step(Step::FileTranslations).await.unwrap();
    assert_eq!(report.tally.created, 4);
    assert_eq!(
        seeder.translation("vi", "extra", "hello").await.unwrap(),
        Some("Xin chào".to_string())
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn shipped_vocabulary_file_loads_cleanly() {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../seed-data");
    let db = connect().await;
    let seeder = Seeder::builder()
        .database(db)
        .data_dir(data_dir)
        .build()
        .await
        .unwrap();
    seeder.run_step(Step::Languages).await.unwrap();

    let report = seeder.run_step(Step::FileTranslations).await.unwrap();
    assert!(report.tally.created > 0);
    assert_eq!(seeder.missing_translations().await.unwrap(), vec![]);
}

#[tokio::test]
async fn malformed_json_is_a_source_error() {
    let dir = scratch_dir();
    std::fs::write(dir.join("broken.json"), r#"{ "common": ["save"] }"#).unwrap();

    let db = connect().await;
    let seeder = Seeder::builder()
        .database(db.clone())
        .data_dir(dir.clone())
        .build()
        .await
        .unwrap();
    seeder.run_step(Step::Languages).await.unwrap();

    let err = seeder.run_step(Step::FileTranslations).await.unwrap_err();
    assert!(matches!(err, SeedError::Source(_)), "{err}");
    assert_eq!(translations::Entity::find().count(&db).await.unwrap(), 0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn missing_data_directory_is_a_source_error() {
    let db = connect().await;
    let seeder = Seeder::builder()
        .database(db)
        .data_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("no-such-dir"))
        .build()
        .await
        .unwrap();

    let err = seeder.run_step(Step::FileTranslations).await.unwrap_err();
    assert!(matches!(err, SeedError::Source(_)), "{err}");
}
