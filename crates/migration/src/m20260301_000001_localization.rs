//! Locales and their translation strings.
//!
//! - `languages`: one row per supported locale, keyed by `code`
//! - `translations`: one row per (`language_id`, `group`, `key`)

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Languages {
    Table,
    Id,
    Code,
    Name,
    Flag,
    Direction,
    IsDefault,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Translations {
    Table,
    Id,
    LanguageId,
    Group,
    Key,
    Value,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Languages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Languages::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Languages::Code).string().not_null())
                    .col(ColumnDef::new(Languages::Name).string().not_null())
                    .col(ColumnDef::new(Languages::Flag).string())
                    .col(
                        ColumnDef::new(Languages::Direction)
                            .string()
                            .not_null()
                            .default("ltr"),
                    )
                    .col(
                        ColumnDef::new(Languages::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Languages::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Languages::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Languages::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Languages::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uidx-languages-code")
                    .table(Languages::Table)
                    .col(Languages::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Translations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Translations::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Translations::LanguageId).blob().not_null())
                    .col(ColumnDef::new(Translations::Group).string().not_null())
                    .col(ColumnDef::new(Translations::Key).string().not_null())
                    .col(ColumnDef::new(Translations::Value).text().not_null())
                    .col(
                        ColumnDef::new(Translations::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Translations::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-translations-language_id")
                            .from(Translations::Table, Translations::LanguageId)
                            .to(Languages::Table, Languages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uidx-translations-language_id-group-key")
                    .table(Translations::Table)
                    .col(Translations::LanguageId)
                    .col(Translations::Group)
                    .col(Translations::Key)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Translations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Languages::Table).to_owned())
            .await?;
        Ok(())
    }
}
