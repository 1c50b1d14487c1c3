use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum AccountCategories {
    Table,
    Id,
    Code,
    Name,
    Kind,
    CostType,
    ParentId,
    Description,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum AccountItems {
    Table,
    Id,
    Code,
    Name,
    CategoryId,
    Kind,
    Description,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccountCategories::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccountCategories::Code).string().not_null())
                    .col(ColumnDef::new(AccountCategories::Name).string().not_null())
                    .col(ColumnDef::new(AccountCategories::Kind).string().not_null())
                    .col(ColumnDef::new(AccountCategories::CostType).string())
                    .col(ColumnDef::new(AccountCategories::ParentId).blob())
                    .col(ColumnDef::new(AccountCategories::Description).string())
                    .col(
                        ColumnDef::new(AccountCategories::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AccountCategories::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AccountCategories::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccountCategories::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-account_categories-parent_id")
                            .from(AccountCategories::Table, AccountCategories::ParentId)
                            .to(AccountCategories::Table, AccountCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uidx-account_categories-code")
                    .table(AccountCategories::Table)
                    .col(AccountCategories::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccountItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccountItems::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccountItems::Code).string().not_null())
                    .col(ColumnDef::new(AccountItems::Name).string().not_null())
                    .col(ColumnDef::new(AccountItems::CategoryId).blob().not_null())
                    .col(ColumnDef::new(AccountItems::Kind).string().not_null())
                    .col(ColumnDef::new(AccountItems::Description).string())
                    .col(
                        ColumnDef::new(AccountItems::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AccountItems::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(AccountItems::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(AccountItems::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-account_items-category_id")
                            .from(AccountItems::Table, AccountItems::CategoryId)
                            .to(AccountCategories::Table, AccountCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uidx-account_items-code")
                    .table(AccountItems::Table)
                    .col(AccountItems::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccountCategories::Table).to_owned())
            .await?;
        Ok(())
    }
}
