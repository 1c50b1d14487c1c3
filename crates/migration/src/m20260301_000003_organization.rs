//! Organisation data: users, branches, staff positions and their memberships.
//!
//! - `users`: accounts, keyed by `email`
//! - `user_roles`: role assignments
//! - `branches`: school branches, keyed by `code`
//! - `branch_users`: branch membership with a primary flag
//! - `positions`: staff positions, keyed by `code`
//! - `position_roles`: roles implied by a position

use sea_orm_migration::prelude::*;

use crate::m20260301_000002_access::Roles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    Password,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum UserRoles {
    Table,
    UserId,
    RoleId,
}

#[derive(Iden)]
enum Branches {
    Table,
    Id,
    Code,
    Name,
    Phone,
    Email,
    Address,
    City,
    District,
    Ward,
    Description,
    IsHeadquarters,
    IsActive,
    ManagerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum BranchUsers {
    Table,
    BranchId,
    UserId,
    IsPrimary,
}

#[derive(Iden)]
enum Positions {
    Table,
    Id,
    Code,
    Name,
    Level,
    Description,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum PositionRoles {
    Table,
    PositionId,
    RoleId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).blob().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uidx-users-email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserRoles::UserId).blob().not_null())
                    .col(ColumnDef::new(UserRoles::RoleId).blob().not_null())
                    .primary_key(Index::create().col(UserRoles::UserId).col(UserRoles::RoleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_roles-user_id")
                            .from(UserRoles::Table, UserRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_roles-role_id")
                            .from(UserRoles::Table, UserRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // Branches
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Branches::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Branches::Code).string().not_null())
                    .col(ColumnDef::new(Branches::Name).string().not_null())
                    .col(ColumnDef::new(Branches::Phone).string())
                    .col(ColumnDef::new(Branches::Email).string())
                    .col(ColumnDef::new(Branches::Address).string())
                    .col(ColumnDef::new(Branches::City).string())
                    .col(ColumnDef::new(Branches::District).string())
                    .col(ColumnDef::new(Branches::Ward).string())
                    .col(ColumnDef::new(Branches::Description).string())
                    .col(
                        ColumnDef::new(Branches::IsHeadquarters)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Branches::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Branches::ManagerId).blob())
                    .col(ColumnDef::new(Branches::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Branches::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-branches-manager_id")
                            .from(Branches::Table, Branches::ManagerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uidx-branches-code")
                    .table(Branches::Table)
                    .col(Branches::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BranchUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BranchUsers::BranchId).blob().not_null())
                    .col(ColumnDef::new(BranchUsers::UserId).blob().not_null())
                    .col(
                        ColumnDef::new(BranchUsers::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .primary_key(
                        Index::create()
                            .col(BranchUsers::BranchId)
                            .col(BranchUsers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-branch_users-branch_id")
                            .from(BranchUsers::Table, BranchUsers::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-branch_users-user_id")
                            .from(BranchUsers::Table, BranchUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // Positions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Positions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Positions::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Positions::Code).string().not_null())
                    .col(ColumnDef::new(Positions::Name).string().not_null())
                    .col(ColumnDef::new(Positions::Level).integer().not_null())
                    .col(ColumnDef::new(Positions::Description).string())
                    .col(
                        ColumnDef::new(Positions::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Positions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Positions::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Positions::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uidx-positions-code")
                    .table(Positions::Table)
                    .col(Positions::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PositionRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PositionRoles::PositionId).blob().not_null())
                    .col(ColumnDef::new(PositionRoles::RoleId).blob().not_null())
                    .primary_key(
                        Index::create()
                            .col(PositionRoles::PositionId)
                            .col(PositionRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-position_roles-position_id")
                            .from(PositionRoles::Table, PositionRoles::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-position_roles-role_id")
                            .from(PositionRoles::Table, PositionRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PositionRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Positions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BranchUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
