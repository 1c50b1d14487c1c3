//! Staff assignments: which position a user holds at a branch.
//!
//! - `staff_positions`: keyed by (`user_id`, `branch_id`), carrying the
//!   position and an optional department label

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Branches {
    Table,
    Id,
}

#[derive(Iden)]
enum Positions {
    Table,
    Id,
}

#[derive(Iden)]
enum StaffPositions {
    Table,
    UserId,
    BranchId,
    PositionId,
    Department,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffPositions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StaffPositions::UserId).blob().not_null())
                    .col(ColumnDef::new(StaffPositions::BranchId).blob().not_null())
                    .col(ColumnDef::new(StaffPositions::PositionId).blob().not_null())
                    .col(ColumnDef::new(StaffPositions::Department).string())
                    .primary_key(
                        Index::create()
                            .col(StaffPositions::UserId)
                            .col(StaffPositions::BranchId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-staff_positions-user_id")
                            .from(StaffPositions::Table, StaffPositions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-staff_positions-branch_id")
                            .from(StaffPositions::Table, StaffPositions::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-staff_positions-position_id")
                            .from(StaffPositions::Table, StaffPositions::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-staff_positions-position_id")
                    .table(StaffPositions::Table)
                    .col(StaffPositions::PositionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffPositions::Table).to_owned())
            .await
    }
}
