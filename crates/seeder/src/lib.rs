pub use adapters::{
    DuplicatePolicy, FlatEntry, GroupTable, LocaleTable, TranslationRecord, TranslationRow,
};
pub use error::{SeedError, StepFailure};
pub use kinds::{AccountKind, CostType};
pub use loader::{Outcome, RunReport, StepReport, Tally};
pub use ops::{AccountCategory, MissingTranslation, Seeder, SeederBuilder};
pub use plan::{Plan, Step};
pub use seeds::{
    AccountSeed, BranchSeed, CategorySeed, GrantRule, ItemSeed, LanguageSeed, PermissionModule,
    PermissionSeed, PositionSeed, RoleGrant, RoleSeed, TeacherSeed,
};

pub mod adapters;
pub mod catalog;
mod error;
mod kinds;
mod loader;
mod ops;
mod plan;
mod seeds;

pub mod account_categories;
pub mod account_items;
pub mod branch_users;
pub mod branches;
pub mod languages;
pub mod permissions;
pub mod position_roles;
pub mod positions;
pub mod role_permissions;
pub mod staff_positions;
pub mod roles;
pub mod translations;
pub mod user_roles;
pub mod users;

type ResultSeed<T> = Result<T, SeedError>;
