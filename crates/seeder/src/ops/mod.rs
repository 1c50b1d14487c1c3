use std::path::{Path, PathBuf};

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    DuplicatePolicy, LanguageSeed, PermissionSeed, Plan, ResultSeed, RunReport, SeedError, Step,
    StepFailure, StepReport, Tally, TranslationRecord,
    adapters::{self, dedupe},
    catalog,
    seeds::{
        AccountSeed, BranchSeed, CategorySeed, ItemSeed, PositionSeed, RoleGrant, RoleSeed,
        TeacherSeed,
    },
};

mod access;
mod accounting;
mod localization;
mod organization;
mod verify;

pub use accounting::AccountCategory;
pub use verify::MissingTranslation;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Step input, adapted and validated before the step's transaction opens.
enum StepInput {
    Languages(&'static [LanguageSeed]),
    Translations(Vec<TranslationRecord>),
    Roles(&'static [RoleSeed]),
    Permissions(Vec<PermissionSeed>),
    Grants(&'static [RoleGrant]),
    Branches(&'static [BranchSeed]),
    Categories(&'static [CategorySeed]),
    Items(Vec<ItemSeed>),
    Positions(&'static [PositionSeed]),
    Teachers(&'static [TeacherSeed]),
    Accounts(&'static [AccountSeed]),
}

#[derive(Debug)]
pub struct Seeder {
    database: DatabaseConnection,
    duplicate_policy: DuplicatePolicy,
    data_dir: Option<PathBuf>,
    default_password: String,
}

impl Seeder {
    /// Return a builder for `Seeder`. Help to build the struct.
    pub fn builder() -> SeederBuilder {
        SeederBuilder::default()
    }

    /// Run every step of `plan` in order, one transaction per step.
    ///
    /// Stops at the first failing step; steps before it stay committed.
    pub async fn run(&self, plan: &Plan) -> Result<RunReport, StepFailure> {
        self.run_with_progress(plan, |_| {}).await
    }

    /// Like [`Seeder::run`], calling `on_step` after each committed step.
    pub async fn run_with_progress<F>(
        &self,
        plan: &Plan,
        mut on_step: F,
    ) -> Result<RunReport, StepFailure>
    where
        F: FnMut(&StepReport),
    {
        let mut report = RunReport::default();
        for step in plan.steps().iter().copied() {
            tracing::debug!(step = %step, "starting step");
            match self.run_step(step).await {
                Ok(step_report) => {
                    tracing::info!(
                        step = %step,
                        created = step_report.tally.created,
                        updated = step_report.tally.updated,
                        unchanged = step_report.tally.unchanged,
                        "step completed"
                    );
                    on_step(&step_report);
                    report.steps.push(step_report);
                }
                Err(source) => {
                    tracing::error!(step = %step, error = %source, "step failed");
                    return Err(StepFailure {
                        step,
                        last_completed: report.last_step(),
                        completed: report,
                        source,
                    });
                }
            }
        }
        Ok(report)
    }

    /// Run a single step in its own transaction.
    pub async fn run_step(&self, step: Step) -> ResultSeed<StepReport> {
        let input = self.prepare(step)?;
        let tally = with_tx!(self, |db_tx| self.apply(&db_tx, input).await)?;
        Ok(StepReport { step, tally })
    }

    fn prepare(&self, step: Step) -> ResultSeed<StepInput> {
        let input = match step {
            Step::Languages => StepInput::Languages(catalog::languages::LANGUAGES),
            Step::CoreTranslations => {
                self.translations(adapters::from_nested(catalog::shell::GROUPS)?)?
            }
            Step::ModuleTranslations => {
                self.translations(adapters::from_flat(catalog::modules::ENTRIES)?)?
            }
            Step::MessageTranslations => {
                self.translations(adapters::from_rows(catalog::messages::ROWS)?)?
            }
            Step::FileTranslations => {
                let records = match &self.data_dir {
                    Some(dir) => read_translation_files(dir)?,
                    None => {
                        tracing::debug!("no data directory configured, nothing to load");
                        Vec::new()
                    }
                };
                self.translations(records)?
            }
            Step::Roles => StepInput::Roles(catalog::access::ROLES),
            Step::Permissions => StepInput::Permissions(catalog::access::permissions()),
            Step::RolePermissions => StepInput::Grants(catalog::access::GRANTS),
            Step::Branches => StepInput::Branches(catalog::organization::BRANCHES),
            Step::AccountCategories => StepInput::Categories(catalog::accounting::CATEGORIES),
            Step::AccountItems => StepInput::Items(catalog::accounting::items()),
            Step::Positions => StepInput::Positions(catalog::organization::POSITIONS),
            Step::Teachers => StepInput::Teachers(catalog::organization::TEACHERS),
            Step::TestAccounts => StepInput::Accounts(catalog::organization::ACCOUNTS),
        };
        Ok(input)
    }

    fn translations(&self, records: Vec<TranslationRecord>) -> ResultSeed<StepInput> {
        Ok(StepInput::Translations(dedupe(records, self.duplicate_policy)?))
    }

    async fn apply(&self, db_tx: &DatabaseTransaction, input: StepInput) -> ResultSeed<Tally> {
        match input {
            StepInput::Languages(languages) => self.upsert_languages(db_tx, languages).await,
            StepInput::Translations(records) => self.upsert_translations(db_tx, &records).await,
            StepInput::Roles(roles) => self.upsert_roles(db_tx, roles).await,
            StepInput::Permissions(permissions) => {
                self.upsert_permissions(db_tx, &permissions).await
            }
            StepInput::Grants(grants) => self.grant_permissions(db_tx, grants).await,
            StepInput::Branches(branches) => self.upsert_branches(db_tx, branches).await,
            StepInput::Categories(categories) => self.upsert_categories(db_tx, categories).await,
            StepInput::Items(items) => self.upsert_items(db_tx, &items).await,
            StepInput::Positions(positions) => self.upsert_positions(db_tx, positions).await,
            StepInput::Teachers(teachers) => self.upsert_teachers(db_tx, teachers).await,
            StepInput::Accounts(accounts) => self.upsert_accounts(db_tx, accounts).await,
        }
    }
}

/// Every `*.json` file in `dir`, in file-name order, adapted from the nested shape.
fn read_translation_files(dir: &Path) -> ResultSeed<Vec<TranslationRecord>> {
    let source_error =
        |err: std::io::Error| SeedError::Source(format!("{}: {err}", dir.display()));

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(source_error)? {
        let path = entry.map_err(source_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let origin = path.display().to_string();
        let source = std::fs::read_to_string(&path)
            .map_err(|err| SeedError::Source(format!("{origin}: {err}")))?;
        let parsed = adapters::from_json(&source, &origin)?;
        tracing::debug!(file = %origin, records = parsed.len(), "read translation file");
        records.extend(parsed);
    }
    Ok(records)
}

/// The builder for `Seeder`
#[derive(Default)]
pub struct SeederBuilder {
    database: DatabaseConnection,
    duplicate_policy: DuplicatePolicy,
    data_dir: Option<PathBuf>,
    default_password: Option<String>,
}

impl SeederBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> SeederBuilder {
        self.database = db;
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> SeederBuilder {
        self.duplicate_policy = policy;
        self
    }

    /// Directory holding extra JSON translation files.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> SeederBuilder {
        self.data_dir = Some(dir.into());
        self
    }

    /// Password stored for demo accounts and sample teachers.
    pub fn default_password(mut self, password: impl Into<String>) -> SeederBuilder {
        self.default_password = Some(password.into());
        self
    }

    /// Construct `Seeder`
    pub async fn build(self) -> ResultSeed<Seeder> {
        let default_password = self
            .default_password
            .unwrap_or_else(|| "password".to_string());
        if default_password.trim().is_empty() {
            return Err(SeedError::Constraint(
                "default password must not be empty".to_string(),
            ));
        }
        Ok(Seeder {
            database: self.database,
            duplicate_policy: self.duplicate_policy,
            data_dir: self.data_dir,
            default_password,
        })
    }
}
