//! Seeding steps and the order they run in.
//!
//! Every [`Step`] declares the steps whose rows it references. A [`Plan`] is a
//! topological order of a set of steps: a step never runs before one of its
//! dependencies when both are part of the plan.

use std::fmt;
use std::str::FromStr;

use crate::{ResultSeed, SeedError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Languages,
    CoreTranslations,
    ModuleTranslations,
    MessageTranslations,
    FileTranslations,
    Roles,
    Permissions,
    RolePermissions,
    Branches,
    AccountCategories,
    AccountItems,
    Positions,
    Teachers,
    TestAccounts,
}

impl Step {
    /// Every step, in the order a fresh environment is bootstrapped.
    pub const ALL: [Step; 14] = [
        Step::Languages,
        Step::CoreTranslations,
        Step::ModuleTranslations,
        Step::MessageTranslations,
        Step::FileTranslations,
        Step::Roles,
        Step::Permissions,
        Step::RolePermissions,
        Step::Branches,
        Step::AccountCategories,
        Step::AccountItems,
        Step::Positions,
        Step::Teachers,
        Step::TestAccounts,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Step::Languages => "languages",
            Step::CoreTranslations => "translations.core",
            Step::ModuleTranslations => "translations.modules",
            Step::MessageTranslations => "translations.messages",
            Step::FileTranslations => "translations.files",
            Step::Roles => "roles",
            Step::Permissions => "permissions",
            Step::RolePermissions => "role_permissions",
            Step::Branches => "branches",
            Step::AccountCategories => "account_categories",
            Step::AccountItems => "account_items",
            Step::Positions => "positions",
            Step::Teachers => "teachers",
            Step::TestAccounts => "test_accounts",
        }
    }

    /// Steps whose rows this step references.
    pub const fn depends_on(self) -> &'static [Step] {
        match self {
            Step::Languages | Step::Roles | Step::Permissions => &[],
            Step::Branches | Step::AccountCategories => &[],
            Step::CoreTranslations
            | Step::ModuleTranslations
            | Step::MessageTranslations
            | Step::FileTranslations => &[Step::Languages],
            Step::RolePermissions => &[Step::Roles, Step::Permissions],
            Step::AccountItems => &[Step::AccountCategories],
            Step::Positions => &[Step::Roles],
            Step::Teachers => &[Step::Positions, Step::Branches],
            Step::TestAccounts => &[Step::Roles, Step::Branches],
        }
    }

    pub const fn describe(self) -> &'static str {
        match self {
            Step::Languages => "supported locales",
            Step::CoreTranslations => "shell UI strings (common, auth, dashboard, admin screens)",
            Step::ModuleTranslations => "module UI strings (accounting, branches, classes, ...)",
            Step::MessageTranslations => "error, success and dialog messages",
            Step::FileTranslations => "translation files from the configured data directory",
            Step::Roles => "authorization roles",
            Step::Permissions => "module permissions",
            Step::RolePermissions => "permission grants per role",
            Step::Branches => "school branches",
            Step::AccountCategories => "chart-of-accounts categories",
            Step::AccountItems => "chart-of-accounts items",
            Step::Positions => "staff positions and their roles",
            Step::Teachers => "sample teachers with a branch and a position",
            Step::TestAccounts => "demo users with roles and branches",
        }
    }

    fn declared_index(self) -> usize {
        Step::ALL
            .iter()
            .position(|step| *step == self)
            .unwrap_or(usize::MAX)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = SeedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Step::ALL
            .into_iter()
            .find(|step| step.name() == wanted)
            .ok_or_else(|| SeedError::Plan(format!("unknown step \"{wanted}\"")))
    }
}

/// Ordered list of steps to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Every step.
    pub fn full() -> ResultSeed<Plan> {
        Self::ordered(&Step::ALL)
    }

    /// The given steps, plus everything they transitively depend on when
    /// `with_dependencies` is set.
    ///
    /// Without it, dependencies outside the selection are assumed to be
    /// provisioned already; a missing row then surfaces as a referential error.
    pub fn select(selected: &[Step], with_dependencies: bool) -> ResultSeed<Plan> {
        let mut steps: Vec<Step> = Vec::new();
        let mut pending: Vec<Step> = selected.to_vec();
        while let Some(step) = pending.pop() {
            if steps.contains(&step) {
                continue;
            }
            steps.push(step);
            if with_dependencies {
                pending.extend_from_slice(step.depends_on());
            }
        }
        steps.sort_by_key(|step| step.declared_index());
        Self::ordered(&steps)
    }

    fn ordered(steps: &[Step]) -> ResultSeed<Plan> {
        let steps = topological_order(steps, |step| step.depends_on()).map_err(|cycle| {
            let names: Vec<&str> = cycle.iter().map(|step| step.name()).collect();
            SeedError::Plan(format!("dependency cycle between {}", names.join(", ")))
        })?;
        Ok(Plan { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Kahn's algorithm over `nodes`, ignoring edges to nodes outside the set.
///
/// Ties are broken by position in `nodes`, so an already valid input order is
/// returned unchanged. On a cycle, returns the nodes that could not be placed.
pub(crate) fn topological_order<T, F>(nodes: &[T], depends_on: F) -> Result<Vec<T>, Vec<T>>
where
    T: Copy + PartialEq + 'static,
    F: Fn(T) -> &'static [T],
{
    let mut placed: Vec<T> = Vec::with_capacity(nodes.len());
    let mut remaining: Vec<T> = nodes.to_vec();

    while !remaining.is_empty() {
        let ready = remaining.iter().position(|node| {
            depends_on(*node)
                .iter()
                .all(|dep| !nodes.contains(dep) || placed.contains(dep))
        });
        match ready {
            Some(index) => placed.push(remaining.remove(index)),
            None => return Err(remaining),
        }
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order_respects_dependencies() {
        for (index, step) in Step::ALL.iter().enumerate() {
            for dep in step.depends_on() {
                let dep_index = Step::ALL.iter().position(|s| s == dep).unwrap();
                assert!(dep_index < index, "{step} runs before {dep}");
            }
        }
        assert_eq!(Plan::full().unwrap().steps(), &Step::ALL);
    }

    #[test]
    fn step_names_round_trip() {
        for step in Step::ALL {
            assert_eq!(step.name().parse::<Step>().unwrap(), step);
        }
        assert_eq!(
            "translations".parse::<Step>().unwrap_err(),
            SeedError::Plan("unknown step \"translations\"".to_string())
        );
    }

    #[test]
    fn selection_without_dependencies_runs_only_what_was_asked() {
        let plan = Plan::select(&[Step::TestAccounts, Step::CoreTranslations], false).unwrap();
        assert_eq!(plan.steps(), &[Step::CoreTranslations, Step::TestAccounts]);
    }

    #[test]
    fn selection_with_dependencies_pulls_prerequisites_first() {
        let plan = Plan::select(&[Step::RolePermissions], true).unwrap();
        assert_eq!(
            plan.steps(),
            &[Step::Roles, Step::Permissions, Step::RolePermissions]
        );

        let plan = Plan::select(&[Step::TestAccounts, Step::AccountItems], true).unwrap();
        assert_eq!(
            plan.steps(),
            &[
                Step::Roles,
                Step::Branches,
                Step::AccountCategories,
                Step::AccountItems,
                Step::TestAccounts,
            ]
        );

        let plan = Plan::select(&[Step::Teachers], true).unwrap();
        assert_eq!(
            plan.steps(),
            &[Step::Roles, Step::Branches, Step::Positions, Step::Teachers]
        );
    }

    #[test]
    fn topological_order_fixes_a_bad_input_order() {
        let plan = Plan::ordered(&[Step::AccountItems, Step::AccountCategories]).unwrap();
        assert_eq!(plan.steps(), &[Step::AccountCategories, Step::AccountItems]);
    }

    #[test]
    fn cycles_are_reported() {
        fn deps(node: u8) -> &'static [u8] {
            match node {
                1 => &[3],
                2 => &[1],
                3 => &[2],
                _ => &[],
            }
        }
        let err = topological_order(&[0, 1, 2, 3], deps).unwrap_err();
        assert_eq!(err, vec![1, 2, 3]);
    }
}
