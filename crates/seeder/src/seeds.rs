//! Record types the loader upserts, one per reference table.
//!
//! Literal tables in [`crate::catalog`] are written with these types; the
//! natural key of each is documented on the type.

use crate::{AccountKind, CostType};

/// A locale. Natural key: `code`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: Option<&'static str>,
    pub direction: &'static str,
    pub is_default: bool,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Natural key: `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleSeed {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: Option<&'static str>,
}

/// Permissions of one module, authored as `(action, display_name, sort_order)`.
#[derive(Clone, Copy, Debug)]
pub struct PermissionModule {
    pub module: &'static str,
    pub actions: &'static [(&'static str, &'static str, i32)],
}

/// Natural key: `name`, usually `module.action`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionSeed {
    pub name: String,
    pub module: String,
    pub action: String,
    pub display_name: String,
    pub description: Option<String>,
    pub sort_order: i32,
}

impl PermissionSeed {
    /// A permission named `module.action`.
    pub fn new(module: &str, action: &str, display_name: &str) -> Self {
        Self {
            name: format!("{module}.{action}"),
            module: module.to_string(),
            action: action.to_string(),
            display_name: display_name.to_string(),
            description: Some(format!("Quyền {display_name} trong module {module}")),
            sort_order: 0,
        }
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Use a name that does not follow `module.action`.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn from_modules(modules: &[PermissionModule]) -> Vec<Self> {
        modules
            .iter()
            .flat_map(|module| {
                module.actions.iter().map(|(action, display_name, sort_order)| {
                    Self::new(module.module, action, display_name).sort_order(*sort_order)
                })
            })
            .collect()
    }
}

/// Which permissions a grant rule selects.
#[derive(Clone, Copy, Debug)]
pub enum GrantRule {
    All,
    AllExceptModules(&'static [&'static str]),
    Modules(&'static [&'static str]),
    ModuleActions {
        module: &'static str,
        actions: &'static [&'static str],
    },
    /// Explicit permission names; each one must exist.
    Names(&'static [&'static str]),
}

impl GrantRule {
    pub fn matches(&self, module: &str, action: &str, name: &str) -> bool {
        match self {
            GrantRule::All => true,
            GrantRule::AllExceptModules(excluded) => !excluded.contains(&module),
            GrantRule::Modules(modules) => modules.contains(&module),
            GrantRule::ModuleActions {
                module: wanted,
                actions,
            } => *wanted == module && actions.contains(&action),
            GrantRule::Names(names) => names.contains(&name),
        }
    }
}

/// Permissions granted to `role`: the union of its rules.
#[derive(Clone, Copy, Debug)]
pub struct RoleGrant {
    pub role: &'static str,
    pub rules: &'static [GrantRule],
}

/// Natural key: `code`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub address: Option<&'static str>,
    pub city: Option<&'static str>,
    pub district: Option<&'static str>,
    pub ward: Option<&'static str>,
    pub description: Option<&'static str>,
    pub is_headquarters: bool,
}

/// Natural key: `code`. `roles` are attached to the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub level: i32,
    pub description: Option<&'static str>,
    pub sort_order: i32,
    pub roles: &'static [&'static str],
}

/// Natural key: `code`. `parent` is the code of another category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySeed {
    pub code: &'static str,
    pub name: &'static str,
    pub kind: AccountKind,
    pub cost_type: Option<CostType>,
    pub parent: Option<&'static str>,
    pub description: Option<&'static str>,
    pub sort_order: i32,
}

/// Natural key: `code`. `category` is a category code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSeed {
    pub code: String,
    pub name: String,
    pub category: String,
    pub kind: AccountKind,
    pub description: Option<String>,
    pub sort_order: i32,
}

/// A demo user. Natural key: `email`.
///
/// The first entry of `branches` is the primary branch; `manages` lists the
/// branches this user is set as manager of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountSeed {
    pub name: &'static str,
    pub email: &'static str,
    pub roles: &'static [&'static str],
    pub branches: &'static [&'static str],
    pub manages: &'static [&'static str],
}

/// Natural key: `email`, lowercased. The teacher holds `position` at `branch`,
/// which is also their primary branch, and gets the roles that position implies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeacherSeed {
    pub name: &'static str,
    pub email: &'static str,
    pub branch: &'static str,
    pub position: &'static str,
    pub department: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_permissions_are_named_module_dot_action() {
        const MODULES: &[PermissionModule] = &[PermissionModule {
            module: "reports",
            actions: &[("view", "Xem báo cáo", 1), ("export", "Xuất báo cáo", 2)],
        }];
        let seeds = PermissionSeed::from_modules(MODULES);
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[1].name, "reports.export");
        assert_eq!(seeds[1].sort_order, 2);
        assert_eq!(
            seeds[1].description.as_deref(),
            Some("Quyền Xuất báo cáo trong module reports")
        );
    }

    #[test]
    fn grant_rules_select_by_module_action_or_name() {
        let except_roles = GrantRule::AllExceptModules(&["roles"]);
        assert!(except_roles.matches("users", "view", "users.view"));
        assert!(!except_roles.matches("roles", "view", "roles.view"));

        let orders = GrantRule::ModuleActions {
            module: "orders",
            actions: &["view", "edit"],
        };
        assert!(orders.matches("orders", "edit", "orders.edit"));
        assert!(!orders.matches("orders", "delete", "orders.delete"));

        let named = GrantRule::Names(&["account_items.view"]);
        assert!(named.matches("accounting", "view", "account_items.view"));
        assert!(!named.matches("accounting", "view", "accounting.view"));
    }
}
