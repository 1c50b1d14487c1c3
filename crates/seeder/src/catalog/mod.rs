//! Built-in reference data, one module per concern.
//!
//! Translation tables are kept in the shape they were authored in and go
//! through [`crate::adapters`] before loading. Every translation group belongs
//! to exactly one source, so no step overwrites another step's strings.

pub mod access;
pub mod accounting;
pub mod languages;
pub mod messages;
pub mod modules;
pub mod organization;
pub mod shell;

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, HashSet};

    use super::*;
    use crate::{
        DuplicatePolicy, TranslationRecord,
        adapters::{self, dedupe},
    };

    fn sources() -> Vec<(&'static str, Vec<TranslationRecord>)> {
        vec![
            ("shell", adapters::from_nested(shell::GROUPS).unwrap()),
            ("modules", adapters::from_flat(modules::ENTRIES).unwrap()),
            ("messages", adapters::from_rows(messages::ROWS).unwrap()),
        ]
    }

    #[test]
    fn sources_have_no_duplicate_keys() {
        for (name, records) in sources() {
            let count = records.len();
            let unique = dedupe(records, DuplicatePolicy::Fail)
                .unwrap_or_else(|err| panic!("{name}: {err}"));
            assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn groups_belong_to_a_single_source() {
        let mut owners: BTreeMap<String, &str> = BTreeMap::new();
        for (name, records) in sources() {
            for record in records {
                let owner = owners.entry(record.group.clone()).or_insert(name);
                assert_eq!(*owner, name, "group {} is seeded twice", record.group);
            }
        }
        assert!(owners.contains_key("common"));
        assert!(owners.contains_key("accounting"));
        assert!(owners.contains_key("errors"));
    }

    #[test]
    fn every_key_exists_in_every_locale() {
        let locales: BTreeSet<&str> = languages::LANGUAGES.iter().map(|l| l.code).collect();
        for (name, records) in sources() {
            let mut keys: BTreeMap<(String, String), BTreeSet<String>> = BTreeMap::new();
            for record in records {
                keys.entry((record.group.clone(), record.key.clone()))
                    .or_default()
                    .insert(record.locale);
            }
            for ((group, key), seen) in keys {
                let seen: BTreeSet<&str> = seen.iter().map(String::as_str).collect();
                assert_eq!(seen, locales, "{name}: {group}.{key}");
            }
        }
    }

    #[test]
    fn exactly_one_default_language() {
        let defaults = languages::LANGUAGES.iter().filter(|l| l.is_default).count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn permission_names_are_unique() {
        let permissions = access::permissions();
        let names: HashSet<&str> = permissions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), permissions.len());
        assert!(names.contains("users.view"));
        assert!(names.contains("account_items.view"));
        assert!(names.contains("employees.invite"));
        assert!(names.contains("subjects.assign_teachers"));
        assert_eq!(permissions.len(), 59);
    }

    #[test]
    fn grants_and_accounts_reference_known_rows() {
        let roles: HashSet<&str> = access::ROLES.iter().map(|r| r.name).collect();
        let branches: HashSet<&str> = organization::BRANCHES.iter().map(|b| b.code).collect();
        let permissions: HashSet<String> =
            access::permissions().into_iter().map(|p| p.name).collect();

        for grant in access::GRANTS {
            assert!(roles.contains(grant.role), "{}", grant.role);
            for rule in grant.rules {
                if let crate::GrantRule::Names(names) = rule {
                    for name in names.iter() {
                        assert!(permissions.contains(*name), "{name}");
                    }
                }
            }
        }
        for position in organization::POSITIONS {
            assert!(position.roles.iter().all(|role| roles.contains(role)));
        }
        for account in organization::ACCOUNTS {
            assert!(account.roles.iter().all(|role| roles.contains(role)));
            assert!(account.branches.iter().all(|code| branches.contains(code)));
            assert!(account.manages.iter().all(|code| account.branches.contains(code)));
        }
    }

    #[test]
    fn teachers_hold_known_positions_at_known_branches() {
        let branches: HashSet<&str> = organization::BRANCHES.iter().map(|b| b.code).collect();
        let positions: HashSet<&str> = organization::POSITIONS.iter().map(|p| p.code).collect();
        let mut emails: HashSet<&str> = organization::ACCOUNTS.iter().map(|a| a.email).collect();

        for teacher in organization::TEACHERS {
            assert!(branches.contains(teacher.branch), "{}", teacher.email);
            assert!(positions.contains(teacher.position), "{}", teacher.email);
            assert!(emails.insert(teacher.email), "{} is seeded twice", teacher.email);
        }
        assert_eq!(organization::TEACHERS.len(), 18);
    }

    #[test]
    fn account_items_match_their_category_kind() {
        let categories: BTreeMap<&str, crate::AccountKind> = accounting::CATEGORIES
            .iter()
            .map(|c| (c.code, c.kind))
            .collect();
        for category in accounting::CATEGORIES {
            if let Some(parent) = category.parent {
                assert_eq!(categories.get(parent), Some(&category.kind), "{}", category.code);
            }
        }

        let items = accounting::items();
        let codes: HashSet<&str> = items.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes.len(), items.len());
        for item in &items {
            assert_eq!(categories.get(item.category.as_str()), Some(&item.kind), "{}", item.code);
        }
    }
}
