use serde::{Deserialize, Serialize};

use crate::SeedError;

/// Direction of an accounting category or item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Income,
    Expense,
}

impl AccountKind {
    /// Canonical stored code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            AccountKind::Income => "income",
            AccountKind::Expense => "expense",
        }
    }
}

impl core::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for AccountKind {
    type Error = SeedError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(AccountKind::Income),
            "expense" => Ok(AccountKind::Expense),
            other => Err(SeedError::Constraint(format!(
                "unsupported account kind: {other}"
            ))),
        }
    }
}

/// Cost classification used by expense categories.
///
/// Income categories carry no cost type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostType {
    Fixed,
    Variable,
    Infrastructure,
}

impl CostType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            CostType::Fixed => "fixed",
            CostType::Variable => "variable",
            CostType::Infrastructure => "infrastructure",
        }
    }
}

impl core::fmt::Display for CostType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for CostType {
    type Error = SeedError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(CostType::Fixed),
            "variable" => Ok(CostType::Variable),
            "infrastructure" => Ok(CostType::Infrastructure),
            other => Err(SeedError::Constraint(format!(
                "unsupported cost type: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!(AccountKind::try_from(" Income ").unwrap(), AccountKind::Income);
        assert_eq!(CostType::try_from("FIXED").unwrap(), CostType::Fixed);
    }

    #[test]
    fn unknown_kind_is_a_constraint_error() {
        assert_eq!(
            AccountKind::try_from("transfer").unwrap_err(),
            SeedError::Constraint("unsupported account kind: transfer".to_string())
        );
    }
}
