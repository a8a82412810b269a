//! Category model
//!
//! Categories label transactions and recurring expenses. Each belongs to one
//! [`TransactionType`] and carries a display color.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// Color shown for anything whose category cannot be resolved
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

/// Colors handed out to new categories that don't specify one
pub const CATEGORY_PALETTE: &[&str] = &[
    "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
    "#6366f1", "#84cc16",
];

const MAX_NAME_LEN: usize = 50;

/// A transaction category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// `#rrggbb` or `#rgb`
    pub color: String,
}

impl Category {
    /// Create a category with the default color
    pub fn new(name: impl Into<String>, kind: TransactionType) -> Self {
        Self::with_color(name, kind, DEFAULT_CATEGORY_COLOR)
    }

    pub fn with_color(
        name: impl Into<String>,
        kind: TransactionType,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            color: color.into(),
        }
    }

    /// Case-insensitive name comparison used for lookups and duplicate checks
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_valid_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check that a color token is a `#` followed by three or six hex digits
pub fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Pick a palette color for the n-th category
pub fn palette_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// Categories seeded into a fresh data directory
pub fn default_categories() -> Vec<Category> {
    let income = [
        ("Salary", "#10b981"),
        ("Freelance", "#3b82f6"),
        ("Investments", "#8b5cf6"),
        ("Other Income", "#14b8a6"),
    ];
    let expense = [
        ("Food", "#ef4444"),
        ("Transport", "#f59e0b"),
        ("Housing", "#6366f1"),
        ("Utilities", "#0ea5e9"),
        ("Entertainment", "#ec4899"),
        ("Health", "#22c55e"),
        ("Shopping", "#f97316"),
        ("Other", "#64748b"),
    ];

    income
        .iter()
        .map(|(name, color)| Category::with_color(*name, TransactionType::Income, *color))
        .chain(
            expense
                .iter()
                .map(|(name, color)| Category::with_color(*name, TransactionType::Expense, *color)),
        )
        .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
            Self::InvalidColor(color) => {
                write!(f, "Invalid color '{}'; expected a hex color like #3b82f6", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_uses_default_color() {
        let category = Category::new("Groceries", TransactionType::Expense);
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("  ", TransactionType::Expense);
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "x".repeat(51);
        assert_eq!(category.validate(), Err(CategoryValidationError::NameTooLong(51)));

        category.name = "Rent".into();
        category.color = "blue".into();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_color_tokens() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#6B7280"));
        assert!(!is_valid_color("6b7280"));
        assert!(!is_valid_color("#6b728"));
        assert!(!is_valid_color("#gggggg"));
    }

    #[test]
    fn test_has_name_ignores_case_and_whitespace() {
        let category = Category::new("Dining Out", TransactionType::Expense);
        assert!(category.has_name("dining out"));
        assert!(category.has_name(" DINING OUT "));
        assert!(!category.has_name("Dining"));
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), CATEGORY_PALETTE[0]);
        assert_eq!(palette_color(CATEGORY_PALETTE.len()), CATEGORY_PALETTE[0]);
    }

    #[test]
    fn test_default_categories_cover_both_types() {
        let defaults = default_categories();
        assert!(defaults.iter().any(|c| c.kind == TransactionType::Income));
        assert!(defaults.iter().any(|c| c.kind == TransactionType::Expense));
        assert!(defaults.iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_serialization_uses_type_field() {
        let category = Category::with_color("Salary", TransactionType::Income, "#10b981");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["color"], "#10b981");
    }
}
