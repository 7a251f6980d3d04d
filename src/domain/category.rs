//! Static category registry and slug derivation.

use crate::domain::transaction::TransactionKind;

/// Display labels offered for income transactions, in menu order.
pub const INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Business",
    "Investment",
    "Gift",
    "Other Income",
];

/// Display labels offered for expense transactions, in menu order.
pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Groceries",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Dining Out",
    "Education",
    "Insurance",
    "Other Expense",
];

/// Ordered display labels allowed for the given transaction kind.
pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => &INCOME_CATEGORIES,
        TransactionKind::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Whether `slug` names a registered category for `kind`.
///
/// Membership is only enforced at creation time; records keep their stored
/// slug even if the registry changes later.
pub fn is_registered(kind: TransactionKind, slug: &str) -> bool {
    categories_for(kind)
        .iter()
        .any(|label| slugify(label) == slug)
}

/// Lowercases a label and collapses whitespace runs into single hyphens.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Title-cases a slug for display: `dining-out` becomes `Dining Out`.
///
/// Applies to any stored slug, payment methods included.
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
