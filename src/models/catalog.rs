//! Category catalog
//!
//! Single shared lookup from category name to display metadata (chart color
//! and icon), plus the category lists offered when entering a transaction.
//! Every consumer resolves styles here so the tables cannot drift apart.

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Chart color (hex)
    pub color: &'static str,
    /// Display icon
    pub icon: &'static str,
}

/// Fallback style for categories without an entry
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    color: "#AAB7B8",
    icon: "📦",
};

/// The fixed category that absorbs the recurring-expense total
pub const RECURRING_CATEGORY: &str = "Servicios";

/// Known category styles, in display order
const CATEGORY_STYLES: &[(&str, CategoryStyle)] = &[
    ("Alimentación", CategoryStyle { color: "#FF6B6B", icon: "🍔" }),
    ("Transporte", CategoryStyle { color: "#4ECDC4", icon: "🚕" }),
    ("Vivienda", CategoryStyle { color: "#45B7D1", icon: "🏠" }),
    ("Ocio", CategoryStyle { color: "#FFA07A", icon: "🎮" }),
    ("Educación", CategoryStyle { color: "#98D8C8", icon: "📚" }),
    ("Servicios", CategoryStyle { color: "#F7DC6F", icon: "💡" }),
    ("Salud", CategoryStyle { color: "#BB8FCE", icon: "🏥" }),
    ("Ropa", CategoryStyle { color: "#85C1E2", icon: "👕" }),
    ("Otros", CategoryStyle { color: "#AAB7B8", icon: "📦" }),
];

/// Expense categories offered by the input form, with their icons
pub const EXPENSE_CATEGORIES: &[(&str, &str)] = &[
    ("Alimentación", "🍔"),
    ("Transporte", "🚕"),
    ("Vivienda", "🏠"),
    ("Ocio", "🎮"),
    ("Educación", "📚"),
    ("Servicios", "💡"),
    ("Salud", "🏥"),
    ("Ropa", "👕"),
    ("Otros", "📦"),
];

/// Income categories offered by the input form, with their icons
pub const INCOME_CATEGORIES: &[(&str, &str)] = &[
    ("Salario", "💼"),
    ("Freelance", "💻"),
    ("Inversiones", "📈"),
    ("Extra", "💰"),
    ("Otros", "💵"),
];

/// Resolve the display style for a category name
///
/// Unknown categories fall back to [`DEFAULT_STYLE`].
pub fn style_for(category: &str) -> CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_style() {
        let style = style_for("Alimentación");
        assert_eq!(style.color, "#FF6B6B");
        assert_eq!(style.icon, "🍔");
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let style = style_for("Mascotas");
        assert_eq!(style, DEFAULT_STYLE);
    }

    #[test]
    fn test_recurring_category_is_styled() {
        let style = style_for(RECURRING_CATEGORY);
        assert_eq!(style.icon, "💡");
        assert_ne!(style, DEFAULT_STYLE);
    }

    #[test]
    fn test_form_category_icons_match_catalog() {
        // The form lists must agree with the style table where they overlap
        for (name, icon) in EXPENSE_CATEGORIES {
            assert_eq!(style_for(name).icon, *icon, "icon mismatch for {}", name);
        }
    }
}
