use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// Expense category from the fixed enumerated set.
    ///
    /// Serialized with the exact names the backend stores (`"Food"`,
    /// `"Travel"`, ...).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Category {
        Food,
        Travel,
        Shopping,
        Bills,
        Others,
    }

    impl Category {
        pub const ALL: [Category; 5] = [
            Category::Food,
            Category::Travel,
            Category::Shopping,
            Category::Bills,
            Category::Others,
        ];

        /// Returns the canonical category string used on the wire.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Food => "Food",
                Self::Travel => "Travel",
                Self::Shopping => "Shopping",
                Self::Bills => "Bills",
                Self::Others => "Others",
            }
        }
    }

    impl std::str::FromStr for Category {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Self::ALL
                .into_iter()
                .find(|category| category.as_str().eq_ignore_ascii_case(s))
                .ok_or_else(|| format!("unsupported category: {s}"))
        }
    }

    /// Scope of a list query: everything, or one category.
    ///
    /// Changing the filter invalidates the current view and requires a fresh
    /// fetch.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub enum Filter {
        #[default]
        All,
        Category(Category),
    }

    impl Filter {
        /// The wire parameter for a list request; `None` means unscoped.
        pub fn category(self) -> Option<Category> {
            match self {
                Self::All => None,
                Self::Category(category) => Some(category),
            }
        }

        pub fn label(self) -> &'static str {
            match self {
                Self::All => "All",
                Self::Category(category) => category.as_str(),
            }
        }
    }

    /// One expense as the backend returns it.
    ///
    /// `amount` is an integer count of minor units; the boundary never
    /// transmits a decimal currency value.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i64,
        pub amount: i64,
        pub category: Category,
        pub description: String,
        /// ISO calendar date, no time component.
        pub date: NaiveDate,
    }

    /// Request payload for creating an expense.
    ///
    /// Serialized into the request query string by serde, so free-text fields
    /// are percent-encoded rather than concatenated into the URL.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub amount: i64,
        pub category: Category,
        pub description: String,
        pub expense_date: NaiveDate,
    }
}
