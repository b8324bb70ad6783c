//! Entity tables and their categorical domains.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four tables of the dataset. Table names never come from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    Providers,
    Receivers,
    FoodListings,
    Claims,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Providers,
        Table::Receivers,
        Table::FoodListings,
        Table::Claims,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Providers => "Providers",
            Self::Receivers => "Receivers",
            Self::FoodListings => "Food_Listings",
            Self::Claims => "Claims",
        }
    }

    /// Case-insensitive lookup by table name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Exact, case-sensitive match against the stored label.
            pub fn parse(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

categorical! {
    /// Lifecycle state of a claim.
    ClaimStatus {
        Pending => "Pending",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

categorical! {
    FoodType {
        Vegetarian => "Vegetarian",
        NonVegetarian => "Non-Vegetarian",
        Vegan => "Vegan",
        Other => "Other",
    }
}

categorical! {
    MealType {
        Breakfast => "Breakfast",
        Lunch => "Lunch",
        Dinner => "Dinner",
        Snacks => "Snacks",
        Other => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for status in ClaimStatus::ALL {
            assert_eq!(ClaimStatus::parse(status.as_str()), Some(*status));
        }
        assert_eq!(FoodType::parse("Non-Vegetarian"), Some(FoodType::NonVegetarian));
        assert_eq!(MealType::parse("Snacks"), Some(MealType::Snacks));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(ClaimStatus::parse("pending"), None);
        assert_eq!(ClaimStatus::parse("Shipped"), None);
        assert_eq!(FoodType::parse(""), None);
    }

    #[test]
    fn table_lookup_is_case_insensitive() {
        assert_eq!(Table::parse("food_listings"), Some(Table::FoodListings));
        assert_eq!(Table::parse("Claims"), Some(Table::Claims));
        assert_eq!(Table::parse("sqlite_master"), None);
    }
}
