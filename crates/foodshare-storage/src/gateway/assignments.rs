//! Typed `field = value` lists for partial updates.

use std::fmt::Debug;

use foodshare_core::errors::{StoreError, StoreResult};
use foodshare_core::types::Value;

/// The closed set of assignable columns of one entity.
///
/// Identifier columns are deliberately absent: a row's id never changes.
pub trait EntityField: Copy + Eq + Debug + 'static {
    /// Entity name used in error messages.
    const ENTITY: &'static str;
    /// Every assignable field, in column order.
    const ALL: &'static [Self];

    /// Column name as stored.
    fn column(self) -> &'static str;

    /// Validate a value for this column, converting text input where the
    /// column is typed (integers, dates, categorical labels).
    fn normalize(self, value: Value) -> StoreResult<Value>;

    /// Case-insensitive lookup by column name.
    fn from_column(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.column().eq_ignore_ascii_case(name.trim()))
    }
}

/// Ordered assignments for one `UPDATE`. Setting a field twice keeps the
/// last value in the first position.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignments<F: EntityField> {
    entries: Vec<(F, Value)>,
}

impl<F: EntityField> Assignments<F> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builder form of [`Assignments::insert`].
    pub fn set(mut self, field: F, value: impl Into<Value>) -> Self {
        self.insert(field, value.into());
        self
    }

    pub fn insert(&mut self, field: F, value: Value) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Build from caller-named fields. Any name outside the entity's field
    /// set is rejected before a statement is built.
    pub fn from_named<I, K>(pairs: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut assignments = Self::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            let field = F::from_column(name).ok_or_else(|| {
                StoreError::invalid_field(F::ENTITY, name, "unknown or non-assignable field")
            })?;
            assignments.insert(field, value);
        }
        Ok(assignments)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &Value)> + '_ {
        self.entries.iter().map(|(f, v)| (*f, v))
    }

    /// `UPDATE <table> SET a = ?1, b = ?2 WHERE <id> = ?3` plus its parameters.
    pub(crate) fn update_statement(
        &self,
        table: &str,
        id_column: &str,
        id: i64,
    ) -> StoreResult<(String, Vec<Value>)> {
        let mut sets = Vec::with_capacity(self.entries.len());
        let mut params = Vec::with_capacity(self.entries.len() + 1);
        for (i, (field, value)) in self.entries.iter().enumerate() {
            sets.push(format!("{} = ?{}", field.column(), i + 1));
            params.push(field.normalize(value.clone())?);
        }
        params.push(Value::Integer(id));
        let sql = format!(
            "UPDATE {table} SET {} WHERE {id_column} = ?{}",
            sets.join(", "),
            params.len()
        );
        Ok((sql, params))
    }
}

impl<F: EntityField> Default for Assignments<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{ClaimField, FoodListingField};

    #[test]
    fn statement_lists_only_named_columns() {
        let assignments = Assignments::new()
            .set(FoodListingField::Quantity, 5_i64)
            .set(FoodListingField::Location, "Pune");
        let (sql, params) = assignments
            .update_statement("Food_Listings", "Food_ID", 9)
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE Food_Listings SET Quantity = ?1, Location = ?2 WHERE Food_ID = ?3"
        );
        assert_eq!(
            params,
            vec![Value::Integer(5), Value::from("Pune"), Value::Integer(9)]
        );
    }

    #[test]
    fn setting_twice_keeps_last_value() {
        let assignments = Assignments::new()
            .set(FoodListingField::Quantity, 1_i64)
            .set(FoodListingField::Quantity, 2_i64);
        assert_eq!(assignments.len(), 1);
        assert_eq!(
            assignments.iter().next(),
            Some((FoodListingField::Quantity, &Value::Integer(2)))
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = Assignments::<FoodListingField>::from_named([(
            "Quantity = 0; DROP TABLE Claims; --",
            Value::Integer(1),
        )])
        .unwrap_err();
        assert!(matches!(err, StoreError::InvalidField { .. }));
    }

    #[test]
    fn identifier_columns_are_not_assignable() {
        assert!(Assignments::<FoodListingField>::from_named([("Food_ID", Value::Integer(3))]).is_err());
        assert!(Assignments::<ClaimField>::from_named([("Claim_ID", Value::Integer(3))]).is_err());
    }

    #[test]
    fn named_lookup_ignores_case() {
        let assignments =
            Assignments::<ClaimField>::from_named([("status", Value::from("Completed"))]).unwrap();
        assert_eq!(assignments.iter().next().map(|(f, _)| f), Some(ClaimField::Status));
    }

    #[test]
    fn invalid_values_fail_before_sql_is_built() {
        let assignments = Assignments::new().set(FoodListingField::Quantity, -3_i64);
        let err = assignments
            .update_statement("Food_Listings", "Food_ID", 1)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidField { ref field, .. } if field == "Quantity"));
    }
}
