//! Sorting types for ordered list endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(AppError::validation(format!(
                "Invalid sort direction '{s}', expected ASC or DESC"
            )))
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Column a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    /// The entity's name.
    Name,
    /// The server-assigned creation timestamp.
    CreatedAt,
}

impl OrderField {
    /// Return the column name in the schema.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for OrderField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            other => Err(AppError::validation(format!(
                "Cannot order by '{other}', expected name or createdAt"
            ))),
        }
    }
}

/// A sort order made of a field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Column to sort by.
    pub field: OrderField,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: OrderField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: OrderField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Parse the `{field}/{dir}` pair taken from a request path.
    pub fn parse(field: &str, direction: &str) -> Result<Self, AppError> {
        Ok(Self::new(field.parse()?, direction.parse()?))
    }

    /// Render an `ORDER BY` clause. Ties are broken by id in the same direction.
    pub fn order_by_clause(&self) -> String {
        let dir = self.direction.as_sql();
        format!("ORDER BY {} {dir}, id {dir}", self.field.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_direction_is_case_insensitive() {
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!("Desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    }

    #[test]
    fn test_unknown_direction_is_validation_error() {
        let err = "sideways".parse::<SortDirection>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_field_aliases() {
        assert_eq!("name".parse::<OrderField>().unwrap(), OrderField::Name);
        assert_eq!(
            "createdAt".parse::<OrderField>().unwrap(),
            OrderField::CreatedAt
        );
        assert_eq!(
            "created_at".parse::<OrderField>().unwrap(),
            OrderField::CreatedAt
        );
        assert!("id; DROP TABLE item".parse::<OrderField>().is_err());
    }

    #[test]
    fn test_order_by_clause() {
        let sort = SortField::parse("createdAt", "DESC").unwrap();
        assert_eq!(sort.order_by_clause(), "ORDER BY created_at DESC, id DESC");
        assert_eq!(
            SortField::asc(OrderField::Name).order_by_clause(),
            "ORDER BY name ASC, id ASC"
        );
    }
}
