//! The movement record and its category, the engine's input model.
//!
//! A movement is a single dated income or expense. The stored amount always
//! carries a non-negative magnitude; whether the movement adds to or
//! subtracts from the balance is decided by its kind. Amounts and dates are
//! validated once here, at the boundary, so the reporting functions never
//! have to re-check them.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The ID of a movement record.
pub type MovementId = i64;

/// The ID of a category.
pub type CategoryId = i64;

/// The display bucket for movements without a resolved category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Whether a movement brings money in or spends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// The movement contributes positively to the balance.
    Income,
    /// The movement contributes negatively to the balance.
    Expense,
}

/// A category for grouping movements, e.g., 'Groceries', 'Salary'.
///
/// Categories are read-only input to the engine; they arrive denormalised on
/// each movement and are never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,

    /// The display name of the category.
    pub description: String,

    /// The accent colour assigned to the category, as a CSS colour string.
    pub color: String,

    /// The icon assigned to the category.
    pub icon: String,

    /// The movement kind this category can tag.
    pub kind: MovementKind,
}

impl Category {
    /// Create a category with a validated, trimmed description.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyDescription] if `description` is empty after
    /// trimming whitespace.
    pub fn new(
        id: CategoryId,
        description: &str,
        color: &str,
        icon: &str,
        kind: MovementKind,
    ) -> Result<Self, Error> {
        let description = description.trim();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(Self {
            id,
            description: description.to_owned(),
            color: color.to_owned(),
            icon: icon.to_owned(),
            kind,
        })
    }
}

/// A single dated financial movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// The ID of the movement.
    pub id: MovementId,

    /// Free-text label describing the movement.
    pub description: String,

    /// The non-negative magnitude of the movement.
    pub amount: f64,

    /// The calendar date of the movement.
    ///
    /// `None` when the upstream record carried a date that could not be
    /// parsed. Undated movements still count towards plain totals but are
    /// skipped by every month-bucketed report.
    pub date: Option<Date>,

    /// Whether the movement is income or an expense.
    pub kind: MovementKind,

    /// Reference to the movement's category, if one was assigned.
    pub category_id: Option<CategoryId>,

    /// The denormalised category join, if it resolved.
    pub category: Option<Category>,
}

impl Movement {
    /// Create a validated movement with no date or category attached.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyDescription] if the trimmed description is empty,
    /// [Error::NonFiniteAmount] if `amount` is NaN or infinite, or
    /// [Error::NegativeAmount] if `amount` is below zero.
    pub fn new(
        id: MovementId,
        description: &str,
        amount: f64,
        kind: MovementKind,
    ) -> Result<Self, Error> {
        let description = description.trim();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if !amount.is_finite() {
            return Err(Error::NonFiniteAmount(amount));
        }

        if amount < 0.0 {
            return Err(Error::NegativeAmount(amount));
        }

        Ok(Self {
            id,
            description: description.to_owned(),
            amount,
            date: None,
            kind,
            category_id: None,
            category: None,
        })
    }

    /// Set the movement date.
    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Parse and set the movement date from a `YYYY-MM-DD` string.
    ///
    /// A value that does not parse leaves the movement undated rather than
    /// failing, since presentation must stay resilient to upstream data
    /// quality issues.
    pub fn with_date_str(mut self, date: &str) -> Self {
        self.date = parse_movement_date(date);
        self
    }

    /// Attach the denormalised category join.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category_id = Some(category.id);
        self.category = Some(category);
        self
    }

    /// The display name used to group this movement.
    ///
    /// Falls back to [UNCATEGORIZED_LABEL] when no category resolved.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map_or(UNCATEGORIZED_LABEL, |category| {
                category.description.as_str()
            })
    }
}

/// Parse a `YYYY-MM-DD` date, discarding values that do not parse.
///
/// The discard is logged at warn level; it is the only partial failure the
/// engine tolerates.
pub fn parse_movement_date(value: &str) -> Option<Date> {
    match Date::parse(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(error) => {
            tracing::warn!("excluding unparseable movement date {value:?}: {error}");
            None
        }
    }
}
