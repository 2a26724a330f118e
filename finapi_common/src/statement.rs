use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// **The kind of a statement operation**
///
/// Credits increase the balance, debits decrease it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Credit,
    Debit,
}

/// **A single statement entry**
///
/// Entries are immutable once appended. A statement applied in insertion
/// order rebuilds the account's balance from zero.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Returns a credit entry timestamped with the current UTC time.
    pub fn credit(amount: Decimal, description: Option<String>) -> Self {
        Operation {
            amount,
            description,
            operation_type: OperationType::Credit,
            created_at: Utc::now(),
        }
    }

    /// Returns a debit entry timestamped with the current UTC time.
    ///
    /// Debits carry no description.
    pub fn debit(amount: Decimal) -> Self {
        Operation {
            amount,
            description: None,
            operation_type: OperationType::Debit,
            created_at: Utc::now(),
        }
    }
}

/// **Computes the balance of a statement**
///
/// Sum of credit amounts minus sum of debit amounts, folded in insertion
/// order. An empty statement has a balance of zero.
pub fn balance(statement: &[Operation]) -> Decimal {
    statement
        .iter()
        .fold(Decimal::ZERO, |acc, op| match op.operation_type {
            OperationType::Credit => acc + op.amount,
            OperationType::Debit => acc - op.amount,
        })
}

/// **Filters a statement down to a single calendar day**
///
/// Keeps the operations whose `created_at`, truncated to the UTC calendar
/// day, equals `date`. The time of day is ignored; operations on adjacent
/// days are excluded.
pub fn filter_by_date(statement: &[Operation], date: NaiveDate) -> Vec<Operation> {
    statement
        .iter()
        .filter(|op| op.created_at.date_naive() == date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    /// An operation pinned to a specific UTC date and time, for date-filter tests.
    fn op_on(y: i32, m: u32, d: u32, h: u32, operation_type: OperationType) -> Operation {
        Operation {
            amount: dec!(10),
            description: None,
            operation_type,
            created_at: Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap(),
        }
    }

    #[test]
    fn balance_of_empty_statement_is_zero() {
        assert_eq!(Decimal::ZERO, balance(&[]));
    }

    #[test]
    fn balance_is_credits_minus_debits() {
        let statement = vec![
            Operation::credit(dec!(100), Some("salary".to_string())),
            Operation::debit(dec!(30)),
            Operation::credit(dec!(0.10), None),
            Operation::debit(dec!(0.20)),
        ];

        assert_eq!(dec!(69.90), balance(&statement));
    }

    #[test]
    fn balance_has_no_floating_point_drift() {
        // 0.1 added ten times is exactly 1 in decimal arithmetic.
        let statement: Vec<Operation> =
            (0..10).map(|_| Operation::credit(dec!(0.1), None)).collect();

        assert_eq!(dec!(1), balance(&statement));
    }

    #[test]
    fn filter_by_date_keeps_only_the_requested_day() {
        let statement = vec![
            op_on(2024, 3, 14, 0, OperationType::Credit),
            op_on(2024, 3, 14, 23, OperationType::Debit),
            op_on(2024, 3, 13, 23, OperationType::Credit),
            op_on(2024, 3, 15, 0, OperationType::Credit),
        ];

        let day = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let filtered = filter_by_date(&statement, day);

        assert_eq!(2, filtered.len());
        assert!(filtered.iter().all(|op| op.created_at.date_naive() == day));
    }

    #[test]
    fn filter_by_date_of_empty_statement_is_empty() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert!(filter_by_date(&[], day).is_empty());
    }

    #[test]
    fn debit_carries_no_description() {
        let op = Operation::debit(dec!(5));
        assert_eq!(None, op.description);
        assert_eq!(OperationType::Debit, op.operation_type);
    }
}
