use crate::error::AppError;
use polars::prelude::{AnyValue, DataFrame, PolarsResult};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

fn float_to_json(value: f64) -> Value {
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Converts one dataframe cell to JSON. Non-finite floats become null.
fn any_value_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::Int8(i) => Value::from(i),
        AnyValue::Int16(i) => Value::from(i),
        AnyValue::Int32(i) => Value::from(i),
        AnyValue::Int64(i) => Value::from(i),
        AnyValue::UInt8(u) => Value::from(u),
        AnyValue::UInt16(u) => Value::from(u),
        AnyValue::UInt32(u) => Value::from(u),
        AnyValue::UInt64(u) => Value::from(u),
        AnyValue::Float32(f) => float_to_json(f64::from(f)),
        AnyValue::Float64(f) => float_to_json(f),
        other => Value::String(other.to_string()),
    }
}

/// Weekly player statistics as returned by a data source: named columns and
/// rows of scalar cells. Cells are passed through to the output untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl WeeklyTable {
    /// Builds a table, rejecting any row whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, AppError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(AppError::RaggedRow {
                row: index,
                expected: columns.len(),
                found: row.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Builds a records view of a dataframe, one cell per column and row.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, AppError> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = Vec::with_capacity(df.height());
        for row_idx in 0..df.height() {
            let row = df
                .get_columns()
                .iter()
                .map(|series| series.get(row_idx).map(any_value_to_json))
                .collect::<PolarsResult<Vec<Value>>>()?;
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts the table to one JSON object per row, keys in column order.
    pub fn to_records(&self) -> Result<Vec<Map<String, Value>>, AppError> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        if let Some(duplicate) = self.columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(AppError::DuplicateColumn {
                column: duplicate.clone(),
            });
        }

        Ok(self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect::<Map<String, Value>>()
            })
            .collect())
    }

    /// Serializes the table as a single-line JSON array of row objects.
    pub fn to_records_json(&self) -> Result<String, AppError> {
        let records = self.to_records()?;
        Ok(serde_json::to_string(&records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use serde_json::json;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_records_keep_row_and_column_order() {
        let table = WeeklyTable::new(
            columns(&["player", "week", "season", "yards"]),
            vec![
                vec![json!("A"), json!(1), json!(2024), json!(80)],
                vec![json!("B"), json!(1), json!(2024), json!(45)],
            ],
        )
        .unwrap();

        assert_eq!(
            table.to_records_json().unwrap(),
            r#"[{"player":"A","week":1,"season":2024,"yards":80},{"player":"B","week":1,"season":2024,"yards":45}]"#
        );
    }

    #[test]
    fn test_empty_table_serializes_to_empty_array() {
        let table = WeeklyTable::new(columns(&["player", "week"]), vec![]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.to_records_json().unwrap(), "[]");
    }

    #[test]
    fn test_null_cells_become_json_null() {
        let table = WeeklyTable::new(
            columns(&["player", "passing_yards"]),
            vec![vec![json!("A"), Value::Null]],
        )
        .unwrap();
        assert_eq!(
            table.to_records_json().unwrap(),
            r#"[{"player":"A","passing_yards":null}]"#
        );
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let result = WeeklyTable::new(
            columns(&["a", "b"]),
            vec![vec![json!(1), json!(2)], vec![json!(3)]],
        );
        assert!(matches!(
            result,
            Err(AppError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_duplicate_columns_fail_record_conversion() {
        let table = WeeklyTable::new(
            columns(&["week", "week"]),
            vec![vec![json!(1), json!(2)]],
        )
        .unwrap();
        let error = table.to_records_json().unwrap_err();
        assert!(matches!(error, AppError::DuplicateColumn { ref column } if column == "week"));
    }

    #[test]
    fn test_from_dataframe_keeps_types_and_nulls() {
        let df = df!(
            "player" => ["A", "B"],
            "week" => [1i64, 2],
            "epa" => [Some(0.5f64), None],
            "starter" => [true, false],
        )
        .unwrap();

        let table = WeeklyTable::from_dataframe(&df).unwrap();
        assert_eq!(table.columns(), &columns(&["player", "week", "epa", "starter"])[..]);
        assert_eq!(
            table.rows()[0],
            vec![json!("A"), json!(1), json!(0.5), json!(true)]
        );
        assert_eq!(
            table.rows()[1],
            vec![json!("B"), json!(2), Value::Null, json!(false)]
        );
    }

    #[test]
    fn test_non_finite_floats_become_null() {
        assert_eq!(any_value_to_json(AnyValue::Float64(f64::NAN)), Value::Null);
        assert_eq!(any_value_to_json(AnyValue::Float32(f32::INFINITY)), Value::Null);
        assert_eq!(any_value_to_json(AnyValue::UInt32(7)), json!(7));
    }
}
