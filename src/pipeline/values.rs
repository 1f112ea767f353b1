//! Record weight extraction from the designated values column.

use polars::prelude::*;

use super::optimizer::OptimizerError;

/// Pull the values column out of the dataset as one weight per record.
///
/// The column must exist, cast to Float64, and contain only finite values;
/// negative weights are allowed. Record identity is the row position, so
/// the returned vector is in row order.
pub fn extract_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, OptimizerError> {
    let series = df
        .column(column)
        .map_err(|_| OptimizerError::MissingColumn {
            column: column.to_string(),
        })?;

    let float_col = series
        .cast(&DataType::Float64)
        .map_err(|_| OptimizerError::NonNumericColumn {
            column: column.to_string(),
        })?;
    let ca = float_col
        .f64()
        .map_err(|_| OptimizerError::NonNumericColumn {
            column: column.to_string(),
        })?;

    let mut values = Vec::with_capacity(df.height());
    for (row, opt_val) in ca.iter().enumerate() {
        match opt_val {
            Some(v) if v.is_finite() => values.push(v),
            Some(_) => {
                return Err(OptimizerError::NonFiniteValue {
                    column: column.to_string(),
                    row,
                })
            }
            None => {
                return Err(OptimizerError::NullValue {
                    column: column.to_string(),
                    row,
                })
            }
        }
    }
    Ok(values)
}
