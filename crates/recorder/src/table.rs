use serde::Serialize;

/// The value type of a recorded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Real,
    Integer,
    Boolean,
}

/// One recorded output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// A single recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Real(f64),
    Integer(i32),
    Boolean(bool),
}

impl Value {
    /// Returns the value as a real number, widening integers and booleans.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Real(v) => v,
            Self::Integer(v) => f64::from(v),
            Self::Boolean(v) => f64::from(u8::from(v)),
        }
    }
}

/// One sampled time point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub time: f64,

    /// Output values, in column order.
    pub values: Vec<Value>,
}

/// The recorded result of a run.
///
/// The schema is a `time` column followed by the output columns. Rows appear
/// in sampling order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub(crate) columns: Vec<Column>,
    pub(crate) rows: Vec<Row>,
}

impl Table {
    /// Returns the output columns, excluding `time`.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the sampled times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.time)
    }

    /// Returns every value of the named output column.
    ///
    /// Returns `None` if there is no such column.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = Value> + '_> {
        let index = self.columns.iter().position(|c| c.name == name)?;
        Some(self.rows.iter().map(move |row| row.values[index]))
    }
}
