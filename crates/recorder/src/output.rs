use fmisim_core::{
    ModelAdapter, ModelDescription, Recorder, SampleError, ScalarVariable, Status, ValueReference,
    VariableKind,
};

use crate::{Column, ColumnKind, LayoutError, Row, Table, Value};

/// Value references of one type and a buffer to read them into.
#[derive(Debug, Clone)]
struct Channel<T> {
    references: Vec<ValueReference>,
    buffer: Vec<T>,
}

impl<T: Copy + Default> Channel<T> {
    fn new(references: Vec<ValueReference>) -> Self {
        let buffer = vec![T::default(); references.len()];
        Self { references, buffer }
    }

    fn read<F>(&mut self, call: &'static str, get: F) -> Result<(), SampleError>
    where
        F: FnOnce(&[ValueReference], &mut [T]) -> Status,
    {
        if self.references.is_empty() {
            return Ok(());
        }

        match get(&self.references, &mut self.buffer) {
            Status::Ok => Ok(()),
            Status::Warning => {
                tracing::warn!(call, "model reported a warning while sampling");
                Ok(())
            }
            status => Err(SampleError::Status { call, status }),
        }
    }
}

/// Records model outputs into a [`Table`].
///
/// Columns are grouped by type: reals, then integers, then booleans, each
/// group in the order the variables appear in the model description.
/// Enumerations are recorded as integers.
///
/// # Example
///
/// ```ignore
/// let mut recorder = OutputRecorder::with_outputs(&description, &["h", "v"])?;
/// model_exchange::solve_unobserved(&mut model, &config, &mut recorder)?;
/// let table = recorder.result();
/// ```
#[derive(Debug, Clone)]
pub struct OutputRecorder {
    columns: Vec<Column>,
    reals: Channel<f64>,
    integers: Channel<i32>,
    booleans: Channel<bool>,
    rows: Vec<Row>,
}

impl OutputRecorder {
    /// Records every variable with output causality.
    ///
    /// String outputs are skipped.
    #[must_use]
    pub fn new(description: &ModelDescription) -> Self {
        let selected = description
            .outputs()
            .filter(|v| v.kind != VariableKind::String);
        Self::from_variables(selected)
    }

    /// Records the named variables, regardless of their causality.
    ///
    /// # Errors
    ///
    /// Returns an error if a name does not match any variable, or names a
    /// string variable.
    pub fn with_outputs<S: AsRef<str>>(
        description: &ModelDescription,
        names: &[S],
    ) -> Result<Self, LayoutError> {
        for name in names {
            let name = name.as_ref();
            match description.variable(name) {
                None => return Err(LayoutError::UnknownOutput(name.to_string())),
                Some(v) if v.kind == VariableKind::String => {
                    return Err(LayoutError::StringOutput(name.to_string()));
                }
                Some(_) => {}
            }
        }

        let selected = description
            .variables
            .iter()
            .filter(|v| names.iter().any(|n| n.as_ref() == v.name));
        Ok(Self::from_variables(selected))
    }

    fn from_variables<'a>(variables: impl Iterator<Item = &'a ScalarVariable>) -> Self {
        let mut reals = Vec::new();
        let mut integers = Vec::new();
        let mut booleans = Vec::new();

        for variable in variables {
            let group = match variable.kind {
                VariableKind::Real => &mut reals,
                VariableKind::Integer | VariableKind::Enumeration => &mut integers,
                VariableKind::Boolean => &mut booleans,
                VariableKind::String => continue,
            };
            group.push(variable);
        }

        let columns = [
            (&reals, ColumnKind::Real),
            (&integers, ColumnKind::Integer),
            (&booleans, ColumnKind::Boolean),
        ]
        .into_iter()
        .flat_map(|(group, kind)| {
            group.iter().map(move |v| Column {
                name: v.name.clone(),
                kind,
            })
        })
        .collect();

        let references = |group: &[&ScalarVariable]| -> Vec<ValueReference> {
            group.iter().map(|v| v.value_reference).collect()
        };

        Self {
            columns,
            reals: Channel::new(references(&reals)),
            integers: Channel::new(references(&integers)),
            booleans: Channel::new(references(&booleans)),
            rows: Vec::new(),
        }
    }

    /// Returns the output columns, excluding `time`.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the rows recorded so far.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the recorded table, leaving the recorder empty.
    pub fn result(&mut self) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: std::mem::take(&mut self.rows),
        }
    }

    /// Consumes the recorder and returns the recorded table.
    #[must_use]
    pub fn into_table(self) -> Table {
        Table {
            columns: self.columns,
            rows: self.rows,
        }
    }
}

impl<M: ModelAdapter + ?Sized> Recorder<M> for OutputRecorder {
    fn sample(&mut self, model: &mut M, time: f64) -> Result<(), SampleError> {
        self.reals
            .read("get_real", |refs, values| model.get_real(refs, values))?;
        self.integers
            .read("get_integer", |refs, values| model.get_integer(refs, values))?;
        self.booleans
            .read("get_boolean", |refs, values| model.get_boolean(refs, values))?;

        let values = self
            .reals
            .buffer
            .iter()
            .map(|v| Value::Real(*v))
            .chain(self.integers.buffer.iter().map(|v| Value::Integer(*v)))
            .chain(self.booleans.buffer.iter().map(|v| Value::Boolean(*v)))
            .collect();

        self.rows.push(Row { time, values });
        Ok(())
    }
}
