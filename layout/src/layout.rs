//! Record layout definition and validation.

use std::collections::HashSet;

use crate::error::{LayoutError, LayoutResult};
use crate::FieldDef;

/// An ordered record layout: the field set, per-field encodings, and the
/// direct-axis wrap bound for a generation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordLayout {
    /// Fields in serialization order.
    pub fields: Vec<FieldDef>,

    /// Inclusive upper bound for the direct-axis index; `None` lets it grow
    /// unbounded over the run.
    pub id_max: Option<i32>,
}

impl RecordLayout {
    /// Creates a layout from ordered fields after validation.
    pub fn new(fields: Vec<FieldDef>, id_max: Option<i32>) -> LayoutResult<Self> {
        let layout = Self { fields, id_max };
        layout.validate()?;
        Ok(layout)
    }

    /// Creates a layout builder.
    #[must_use]
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder {
            fields: Vec::new(),
            id_max: None,
        }
    }

    /// Validates layout invariants.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.fields.is_empty() {
            return Err(LayoutError::EmptyLayout);
        }

        let mut names = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(LayoutError::DuplicateFieldName {
                    name: field.name.clone(),
                });
            }
        }

        if let Some(id_max) = self.id_max {
            if id_max < 0 {
                return Err(LayoutError::InvalidIdBound { id_max });
            }
        }
        Ok(())
    }

    /// Returns the serialized size of one record in bytes.
    #[must_use]
    pub fn record_size(&self) -> usize {
        self.fields.iter().map(|field| field.encoding.width()).sum()
    }
}

/// Builder for `RecordLayout`.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    fields: Vec<FieldDef>,
    id_max: Option<i32>,
}

impl LayoutBuilder {
    /// Adds a field definition.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the inclusive direct-axis wrap bound.
    #[must_use]
    pub const fn id_max(mut self, id_max: i32) -> Self {
        self.id_max = Some(id_max);
        self
    }

    /// Builds the layout after validation.
    pub fn build(self) -> LayoutResult<RecordLayout> {
        RecordLayout::new(self.fields, self.id_max)
    }
}
