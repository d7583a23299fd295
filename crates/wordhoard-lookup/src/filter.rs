use std::collections::BTreeSet;
use wordhoard_model::{Field, WordRecord};

/// Fields to leave out of the returned record.
///
/// Filtering is cosmetic: the lookup still queries both sources and still
/// fails if the word is missing from either, so excluding a field never
/// relaxes the existence contract.
#[derive(Debug, Clone, Default)]
pub struct FieldFilter {
    excluded: BTreeSet<Field>,
}

impl FieldFilter {
    pub fn exclude(mut self, field: Field) -> Self {
        self.excluded.insert(field);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn apply(&self, record: &mut WordRecord) {
        for field in &self.excluded {
            record.clear_field(*field);
        }
    }
}

impl FromIterator<Field> for FieldFilter {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            excluded: iter.into_iter().collect(),
        }
    }
}
