use super::domain::{Category, Frequency};
use super::registry::FieldRegistry;

/// Buckets a frequency answer using the item's polarity pattern.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyClassifier<'a> {
    registry: &'a FieldRegistry,
}

impl<'a> FrequencyClassifier<'a> {
    pub fn new(registry: &'a FieldRegistry) -> Self {
        Self { registry }
    }

    /// Unrecognized labels are concerns; unknown codes use the positive-item pattern.
    pub fn categorize(&self, code: &str, label: &str) -> Category {
        self.categorize_frequency(code, &Frequency::parse(label))
    }

    pub fn categorize_frequency(&self, code: &str, frequency: &Frequency) -> Category {
        self.registry.pattern_for(code).category_for(frequency)
    }
}
