use super::obis_parser;
use super::structs::CodeDefinition;
use super::ObisError;
use std::collections::HashMap;

/// The OBIS codes known to one meter, indexed by identifier with a
/// secondary name index.
///
/// Both indexes are updated together on every insert; a name entry always
/// points at a primary entry carrying that name.
#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    codes: HashMap<String, CodeDefinition>,
    name_index: HashMap<String, String>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        CodeRegistry {
            codes: HashMap::new(),
            name_index: HashMap::new(),
        }
    }

    /// Insert or overwrite a definition, keyed by its identifier string.
    ///
    /// Identifiers that fail the format guard are rejected and leave the
    /// registry untouched.
    pub fn insert(&mut self, def: CodeDefinition) -> Result<(), ObisError> {
        if !obis_parser::is_valid_code(&def.code) {
            return Err(ObisError::InvalidFormat(def.code.clone()));
        }

        // Overwriting under a new name must not leave the old name behind.
        if let Some(previous) = self.codes.get(&def.code) {
            self.name_index.remove(&previous.name);
        }

        self.name_index.insert(def.name.clone(), def.code.clone());
        self.codes.insert(def.code.clone(), def);
        Ok(())
    }

    pub fn lookup(&self, code: &str) -> Option<&CodeDefinition> {
        self.codes.get(code)
    }

    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.name_index.get(name).map(|s| s.as_str())
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&CodeDefinition> {
        self.code_for_name(name).and_then(|code| self.codes.get(code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn name_count(&self) -> usize {
        self.name_index.len()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &CodeDefinition> {
        self.codes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValueKind;

    fn power_def() -> CodeDefinition {
        CodeDefinition::new("1.0.1.7.0.255", "current_power", "Current Power", "W", ValueKind::Float)
    }

    #[test]
    fn test_insert_updates_both_indexes() {
        let mut registry = CodeRegistry::new();
        registry.insert(power_def()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.name_count(), 1);
        assert_eq!(registry.code_for_name("current_power"), Some("1.0.1.7.0.255"));
        assert_eq!(registry.lookup_by_name("current_power").unwrap().unit, "W");
    }

    #[test]
    fn test_invalid_code_is_rejected_untouched() {
        let mut registry = CodeRegistry::new();
        let bad = CodeDefinition::new("1.0.0", "broken", "Broken", "", ValueKind::Text);
        assert!(registry.insert(bad).is_err());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.name_count(), 0);
        assert!(registry.code_for_name("broken").is_none());
    }

    #[test]
    fn test_reinsert_overwrites_by_identifier() {
        let mut registry = CodeRegistry::new();
        registry.insert(power_def()).unwrap();

        let renamed =
            CodeDefinition::new("1.0.1.7.0.255", "active_power", "Active Power", "W", ValueKind::Float);
        registry.insert(renamed).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.name_count(), 1);
        assert!(registry.code_for_name("current_power").is_none());
        assert_eq!(registry.code_for_name("active_power"), Some("1.0.1.7.0.255"));
    }

    #[test]
    fn test_indexes_stay_consistent() {
        let mut registry = CodeRegistry::new();
        registry.insert(power_def()).unwrap();
        registry
            .insert(CodeDefinition::new("1.0.1.8.0.255", "total_energy", "Total Energy", "kWh", ValueKind::Float))
            .unwrap();
        registry
            .insert(CodeDefinition::new("1.0.1.7.0.255", "power", "Power", "W", ValueKind::Float))
            .unwrap();

        assert_eq!(registry.len(), registry.name_count());
        for def in registry.definitions() {
            assert_eq!(registry.code_for_name(&def.name), Some(def.code.as_str()));
        }
    }
}
