//! Bundled example knowledge base.

use crate::model::ExampleEntry;
use once_cell::sync::Lazy;
use pia_common_config::KnowledgeConfig;
use pia_common_core::Result;
use std::path::Path;

static BUNDLED: Lazy<Vec<ExampleEntry>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../data/pia_knowledge_base.json")).unwrap_or_else(|e| {
        tracing::error!(error = %e, "bundled knowledge base is malformed");
        Vec::new()
    })
});

/// Entries of the knowledge base shipped with the application.
pub fn bundled_entries() -> &'static [ExampleEntry] {
    &BUNDLED
}

/// Read an example knowledge base from a JSON file.
pub fn load_entries(path: &Path) -> Result<Vec<ExampleEntry>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Number of entries in the example base selected by `config`.
pub fn example_count(config: &KnowledgeConfig) -> Result<usize> {
    match &config.example_dataset {
        Some(path) => load_entries(path).map(|entries| entries.len()),
        None => Ok(bundled_entries().len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pia_test_utils::{assert_err, temp_file_named};

    #[test]
    fn test_bundled_dataset_parses() {
        let entries = bundled_entries();
        assert_eq!(entries.len(), 14);
        assert!(entries.iter().all(|e| !e.slug.is_empty()));
    }

    #[test]
    fn test_example_count_from_file() {
        let (_dir, path) = temp_file_named(
            "kb.json",
            r#"[{"slug":"a","filters":"f","category":"c","placeholder":"p","name":"A","description":"d"}]"#,
        );
        let config = KnowledgeConfig {
            example_dataset: Some(path),
        };
        assert_eq!(example_count(&config).unwrap(), 1);
    }

    #[test]
    fn test_example_count_defaults_to_bundled() {
        assert_eq!(
            example_count(&KnowledgeConfig::default()).unwrap(),
            bundled_entries().len()
        );
    }

    #[test]
    fn test_missing_or_bad_file() {
        let config = KnowledgeConfig {
            example_dataset: Some("/nonexistent/kb.json".into()),
        };
        assert_err!(example_count(&config));

        let (_dir, path) = temp_file_named("kb.json", "{not json");
        assert!(matches!(
            load_entries(&path),
            Err(pia_common_core::Error::Serialization(_))
        ));
    }
}
