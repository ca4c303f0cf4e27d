//! JSON catalog interchange: import user-supplied rubrics, export the
//! active one.
//!
//! The wire format is a JSON array of requirement objects
//! `{id, name, description, type?, points, check}` where `check` is a
//! tagged predicate spec. A document that is not valid JSON rejects the
//! whole import; a definition whose check cannot be understood is kept
//! with an always-false predicate.

use serde::{Deserialize, Serialize};

use rubric_core::errors::CatalogError;

use super::{infer_category, Catalog, PredicateSpec, RequirementDef};
use crate::classifier::FileType;

/// A requirement as it appears on the wire. `check` stays raw until
/// loading so one bad definition cannot reject the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireRequirement {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "type")]
    category: Option<FileType>,
    points: u32,
    check: serde_json::Value,
}

/// Loader for JSON rubric catalogs.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a JSON string.
    pub fn load_from_str(json: &str) -> Result<Catalog, CatalogError> {
        let wire: Vec<WireRequirement> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Catalog::new(wire.into_iter().map(Self::load_def).collect()))
    }

    /// Load a catalog from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Catalog, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Parse(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::load_from_str(&content)
    }

    /// Turn one wire definition into a requirement. A check that does not
    /// deserialize or validate degrades to `Never`; the definition stays.
    fn load_def(wire: WireRequirement) -> RequirementDef {
        let check = match serde_json::from_value::<PredicateSpec>(wire.check) {
            Ok(spec) => match spec.validate() {
                Ok(()) => spec,
                Err(message) => {
                    tracing::warn!(
                        id = %wire.id,
                        %message,
                        "check failed to compile; requirement will score false"
                    );
                    PredicateSpec::Never
                }
            },
            Err(e) => {
                tracing::warn!(
                    id = %wire.id,
                    error = %e,
                    "unrecognized check; requirement will score false"
                );
                PredicateSpec::Never
            }
        };

        if wire.points == 0 {
            tracing::warn!(id = %wire.id, "requirement has zero points");
        }

        let category = wire
            .category
            .or_else(|| Some(infer_category(&wire.id, &wire.name)));

        RequirementDef {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            category,
            points: wire.points,
            check,
        }
    }
}

/// Exporter producing the same wire format.
pub struct CatalogExporter;

impl CatalogExporter {
    /// Serialize a catalog to pretty JSON. Re-importing the output yields
    /// a catalog with identical pass/fail behavior.
    pub fn export(catalog: &Catalog) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(catalog.requirements())
            .map_err(|e| CatalogError::Serialize(e.to_string()))
    }
}
