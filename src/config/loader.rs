//! Catalog loading and management

use crate::config::question::Question;
use crate::config::types::{deserialize_bound, DefaultValue, DeviceCategory, ValueType};
use crate::constants::{device, CATALOG_FILENAMES};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// One parameter of a device template
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    /// Key the answer is stored under
    pub name: String,
    /// Prompt label, falls back to `name`
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub default: DefaultValue,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub mask: bool,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub min: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_bound")]
    pub max: Option<i64>,
    #[serde(default)]
    pub exclude_none: bool,
}

impl Param {
    /// Builds the question asked for this parameter
    pub fn to_question(&self) -> Question {
        let label = if self.description.is_empty() { &self.name } else { &self.description };
        let mut question = Question::new(label.as_str(), self.value_type)
            .with_help(self.help.as_str())
            .with_default(self.default.clone())
            .with_bounds(self.min, self.max)
            .masked(self.mask)
            .required(self.required)
            .exclude_none(self.exclude_none);
        if let Some(example) = &self.example {
            question = question.with_example(example.as_str());
        }
        question
    }
}

/// A device template offered in pick lists
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    /// Template identifier written into the configuration
    pub template: String,
    /// Label shown in pick lists
    #[serde(default)]
    pub description: String,
    pub category: DeviceCategory,
    #[serde(default)]
    pub params: Vec<Param>,
    /// MiniJinja source producing the YAML device entry
    #[serde(default)]
    pub render: Option<String>,
}

/// Source of the templates offered for a device category
pub trait ElementCatalog {
    fn fetch_elements(&self, category: DeviceCategory) -> Vec<Template>;
}

/// All device templates known to the wizard
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl ElementCatalog for Catalog {
    fn fetch_elements(&self, category: DeviceCategory) -> Vec<Template> {
        self.templates.iter().filter(|t| t.category == category).cloned().collect()
    }
}

impl Catalog {
    /// Loads a catalog from a file or from a directory holding one of
    /// [`CATALOG_FILENAMES`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Self::load_file(path);
        }

        for catalog_file_name in CATALOG_FILENAMES.iter() {
            let catalog_file_path = path.join(catalog_file_name);
            if catalog_file_path.exists() {
                return Self::load_file(&catalog_file_path);
            }
        }

        Err(Error::CatalogNotFound {
            catalog_dir: path.display().to_string(),
            catalog_files: CATALOG_FILENAMES.join(", "),
        })
    }

    fn load_file(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loading catalog from {}", path.display());

        let catalog: Catalog = match extension {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => return Err(Error::CatalogFormatError { path: path.display().to_string() }),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let mut ids = HashSet::new();
        for template in &self.templates {
            if template.template.is_empty() {
                return Err(Error::CatalogValidation("template id must not be empty".into()));
            }
            if !ids.insert(&template.template) {
                return Err(Error::CatalogValidation(format!(
                    "template '{}' is defined more than once",
                    template.template
                )));
            }

            let mut names = HashSet::new();
            for param in &template.params {
                if param.name.is_empty() || param.name == device::NAME {
                    return Err(Error::CatalogValidation(format!(
                        "template '{}' has a parameter with the reserved or empty name '{}'",
                        template.template, param.name
                    )));
                }
                if !names.insert(&param.name) {
                    return Err(Error::CatalogValidation(format!(
                        "template '{}' defines parameter '{}' more than once",
                        template.template, param.name
                    )));
                }
                if let (Some(min), Some(max)) = (param.min, param.max) {
                    if min > max {
                        return Err(Error::CatalogValidation(format!(
                            "parameter '{}' of template '{}' has min {min} greater than max {max}",
                            param.name, template.template
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Categories that have at least one template, in [`DeviceCategory`] order
    pub fn categories(&self) -> Vec<DeviceCategory> {
        DeviceCategory::ALL
            .into_iter()
            .filter(|category| self.templates.iter().any(|t| t.category == *category))
            .collect()
    }
}
