//! Wizard flow over device categories
//!
//! For every category the operator decides whether to add a device, picks a template
//! from the catalog and answers its parameters. Each configured device is rendered
//! into an entry of the [`ConfigDocument`].

use crate::{
    config::{DeviceCategory, ElementCatalog, Question, Template, ValueType},
    constants::device,
    error::{Error, Result},
    i18n::keys,
    prompt::{PromptHandler, PromptProvider},
    renderer::{render_device, TemplateRenderer},
};
use indexmap::IndexMap;
use serde_json::{json, Value};

/// Configured devices grouped by document section
#[derive(Debug, Default, PartialEq)]
pub struct ConfigDocument {
    sections: IndexMap<String, Vec<Value>>,
}

impl ConfigDocument {
    pub fn push(&mut self, category: DeviceCategory, device: Value) {
        self.sections.entry(category.section().to_string()).or_default().push(device);
    }

    pub fn devices(&self, section: &str) -> &[Value] {
        self.sections.get(section).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.sections)?)
    }
}

/// Drives the operator through device selection and parameter questions
pub struct Wizard<'a, P: PromptProvider> {
    handler: &'a PromptHandler<'a, P>,
    catalog: &'a dyn ElementCatalog,
    engine: &'a dyn TemplateRenderer,
    used_names: Vec<String>,
}

impl<'a, P: PromptProvider> Wizard<'a, P> {
    pub fn new(
        handler: &'a PromptHandler<'a, P>,
        catalog: &'a dyn ElementCatalog,
        engine: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { handler, catalog, engine, used_names: Vec::new() }
    }

    /// Runs the wizard over `categories` in the given order
    pub fn run(&mut self, categories: &[DeviceCategory]) -> Result<ConfigDocument> {
        let mut document = ConfigDocument::default();
        for &category in categories {
            self.configure_category(category, &mut document)?;
        }
        Ok(document)
    }

    fn configure_category(
        &mut self,
        category: DeviceCategory,
        document: &mut ConfigDocument,
    ) -> Result<()> {
        let prompt = self.handler.messages().localize_with(
            keys::ADD_DEVICE,
            &json!({ "article": category.article(), "title": category.title() }),
        );

        while self.handler.ask_yes_no(&prompt)? {
            let Some(template) = self.handler.select_item(category, self.catalog)? else {
                log::info!("No {category} template selected");
                continue;
            };

            if let Some(device) = self.configure_device(category, &template)? {
                document.push(category, device);
            }
        }

        Ok(())
    }

    /// Asks the device name and every template parameter, then renders the device.
    ///
    /// Returns `None` when rendering failed and the operator chose not to retry.
    fn configure_device(
        &mut self,
        category: DeviceCategory,
        template: &Template,
    ) -> Result<Option<Value>> {
        loop {
            let mut answers = IndexMap::new();
            let name = self.handler.ask_value(&self.name_question(category))?;
            answers.insert(device::NAME.to_string(), name.clone());

            for param in &template.params {
                let answer = self.handler.ask_value(&param.to_question())?;
                answers.insert(param.name.clone(), answer);
            }

            match render_device(self.engine, template, &answers) {
                Ok(device) => {
                    log::info!("Configured {category} '{name}' from '{}'", template.template);
                    self.used_names.push(name);
                    return Ok(Some(device));
                }
                Err(err @ (Error::MinijinjaError(_) | Error::RenderError { .. })) => {
                    log::error!("{err}");
                    println!("{} {err}", self.handler.messages().localize(keys::RENDER_ERROR));
                    if !self.handler.ask_config_failure_next_step()? {
                        return Ok(None);
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn name_question(&self, category: DeviceCategory) -> Question {
        Question::new(self.handler.messages().localize(keys::DEVICE_NAME), ValueType::String)
            .required(true)
            .with_default(self.next_free_name(category))
            .with_invalid_values(self.used_names.clone())
    }

    fn next_free_name(&self, category: DeviceCategory) -> String {
        let prefix = category.default_name_prefix();
        let mut n = 1;
        loop {
            let name = format!("{prefix}{n}");
            if !self.used_names.contains(&name) {
                return name;
            }
            n += 1;
        }
    }
}
