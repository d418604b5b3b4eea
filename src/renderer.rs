use crate::{
    config::Template,
    constants::device,
    error::{Error, Result},
};
use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior};
use serde_json::{json, Map, Value};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(
        &self,
        template: &str,
        context: &Value,
        template_name: Option<&str>,
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are errors, so a render source referring to a parameter the
/// template does not declare fails instead of silently producing an empty value.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("temp");
        Ok(self.env.render_named_str(name, template, context)?)
    }
}

/// Builds the configuration entry of a device from the collected answers.
///
/// Templates with a render source are rendered and parsed as YAML. Otherwise the
/// entry references the template by id and lists every non-empty answer.
pub fn render_device(
    engine: &dyn TemplateRenderer,
    template: &Template,
    answers: &IndexMap<String, String>,
) -> Result<Value> {
    let Some(source) = &template.render else {
        let mut entry = Map::new();
        if let Some(name) = answers.get(device::NAME) {
            entry.insert(device::NAME.to_string(), json!(name));
        }
        entry.insert(device::TYPE.to_string(), json!(device::TEMPLATE_TYPE));
        entry.insert(device::TEMPLATE.to_string(), json!(template.template));
        for (key, value) in answers {
            if key != device::NAME && !value.is_empty() {
                entry.insert(key.clone(), json!(value));
            }
        }
        return Ok(Value::Object(entry));
    };

    let rendered = engine.render(source, &json!(answers), Some(&template.template))?;
    log::debug!("Rendered template '{}':\n{rendered}", template.template);

    let entry: Value = serde_yaml::from_str(&rendered).map_err(|e| Error::RenderError {
        template: template.template.clone(),
        reason: e.to_string(),
    })?;
    if !entry.is_object() {
        return Err(Error::RenderError {
            template: template.template.clone(),
            reason: "the rendered device is not a mapping".to_string(),
        });
    }

    Ok(entry)
}
