use crate::{
    cli::Args,
    config::{Catalog, DeviceCategory},
    constants::STDOUT_INDICATOR,
    error::Result,
    i18n::{keys, Localizer},
    ioutils::{check_output_file, document_header, write_file},
    prompt::get_prompt_handler,
    renderer::MiniJinjaRenderer,
    wizard::Wizard,
};
use serde_json::json;
use std::path::PathBuf;

/// Main CLI runner that orchestrates the wizard session
pub struct Runner<'a> {
    args: Args,
    messages: &'a dyn Localizer,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, messages: &'a dyn Localizer) -> Self {
        Self { args, messages }
    }

    /// Executes the complete configuration workflow
    pub fn run(self) -> Result<()> {
        let output = self.output_path();
        if let Some(output) = &output {
            check_output_file(output, self.args.force)?;
        }

        let catalog = Catalog::load(&self.args.catalog)?;
        let categories = self.categories(&catalog);
        log::debug!("Configuring categories: {categories:?}");

        let engine = MiniJinjaRenderer::new();
        let handler = get_prompt_handler(self.messages);
        let document = Wizard::new(&handler, &catalog, &engine).run(&categories)?;

        if document.is_empty() {
            log::warn!("No devices were configured");
        }

        let content =
            format!("{}{}", document_header(chrono::Local::now()), document.to_yaml()?);

        match output {
            Some(output) => {
                write_file(&content, &output)?;
                println!(
                    "{}",
                    self.messages.localize_with(
                        keys::DONE,
                        &json!({ "output": output.display().to_string() })
                    )
                );
            }
            None => print!("{content}"),
        }
        Ok(())
    }

    /// Categories requested on the command line, or every category of the catalog
    fn categories(&self, catalog: &Catalog) -> Vec<DeviceCategory> {
        if self.args.categories.is_empty() {
            catalog.categories()
        } else {
            self.args.categories.clone()
        }
    }

    fn output_path(&self) -> Option<PathBuf> {
        self.args.output.clone().filter(|output| output.as_os_str() != STDOUT_INDICATOR)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args, messages: &dyn Localizer) -> Result<()> {
    let runner = Runner::new(args, messages);
    runner.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Messages;
    use clap::Parser;

    #[test]
    fn dash_output_means_stdout() {
        let messages = Messages::new();
        let runner = Runner::new(Args::parse_from(["devconf", "c.yaml", "-o", "-"]), &messages);
        assert_eq!(runner.output_path(), None);

        let runner =
            Runner::new(Args::parse_from(["devconf", "c.yaml", "-o", "out.yaml"]), &messages);
        assert_eq!(runner.output_path(), Some(PathBuf::from("out.yaml")));
    }

    #[test]
    fn categories_default_to_catalog() {
        let messages = Messages::new();
        let catalog: Catalog = serde_yaml::from_str(
            "templates:\n  - {template: a, category: vehicle}\n  - {template: b, category: charger}\n",
        )
        .unwrap();

        let runner = Runner::new(Args::parse_from(["devconf", "c.yaml"]), &messages);
        assert_eq!(
            runner.categories(&catalog),
            vec![DeviceCategory::Charger, DeviceCategory::Vehicle]
        );

        let runner =
            Runner::new(Args::parse_from(["devconf", "c.yaml", "-c", "vehicle"]), &messages);
        assert_eq!(runner.categories(&catalog), vec![DeviceCategory::Vehicle]);
    }

    #[test]
    fn missing_catalog_fails_before_prompting() {
        let messages = Messages::new();
        let args = Args::parse_from(["devconf", "/nonexistent/catalog.yaml"]);
        assert!(run(args, &messages).is_err());
    }
}
