use std::sync::Arc;

use anyhow::Context;
use relay_templates_contracts::{
    RenderedTemplate, Template, TemplateService, BASE_TEMPLATE, TEMPLATES,
};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    /// Compile all built-in templates.
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        // autoescaping is keyed on the template name, so html templates keep
        // their extension
        tera.add_raw_template("base.html", BASE_TEMPLATE)
            .context("Failed to compile base template")?;

        for &(name, html, text) in TEMPLATES {
            tera.add_raw_template(&format!("{name}.html"), html)
                .with_context(|| format!("Failed to compile html template {name}"))?;
            tera.add_raw_template(&format!("{name}.txt"), text)
                .with_context(|| format!("Failed to compile text template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    #[tracing::instrument(level = "trace", skip_all, fields(template = T::NAME))]
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<RenderedTemplate> {
        let context = tera::Context::from_serialize(template)?;
        let html = self
            .tera
            .render(&format!("{}.html", T::NAME), &context)?;
        let text = self.tera.render(&format!("{}.txt", T::NAME), &context)?;
        Ok(RenderedTemplate { html, text })
    }
}
