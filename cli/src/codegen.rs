//! Wrapper code generation
//!
//! Each exported component can be wrapped in a React component and re-exported
//! from an index file. Both outputs are produced by pluggable templates: the
//! built-in Liquid templates are embedded at compile time, custom Liquid files
//! can be loaded from disk, and closures work as templates when the crate is
//! used as a library.

use crate::error::{ExportError, Result};
use crate::extract::{Component, ComponentMap};
use crate::svg;
use include_dir::{Dir, include_dir};
use liquid::ParserBuilder;
use std::path::Path;

// Embed templates at compile time
static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates/react");

const COMPONENT_TEMPLATE: &str = "component.tsx.liquid";
const EXPORT_TEMPLATE: &str = "export.ts.liquid";

/// Everything a component template can draw from
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext<'a> {
    pub component: &'a Component,
    /// Optimized SVG markup
    pub svg: &'a str,
    /// The same markup as JSX, with props spread on the root element
    pub jsx: &'a str,
}

/// Renders the source of one wrapper module
pub trait ComponentTemplate {
    fn render(&self, ctx: &ComponentContext<'_>) -> Result<String>;
}

/// Renders the index line re-exporting one component
pub trait ExportTemplate {
    fn render(&self, component: &Component) -> Result<String>;
}

impl<F> ComponentTemplate for F
where
    F: Fn(&ComponentContext<'_>) -> String,
{
    fn render(&self, ctx: &ComponentContext<'_>) -> Result<String> {
        Ok(self(ctx))
    }
}

impl<F> ExportTemplate for F
where
    F: Fn(&Component) -> String,
{
    fn render(&self, component: &Component) -> Result<String> {
        Ok(self(component))
    }
}

/// A parsed Liquid template
pub struct LiquidTemplate {
    template: liquid::Template,
}

impl std::fmt::Debug for LiquidTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiquidTemplate").finish_non_exhaustive()
    }
}

impl LiquidTemplate {
    pub fn parse(source: &str) -> Result<Self> {
        let parser = ParserBuilder::with_stdlib().build()?;
        let template = parser.parse(source)?;
        Ok(Self { template })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            ExportError::Template(format!(
                "Failed to read template {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&source)
    }

    fn embedded(name: &str) -> Result<Self> {
        let file = TEMPLATES
            .get_file(name)
            .ok_or_else(|| ExportError::Template(format!("template not found: {}", name)))?;
        let source = file
            .contents_utf8()
            .ok_or_else(|| ExportError::Template(format!("template is not valid UTF-8: {}", name)))?;
        Self::parse(source)
    }

    /// Built-in React component template
    pub fn default_component() -> Result<Self> {
        Self::embedded(COMPONENT_TEMPLATE)
    }

    /// Built-in `export * from './<path>'` template
    pub fn default_export() -> Result<Self> {
        Self::embedded(EXPORT_TEMPLATE)
    }
}

fn component_object(component: &Component) -> liquid::Object {
    liquid::object!({
        "id": component.id,
        "name": component.name,
        "folder": component.folder.clone().unwrap_or_default(),
        "path": component.path(),
        "identifier": component.identifier(),
    })
}

impl ComponentTemplate for LiquidTemplate {
    fn render(&self, ctx: &ComponentContext<'_>) -> Result<String> {
        let mut globals = component_object(ctx.component);
        globals.insert("svg".into(), liquid::model::Value::scalar(ctx.svg.to_string()));
        globals.insert("jsx".into(), liquid::model::Value::scalar(ctx.jsx.to_string()));
        Ok(self.template.render(&globals)?)
    }
}

impl ExportTemplate for LiquidTemplate {
    fn render(&self, component: &Component) -> Result<String> {
        let rendered = self.template.render(&component_object(component))?;
        Ok(rendered.trim_end().to_string())
    }
}

/// The pair of templates used for a run
pub struct Templates {
    pub component: Box<dyn ComponentTemplate>,
    pub export: Box<dyn ExportTemplate>,
}

impl Templates {
    /// Built-in templates for both outputs
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            component: Box::new(LiquidTemplate::default_component()?),
            export: Box::new(LiquidTemplate::default_export()?),
        })
    }

    /// Load custom Liquid templates from disk, falling back to the built-ins
    pub fn load(component: Option<&Path>, export: Option<&Path>) -> Result<Self> {
        let component = match component {
            Some(path) => LiquidTemplate::from_file(path)?,
            None => LiquidTemplate::default_component()?,
        };
        let export = match export {
            Some(path) => LiquidTemplate::from_file(path)?,
            None => LiquidTemplate::default_export()?,
        };
        Ok(Self {
            component: Box::new(component),
            export: Box::new(export),
        })
    }
}

/// Generate the wrapper module for one component
pub fn generate_component(
    svg: &str,
    component: &Component,
    template: &dyn ComponentTemplate,
) -> Result<String> {
    let jsx = svg::to_jsx(svg, &component.path())?;
    template.render(&ComponentContext {
        component,
        svg,
        jsx: &jsx,
    })
}

/// Generate the index file, one export per component in extraction order
pub fn generate_index(components: &ComponentMap, template: &dyn ExportTemplate) -> Result<String> {
    let lines = components
        .iter()
        .map(|component| template.render(component))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
