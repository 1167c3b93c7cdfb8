//! Static catalog: expected document taxonomy and creatable templates

mod taxonomy;
mod templates;

pub use taxonomy::{flatten, list_templates, taxonomy, TaxonomyNode, TemplateEntry};
pub use templates::{render_template, template_for, template_types};
