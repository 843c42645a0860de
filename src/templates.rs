//! Tera template setup.
//!
//! The health page template is embedded in the binary so the server can run
//! from any working directory. It has two substitution points: the page
//! title and the pre-rendered content fragment.

use tera::Tera;

use crate::error::AppError;

/// Name of the health page template.
pub const HEALTH_TEMPLATE: &str = "healthcheck.html";

/// Initialize the Tera template engine with the embedded templates.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(
        HEALTH_TEMPLATE,
        include_str!("../templates/healthcheck.html"),
    )?;
    Ok(tera)
}
