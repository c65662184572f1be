//! Scripted wizard runs.

use blockprint_catalog::Manifest;
use serde::{Deserialize, Serialize};

use crate::canvas::CanvasType;
use crate::error::{Result, WizardError};
use crate::session::{PropValues, WizardSession};

/// Every answer of a wizard run, in one document.
///
/// ```json
/// {
///   "canvas": "form-entry",
///   "blocks": ["Button"],
///   "props": { "Button": { "variant": "primary" } },
///   "layout": "DefaultLayout",
///   "theme": "dark",
///   "title": "Sign up"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WizardAnswers {
    pub canvas: CanvasType,
    #[serde(default)]
    pub blocks: Vec<String>,
    #[serde(default)]
    pub props: PropValues,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub title: String,
}

impl WizardAnswers {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(WizardError::InvalidAnswers)
    }

    /// Drive a fresh session through every step, ending on the output step.
    ///
    /// Each answer goes through the same checks as an interactive edit.
    pub fn apply<'m>(&self, manifest: &'m Manifest) -> Result<WizardSession<'m>> {
        let mut session = WizardSession::new(manifest);

        session.select_canvas(self.canvas)?;
        session.next()?;

        for block in &self.blocks {
            if !session.is_selected(block) {
                session.toggle_block(block)?;
            }
        }
        session.next()?;

        for (component, values) in &self.props {
            for (prop, value) in values {
                session.set_prop(component, prop, value.clone())?;
            }
        }
        session.next()?;

        if let Some(layout) = &self.layout {
            session.set_layout(layout.clone())?;
        }
        if let Some(theme) = &self.theme {
            session.set_theme(theme.clone())?;
        }
        session.set_title(self.title.clone())?;
        session.next()?;

        Ok(session)
    }
}
