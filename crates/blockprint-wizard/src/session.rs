//! The five-step wizard state machine.
//!
//! Each step is a variant of [`WizardState`]. Every variant after canvas
//! selection owns a [`Draft`] with a chosen canvas, so later steps can never
//! observe a missing one. Edits that change an upstream choice rebuild the
//! downstream parts of the draft instead of patching them.

use std::fmt;

use blockprint_catalog::{CatalogEntry, Collection, Manifest, PropSpec};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::canvas::{candidates, canvas_options, CanvasType};
use crate::error::{Result, WizardError};
use crate::generate::{generate, GeneratedOutput, OutputOptions};

/// Recorded property values, keyed by block name then property name.
pub type PropValues = IndexMap<String, IndexMap<String, String>>;

/// Layout sentinel meaning "no layout component".
pub const BLANK_LAYOUT: &str = "Blank Canvas";

/// Themes offered in the layout and theme step.
pub const THEMES: [&str; 5] = ["light", "dark", "corporate", "midnight", "blueprint"];

/// Collections searched, in order, when resolving a selected block.
const RESOLVE_ORDER: [Collection; 4] = [
    Collection::Components,
    Collection::Layouts,
    Collection::Utils,
    Collection::Hooks,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    CanvasSelect,
    BlockSelect,
    Customize,
    LayoutAndTheme,
    GenerateOutput,
}

impl Step {
    /// One-based position in the flow.
    pub fn number(self) -> usize {
        match self {
            Step::CanvasSelect => 1,
            Step::BlockSelect => 2,
            Step::Customize => 3,
            Step::LayoutAndTheme => 4,
            Step::GenerateOutput => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::CanvasSelect => "Choose Your Canvas",
            Step::BlockSelect => "Pick Your Blocks",
            Step::Customize => "Customize Your Blocks",
            Step::LayoutAndTheme => "Layout & Polish",
            Step::GenerateOutput => "Your Code / AI Prompt",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Choices accumulated once a canvas is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    canvas: CanvasType,
    blocks: IndexSet<String>,
    props: PropValues,
    layout: Option<String>,
    theme: Option<String>,
    title: String,
}

impl Draft {
    fn new(canvas: CanvasType) -> Self {
        Self {
            canvas,
            blocks: IndexSet::new(),
            props: PropValues::new(),
            layout: None,
            theme: None,
            title: String::new(),
        }
    }

    /// Same draft on another canvas: blocks and their props are dropped.
    fn retarget(self, canvas: CanvasType) -> Self {
        Self {
            canvas,
            blocks: IndexSet::new(),
            props: PropValues::new(),
            ..self
        }
    }

    pub fn canvas(&self) -> CanvasType {
        self.canvas
    }

    pub fn blocks(&self) -> &IndexSet<String> {
        &self.blocks
    }

    pub fn props(&self) -> &PropValues {
        &self.props
    }
}

/// Where the wizard is, with exactly the data valid at that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// `None` until a canvas is picked.
    CanvasSelect(Option<Draft>),
    BlockSelect(Draft),
    Customize(Draft),
    LayoutAndTheme(Draft),
    GenerateOutput(Draft),
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::CanvasSelect(None)
    }
}

impl WizardState {
    pub fn step(&self) -> Step {
        match self {
            WizardState::CanvasSelect(_) => Step::CanvasSelect,
            WizardState::BlockSelect(_) => Step::BlockSelect,
            WizardState::Customize(_) => Step::Customize,
            WizardState::LayoutAndTheme(_) => Step::LayoutAndTheme,
            WizardState::GenerateOutput(_) => Step::GenerateOutput,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            WizardState::CanvasSelect(draft) => draft.as_ref(),
            WizardState::BlockSelect(draft)
            | WizardState::Customize(draft)
            | WizardState::LayoutAndTheme(draft)
            | WizardState::GenerateOutput(draft) => Some(draft),
        }
    }
}

/// Flat snapshot of the wizard's choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSessionConfig {
    pub canvas_type: Option<CanvasType>,
    pub selected_components: Vec<String>,
    pub component_props: PropValues,
    pub layout: Option<String>,
    pub initial_theme: Option<String>,
    pub page_title: String,
}

/// One editable property in the customize step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropField<'m> {
    pub prop: &'m PropSpec,
    /// Recorded value, else the documented default, else empty.
    pub value: String,
}

/// The editable properties of one selected block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFields<'m> {
    pub name: String,
    /// `None` when no collection has an entry with this name.
    pub entry: Option<&'m CatalogEntry>,
    pub fields: Vec<PropField<'m>>,
}

/// First entry named `name` in components, layouts, utils, then hooks.
pub fn resolve_block<'m>(manifest: &'m Manifest, name: &str) -> Option<&'m CatalogEntry> {
    RESOLVE_ORDER
        .iter()
        .find_map(|collection| manifest.find(*collection, name))
}

/// A single wizard run over a manifest.
#[derive(Debug, Clone)]
pub struct WizardSession<'m> {
    manifest: &'m Manifest,
    state: WizardState,
}

impl<'m> WizardSession<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            state: WizardState::default(),
        }
    }

    pub fn manifest(&self) -> &'m Manifest {
        self.manifest
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    /// Canvases offered for the manifest.
    pub fn canvas_options(&self) -> Vec<CanvasType> {
        canvas_options(self.manifest)
    }

    /// Blocks offered for the chosen canvas; empty before one is chosen.
    pub fn candidates(&self) -> Vec<&'m CatalogEntry> {
        match self.state.draft() {
            Some(draft) => candidates(draft.canvas, self.manifest),
            None => Vec::new(),
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.state
            .draft()
            .is_some_and(|draft| draft.blocks.contains(name))
    }

    /// Layouts documented with the `layout` category, then [`BLANK_LAYOUT`].
    pub fn layout_options(&self) -> Vec<String> {
        self.manifest
            .layouts
            .iter()
            .filter(|layout| layout.category == "layout")
            .map(|layout| layout.name.clone())
            .chain(std::iter::once(BLANK_LAYOUT.to_string()))
            .collect()
    }

    pub fn theme_options(&self) -> &'static [&'static str] {
        &THEMES
    }

    /// Pick the canvas.
    ///
    /// Always drops the selected blocks and their recorded props, even when
    /// the same canvas is picked again.
    pub fn select_canvas(&mut self, canvas: CanvasType) -> Result<()> {
        let WizardState::CanvasSelect(draft) = &mut self.state else {
            return Err(self.wrong_step("selecting a canvas", Step::CanvasSelect));
        };
        let rebuilt = match draft.take() {
            Some(previous) => previous.retarget(canvas),
            None => Draft::new(canvas),
        };
        tracing::debug!(%canvas, "canvas selected");
        *draft = Some(rebuilt);
        Ok(())
    }

    /// Add or remove a block; returns whether it is selected afterwards.
    ///
    /// Any toggle drops every recorded prop value.
    pub fn toggle_block(&mut self, name: &str) -> Result<bool> {
        let manifest = self.manifest;
        let WizardState::BlockSelect(draft) = &mut self.state else {
            return Err(self.wrong_step("toggling a block", Step::BlockSelect));
        };
        if !candidates(draft.canvas, manifest)
            .iter()
            .any(|entry| entry.name == name)
        {
            return Err(WizardError::NotACandidate {
                name: name.to_string(),
                canvas: draft.canvas.to_string(),
            });
        }

        let selected = if draft.blocks.shift_remove(name) {
            false
        } else {
            draft.blocks.insert(name.to_string());
            true
        };
        draft.props.clear();
        tracing::debug!(block = name, selected, "block toggled");
        Ok(selected)
    }

    /// Editable fields for every selected block, in selection order.
    pub fn customize_fields(&self) -> Result<Vec<BlockFields<'m>>> {
        let WizardState::Customize(draft) = &self.state else {
            return Err(self.wrong_step("customizing blocks", Step::Customize));
        };

        Ok(draft
            .blocks
            .iter()
            .map(|name| {
                let entry = resolve_block(self.manifest, name);
                let recorded = draft.props.get(name);
                let fields = entry
                    .map(|entry| {
                        entry
                            .props
                            .iter()
                            .map(|prop| PropField {
                                prop,
                                value: recorded
                                    .and_then(|values| values.get(&prop.name))
                                    .filter(|value| !value.is_empty())
                                    .or(prop.default.as_ref())
                                    .cloned()
                                    .unwrap_or_default(),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                BlockFields {
                    name: name.clone(),
                    entry,
                    fields,
                }
            })
            .collect())
    }

    /// Record a raw string value for a documented property.
    ///
    /// The value is not checked against the property's declared type.
    pub fn set_prop(&mut self, component: &str, prop: &str, value: impl Into<String>) -> Result<()> {
        let manifest = self.manifest;
        let WizardState::Customize(draft) = &mut self.state else {
            return Err(self.wrong_step("setting a property", Step::Customize));
        };
        if !draft.blocks.contains(component) {
            return Err(WizardError::NotSelected {
                name: component.to_string(),
            });
        }
        if resolve_block(manifest, component)
            .and_then(|entry| entry.prop(prop))
            .is_none()
        {
            return Err(WizardError::UnknownProp {
                component: component.to_string(),
                prop: prop.to_string(),
            });
        }

        draft
            .props
            .entry(component.to_string())
            .or_default()
            .insert(prop.to_string(), value.into());
        Ok(())
    }

    pub fn set_layout(&mut self, layout: impl Into<String>) -> Result<()> {
        self.polish("choosing a layout")?.layout = Some(layout.into());
        Ok(())
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) -> Result<()> {
        self.polish("choosing a theme")?.theme = Some(theme.into());
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.polish("setting the title")?.title = title.into();
        Ok(())
    }

    /// Move to the following step.
    pub fn next(&mut self) -> Result<Step> {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            WizardState::CanvasSelect(Some(draft)) => WizardState::BlockSelect(draft),
            WizardState::CanvasSelect(None) => {
                return Err(WizardError::CanvasRequired);
            }
            WizardState::BlockSelect(draft) => WizardState::Customize(draft),
            WizardState::Customize(draft) => WizardState::LayoutAndTheme(draft),
            WizardState::LayoutAndTheme(draft) => WizardState::GenerateOutput(draft),
            WizardState::GenerateOutput(draft) => {
                self.state = WizardState::GenerateOutput(draft);
                return Err(WizardError::NoSuchTransition {
                    step: Step::GenerateOutput,
                    direction: "forward",
                });
            }
        };
        tracing::debug!(step = %self.step(), "wizard advanced");
        Ok(self.step())
    }

    /// Move to the previous step, keeping every choice made so far.
    pub fn back(&mut self) -> Result<Step> {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            WizardState::CanvasSelect(draft) => {
                self.state = WizardState::CanvasSelect(draft);
                return Err(WizardError::NoSuchTransition {
                    step: Step::CanvasSelect,
                    direction: "back",
                });
            }
            WizardState::BlockSelect(draft) => WizardState::CanvasSelect(Some(draft)),
            WizardState::Customize(draft) => WizardState::BlockSelect(draft),
            WizardState::LayoutAndTheme(draft) => WizardState::Customize(draft),
            WizardState::GenerateOutput(draft) => WizardState::LayoutAndTheme(draft),
        };
        tracing::debug!(step = %self.step(), "wizard went back");
        Ok(self.step())
    }

    /// Snapshot of the current choices.
    pub fn config(&self) -> WizardSessionConfig {
        match self.state.draft() {
            Some(draft) => WizardSessionConfig {
                canvas_type: Some(draft.canvas),
                selected_components: draft.blocks.iter().cloned().collect(),
                component_props: draft.props.clone(),
                layout: draft.layout.clone(),
                initial_theme: draft.theme.clone(),
                page_title: draft.title.clone(),
            },
            None => WizardSessionConfig::default(),
        }
    }

    /// Generated texts; only available on the last step.
    pub fn output(&self, options: &OutputOptions) -> Result<GeneratedOutput> {
        if self.step() != Step::GenerateOutput {
            return Err(self.wrong_step("generating output", Step::GenerateOutput));
        }
        generate(&self.config(), options)
    }

    fn polish(&mut self, action: &'static str) -> Result<&mut Draft> {
        let actual = self.step();
        match &mut self.state {
            WizardState::LayoutAndTheme(draft) => Ok(draft),
            _ => Err(WizardError::WrongStep {
                action,
                expected: Step::LayoutAndTheme,
                actual,
            }),
        }
    }

    fn wrong_step(&self, action: &'static str, expected: Step) -> WizardError {
        WizardError::WrongStep {
            action,
            expected,
            actual: self.step(),
        }
    }
}
