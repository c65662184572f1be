//! Wizard command implementation.
//!
//! Drives a [`WizardSession`] either from a JSON answers file or by asking
//! one question at a time on the terminal, then emits the page skeleton and
//! the generation prompt.

use std::fs;
use std::path::Path;

use blockprint_wizard::{
    CanvasType, GeneratedOutput, OutputOptions, Step, WizardAnswers, WizardSession,
};

use crate::cli::WizardArgs;
use crate::commands::utils;
use crate::config::{BlockprintConfig, ConfigOverrides};
use crate::error::{Result, ResultExt};
use crate::ui::{self, Prompter, TermPrompter};

/// File name of the page skeleton in `--out-dir`.
pub const SKELETON_FILE: &str = "page.tsx";
/// File name of the generation prompt in `--out-dir`.
pub const PROMPT_FILE: &str = "prompt.txt";

const BACK: &str = "b";
/// Customize answer that sets a property to the empty string.
const CLEAR: &str = "-";

/// Execute the wizard command.
pub fn execute(args: WizardArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        boilerplate: args.boilerplate.clone(),
        ..ConfigOverrides::default()
    };
    let config = BlockprintConfig::load(args.config.as_deref(), &overrides)?;

    let manifest = match &args.manifest {
        Some(path) => utils::load_manifest_file(path)?,
        None => utils::extract(&config.pipeline)?.manifest,
    };
    if manifest.is_empty() {
        ui::warning("The manifest has no entries; only the blank canvas has anything to offer");
    }

    let session = match &args.answers {
        Some(path) => {
            let text = fs::read_to_string(path).with_path(path)?;
            WizardAnswers::from_json(&text)?.apply(&manifest)?
        }
        None => {
            let mut prompter = TermPrompter::new()?;
            run_interactive(WizardSession::new(&manifest), &mut prompter)?
        }
    };

    let options = OutputOptions {
        boilerplate: config.boilerplate.clone(),
    };
    let output = session.output(&options)?;
    emit(&output, args.out_dir.as_deref())
}

/// Write both texts into `out_dir`, or print them to stdout.
pub fn emit(output: &GeneratedOutput, out_dir: Option<&Path>) -> Result<()> {
    match out_dir {
        Some(dir) => {
            utils::ensure_output_dir(dir)?;
            for (name, contents) in [(SKELETON_FILE, &output.skeleton), (PROMPT_FILE, &output.prompt)] {
                let path = dir.join(name);
                fs::write(&path, contents).with_path(&path)?;
                ui::success(&format!("Wrote {}", path.display()));
            }
        }
        None => {
            ui::info(&format!("{}:", SKELETON_FILE));
            println!("{}", output.skeleton);
            ui::info(&format!("{}:", PROMPT_FILE));
            print!("{}", output.prompt);
        }
    }
    Ok(())
}

/// Ask questions until the session reaches the output step.
///
/// Answering `b` goes back one step wherever going back is possible.
pub fn run_interactive<'m, P: Prompter>(
    mut session: WizardSession<'m>,
    prompter: &mut P,
) -> Result<WizardSession<'m>> {
    loop {
        let step = session.step();
        prompter.show("")?;
        prompter.show(&format!("Step {} of 5: {}", step.number(), step.title()))?;
        match step {
            Step::CanvasSelect => canvas_step(&mut session, prompter)?,
            Step::BlockSelect => block_step(&mut session, prompter)?,
            Step::Customize => customize_step(&mut session, prompter)?,
            Step::LayoutAndTheme => layout_step(&mut session, prompter)?,
            Step::GenerateOutput => return Ok(session),
        }
    }
}

/// Answer to a numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Back,
    Skip,
    Index(usize),
}

/// `1`-based menu answer, `b`, or empty.
fn parse_choice(answer: &str, len: usize) -> Option<Choice> {
    match answer {
        "" => Some(Choice::Skip),
        BACK => Some(Choice::Back),
        _ => answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=len).contains(n))
            .map(|n| Choice::Index(n - 1)),
    }
}

fn canvas_step<P: Prompter>(session: &mut WizardSession<'_>, prompter: &mut P) -> Result<()> {
    let options = session.canvas_options();
    for (i, canvas) in options.iter().enumerate() {
        prompter.show(&format!(
            "  {}. {} - {}",
            i + 1,
            canvas.label(),
            canvas.description()
        ))?;
    }

    loop {
        let answer = prompter.ask(&format!("Choose a canvas [1-{}]: ", options.len()))?;
        let canvas = match parse_choice(&answer, options.len()) {
            Some(Choice::Index(i)) => Some(options[i]),
            _ => answer
                .parse::<CanvasType>()
                .ok()
                .filter(|canvas| options.contains(canvas)),
        };
        if let Some(canvas) = canvas {
            session.select_canvas(canvas)?;
            session.next()?;
            return Ok(());
        }
        prompter.show(&format!("  Enter a number between 1 and {}", options.len()))?;
    }
}

fn block_step<P: Prompter>(session: &mut WizardSession<'_>, prompter: &mut P) -> Result<()> {
    let candidates = session.candidates();
    if candidates.is_empty() {
        prompter.show("  No blocks match this canvas.")?;
    }

    loop {
        for (i, entry) in candidates.iter().enumerate() {
            let mark = if session.is_selected(&entry.name) { "x" } else { " " };
            prompter.show(&format!(
                "  [{}] {}. {} ({}) - {}",
                mark,
                i + 1,
                entry.name,
                entry.category,
                entry.description
            ))?;
        }

        let answer = prompter.ask("Toggle blocks by number, Enter to continue, b to go back: ")?;
        match answer.as_str() {
            "" => {
                session.next()?;
                return Ok(());
            }
            BACK => {
                session.back()?;
                return Ok(());
            }
            _ => {
                for token in answer.split([',', ' ']).filter(|token| !token.is_empty()) {
                    match parse_choice(token, candidates.len()) {
                        Some(Choice::Index(i)) => {
                            session.toggle_block(&candidates[i].name)?;
                        }
                        _ => prompter.show(&format!("  Unknown choice '{}'", token))?,
                    }
                }
            }
        }
    }
}

fn customize_step<P: Prompter>(session: &mut WizardSession<'_>, prompter: &mut P) -> Result<()> {
    let blocks = session.customize_fields()?;
    if blocks.is_empty() {
        prompter.show("  No blocks selected; nothing to customize.")?;
    }

    for block in &blocks {
        prompter.show(&format!("  {}", block.name))?;
        if block.fields.is_empty() {
            prompter.show("    (no properties)")?;
            continue;
        }
        for field in &block.fields {
            let answer = prompter.ask(&format!(
                "    {} ({}) [{}] (Enter keeps, {CLEAR} clears): ",
                field.prop.name, field.prop.type_name, field.value
            ))?;
            match answer.as_str() {
                BACK => {
                    session.back()?;
                    return Ok(());
                }
                "" => {}
                CLEAR => session.set_prop(&block.name, &field.prop.name, String::new())?,
                _ => session.set_prop(&block.name, &field.prop.name, answer.as_str())?,
            }
        }
    }

    session.next()?;
    Ok(())
}

fn layout_step<P: Prompter>(session: &mut WizardSession<'_>, prompter: &mut P) -> Result<()> {
    let layouts = session.layout_options();
    for (i, layout) in layouts.iter().enumerate() {
        prompter.show(&format!("  {}. {}", i + 1, layout))?;
    }
    loop {
        let answer = prompter.ask("Layout [number, Enter to skip, b to go back]: ")?;
        match parse_choice(&answer, layouts.len()) {
            Some(Choice::Back) => {
                session.back()?;
                return Ok(());
            }
            Some(Choice::Skip) => break,
            Some(Choice::Index(i)) => {
                session.set_layout(layouts[i].clone())?;
                break;
            }
            None => prompter.show(&format!("  Enter a number between 1 and {}", layouts.len()))?,
        }
    }

    let themes = session.theme_options();
    for (i, theme) in themes.iter().enumerate() {
        prompter.show(&format!("  {}. {}", i + 1, theme))?;
    }
    loop {
        let answer = prompter.ask("Theme [number, Enter to skip]: ")?;
        match parse_choice(&answer, themes.len()) {
            Some(Choice::Index(i)) => {
                session.set_theme(themes[i])?;
                break;
            }
            Some(Choice::Skip) => break,
            _ => prompter.show(&format!("  Enter a number between 1 and {}", themes.len()))?,
        }
    }

    let title = prompter.ask("Page title: ")?;
    if !title.is_empty() {
        session.set_title(title)?;
    }

    session.next()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use blockprint_catalog::{CatalogEntry, Collection, Manifest, PropSpec};
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Answers questions from a script and records everything shown.
    struct Scripted {
        answers: VecDeque<&'static str>,
        shown: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                shown: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn show(&mut self, line: &str) -> Result<()> {
            self.shown.push(line.to_string());
            Ok(())
        }

        fn ask(&mut self, question: &str) -> Result<String> {
            self.shown.push(question.to_string());
            self.answers
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| CliError::Custom("script exhausted".to_string()))
        }
    }

    fn entry(name: &str, category: &str) -> CatalogEntry {
        let mut entry = CatalogEntry::new(name);
        entry.category = category.to_string();
        entry
    }

    fn manifest() -> Manifest {
        let mut button = entry("Button", "ui");
        button.props = vec![PropSpec::new("variant", "string", "Style.").with_default("primary")];
        let mut input = entry("Input", "form");
        input.props = vec![PropSpec::new("label", "string", "Field label.")];

        let mut manifest = Manifest::default();
        manifest.push(Collection::Components, button);
        manifest.push(Collection::Components, input);
        manifest.push(Collection::Layouts, entry("DefaultLayout", "layout"));
        manifest
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("", 3), Some(Choice::Skip));
        assert_eq!(parse_choice("b", 3), Some(Choice::Back));
        assert_eq!(parse_choice("1", 3), Some(Choice::Index(0)));
        assert_eq!(parse_choice("3", 3), Some(Choice::Index(2)));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("x", 3), None);
    }

    #[test]
    fn test_interactive_run_reaches_output() {
        let manifest = manifest();
        // Canvases offered: form-entry, component-showcase, custom-blank
        let mut prompter = Scripted::new(&[
            "form-entry",
            "1 2",
            "",
            "",
            "Email",
            "1",
            "2",
            "Sign up",
        ]);

        let session = run_interactive(WizardSession::new(&manifest), &mut prompter).unwrap();
        assert_eq!(session.step(), Step::GenerateOutput);

        let config = session.config();
        assert_eq!(config.canvas_type, Some(CanvasType::FormEntry));
        assert_eq!(config.selected_components, vec!["Button", "Input"]);
        assert!(!config.component_props.contains_key("Button"));
        assert_eq!(config.component_props["Input"]["label"], "Email");
        assert_eq!(config.layout.as_deref(), Some("DefaultLayout"));
        assert_eq!(config.initial_theme.as_deref(), Some("dark"));
        assert_eq!(config.page_title, "Sign up");
        assert!(prompter.shown.iter().any(|line| line == "Step 5 of 5: Your Code / AI Prompt"));
    }

    #[test]
    fn test_interactive_back_keeps_choices() {
        let manifest = manifest();
        let mut prompter = Scripted::new(&[
            "custom-blank",
            "2",
            "",
            BACK,
            "",
            "",
            "",
            "",
            "",
            "",
        ]);

        let session = run_interactive(WizardSession::new(&manifest), &mut prompter).unwrap();
        let config = session.config();
        assert_eq!(config.selected_components, vec!["Input"]);
        assert!(config.layout.is_none());
        assert!(config.initial_theme.is_none());
    }

    #[test]
    fn test_interactive_clear_empties_a_prop() {
        let manifest = manifest();
        let mut prompter = Scripted::new(&["form-entry", "1", "", CLEAR, "", "", ""]);

        let session = run_interactive(WizardSession::new(&manifest), &mut prompter).unwrap();
        let config = session.config();
        assert_eq!(config.selected_components, vec!["Button"]);
        assert_eq!(config.component_props["Button"]["variant"], "");
        assert!(prompter.shown.iter().any(|line| line.contains("variant (string) [primary]")));
    }

    #[test]
    fn test_interactive_reprompts_on_bad_answers() {
        let manifest = manifest();
        let mut prompter = Scripted::new(&["9", "landing", "1", "", "", "", "", "", ""]);

        let session = run_interactive(WizardSession::new(&manifest), &mut prompter).unwrap();
        assert_eq!(session.step(), Step::GenerateOutput);
        assert!(
            prompter
                .shown
                .iter()
                .filter(|line| line.starts_with("  Enter a number"))
                .count()
                >= 2
        );
    }

    #[test]
    fn test_emit_writes_both_files() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("out");
        let output = GeneratedOutput {
            skeleton: "// skeleton\n".to_string(),
            prompt: "prompt\n".to_string(),
        };

        emit(&output, Some(&out_dir)).unwrap();
        assert_eq!(
            fs::read_to_string(out_dir.join(SKELETON_FILE)).unwrap(),
            "// skeleton\n"
        );
        assert_eq!(fs::read_to_string(out_dir.join(PROMPT_FILE)).unwrap(), "prompt\n");
    }
}
