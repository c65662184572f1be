//! Walks the configured roots and special-case files into a [`Manifest`].

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use thiserror::Error;

use crate::annotation::Diagnostic;
use crate::config::{PipelineConfig, SpecialCase, Strategy};
use crate::error::{CatalogError, Result};
use crate::extractor::{ExtractedEntry, Extractor};
use crate::fs::{NativeFs, SourceFs};
use crate::model::{CatalogEntry, Collection, Manifest};

/// A recovered problem that did not stop the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineWarning {
    #[error("source root '{}' does not exist; {collection} left empty", path.display())]
    MissingRoot { path: PathBuf, collection: Collection },

    #[error("special-case file '{}' does not exist; skipped", path.display())]
    MissingSpecialCase { path: PathBuf },

    #[error("special-case file '{}' has no annotated declaration for {collection}", path.display())]
    UnmatchedSpecialCase { path: PathBuf, collection: Collection },

    #[error("'{}' documents `{found}` but `{expected}` was expected; skipped", path.display())]
    NameMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("could not read '{}': {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("directory walk failed: {message}")]
    Walk { message: String },
}

/// Parse diagnostic tied to the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiagnostic {
    /// Path relative to the base, with `/` separators.
    pub file_path: String,
    pub diagnostic: Diagnostic,
}

/// Outcome of one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub manifest: Manifest,
    pub warnings: Vec<PipelineWarning>,
    pub diagnostics: Vec<FileDiagnostic>,
}

/// Builds a manifest from source files.
#[derive(Debug)]
pub struct Aggregator<F: SourceFs = NativeFs> {
    fs: F,
    config: PipelineConfig,
    extractor: Extractor,
}

impl Aggregator<NativeFs> {
    /// Aggregator over the host filesystem.
    pub fn native(config: PipelineConfig) -> Self {
        Self::new(NativeFs, config)
    }
}

impl<F: SourceFs> Aggregator<F> {
    pub fn new(fs: F, config: PipelineConfig) -> Self {
        let extractor = Extractor::new(config.marker.clone());
        Self {
            fs,
            config,
            extractor,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every root walk, then every special case.
    ///
    /// Only a failure to inspect a root's own filesystem entry is an error;
    /// every other problem becomes a [`PipelineWarning`].
    pub fn run(&self) -> Result<Extraction> {
        let mut extraction = Extraction::default();

        for root in &self.config.roots {
            self.walk_root(&root.path, root.collection, &mut extraction)?;
        }
        for special in &self.config.special_cases {
            self.special_case(special, &mut extraction);
        }

        tracing::debug!(
            entries = extraction.manifest.len(),
            warnings = extraction.warnings.len(),
            diagnostics = extraction.diagnostics.len(),
            "extraction finished"
        );
        Ok(extraction)
    }

    fn base(&self) -> PathBuf {
        self.config.base.clean()
    }

    fn walk_root(
        &self,
        relative: &Path,
        collection: Collection,
        extraction: &mut Extraction,
    ) -> Result<()> {
        let root = self.base().join(relative).clean();
        let exists = self
            .fs
            .exists(&root)
            .map_err(|error| CatalogError::RootInspection {
                path: root.clone(),
                error,
            })?;
        if !exists {
            warn(
                extraction,
                PipelineWarning::MissingRoot {
                    path: root,
                    collection,
                },
            );
            return Ok(());
        }

        tracing::debug!(root = %root.display(), %collection, "walking source root");
        for file in self.fs.walk_files(&root) {
            let path = match file {
                Ok(path) => path,
                Err(error) => {
                    warn(
                        extraction,
                        PipelineWarning::Walk {
                            message: error.to_string(),
                        },
                    );
                    continue;
                }
            };
            if !self.is_source(&path) {
                continue;
            }
            let Some(source) = self.read(&path, extraction) else {
                continue;
            };
            if let Some(extracted) = self.extractor.extract(&source) {
                self.accept(&path, collection, extracted, extraction);
            }
        }
        Ok(())
    }

    fn special_case(&self, special: &SpecialCase, extraction: &mut Extraction) {
        let path = self.base().join(&special.path).clean();
        match self.fs.exists(&path) {
            Ok(true) => {}
            Ok(false) => {
                warn(extraction, PipelineWarning::MissingSpecialCase { path });
                return;
            }
            Err(error) => {
                warn(
                    extraction,
                    PipelineWarning::Unreadable {
                        path,
                        message: error.to_string(),
                    },
                );
                return;
            }
        }

        let extracted = match &special.strategy {
            Strategy::Static {
                name,
                description,
                tags,
                category,
                available_data,
            } => {
                let mut entry = CatalogEntry::new(name.clone());
                entry.description = description.clone();
                entry.tags = tags.clone();
                entry.category = category.clone();
                entry.available_data = Some(available_data.clone());
                Some(ExtractedEntry {
                    identifier: name.clone(),
                    entry,
                    diagnostics: Vec::new(),
                })
            }
            Strategy::Annotated => self
                .read(&path, extraction)
                .and_then(|source| self.extractor.extract(&source)),
            Strategy::NthBlock { index } => self
                .read(&path, extraction)
                .and_then(|source| self.extractor.extract_nth(&source, *index)),
        };

        let Some(extracted) = extracted else {
            warn(
                extraction,
                PipelineWarning::UnmatchedSpecialCase {
                    path,
                    collection: special.collection,
                },
            );
            return;
        };

        if let Some(expected) = special
            .expect_name
            .as_ref()
            .filter(|expected| **expected != extracted.entry.name)
        {
            warn(
                extraction,
                PipelineWarning::NameMismatch {
                    path,
                    expected: expected.clone(),
                    found: extracted.entry.name,
                },
            );
            return;
        }

        self.accept(&path, special.collection, extracted, extraction);
    }

    fn accept(
        &self,
        path: &Path,
        collection: Collection,
        extracted: ExtractedEntry,
        extraction: &mut Extraction,
    ) {
        let ExtractedEntry {
            mut entry,
            diagnostics,
            ..
        } = extracted;
        entry.file_path = self.relative_path(path);

        for diagnostic in diagnostics {
            tracing::warn!(file = %entry.file_path, "{diagnostic}");
            extraction.diagnostics.push(FileDiagnostic {
                file_path: entry.file_path.clone(),
                diagnostic,
            });
        }

        tracing::debug!(name = %entry.name, file = %entry.file_path, %collection, "extracted entry");
        extraction.manifest.push(collection, entry);
    }

    fn read(&self, path: &Path, extraction: &mut Extraction) -> Option<String> {
        match self.fs.read_to_string(path) {
            Ok(source) => Some(source),
            Err(error) => {
                warn(
                    extraction,
                    PipelineWarning::Unreadable {
                        path: path.to_path_buf(),
                        message: error.to_string(),
                    },
                );
                None
            }
        }
    }

    fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| self.config.accepts_extension(extension))
    }

    /// `path` relative to the base, joined with `/` on every host.
    fn relative_path(&self, path: &Path) -> String {
        let path = path.clean();
        let base = self.base();
        let relative = path.strip_prefix(&base).unwrap_or(&path);
        relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn warn(extraction: &mut Extraction, warning: PipelineWarning) {
    tracing::warn!("{warning}");
    extraction.warnings.push(warning);
}
