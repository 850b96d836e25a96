//! Generation session: one run over every declaration of a manifest.
//!
//! Phases, in order:
//! 1. skip declarations without the configured doc tag, then check names are
//!    unique (before any work)
//! 2. plan every declaration in parallel, collecting all diagnostics: unknown
//!    references, shape and structural errors, required builder cycles
//! 3. emit every plan in parallel
//! 4. recreate the output directory
//! 5. write the base builder once, then every builder in parallel
//!
//! Nothing is written unless phases 1 and 2 succeed for every declaration.

use std::collections::VecDeque;
use std::path::PathBuf;

use databuilders_core::Declaration;
use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use tracing::instrument;

use crate::emit::{emit, emit_base_builder};
use crate::diagnostics::StructuralError;
use crate::plan::{BuilderPlan, Planner};
use crate::writer::FileWriter;
use crate::{Config, Diagnostic, Error, Result};

/// One file produced by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Full path, inside the output directory.
    pub path: PathBuf,
    /// Declaration the file was generated for; `None` for the base builder.
    pub declaration: Option<String>,
    pub content: String,
}

/// Files generated by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub output_dir: PathBuf,
    pub base_builder: GeneratedFile,
    /// One per generated declaration, in manifest order.
    pub builders: Vec<GeneratedFile>,
    /// Declarations left out for lacking the configured doc tag.
    pub skipped: Vec<String>,
}

impl SessionReport {
    /// The base builder first, then every builder.
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        std::iter::once(&self.base_builder).chain(&self.builders)
    }
}

pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate every file without writing anything.
    #[instrument(skip_all, fields(declarations = declarations.len()))]
    pub fn check(&self, declarations: &[Declaration]) -> Result<SessionReport> {
        let (selected, skipped) = self.select(declarations);
        check_unique_names(&selected)?;

        let known: IndexSet<&str> = selected.iter().map(|d| d.name.as_str()).collect();
        let planner = Planner::new(&self.config);
        let output_dir = &self.config.output_dir;

        let outcomes: Vec<std::result::Result<BuilderPlan, Diagnostic>> = selected
            .par_iter()
            .map(|declaration| {
                check_references(declaration, &known)?;
                planner.plan(declaration)
            })
            .collect();

        let mut plans = Vec::with_capacity(outcomes.len());
        let mut diagnostics = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(plan) => plans.push(plan),
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }
        if diagnostics.is_empty() {
            diagnostics = required_cycles(&selected, &plans);
        }
        if !diagnostics.is_empty() {
            for diagnostic in &diagnostics {
                tracing::debug!(%diagnostic, "declaration failed");
            }
            return Err(Error::Generation(diagnostics));
        }

        let builders: Vec<GeneratedFile> = plans
            .par_iter()
            .map(|plan| GeneratedFile {
                path: output_dir.join(&plan.file_name),
                declaration: Some(plan.type_name.clone()),
                content: emit(plan),
            })
            .collect();

        tracing::info!(
            builders = builders.len(),
            skipped = skipped.len(),
            "generated builders"
        );
        Ok(SessionReport {
            output_dir: output_dir.clone(),
            base_builder: GeneratedFile {
                path: output_dir.join(format!("{}.ts", self.config.base_builder_stem())),
                declaration: None,
                content: emit_base_builder(),
            },
            builders,
            skipped,
        })
    }

    /// Split off declarations lacking the configured doc tag.
    fn select<'d>(&self, declarations: &'d [Declaration]) -> (Vec<&'d Declaration>, Vec<String>) {
        let Some(tag) = &self.config.jsdoc_tag else {
            return (declarations.iter().collect(), Vec::new());
        };
        let (selected, skipped): (Vec<_>, Vec<_>) =
            declarations.iter().partition(|d| d.has_tag(tag));
        for declaration in &skipped {
            tracing::debug!(
                declaration = %declaration.name,
                tag = %tag,
                "skipped untagged declaration"
            );
        }
        (selected, skipped.into_iter().map(|d| d.name.clone()).collect())
    }

    /// Generate every file, then replace the output directory with them.
    #[instrument(skip_all, fields(declarations = declarations.len()))]
    pub fn run<W: FileWriter + ?Sized>(
        &self,
        declarations: &[Declaration],
        writer: &W,
    ) -> Result<SessionReport> {
        let report = self.check(declarations)?;
        let output_dir = &report.output_dir;

        writer
            .remove_directory(output_dir)
            .map_err(|e| Error::io("remove", output_dir, e))?;
        writer
            .make_directory(output_dir)
            .map_err(|e| Error::io("create", output_dir, e))?;

        write_file(writer, &report.base_builder)?;
        report
            .builders
            .par_iter()
            .try_for_each(|file| write_file(writer, file))?;

        tracing::info!(
            output_dir = %output_dir.display(),
            builders = report.builders.len(),
            "wrote builders"
        );
        Ok(report)
    }
}

fn write_file<W: FileWriter + ?Sized>(writer: &W, file: &GeneratedFile) -> Result<()> {
    writer
        .write(&file.path, &file.content)
        .map_err(|e| Error::io("write", &file.path, e))?;
    tracing::debug!(path = %file.path.display(), "wrote file");
    Ok(())
}

/// Fail with every name declared more than once, in first-occurrence order.
fn check_unique_names(declarations: &[&Declaration]) -> Result<()> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for declaration in declarations {
        *counts.entry(declaration.name.as_str()).or_default() += 1;
    }

    let duplicates: Vec<String> = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, _)| name.to_string())
        .collect();
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(Error::DuplicateDeclarations(duplicates))
    }
}

/// Every reference must name a declaration generated in this session.
fn check_references(
    declaration: &Declaration,
    known: &IndexSet<&str>,
) -> std::result::Result<(), Diagnostic> {
    let Declaration {
        name, path, shape, ..
    } = declaration;
    match shape.references().into_iter().find(|r| !known.contains(r)) {
        Some(unknown) => Err(Diagnostic::structural(
            name,
            path,
            shape,
            StructuralError::UnknownReference {
                name: unknown.to_string(),
            },
        )),
        None => Ok(()),
    }
}

/// Diagnose every declaration whose default object, through required
/// builder instantiations, ends up constructing its own builder again.
fn required_cycles(declarations: &[&Declaration], plans: &[BuilderPlan]) -> Vec<Diagnostic> {
    let edges: IndexMap<&str, &BuilderPlan> =
        plans.iter().map(|p| (p.type_name.as_str(), p)).collect();

    let mut diagnostics = Vec::new();
    for (declaration, plan) in declarations.iter().zip(plans) {
        let Some(cycle) = find_cycle(&plan.type_name, &edges) else {
            continue;
        };
        let field = plan
            .required_builders
            .get(&cycle[1])
            .cloned()
            .unwrap_or_default();
        diagnostics.push(
            Diagnostic::structural(
                &declaration.name,
                &declaration.path,
                &declaration.shape,
                StructuralError::RequiredCycle { cycle },
            )
            .with_field(field),
        );
    }
    diagnostics
}

/// Shortest path of required builders from `start` back to itself, both ends
/// included.
fn find_cycle(start: &str, edges: &IndexMap<&str, &BuilderPlan>) -> Option<Vec<String>> {
    let mut parents: IndexMap<&str, &str> = IndexMap::new();
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let Some(plan) = edges.get(current) else {
            continue;
        };
        for next in plan.required_builders.keys() {
            let next = next.as_str();
            if next == start {
                let mut middle = Vec::new();
                let mut node = current;
                while node != start {
                    middle.push(node.to_string());
                    match parents.get(node) {
                        Some(parent) => node = parent,
                        None => break,
                    }
                }
                let mut path = vec![start.to_string()];
                path.extend(middle.into_iter().rev());
                path.push(start.to_string());
                return Some(path);
            }
            if !parents.contains_key(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}
