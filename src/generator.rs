//! Generator facade: top-level API for turning a knowledge base into a
//! SHOP program.
//!
//! The `Generator` renders every domain and problem definition as an
//! independent unit. A unit that fails contributes no text; the others are
//! still rendered so every problem in the knowledge base is reported at once.

use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::entity::{EntityId, EntityKind};
use crate::error::{EmitError, EmitResult};
use crate::graph::KnowledgeBase;
use crate::shop::Emitter;

/// One rendered top-level form.
#[derive(Debug)]
pub struct Unit {
    /// The domain or problem definition.
    pub entity: EntityId,
    /// `DomainDefinition` or `ProblemDefinition`.
    pub kind: EntityKind,
    /// The form's text, or why it could not be rendered.
    pub output: EmitResult<String>,
}

impl Unit {
    pub fn is_ok(&self) -> bool {
        self.output.is_ok()
    }

    pub fn text(&self) -> Option<&str> {
        self.output.as_deref().ok()
    }

    pub fn error(&self) -> Option<&EmitError> {
        self.output.as_ref().err()
    }
}

/// The result of a generation run: domain units first, then problem units.
#[derive(Debug, Default)]
pub struct Program {
    units: Vec<Unit>,
}

impl Program {
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn into_units(self) -> Vec<Unit> {
        self.units
    }

    /// Units that could not be rendered.
    pub fn failures(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| !u.is_ok())
    }

    /// Whether every unit rendered.
    pub fn is_complete(&self) -> bool {
        self.units.iter().all(Unit::is_ok)
    }

    /// Text of every successful `defdomain` form.
    pub fn domain_text(&self) -> String {
        self.text_of(EntityKind::DomainDefinition)
    }

    /// Text of every successful `defproblem` form.
    pub fn problem_text(&self) -> String {
        self.text_of(EntityKind::ProblemDefinition)
    }

    /// Text of every successful unit, domains first.
    pub fn text(&self) -> String {
        self.units.iter().filter_map(Unit::text).collect()
    }

    fn text_of(&self, kind: EntityKind) -> String {
        self.units
            .iter()
            .filter(|u| u.kind == kind)
            .filter_map(Unit::text)
            .collect()
    }

    /// The full program text, or the first unit error.
    pub fn into_text(self) -> EmitResult<String> {
        let mut out = String::new();
        for unit in self.units {
            out.push_str(&unit.output?);
        }
        Ok(out)
    }
}

/// Drives the emitter over every definition in a knowledge base.
pub struct Generator<'kb, K: KnowledgeBase + ?Sized> {
    kb: &'kb K,
    config: GeneratorConfig,
}

impl<'kb, K: KnowledgeBase + ?Sized> Generator<'kb, K> {
    pub fn new(kb: &'kb K, config: GeneratorConfig) -> Self {
        Self { kb, config }
    }

    /// An emitter configured like this generator, for rendering single entities.
    pub fn emitter(&self) -> Emitter<'kb, K> {
        Emitter::new(self.kb).strict(self.config.strict_ambiguity)
    }

    /// Render every domain and problem definition.
    pub fn generate(&self) -> Program {
        let kinds = [EntityKind::DomainDefinition, EntityKind::ProblemDefinition];
        let jobs: Vec<(EntityId, EntityKind)> = kinds
            .into_iter()
            .flat_map(|kind| {
                self.kb
                    .entities_of_kind(kind)
                    .into_iter()
                    .map(move |id| (id, kind))
            })
            .collect();

        let emitter = self.emitter();
        let units: Vec<Unit> = if self.config.parallel {
            jobs.par_iter()
                .map(|&(entity, kind)| render_unit(emitter, entity, kind))
                .collect()
        } else {
            jobs.iter()
                .map(|&(entity, kind)| render_unit(emitter, entity, kind))
                .collect()
        };

        let failed = units.iter().filter(|u| !u.is_ok()).count();
        tracing::info!(
            units = units.len(),
            failed,
            parallel = self.config.parallel,
            "generation finished"
        );
        Program { units }
    }
}

fn render_unit<K: KnowledgeBase + ?Sized>(
    emitter: Emitter<'_, K>,
    entity: EntityId,
    kind: EntityKind,
) -> Unit {
    let output = match kind {
        EntityKind::DomainDefinition => emitter.render_domain(entity),
        EntityKind::ProblemDefinition => emitter.render_problem(entity),
        EntityKind::Other => Ok(String::new()),
    };
    match &output {
        Ok(text) => {
            tracing::debug!(entity = %emitter.describe(entity), %kind, bytes = text.len(), "rendered unit")
        }
        Err(e) => tracing::error!(entity = %emitter.describe(entity), %kind, error = %e, "unit failed"),
    }
    Unit {
        entity,
        kind,
        output,
    }
}
