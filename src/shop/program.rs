//! Top-level `defdomain` and `defproblem` forms.

use crate::entity::EntityId;
use crate::error::{EmitError, EmitResult};
use crate::graph::KnowledgeBase;
use crate::relation::Relation;

use super::{CallKind, Emitter};

impl<K: KnowledgeBase + ?Sized> Emitter<'_, K> {
    /// Render the `defdomain` form of a domain definition.
    ///
    /// Method clauses come first (in `hasMethod` order), then operator
    /// clauses (in `hasOperator` order), each on its own lines.
    pub fn render_domain(&self, domain: EntityId) -> EmitResult<String> {
        let name = self.label(domain)?;
        let mut out = format!("(defdomain {name} (");

        for method in self.kb.related(domain, Relation::HasMethod) {
            for clause in self.render_method(method)? {
                push_clause(&mut out, &clause);
            }
        }
        for operator in self.kb.related(domain, Relation::HasOperator) {
            push_clause(&mut out, &self.render_operator(operator)?);
        }

        out.push_str("))\n");
        Ok(out)
    }

    /// Render the `defproblem` form of a problem definition.
    pub fn render_problem(&self, problem: EntityId) -> EmitResult<String> {
        let name = self.label(problem)?;
        let domain = self
            .single(problem, Relation::HasDomain)?
            .ok_or_else(|| self.missing(problem, Relation::HasDomain))?;
        let domain_name = self.label(domain)?;

        let initial_states = self.kb.related(problem, Relation::HasInitialState);
        if initial_states.is_empty() {
            return Err(self.missing(problem, Relation::HasInitialState));
        }
        let goals = self.kb.related(problem, Relation::HasGoal);
        if goals.is_empty() {
            return Err(self.missing(problem, Relation::HasGoal));
        }

        let mut out = format!("(defproblem {name} {domain_name}\n");
        for state in initial_states {
            out.push_str(&self.render_initial_state(state)?);
            out.push('\n');
        }
        for goal in goals {
            out.push_str(&self.render_goal(goal)?);
        }
        out.push_str(")\n");
        Ok(out)
    }

    /// The parenthesized predicate list of an initial state.
    pub fn render_initial_state(&self, state: EntityId) -> EmitResult<String> {
        let predicates = self.render_predicates(&self.kb.related(state, Relation::HasPredicate))?;
        Ok(format!("({predicates})"))
    }

    /// The method calls of a goal, with no enclosing parenthesis.
    pub fn render_goal(&self, goal: EntityId) -> EmitResult<String> {
        self.render_calls(CallKind::Method, goal, Relation::ConsistsOfMethod)
    }

    fn missing(&self, entity: EntityId, relation: Relation) -> EmitError {
        EmitError::MissingRelation {
            entity: self.describe(entity),
            relation,
        }
    }
}

fn push_clause(out: &mut String, clause: &str) {
    out.push('\n');
    out.push_str(clause);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::SnapshotBuilder;

    #[test]
    fn empty_domain() {
        let mut b = SnapshotBuilder::new();
        let d = b.labeled("d", "Empty");
        let kb = b.build();
        assert_eq!(Emitter::new(&kb).render_domain(d).unwrap(), "(defdomain Empty ())\n");
    }

    #[test]
    fn methods_before_operators() {
        let mut b = SnapshotBuilder::new();
        let d = b.labeled("d", "Logistics");
        let op = b.labeled("op", "drive");
        let m = b.labeled("m", "travel");
        let flow = b.labeled("flow", "flow");
        b.assert(d, Relation::HasOperator, op);
        b.assert(d, Relation::HasMethod, m);
        b.assert(m, Relation::HasFlow, flow);
        b.assert(flow, Relation::HasPostconditionOp, op);
        let kb = b.build();

        assert_eq!(
            Emitter::new(&kb).render_domain(d).unwrap(),
            "(defdomain Logistics (\n\
             (:method (travel)\n()\n((!drive)))\n\
             \n\
             (:operator (!drive)\n()\n()\n())\n\
             ))\n"
        );
    }

    #[test]
    fn problem_layout() {
        let mut b = SnapshotBuilder::new();
        let p = b.labeled("p", "deliver-problem");
        let d = b.labeled("d", "Logistics");
        let init = b.labeled("init", "init");
        let goal = b.labeled("goal", "goal");
        let at = b.labeled("at", "at");
        let deliver = b.labeled("deliver", "deliverAll");
        b.assert(p, Relation::HasDomain, d);
        b.assert(p, Relation::HasInitialState, init);
        b.assert(p, Relation::HasGoal, goal);
        b.assert(init, Relation::HasPredicate, at);
        b.assert(goal, Relation::ConsistsOfMethod, deliver);
        let kb = b.build();

        assert_eq!(
            Emitter::new(&kb).render_problem(p).unwrap(),
            "(defproblem deliver-problem Logistics\n((at))\n(deliverAll))\n"
        );
    }

    #[test]
    fn problem_requires_domain_state_and_goal() {
        let mut b = SnapshotBuilder::new();
        let p = b.labeled("urn:p", "p");
        let kb = b.build();
        let err = Emitter::new(&kb).render_problem(p).unwrap_err();
        assert!(matches!(
            err,
            EmitError::MissingRelation { relation: Relation::HasDomain, .. }
        ));

        let mut b = SnapshotBuilder::new();
        let p = b.labeled("urn:p", "p");
        let d = b.labeled("d", "D");
        let init = b.labeled("init", "init");
        b.assert(p, Relation::HasDomain, d);
        b.assert(p, Relation::HasInitialState, init);
        let kb = b.build();
        let err = Emitter::new(&kb).render_problem(p).unwrap_err();
        assert!(matches!(
            err,
            EmitError::MissingRelation { relation: Relation::HasGoal, .. }
        ));
    }

    #[test]
    fn goal_calls_are_not_wrapped() {
        let mut b = SnapshotBuilder::new();
        let goal = b.labeled("goal", "goal");
        let a = b.labeled("a", "a");
        let c = b.labeled("c", "c");
        b.assert(goal, Relation::ConsistsOfMethod, a);
        b.assert(goal, Relation::ConsistsOfMethod, c);
        let kb = b.build();
        assert_eq!(Emitter::new(&kb).render_goal(goal).unwrap(), "(a)(c)");
    }

    #[test]
    fn ambiguous_domain_in_strict_mode() {
        let mut b = SnapshotBuilder::new();
        let p = b.labeled("p", "p");
        let d1 = b.labeled("d1", "D1");
        let d2 = b.labeled("d2", "D2");
        let init = b.labeled("init", "init");
        let goal = b.labeled("goal", "goal");
        b.assert(p, Relation::HasDomain, d1);
        b.assert(p, Relation::HasDomain, d2);
        b.assert(p, Relation::HasInitialState, init);
        b.assert(p, Relation::HasGoal, goal);
        let kb = b.build();

        let lenient = Emitter::new(&kb).render_problem(p).unwrap();
        assert!(lenient.starts_with("(defproblem p D1\n"));
        assert!(matches!(
            Emitter::new(&kb).strict(true).render_problem(p),
            Err(EmitError::AmbiguousRelation { .. })
        ));
    }
}
