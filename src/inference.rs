use rustpython_parser::ast::Expr;
use thiserror::Error;

/// Reported by an inference engine when it cannot analyse a node at all.
///
/// This is an expected outcome for dynamic or unresolvable code, not a
/// fatal condition; matchers degrade to "no match".
#[derive(Debug, Clone, Error)]
#[error("type inference failed: {reason}")]
pub struct InferenceError {
    reason: String,
}

impl InferenceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// One candidate type an engine inferred for an expression.
///
/// Inference over Python is best-effort: an expression may infer to several
/// candidates (union types, multiple assignment sites), and some of them may
/// be placeholders with no usable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredType {
    /// Resolved to a definition identified by its fully dotted path,
    /// e.g. `my_models.Grade`.
    Qualified(String),
    /// The engine could not pin this candidate down; it never matches.
    Uninferable,
}

impl InferredType {
    pub fn qualified(qname: impl Into<String>) -> Self {
        Self::Qualified(qname.into())
    }

    pub fn qualified_name(&self) -> Option<&str> {
        match self {
            Self::Qualified(qname) => Some(qname),
            Self::Uninferable => None,
        }
    }
}

/// The external type-inference boundary.
///
/// Keeping this behind a trait lets rules run against any engine and lets
/// tests substitute a fake.
pub trait TypeInference {
    /// All candidate types for `node`. Complete failure is reported through
    /// the error; partial knowledge belongs in the candidate list.
    fn infer(&self, node: &Expr) -> Result<Vec<InferredType>, InferenceError>;
}

/// Returns true if any type `engine` infers for `node` has the fully
/// qualified name `expected_qname`.
///
/// One matching candidate is sufficient. Candidates without a qualified
/// name are skipped, and inference failure counts as no match.
pub fn matches_inferred_qname(
    engine: &dyn TypeInference,
    node: &Expr,
    expected_qname: &str,
) -> bool {
    let candidates = match engine.infer(node) {
        Ok(candidates) => candidates,
        Err(error) => {
            tracing::debug!(%error, "inference failed, treating as no match");
            return false;
        }
    };
    candidates
        .iter()
        .any(|candidate| candidate.qualified_name() == Some(expected_qname))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustpython_parser::Parse;

    /// Engine that returns the same canned answer for every node.
    struct FakeInference(Result<Vec<InferredType>, InferenceError>);

    impl TypeInference for FakeInference {
        fn infer(&self, _node: &Expr) -> Result<Vec<InferredType>, InferenceError> {
            self.0.clone()
        }
    }

    fn parse_expr(source: &str) -> Expr {
        Expr::parse(source, "<test>").expect("parse error")
    }

    #[test]
    fn matches_single_qualified_candidate() {
        let engine = FakeInference(Ok(vec![InferredType::qualified("my_models.Grade")]));
        let node = parse_expr("Grade()");
        assert!(matches_inferred_qname(&engine, &node, "my_models.Grade"));
    }

    #[test]
    fn any_matching_candidate_is_sufficient() {
        let engine = FakeInference(Ok(vec![
            InferredType::Uninferable,
            InferredType::qualified("pkg.A"),
        ]));
        let node = parse_expr("x");
        assert!(matches_inferred_qname(&engine, &node, "pkg.A"));
    }

    #[test]
    fn rejects_non_matching_candidates() {
        let engine = FakeInference(Ok(vec![InferredType::qualified("pkg.B")]));
        let node = parse_expr("x");
        assert!(!matches_inferred_qname(&engine, &node, "pkg.A"));
    }

    #[test]
    fn uninferable_candidates_never_match() {
        let engine = FakeInference(Ok(vec![InferredType::Uninferable]));
        let node = parse_expr("x");
        assert!(!matches_inferred_qname(&engine, &node, "pkg.A"));
    }

    #[test]
    fn empty_candidate_list_never_matches() {
        let engine = FakeInference(Ok(vec![]));
        let node = parse_expr("x");
        assert!(!matches_inferred_qname(&engine, &node, "pkg.A"));
    }

    #[test]
    fn inference_failure_is_no_match() {
        let engine = FakeInference(Err(InferenceError::new("unresolvable import")));
        let node = parse_expr("x");
        assert!(!matches_inferred_qname(&engine, &node, "pkg.A"));
    }

    #[test]
    fn error_message_carries_reason() {
        let error = InferenceError::new("unresolvable import");
        assert_eq!(
            error.to_string(),
            "type inference failed: unresolvable import"
        );
    }
}
