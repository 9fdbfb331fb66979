//! Invariant checks over a merged chain set. Every pass collects into one
//! aggregated report instead of stopping at the first problem, so an
//! operator sees the full damage of a bad layer in a single load attempt.

use {
    super::ChainSet,
    std::{collections::HashSet, fmt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Duplicate,
    Missing,
    Empty,
}

/// Location of a violation inside the set, e.g. `3.Nodes.1.Name` or
/// `2.ChainID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    pub chain: usize,
    pub node: Option<usize>,
    pub field: &'static str,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => write!(f, "{}.Nodes.{}.{}", self.chain, node, self.field),
            None => write!(f, "{}.{}", self.chain, self.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: FieldPath,
    pub kind: ViolationKind,
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Duplicate => write!(
                f,
                "{}: invalid value ({}): duplicate - must be unique",
                self.path, self.detail
            ),
            ViolationKind::Missing => write!(f, "{}: missing: {}", self.path, self.detail),
            ViolationKind::Empty => write!(f, "{}: empty: {}", self.path, self.detail),
        }
    }
}

/// Aggregated validation report; the error form of a non-empty
/// `ChainSet::validate` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Duplicate-detecting set: the first occurrence of a value is never
/// flagged, every subsequent one is. `None` never counts as a duplicate.
#[derive(Default)]
struct UniqueStrings(HashSet<String>);

impl UniqueStrings {
    fn is_dupe(&mut self, value: Option<&str>) -> bool {
        match value {
            Some(v) => !self.0.insert(v.to_owned()),
            None => false,
        }
    }
}

impl ChainSet {
    /// Scan the whole set and report every invariant violation. Merge and
    /// validation are separate phases: a caller may merge speculatively
    /// and inspect the report before deciding whether to publish.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        // Unique chain IDs
        let mut chain_ids = UniqueStrings::default();
        for (i, c) in self.chains.iter().enumerate() {
            if chain_ids.is_dupe(c.chain_id.as_deref()) {
                violations.push(Violation {
                    path: FieldPath {
                        chain: i,
                        node: None,
                        field: "ChainID",
                    },
                    kind: ViolationKind::Duplicate,
                    detail: c.chain_id.clone().unwrap_or_default(),
                });
            }
        }

        // Unique node names, across every chain combined
        let mut names = UniqueStrings::default();
        for (i, c) in self.chains.iter().enumerate() {
            for (j, n) in c.nodes.iter().enumerate() {
                if names.is_dupe(n.name.as_deref()) {
                    violations.push(Violation {
                        path: FieldPath {
                            chain: i,
                            node: Some(j),
                            field: "Name",
                        },
                        kind: ViolationKind::Duplicate,
                        detail: n.name.clone().unwrap_or_default(),
                    });
                }
            }
        }

        // Unique node URLs, normalized string comparison
        let mut urls = UniqueStrings::default();
        for (i, c) in self.chains.iter().enumerate() {
            for (j, n) in c.nodes.iter().enumerate() {
                if urls.is_dupe(n.url.as_ref().map(|u| u.as_str())) {
                    violations.push(Violation {
                        path: FieldPath {
                            chain: i,
                            node: Some(j),
                            field: "URL",
                        },
                        kind: ViolationKind::Duplicate,
                        detail: n.url.as_ref().map(|u| u.to_string()).unwrap_or_default(),
                    });
                }
            }
        }

        // Completeness per chain
        for (i, c) in self.chains.iter().enumerate() {
            match c.chain_id.as_deref() {
                None => violations.push(Violation {
                    path: FieldPath {
                        chain: i,
                        node: None,
                        field: "ChainID",
                    },
                    kind: ViolationKind::Missing,
                    detail: "required for all chains".to_owned(),
                }),
                Some("") => violations.push(Violation {
                    path: FieldPath {
                        chain: i,
                        node: None,
                        field: "ChainID",
                    },
                    kind: ViolationKind::Empty,
                    detail: "required for all chains".to_owned(),
                }),
                Some(_) => {}
            }

            if c.nodes.is_empty() {
                violations.push(Violation {
                    path: FieldPath {
                        chain: i,
                        node: None,
                        field: "Nodes",
                    },
                    kind: ViolationKind::Missing,
                    detail: "must have at least one node".to_owned(),
                });
            }
        }

        violations
    }

    /// `Ok` when the set upholds every invariant, otherwise the full
    /// aggregated report.
    pub fn validated(&self) -> Result<(), Violations> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(violations))
        }
    }
}
