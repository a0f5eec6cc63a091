//! Batch validation of a manifest into a deterministic report.
//!
//! Unlike [`Manifest::load_registry`], which stops at the first error, this
//! collects every problem so a build can print them all at once.

use crate::manifest::Manifest;
use rings_kernel::{Layer, Registry, RegistryPolicy, RingsError, validate_name};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

pub mod failure_class {
    pub const MEMBER_INVALID_NAME: &str = "member_invalid_name";
    pub const MEMBER_DUPLICATE_CONFLICT: &str = "member_duplicate_conflict";
    pub const MEMBER_INVALID_REQUIRES: &str = "member_invalid_requires";
    pub const MEMBER_INVALID_PLATFORM_MEDIATED: &str = "member_invalid_platform_mediated";
    pub const MEMBER_INVALID_DECLARATION: &str = "member_invalid_declaration";
    pub const MEMBER_REJECTED: &str = "member_rejected";
    pub const REQUIRES_UNKNOWN_MEMBER: &str = "requires_unknown_member";
    pub const EDGE_UNKNOWN_MEMBER: &str = "edge_unknown_member";
    pub const EDGE_LAYER_VIOLATION: &str = "edge_layer_violation";
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub failure_class: String,
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub result: String,
    pub failure_classes: Vec<String>,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(mut issues: Vec<ValidationIssue>) -> Self {
        issues.sort_by(|a, b| {
            (&a.path, &a.failure_class, &a.message).cmp(&(&b.path, &b.failure_class, &b.message))
        });
        let failure_classes: Vec<String> = issues
            .iter()
            .map(|issue| issue.failure_class.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self {
            result: if issues.is_empty() {
                "accepted".to_string()
            } else {
                "rejected".to_string()
            },
            failure_classes,
            issues,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.issues.is_empty()
    }
}

fn push_issue(
    issues: &mut Vec<ValidationIssue>,
    failure_class: &str,
    path: String,
    message: String,
) {
    issues.push(ValidationIssue {
        failure_class: failure_class.to_string(),
        path,
        message,
    });
}

/// Validate every member row and declared edge of `manifest` under `policy`.
pub fn validate_manifest(manifest: &Manifest, policy: RegistryPolicy) -> ValidationReport {
    let mut issues = Vec::new();
    let mut builder = Registry::builder().with_policy(policy);
    let mut first_row: BTreeMap<String, usize> = BTreeMap::new();

    for (idx, row) in manifest.members.iter().enumerate() {
        let path = format!("members[{idx}]");
        let name = row.name.trim();
        let mut row_ok = true;

        if let Err(err) = validate_name(name) {
            push_issue(
                &mut issues,
                failure_class::MEMBER_INVALID_NAME,
                format!("{path}.name"),
                err.to_string(),
            );
            continue;
        }

        if !row.requires.is_empty() && !row.layer.allows_components() {
            push_issue(
                &mut issues,
                failure_class::MEMBER_INVALID_REQUIRES,
                format!("{path}.requires"),
                format!(
                    "{name} is classified under {}; only optional stdlib components may declare requirements",
                    row.layer
                ),
            );
            row_ok = false;
        }
        for (req_idx, required) in row.requires.iter().enumerate() {
            let required = required.trim();
            let problem = if let Err(err) = validate_name(required) {
                Some(err.to_string())
            } else if required == name {
                Some(format!("{name} cannot require itself"))
            } else {
                None
            };
            if let Some(message) = problem {
                push_issue(
                    &mut issues,
                    failure_class::MEMBER_INVALID_REQUIRES,
                    format!("{path}.requires[{req_idx}]"),
                    message,
                );
                row_ok = false;
            }
        }
        if row.platform_mediated && row.layer != Layer::RequiredStdlib {
            push_issue(
                &mut issues,
                failure_class::MEMBER_INVALID_PLATFORM_MEDIATED,
                format!("{path}.platform_mediated"),
                format!(
                    "{name} is classified under {}; only required stdlib members may be platform-mediated",
                    row.layer
                ),
            );
            row_ok = false;
        }
        if !row_ok {
            continue;
        }

        match builder.register_member(row.to_member()) {
            Ok(()) => {
                first_row.entry(name.to_string()).or_insert(idx);
            }
            Err(RingsError::DuplicateMember {
                existing,
                requested,
                conflict,
                ..
            }) => {
                let first = first_row
                    .get(name)
                    .map(|first| format!("members[{first}]"))
                    .unwrap_or_else(|| "an earlier row".to_string());
                push_issue(
                    &mut issues,
                    failure_class::MEMBER_DUPLICATE_CONFLICT,
                    path,
                    format!(
                        "{name} is already declared by {first} as {existing}; this row requests {requested} ({conflict} differs)"
                    ),
                );
            }
            Err(err) => {
                push_issue(
                    &mut issues,
                    registration_failure_class(&err),
                    path,
                    err.to_string(),
                );
            }
        }
    }

    let registry = builder.seal();

    for (idx, row) in manifest.members.iter().enumerate() {
        if first_row.get(row.name.trim()) != Some(&idx) {
            continue;
        }
        for (req_idx, required) in row.requires.iter().enumerate() {
            let required = required.trim();
            let path = format!("members[{idx}].requires[{req_idx}]");
            match registry.member(required) {
                Err(_) => push_issue(
                    &mut issues,
                    failure_class::REQUIRES_UNKNOWN_MEMBER,
                    path,
                    format!("{} requires unknown member {required}", row.name.trim()),
                ),
                Ok(target) if !target.layer.allows_components() => push_issue(
                    &mut issues,
                    failure_class::MEMBER_INVALID_REQUIRES,
                    path,
                    format!(
                        "{} requires {required}, which is classified under {} rather than the optional stdlib",
                        row.name.trim(),
                        target.layer
                    ),
                ),
                Ok(_) => {}
            }
        }
    }

    for (idx, edge) in manifest.edges.iter().enumerate() {
        let path = format!("edges[{idx}]");
        let from = edge.from.trim();
        let to = edge.to.trim();

        let mut endpoints_known = true;
        for (field, name) in [("from", from), ("to", to)] {
            if !registry.contains(name) {
                push_issue(
                    &mut issues,
                    failure_class::EDGE_UNKNOWN_MEMBER,
                    format!("{path}.{field}"),
                    format!("unknown member: {name}"),
                );
                endpoints_known = false;
            }
        }
        if !endpoints_known {
            continue;
        }

        if let Err(err) = registry.validate_layer_dependency(from, to) {
            let message = match err {
                RingsError::LayerViolation(violation) => violation.to_string(),
                other => other.to_string(),
            };
            push_issue(
                &mut issues,
                failure_class::EDGE_LAYER_VIOLATION,
                path,
                message,
            );
        }
    }

    let report = ValidationReport::from_issues(issues);
    debug!(
        result = %report.result,
        issues = report.issues.len(),
        members = registry.len(),
        "validated classification manifest"
    );
    report
}

/// Failure class for a registration error the row pre-checks did not catch.
fn registration_failure_class(err: &RingsError) -> &'static str {
    match err.kind() {
        "invalid_name" => failure_class::MEMBER_INVALID_NAME,
        "duplicate_member" => failure_class::MEMBER_DUPLICATE_CONFLICT,
        "invalid_declaration" => failure_class::MEMBER_INVALID_DECLARATION,
        _ => failure_class::MEMBER_REJECTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{EdgeRow, MANIFEST_KIND, MANIFEST_SCHEMA, MemberRow};
    use rings_kernel::{PlatformPolicy, Ring};

    fn row(name: &str, ring: Ring, layer: Layer) -> MemberRow {
        MemberRow {
            name: name.to_string(),
            ring,
            layer,
            requires: Vec::new(),
            platform_mediated: false,
        }
    }

    fn edge(from: &str, to: &str) -> EdgeRow {
        EdgeRow {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn manifest(members: Vec<MemberRow>, edges: Vec<EdgeRow>) -> Manifest {
        Manifest {
            schema: MANIFEST_SCHEMA,
            kind: MANIFEST_KIND.to_string(),
            policy: RegistryPolicy::default(),
            members,
            edges,
        }
    }

    #[test]
    fn clean_manifest_is_accepted() {
        let mut idle = row("idlelib", Ring::Python, Layer::OptionalStdlib);
        idle.requires = vec!["tkinter".to_string()];
        let m = manifest(
            vec![
                idle,
                row("tkinter", Ring::Python, Layer::OptionalStdlib),
                row("PyObject_GetItem", Ring::Python, Layer::Core),
            ],
            vec![edge("idlelib", "tkinter"), edge("tkinter", "PyObject_GetItem")],
        );
        let report = validate_manifest(&m, RegistryPolicy::default());
        assert!(report.is_accepted(), "{report:?}");
        assert_eq!(report.result, "accepted");
        assert!(report.failure_classes.is_empty());
    }

    #[test]
    fn collects_every_problem_in_path_order() {
        let mut misplaced = row("sys", Ring::Python, Layer::RequiredStdlib);
        misplaced.requires = vec!["os".to_string()];
        let mut mediated = row("PyDict_New", Ring::Python, Layer::Core);
        mediated.platform_mediated = true;
        let mut dangling = row("turtle", Ring::Python, Layer::OptionalStdlib);
        dangling.requires = vec!["tkinter".to_string()];
        let m = manifest(
            vec![
                row("PyObject_GetItem", Ring::Python, Layer::Core),
                row("PyObject_GetItem", Ring::CPython, Layer::Core),
                row("bad name", Ring::Python, Layer::Core),
                misplaced,
                mediated,
                dangling,
                row("sqlite3", Ring::Python, Layer::OptionalStdlib),
            ],
            vec![
                edge("PyObject_GetItem", "sqlite3"),
                edge("PyObject_GetItem", "missing"),
            ],
        );
        let report = validate_manifest(&m, RegistryPolicy::default());
        assert_eq!(report.result, "rejected");
        insta::assert_json_snapshot!(report.failure_classes, @r###"
        [
          "edge_layer_violation",
          "edge_unknown_member",
          "member_duplicate_conflict",
          "member_invalid_name",
          "member_invalid_platform_mediated",
          "member_invalid_requires",
          "requires_unknown_member"
        ]
        "###);
        let paths: Vec<&str> = report.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "edges[0]",
                "edges[1].to",
                "members[1]",
                "members[2].name",
                "members[3].requires",
                "members[4].platform_mediated",
                "members[5].requires[0]",
            ]
        );
        assert!(report.issues[0].message.contains("upward_reference"));
        assert!(report.issues[2].message.contains("members[0]"));
    }

    #[test]
    fn requirement_on_non_component_is_flagged() {
        let mut turtle = row("turtle", Ring::Python, Layer::OptionalStdlib);
        turtle.requires = vec!["sys".to_string()];
        let m = manifest(
            vec![turtle, row("sys", Ring::Python, Layer::RequiredStdlib)],
            vec![],
        );
        let report = validate_manifest(&m, RegistryPolicy::default());
        assert_eq!(
            report.failure_classes,
            vec![failure_class::MEMBER_INVALID_REQUIRES.to_string()]
        );
    }

    #[test]
    fn platform_policy_decides_required_stdlib_edges() {
        let mut os = row("os", Ring::Python, Layer::RequiredStdlib);
        os.platform_mediated = true;
        let m = manifest(
            vec![
                os,
                row("sys", Ring::Python, Layer::RequiredStdlib),
                row("_Py_open", Ring::Internal, Layer::PlatformInteraction),
            ],
            vec![edge("os", "_Py_open"), edge("sys", "_Py_open")],
        );

        let default = validate_manifest(&m, RegistryPolicy::default());
        assert!(default.is_accepted(), "{default:?}");

        let sanctioned =
            validate_manifest(&m, RegistryPolicy::with_platform(PlatformPolicy::Sanctioned));
        assert_eq!(sanctioned.issues.len(), 1);
        assert_eq!(sanctioned.issues[0].path, "edges[1]");

        let forbidden =
            validate_manifest(&m, RegistryPolicy::with_platform(PlatformPolicy::Forbidden));
        assert_eq!(forbidden.issues.len(), 2);

        let permitted =
            validate_manifest(&m, RegistryPolicy::with_platform(PlatformPolicy::Permitted));
        assert!(permitted.is_accepted());
    }

    #[test]
    fn registration_errors_keep_their_own_failure_class() {
        let declaration = RingsError::InvalidDeclaration {
            name: "turtle".to_string(),
            layer: Layer::OptionalStdlib,
            reason: "a component cannot require itself".to_string(),
        };
        assert_eq!(
            registration_failure_class(&declaration),
            failure_class::MEMBER_INVALID_DECLARATION
        );
        let bad_name = RingsError::InvalidName {
            name: "bad name".to_string(),
            reason: "name must be an identifier",
        };
        assert_eq!(
            registration_failure_class(&bad_name),
            failure_class::MEMBER_INVALID_NAME
        );
        let unknown = RingsError::UnknownMember {
            name: "tkinter".to_string(),
        };
        assert_eq!(
            registration_failure_class(&unknown),
            failure_class::MEMBER_REJECTED
        );
    }

    #[test]
    fn identical_duplicate_rows_are_accepted() {
        let m = manifest(
            vec![
                row("os", Ring::Python, Layer::RequiredStdlib),
                row("os", Ring::Python, Layer::RequiredStdlib),
            ],
            vec![],
        );
        assert!(validate_manifest(&m, RegistryPolicy::default()).is_accepted());
    }
}
