use crate::support::{load_manifest_or_exit, policy_override_or_exit, print_json};
use rings_manifest::validate_manifest;

pub fn run(manifest: Option<String>, policy: Option<String>, json_output: bool) {
    let policy_override = policy_override_or_exit(policy.as_deref());
    let loaded = load_manifest_or_exit(manifest.as_deref());
    let policy = policy_override.unwrap_or(loaded.policy);
    let report = validate_manifest(&loaded, policy);

    if json_output {
        print_json(&report, "validate");
    } else {
        println!("rings validate");
        println!("  Policy: {}", policy.required_stdlib_platform);
        println!("  Members: {}", loaded.members.len());
        println!("  Edges: {}", loaded.edges.len());
        println!("  Result: {}", report.result);
        for issue in &report.issues {
            println!(
                "  - [{}] {}: {}",
                issue.failure_class, issue.path, issue.message
            );
        }
    }

    if !report.is_accepted() {
        std::process::exit(1);
    }
}
