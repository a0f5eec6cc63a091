use crate::support::{open_registry_or_exit, print_json};
use serde_json::json;

pub fn run(manifest: Option<String>, json_output: bool) {
    let registry = open_registry_or_exit(manifest.as_deref());

    if json_output {
        print_json(
            &json!({
                "digest": registry.digest(),
                "members": registry.len(),
            }),
            "digest",
        );
        return;
    }

    println!("rings digest");
    println!("  Members: {}", registry.len());
    println!("  Digest: {}", registry.digest());
}
