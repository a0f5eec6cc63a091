use crate::support::{open_registry_or_exit, parse_or_exit, print_json, unwrap_or_exit, yes_no};
use rings_kernel::{Layer, Ring};
use serde_json::json;

pub fn run(manifest: Option<String>, name: String, ring: String, layer: String, json_output: bool) {
    let ring: Ring = parse_or_exit(&ring);
    let layer: Layer = parse_or_exit(&layer);
    let registry = open_registry_or_exit(manifest.as_deref());
    let classification = unwrap_or_exit(registry.lookup(&name));
    let accessible = unwrap_or_exit(registry.is_accessible(&name, ring, layer));

    if json_output {
        print_json(
            &json!({
                "name": name,
                "selected": { "ring": ring, "layer": layer },
                "classification": classification,
                "accessible": accessible,
            }),
            "access",
        );
        return;
    }

    println!("rings access {name}");
    println!("  Selected: {ring}/{layer}");
    println!("  Classified: {classification}");
    println!("  Accessible: {}", yes_no(accessible));
}
