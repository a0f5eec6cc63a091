use crate::support::{open_registry_or_exit, print_json, unwrap_or_exit, yes_no};
use serde_json::json;

pub fn run(manifest: Option<String>, name: String, json_output: bool) {
    let registry = open_registry_or_exit(manifest.as_deref());
    let member = unwrap_or_exit(registry.member(&name));

    if json_output {
        print_json(
            &json!({
                "name": member.name,
                "ring": member.ring,
                "layer": member.layer,
                "requires": member.requires,
                "platformMediated": member.platform_mediated,
            }),
            "lookup",
        );
        return;
    }

    println!("rings lookup {name}");
    println!("  Ring: {}", member.ring);
    println!("  Layer: {}", member.layer);
    if !member.requires.is_empty() {
        println!(
            "  Requires: {}",
            member.requires.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }
    if member.platform_mediated {
        println!("  Platform mediated: {}", yes_no(true));
    }
}
