use crate::support::{
    join_or_none, open_registry_or_exit, parse_or_exit, print_json, unwrap_or_exit,
};
use rings_kernel::Layer;
use serde_json::json;

pub fn run(
    manifest: Option<String>,
    layer: Option<String>,
    member: Option<String>,
    json_output: bool,
) {
    let layer = layer.map(|token| parse_or_exit::<Layer>(&token));
    let registry = open_registry_or_exit(manifest.as_deref());

    let (subject, closure) = match (&member, layer) {
        (Some(name), _) => (
            json!({ "member": name }),
            unwrap_or_exit(registry.member_closure(name)),
        ),
        (None, Some(layer)) => (json!({ "layer": layer }), registry.layer_closure(layer)),
        (None, None) => {
            eprintln!("error: either a layer or --member is required");
            std::process::exit(1);
        }
    };

    if json_output {
        print_json(
            &json!({
                "subject": subject,
                "closure": closure,
            }),
            "closure",
        );
        return;
    }

    match (&member, layer) {
        (Some(name), _) => println!("rings closure --member {name}"),
        (None, Some(layer)) => println!("rings closure {layer}"),
        (None, None) => {}
    }
    println!("  Layers: {}", join_or_none(&closure.layers));
    if !closure.components.is_empty() {
        println!("  Components: {}", join_or_none(&closure.components));
    }
    if !closure.platform_mediated.is_empty() {
        println!(
            "  Platform mediated: {}",
            join_or_none(&closure.platform_mediated)
        );
    }
}
