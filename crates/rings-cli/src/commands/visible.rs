use crate::support::{join_or_none, open_registry_or_exit, parse_or_exit, print_json};
use rings_kernel::{AccessRequest, Layer, Ring};
use serde_json::json;

pub fn run(
    manifest: Option<String>,
    ring: Option<String>,
    layer: Option<String>,
    json_output: bool,
) {
    let mut request = AccessRequest::new();
    if let Some(ring) = ring {
        request = request.ring(parse_or_exit::<Ring>(&ring));
    }
    if let Some(layer) = layer {
        request = request.layer(parse_or_exit::<Layer>(&layer));
    }
    let registry = open_registry_or_exit(manifest.as_deref());
    let members: Vec<&str> = registry
        .visible_members(&request)
        .into_iter()
        .map(|member| member.name.as_str())
        .collect();

    if json_output {
        print_json(
            &json!({
                "request": request,
                "rings": request.visible_rings(),
                "layers": request.visible_layers(),
                "members": members,
            }),
            "visible",
        );
        return;
    }

    println!("rings visible");
    println!("  Rings: {}", join_or_none(request.visible_rings()));
    println!("  Layers: {}", join_or_none(request.visible_layers()));
    println!("  Members ({}): {}", members.len(), join_or_none(&members));
}
