use crate::support::{
    load_manifest_or_exit, load_registry_or_exit, policy_override_or_exit, print_json,
};
use rings_kernel::RingsError;
use serde_json::{Value, json};

pub struct Args {
    pub manifest: Option<String>,
    pub from: String,
    pub to: String,
    pub policy: Option<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let policy = policy_override_or_exit(args.policy.as_deref());
    let manifest = load_manifest_or_exit(args.manifest.as_deref());
    let registry = load_registry_or_exit(&manifest, policy);

    let violation = match registry.validate_layer_dependency(&args.from, &args.to) {
        Ok(()) => None,
        Err(RingsError::LayerViolation(violation)) => Some(violation),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let accepted = violation.is_none();

    if args.json {
        print_json(
            &json!({
                "from": args.from,
                "to": args.to,
                "policy": registry.policy().required_stdlib_platform,
                "result": if accepted { "accepted" } else { "rejected" },
                "violation": violation.as_ref().map_or(Value::Null, |v| json!(v)),
            }),
            "check-dep",
        );
    } else {
        println!("rings check-dep {} -> {}", args.from, args.to);
        println!("  Policy: {}", registry.policy().required_stdlib_platform);
        match &violation {
            None => println!("  Result: accepted"),
            Some(violation) => {
                println!("  Result: rejected");
                println!("  Rule: {}", violation.rule);
                println!(
                    "  Layers: {} -> {}",
                    violation.from_layer, violation.to_layer
                );
            }
        }
    }

    if !accepted {
        std::process::exit(1);
    }
}
