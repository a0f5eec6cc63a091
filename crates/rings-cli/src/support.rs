use rings_kernel::{PlatformPolicy, Registry, RegistryPolicy, RingsError};
use rings_manifest::{Manifest, builtin_manifest};
use serde::Serialize;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RINGS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a stderr subscriber so `--json` stdout stays machine-readable.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn load_manifest_or_exit(path: Option<&str>) -> Manifest {
    let loaded = match path {
        Some(path) => Manifest::load(path),
        None => builtin_manifest(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn load_registry_or_exit(manifest: &Manifest, policy: Option<RegistryPolicy>) -> Registry {
    let loaded = match policy {
        Some(policy) => manifest.load_registry_with_policy(policy),
        None => manifest.load_registry(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("error: failed to load registry: {e}");
        std::process::exit(1);
    })
}

/// Manifest + sealed registry, using the manifest's own policy.
pub fn open_registry_or_exit(path: Option<&str>) -> Registry {
    let manifest = load_manifest_or_exit(path);
    load_registry_or_exit(&manifest, None)
}

pub fn parse_or_exit<T>(value: &str) -> T
where
    T: FromStr<Err = RingsError>,
{
    value.parse().unwrap_or_else(|e: RingsError| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn policy_override_or_exit(policy: Option<&str>) -> Option<RegistryPolicy> {
    policy.map(|token| RegistryPolicy::with_platform(parse_or_exit::<PlatformPolicy>(token)))
}

pub fn unwrap_or_exit<T>(result: Result<T, RingsError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn print_json<T: Serialize>(payload: &T, what: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {what} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn join_or_none<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let rendered: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    if rendered.is_empty() {
        "(none)".to_string()
    } else {
        rendered.join(", ")
    }
}
