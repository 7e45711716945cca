//! Treepack demo
//!
//! Bangun contoh tree + event system, serialize, ukur latency encode, lalu
//! simpan buffer ke `<output_dir>/<root name>.<ext>`.
//!
//! Usage:
//!   cargo run --release --bin treepack_demo -- [OPTIONS]

use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use treepack::core::storage;
use treepack::event::{KeyboardEvent, System};
use treepack::{serialize, Array, Config, Object, Pack, Primitive, Result};

fn build_sample() -> Result<Object> {
    let mut root = Object::new("Test")?;
    root.add_entity(Primitive::create("int32", 5i32)?)?;
    root.add_entity(Primitive::create("ratio", 0.75f64)?)?;
    root.add_entity(Array::create("samples", &[1u16, 2, 3, 4])?)?;
    root.add_entity(Array::create_string("label", "hello treepack")?)?;

    let mut nested = Object::new("nested")?;
    nested.add_entity(Primitive::create("enabled", true)?)?;
    root.add_entity(nested)?;

    Ok(root)
}

fn benchmark_serialize(root: &Object) -> Result<()> {
    const ITERATIONS: usize = 100_000;

    // Warm up
    for _ in 0..1000 {
        serialize(root)?;
    }

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        serialize(root)?;
    }
    let duration = start.elapsed();

    let ns = duration.as_nanos() as f64 / ITERATIONS as f64;
    info!(
        iterations = ITERATIONS,
        bytes = root.size(),
        "serialize latency: {:.2} ns/op, {:.2} MB/sec",
        ns,
        (ITERATIONS * root.size()) as f64 / duration.as_secs_f64() / 1_000_000.0
    );
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let root = build_sample()?;
    let bytes = serialize(&root)?;
    info!(root = root.name(), bytes = bytes.len(), children = root.count(), "sample tree encoded");

    let mut system = System::new("Foo");
    system.add_event(KeyboardEvent::new(b'a' as i16, true, false));
    let system_bytes = system.serialize()?;
    info!(system = system.name(), bytes = system_bytes.len(), "event system encoded");

    benchmark_serialize(&root)?;

    storage::save(config.output_path(root.name()), &bytes)?;
    storage::save(config.output_path(system.name()), &system_bytes)?;
    Ok(())
}

fn main() {
    let config = match Config::from_args(std::env::args()) {
        Some(config) => config,
        None => {
            println!("{}", Config::usage());
            return;
        }
    };

    let default_level = if config.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(&config) {
        error!("demo failed: {}", e);
        std::process::exit(1);
    }
}
