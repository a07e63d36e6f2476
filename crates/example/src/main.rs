//! Example graph loader CLI.
//!
//! Demonstrates the consumption surface of the registry: a serialized graph
//! references entities purely by tag string, and the registry is the sole
//! translator from that string to a runtime object. The loader knows
//! nothing about concrete entity types; both type families reach it through
//! their registration groups.
//!
//! # Usage
//!
//! ```bash
//! load_graph [graph_file]
//! ```
//!
//! Without an argument, a small embedded calibration graph is loaded. Run
//! with `--features viz` to see the draw actions fire (at debug level, e.g.
//! `RUST_LOG=debug`).

use astrolabe_groups::Registrar;
use astrolabe_registry::{RegistryError, TypeRegistry};
use astrolabe_types_calib2d::Calib2dGroup;
use astrolabe_types_slam2d::Slam2dGroup;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A small calibration run: poses, a landmark, odometry and calibration
/// constraints, and a sensor offset parameter block.
const DEMO_GRAPH: &str = "\
PARAMS_SE2_OFFSET 0 0.2 0.0 0.0
VERTEX_SE2 1 0.0 0.0 0.0
VERTEX_SE2 2 1.0 0.0 0.05
VERTEX_POINT_XY 3 2.0 1.0
VERTEX_ODOM_DIFFERENTIAL 4 0.1 0.1 0.5
EDGE_SE2 1 2 1.0 0.0 0.05
EDGE_SE2_POINT_XY 2 3 1.0 1.0
EDGE_SE2_CALIB 1 2 0 1.0 0.0 0.05
EDGE_SE2_ODOM_DIFFERENTIAL_CALIB 1 2 4 0.2 0.21 0.1
";

fn load(registry: &TypeRegistry, serialized: &str) -> (usize, usize) {
    let mut loaded = 0usize;
    let mut failed = 0usize;

    for line in serialized.lines().filter(|line| !line.trim().is_empty()) {
        let Some(tag) = line.split_whitespace().next() else {
            continue;
        };
        match registry.construct(tag) {
            Ok(entity) => {
                loaded += 1;
                if let Some(category) = registry.category_of(tag) {
                    info!(tag, category = %category, "constructed entity");
                }
                // Optional capability: most tags have no action, and that
                // is not an error.
                if let Some(action) = registry.action(tag) {
                    action.run(entity.as_ref());
                }
            }
            Err(RegistryError::UnknownTag(tag)) => {
                // Per-entity failure: report and keep loading the batch.
                failed += 1;
                warn!(tag = %tag, "skipping element with unknown tag");
            }
            Err(err) => {
                failed += 1;
                warn!(%err, "skipping element");
            }
        }
    }

    (loaded, failed)
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let serialized = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %path, %err, "cannot read graph file, falling back to demo graph");
                DEMO_GRAPH.to_string()
            }
        },
        None => DEMO_GRAPH.to_string(),
    };

    // Assemble the registrar: each extension module contributes one group.
    // calib2d uses slam2d by name; the registrar orders them.
    let mut registrar = Registrar::new();
    registrar.add_group(Slam2dGroup).add_group(Calib2dGroup);

    let registry = match registrar.finish() {
        Ok(registry) => registry,
        Err(err) => {
            warn!(%err, "type registration failed");
            std::process::exit(1);
        }
    };
    info!(tags = registry.len(), "type registry frozen");

    let (loaded, failed) = load(&registry, &serialized);
    info!(loaded, failed, "graph load finished");
}
