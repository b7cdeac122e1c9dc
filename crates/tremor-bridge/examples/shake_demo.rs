// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end wiring demo: host context, stub detector, module registry and
// the shake module. The channel receiver stands in for the scripting
// runtime; the stub handle stands in for the platform sensor.
//
// Run with: cargo run -p tremor-bridge --example shake_demo

use tracing::info;
use tracing_subscriber::EnvFilter;

use tremor_bridge::{HostContext, ModuleRegistry, ShakeModule, StubDetector};
use tremor_core::HostConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // Bring up the host and install the platform capability.
    let host = HostContext::new(HostConfig::default());
    let detector = StubDetector::new();
    let sensor = detector.handle();
    host.provide_motion_detector(Box::new(detector));

    // The "scripting side" attaches before modules come up.
    let events = host.emitter().attach();

    let mut registry = ModuleRegistry::new();
    registry.register(Box::new(ShakeModule::initialize(&host)?))?;

    let constants = registry.constants_of("ShakeModule")?;
    info!(?constants, "module constants visible to the scripting side");

    // Simulate a few platform shake signals.
    for _ in 0..3 {
        sensor.shake();
    }

    while let Ok(event) = events.try_recv() {
        info!(name = %event.name, payload = ?event.payload, "scripting side received event");
    }

    // Host teardown: every module's destroy runs exactly once.
    registry.destroy_all();

    // A late signal after teardown is ignored by the stopped capability.
    sensor.shake();
    assert!(events.try_recv().is_err());

    Ok(())
}
