//! Property 3: start-vertex invariance and run independence.
//!
//! Restarting from the last vertex attached in the first run explores the
//! same component, so the tree weight must not change. Re-running the same
//! configuration must reproduce the tree exactly.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::PrimBuilder;

use super::helpers::build_and_run;
use super::types::PrimFixture;

/// Runs the start invariance property for the given fixture.
pub(super) fn run_start_invariance_property(fixture: &PrimFixture) -> TestCaseResult {
    let (graph, tree) = build_and_run(fixture)?;

    let Some(&other) = tree.attach_order().last() else {
        return Err(TestCaseError::fail(format!(
            "run attached no vertices ({})",
            fixture.describe()
        )));
    };

    let prim = PrimBuilder::new().with_start(other.get()).build();
    let restarted = prim
        .run(&graph)
        .map_err(|e| TestCaseError::fail(format!("restart from {other} failed: {e}")))?;

    if restarted.total_weight() != tree.total_weight() {
        return Err(TestCaseError::fail(format!(
            "restart from {other} weighs {}, original weighs {} ({})",
            restarted.total_weight(),
            tree.total_weight(),
            fixture.describe(),
        )));
    }
    if restarted.reached_count() != tree.reached_count() {
        return Err(TestCaseError::fail(format!(
            "restart from {other} reached {}, original reached {} ({})",
            restarted.reached_count(),
            tree.reached_count(),
            fixture.describe(),
        )));
    }

    let repeated = prim
        .run(&graph)
        .map_err(|e| TestCaseError::fail(format!("repeat run failed: {e}")))?;
    if repeated != restarted {
        return Err(TestCaseError::fail(format!(
            "repeated run from {other} produced a different tree ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
