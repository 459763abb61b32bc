//! Binary that runs the built-in demos and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `demo_fixture`
//!
//! Output: `key=value` lines, one pair per demo plus one probe trace digest
//! per target of the default search walkthrough.

use primer_harness::runner::run_all;
use primer_harness::scenario::{builtin_demos, DemoSelection, ScenarioV1};
use primer_search::trace::search_traced;

fn main() {
    let demos = builtin_demos(&ScenarioV1::default(), DemoSelection::All);
    let reports = run_all(&demos).expect("built-in demos must run");

    for report in &reports {
        println!("{}.lines={}", report.demo_id, report.lines.join("|"));
        println!("{}.digest={}", report.demo_id, report.digest);
    }

    let sequence = [1_i64, 2, 3, 4, 5, 6];
    for target in [3_i64, 1, 6, 7] {
        let traced = search_traced(&sequence, &target);
        let digest = traced.trace.digest().expect("probe trace digest");
        println!("trace.target_{target}={digest}");
    }
}
