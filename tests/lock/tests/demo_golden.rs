//! Demo output locks.
//!
//! The built-in walkthroughs must keep printing exactly what they always
//! have, and report digests must be stable within a process.

use primer_harness::runner::{run_all, run_demo};
use primer_harness::scenario::{builtin_demos, DemoSelection, ScenarioV1};
use primer_kernel::proof::hash::{canonical_hash, HashDomain};

#[test]
fn binary_search_walkthrough_lines() {
    let demos = builtin_demos(&ScenarioV1::default(), DemoSelection::BinarySearch);
    let report = run_demo(demos[0].as_ref()).unwrap();
    assert_eq!(report.lines, vec!["2", "0", "5", "-1"]);
}

#[test]
fn selection_sort_walkthrough_lines() {
    let demos = builtin_demos(&ScenarioV1::default(), DemoSelection::SelectionSort);
    let report = run_demo(demos[0].as_ref()).unwrap();
    assert_eq!(report.lines, vec!["[0 1 2 3 4 5 10]"]);
}

#[test]
fn report_digests_are_stable_in_process() {
    let demos = builtin_demos(&ScenarioV1::default(), DemoSelection::All);
    let first = run_all(&demos).unwrap();
    for i in 1..=10 {
        let again = run_all(&demos).unwrap();
        assert_eq!(again, first, "run {i}: reports differ");
    }
}

#[test]
fn report_digest_commits_to_canonical_bytes() {
    let demos = builtin_demos(&ScenarioV1::default(), DemoSelection::All);
    for report in run_all(&demos).unwrap() {
        assert_eq!(
            report.digest,
            canonical_hash(HashDomain::DemoReport, &report.canonical_bytes),
            "{}",
            report.demo_id
        );
        let parsed: serde_json::Value = serde_json::from_slice(&report.canonical_bytes).unwrap();
        assert_eq!(parsed["schema_version"], "demo_report.v1");
        assert_eq!(parsed["demo_id"], report.demo_id.as_str());
    }
}

#[test]
fn binary_search_records_carry_probe_counts() {
    let demos = builtin_demos(&ScenarioV1::default(), DemoSelection::BinarySearch);
    let report = run_demo(demos[0].as_ref()).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&report.canonical_bytes).unwrap();
    let probes: Vec<u64> = parsed["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["probes"].as_u64().unwrap())
        .collect();
    // 3 → mid 2 hit; 1 → mids 2, 0; 6 → mids 2, 4, 5; 7 → mids 2, 4, 5 then empty.
    assert_eq!(probes, vec![1, 2, 3, 3]);
}

#[test]
fn no_paths_or_clock_in_reports() {
    let demos = builtin_demos(&ScenarioV1::default(), DemoSelection::All);
    for report in run_all(&demos).unwrap() {
        let text = std::str::from_utf8(&report.canonical_bytes).unwrap();
        for pattern in ["/home/", "/tmp/", "/Users/", "timestamp", "hostname"] {
            assert!(!text.contains(pattern), "{}: contains {pattern}", report.demo_id);
        }
    }
}
