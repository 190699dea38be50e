//! Behavioural coverage for merging two observations of one fort.

use std::cell::RefCell;

use fortwatch_core::{Fort, FortDraft, FortType};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

/// Forts shared by the steps of one scenario.
pub struct TestContext {
    fort: RefCell<Option<Fort>>,
    other: RefCell<Option<Fort>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        fort: RefCell::new(None),
        other: RefCell::new(None),
    }
}

fn merge(context: &TestContext, times: usize) {
    let other_slot = context.other.borrow();
    let Some(other) = other_slot.as_ref() else {
        panic!("second observation must be recorded")
    };
    let mut fort_slot = context.fort.borrow_mut();
    let Some(fort) = fort_slot.as_mut() else {
        panic!("fort must be recorded")
    };
    for _ in 0..times {
        fort.merge_from(other);
    }
}

fn merged_fort(context: &TestContext) -> Fort {
    context
        .fort
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("fort must be recorded"))
}

#[given("a fort named Alpha without a description")]
fn fort_alpha(context: &TestContext) {
    let fort = FortDraft::new("fort-1", ORIGIN)
        .with_type(FortType::Gym)
        .with_name("Alpha")
        .with_region_id(5);
    *context.fort.borrow_mut() = Some(fort);
}

#[given("a second observation named Beta with a description")]
fn observation_beta(context: &TestContext) {
    let other = FortDraft::new("fort-1", ORIGIN)
        .with_type(FortType::Gym)
        .with_name("Beta")
        .with_description("desc")
        .with_region_id(5);
    *context.other.borrow_mut() = Some(other);
}

#[when("I merge the second observation into the first")]
fn merge_once(context: &TestContext) {
    merge(context, 1);
}

#[when("I merge the second observation into the first twice")]
fn merge_twice(context: &TestContext) {
    merge(context, 2);
}

#[then("the fort is still named Alpha")]
fn still_alpha(context: &TestContext) {
    assert_eq!(merged_fort(context).name(), Some("Alpha"));
}

#[then("the fort description is filled from the second observation")]
fn description_filled(context: &TestContext) {
    assert_eq!(merged_fort(context).description(), Some("desc"));
}

#[then("the fort matches a single merge")]
fn matches_single_merge(context: &TestContext) {
    let mut expected = FortDraft::new("fort-1", ORIGIN)
        .with_type(FortType::Gym)
        .with_name("Alpha")
        .with_region_id(5);
    let other = context
        .other
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("second observation must be recorded"));
    expected.merge_from(&other);
    assert_eq!(merged_fort(context), expected);
}

#[scenario(path = "tests/features/fort_merge.feature", index = 0)]
fn merging_fills_gaps(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/fort_merge.feature", index = 1)]
fn merging_twice_is_idempotent(context: TestContext) {
    let _ = context;
}
