//! Duration codec tests.

use liveops_sdk::{
    default_duration_unit, duration_to_millis, format_duration_amount, DurationUnit,
};

// ---------------------------------------------------------------------------
// Default unit selection
// ---------------------------------------------------------------------------

#[test]
fn whole_days_pick_the_day_unit() {
    assert_eq!(default_duration_unit(86_400_000), DurationUnit::Day);
    assert_eq!(default_duration_unit(3 * 86_400_000), DurationUnit::Day);
}

#[test]
fn whole_hours_pick_the_hour_unit() {
    assert_eq!(default_duration_unit(3_600_000), DurationUnit::Hour);
    assert_eq!(default_duration_unit(7_200_000), DurationUnit::Hour);
}

#[test]
fn uneven_values_fall_back_to_seconds() {
    assert_eq!(default_duration_unit(3_600_001), DurationUnit::Second);
    assert_eq!(default_duration_unit(1_500), DurationUnit::Second);
}

#[test]
fn values_below_a_unit_never_pick_it() {
    // Zero is divisible by everything but smaller than every larger unit.
    assert_eq!(default_duration_unit(0), DurationUnit::Second);
    assert_eq!(default_duration_unit(60_000), DurationUnit::Minute);
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn even_amounts_render_as_integers() {
    assert_eq!(format_duration_amount(86_400_000, DurationUnit::Day), "1");
    assert_eq!(format_duration_amount(7_200_000, DurationUnit::Hour), "2");
}

#[test]
fn fractional_amounts_round_to_two_places() {
    assert_eq!(format_duration_amount(5_400_000, DurationUnit::Hour), "1.5");
    assert_eq!(format_duration_amount(1_000, DurationUnit::Minute), "0.02");
}

// ---------------------------------------------------------------------------
// Write-back
// ---------------------------------------------------------------------------

#[test]
fn write_back_rounds_instead_of_truncating() {
    assert_eq!(duration_to_millis(1.5, DurationUnit::Minute), 90_000);
    assert_eq!(duration_to_millis(0.0004, DurationUnit::Second), 0);
}

#[test]
fn unit_switches_do_not_drift() {
    let stored = 5_400_000_i64;
    assert_eq!(default_duration_unit(stored), DurationUnit::Minute);
    let text = format_duration_amount(stored, DurationUnit::Hour);
    let amount: f64 = text.parse().unwrap();
    assert_eq!(duration_to_millis(amount, DurationUnit::Hour), stored);
}

#[test]
fn unit_constants_are_milliseconds() {
    assert_eq!(DurationUnit::Second.millis(), 1_000);
    assert_eq!(DurationUnit::Minute.millis(), 60_000);
    assert_eq!(DurationUnit::Hour.millis(), 3_600_000);
    assert_eq!(DurationUnit::Day.millis(), 86_400_000);
}

#[test]
fn labels_are_plural_display_names() {
    assert_eq!(DurationUnit::Day.label(), "Days");
    assert_eq!(DurationUnit::Second.label(), "Seconds");
}
