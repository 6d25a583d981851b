use crate::stats::min_durations_by_carrier;
use crate::stats::tests::utils::{add_ticket, ticket};

#[test]
fn test_keeps_shortest_flight() {
    let tickets = vec![ticket("A", 3600, 100), ticket("A", 1800, 100)];

    let durations = min_durations_by_carrier(&tickets);

    assert_eq!(durations.get("A"), Some(1800));
    assert_eq!(durations.len(), 1);
}

#[test]
fn test_later_longer_flight_does_not_replace() {
    let tickets = vec![ticket("A", 1800, 100), ticket("A", 7200, 100), ticket("A", 1800, 100)];

    let durations = min_durations_by_carrier(&tickets);

    assert_eq!(durations.get("A"), Some(1800));
}

#[test]
fn test_first_encounter_order() {
    let tickets = vec![
        ticket("TK", 30000, 100),
        ticket("BA", 20000, 100),
        ticket("TK", 10000, 100),
        ticket("S7", 40000, 100),
        ticket("BA", 50000, 100),
    ];

    let durations = min_durations_by_carrier(&tickets);

    let entries = durations.iter().collect::<Vec<_>>();
    assert_eq!(entries, vec![("TK", 10000), ("BA", 20000), ("S7", 40000)]);
    assert_eq!(durations.get("SU"), None);
}

#[test]
fn test_empty_input() {
    let durations = min_durations_by_carrier(&[]);
    assert!(durations.is_empty());
    assert_eq!(durations.iter().count(), 0);
}

#[test]
fn test_overnight_and_negative_durations() {
    let mut tickets = Vec::new();
    add_ticket(&mut tickets, "TK", ("12.05.18", "23:30"), ("13.05.18", "5:15"), 12400);
    add_ticket(&mut tickets, "S7", ("12.05.18", "16:20"), ("12.05.18", "15:20"), 13100);

    let durations = min_durations_by_carrier(&tickets);

    assert_eq!(durations.get("TK"), Some(5 * 3600 + 45 * 60));
    assert_eq!(durations.get("S7"), Some(-3600));
}

#[test]
fn test_negative_duration_wins_minimum() {
    let tickets = vec![ticket("A", 3600, 100), ticket("A", -60, 100)];

    let durations = min_durations_by_carrier(&tickets);

    assert_eq!(durations.get("A"), Some(-60));
}
