// Integration tests for the FoodBridge matcher

use foodbridge::core::{Matcher, MatchError, MATCH_RADIUS_KM, distance::haversine_distance};
use foodbridge::models::{Coordinate, RecipientOrg};
use foodbridge::services::seed::{default_seed, NYC_ORIGIN};

fn create_recipient(id: &str, lat: f64, lng: f64, capacity: u32, stock: u32) -> RecipientOrg {
    RecipientOrg {
        id: id.to_string(),
        name: format!("NGO {}", id),
        address: format!("{} Main Street", id),
        location: Coordinate::new(lat, lng),
        total_capacity: capacity,
        current_food_stock: stock,
        contact_info: String::new(),
        students_count: 0,
        staff_count: 0,
    }
}

/// Deterministic ring of recipients at growing distances with varied needs
fn scattered_recipients(count: usize) -> Vec<RecipientOrg> {
    (0..count)
        .map(|i| {
            let step = i as f64;
            create_recipient(
                &format!("r{}", i),
                NYC_ORIGIN.lat + (step * 0.0037) % 0.09 - 0.045,
                NYC_ORIGIN.lng + (step * 0.0053) % 0.12 - 0.06,
                100 + (i as u32 * 37) % 250,
                (i as u32 * 53) % 200,
            )
        })
        .collect()
}

#[test]
fn test_seed_scenario() {
    let seed = default_seed();
    let result = Matcher::default().find_matches(NYC_ORIGIN, &seed.recipients).unwrap();

    let ranked: Vec<(&str, i64)> = result
        .matches
        .iter()
        .map(|m| (m.ngo.name.as_str(), m.need_score))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("Community Food Network", 200),
            ("Hope Kitchen", 150),
            ("Meal Bridge Foundation", 70),
        ]
    );

    for m in &result.matches {
        assert!(m.ngo.address.ends_with("Campus Town"));
        assert!(m.distance_km < 2.0, "{} is {} km away", m.ngo.name, m.distance_km);
    }

    let metro = seed.recipients.iter().find(|n| n.id == "ngo4").unwrap();
    assert!(haversine_distance(NYC_ORIGIN, metro.location) > MATCH_RADIUS_KM);
    assert_eq!(result.best_match().map(|m| m.ngo.id.as_str()), Some("ngo3"));
    assert_eq!(result.total_candidates, 4);
}

#[test]
fn test_filter_partitions_candidates_by_radius() {
    let candidates = scattered_recipients(60);
    let result = Matcher::default().find_matches(NYC_ORIGIN, &candidates).unwrap();

    let kept: Vec<&str> = result.matches.iter().map(|m| m.ngo.id.as_str()).collect();

    for m in &result.matches {
        assert!(m.distance_km <= MATCH_RADIUS_KM);
    }
    for ngo in &candidates {
        if !kept.contains(&ngo.id.as_str()) {
            assert!(haversine_distance(NYC_ORIGIN, ngo.location) > MATCH_RADIUS_KM);
        }
    }

    assert!(!result.matches.is_empty());
    assert!(result.matches.len() < candidates.len(), "fixture should straddle the radius");
}

#[test]
fn test_results_ordered_by_need_descending() {
    let candidates = scattered_recipients(60);
    let result = Matcher::default().find_matches(NYC_ORIGIN, &candidates).unwrap();

    for pair in result.matches.windows(2) {
        assert!(pair[0].need_score >= pair[1].need_score, "matches not sorted by need");
    }
}

#[test]
fn test_ties_keep_input_order() {
    let candidates = vec![
        create_recipient("first", 40.7130, -74.0050, 100, 50),
        create_recipient("top", 40.7135, -74.0055, 400, 0),
        create_recipient("second", 40.7125, -74.0065, 60, 10),
        create_recipient("third", 40.7140, -74.0040, 50, 0),
    ];

    let result = Matcher::default().find_matches(NYC_ORIGIN, &candidates).unwrap();
    let ids: Vec<&str> = result.matches.iter().map(|m| m.ngo.id.as_str()).collect();
    assert_eq!(ids, vec!["top", "first", "second", "third"]);

    let mut reversed = candidates.clone();
    reversed.reverse();
    let result = Matcher::default().find_matches(NYC_ORIGIN, &reversed).unwrap();
    let ids: Vec<&str> = result.matches.iter().map(|m| m.ngo.id.as_str()).collect();
    assert_eq!(ids, vec!["top", "third", "second", "first"]);
}

#[test]
fn test_matching_is_pure() {
    let candidates = scattered_recipients(40);
    let matcher = Matcher::default();

    let first = matcher.find_matches(NYC_ORIGIN, &candidates).unwrap();
    let second = matcher.find_matches(NYC_ORIGIN, &candidates).unwrap();

    assert_eq!(first, second);
    assert_eq!(candidates, scattered_recipients(40), "input must not be mutated");
}

#[test]
fn test_empty_and_no_match_are_ok() {
    let matcher = Matcher::default();

    let empty = matcher.find_matches(NYC_ORIGIN, &[]).unwrap();
    assert!(empty.is_empty());

    let far_away = vec![
        create_recipient("boston", 42.3601, -71.0589, 300, 0),
        create_recipient("metro", 40.7600, -73.9800, 100, 20),
    ];
    let none = matcher.find_matches(NYC_ORIGIN, &far_away).unwrap();
    assert!(none.is_empty());
    assert!(none.best_match().is_none());
    assert_eq!(none.total_candidates, 2);
}

#[test]
fn test_packets_never_filter_matches() {
    // A tiny need next to a huge need: both offered regardless of any quantity
    let candidates = vec![
        create_recipient("tiny", 40.7130, -74.0050, 11, 10),
        create_recipient("huge", 40.7135, -74.0055, 10_000, 0),
    ];
    let result = Matcher::default().find_matches(NYC_ORIGIN, &candidates).unwrap();
    assert_eq!(result.matches.len(), 2);
}

#[test]
fn test_invalid_coordinates_fail_fast() {
    let matcher = Matcher::default();
    let candidates = vec![create_recipient("ok", 40.7130, -74.0050, 100, 0)];

    let err = matcher
        .find_matches(Coordinate::new(40.7, f64::NAN), &candidates)
        .unwrap_err();
    assert!(matches!(err, MatchError::InvalidInput(_)));

    let mut bad = candidates.clone();
    bad.push(create_recipient("bad", f64::INFINITY, -74.0, 100, 0));
    assert!(matcher.find_matches(NYC_ORIGIN, &bad).is_err());
}

#[test]
fn test_concurrent_callers_share_one_matcher() {
    let matcher = Matcher::default();
    let candidates = default_seed().recipients;
    let expected = matcher.find_matches(NYC_ORIGIN, &candidates).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| matcher.find_matches(NYC_ORIGIN, &candidates).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
