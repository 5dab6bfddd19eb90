use quakemap::core::{render, render_event};
use quakemap::errors::AppError;
use quakemap::models::{ColorCategory, EventRecord};
use quakemap::utils::format_local_timestamp;
use quakemap::utils::formatting::format_magnitude;

fn testville() -> EventRecord {
    EventRecord::new(
        Some(4.5),
        "10km N of Testville",
        1_700_000_000_000,
        Some(vec![-120.5, 38.2]),
    )
}

#[test]
fn test_render_event_strong_quake() {
    let marker = render_event(&testville()).expect("render");

    assert_eq!(marker.radius, 22.5);
    assert_eq!(marker.color, ColorCategory::Red);
    assert_eq!(marker.lon, -120.5);
    assert_eq!(marker.lat, 38.2);
    assert!(marker.fill);
    assert_eq!(marker.fill_opacity, 0.5);
    assert!(marker.popup.contains("Location: 10km N of Testville"));
    assert!(marker.popup.contains("Magnitude: 4.5"));
}

#[test]
fn test_popup_layout() {
    let marker = render_event(&testville()).expect("render");
    let expected = format!(
        "Location: 10km N of Testville\nMagnitude: 4.5\n{}",
        format_local_timestamp(Some(1_700_000_000_000))
    );
    assert_eq!(marker.popup, expected);
}

#[test]
fn test_render_event_missing_magnitude() {
    let ev = EventRecord::new(None, "Unknown", 0, Some(vec![0.0, 0.0]));
    let marker = render_event(&ev).expect("render");

    assert_eq!(marker.radius, 0.0);
    assert_eq!(marker.color, ColorCategory::Blue);
    assert!(marker.popup.contains("Magnitude: null"));
}

#[test]
fn test_render_event_magnitude_one_is_blue() {
    let ev = EventRecord::new(Some(1.0), "Edge", 0, Some(vec![10.0, 20.0]));
    let marker = render_event(&ev).expect("render");

    assert_eq!(marker.color, ColorCategory::Blue);
    assert_eq!(marker.radius, 5.0);
    assert!(marker.popup.contains("Magnitude: 1\n"));
}

#[test]
fn test_render_event_keeps_depth() {
    let ev = EventRecord::new(Some(2.2), "Deep", 0, Some(vec![1.0, 2.0, 33.5]));
    let marker = render_event(&ev).expect("render");
    assert_eq!(marker.depth, Some(33.5));
}

#[test]
fn test_render_event_rejects_bad_geometry() {
    let cases = [
        EventRecord::new(Some(3.0), "No geometry", 0, None),
        EventRecord::new(Some(3.0), "Short", 0, Some(vec![12.0])),
        EventRecord::new(Some(3.0), "NaN", 0, Some(vec![f64::NAN, 1.0])),
    ];
    for ev in cases {
        match render_event(&ev) {
            Err(AppError::MalformedEvent { id, .. }) => {
                assert_eq!(Some(id), ev.properties.place.clone());
            }
            other => panic!("expected MalformedEvent, got {other:?}"),
        }
    }
}

#[test]
fn test_render_preserves_order_and_counts_malformed() {
    let events = vec![
        EventRecord::new(Some(3.2), "first", 0, Some(vec![1.0, 1.0])),
        EventRecord::new(Some(2.0), "broken", 0, None),
        EventRecord::new(Some(1.2), "second", 0, Some(vec![2.0, 2.0])),
        EventRecord::new(Some(3.2), "first", 0, Some(vec![1.0, 1.0])),
    ];

    let outcome = render(&events);

    assert_eq!(outcome.malformed, 1);
    let places: Vec<_> = outcome
        .markers
        .iter()
        .map(|m| m.place.as_deref().unwrap_or_default())
        .collect();
    // no reordering, no deduplication
    assert_eq!(places, ["first", "second", "first"]);
}

#[test]
fn test_render_n_events_yields_n_markers() {
    let events: Vec<EventRecord> = (0..25)
        .map(|i| {
            EventRecord::new(
                Some(f64::from(i) / 4.0),
                &format!("quake {i}"),
                1_700_000_000_000 + i64::from(i),
                Some(vec![f64::from(i), -f64::from(i)]),
            )
        })
        .collect();

    let outcome = render(&events);
    assert_eq!(outcome.markers.len(), events.len());
    assert_eq!(outcome.malformed, 0);
}

#[test]
fn test_render_is_idempotent() {
    let events = vec![
        testville(),
        EventRecord::new(None, "Unknown", 0, Some(vec![0.0, 0.0])),
    ];
    assert_eq!(render(&events), render(&events));
}

#[test]
fn test_render_empty_input() {
    let outcome = render(&[]);
    assert!(outcome.markers.is_empty());
    assert_eq!(outcome.malformed, 0);
}

#[test]
fn test_timestamp_and_magnitude_formatting() {
    assert_eq!(format_local_timestamp(None), "Invalid Date");
    assert_eq!(format_local_timestamp(Some(i64::MAX)), "Invalid Date");
    assert!(format_local_timestamp(Some(1_700_000_000_000)).contains("2023"));

    assert_eq!(format_magnitude(Some(4.5)), "4.5");
    assert_eq!(format_magnitude(Some(1.0)), "1");
    assert_eq!(format_magnitude(None), "null");
}

#[test]
fn test_time_outside_date_range_is_invalid_date() {
    let mut ev = testville();
    ev.properties.time = Some(1.0e300);
    let marker = render_event(&ev).expect("render");

    assert_eq!(marker.time, None);
    assert!(marker.popup.ends_with("\nInvalid Date"));
}
