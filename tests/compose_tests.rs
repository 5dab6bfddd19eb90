use quakemap::config::MapConfig;
use quakemap::core::{MapComposer, render};
use quakemap::export::to_feature_collection;
use quakemap::models::EventRecord;

fn sample_markers() -> Vec<quakemap::models::StyledMarker> {
    render(&[
        EventRecord::new(
            Some(4.5),
            "10km N of Testville",
            1_700_000_000_000,
            Some(vec![-120.5, 38.2]),
        ),
        EventRecord::new(Some(1.5), "</script><b>x</b>", 0, Some(vec![1.0, 2.0])),
    ])
    .markers
}

#[test]
fn test_compose_includes_layers_control_and_legend() {
    let map = MapConfig::default();
    let composer = MapComposer::new(&map, Some("tok-123".into())).expect("composer");
    let html = composer.compose(&sample_markers()).expect("compose");

    assert!(html.contains("tok-123"));
    assert!(html.contains("mapbox.streets"));
    assert!(html.contains("mapbox.dark"));
    assert!(html.contains("Street Map"));
    assert!(html.contains("L.control.layers(baseMaps, overlayMaps, { collapsed: false })"));
    assert!(html.contains("position: \"bottomright\""));
    assert!(html.contains("id=\"map\""));
    assert!(html.contains("10km N of Testville"));
    assert!(html.contains("\"fill_opacity\":0.5"));
    assert!(html.contains("\"color\":\"red\""));
    for label in ["0–1", "1–2", "2–3", "3–4", "4+"] {
        assert!(html.contains(label), "legend label {label}");
    }
    assert!(html.contains("background:blue"));
    assert!(html.contains("background:red"));
}

#[test]
fn test_compose_escapes_script_breakout() {
    let map = MapConfig::default();
    let composer = MapComposer::new(&map, None).expect("composer");
    let html = composer.compose(&sample_markers()).expect("compose");

    // leaflet include + inline script only
    assert_eq!(html.matches("</script>").count(), 2);
    assert!(html.contains("<\\/script>"));
    assert!(!composer.has_access_token());
}

#[test]
fn test_compose_escapes_title() {
    let map = MapConfig {
        title: "Quakes <live>".into(),
        ..MapConfig::default()
    };
    let composer = MapComposer::new(&map, None).expect("composer");
    let html = composer.compose(&[]).expect("compose");
    assert!(html.contains("Quakes &lt;live&gt;"));
}

#[test]
fn test_feature_collection_shape() {
    let fc = to_feature_collection(&sample_markers());
    assert_eq!(fc["type"], "FeatureCollection");

    let features = fc["features"].as_array().expect("features");
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["geometry"]["coordinates"][0], -120.5);
    assert_eq!(features[0]["properties"]["radius"], 22.5);
    assert_eq!(features[0]["properties"]["color"], "red");
    assert_eq!(features[1]["properties"]["color"], "green");
}

#[test]
fn test_container_id_is_not_used_as_css_selector() {
    let map = MapConfig {
        container: "my map".into(),
        ..MapConfig::default()
    };
    let composer = MapComposer::new(&map, None).expect("composer");
    let html = composer.compose(&sample_markers()).expect("compose");

    assert!(html.contains("<div id=\"my map\" class=\"quakemap-canvas\">"));
    assert!(html.contains(".quakemap-canvas { height: 100%"));
    assert!(!html.contains("#my map"));
    assert!(html.contains("L.map(\"my map\""));
}
