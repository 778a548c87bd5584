use serde_json::Value;

use crate::scene::{Scene, Shape, ShapeKind};

use super::{LoadError, LoadPolicy, SaveRecord, SerializedShape};

/// Maps every shape to its tagged entry, preserving order. No I/O.
pub fn serialize(scene: &Scene) -> SaveRecord {
    SaveRecord {
        shapes_list: scene.iter().map(SerializedShape::from).collect(),
    }
}

/// Compact JSON, one line.
pub fn to_json(scene: &Scene) -> String {
    // A SaveRecord is plain arrays and numbers; encoding cannot fail.
    serde_json::to_string(&serialize(scene)).unwrap_or_default()
}

/// Rebuilds a scene from an already-typed record.
///
/// An empty `shapes_list` is an error: a save that resolves to nothing is
/// treated as a failed load, not as an empty canvas.
pub fn deserialize(record: &SaveRecord) -> Result<Scene, LoadError> {
    if record.shapes_list.is_empty() {
        return Err(LoadError::malformed("shapesList is empty"));
    }
    Ok(build_scene(record))
}

/// Parses save text into a scene.
pub fn parse_save(text: &str, policy: LoadPolicy) -> Result<Scene, LoadError> {
    let record = decode_record(text, policy)?;
    // Emptiness was judged on the raw list; a list of only unknown entries
    // loads as an empty scene.
    Ok(build_scene(&record))
}

/// Parses save text into a typed record.
///
/// `policy` decides what happens to an entry that cannot be read, whether
/// its tag is unknown or its fields are: Lenient skips it, Strict fails.
pub fn decode_record(text: &str, policy: LoadPolicy) -> Result<SaveRecord, LoadError> {
    let root: Value = serde_json::from_str(text)?;

    let Value::Object(mut root) = root else {
        return Err(LoadError::malformed("top level is not an object"));
    };

    let entries = match root.remove("shapesList") {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(LoadError::malformed("shapesList is not an array")),
        None => return Err(LoadError::malformed("shapesList is missing")),
    };

    if entries.is_empty() {
        return Err(LoadError::malformed("shapesList is empty"));
    }

    let mut shapes_list = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let tag = entry.get("type").and_then(Value::as_str).unwrap_or_default();

        if tag.parse::<ShapeKind>().is_err() {
            match policy {
                LoadPolicy::Lenient => {
                    log::debug!("skipping save entry {index}: unknown shape type {tag:?}");
                    continue;
                }
                LoadPolicy::Strict => {
                    return Err(LoadError::UnknownShapeTag { index, tag: tag.to_string() });
                }
            }
        }

        match serde_json::from_value::<SerializedShape>(entry) {
            Ok(shape) => shapes_list.push(shape),
            Err(e) => match policy {
                LoadPolicy::Lenient => {
                    log::debug!("skipping save entry {index}: {e}");
                }
                LoadPolicy::Strict => {
                    return Err(LoadError::malformed(format!("entry {index}: {e}")));
                }
            },
        }
    }

    Ok(SaveRecord { shapes_list })
}

fn build_scene(record: &SaveRecord) -> Scene {
    record.shapes_list.iter().map(Shape::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Color, Vec2};

    fn sample() -> Scene {
        let mut scene = Scene::new();
        scene.push_point(Vec2::new(0.5, -0.5), Color::new(0.0, 1.0, 0.0, 1.0), 10.0);
        scene.push_triangle(Vec2::new(-0.25, 0.75), Color::new(0.2, 0.4, 0.6, 0.8), 0.05);
        scene.push_circle(Vec2::new(0.0, 0.0), Color::RED, 0.1, 12);
        scene
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let scene = sample();
        let loaded = parse_save(&to_json(&scene), LoadPolicy::Lenient).unwrap();
        assert_eq!(loaded, scene);

        let typed = deserialize(&serialize(&scene)).unwrap();
        assert_eq!(typed, scene);
    }

    #[test]
    fn point_entry_has_no_segments_field() {
        let mut scene = Scene::new();
        scene.push_point(Vec2::new(0.5, -0.5), Color::new(0.0, 1.0, 0.0, 1.0), 10.0);

        let record = serialize(&scene);
        assert_eq!(record.shapes_list[0].kind, ShapeKind::Point);
        assert_eq!(record.shapes_list[0].segments, None);

        let value: Value = serde_json::from_str(&to_json(&scene)).unwrap();
        let entry = &value["shapesList"][0];
        assert_eq!(entry["type"], "point");
        assert_eq!(entry["position"], serde_json::json!([0.5, -0.5]));
        assert_eq!(entry["color"], serde_json::json!([0.0, 1.0, 0.0, 1.0]));
        assert_eq!(entry["size"], serde_json::json!(10.0));
        assert!(entry.get("segments").is_none());
    }

    #[test]
    fn circle_entry_carries_segments() {
        let value: Value = serde_json::from_str(&to_json(&sample())).unwrap();
        assert_eq!(value["shapesList"][2]["segments"], 12);
    }

    #[test]
    fn empty_scene_serializes_but_does_not_load() {
        let json = to_json(&Scene::new());
        assert_eq!(json, r#"{"shapesList":[]}"#);

        let err = parse_save(&json, LoadPolicy::Lenient).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)), "{err}");
        assert!(deserialize(&serialize(&Scene::new())).is_err());
    }

    #[test]
    fn unknown_tag_is_dropped_under_lenient_policy() {
        let text = r#"{"shapesList":[{"type":"point","position":[0,0],"color":[1,0,0,1],"size":5},{"type":"bogus"}]}"#;
        let scene = parse_save(text, LoadPolicy::Lenient).unwrap();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.shapes()[0].kind(), ShapeKind::Point);
        assert_eq!(scene.shapes()[0].color(), Color::RED);
    }

    #[test]
    fn unknown_tag_fails_under_strict_policy() {
        let text = r#"{"shapesList":[{"type":"point","position":[0,0],"color":[1,0,0,1],"size":5},{"type":"bogus"}]}"#;
        match parse_save(text, LoadPolicy::Strict) {
            Err(LoadError::UnknownShapeTag { index, tag }) => {
                assert_eq!(index, 1);
                assert_eq!(tag, "bogus");
            }
            other => panic!("expected UnknownShapeTag, got {other:?}"),
        }
    }

    #[test]
    fn only_unknown_entries_load_as_empty_scene() {
        let scene = parse_save(r#"{"shapesList":[{"type":"square"}, 7]}"#, LoadPolicy::Lenient).unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_save("{ shapesList: ", LoadPolicy::Lenient).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn structural_problems_are_malformed() {
        for text in ["null", "[]", "{}", r#"{"shapesList": {}}"#, r#"{"shapesList": []}"#] {
            let err = parse_save(text, LoadPolicy::Lenient).unwrap_err();
            assert!(matches!(err, LoadError::Malformed(_)), "{text}: {err}");
        }
    }

    #[test]
    fn bad_fields_are_skipped_under_lenient_policy() {
        let text = r#"{"shapesList":[
            {"type":"triangle","size":1},
            {"type":"point","position":[0,0],"color":[1,0,0,1],"size":5},
            {"type":"circle","position":"here","color":[1,1,1,1],"size":0.5}
        ]}"#;
        let scene = parse_save(text, LoadPolicy::Lenient).unwrap();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.shapes()[0].kind(), ShapeKind::Point);
    }

    #[test]
    fn bad_fields_are_malformed_under_strict_policy() {
        let err = parse_save(r#"{"shapesList":[{"type":"triangle","size":1}]}"#, LoadPolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed(ref m) if m.starts_with("entry 0")), "{err}");
    }

    #[test]
    fn circle_without_segments_uses_default() {
        let text = r#"{"shapesList":[{"type":"circle","position":[0,0],"color":[1,1,1,1],"size":0.5}]}"#;
        let scene = parse_save(text, LoadPolicy::Lenient).unwrap();
        assert_eq!(scene.shapes()[0].segments(), Some(crate::scene::Circle::DEFAULT_SEGMENTS));
    }

    #[test]
    fn legacy_three_component_positions_load() {
        for third in ["0", "null"] {
            let text = format!(
                r#"{{"shapesList":[{{"type":"point","position":[0.1,0.2,{third}],"color":[1,1,1,1],"size":5}}]}}"#
            );
            let scene = parse_save(&text, LoadPolicy::Lenient).unwrap();
            assert_eq!(scene.shapes()[0].position(), Vec2::new(0.1, 0.2));
        }
    }

    #[test]
    fn non_finite_values_survive_save_and_load() {
        let mut scene = Scene::new();
        scene.push_point(Vec2::new(0.0, 0.0), Color::RED, 5.0);
        scene.push_triangle(
            Vec2::new(f32::INFINITY, 0.25),
            Color::new(f32::NAN, 0.0, 1.0, 1.0),
            f32::NAN,
        );

        let json = to_json(&scene);
        assert!(json.contains("null"), "{json}");

        let loaded = parse_save(&json, LoadPolicy::Strict).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.shapes()[0], scene.shapes()[0]);

        let tri = &loaded.shapes()[1];
        assert_eq!(tri.kind(), ShapeKind::Triangle);
        assert!(tri.color().r.is_nan());
        assert_eq!(tri.color().b, 1.0);
        assert!(tri.position().x.is_nan());
        assert_eq!(tri.position().y, 0.25);
        assert!(tri.size().is_nan());
    }
}
