use pretty_assertions::assert_eq;
use serde_json::json;

use termkit_core::{ComponentRegistry, Manifest, PropertyDescriptor, Props};

fn props(value: serde_json::Value) -> Props {
    serde_json::from_value(value).expect("props object")
}

fn meter() -> Manifest {
    Manifest::new("t-meter")
        .with_property("label", PropertyDescriptor::string().required())
        .with_property("level", PropertyDescriptor::number())
        .with_property(
            "mode",
            PropertyDescriptor::string().with_enum(["peak", "rms"]),
        )
        .with_property("channels", PropertyDescriptor::array())
}

#[test]
fn test_valid_props_pass() {
    let registry = ComponentRegistry::new();
    registry.register(meter()).unwrap();

    let result = registry.validate(
        "t-meter",
        &props(json!({"label": "Out", "level": -6.5, "mode": "rms", "channels": ["L", "R"]})),
    );
    assert!(result.valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_every_violation_reported() {
    let registry = ComponentRegistry::new();
    registry.register(meter()).unwrap();

    let result = registry.validate(
        "t-meter",
        &props(json!({"level": "loud", "mode": "avg", "channels": {"L": 1}, "color": "red"})),
    );

    let messages: Vec<_> = result.messages().collect();
    assert_eq!(
        messages,
        vec![
            "Property 'level': expected number, got string",
            "Property 'mode': value must be one of [peak, rms]",
            "Property 'channels': expected array, got object",
            "Unknown property: color",
            "Missing required property: label",
        ]
    );
    assert!(result.errors.iter().all(|e| e.path == "t-meter"));
}

#[test]
fn test_register_is_idempotent_by_key() {
    let registry = ComponentRegistry::new();
    registry.register(meter()).unwrap();
    registry.register(Manifest::new("t-scope")).unwrap();
    let before = registry.tag_names();

    registry
        .register(meter().with_description("Level meter, second revision"))
        .unwrap();

    assert_eq!(registry.tag_names(), before);
    assert_eq!(
        registry.get("t-meter").unwrap().description,
        "Level meter, second revision"
    );
}

#[test]
fn test_load_manifest_file() {
    let registry = ComponentRegistry::new();
    let count = registry
        .load_json(
            &json!([
                {
                    "tagName": "t-meter",
                    "displayName": "Meter",
                    "properties": {
                        "label": {"type": "string", "required": true},
                        "mode": {"type": "string", "enum": ["peak", "rms"]}
                    }
                },
                {"tagName": "t-scope"}
            ])
            .to_string(),
        )
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(registry.tag_names(), vec!["t-meter", "t-scope"]);

    let result = registry.validate("t-meter", &props(json!({"mode": "peak"})));
    assert_eq!(
        result.messages().collect::<Vec<_>>(),
        vec!["Missing required property: label"]
    );
}

#[test]
fn test_rejects_manifest_without_tag() {
    let registry = ComponentRegistry::new();
    assert!(registry.load_json(r#"{"displayName": "Nameless"}"#).is_err());
    assert!(registry.load_json("not json").is_err());
    assert!(registry.is_empty());
}

#[test]
fn test_unregistered_tag_is_invalid() {
    let registry = super::registry();
    let result = registry.validate("custom-widget", &props(json!({"x": 1})));

    assert!(!result.valid);
    assert_eq!(
        result.messages().collect::<Vec<_>>(),
        vec!["No manifest found for component: custom-widget"]
    );
}

#[test]
fn test_builtin_manifest_lookup() {
    let registry = super::registry();

    assert_eq!(registry.len(), 9);
    let slots = registry.slots("t-pnl").unwrap();
    assert!(slots.contains_key("actions"));
    assert!(slots.contains_key("footer"));
    assert!(registry.methods("t-pnl").unwrap().contains_key("collapse"));
    assert_eq!(
        registry.properties("t-sld").unwrap()["max"].default,
        Some(json!(100))
    );
    assert!(registry.events("t-missing").is_none());
}
