use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use serde_json::json;

use termkit_builder::prelude::*;
use termkit_builder::{HookName, DEFAULT_MAX_DEPTH};

use super::{builder, config};

#[test]
fn test_enum_violation_reported() {
    let builder = builder(BuilderOptions::default());
    let result = builder.validate(&config(json!({
        "type": "t-pnl",
        "props": {"variant": "invalid"}
    })));

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0]
        .message
        .contains("must be one of [standard, headless]"));
}

#[test]
fn test_lenient_build_returns_tree() {
    let builder = builder(BuilderOptions::default());
    let tree = builder
        .build(&config(json!({
            "type": "t-pnl",
            "title": "Broken",
            "props": {"variant": "invalid", "rogue": 1}
        })))
        .unwrap();

    assert_eq!(tree.tag, "t-pnl");
    assert_eq!(tree.property("title"), Some(&json!("Broken")));
    // The invalid variant still reaches the widget.
    assert_eq!(tree.property("variant"), Some(&json!("invalid")));
}

#[test]
fn test_strict_build_lists_every_violation() {
    let builder = builder(BuilderOptions::default().strict());
    let err = builder
        .build(&config(json!({
            "type": "t-pnl",
            "props": {"variant": "invalid", "collapsible": "yes", "rogue": 1}
        })))
        .unwrap_err();

    let message = err.to_string();
    for violation in [
        "Property 'variant': value must be one of [standard, headless]",
        "Property 'collapsible': expected boolean, got string",
        "Unknown property: rogue",
    ] {
        assert!(message.contains(violation), "missing {violation:?} in {message:?}");
    }
    assert_eq!(err.messages().len(), 3);
}

#[test]
fn test_nested_panels_in_document_order() {
    let builder = builder(BuilderOptions::default());
    let tree = builder
        .build(&config(json!({
            "type": "t-pnl",
            "id": "outer",
            "panels": [
                {"type": "t-pnl", "id": "middle", "panels": [{"type": "t-pnl", "id": "inner"}]},
                {"type": "t-pnl", "id": "sibling"}
            ]
        })))
        .unwrap();

    let ids: Vec<_> = tree
        .find_all("t-pnl")
        .into_iter()
        .map(|panel| panel.id.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["middle", "inner", "sibling"]);

    let middle = tree.elements().next().unwrap();
    let inner = middle.elements().next().unwrap();
    assert_eq!(inner.tag, "t-pnl");
    assert!(inner.children.is_empty());
}

#[test]
fn test_unknown_type_warns_instead_of_failing() {
    let builder = builder(BuilderOptions::default());
    let node = config(json!({"type": "custom-widget", "props": {"x": 1}}));

    let result = builder.validate(&node);
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);

    assert!(!builder.registry().validate("custom-widget", &node.props).valid);
}

#[test]
fn test_hooks_run_once_in_order() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut builder = builder(BuilderOptions::default());

    let log = calls.clone();
    builder.register_hook(Hook::on_validate(move |_, _| log.borrow_mut().push("onValidate")));
    let log = calls.clone();
    builder.register_hook(Hook::before_render(move |_| log.borrow_mut().push("beforeRender")));

    builder.build(&config(json!({"type": "t-pnl"}))).unwrap();
    builder
        .build(&config(json!({"type": "t-pnl", "props": {"variant": "bad"}})))
        .unwrap();

    assert_eq!(
        *calls.borrow(),
        vec!["onValidate", "beforeRender", "onValidate", "beforeRender"]
    );
    assert!(builder.hooks().is_registered(HookName::BeforeRender));
    assert!(!builder.hooks().is_registered(HookName::OnError));
}

#[test]
fn test_strict_failure_reaches_on_error_only() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut builder = builder(BuilderOptions::default().strict());

    let log = calls.clone();
    builder.register_hook(Hook::on_validate(move |_, _| {
        log.borrow_mut().push("onValidate".to_string())
    }));
    let log = calls.clone();
    builder.register_hook(Hook::on_error(move |err, _| {
        log.borrow_mut().push(format!("onError:{}", err.messages().len()))
    }));
    let log = calls.clone();
    builder.register_hook(Hook::before_render(move |_| {
        log.borrow_mut().push("beforeRender".to_string())
    }));

    assert!(builder
        .build(&config(json!({"type": "t-pnl", "props": {"variant": "bad"}})))
        .is_err());
    assert_eq!(*calls.borrow(), vec!["onValidate", "onError:1"]);
}

#[test]
fn test_style_map_flattened() {
    let builder = builder(BuilderOptions::default());
    let tree = builder
        .build(&config(json!({
            "type": "t-pnl",
            "style": {"backgroundColor": "red", "fontSize": "12px"},
            "content": [{"type": "t-btn", "label": "Go", "style": "margin: 0"}]
        })))
        .unwrap();

    assert_eq!(tree.style.as_deref(), Some("background-color: red; font-size: 12px"));
    let button = tree.elements().next().unwrap();
    assert_eq!(button.style.as_deref(), Some("margin: 0"));
}

#[test]
fn test_full_panel_from_json() {
    let builder = builder(BuilderOptions::default());
    let tree = builder
        .build(&config(json!({
            "type": "t-pnl",
            "title": "Mixer",
            "collapsible": true,
            "classes": ["wide"],
            "actions": [{"type": "t-btn", "label": "Reset", "props": {"variant": "danger"}}],
            "content": [
                "Channel 1",
                {"type": "t-sld", "label": "Gain", "min": -12, "max": 12, "value": 0},
                {"type": "t-sld", "label": "Pan", "max": "lots"}
            ],
            "footer": ["Ready"]
        })))
        .unwrap();

    assert!(tree.has_attribute("collapsible"));
    assert_eq!(tree.classes, vec!["wide"]);

    let buttons = tree.find_all("t-btn");
    let button = buttons[0];
    assert_eq!(button.attribute("variant"), Some("danger"));
    assert_eq!(button.text_content(), "Reset");

    let sliders = tree.find_all("t-sld");
    assert_eq!(sliders[0].attribute("min"), Some("-12"));
    // A malformed field falls back to its default.
    assert_eq!(sliders[1].attribute("max"), Some("100"));

    let json: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
    assert_eq!(json["tag"], "t-pnl");
    assert_eq!(json["children"][0]["attributes"]["slot"], "actions");
    assert_eq!(json["children"][1], "Channel 1");
    assert_eq!(json["children"][4]["attributes"]["slot"], "footer");
}

#[test]
fn test_generic_fallback_binds_props() {
    let builder = builder(BuilderOptions::default());
    let tree = builder
        .build(&config(json!({
            "type": "t-pnl",
            "content": [{
                "type": "x-chip",
                "props": {
                    "selected": true,
                    "hidden": false,
                    "count": 3,
                    "label": "Bass",
                    "tags": ["low", "warm"],
                    "extra": null
                }
            }]
        })))
        .unwrap();

    let chip = tree.elements().next().unwrap();
    assert_eq!(chip.tag, "x-chip");
    assert_eq!(chip.attribute("selected"), Some(""));
    assert!(!chip.has_attribute("hidden"));
    assert_eq!(chip.attribute("count"), Some("3"));
    assert_eq!(chip.attribute("label"), Some("Bass"));
    assert_eq!(chip.property("tags"), Some(&json!(["low", "warm"])));
    assert!(!chip.has_attribute("extra"));
    assert!(chip.property("extra").is_none());
}

#[test]
fn test_event_handlers_attached() {
    let clicks = Rc::new(RefCell::new(0));
    let counter = clicks.clone();
    let builder = builder(BuilderOptions::default());

    let tree = builder
        .build(&panel("Transport").action(
            button("Play").on_event("button-click", move |_| *counter.borrow_mut() += 1),
        ))
        .unwrap();

    let buttons = tree.find_all("t-btn");
    let play = buttons[0];
    assert_eq!(play.dispatch(&WidgetEvent::new("button-click")), 1);
    assert_eq!(play.dispatch(&WidgetEvent::new("other")), 0);
    assert_eq!(*clicks.borrow(), 1);

    let named = builder
        .build(&config(json!({"type": "t-pnl", "events": {"panel-collapsed": "onCollapse"}})))
        .unwrap();
    assert_eq!(named.listeners.len(), 1);
    assert_eq!(named.listeners[0].handler.name(), Some("onCollapse"));
}

#[test]
fn test_depth_guard() {
    let builder = builder(BuilderOptions::default());
    let mut deep = panel("leaf");
    for level in 0..=DEFAULT_MAX_DEPTH {
        deep = panel(format!("level {level}")).panel(deep);
    }

    assert_eq!(
        builder.build(&deep).unwrap_err(),
        BuildError::DepthExceeded { limit: DEFAULT_MAX_DEPTH }
    );

    let shallow = super::builder(BuilderOptions::default().with_max_depth(1));
    assert!(shallow.build(&panel("a").content(button("b"))).is_ok());
    assert!(shallow
        .build(&panel("a").panel(panel("b").content(button("c"))))
        .is_err());
}

#[test]
fn test_custom_constructors_take_precedence() {
    let mut builder = builder(BuilderOptions::default());
    builder.register_constructor("x-chip", |_, config| {
        let mut chip = WidgetNode::new("x-chip");
        chip.set_attribute("custom", "yes");
        chip.apply_presentation(config);
        Ok(chip)
    });
    builder.register_constructor("t-btn", |_, _| Ok(WidgetNode::new("fancy-button")));

    let tree = builder
        .build(
            &panel("P")
                .content(component("x-chip").prop("selected", true))
                .content(button("Go")),
        )
        .unwrap();

    let children: Vec<_> = tree.elements().collect();
    assert_eq!(children[0].attribute("custom"), Some("yes"));
    assert!(!children[0].has_attribute("selected"));
    assert_eq!(children[1].tag, "fancy-button");
}

#[test]
fn test_validation_disabled() {
    let builder = builder(BuilderOptions::default().without_validation().strict());
    let tree = builder
        .build(&config(json!({
            "type": "t-pnl",
            "props": {"variant": "invalid"},
            "content": [{"type": "t-btn", "props": {"variant": "loud"}}]
        })))
        .unwrap();

    assert_eq!(tree.find_all("t-btn")[0].attribute("variant"), Some("loud"));
}

#[test]
fn test_props_type_overrides_top_level_field() {
    let builder = builder(BuilderOptions::default().strict());
    let tree = builder
        .build(&config(json!({
            "type": "t-pnl",
            "content": [
                {"type": "t-btn", "buttonType": "icon", "props": {"type": "toggle"}},
                {"type": "t-ldr", "loaderType": "bar", "props": {"type": "dots"}},
                {"type": "t-inp", "inputType": "search"}
            ]
        })))
        .unwrap();

    let buttons = tree.find_all("t-btn");
    assert_eq!(buttons[0].attribute("type"), Some("toggle"));
    let loaders = tree.find_all("t-ldr");
    assert_eq!(loaders[0].attribute("type"), Some("dots"));
    let inputs = tree.find_all("t-inp");
    assert_eq!(inputs[0].attribute("type"), Some("search"));
}

#[test]
fn test_null_sections_load_as_empty() {
    let builder = builder(BuilderOptions::default().strict());
    let node = config(json!({
        "type": "t-pnl",
        "title": "Empty",
        "props": null,
        "actions": null,
        "content": null,
        "footer": null,
        "panels": null
    }));

    assert!(builder.validate(&node).valid);
    let tree = builder.build(&node).unwrap();
    assert!(tree.children.is_empty());
    assert_eq!(tree.property("title"), Some(&json!("Empty")));
}

#[test]
#[should_panic(expected = "hook exploded")]
fn test_hook_panic_reaches_caller() {
    let mut builder = panel_builder(super::registry(), BuilderOptions::default());
    builder.register_hook(Hook::before_render(|_| panic!("hook exploded")));
    let _ = builder.build(&panel("P"));
}
