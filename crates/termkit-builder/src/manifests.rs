//! Manifests of the shipped widget set
//!
//! Each manifest is generated from the widget's declared properties plus its
//! documentation, the same way third-party widgets describe themselves.

use termkit_core::{
    generate_manifest, DeclaredProperty, EventDescriptor, Manifest, ManifestOverrides,
    MethodDescriptor, PropertyNote, PropertyType, SlotDescriptor,
};

use crate::tags;

const CATEGORY_LAYOUT: &str = "layout";
const CATEGORY_INPUT: &str = "input";
const CATEGORY_FEEDBACK: &str = "feedback";

fn string(name: &str) -> DeclaredProperty {
    DeclaredProperty::new(name, PropertyType::String)
}

fn number(name: &str) -> DeclaredProperty {
    DeclaredProperty::new(name, PropertyType::Number)
}

fn flag(name: &str) -> DeclaredProperty {
    DeclaredProperty::new(name, PropertyType::Boolean)
        .reflect()
        .with_default(false)
}

fn note(description: &str) -> PropertyNote {
    PropertyNote::described(description)
}

fn slot(description: &str, multiple: bool) -> SlotDescriptor {
    SlotDescriptor {
        description: Some(description.to_string()),
        multiple,
        accepts: Vec::new(),
    }
}

/// Manifests for every built-in widget, in constructor table order
pub fn builtin_manifests() -> Vec<Manifest> {
    vec![
        panel(),
        button(),
        input(),
        slider(),
        toggle(),
        dropdown(),
        color_picker(),
        textarea(),
        loader(),
    ]
}

fn panel() -> Manifest {
    let declared = [
        string("title").with_default(""),
        string("variant").reflect().with_default("standard"),
        flag("collapsible"),
        flag("collapsed"),
        flag("compact"),
        flag("large"),
        flag("loading"),
        flag("resizable"),
        flag("draggable"),
        string("icon").with_default(""),
        flag("footerCollapsed").attribute("footer-collapsed"),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Panel")
        .description("Titled container with header actions, body content and a footer")
        .category(CATEGORY_LAYOUT)
        .property("title", note("Header text"))
        .property(
            "variant",
            note("Visual style").with_enum(["standard", "headless"]),
        )
        .property("collapsible", note("Header toggles the body"))
        .property("collapsed", note("Body is hidden"))
        .property("compact", note("Reduced padding"))
        .property("large", note("Enlarged header"))
        .property("loading", note("Shows a loading overlay"))
        .property("resizable", note("Body can be resized by dragging its edge"))
        .property("draggable", note("Panel can be moved by its header"))
        .property("icon", note("Header icon"))
        .property("footerCollapsed", note("Footer is hidden"))
        .method("toggleCollapse", MethodDescriptor::new("Toggle the collapsed state"))
        .method("collapse", MethodDescriptor::new("Hide the body"))
        .method("expand", MethodDescriptor::new("Show the body"))
        .event(
            "panel-collapsed",
            EventDescriptor::composed("Collapsed state changed").with_detail("collapsed", "boolean"),
        )
        .slot("", slot("Body content", true))
        .slot("actions", slot("Header action buttons", true))
        .slot("footer", slot("Footer content", true))
        .part("header", "Header bar")
        .part("body", "Content area");

    generate_manifest(tags::PANEL, &declared, overrides)
}

fn button() -> Manifest {
    let declared = [
        string("label").with_default(""),
        string("variant").reflect().with_default("primary"),
        string("type").with_default("text"),
        string("size"),
        flag("disabled"),
        flag("loading"),
        string("icon"),
        flag("toggleState").attribute("toggle-state"),
        string("iconOn").attribute("icon-on"),
        string("iconOff").attribute("icon-off"),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Button")
        .description("Clickable button with text, icon or toggle content")
        .category(CATEGORY_INPUT)
        .property("label", note("Button text"))
        .property(
            "variant",
            note("Visual style").with_enum(["primary", "secondary", "danger", "toggle"]),
        )
        .property(
            "type",
            note("Content kind").with_enum(["text", "icon", "icon-text", "toggle"]),
        )
        .property("size", note("Size modifier").with_enum(["small", "medium", "large"]))
        .property("disabled", note("Ignores interaction"))
        .property("loading", note("Shows a spinner instead of the label"))
        .property("icon", note("Icon shown next to or instead of the label"))
        .property("toggleState", note("Current state of a toggle button"))
        .property("iconOn", note("Icon while toggled on"))
        .property("iconOff", note("Icon while toggled off"))
        .event(
            "button-click",
            EventDescriptor::composed("Button activated").with_detail("toggleState", "boolean"),
        )
        .slot("", slot("Label content", false));

    generate_manifest(tags::BUTTON, &declared, overrides)
}

fn input() -> Manifest {
    let declared = [
        string("type").with_default("text"),
        string("label"),
        string("placeholder").with_default(""),
        string("value").with_default(""),
        flag("disabled"),
        flag("readonly"),
        flag("required"),
        number("min"),
        number("max"),
        string("pattern"),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Input")
        .description("Single-line text or number field")
        .category(CATEGORY_INPUT)
        .property(
            "type",
            note("Input kind").with_enum(["text", "number", "password", "email", "search"]),
        )
        .property("label", note("Field label"))
        .property("placeholder", note("Hint shown while empty"))
        .property("value", note("Current value"))
        .property("disabled", note("Ignores interaction"))
        .property("readonly", note("Value cannot be edited"))
        .property("required", note("Value must not be empty"))
        .property("min", note("Lowest accepted number"))
        .property("max", note("Highest accepted number"))
        .property("pattern", note("Regular expression the value must match"))
        .method("focus", MethodDescriptor::new("Move keyboard focus to the field"))
        .method("clear", MethodDescriptor::new("Reset the value"))
        .event(
            "input-change",
            EventDescriptor::composed("Value committed").with_detail("value", "string"),
        );

    generate_manifest(tags::INPUT, &declared, overrides)
}

fn slider() -> Manifest {
    let declared = [
        string("label").with_default(""),
        number("min").with_default(0),
        number("max").with_default(100),
        number("value").with_default(50),
        number("step").with_default(1),
        flag("disabled"),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Slider")
        .description("Numeric range control")
        .category(CATEGORY_INPUT)
        .property("label", note("Slider label"))
        .property("min", note("Lowest value"))
        .property("max", note("Highest value"))
        .property("value", note("Current value"))
        .property("step", note("Increment between values"))
        .property("disabled", note("Ignores interaction"))
        .event(
            "slider-change",
            EventDescriptor::composed("Value changed").with_detail("value", "number"),
        );

    generate_manifest(tags::SLIDER, &declared, overrides)
}

fn toggle() -> Manifest {
    let declared = [
        string("label").with_default(""),
        flag("checked"),
        flag("disabled"),
        string("variant").reflect().with_default("switch"),
        string("size").reflect().with_default("medium"),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Toggle")
        .description("On/off switch or checkbox")
        .category(CATEGORY_INPUT)
        .property("label", note("Toggle label"))
        .property("checked", note("Current state"))
        .property("disabled", note("Ignores interaction"))
        .property("variant", note("Visual style").with_enum(["switch", "checkbox"]))
        .property("size", note("Size modifier").with_enum(["small", "medium", "large"]))
        .method("toggle", MethodDescriptor::new("Flip the checked state"))
        .event(
            "toggle-change",
            EventDescriptor::composed("Checked state changed").with_detail("checked", "boolean"),
        );

    generate_manifest(tags::TOGGLE, &declared, overrides)
}

fn dropdown() -> Manifest {
    let declared = [
        string("placeholder").with_default(""),
        flag("disabled"),
        string("value").with_default(""),
        flag("searchable"),
        DeclaredProperty::new("options", PropertyType::Array),
        DeclaredProperty::new("data", PropertyType::Object),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Dropdown")
        .description("Select one value from a list of options")
        .category(CATEGORY_INPUT)
        .property("placeholder", note("Text shown with no selection"))
        .property("disabled", note("Ignores interaction"))
        .property("value", note("Selected option value"))
        .property("searchable", note("Options can be filtered by typing"))
        .property("options", note("Option list as strings or {value, label} objects"))
        .property("data", note("Grouped options keyed by group label"))
        .method("open", MethodDescriptor::new("Show the option list"))
        .method("close", MethodDescriptor::new("Hide the option list"))
        .event(
            "dropdown-change",
            EventDescriptor::composed("Selection changed").with_detail("value", "string"),
        );

    generate_manifest(tags::DROPDOWN, &declared, overrides)
}

fn color_picker() -> Manifest {
    let declared = [
        string("value").with_default("#00ff41"),
        flag("disabled"),
        string("variant").reflect().with_default("standard"),
        DeclaredProperty::new("swatches", PropertyType::Array),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Color Picker")
        .description("Color selection with swatches and hex entry")
        .category(CATEGORY_INPUT)
        .property("value", note("Selected color as a hex string"))
        .property("disabled", note("Ignores interaction"))
        .property(
            "variant",
            note("Layout").with_enum(["large", "standard", "compact"]),
        )
        .property("swatches", note("Preset colors"))
        .event(
            "color-change",
            EventDescriptor::composed("Color changed").with_detail("value", "string"),
        );

    generate_manifest(tags::COLOR_PICKER, &declared, overrides)
}

fn textarea() -> Manifest {
    let declared = [
        string("placeholder").with_default(""),
        string("value").with_default(""),
        number("rows").with_default(4),
        flag("disabled"),
        flag("readonly"),
        flag("required"),
        number("maxlength"),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Textarea")
        .description("Multi-line text field")
        .category(CATEGORY_INPUT)
        .property("placeholder", note("Hint shown while empty"))
        .property("value", note("Current text"))
        .property("rows", note("Visible line count"))
        .property("disabled", note("Ignores interaction"))
        .property("readonly", note("Text cannot be edited"))
        .property("required", note("Text must not be empty"))
        .property("maxlength", note("Longest accepted text"))
        .event(
            "textarea-change",
            EventDescriptor::composed("Text committed").with_detail("value", "string"),
        );

    generate_manifest(tags::TEXTAREA, &declared, overrides)
}

fn loader() -> Manifest {
    let declared = [
        string("type").reflect().with_default("spinner"),
        string("size").reflect().with_default("medium"),
        string("color"),
    ];

    let overrides = ManifestOverrides::new()
        .display_name("Loader")
        .description("Activity indicator")
        .category(CATEGORY_FEEDBACK)
        .property(
            "type",
            note("Animation style").with_enum(["spinner", "dots", "bar", "pulse"]),
        )
        .property("size", note("Size modifier").with_enum(["small", "medium", "large"]))
        .property("color", note("Indicator color"));

    generate_manifest(tags::LOADER, &declared, overrides)
}
