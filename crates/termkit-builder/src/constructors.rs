//! Per-type widget constructors
//!
//! A constructor maps the declarative fields of a config node onto a widget's
//! property/attribute contract. The [`ConstructorTable`] dispatches on the
//! node's type; types without an entry go through [`generic`].

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

use crate::builder::BuildContext;
use crate::config::ConfigNode;
use crate::error::BuildError;
use crate::fields::{
    resolve_fields, ButtonFields, ColorPickerFields, DropdownFields, InputFields, LoaderFields,
    PanelFields, SliderFields, TextareaFields, ToggleFields,
};
use crate::tags;
use crate::widget::{Node, WidgetNode};

pub type Constructor = Rc<dyn Fn(&BuildContext<'_>, &ConfigNode) -> Result<WidgetNode, BuildError>>;

/// Tag name to constructor
#[derive(Clone)]
pub struct ConstructorTable {
    entries: IndexMap<String, Constructor>,
}

impl ConstructorTable {
    pub fn empty() -> Self {
        ConstructorTable {
            entries: IndexMap::new(),
        }
    }

    /// Table holding the constructors of the shipped widget set
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert(tags::PANEL, panel);
        table.insert(tags::BUTTON, button);
        table.insert(tags::INPUT, input);
        table.insert(tags::SLIDER, slider);
        table.insert(tags::TOGGLE, toggle);
        table.insert(tags::DROPDOWN, dropdown);
        table.insert(tags::COLOR_PICKER, color_picker);
        table.insert(tags::TEXTAREA, textarea);
        table.insert(tags::LOADER, loader);
        table
    }

    /// Add or replace the constructor for `tag`
    pub fn insert<F>(&mut self, tag: impl Into<String>, constructor: F)
    where
        F: Fn(&BuildContext<'_>, &ConfigNode) -> Result<WidgetNode, BuildError> + 'static,
    {
        self.entries.insert(tag.into(), Rc::new(constructor));
    }

    pub fn get(&self, tag: &str) -> Option<Constructor> {
        self.entries.get(tag).cloned()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for ConstructorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ConstructorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tags()).finish()
    }
}

/// Element with the config's id, classes and style applied
fn element(tag: &str, config: &ConfigNode) -> WidgetNode {
    let mut widget = WidgetNode::new(tag);
    widget.apply_presentation(config);
    widget
}

fn set_if_present(widget: &mut WidgetNode, name: &str, value: &str) {
    if !value.is_empty() {
        widget.set_attribute(name, value);
    }
}

/// Panel with header actions, body content, nested panels and footer
///
/// Children are assembled in that fixed order. Panel `props` override the
/// top-level fields.
pub fn panel(ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: PanelFields = resolve_fields(tags::PANEL, &[&config.fields, &config.props]);

    let mut widget = element(tags::PANEL, config);
    widget.set_property("title", fields.title);
    widget.set_property("variant", fields.variant);
    widget.toggle_attribute("collapsible", fields.collapsible);
    widget.toggle_attribute("collapsed", fields.collapsed);
    widget.toggle_attribute("compact", fields.compact);
    widget.toggle_attribute("large", fields.large);
    widget.toggle_attribute("loading", fields.loading);
    widget.toggle_attribute("resizable", fields.resizable);
    widget.toggle_attribute("draggable", fields.draggable);
    widget.set_property("icon", fields.icon);
    widget.toggle_attribute("footerCollapsed", fields.footer_collapsed);
    widget.bind_events(&config.events);

    if !config.actions.is_empty() {
        let mut actions = WidgetNode::slot("actions");
        for action in &config.actions {
            actions.append(ctx.component(action)?);
        }
        widget.append(actions.into());
    }

    for item in &config.content {
        widget.append(ctx.content(item)?);
    }

    for nested in &config.panels {
        widget.append(ctx.panel(nested)?.into());
    }

    if !config.footer.is_empty() {
        let mut footer = WidgetNode::slot("footer");
        for item in &config.footer {
            footer.append(ctx.content(item)?);
        }
        widget.append(footer.into());
    }

    Ok(widget)
}

pub fn button(_ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: ButtonFields = resolve_fields(tags::BUTTON, &[&config.fields, &config.props]);

    let mut widget = element(tags::BUTTON, config);
    widget.set_attribute("variant", fields.variant);
    widget.set_attribute("type", fields.button_type);
    set_if_present(&mut widget, "size", &fields.size);
    widget.toggle_attribute("disabled", fields.disabled);
    widget.toggle_attribute("loading", fields.loading);
    widget.set_property("icon", fields.icon);
    widget.toggle_attribute("toggleState", fields.toggle_state);
    widget.set_property("iconOn", fields.icon_on);
    widget.set_property("iconOff", fields.icon_off);
    widget.bind_events(&config.events);

    if !fields.label.is_empty() {
        widget.append(Node::Text(fields.label));
    }
    Ok(widget)
}

pub fn input(_ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: InputFields = resolve_fields(tags::INPUT, &[&config.fields, &config.props]);

    let mut widget = element(tags::INPUT, config);
    widget.set_attribute("type", fields.input_type);
    widget.set_attribute("placeholder", fields.placeholder);
    widget.set_property("value", fields.value);
    widget.toggle_attribute("disabled", fields.disabled);
    widget.toggle_attribute("readonly", fields.readonly);
    widget.toggle_attribute("required", fields.required);
    if let Some(min) = fields.min {
        widget.set_attribute("min", min.to_string());
    }
    if let Some(max) = fields.max {
        widget.set_attribute("max", max.to_string());
    }
    if let Some(pattern) = fields.pattern.filter(|p| !p.is_empty()) {
        widget.set_attribute("pattern", pattern);
    }
    widget.bind_events(&config.events);
    Ok(widget)
}

pub fn slider(_ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: SliderFields = resolve_fields(tags::SLIDER, &[&config.fields, &config.props]);

    let mut widget = element(tags::SLIDER, config);
    widget.set_property("label", fields.label);
    widget.set_attribute("min", fields.min.to_string());
    widget.set_attribute("max", fields.max.to_string());
    widget.set_property("value", fields.value);
    widget.set_attribute("step", fields.step.to_string());
    widget.toggle_attribute("disabled", fields.disabled);
    widget.bind_events(&config.events);
    Ok(widget)
}

pub fn toggle(_ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: ToggleFields = resolve_fields(tags::TOGGLE, &[&config.fields, &config.props]);

    let mut widget = element(tags::TOGGLE, config);
    widget.set_property("label", fields.label);
    widget.toggle_attribute("checked", fields.checked);
    widget.toggle_attribute("disabled", fields.disabled);
    widget.bind_events(&config.events);
    Ok(widget)
}

pub fn dropdown(_ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: DropdownFields = resolve_fields(tags::DROPDOWN, &[&config.fields, &config.props]);

    let mut widget = element(tags::DROPDOWN, config);
    widget.set_attribute("placeholder", fields.placeholder);
    widget.set_property("value", fields.value);
    widget.set_property("options", fields.options);
    widget.toggle_attribute("searchable", fields.searchable);
    widget.toggle_attribute("disabled", fields.disabled);
    widget.bind_events(&config.events);
    Ok(widget)
}

pub fn color_picker(
    _ctx: &BuildContext<'_>,
    config: &ConfigNode,
) -> Result<WidgetNode, BuildError> {
    let fields: ColorPickerFields =
        resolve_fields(tags::COLOR_PICKER, &[&config.fields, &config.props]);

    let mut widget = element(tags::COLOR_PICKER, config);
    widget.set_property("value", fields.value);
    widget.toggle_attribute("disabled", fields.disabled);
    widget.bind_events(&config.events);
    Ok(widget)
}

pub fn textarea(_ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: TextareaFields = resolve_fields(tags::TEXTAREA, &[&config.fields, &config.props]);

    let mut widget = element(tags::TEXTAREA, config);
    widget.set_attribute("placeholder", fields.placeholder);
    widget.set_property("value", fields.value);
    widget.set_attribute("rows", fields.rows.to_string());
    widget.toggle_attribute("disabled", fields.disabled);
    widget.toggle_attribute("readonly", fields.readonly);
    widget.toggle_attribute("required", fields.required);
    widget.bind_events(&config.events);
    Ok(widget)
}

pub fn loader(_ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    let fields: LoaderFields = resolve_fields(tags::LOADER, &[&config.fields, &config.props]);

    let mut widget = element(tags::LOADER, config);
    widget.set_attribute("type", fields.loader_type);
    widget.set_attribute("size", fields.size);
    set_if_present(&mut widget, "color", &fields.color);
    widget.bind_events(&config.events);
    Ok(widget)
}

/// Fallback for types without a dedicated constructor
///
/// Boolean props become presence attributes, other scalars become value
/// attributes, arrays and objects become property bindings. `null` props
/// are skipped.
pub fn generic(ctx: &BuildContext<'_>, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
    if ctx.options().debug {
        tracing::debug!(component = %config.ty, "building generic component");
    }

    let mut widget = element(&config.ty, config);
    for (name, value) in &config.props {
        match value {
            Value::Bool(flag) => widget.toggle_attribute(name.clone(), *flag),
            Value::Null => {}
            Value::String(s) => widget.set_attribute(name.clone(), s.clone()),
            Value::Number(n) => widget.set_attribute(name.clone(), n.to_string()),
            Value::Array(_) | Value::Object(_) => widget.set_property(name.clone(), value.clone()),
        }
    }
    widget.bind_events(&config.events);
    Ok(widget)
}
