use std::sync::Arc;

use termkit_core::{ComponentRegistry, ValidationResult};

use crate::config::{ConfigNode, ContentItem};
use crate::constructors::{self, ConstructorTable};
use crate::error::BuildError;
use crate::hooks::{Hook, HookRegistry};
use crate::options::BuilderOptions;
use crate::widget::{Node, WidgetNode};

/// Debug tracing that is a no-op unless `options.debug` is set
macro_rules! trace_build {
    ($builder:expr, $($arg:tt)+) => {
        if $builder.options.debug {
            tracing::debug!($($arg)+);
        }
    };
}

/// Compiles config trees into widget trees
///
/// The builder validates configs against the shared [`ComponentRegistry`],
/// runs its lifecycle hooks and dispatches each node to a constructor.
/// Validation problems never stop a build unless `strict` is set.
pub struct PanelBuilder {
    registry: Arc<ComponentRegistry>,
    options: BuilderOptions,
    hooks: HookRegistry,
    constructors: ConstructorTable,
}

/// Handle given to constructors for building their children
///
/// Tracks the nesting depth of the node being constructed.
pub struct BuildContext<'a> {
    builder: &'a PanelBuilder,
    depth: usize,
}

/// Create a builder over `registry` with the given options
pub fn panel_builder(registry: Arc<ComponentRegistry>, options: BuilderOptions) -> PanelBuilder {
    PanelBuilder::new(registry, options)
}

impl PanelBuilder {
    pub fn new(registry: Arc<ComponentRegistry>, options: BuilderOptions) -> Self {
        let builder = PanelBuilder {
            registry,
            options,
            hooks: HookRegistry::new(),
            constructors: ConstructorTable::builtin(),
        };
        trace_build!(builder, ?options, "panel builder initialized");
        builder
    }

    /// Builder with default options
    pub fn with_registry(registry: Arc<ComponentRegistry>) -> Self {
        Self::new(registry, BuilderOptions::default())
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    pub fn registry(&self) -> &Arc<ComponentRegistry> {
        &self.registry
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Register a lifecycle hook, replacing any hook of the same name
    pub fn register_hook(&mut self, hook: Hook) {
        let name = hook.name();
        self.hooks.register(hook);
        trace_build!(self, hook = %name, "registered hook");
    }

    /// Add or replace the constructor used for `tag`
    pub fn register_constructor<F>(&mut self, tag: impl Into<String>, constructor: F)
    where
        F: Fn(&BuildContext<'_>, &ConfigNode) -> Result<WidgetNode, BuildError> + 'static,
    {
        let tag = tag.into();
        trace_build!(self, tag = %tag, "registered constructor");
        self.constructors.insert(tag, constructor);
    }

    pub fn has_constructor(&self, tag: &str) -> bool {
        self.constructors.contains(tag)
    }

    /// Build a panel tree from `config`
    ///
    /// An invalid config is reported through the `onError` hook and the log,
    /// then built anyway; only strict mode turns it into an error, in which
    /// case `beforeRender` is not called.
    pub fn build(&self, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
        trace_build!(self, component = %config.ty, "building panel");

        if self.options.validate {
            let validation = self.validate(config);
            if !validation.valid {
                let error = BuildError::Validation {
                    messages: validation.messages().map(str::to_string).collect(),
                };
                self.hooks.on_error(&error, config);

                if self.options.strict {
                    return Err(error);
                }
                tracing::error!("{error}");
            }
        }

        self.hooks.before_render(config);
        self.panel_at(config, 0)
    }

    /// Validate `config.props` against the manifest of `config.ty`
    ///
    /// Types without a manifest are valid with a warning, so experimental
    /// elements can be built before they are described.
    pub fn validate(&self, config: &ConfigNode) -> ValidationResult {
        let result = match self.registry.validate_registered(&config.ty, &config.props) {
            Some(result) => result,
            None => {
                let warning = format!("No manifest found for {}, skipping validation", config.ty);
                tracing::warn!("{warning}");
                ValidationResult::ok().with_warning(warning)
            }
        };

        self.hooks.on_validate(config, &result);
        result
    }

    /// Build any component from its config
    ///
    /// A config without a type yields [`Node::Empty`].
    pub fn build_component(&self, config: &ConfigNode) -> Result<Node, BuildError> {
        self.component_at(config, 0)
    }

    fn check_depth(&self, depth: usize) -> Result<(), BuildError> {
        if depth > self.options.max_depth {
            tracing::error!(limit = self.options.max_depth, "widget tree nested too deeply");
            return Err(BuildError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    fn panel_at(&self, config: &ConfigNode, depth: usize) -> Result<WidgetNode, BuildError> {
        self.check_depth(depth)?;
        let ctx = BuildContext {
            builder: self,
            depth,
        };
        constructors::panel(&ctx, config)
    }

    fn component_at(&self, config: &ConfigNode, depth: usize) -> Result<Node, BuildError> {
        if config.ty.is_empty() {
            tracing::error!(?config, "component config missing type");
            return Ok(Node::Empty);
        }
        self.check_depth(depth)?;

        if self.options.validate {
            if let Some(validation) = self.registry.validate_registered(&config.ty, &config.props) {
                if !validation.valid {
                    let messages: Vec<String> = validation.messages().map(str::to_string).collect();
                    tracing::error!(component = %config.ty, errors = ?messages, "component validation failed");

                    if self.options.strict {
                        return Err(BuildError::ComponentValidation {
                            component: config.ty.clone(),
                            messages,
                        });
                    }
                }
            }
        }

        let ctx = BuildContext {
            builder: self,
            depth,
        };
        let widget = match self.constructors.get(&config.ty) {
            Some(constructor) => constructor(&ctx, config)?,
            None => constructors::generic(&ctx, config)?,
        };
        Ok(Node::Element(widget))
    }
}

impl std::fmt::Debug for PanelBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelBuilder")
            .field("options", &self.options)
            .field("hooks", &self.hooks)
            .field("constructors", &self.constructors)
            .finish_non_exhaustive()
    }
}

impl<'a> BuildContext<'a> {
    /// Nesting level of the node under construction, 0 for the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.builder.options
    }

    /// Build a child component one level down
    pub fn component(&self, config: &ConfigNode) -> Result<Node, BuildError> {
        self.builder.component_at(config, self.depth + 1)
    }

    /// Build a nested panel one level down
    pub fn panel(&self, config: &ConfigNode) -> Result<WidgetNode, BuildError> {
        self.builder.panel_at(config, self.depth + 1)
    }

    /// Build a content or footer entry
    pub fn content(&self, item: &ContentItem) -> Result<Node, BuildError> {
        match item {
            ContentItem::Text(text) => Ok(Node::Text(text.clone())),
            ContentItem::Config(config) => self.component(config),
            ContentItem::Built(node) => Ok(node.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{button, panel, slider};
    use crate::manifests::builtin_manifests;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn registry() -> Arc<ComponentRegistry> {
        Arc::new(ComponentRegistry::with_manifests(builtin_manifests()).unwrap())
    }

    #[test]
    fn test_builds_simple_panel() {
        let builder = PanelBuilder::with_registry(registry());
        let tree = builder.build(&panel("Simple Panel")).unwrap();

        assert_eq!(tree.tag, "t-pnl");
        assert_eq!(tree.property("title"), Some(&json!("Simple Panel")));
        assert_eq!(tree.property("variant"), Some(&json!("standard")));
        assert!(!tree.has_attribute("collapsible"));
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_validate_enum_violation() {
        let builder = PanelBuilder::with_registry(registry());
        let result = builder.validate(&ConfigNode::new("t-pnl").prop("variant", "invalid"));

        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0]
            .message
            .contains("must be one of [standard, headless]"));
    }

    #[test]
    fn test_validate_unknown_type_is_warning() {
        let builder = PanelBuilder::with_registry(registry());
        let config = ConfigNode::new("custom-widget").prop("x", 1);
        let result = builder.validate(&config);

        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.warnings,
            vec!["No manifest found for custom-widget, skipping validation"]
        );
        assert!(!builder.registry().validate("custom-widget", &config.props).valid);
    }

    #[test]
    fn test_hook_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut builder = PanelBuilder::with_registry(registry());

        let log = calls.clone();
        builder.register_hook(Hook::on_validate(move |_, result| {
            log.borrow_mut().push(format!("validate:{}", result.valid))
        }));
        let log = calls.clone();
        builder.register_hook(Hook::on_error(move |_, _| log.borrow_mut().push("error".into())));
        let log = calls.clone();
        builder.register_hook(Hook::before_render(move |config| {
            log.borrow_mut().push(format!("render:{}", config.ty))
        }));

        builder
            .build(&ConfigNode::new("t-pnl").prop("variant", "bogus"))
            .unwrap();

        assert_eq!(
            *calls.borrow(),
            vec!["validate:false", "error", "render:t-pnl"]
        );
    }

    #[test]
    fn test_strict_mode_skips_before_render() {
        let rendered = Rc::new(RefCell::new(false));
        let mut builder =
            PanelBuilder::new(registry(), BuilderOptions::default().strict());
        let flag = rendered.clone();
        builder.register_hook(Hook::before_render(move |_| *flag.borrow_mut() = true));

        let err = builder
            .build(&ConfigNode::new("t-pnl").prop("variant", "invalid").prop("extra", 1))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Panel config validation failed:\n"));
        assert!(message.contains("Unknown property: extra"));
        assert!(message.contains("must be one of [standard, headless]"));
        assert!(!*rendered.borrow());
    }

    #[test]
    fn test_no_validation_skips_on_validate() {
        let validated = Rc::new(RefCell::new(0));
        let mut builder =
            PanelBuilder::new(registry(), BuilderOptions::default().without_validation());
        let count = validated.clone();
        builder.register_hook(Hook::on_validate(move |_, _| *count.borrow_mut() += 1));

        builder
            .build(&ConfigNode::new("t-pnl").prop("variant", "invalid"))
            .unwrap();
        assert_eq!(*validated.borrow(), 0);
    }

    #[test]
    fn test_panel_children_order() {
        let builder = PanelBuilder::with_registry(registry());
        // Field order in the config does not affect child order.
        let config = panel("Editor")
            .footer("Status: Ready")
            .panel(panel("Timing"))
            .content("Intro")
            .action(button("Play"));

        let tree = builder.build(&config).unwrap();
        assert_eq!(tree.children.len(), 4);

        let actions = tree.children[0].as_element().unwrap();
        assert_eq!(actions.attribute("slot"), Some("actions"));
        assert_eq!(actions.elements().next().unwrap().tag, "t-btn");
        assert!(matches!(&tree.children[1], Node::Text(t) if t == "Intro"));
        assert_eq!(tree.children[2].as_element().unwrap().tag, "t-pnl");
        let footer = tree.children[3].as_element().unwrap();
        assert_eq!(footer.attribute("slot"), Some("footer"));
        assert_eq!(footer.text_content(), "Status: Ready");
    }

    #[test]
    fn test_missing_type_yields_placeholder() {
        let builder = PanelBuilder::with_registry(registry());
        let node = builder.build_component(&ConfigNode::default()).unwrap();
        assert!(node.is_empty());

        let tree = builder
            .build(&panel("P").content(ConfigNode::default()).content(slider("S")))
            .unwrap();
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_component_strict_validation() {
        let builder = PanelBuilder::new(registry(), BuilderOptions::default().strict());
        let err = builder
            .build(&panel("P").action(button("Go").prop("variant", "loud")))
            .unwrap_err();

        assert!(matches!(
            &err,
            BuildError::ComponentValidation { component, .. } if component == "t-btn"
        ));
        assert!(err.to_string().starts_with("Component validation failed: "));
    }

    #[test]
    fn test_depth_limit() {
        let builder = PanelBuilder::new(registry(), BuilderOptions::default().with_max_depth(2));
        let three = panel("1").panel(panel("2").panel(panel("3")));
        assert!(builder.build(&three).is_ok());

        let four = panel("1").panel(panel("2").panel(panel("3").panel(panel("4"))));
        assert_eq!(
            builder.build(&four).unwrap_err(),
            BuildError::DepthExceeded { limit: 2 }
        );
    }

    #[test]
    fn test_panel_builder_fn() {
        let builder = panel_builder(registry(), BuilderOptions::default().strict().with_max_depth(3));
        assert!(builder.options().strict);
        assert_eq!(builder.options().max_depth, 3);
        assert!(builder.has_constructor("t-pnl"));
        assert!(builder.build(&panel("P")).is_ok());
    }

    #[test]
    #[should_panic(expected = "render hook failed")]
    fn test_before_render_panic_propagates() {
        let mut builder = PanelBuilder::with_registry(registry());
        builder.register_hook(Hook::before_render(|_| panic!("render hook failed")));
        let _ = builder.build(&panel("P"));
    }

    #[test]
    #[should_panic(expected = "validate hook failed")]
    fn test_on_validate_panic_propagates() {
        let mut builder = PanelBuilder::with_registry(registry());
        builder.register_hook(Hook::on_validate(|_, _| panic!("validate hook failed")));
        let _ = builder.build(&panel("P"));
    }

    #[test]
    #[should_panic(expected = "error hook failed")]
    fn test_on_error_panic_propagates() {
        let mut builder = PanelBuilder::with_registry(registry());
        builder.register_hook(Hook::on_error(|_, _| panic!("error hook failed")));
        let _ = builder.build(&ConfigNode::new("t-pnl").prop("variant", "invalid"));
    }

    #[test]
    fn test_custom_constructor() {
        let mut builder = PanelBuilder::with_registry(registry());
        builder.register_constructor("t-card", |ctx, config| {
            let mut card = WidgetNode::new("t-card");
            card.set_attribute("depth", ctx.depth().to_string());
            card.apply_presentation(config);
            Ok(card)
        });
        assert!(builder.has_constructor("t-card"));

        let tree = builder
            .build(&panel("P").content(ConfigNode::new("t-card").id("c1")))
            .unwrap();
        let card = tree.elements().next().unwrap();
        assert_eq!(card.attribute("depth"), Some("1"));
        assert_eq!(card.id.as_deref(), Some("c1"));
    }
}
