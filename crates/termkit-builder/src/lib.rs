//! # Termkit Builder
//!
//! Declarative construction of terminal kit widget trees.
//!
//! A [`ConfigNode`] describes a panel and everything inside it. The
//! [`PanelBuilder`] validates configs against a shared
//! [`ComponentRegistry`], then compiles them into a [`WidgetNode`] tree.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use termkit_builder::prelude::*;
//!
//! let registry = Arc::new(ComponentRegistry::with_manifests(builtin_manifests()).unwrap());
//! let builder = PanelBuilder::with_registry(registry);
//!
//! let config = panel("Audio")
//!     .action(button("Mute"))
//!     .content(slider("Volume").prop("value", 75))
//!     .footer("Ready");
//!
//! let tree = builder.build(&config).unwrap();
//! assert_eq!(tree.find_all("t-sld").len(), 1);
//! println!("{}", tree.to_json().unwrap());
//! ```

pub mod builder;
pub mod config;
pub mod constructors;
pub mod error;
pub mod event;
pub mod fields;
pub mod hooks;
pub mod manifests;
pub mod options;
pub mod style;
pub mod widget;

/// Tag names of the built-in widgets
pub mod tags {
    pub const PANEL: &str = "t-pnl";
    pub const BUTTON: &str = "t-btn";
    pub const INPUT: &str = "t-inp";
    pub const SLIDER: &str = "t-sld";
    pub const TOGGLE: &str = "t-tog";
    pub const DROPDOWN: &str = "t-drp";
    pub const COLOR_PICKER: &str = "t-clr";
    pub const TEXTAREA: &str = "t-textarea";
    pub const LOADER: &str = "t-ldr";
}

pub use termkit_core::{ComponentRegistry, Manifest, Props, ValidationError, ValidationResult};

pub use builder::{panel_builder, BuildContext, PanelBuilder};
pub use config::{
    button, color_picker, component, dropdown, input, loader, panel, slider, textarea, toggle,
    ConfigNode, ContentItem,
};
pub use constructors::{Constructor, ConstructorTable};
pub use error::BuildError;
pub use event::{EventHandler, WidgetEvent};
pub use hooks::{Hook, HookName, HookRegistry};
pub use manifests::builtin_manifests;
pub use options::{BuilderOptions, DEFAULT_MAX_DEPTH};
pub use style::Style;
pub use widget::{Listener, Node, WidgetNode};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::panel_builder;
    pub use crate::config::{
        button, color_picker, component, dropdown, input, loader, panel, slider, textarea, toggle,
    };
    pub use crate::{
        builtin_manifests, BuildError, BuilderOptions, ComponentRegistry, ConfigNode, EventHandler,
        Hook, Node, PanelBuilder, WidgetEvent, WidgetNode,
    };
}
