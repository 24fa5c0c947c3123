use std::fmt;
use std::str::FromStr;

use termkit_core::ValidationResult;

use crate::config::ConfigNode;
use crate::error::BuildError;

pub type BeforeRenderHook = Box<dyn Fn(&ConfigNode)>;
pub type OnValidateHook = Box<dyn Fn(&ConfigNode, &ValidationResult)>;
pub type OnErrorHook = Box<dyn Fn(&BuildError, &ConfigNode)>;

/// Lifecycle callback observing a build
///
/// Hooks cannot change the build. A hook that panics is not caught; the
/// panic unwinds into the caller of [`PanelBuilder::build`](crate::PanelBuilder::build).
pub enum Hook {
    BeforeRender(BeforeRenderHook),
    OnValidate(OnValidateHook),
    OnError(OnErrorHook),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    BeforeRender,
    OnValidate,
    OnError,
}

impl HookName {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::BeforeRender => "beforeRender",
            HookName::OnValidate => "onValidate",
            HookName::OnError => "onError",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beforeRender" => Ok(HookName::BeforeRender),
            "onValidate" => Ok(HookName::OnValidate),
            "onError" => Ok(HookName::OnError),
            other => Err(format!("unknown hook: {other}")),
        }
    }
}

impl Hook {
    pub fn before_render<F>(f: F) -> Self
    where
        F: Fn(&ConfigNode) + 'static,
    {
        Hook::BeforeRender(Box::new(f))
    }

    pub fn on_validate<F>(f: F) -> Self
    where
        F: Fn(&ConfigNode, &ValidationResult) + 'static,
    {
        Hook::OnValidate(Box::new(f))
    }

    pub fn on_error<F>(f: F) -> Self
    where
        F: Fn(&BuildError, &ConfigNode) + 'static,
    {
        Hook::OnError(Box::new(f))
    }

    pub fn name(&self) -> HookName {
        match self {
            Hook::BeforeRender(_) => HookName::BeforeRender,
            Hook::OnValidate(_) => HookName::OnValidate,
            Hook::OnError(_) => HookName::OnError,
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook({})", self.name())
    }
}

/// At most one callback per hook name; registering again replaces it
#[derive(Default)]
pub struct HookRegistry {
    before_render: Option<BeforeRenderHook>,
    on_validate: Option<OnValidateHook>,
    on_error: Option<OnErrorHook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Hook) {
        match hook {
            Hook::BeforeRender(f) => self.before_render = Some(f),
            Hook::OnValidate(f) => self.on_validate = Some(f),
            Hook::OnError(f) => self.on_error = Some(f),
        }
    }

    pub fn remove(&mut self, name: HookName) {
        match name {
            HookName::BeforeRender => self.before_render = None,
            HookName::OnValidate => self.on_validate = None,
            HookName::OnError => self.on_error = None,
        }
    }

    pub fn is_registered(&self, name: HookName) -> bool {
        match name {
            HookName::BeforeRender => self.before_render.is_some(),
            HookName::OnValidate => self.on_validate.is_some(),
            HookName::OnError => self.on_error.is_some(),
        }
    }

    pub(crate) fn before_render(&self, config: &ConfigNode) {
        if let Some(hook) = &self.before_render {
            hook(config);
        }
    }

    pub(crate) fn on_validate(&self, config: &ConfigNode, result: &ValidationResult) {
        if let Some(hook) = &self.on_validate {
            hook(config, result);
        }
    }

    pub(crate) fn on_error(&self, error: &BuildError, config: &ConfigNode) {
        if let Some(hook) = &self.on_error {
            hook(error, config);
        }
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<_> = [HookName::BeforeRender, HookName::OnValidate, HookName::OnError]
            .into_iter()
            .filter(|name| self.is_registered(*name))
            .map(|name| name.as_str())
            .collect();
        f.debug_struct("HookRegistry")
            .field("registered", &registered)
            .finish()
    }
}
