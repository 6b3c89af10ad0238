//! Click-interception policy for link components: unmodified primary clicks
//! become navigations, everything else keeps the host's default behavior.

use std::collections::HashMap;

use bitflags::bitflags;

use crate::location::NavigateOptions;
use crate::router::Navigator;

bitflags! {
    /// Modifier keys held during a pointer click.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClickModifiers: u8 {
        const CTRL = 1 << 0;
        const META = 1 << 1;
        const ALT = 1 << 2;
        const SHIFT = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    pub button: MouseButton,
    pub modifiers: ClickModifiers,
}

impl Default for PointerClick {
    fn default() -> Self {
        Self {
            button: MouseButton::Primary,
            modifiers: ClickModifiers::empty(),
        }
    }
}

impl PointerClick {
    /// An unmodified primary-button click.
    pub fn primary() -> Self {
        Self::default()
    }

    pub fn with_modifiers(modifiers: ClickModifiers) -> Self {
        Self {
            button: MouseButton::Primary,
            modifiers,
        }
    }
}

/// Whether a click should be intercepted and turned into a navigation.
/// Clicks with any modifier key or a non-primary button pass through
/// untouched (open-in-new-tab and friends).
pub fn click_navigates(click: &PointerClick) -> bool {
    click.button == MouseButton::Primary && click.modifiers.is_empty()
}

/// Stable click handler a link component installs on its node. Interception
/// is a property of the handler, not of the node kind: a wrapped non-anchor
/// node intercepts bare clicks the same way an anchor does.
#[derive(Debug, Clone)]
pub struct LinkHandler {
    navigator: Navigator,
    href: String,
    options: NavigateOptions,
}

impl LinkHandler {
    pub fn new(navigator: Navigator, href: &str) -> Self {
        Self {
            navigator,
            href: href.to_string(),
            options: NavigateOptions::default(),
        }
    }

    pub fn with_options(navigator: Navigator, href: &str, options: NavigateOptions) -> Self {
        Self {
            navigator,
            href: href.to_string(),
            options,
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Handles one click. Returns true when the click was intercepted and
    /// turned into a navigation; the caller must suppress the host's default
    /// action exactly in that case.
    pub fn handle(&self, click: &PointerClick) -> bool {
        if !click_navigates(click) {
            return false;
        }
        self.navigator.navigate(&self.href, self.options);
        true
    }
}

/// Properties a link component injects into the node it wraps.
pub type NodeProps = HashMap<String, String>;

/// Merges added properties into a renderable node's existing ones, returning
/// the decorated set. Added properties win on key conflict. This replaces
/// in-place node mutation: the input is not modified.
pub fn decorate(base: &NodeProps, added: &NodeProps) -> NodeProps {
    let mut merged = base.clone();
    for (key, value) in added {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
