//! One flavor of one kernel version

use super::component::{Component, ComponentKind, Flavor};
use super::purge_line;

/// Components collected for one version and one flavor
///
/// A base sub-kernel is complete once its headers are known. A generic
/// sub-kernel needs headers, modules, modules-extra and image.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubKernel {
    flavor: Flavor,
    headers: Option<String>,
    modules: Option<String>,
    modules_extra: Option<String>,
    image: Option<String>,
}

impl SubKernel {
    /// Create an empty sub-kernel
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            headers: None,
            modules: None,
            modules_extra: None,
            image: None,
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Whether a component of `kind` belongs in this flavor
    pub fn accepts(&self, kind: ComponentKind) -> bool {
        match self.flavor {
            Flavor::Base => kind == ComponentKind::Headers,
            Flavor::Generic => true,
        }
    }

    /// Fill the slot for `kind`, replacing any previous name
    pub fn set(&mut self, kind: ComponentKind, name: impl Into<String>) {
        *self.slot_mut(kind) = Some(name.into());
    }

    /// Record a parsed component in its slot
    pub fn add_component(&mut self, component: &Component) {
        self.set(component.kind, component.name.clone());
    }

    /// Package name stored for `kind`, if any
    pub fn slot(&self, kind: ComponentKind) -> Option<&str> {
        match kind {
            ComponentKind::Headers => self.headers.as_deref(),
            ComponentKind::Modules => self.modules.as_deref(),
            ComponentKind::ModulesExtra => self.modules_extra.as_deref(),
            ComponentKind::Image => self.image.as_deref(),
        }
    }

    fn slot_mut(&mut self, kind: ComponentKind) -> &mut Option<String> {
        match kind {
            ComponentKind::Headers => &mut self.headers,
            ComponentKind::Modules => &mut self.modules,
            ComponentKind::ModulesExtra => &mut self.modules_extra,
            ComponentKind::Image => &mut self.image,
        }
    }

    /// Kinds this flavor requires to be complete
    pub fn required(&self) -> &'static [ComponentKind] {
        match self.flavor {
            Flavor::Base => &[ComponentKind::Headers],
            Flavor::Generic => &ComponentKind::ALL,
        }
    }

    /// Required kinds whose slot is still empty
    pub fn missing(&self) -> Vec<ComponentKind> {
        self.required()
            .iter()
            .copied()
            .filter(|kind| self.slot(*kind).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Removal commands for every filled slot, headers first
    pub fn tocmd(&self) -> String {
        ComponentKind::ALL
            .iter()
            .filter_map(|kind| self.slot(*kind))
            .map(purge_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
