//! Kernel records keyed by version

use super::component::{BuildType, Component, ComponentKind, Flavor, KernelVersion};
use super::subkernel::SubKernel;

/// Sub-kernel a component belongs to, or `None` when it is ignored
///
/// Headers go to the base or generic flavor depending on the suffix.
/// Modules, modules-extra and image only exist for the generic flavor.
pub fn route(kind: ComponentKind, build_type: &BuildType) -> Option<Flavor> {
    match (kind, build_type.flavor()?) {
        (ComponentKind::Headers, flavor) => Some(flavor),
        (_, Flavor::Generic) => Some(Flavor::Generic),
        (_, Flavor::Base) => None,
    }
}

/// All packages installed for one kernel version
///
/// Ordered by version first; the sub-kernels only break ties so that
/// ordering stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kernel {
    version: KernelVersion,
    base: SubKernel,
    generic: SubKernel,
}

impl Kernel {
    pub fn new(version: KernelVersion) -> Self {
        Self {
            version,
            base: SubKernel::new(Flavor::Base),
            generic: SubKernel::new(Flavor::Generic),
        }
    }

    pub fn version(&self) -> KernelVersion {
        self.version
    }

    pub fn base(&self) -> &SubKernel {
        &self.base
    }

    pub fn generic(&self) -> &SubKernel {
        &self.generic
    }

    pub fn subkernel_mut(&mut self, flavor: Flavor) -> &mut SubKernel {
        match flavor {
            Flavor::Base => &mut self.base,
            Flavor::Generic => &mut self.generic,
        }
    }

    /// Route a component to its sub-kernel
    ///
    /// Returns `false` when the component belongs to neither flavor and was dropped.
    pub fn add_component(&mut self, component: &Component) -> bool {
        match route(component.kind, &component.build_type) {
            Some(flavor) => {
                let sub = self.subkernel_mut(flavor);
                debug_assert!(sub.accepts(component.kind));
                sub.add_component(component);
                true
            }
            None => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.base.is_complete() && self.generic.is_complete()
    }

    /// Removal commands, base block first, without blank lines
    pub fn tocmd(&self) -> String {
        [self.base.tocmd(), self.generic.tocmd()]
            .into_iter()
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
