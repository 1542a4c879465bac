use yew::prelude::*;

/// Lifecycle of a component instance as seen by the mount guard
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MountPhase {
    #[default]
    Pending,
    Mounted,
}

impl MountPhase {
    /// Phase after a render pass has been committed. Only ever moves forward.
    pub const fn after_render(self) -> Self {
        Self::Mounted
    }

    pub const fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted)
    }
}

/// Reports whether the calling component has completed its first render pass.
///
/// Returns `false` while the component renders for the first time. Once that
/// render is committed to the page the effect below advances the phase, which
/// schedules one more render in which the hook returns `true`. The flag never
/// goes back to `false` for the life of the component instance.
///
/// Effects never run during server-side rendering, so components rendered on
/// the server always observe `false`.
#[hook]
pub fn use_has_mounted() -> bool {
    let phase = use_state(MountPhase::default);

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            gloo::console::debug!("component mounted");
            phase.set(phase.after_render());
            || ()
        });
    }

    phase.is_mounted()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        assert_eq!(MountPhase::default(), MountPhase::Pending);
        assert!(!MountPhase::default().is_mounted());
    }

    #[test]
    fn test_first_render_mounts() {
        let phase = MountPhase::default().after_render();
        assert_eq!(phase, MountPhase::Mounted);
        assert!(phase.is_mounted());
    }

    #[test]
    fn test_mounted_is_final() {
        let mut phase = MountPhase::Pending;
        for _ in 0..3 {
            phase = phase.after_render();
            assert!(phase.is_mounted());
        }
    }
}
