use dioxus::prelude::*;

use crate::browser;

/// Viewport width above which the slide-out menu no longer applies.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Mobile menu phases. The trigger icon, menu panel, and overlay all render
/// from this one value, so they cannot disagree; the body scroll lock is
/// applied inside the single transition path and is active iff `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Open,
}

/// Everything that can move the menu between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClick,
    OverlayClick,
    OutsideClick,
    EscapeKey,
    ResizeAboveBreakpoint,
    NavLinkClick,
}

/// Transition table: the trigger toggles, everything else dismisses.
pub fn next_phase(phase: MenuPhase, event: MenuEvent) -> MenuPhase {
    match (phase, event) {
        (MenuPhase::Closed, MenuEvent::TriggerClick) => MenuPhase::Open,
        (MenuPhase::Open, MenuEvent::TriggerClick) => MenuPhase::Closed,
        _ => MenuPhase::Closed,
    }
}

/// Shared mobile-menu state. All mutations route through [`MenuState::apply`].
#[derive(Clone, Copy)]
pub struct MenuState {
    phase: Signal<MenuPhase>,
}

pub fn use_menu_state() -> MenuState {
    let phase = use_signal(|| MenuPhase::Closed);
    MenuState { phase }
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self.phase.read() == MenuPhase::Open
    }

    pub fn toggle(&mut self) {
        self.apply(MenuEvent::TriggerClick);
    }

    pub fn overlay_click(&mut self) {
        self.apply(MenuEvent::OverlayClick);
    }

    pub fn outside_click(&mut self) {
        self.apply(MenuEvent::OutsideClick);
    }

    pub fn escape_key(&mut self) {
        self.apply(MenuEvent::EscapeKey);
    }

    pub fn resize_above_breakpoint(&mut self) {
        self.apply(MenuEvent::ResizeAboveBreakpoint);
    }

    pub fn nav_link_click(&mut self) {
        self.apply(MenuEvent::NavLinkClick);
    }

    fn apply(&mut self, event: MenuEvent) {
        let current = *self.phase.read();
        let next = next_phase(current, event);
        if next == current {
            return;
        }
        self.phase.set(next);
        browser::set_scroll_lock(next == MenuPhase::Open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[MenuEvent]) -> MenuPhase {
        events
            .iter()
            .fold(MenuPhase::Closed, |phase, event| next_phase(phase, *event))
    }

    #[test]
    fn test_trigger_toggles() {
        assert_eq!(run(&[MenuEvent::TriggerClick]), MenuPhase::Open);
        assert_eq!(run(&[MenuEvent::TriggerClick, MenuEvent::TriggerClick]), MenuPhase::Closed);
    }

    #[test]
    fn test_dismissal_events_force_closed() {
        let dismissals = [
            MenuEvent::OverlayClick,
            MenuEvent::OutsideClick,
            MenuEvent::EscapeKey,
            MenuEvent::ResizeAboveBreakpoint,
            MenuEvent::NavLinkClick,
        ];
        for event in dismissals {
            assert_eq!(next_phase(MenuPhase::Open, event), MenuPhase::Closed);
            assert_eq!(next_phase(MenuPhase::Closed, event), MenuPhase::Closed);
        }
    }

    #[test]
    fn test_mixed_sequences() {
        assert_eq!(
            run(&[MenuEvent::TriggerClick, MenuEvent::EscapeKey, MenuEvent::TriggerClick]),
            MenuPhase::Open
        );
        assert_eq!(
            run(&[
                MenuEvent::TriggerClick,
                MenuEvent::TriggerClick,
                MenuEvent::OverlayClick,
                MenuEvent::TriggerClick,
                MenuEvent::ResizeAboveBreakpoint,
            ]),
            MenuPhase::Closed
        );
    }
}
