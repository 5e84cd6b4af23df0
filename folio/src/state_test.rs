use super::*;

fn items() -> Vec<OverlayItem> {
    vec![OverlayItem::new("A", "/assets/a.png"), OverlayItem::new("B", "/assets/b.png")]
}

#[test]
fn default_state() {
    let state = PageState::default();
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.menu_open);
    assert_eq!(state.active_tab, ProjectTab::Ongoing);
    assert!(state.overlay.is_none());
}

#[test]
fn toggle_menu_then_close() {
    let mut state = PageState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
}

#[test]
fn visible_projects_follow_active_tab() {
    let mut state = PageState::default();
    for tab in ProjectTab::ALL {
        state.set_active_tab(tab);
        assert!(state.visible_projects().all(|p| p.tab == tab));
        assert_eq!(state.visible_projects().count(), content::projects_for(tab).count());
    }
}

#[test]
fn open_overlay_failure_keeps_previous_overlay() {
    let mut state = PageState::default();
    state.open_overlay("Certificates", items(), 1).unwrap();
    let err = state.open_overlay("Resume", Vec::new(), 0).unwrap_err();
    assert_eq!(err, ViewError::EmptyOverlay);
    assert_eq!(state.overlay.as_ref().map(Overlay::title), Some("Certificates"));
}

#[test]
fn set_overlay_index_without_overlay_fails() {
    let mut state = PageState::default();
    assert_eq!(state.set_overlay_active_index(0), Err(ViewError::NoOverlay));
}

#[test]
fn close_overlay_clears_state() {
    let mut state = PageState::default();
    state.open_overlay("Certificates", items(), 0).unwrap();
    state.close_overlay();
    assert!(state.overlay.is_none());
}
