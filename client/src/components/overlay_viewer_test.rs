#![cfg(not(feature = "hydrate"))]

use super::*;
use folio::{OverlayItem, PageState};

fn rendered(active_index: usize) -> String {
    let dispatcher = Dispatcher::new(RwSignal::new(PageState::default()));
    let items = vec![OverlayItem::new("A", "/assets/a.png"), OverlayItem::new("B", "/assets/b.png")];
    let overlay = Overlay::new("Certificates", items, active_index).unwrap();
    overlay_panel(dispatcher, &overlay).to_html()
}

#[test]
fn panel_sits_inside_the_backdrop() {
    let html = rendered(0);
    let backdrop = html.find("overlay-backdrop").unwrap();
    let panel = html.find("overlay-panel").unwrap();
    let close = html.find("overlay-close").unwrap();
    // The close button and sidebar live in the panel, which nests in the
    // backdrop; panel clicks must stop before reaching it.
    assert!(backdrop < panel && panel < close);
    assert!(html.contains(r#"role="dialog""#));
}

#[test]
fn active_item_is_marked_and_shown() {
    let html = rendered(1);
    assert!(html.contains("Certificates"));
    assert!(html.contains(r#"src="/assets/b.png""#));
    assert!(!html.contains(r#"src="/assets/a.png""#));
    assert_eq!(html.matches("overlay-sidebar-item active").count(), 1);
    assert_eq!(html.matches("overlay-sidebar-item").count(), 2);
}
