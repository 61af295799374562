mod support;

use salesphere_common::{PanelConfig, PanelVisibility, ProductAction, ProductId};
use support::{mock_panel, tracing_init, PageEvent};

fn reveal_count(log: &[PageEvent]) -> usize {
    log.iter()
        .filter(|e| matches!(e, PageEvent::RemoveClass { id, .. } if id == "productDetails"))
        .count()
}

/// Walk through the full page lifecycle: load, three clicks, then a new product.
#[test]
fn test_page_lifecycle() {
    tracing_init();
    let (mut panel, log) = mock_panel(PanelConfig::default());

    panel.initialize();
    assert_eq!(panel.visibility(), PanelVisibility::Visible);
    assert_eq!(panel.elements().info.html(), "<p>Product details 1</p>");
    assert!(!panel.elements().details.has_class("d-none"));
    assert!(panel.elements().details.has_class("card"));

    let after_init = log.borrow().len();

    panel.on_add_product_clicked();
    panel.on_edit_product_clicked();
    panel.on_delete_product_clicked();

    assert_eq!(
        log.borrow()[after_init..],
        [
            PageEvent::Alert("Add product".into()),
            PageEvent::Alert("Edit product".into()),
            PageEvent::Alert("Delete product".into()),
        ]
    );
    assert_eq!(panel.elements().info.html(), "<p>Product details 1</p>");

    panel.load_product_details(&ProductId::from(42i64));
    assert_eq!(panel.elements().info.html(), "<p>Product details 42</p>");
    assert_eq!(panel.visibility(), PanelVisibility::Visible);
}

#[test]
fn test_initialize_reveals_once() {
    tracing_init();
    let (mut panel, log) = mock_panel(PanelConfig::default());
    assert_eq!(reveal_count(&log.borrow()), 0);

    panel.initialize();

    let events = log.borrow();
    assert_eq!(
        *events,
        [
            PageEvent::SetHtml {
                id: "productInfo".into(),
                html: "<p>Product details 1</p>".into(),
            },
            PageEvent::RemoveClass {
                id: "productDetails".into(),
                class: "d-none".into(),
            },
        ]
    );
}

#[test]
fn test_repeated_load_matches_single_load() {
    let (mut once, _) = mock_panel(PanelConfig::default());
    once.load_product_details(&ProductId::from("PUMA123"));

    let (mut many, _) = mock_panel(PanelConfig::default());
    for _ in 0..4 {
        many.load_product_details(&ProductId::from("PUMA123"));
    }

    assert_eq!(once.elements().info.html(), many.elements().info.html());
    assert_eq!(
        once.elements().details.has_class("d-none"),
        many.elements().details.has_class("d-none")
    );
    assert_eq!(once.visibility(), many.visibility());
}

#[test]
fn test_distinct_ids_overwrite() {
    let (mut panel, _) = mock_panel(PanelConfig::default());
    for id in [1i64, 2, 3] {
        panel.load_product_details(&ProductId::from(id));
    }
    assert_eq!(panel.elements().info.html(), "<p>Product details 3</p>");
}

#[test]
fn test_each_action_alerts_exactly_once() {
    for action in ProductAction::ALL {
        let (panel, log) = mock_panel(PanelConfig::default());
        panel.handle_action(action);
        assert_eq!(*log.borrow(), [PageEvent::Alert(action.message().into())]);
    }
}

#[test]
fn test_configured_initial_product_and_ids() {
    let config = PanelConfig::from_json(
        r#"{
            "details_container_id": "detailsCard",
            "info_container_id": "detailsBody",
            "initial_product_id": "SKU123"
        }"#,
    )
    .unwrap();
    let (mut panel, log) = mock_panel(config);
    panel.initialize();

    assert_eq!(panel.elements().info.html(), "<p>Product details SKU123</p>");
    assert_eq!(panel.current_product(), Some(&ProductId::Text("SKU123".into())));
    let revealed = log.borrow().iter().any(|e| {
        matches!(e, PageEvent::RemoveClass { id, class } if id == "detailsCard" && class == "d-none")
    });
    assert!(revealed);
}
