use salesphere_common::{Notifier, PanelConfig, PanelElement, PanelElements, ProductPanelController};
use std::cell::RefCell;
use std::rc::Rc;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Something observable the controller did to the page or the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    SetHtml { id: String, html: String },
    RemoveClass { id: String, class: String },
    Alert(String),
}

pub type EventLog = Rc<RefCell<Vec<PageEvent>>>;

/// In-memory element that mirrors the bits of DOM state the panel cares about
pub struct MockElement {
    id: String,
    html: RefCell<String>,
    classes: RefCell<Vec<String>>,
    log: EventLog,
}

impl MockElement {
    pub fn new(id: &str, classes: &[&str], log: &EventLog) -> Self {
        Self {
            id: id.to_string(),
            html: RefCell::new(String::new()),
            classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
            log: log.clone(),
        }
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

impl PanelElement for MockElement {
    fn set_inner_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
        self.log.borrow_mut().push(PageEvent::SetHtml {
            id: self.id.clone(),
            html: html.to_string(),
        });
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
        self.log.borrow_mut().push(PageEvent::RemoveClass {
            id: self.id.clone(),
            class: class.to_string(),
        });
    }
}

pub struct MockNotifier {
    log: EventLog,
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str) {
        self.log.borrow_mut().push(PageEvent::Alert(message.to_string()));
    }
}

pub type MockController = ProductPanelController<MockElement, MockNotifier>;

/// Controller wired to mocks shaped like the stock product page
pub fn mock_panel(config: PanelConfig) -> (MockController, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let elements = PanelElements {
        details: MockElement::new(
            &config.details_container_id,
            &["card", config.hidden_class.as_str()],
            &log,
        ),
        info: MockElement::new(&config.info_container_id, &[], &log),
    };
    let notifier = MockNotifier { log: log.clone() };
    (ProductPanelController::new(elements, notifier, config), log)
}
