use super::*;

fn template(id: &str, color: &str) -> Template {
    Template { id: id.into(), name: id.to_uppercase(), description: format!("{id} card"), color: color.into() }
}

fn item(item_id: u64) -> CartItem {
    CartItem {
        item_id,
        template_id: "a".into(),
        student_id: "S".into(),
        name: "N".into(),
        institute: "I".into(),
        phone: "P".into(),
        email: "E".into(),
        room: "R".into(),
    }
}

fn valid_details() -> CustomerDetails {
    let mut d = CustomerDetails::default();
    for f in Field::ALL {
        d.set(f, "x");
    }
    d
}

#[test]
fn new_state_is_empty_on_select() {
    let state = AppState::new();
    assert!(state.templates.is_empty());
    assert!(state.selected_template.is_none());
    assert!(state.cart().is_empty());
    assert_eq!(state.navigator.active(), Section::Select);
    assert_eq!(state.controls(), Controls::default());
}

#[test]
fn select_template_requires_known_id() {
    let mut state = AppState::new();
    state.replace_templates(vec![template("a", "#000001"), template("b", "#000002")]);
    assert!(!state.select_template("z"));
    assert!(state.selected_template.is_none());
    assert!(state.select_template("b"));
    assert_eq!(state.selected_template.as_ref().unwrap().color, "#000002");
    assert!(state.controls().next_from_select);
}

#[test]
fn replace_templates_drops_selection_no_longer_offered() {
    let mut state = AppState::new();
    state.replace_templates(vec![template("a", "#000001")]);
    state.select_template("a");
    state.replace_templates(vec![template("a", "#0000FF")]);
    assert_eq!(state.selected_template.as_ref().unwrap().color, "#0000FF");
    state.replace_templates(vec![template("b", "#000002")]);
    assert!(state.selected_template.is_none());
}

#[test]
fn replace_cart_is_wholesale() {
    let mut state = AppState::new();
    state.replace_cart(vec![item(1), item(2)]);
    state.replace_cart(vec![item(3)]);
    assert_eq!(state.cart(), &[item(3)]);
    state.clear_cart();
    assert!(state.cart().is_empty());
}

#[test]
fn controls_track_preconditions() {
    let mut state = AppState::new();
    state.replace_templates(vec![template("a", "#000001")]);
    state.select_template("a");
    assert!(!state.controls().add_to_cart, "form not yet valid");

    state.details = valid_details();
    let c = state.controls();
    assert!(c.proceed_from_details);
    assert!(c.add_to_cart);
    assert!(!c.checkout, "cart is empty");

    state.replace_cart(vec![item(1)]);
    assert!(state.controls().checkout);
    assert!(state.controls().confirm);
}

#[test]
fn pending_write_disables_write_controls() {
    let mut state = AppState::new();
    state.replace_templates(vec![template("a", "#000001")]);
    state.select_template("a");
    state.details = valid_details();
    state.replace_cart(vec![item(1)]);

    state.begin(PendingAction::AddToCart);
    assert_eq!(state.pending(), Some(PendingAction::AddToCart));
    let c = state.controls();
    assert!(!c.add_to_cart);
    assert!(!c.confirm);
    assert!(c.checkout, "navigation stays available");

    state.finish();
    assert!(state.pending().is_none());
    assert!(state.controls().confirm);
}

#[test]
fn alerts_queue_and_drain() {
    let mut state = AppState::new();
    state.alert("first");
    state.alert(String::from("second"));
    assert_eq!(state.alerts().len(), 2);
    assert_eq!(state.take_alerts(), vec!["first".to_owned(), "second".to_owned()]);
    assert!(state.alerts().is_empty());
}
