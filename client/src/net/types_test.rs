use super::*;

#[test]
fn catalog_envelope_parses_templates() {
    let raw = r##"{"templates":[{"id":"classic-blue","name":"Classic Blue","description":"d","color":"#1E90FF"}]}"##;
    let env: CatalogEnvelope = serde_json::from_str(raw).unwrap();
    assert_eq!(env.templates.len(), 1);
    assert_eq!(env.templates[0].color, "#1E90FF");
}

#[test]
fn catalog_envelope_without_templates_is_an_error() {
    assert!(serde_json::from_str::<CatalogEnvelope>(r#"{"items":[]}"#).is_err());
}

#[test]
fn added_envelope_ignores_status_field() {
    let raw = r#"{"status":"added","item":{"item_id":4,"template_id":"t","student_id":"s","name":"n","institute":"i","phone":"p","email":"e","room":"r"}}"#;
    let env: AddedEnvelope = serde_json::from_str(raw).unwrap();
    assert_eq!(env.item.item_id, 4);
}

#[test]
fn checkout_customer_serializes_id_key() {
    let customer = CheckoutCustomer {
        id: "S-1".into(),
        name: "n".into(),
        institute: "i".into(),
        phone: "p".into(),
        email: "e".into(),
        room: "r".into(),
    };
    let value = serde_json::to_value(OrderPayload { customer, items: vec![] }).unwrap();
    assert_eq!(value["customer"]["id"], "S-1");
    assert!(value["items"].as_array().unwrap().is_empty());
}

#[test]
fn checkout_receipt_tolerates_missing_order_id() {
    let receipt: CheckoutReceipt = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert_eq!(receipt.order_id, None);
    let receipt: CheckoutReceipt = serde_json::from_str(r#"{"status":"success","order_id":3}"#).unwrap();
    assert_eq!(receipt.order_id, Some(3));
}
