use super::*;

fn template(id: &str, name: &str, color: &str) -> Template {
    Template { id: id.into(), name: name.into(), description: "desc".into(), color: color.into() }
}

fn details() -> CustomerDetails {
    CustomerDetails {
        student_id: "S-2024-17".into(),
        name: "Margaret Hamilton".into(),
        institute: "Draper Lab".into(),
        phone: "555-0111".into(),
        email: "mh@example.edu".into(),
        room: "Apollo 11".into(),
    }
}

#[test]
fn template_cards_match_catalog_length_and_mark_selection() {
    let templates = vec![template("a", "A", "#111111"), template("b", "B", "#222222"), template("c", "C", "#333333")];
    let cards = template_cards(&templates, Some(&templates[1]));
    assert_eq!(cards.len(), templates.len());
    assert_eq!(cards.iter().filter(|c| c.selected).count(), 1);
    assert!(cards[1].selected);
    assert!(template_cards(&templates, None).iter().all(|c| !c.selected));
    assert!(template_cards(&[], None).is_empty());
}

#[test]
fn preview_without_selection_is_none() {
    assert!(preview(None, &details()).is_none());
}

#[test]
fn preview_shows_every_value_on_template_color() {
    let b = template("b", "Modern Red", "#FF4500");
    let card = preview(Some(&b), &details()).unwrap();
    assert_eq!(card.background, "#FF4500");
    let html = card.to_html();
    assert!(html.contains("style=\"background:#FF4500\""));
    let text = card.to_string();
    for field in Field::ALL {
        let value = details().get(field).to_owned();
        assert!(html.contains(&value), "html missing {value}");
        assert!(text.contains(&value), "text missing {value}");
    }
}

#[test]
fn preview_is_idempotent() {
    let b = template("b", "B", "#222222");
    assert_eq!(preview(Some(&b), &details()), preview(Some(&b), &details()));
}

#[test]
fn preview_html_escapes_values() {
    let mut d = details();
    d.name = "<script>alert('x')</script>".into();
    let html = preview(Some(&template("a", "A&B", "#111111")), &d).unwrap().to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A&amp;B"));
}

#[test]
fn cart_lines_fall_back_to_template_id() {
    let templates = vec![template("a", "Alpha", "#111111")];
    let cart = vec![
        CartItem {
            item_id: 1,
            template_id: "a".into(),
            student_id: "S".into(),
            name: "N".into(),
            institute: "I".into(),
            phone: "P".into(),
            email: "E".into(),
            room: "R".into(),
        },
        CartItem {
            item_id: 2,
            template_id: "retired".into(),
            student_id: "S".into(),
            name: "N".into(),
            institute: "I".into(),
            phone: "P".into(),
            email: "E".into(),
            room: "R".into(),
        },
    ];
    let lines = cart_lines(&cart, &templates);
    assert_eq!(lines[0].template_name, "Alpha");
    assert_eq!(lines[1].template_name, "retired");
    assert_eq!(lines[0].to_string(), "#1 Alpha for N (S)");
}

#[test]
fn checkout_summary_lists_customer_and_items() {
    let summary = checkout_summary(&[], &details(), &[]);
    assert_eq!(summary.customer.len(), 6);
    assert_eq!(summary.customer[0], ("Student ID", "S-2024-17".to_owned()));
    assert!(summary.to_string().contains("Items (0)"));
}
