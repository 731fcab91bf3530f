//! Pure renderers for the wizard views.
//!
//! Each function maps state to a small view model with no I/O. View models
//! implement `Display` for the terminal front end; the preview card can also
//! emit a markup fragment.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt;

use crate::net::types::{CartItem, Template};
use crate::state::{CustomerDetails, Field};

/// One selectable entry of the template list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub selected: bool,
}

pub fn template_cards(templates: &[Template], selected: Option<&Template>) -> Vec<TemplateCard> {
    templates
        .iter()
        .map(|t| TemplateCard {
            id: t.id.clone(),
            name: t.name.clone(),
            description: t.description.clone(),
            color: t.color.clone(),
            selected: selected.is_some_and(|s| s.id == t.id),
        })
        .collect()
}

impl fmt::Display for TemplateCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { '*' } else { ' ' };
        write!(f, "[{marker}] {} ({}) {}: {}", self.id, self.color, self.name, self.description)
    }
}

/// Mock of the printed card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewCard {
    pub template_name: String,
    pub background: String,
    pub fields: Vec<(&'static str, String)>,
}

/// `None` when no template is selected.
pub fn preview(selected: Option<&Template>, details: &CustomerDetails) -> Option<PreviewCard> {
    let template = selected?;
    Some(PreviewCard {
        template_name: template.name.clone(),
        background: template.color.clone(),
        fields: Field::ALL
            .into_iter()
            .map(|f| (f.label(), details.get(f).to_owned()))
            .collect(),
    })
}

impl PreviewCard {
    /// Markup fragment with the template color as background. Values are escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div class=\"card-preview\" style=\"background:{}\">\n  <h3>{}</h3>\n",
            escape_html(&self.background),
            escape_html(&self.template_name)
        );
        for (label, value) in &self.fields {
            html.push_str(&format!(
                "  <p><strong>{}:</strong> {}</p>\n",
                escape_html(label),
                escape_html(value)
            ));
        }
        html.push_str("</div>");
        html
    }
}

impl fmt::Display for PreviewCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌ {} [{}]", self.template_name, self.background)?;
        for (label, value) in &self.fields {
            writeln!(f, "│ {label}: {value}")?;
        }
        write!(f, "└")
    }
}

/// One row of the cart view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: u64,
    pub template_name: String,
    pub student_id: String,
    pub name: String,
}

/// Template names fall back to the raw id when the catalog lacks them.
pub fn cart_lines(cart: &[CartItem], templates: &[Template]) -> Vec<CartLine> {
    cart.iter()
        .map(|item| CartLine {
            item_id: item.item_id,
            template_name: templates
                .iter()
                .find(|t| t.id == item.template_id)
                .map_or_else(|| item.template_id.clone(), |t| t.name.clone()),
            student_id: item.student_id.clone(),
            name: item.name.clone(),
        })
        .collect()
}

impl fmt::Display for CartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} for {} ({})", self.item_id, self.template_name, self.name, self.student_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub customer: Vec<(&'static str, String)>,
    pub lines: Vec<CartLine>,
}

pub fn checkout_summary(cart: &[CartItem], details: &CustomerDetails, templates: &[Template]) -> CheckoutSummary {
    CheckoutSummary {
        customer: Field::ALL
            .into_iter()
            .map(|f| (f.label(), details.get(f).to_owned()))
            .collect(),
        lines: cart_lines(cart, templates),
    }
}

impl fmt::Display for CheckoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer")?;
        for (label, value) in &self.customer {
            writeln!(f, "  {label}: {value}")?;
        }
        writeln!(f, "Items ({})", self.lines.len())?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
