//! Text rendering of the owner details view.
//!
//! The controller hands over the owner as an opaque JSON value; the view reads
//! the attributes it knows about and shows `-` for anything absent. An unset
//! owner renders as the loading state.

use owner_details_core::owner::Owner;
use serde_json::Value;

pub const LOADING: &str = "Loading owner...\n";

pub fn render(owner: Option<&Owner>) -> String {
    let owner = match owner {
        Some(o) => o,
        None => return LOADING.to_string(),
    };

    let name = [text(owner.field("firstName")), text(owner.field("lastName"))]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("Owner Information\n");
    out.push_str(&row("Name", non_empty(name)));
    out.push_str(&row("Address", text(owner.field("address"))));
    out.push_str(&row("City", text(owner.field("city"))));
    out.push_str(&row("Telephone", text(owner.field("telephone"))));

    if let Some(Value::Array(pets)) = owner.field("pets") {
        out.push_str("\nPets and Visits\n");
        for pet in pets {
            let kind = pet.get("type").and_then(|t| text(t.get("name")));
            out.push_str(&format!(
                "  {:<12} {:<12} {}\n",
                text(pet.get("name")).unwrap_or_else(|| "-".to_string()),
                text(pet.get("birthDate")).unwrap_or_else(|| "-".to_string()),
                kind.unwrap_or_else(|| "-".to_string()),
            ));
            if let Some(Value::Array(visits)) = pet.get("visits") {
                for visit in visits {
                    out.push_str(&format!(
                        "    {:<12} {}\n",
                        text(visit.get("date")).unwrap_or_else(|| "-".to_string()),
                        text(visit.get("description")).unwrap_or_else(|| "-".to_string()),
                    ));
                }
            }
        }
    }
    out
}

fn row(label: &str, value: Option<String>) -> String {
    format!(
        "  {:<10} {}\n",
        label,
        value.unwrap_or_else(|| "-".to_string())
    )
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Strings as-is, numbers and bools via Display, everything else absent.
fn text(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
