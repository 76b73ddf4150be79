//! Flattens a structured record into the form-friendly `ExtractedInfoView`.

use resume_models::{ExtractedInfoView, SkillsView};
use serde_json::{Map, Value};

use crate::models::extraction::RawExtraction;

pub fn build_view(record: &RawExtraction) -> ExtractedInfoView {
    let (first_name, last_name) = split_full_name(str_field(record.get("full_name")));
    let contact = record.get("contact_info").and_then(Value::as_object);

    let phones = truthy(contact.and_then(|c| c.get("phone"))).or_else(|| truthy(record.get("phone")));
    let email = truthy(contact.and_then(|c| c.get("email"))).or_else(|| truthy(record.get("email")));

    let skills = record.get("skills").and_then(Value::as_object);

    ExtractedInfoView {
        first_name,
        last_name,
        current_designation: str_field(record.get("current_designation")).to_string(),
        mobile_number: first_phone(phones),
        email: scalar_to_string(email),
        address: format_address(record.get("address")),
        linkedin_url: str_field(contact.and_then(|c| c.get("linkedin_url"))).to_string(),
        skills: SkillsView {
            primary: dedup_skills(skills.and_then(|s| s.get("primary_skills"))),
            secondary: dedup_skills(skills.and_then(|s| s.get("secondary_skills"))),
        },
        total_experience: total_experience(record.get("total_experience")),
        education: match record.get("education") {
            Some(Value::Array(items)) => items.clone(),
            Some(item @ Value::Object(_)) => vec![item.clone()],
            _ => Vec::new(),
        },
    }
}

/// First token is the first name; the rest, re-joined with spaces, is the last name.
/// Single-token and compound names are not corrected.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

fn str_field(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or_default()
}

fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    })
}

fn scalar_to_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn first_phone(phones: Option<&Value>) -> String {
    match phones {
        Some(Value::Array(items)) => scalar_to_string(items.first()),
        other => scalar_to_string(other),
    }
}

fn format_address(address: Option<&Value>) -> String {
    match address {
        Some(Value::Object(parts)) => join_address_parts(parts),
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn join_address_parts(parts: &Map<String, Value>) -> String {
    ["city", "state", "country"]
        .iter()
        .map(|key| str_field(parts.get(*key)))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Unique string entries, first occurrence wins.
fn dedup_skills(skills: Option<&Value>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for skill in skills
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
    {
        if !out.iter().any(|s| s == skill) {
            out.push(skill.to_string());
        }
    }
    out
}

/// `years` when the model returned a mapping, otherwise the raw value.
fn total_experience(value: Option<&Value>) -> String {
    match value {
        Some(Value::Object(map)) => scalar_to_string(map.get("years")),
        other => scalar_to_string(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: Value) -> ExtractedInfoView {
        match value {
            Value::Object(map) => build_view(&RawExtraction::from_model_output(map)),
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_split_two_part_name() {
        assert_eq!(
            split_full_name("Jane Doe"),
            ("Jane".to_string(), "Doe".to_string())
        );
    }

    #[test]
    fn test_split_compound_name_keeps_tail_together() {
        assert_eq!(
            split_full_name("Mary Jane  Watson"),
            ("Mary".to_string(), "Jane Watson".to_string())
        );
    }

    #[test]
    fn test_split_single_and_empty_names() {
        assert_eq!(split_full_name("Cher"), ("Cher".to_string(), String::new()));
        assert_eq!(split_full_name("   "), (String::new(), String::new()));
    }

    #[test]
    fn test_full_view_projection() {
        let v = view(json!({
            "full_name": "Jane Doe",
            "current_designation": "Software Engineer",
            "contact_info": {
                "email": "jane@x.com",
                "phone": ["+1 555 0100", "+1 555 0199"],
                "linkedin_url": "https://linkedin.com/in/jane"
            },
            "address": {"city": "Austin", "state": "", "country": "USA"},
            "skills": {
                "primary_skills": ["Python", "Django", "Python"],
                "secondary_skills": ["SQL", 3, "Docker"]
            },
            "total_experience": {"years": "6"},
            "education": [{"institution": "MIT", "degree": "BSc"}]
        }));

        assert_eq!(v.first_name, "Jane");
        assert_eq!(v.last_name, "Doe");
        assert_eq!(v.mobile_number, "+1 555 0100");
        assert_eq!(v.email, "jane@x.com");
        assert_eq!(v.address, "Austin, USA");
        assert_eq!(v.linkedin_url, "https://linkedin.com/in/jane");
        assert_eq!(v.current_designation, "Software Engineer");
        assert_eq!(v.total_experience, "6");
        assert_eq!(v.skills.primary, vec!["Python", "Django"]);
        assert_eq!(v.skills.secondary, vec!["SQL", "Docker"]);
        assert_eq!(v.education, vec![json!({"institution": "MIT", "degree": "BSc"})]);
    }

    #[test]
    fn test_contact_falls_back_to_top_level_fields() {
        let v = view(json!({
            "contact_info": {"email": "", "phone": []},
            "email": "jane@x.com",
            "phone": "+1 555 0100"
        }));
        assert_eq!(v.email, "jane@x.com");
        assert_eq!(v.mobile_number, "+1 555 0100");
    }

    #[test]
    fn test_total_experience_raw_value_when_not_mapping() {
        assert_eq!(view(json!({"total_experience": "6 years"})).total_experience, "6 years");
        assert_eq!(view(json!({"total_experience": 4})).total_experience, "4");
        assert_eq!(view(json!({"total_experience": {"years": ""}})).total_experience, "");
    }

    #[test]
    fn test_address_shapes() {
        assert_eq!(view(json!({"address": "  Austin, TX "})).address, "Austin, TX");
        assert_eq!(view(json!({"address": {"city": "", "state": "TX"}})).address, "TX");
        assert_eq!(view(json!({"address": ["Austin"]})).address, "");
    }

    #[test]
    fn test_missing_everything_yields_blank_view() {
        let v = view(json!({}));
        assert_eq!(v, ExtractedInfoView::default());
    }
}
