use std::io::{self, Write};

use resume_models::{ExtractionResponse, FieldStatus};

/// Extraction summary shown before the accept/reject prompt.
pub fn render_extraction<W: Write>(out: &mut W, extraction: &ExtractionResponse) -> io::Result<()> {
    let metrics = &extraction.accuracy_metrics;
    let info = &extraction.info;

    writeln!(out, "Extraction ID: {}", extraction.extraction_id)?;
    writeln!(
        out,
        "Extraction rate: {:.2}% ({} of {} fields filled, {} empty)",
        metrics.extraction_rate, metrics.filled_fields, metrics.total_fields, metrics.empty_fields
    )?;
    writeln!(out)?;

    let width = metrics
        .field_status
        .keys()
        .map(String::len)
        .max()
        .unwrap_or_default();
    for (field, status) in &metrics.field_status {
        let mark = match status {
            FieldStatus::Filled => "filled",
            FieldStatus::Empty => "EMPTY",
        };
        writeln!(out, "  {field:<width$}  {mark}")?;
    }
    writeln!(out)?;

    let name = format!("{} {}", info.first_name, info.last_name);
    for (label, value) in [
        ("Name", name.trim()),
        ("Designation", info.current_designation.as_str()),
        ("Email", info.email.as_str()),
        ("Mobile", info.mobile_number.as_str()),
        ("Address", info.address.as_str()),
        ("LinkedIn", info.linkedin_url.as_str()),
        ("Experience", info.total_experience.as_str()),
    ] {
        if !value.is_empty() {
            writeln!(out, "{label}: {value}")?;
        }
    }
    if !info.skills.primary.is_empty() {
        writeln!(out, "Primary skills: {}", info.skills.primary.join(", "))?;
    }
    if !info.skills.secondary.is_empty() {
        writeln!(out, "Secondary skills: {}", info.skills.secondary.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_models::{AccuracyMetrics, ExtractedInfoView};
    use std::collections::BTreeMap;

    #[test]
    fn test_render_shows_rate_and_field_status() {
        let mut field_status = BTreeMap::new();
        field_status.insert("full_name".to_string(), FieldStatus::Filled);
        field_status.insert("education".to_string(), FieldStatus::Empty);

        let extraction = ExtractionResponse {
            info: ExtractedInfoView {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                ..Default::default()
            },
            extraction_id: "abc-123".to_string(),
            accuracy_metrics: AccuracyMetrics {
                filled_fields: 5,
                empty_fields: 5,
                total_fields: 10,
                extraction_rate: 50.0,
                field_status,
            },
        };

        let mut out = Vec::new();
        render_extraction(&mut out, &extraction).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Extraction rate: 50.00% (5 of 10 fields filled, 5 empty)"));
        assert!(text.contains("  education  EMPTY"));
        assert!(text.contains("  full_name  filled"));
        assert!(text.contains("Name: Jane Doe"));
        assert!(!text.contains("Email:"));
    }
}
