//! Terminal form for reviewing and completing the candidate profile.

use std::io::{self, BufRead, Write};

use resume_models::CandidateProfile;

use crate::errors::IntakeError;
use crate::session::Decision;

type FieldSlot = fn(&mut CandidateProfile) -> &mut String;

/// Form fields in display order: label, required, slot.
const FIELDS: &[(&str, bool, FieldSlot)] = &[
    ("First Name", true, |p| &mut p.first_name),
    ("Last Name", true, |p| &mut p.last_name),
    ("Mobile Number", true, |p| &mut p.mobile),
    ("Address", false, |p| &mut p.address),
    ("LinkedIn URL", false, |p| &mut p.linkedin_url),
    ("Email", true, |p| &mut p.email),
    ("Education", true, |p| &mut p.education),
    ("Total Experience (years)", true, |p| &mut p.total_exp),
    ("Current Designation", true, |p| &mut p.designation),
    ("Primary Skills", true, |p| &mut p.primary_skills),
    ("Secondary Skills", false, |p| &mut p.secondary_skills),
];

/// Answer that blanks a pre-filled value.
pub const CLEAR: &str = "-";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for one value. An empty answer keeps `default`; [`CLEAR`] blanks it.
    pub fn ask(&mut self, label: &str, default: &str) -> io::Result<Option<String>> {
        if default.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{default}] ({CLEAR} to clear): ")?;
        }
        self.output.flush()?;

        Ok(self.read_line()?.map(|answer| match answer.as_str() {
            "" => default.to_string(),
            CLEAR => String::new(),
            _ => answer,
        }))
    }

    /// Asks until the answer is yes or no. `None` on end of input.
    pub fn ask_decision(&mut self) -> io::Result<Option<Decision>> {
        loop {
            write!(self.output, "Accept this extraction? [y/n]: ")?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(Decision::Accepted)),
                "n" | "no" => return Ok(Some(Decision::Rejected)),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }
}

/// One pass over every field. Returns `None` if input ends part-way.
pub fn fill_form<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    defaults: &CandidateProfile,
) -> io::Result<Option<CandidateProfile>> {
    let mut profile = defaults.clone();
    for (label, required, slot) in FIELDS {
        let label = if *required {
            format!("{label} *")
        } else {
            label.to_string()
        };
        let current = slot(&mut profile).clone();
        let Some(value) = console.ask(&label, &current)? else {
            return Ok(None);
        };
        *slot(&mut profile) = value;
    }
    Ok(Some(profile))
}

/// Repeats the form until every required field is filled.
/// Ending input with required fields still blank is `MissingFields`.
pub fn collect_profile<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    defaults: &CandidateProfile,
) -> Result<CandidateProfile, IntakeError> {
    let mut current = defaults.clone();
    loop {
        let Some(profile) = fill_form(console, &current)? else {
            let missing = current.missing_required();
            let missing = if missing.is_empty() {
                FIELDS
                    .iter()
                    .filter(|(_, required, _)| *required)
                    .map(|(label, _, _)| label.to_string())
                    .collect()
            } else {
                missing.into_iter().map(str::to_string).collect()
            };
            return Err(IntakeError::MissingFields(missing));
        };

        let missing = profile.missing_required();
        if missing.is_empty() {
            return Ok(profile);
        }

        console.say(&format!(
            "Please fill all required fields (marked with *). Missing: {}",
            missing.join(", ")
        ))?;
        current = profile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn complete_profile() -> CandidateProfile {
        CandidateProfile {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            mobile: "+1 555 0100".to_string(),
            address: String::new(),
            linkedin_url: String::new(),
            email: "jane@x.com".to_string(),
            education: "MIT: BSc".to_string(),
            total_exp: "6".to_string(),
            designation: "Software Engineer".to_string(),
            primary_skills: "Python".to_string(),
            secondary_skills: String::new(),
        }
    }

    #[test]
    fn test_enter_keeps_prefilled_values() {
        let mut c = console(&"\n".repeat(FIELDS.len()));
        let profile = collect_profile(&mut c, &complete_profile()).unwrap();
        assert_eq!(profile, complete_profile());

        let shown = String::from_utf8(c.output).unwrap();
        assert!(shown.contains("First Name * [Jane] (- to clear): "));
        assert!(shown.contains("Address: "));
    }

    #[test]
    fn test_typed_values_override_defaults() {
        let mut answers = vec!["Janet"];
        answers.extend(std::iter::repeat("").take(FIELDS.len() - 1));
        let mut c = console(&(answers.join("\n") + "\n"));

        let profile = collect_profile(&mut c, &complete_profile()).unwrap();
        assert_eq!(profile.first_name, "Janet");
        assert_eq!(profile.last_name, "Doe");
    }

    #[test]
    fn test_dash_clears_prefilled_optional_field() {
        let mut defaults = complete_profile();
        defaults.address = "Wrong City".to_string();

        // Address is the fourth field; whitespace alone still keeps a value.
        let mut answers = vec!["", "", " ", "-"];
        answers.extend(std::iter::repeat("").take(FIELDS.len() - 4));
        let mut c = console(&(answers.join("\n") + "\n"));

        let profile = collect_profile(&mut c, &defaults).unwrap();
        assert_eq!(profile.address, "");
        assert_eq!(profile.mobile, "+1 555 0100");
    }

    #[test]
    fn test_clearing_required_field_asks_again() {
        let mut answers = vec!["", "-"];
        answers.extend(std::iter::repeat("").take(FIELDS.len() - 2));
        answers.extend(["", "Doe"]);
        answers.extend(std::iter::repeat("").take(FIELDS.len() - 2));
        let mut c = console(&(answers.join("\n") + "\n"));

        let profile = collect_profile(&mut c, &complete_profile()).unwrap();
        assert_eq!(profile.last_name, "Doe");
        let shown = String::from_utf8(c.output).unwrap();
        assert!(shown.contains("Missing: Last Name"));
    }

    #[test]
    fn test_blank_required_field_asks_again() {
        let mut defaults = complete_profile();
        defaults.mobile.clear();

        // First pass leaves mobile blank, second pass fills it.
        let mut input = "\n".repeat(FIELDS.len());
        input.push_str("\n\n+1 555 0199\n");
        input.push_str(&"\n".repeat(FIELDS.len() - 3));
        let mut c = console(&input);

        let profile = collect_profile(&mut c, &defaults).unwrap();
        assert_eq!(profile.mobile, "+1 555 0199");

        let shown = String::from_utf8(c.output).unwrap();
        assert!(shown.contains("Missing: Mobile Number"));
    }

    #[test]
    fn test_eof_with_blank_form_reports_missing_fields() {
        let mut c = console("Jane\n");
        match collect_profile(&mut c, &CandidateProfile::default()) {
            Err(IntakeError::MissingFields(fields)) => {
                assert!(fields.contains(&"Email".to_string()));
                assert!(fields.contains(&"Primary Skills".to_string()));
                assert!(!fields.contains(&"Address".to_string()));
            }
            other => panic!("expected missing fields, got {other:?}"),
        }
    }

    #[test]
    fn test_decision_prompt_repeats_until_valid() {
        let mut c = console("maybe\nY\n");
        assert_eq!(c.ask_decision().unwrap(), Some(Decision::Accepted));

        let mut c = console("no\n");
        assert_eq!(c.ask_decision().unwrap(), Some(Decision::Rejected));

        let mut c = console("");
        assert_eq!(c.ask_decision().unwrap(), None);
    }
}
