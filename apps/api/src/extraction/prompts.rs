// Structuring prompt template. `{resume_text}` is replaced with the extracted document text.

pub const RESUME_PARSE_PROMPT: &str = r#"Extract the following information from the resume in **precise JSON format**:
- **Primary skills MUST be directly related to current designation**
- **Secondary skills are additional technical/professional skills**
- **Current designation should be the most recent job title**
- **Skills should be split into primary (role-specific) and secondary**

Required JSON Structure:
{
  "current_designation": "string",
  "skills": {
    "primary_skills": ["string (must relate to current designation)"],
    "secondary_skills": ["string (other skills)"]
  },
  "education": [{"institution": "string", "degree": "string"}],
  "total_experience": {"years": "string"},
  "full_name": "string",
  "contact_info": {
    "email": "string",
    "phone": ["string"],
    "linkedin_url": "string"
  },
  "address": {
    "city": "string",
    "state": "string",
    "country": "string"
  }
}

Resume Text:
{resume_text}
"#;
