// Job records as exchanged with the listings backend

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Employment categories offered by the job form. The backend accepts any text.
pub const JOB_TYPES: &[&str] = &["Full-Time", "Part-Time", "Remote", "Internship"];

/// Salary bands offered by the job form. Salary is a display string, not a number.
pub const SALARY_RANGES: &[&str] = &[
    "Under $50K",
    "$50K - 60K",
    "$60K - 70K",
    "$70K - 80K",
    "$80K - 90K",
    "$90K - 100K",
    "$100K - 125K",
    "$125K - 150K",
    "$150K - 175K",
    "$175K - 200K",
    "Over $200K",
];

/// A persisted job posting. `id` is assigned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
}

/// A job posting as submitted for creation. Never carries an `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewJob {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Job type is required"))]
    pub job_type: String,
    pub description: String,
    #[validate(length(min = 1, message = "Salary is required"))]
    pub salary: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(nested)]
    pub company: Company,
}

/// Partial update body. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    // PATCH merges top-level keys only, so the company is always sent whole
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl Job {
    /// The writable fields of this record, e.g. to prefill the edit form
    pub fn to_new_job(&self) -> NewJob {
        NewJob {
            title: self.title.clone(),
            job_type: self.job_type.clone(),
            description: self.description.clone(),
            salary: self.salary.clone(),
            location: self.location.clone(),
            company: self.company.clone(),
        }
    }
}

impl JobPatch {
    /// Only the fields of `edited` that differ from `original`
    pub fn changes(original: &Job, edited: &NewJob) -> Self {
        fn changed(before: &str, after: &str) -> Option<String> {
            (before != after).then(|| after.to_string())
        }

        Self {
            title: changed(&original.title, &edited.title),
            job_type: changed(&original.job_type, &edited.job_type),
            description: changed(&original.description, &edited.description),
            salary: changed(&original.salary, &edited.salary),
            location: changed(&original.location, &edited.location),
            company: (original.company != edited.company).then(|| edited.company.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<NewJob> for JobPatch {
    fn from(job: NewJob) -> Self {
        Self {
            title: Some(job.title),
            job_type: Some(job.job_type),
            description: Some(job.description),
            salary: Some(job.salary),
            location: Some(job.location),
            company: Some(job.company),
        }
    }
}

/// Backends disagree on whether ids are strings or integers; keep them opaque.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn sample_new_job() -> NewJob {
        NewJob {
            title: "Senior Rust Developer".to_string(),
            job_type: "Full-Time".to_string(),
            description: "Build and maintain backend services.".to_string(),
            salary: "$100K - 125K".to_string(),
            location: "Boston, MA".to_string(),
            company: Company {
                name: "NewTek Solutions".to_string(),
                description: "A technology company.".to_string(),
                contact_email: "contact@teksolutions.com".to_string(),
                contact_phone: "555-555-5555".to_string(),
            },
        }
    }

    #[test]
    fn test_job_decodes_backend_shape() {
        let job: Job = serde_json::from_value(json!({
            "id": "1",
            "title": "Senior React Developer",
            "type": "Full-Time",
            "description": "We are seeking a talented developer.",
            "location": "Boston, MA",
            "salary": "$70K - $80K",
            "company": {
                "name": "NewTek Solutions",
                "description": "NewTek is a leading technology company.",
                "contactEmail": "contact@teksolutions.com",
                "contactPhone": "555-555-5555"
            }
        }))
        .unwrap();

        assert_eq!(job.id, "1");
        assert_eq!(job.job_type, "Full-Time");
        assert_eq!(job.company.contact_email, "contact@teksolutions.com");
    }

    #[test]
    fn test_numeric_id_is_kept_as_text() {
        let job: Job = serde_json::from_value(json!({ "id": 42, "title": "Intern" })).unwrap();
        assert_eq!(job.id, "42");
        assert_eq!(job.company, Company::default());
    }

    #[test]
    fn test_new_job_never_serializes_an_id() {
        let value = serde_json::to_value(sample_new_job()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["type"], "Full-Time");
        assert_eq!(value["company"]["contactPhone"], "555-555-5555");
    }

    #[test]
    fn test_validation_rejects_missing_title_and_bad_email() {
        let mut job = sample_new_job();
        assert!(job.validate().is_ok());

        job.title.clear();
        job.company.contact_email = "not-an-email".to_string();
        let errors = job.validate().unwrap_err().to_string();
        assert!(errors.contains("title"));
        assert!(errors.contains("contact_email"));
    }

    #[test]
    fn test_patch_changes_only_carries_edited_fields() {
        let new_job = sample_new_job();
        let original = Job {
            id: "7".to_string(),
            title: new_job.title.clone(),
            job_type: new_job.job_type.clone(),
            description: new_job.description.clone(),
            salary: new_job.salary.clone(),
            location: new_job.location.clone(),
            company: new_job.company.clone(),
        };

        assert!(JobPatch::changes(&original, &original.to_new_job()).is_empty());

        let mut edited = original.to_new_job();
        edited.salary = "Over $200K".to_string();
        edited.company.contact_phone = "555-000-0000".to_string();

        let patch = JobPatch::changes(&original, &edited);
        assert_eq!(patch.salary.as_deref(), Some("Over $200K"));
        assert_eq!(patch.title, None);

        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 2);
        assert_eq!(body["company"]["name"], "NewTek Solutions");
    }
}
