//! Job Form
//!
//! Field state shared by the add and edit pages.

use crate::models::{Company, Job, NewJob, JOB_TYPES, SALARY_RANGES};
use crate::tui::theme::Theme;
use crate::types::AppResult;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::TextArea;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    JobType,
    Title,
    Description,
    Salary,
    Location,
    CompanyName,
    CompanyDescription,
    ContactEmail,
    ContactPhone,
}

const FIELD_ORDER: [FieldId; 9] = [
    FieldId::JobType,
    FieldId::Title,
    FieldId::Description,
    FieldId::Salary,
    FieldId::Location,
    FieldId::CompanyName,
    FieldId::CompanyDescription,
    FieldId::ContactEmail,
    FieldId::ContactPhone,
];

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::JobType => "Job Type",
            FieldId::Title => "Job Listing Name",
            FieldId::Description => "Description",
            FieldId::Salary => "Salary",
            FieldId::Location => "Location",
            FieldId::CompanyName => "Company Name",
            FieldId::CompanyDescription => "Company Description",
            FieldId::ContactEmail => "Contact Email",
            FieldId::ContactPhone => "Contact Phone",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FieldId::Title => "eg. Beautiful Apartment In Miami",
            FieldId::Description => "Add any job duties, expectations, requirements, etc",
            FieldId::Location => "Company Location",
            FieldId::CompanyName => "Company Name",
            FieldId::CompanyDescription => "What does your company do?",
            FieldId::ContactEmail => "Email address for applicants",
            FieldId::ContactPhone => "Optional phone for applicants",
            FieldId::JobType | FieldId::Salary => "",
        }
    }

    fn options(self) -> Option<&'static [&'static str]> {
        match self {
            FieldId::JobType => Some(JOB_TYPES),
            FieldId::Salary => Some(SALARY_RANGES),
            _ => None,
        }
    }
}

pub enum FieldInput {
    Text(TextArea<'static>),
    Select { options: Vec<String>, choice: usize },
}

pub struct FormField {
    pub id: FieldId,
    pub input: FieldInput,
    /// Value the field was filled with, returned as is until the user edits it
    original: String,
    initial_lines: Vec<String>,
    initial_choice: usize,
}

impl FormField {
    /// `prefilled` fields keep an empty select value empty; blank forms
    /// start on the first option instead.
    fn new(id: FieldId, value: &str, prefilled: bool) -> Self {
        let mut original = value.to_string();
        let mut initial_choice = 0;

        let input = match id.options() {
            Some(options) => {
                let mut options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
                // Keep values the backend already holds even when they are not a preset
                initial_choice = match options.iter().position(|o| o == value) {
                    Some(i) => i,
                    None if value.is_empty() && !prefilled => {
                        original = options[0].clone();
                        0
                    }
                    None => {
                        options.insert(0, value.to_string());
                        0
                    }
                };
                FieldInput::Select {
                    options,
                    choice: initial_choice,
                }
            }
            None => {
                let mut textarea = if value.is_empty() {
                    TextArea::default()
                } else {
                    TextArea::new(value.lines().map(str::to_string).collect())
                };
                textarea.set_placeholder_text(id.placeholder());
                textarea.set_cursor_line_style(Style::default());
                FieldInput::Text(textarea)
            }
        };

        let initial_lines = match &input {
            FieldInput::Text(textarea) => textarea.lines().to_vec(),
            FieldInput::Select { .. } => Vec::new(),
        };

        Self {
            id,
            input,
            original,
            initial_lines,
            initial_choice,
        }
    }

    /// Whether the user changed the field since it was filled
    pub fn is_edited(&self) -> bool {
        match &self.input {
            FieldInput::Text(textarea) => textarea.lines() != self.initial_lines.as_slice(),
            FieldInput::Select { choice, .. } => *choice != self.initial_choice,
        }
    }

    pub fn value(&self) -> String {
        if !self.is_edited() {
            return self.original.clone();
        }

        match &self.input {
            FieldInput::Text(textarea) => textarea.lines().join("\n").trim().to_string(),
            FieldInput::Select { options, choice } => options[*choice].clone(),
        }
    }

    fn set_focused(&mut self, focused: bool) {
        if let FieldInput::Text(textarea) = &mut self.input {
            textarea.set_cursor_style(if focused {
                Theme::cursor()
            } else {
                Style::default()
            });
        }
    }
}

pub struct JobForm {
    fields: Vec<FormField>,
    focus: usize,
}

impl Default for JobForm {
    fn default() -> Self {
        Self::new()
    }
}

impl JobForm {
    /// Empty form for a new listing
    pub fn new() -> Self {
        Self::with_values(&NewJob::default(), false)
    }

    /// Form prefilled from an existing record
    pub fn from_job(job: &Job) -> Self {
        Self::with_values(&job.to_new_job(), true)
    }

    fn with_values(job: &NewJob, prefilled: bool) -> Self {
        let fields = FIELD_ORDER
            .iter()
            .map(|&id| {
                let value = match id {
                    FieldId::JobType => &job.job_type,
                    FieldId::Title => &job.title,
                    FieldId::Description => &job.description,
                    FieldId::Salary => &job.salary,
                    FieldId::Location => &job.location,
                    FieldId::CompanyName => &job.company.name,
                    FieldId::CompanyDescription => &job.company.description,
                    FieldId::ContactEmail => &job.company.contact_email,
                    FieldId::ContactPhone => &job.company.contact_phone,
                };
                FormField::new(id, value, prefilled)
            })
            .collect();

        let mut form = Self { fields, focus: 0 };
        form.set_focus(0);
        form
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == index);
        }
    }

    pub fn next_field(&mut self) {
        self.set_focus((self.focus + 1) % self.fields.len());
    }

    pub fn prev_field(&mut self) {
        let len = self.fields.len();
        self.set_focus((self.focus + len - 1) % len);
    }

    /// Feed a key to the focused field. Selects cycle with ←/→.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };

        match &mut field.input {
            FieldInput::Text(textarea) => {
                textarea.input(key);
            }
            FieldInput::Select { options, choice } => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => *choice = (*choice + 1) % options.len(),
                KeyCode::Left => *choice = (*choice + options.len() - 1) % options.len(),
                _ => {}
            },
        }
    }

    /// No field was edited since the form was filled
    pub fn is_unchanged(&self) -> bool {
        self.fields.iter().all(|field| !field.is_edited())
    }

    pub fn value(&self, id: FieldId) -> String {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(FormField::value)
            .unwrap_or_default()
    }

    /// Collect and validate the form as a job submission
    pub fn to_new_job(&self) -> AppResult<NewJob> {
        let job = NewJob {
            title: self.value(FieldId::Title),
            job_type: self.value(FieldId::JobType),
            description: self.value(FieldId::Description),
            salary: self.value(FieldId::Salary),
            location: self.value(FieldId::Location),
            company: Company {
                name: self.value(FieldId::CompanyName),
                description: self.value(FieldId::CompanyDescription),
                contact_email: self.value(FieldId::ContactEmail),
                contact_phone: self.value(FieldId::ContactPhone),
            },
        };
        job.validate()?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::job;
    use crossterm::event::KeyModifiers;

    fn press(form: &mut JobForm, code: KeyCode) {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(form: &mut JobForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    fn focus_on(form: &mut JobForm, id: FieldId) {
        while form.fields()[form.focus()].id != id {
            form.next_field();
        }
    }

    #[test]
    fn test_new_form_defaults_to_first_options() {
        let form = JobForm::new();
        assert_eq!(form.value(FieldId::JobType), "Full-Time");
        assert_eq!(form.value(FieldId::Salary), "Under $50K");
        assert_eq!(form.value(FieldId::Title), "");
    }

    #[test]
    fn test_empty_form_fails_validation() {
        assert!(JobForm::new().to_new_job().unwrap_err().to_string().contains("title"));
    }

    #[test]
    fn test_filled_form_builds_new_job() {
        let mut form = JobForm::new();
        press(&mut form, KeyCode::Right);
        focus_on(&mut form, FieldId::Title);
        type_text(&mut form, "  Backend Engineer ");
        focus_on(&mut form, FieldId::Location);
        type_text(&mut form, "Lisbon");
        focus_on(&mut form, FieldId::CompanyName);
        type_text(&mut form, "Ferris Inc");
        focus_on(&mut form, FieldId::ContactEmail);
        type_text(&mut form, "hire@ferris.test");

        let job = form.to_new_job().unwrap();
        assert_eq!(job.job_type, "Part-Time");
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.location, "Lisbon");
        assert_eq!(job.company.contact_email, "hire@ferris.test");
    }

    #[test]
    fn test_prefilled_form_keeps_unknown_select_values() {
        let mut existing = job("5", "Designer");
        existing.salary = "$70K - $80K".to_string();

        let form = JobForm::from_job(&existing);
        assert_eq!(form.value(FieldId::Salary), "$70K - $80K");
        assert_eq!(form.to_new_job().unwrap(), existing.to_new_job());
    }

    #[test]
    fn test_untouched_fields_return_loaded_text_verbatim() {
        let mut existing = job("6", "Analyst");
        existing.job_type = String::new();
        existing.description = "Line one\r\nLine two\n".to_string();
        existing.location = " Boston ".to_string();

        let mut form = JobForm::from_job(&existing);
        assert!(form.is_unchanged());
        assert_eq!(form.value(FieldId::JobType), "");
        assert_eq!(form.value(FieldId::Description), "Line one\r\nLine two\n");
        assert_eq!(form.value(FieldId::Location), " Boston ");

        focus_on(&mut form, FieldId::Title);
        press(&mut form, KeyCode::End);
        type_text(&mut form, " II");
        assert!(!form.is_unchanged());
        assert_eq!(form.value(FieldId::Title), "Analyst II");
        assert_eq!(form.value(FieldId::Location), " Boston ");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = JobForm::new();
        form.prev_field();
        assert_eq!(form.fields()[form.focus()].id, FieldId::ContactPhone);
        form.next_field();
        assert_eq!(form.focus(), 0);
    }
}
