//! Registration form state, derived validation and submission record

use super::field::FormField;
use super::multi_select::MultiSelect;
use super::schema::{
    validate_email, validate_name, validate_national_id, validate_phone, FieldError,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// What currently has keyboard focus, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Email,
    Phone,
    NationalId,
    Countries,
    Cities,
    Submit,
}

impl FormFocus {
    pub const ORDER: [FormFocus; 7] = [
        FormFocus::Name,
        FormFocus::Email,
        FormFocus::Phone,
        FormFocus::NationalId,
        FormFocus::Countries,
        FormFocus::Cities,
        FormFocus::Submit,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ORDER[index.min(Self::ORDER.len() - 1)]
    }
}

/// Raw values as typed and picked by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub selected_countries: Vec<String>,
    pub selected_cities: Vec<String>,
}

/// Per-field schema failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub national_id: Option<FieldError>,
}

impl ValidationErrors {
    pub fn for_focus(&self, focus: FormFocus) -> Option<&FieldError> {
        match focus {
            FormFocus::Name => self.name.as_ref(),
            FormFocus::Email => self.email.as_ref(),
            FormFocus::Phone => self.phone.as_ref(),
            FormFocus::NationalId => self.national_id.as_ref(),
            FormFocus::Countries | FormFocus::Cities | FormFocus::Submit => None,
        }
    }
}

/// A validated submission, written to the diagnostic log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: u64,
    pub national_id: u64,
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl FormInputs {
    /// Gate for the submit button; separate from the schema
    pub fn is_submit_disabled(&self) -> bool {
        self.name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
            || self.national_id.is_empty()
            || self.selected_countries.is_empty()
            || self.selected_cities.is_empty()
    }

    pub fn errors(&self) -> ValidationErrors {
        ValidationErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            phone: validate_phone(&self.phone).err(),
            national_id: validate_national_id(&self.national_id).err(),
        }
    }

    /// Run the schema and merge the selections into a typed record
    pub fn validate(&self) -> Result<Submission, ValidationErrors> {
        match (
            validate_name(&self.name),
            validate_email(&self.email),
            validate_phone(&self.phone),
            validate_national_id(&self.national_id),
        ) {
            (Ok(name), Ok(email), Ok(phone), Ok(national_id)) => Ok(Submission {
                name,
                email,
                phone,
                national_id,
                countries: self.selected_countries.clone(),
                cities: self.selected_cities.clone(),
                submitted_at: Utc::now(),
            }),
            _ => Err(self.errors()),
        }
    }
}

/// The registration form
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub national_id: FormField,
    pub countries: MultiSelect,
    pub cities: MultiSelect,
    pub active_field_index: usize,
    /// Schema errors stay hidden until the first submit attempt
    pub submit_attempted: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new("Nome"),
            email: FormField::new("Email"),
            phone: FormField::new("Telefone"),
            national_id: FormField::new("CPF"),
            countries: MultiSelect::new("Países", "Escolha o(s) País(es)"),
            cities: MultiSelect::new("Cidades", "Escolha a(s) Cidade(s)"),
            active_field_index: 0,
            submit_attempted: false,
        }
    }

    pub fn focus(&self) -> FormFocus {
        FormFocus::from_index(self.active_field_index)
    }

    pub fn inputs(&self) -> FormInputs {
        FormInputs {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            national_id: self.national_id.as_text().to_string(),
            selected_countries: self.countries.selected.clone(),
            selected_cities: self.cities.selected.clone(),
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.inputs().is_submit_disabled()
    }

    /// True once anything has been typed or picked
    pub fn has_input(&self) -> bool {
        self.inputs() != FormInputs::default()
    }

    /// Errors to render inline; empty before the first submit attempt
    pub fn visible_errors(&self) -> ValidationErrors {
        if self.submit_attempted {
            self.inputs().errors()
        } else {
            ValidationErrors::default()
        }
    }

    pub fn selection_mut(&mut self, focus: FormFocus) -> Option<&mut MultiSelect> {
        match focus {
            FormFocus::Countries => Some(&mut self.countries),
            FormFocus::Cities => Some(&mut self.cities),
            _ => None,
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FormFocus::ORDER.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FormFocus::ORDER.len() - 1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Phone => Some(&mut self.phone),
            FormFocus::NationalId => Some(&mut self.national_id),
            FormFocus::Countries | FormFocus::Cities | FormFocus::Submit => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.national_id),
            // Pickers and the submit button have no text field
            _ => None,
        }
    }
}
