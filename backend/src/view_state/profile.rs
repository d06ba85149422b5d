//! Reducer for the employee profile page and its edit form.

use validator::Validate;

use super::table::LoadState;
use crate::{
    models::{Employee, UpdateEmployee},
    validation::{self, rules::validate_email_domain},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Position,
    Department,
    Email,
    Phone,
    HireDate,
    Status,
}

#[derive(Debug, Clone)]
pub struct ProfileState {
    pub employee: Option<Employee>,
    pub load: LoadState,
    /// Present while the edit form is open.
    pub draft: Option<UpdateEmployee>,
    pub saving: bool,
    pub errors: Vec<String>,
    pub notice: Option<String>,
    pub needs_reload: bool,
}

#[derive(Debug, Clone)]
pub enum ProfileAction {
    Loaded(Employee),
    LoadFailed(String),
    StartEdit,
    Edit(ProfileField, String),
    CancelEdit,
    SaveRequested { allowed_domain: String },
    SaveSucceeded,
    SaveFailed(String),
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            employee: None,
            load: LoadState::Loading,
            draft: None,
            saving: false,
            errors: Vec::new(),
            notice: None,
            needs_reload: false,
        }
    }
}

impl ProfileState {
    /// Body to send once a save has been accepted by the reducer.
    pub fn pending_save(&self) -> Option<(&str, &UpdateEmployee)> {
        if !self.saving {
            return None;
        }
        let employee = self.employee.as_ref()?;
        Some((employee.id.as_str(), self.draft.as_ref()?))
    }
}

fn draft_from(employee: &Employee) -> UpdateEmployee {
    UpdateEmployee {
        id: Some(employee.id.clone()),
        name: employee.name.clone(),
        position: employee.position.clone(),
        department: employee.department.clone(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        hire_date: employee.hire_date.clone(),
        status: employee.status_label().to_string(),
    }
}

/// Checks a draft the way the save endpoint will, plus the e-mail domain rule.
pub fn validate_draft(draft: &UpdateEmployee, allowed_domain: &str) -> Vec<String> {
    let mut errors = match draft.validate() {
        Ok(()) => Vec::new(),
        Err(errs) => validation::messages(&errs),
    };
    if let Err(err) = validate_email_domain(&draft.email, allowed_domain) {
        let message = err
            .message
            .map(|m| m.to_string())
            .unwrap_or_else(|| err.code.to_string());
        errors.push(format!("email: {}", message));
    }
    errors
}

pub fn reduce(mut state: ProfileState, action: ProfileAction) -> ProfileState {
    match action {
        ProfileAction::Loaded(employee) => {
            state.employee = Some(employee);
            state.load = LoadState::Ready;
            state.needs_reload = false;
        }
        ProfileAction::LoadFailed(message) => {
            state.load = LoadState::Failed(message);
            state.needs_reload = false;
        }
        ProfileAction::StartEdit => {
            if state.draft.is_none() {
                if let Some(employee) = state.employee.as_ref() {
                    state.draft = Some(draft_from(employee));
                    state.errors.clear();
                    state.notice = None;
                }
            }
        }
        ProfileAction::Edit(field, value) => {
            if state.saving {
                return state;
            }
            if let Some(draft) = state.draft.as_mut() {
                let slot = match field {
                    ProfileField::Name => &mut draft.name,
                    ProfileField::Position => &mut draft.position,
                    ProfileField::Department => &mut draft.department,
                    ProfileField::Email => &mut draft.email,
                    ProfileField::Phone => &mut draft.phone,
                    ProfileField::HireDate => &mut draft.hire_date,
                    ProfileField::Status => &mut draft.status,
                };
                *slot = value;
            }
        }
        ProfileAction::CancelEdit => {
            if !state.saving {
                state.draft = None;
                state.errors.clear();
            }
        }
        ProfileAction::SaveRequested { allowed_domain } => {
            if state.saving {
                return state;
            }
            if let Some(draft) = state.draft.as_ref() {
                state.errors = validate_draft(draft, &allowed_domain);
                state.saving = state.errors.is_empty();
            }
        }
        ProfileAction::SaveSucceeded => {
            state.saving = false;
            state.draft = None;
            state.errors.clear();
            state.notice = Some("Profile saved".to_string());
            state.needs_reload = true;
        }
        ProfileAction::SaveFailed(message) => {
            state.saving = false;
            state.errors = vec![message];
        }
    }
    state
}
