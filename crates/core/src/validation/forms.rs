//! Record-level validation for the portal forms.
//!
//! Each form runs the field validators in display order and collects
//! every rejection, so the page can flag all offending inputs at once.

use serde::{Deserialize, Serialize};

use super::catalog::{account_status_options, Service, StaffRole};
use super::engine::{valid_list_empty, ValidationEngine};
use crate::clock::Clock;
use crate::error::CoreError;
use crate::sampling::ExampleSource;
use crate::types::{SubjectKind, Verdict};

const STATUS_REQUIRED: &str = "Debe elegir un estado";

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// A single field-level rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Aggregated result of validating one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl FormReport {
    /// Message for `field`, if it was rejected.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    /// `Ok` when valid, otherwise a validation error with one message per line.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_valid {
            return Ok(());
        }
        let joined = self
            .errors
            .into_iter()
            .map(|v| v.message)
            .collect::<Vec<_>>()
            .join("\n");
        Err(CoreError::Validation(joined))
    }
}

struct Collector {
    form: &'static str,
    errors: Vec<FieldViolation>,
}

impl Collector {
    fn new(form: &'static str) -> Self {
        Self {
            form,
            errors: Vec::new(),
        }
    }

    /// Record `verdict` for `field`; returns whether it passed.
    fn check(&mut self, field: &str, verdict: Verdict) -> bool {
        match verdict {
            Verdict::Valid => true,
            Verdict::Invalid(message) => {
                tracing::debug!(form = self.form, field, %message, "Field rejected");
                self.errors.push(FieldViolation {
                    field: field.to_string(),
                    message,
                });
                false
            }
        }
    }

    fn finish(self) -> FormReport {
        FormReport {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
        }
    }
}

// ---------------------------------------------------------------------------
// Form records
// ---------------------------------------------------------------------------

/// The three user tabs of the management panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserCategory {
    /// Student holding a meal scholarship.
    Beneficiary,
    Student,
    /// Staff member or external person ("funcionario").
    Staff,
}

impl UserCategory {
    pub fn subject_kind(self) -> SubjectKind {
        match self {
            UserCategory::Beneficiary | UserCategory::Student => SubjectKind::Student,
            UserCategory::Staff => SubjectKind::Staff,
        }
    }
}

/// User creation / edit form of the management panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub category: UserCategory,
    pub name: String,
    pub last_name: String,
    /// Student code, or national ID for staff.
    pub code: String,
    /// Academic plan, or dependency area for staff.
    #[serde(default)]
    pub plan_or_area: Option<String>,
    pub email: String,
    /// Scholarship label; beneficiaries only.
    #[serde(default)]
    pub grant: Option<String>,
    /// Role value; staff only.
    #[serde(default)]
    pub role: Option<String>,
    /// Account status; only the edit form asks for it.
    #[serde(default)]
    pub active: Option<bool>,
}

/// Activity registration used by the nursing service. The attendee may
/// be a student or a staff member, so identity fields accept either form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NursingActivityRecord {
    pub full_name: String,
    pub code_or_nuip: String,
    pub plan_or_area: String,
    pub phone: String,
    pub semester: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// Appointment booking for psychology, nursing or dental care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// Service value from [`Service::options`].
    pub service: String,
    pub patient_name: String,
    pub phone: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl<C: Clock, R: ExampleSource> ValidationEngine<C, R> {
    /// Creation form of the management panel.
    pub fn validate_user(&self, record: &UserRecord) -> FormReport {
        let mut form = Collector::new("user");
        self.check_user_fields(record, &mut form);
        form.finish()
    }

    /// Edit form: the creation fields plus the account status selector.
    pub fn validate_user_edit(&self, record: &UserRecord) -> FormReport {
        let mut form = Collector::new("user_edit");
        self.check_user_fields(record, &mut form);

        let status = match record.active {
            Some(active) => {
                valid_list_empty(&account_status_options(), &active, STATUS_REQUIRED)
            }
            None => Verdict::Invalid(STATUS_REQUIRED.to_string()),
        };
        form.check("status", status);

        form.finish()
    }

    fn check_user_fields(&self, record: &UserRecord, form: &mut Collector) {
        let kind = record.category.subject_kind();

        form.check("name", self.valid_name(&record.name));
        form.check("lastName", self.valid_lastname(&record.last_name));

        let (code_field, plan_field) = match kind {
            SubjectKind::Student => ("code", "plan"),
            SubjectKind::Staff => ("nuip", "area"),
        };
        form.check(code_field, self.valid_code(&record.code, kind));

        // The area is optional for staff; the plan is mandatory.
        let plan_or_area = record.plan_or_area.as_deref().unwrap_or("");
        if kind == SubjectKind::Student || !plan_or_area.is_empty() {
            form.check(plan_field, self.valid_plan(plan_or_area, kind));
        }

        form.check("email", self.valid_email(&record.email, kind));

        match record.category {
            UserCategory::Beneficiary => {
                form.check(
                    "grant",
                    self.valid_grant(record.grant.as_deref().unwrap_or("")),
                );
            }
            UserCategory::Staff => {
                let role = record.role.as_deref().unwrap_or("");
                if form.check("role", self.valid_rol(role)) {
                    form.check(
                        "role",
                        valid_list_empty(&StaffRole::options(), &role, "Debe elegir un rol"),
                    );
                }
            }
            UserCategory::Student => {}
        }
    }

    pub fn validate_nursing_activity(&self, record: &NursingActivityRecord) -> FormReport {
        let mut form = Collector::new("nursing_activity");

        form.check("fullName", self.valid_full_name(&record.full_name));
        form.check("codeOrNuip", self.valid_code_or_nuip(&record.code_or_nuip));
        form.check("planOrArea", self.valid_plan_or_area(&record.plan_or_area));
        form.check("phone", self.valid_phone(&record.phone));
        form.check("semester", self.valid_semester(&record.semester));
        form.check("date", self.valid_date_str(&record.date));

        form.finish()
    }

    pub fn validate_appointment(&self, request: &AppointmentRequest) -> FormReport {
        let mut form = Collector::new("appointment");

        form.check(
            "service",
            valid_list_empty(
                &Service::options(),
                &request.service.as_str(),
                "Debe elegir un servicio",
            ),
        );
        form.check("patientName", self.valid_full_name(&request.patient_name));
        form.check("phone", self.valid_phone(&request.phone));
        form.check("date", self.valid_date_str(&request.date));

        form.finish()
    }
}
