//! The validator entry points used by the portal forms.
//!
//! Every method returns a [`Verdict`]; a rejection carries the message
//! to show the user. Nothing here returns `Err` or panics on bad input.

use chrono::NaiveDate;

use super::catalog::BenefitGrant;
use super::combinator::try_either;
use super::rules;
use crate::clock::{Clock, SystemClock};
use crate::config::ValidationLimits;
use crate::sampling::{ExampleSource, ThreadRngSource};
use crate::types::{SelectOption, SubjectKind, Verdict};

/// Date format used in messages and accepted by [`ValidationEngine::valid_date_str`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stateless validator set, parameterised over its clock and its source
/// of example phone numbers.
#[derive(Debug, Clone)]
pub struct ValidationEngine<C = SystemClock, R = ThreadRngSource> {
    clock: C,
    examples: R,
    limits: ValidationLimits,
}

impl ValidationEngine {
    /// Engine wired to the local clock, the thread RNG and default limits.
    pub fn system() -> Self {
        Self::new(SystemClock, ThreadRngSource, ValidationLimits::default())
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock, R: ExampleSource> ValidationEngine<C, R> {
    pub fn new(clock: C, examples: R, limits: ValidationLimits) -> Self {
        Self {
            clock,
            examples,
            limits,
        }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Highest student code accepted today.
    pub fn code_upper_bound(&self) -> i64 {
        rules::code_upper_bound(self.clock.current_year())
    }

    // -----------------------------------------------------------------------
    // Names
    // -----------------------------------------------------------------------

    pub fn valid_name(&self, name: &str) -> Verdict {
        Verdict::check(rules::char_len(name) <= self.limits.name_max_len, || {
            "Los nombres son muy largos".to_string()
        })
    }

    pub fn valid_lastname(&self, lastname: &str) -> Verdict {
        Verdict::check(rules::char_len(lastname) <= self.limits.name_max_len, || {
            "Los apellidos son muy largos".to_string()
        })
    }

    /// Names and last names typed into a single field.
    pub fn valid_full_name(&self, name: &str) -> Verdict {
        Verdict::check(
            rules::char_len(name) <= self.limits.full_name_max_len,
            || "El nombre es demasiado largo".to_string(),
        )
    }

    // -----------------------------------------------------------------------
    // Identity-dependent fields
    // -----------------------------------------------------------------------

    /// Student code for students, national ID for staff.
    pub fn valid_code(&self, code: &str, kind: SubjectKind) -> Verdict {
        match kind {
            SubjectKind::Student => self.student_code(code),
            SubjectKind::Staff => self.national_id(code),
        }
    }

    /// Academic plan for students, dependency area for staff.
    pub fn valid_plan(&self, plan: &str, kind: SubjectKind) -> Verdict {
        match kind {
            SubjectKind::Student => rules::plan_code(plan),
            SubjectKind::Staff => rules::dependency_area(plan),
        }
    }

    /// Institutional mailbox for students, any mailbox for staff.
    pub fn valid_email(&self, email: &str, kind: SubjectKind) -> Verdict {
        match kind {
            SubjectKind::Student => rules::student_email(email, &self.limits.student_email_domain),
            SubjectKind::Staff => rules::staff_email(email),
        }
    }

    /// Accepts `value` if it passes either the student code or the national
    /// ID rule. Used when the form does not know who the subject is yet.
    pub fn valid_code_or_nuip(&self, value: &str) -> Verdict {
        try_either(self.student_code(value), self.national_id(value))
    }

    /// Accepts `value` if it is either a plan or an area.
    pub fn valid_plan_or_area(&self, value: &str) -> Verdict {
        try_either(rules::plan_code(value), rules::dependency_area(value))
    }

    fn student_code(&self, code: &str) -> Verdict {
        rules::student_code(code, self.limits.code_floor, self.clock.current_year())
    }

    fn national_id(&self, nuip: &str) -> Verdict {
        rules::national_id(nuip, self.limits.nuip_min_len, self.limits.nuip_max_len)
    }

    // -----------------------------------------------------------------------
    // Selections
    // -----------------------------------------------------------------------

    pub fn valid_rol(&self, rol: &str) -> Verdict {
        Verdict::check(!rol.is_empty(), || "Debe elegir un rol".to_string())
    }

    /// The grant must be one of the scholarship labels, matched exactly.
    pub fn valid_grant(&self, grant: &str) -> Verdict {
        Verdict::check(BenefitGrant::from_label(grant).is_some(), || {
            "Debe elegir un tipo de beca".to_string()
        })
    }

    // -----------------------------------------------------------------------
    // Dates and numbers
    // -----------------------------------------------------------------------

    /// `None` stands for a value that could not be read as a date.
    ///
    /// Valid when the date is today or later.
    pub fn valid_date(&self, date: Option<NaiveDate>) -> Verdict {
        let Some(date) = date else {
            return Verdict::Invalid("El dato ingresado no es una fecha válida".to_string());
        };

        let today = self.clock.today();
        Verdict::check(date >= today, || {
            format!(
                "La fecha {} es anterior a la fecha de hoy {}",
                date.format(DATE_FORMAT),
                today.format(DATE_FORMAT)
            )
        })
    }

    /// Parse `YYYY-MM-DD` and apply [`valid_date`](Self::valid_date).
    pub fn valid_date_str(&self, raw: &str) -> Verdict {
        self.valid_date(NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
    }

    /// Cellphone: numeric and exactly `phone_len` characters long.
    ///
    /// The length message suggests a random example number, so two
    /// rejections of the same input may differ in that number.
    pub fn valid_phone(&self, phone: &str) -> Verdict {
        if !rules::is_numeric(phone) {
            return Verdict::Invalid("Ingrese un número de celular válido".to_string());
        }

        let expected = self.limits.phone_len;
        Verdict::check(rules::char_len(phone) == expected, || {
            format!(
                "El número de celular debe contener {expected} digitos Ej: {}",
                self.examples.example_phone()
            )
        })
    }

    pub fn valid_semester(&self, semester: &str) -> Verdict {
        if !rules::is_numeric(semester) {
            return Verdict::Invalid("El dato ingresado no es un número".to_string());
        }

        let ok = rules::leading_int(semester).is_some_and(|s| s <= self.limits.semester_max);
        Verdict::check(ok, || {
            "Una carrera tecnológica dura de 6 a 7 semestres y una carrera profesional de 10 a 11 semestres"
                .to_string()
        })
    }
}

/// Valid when `selected` is the value of some option; otherwise
/// `message` verbatim.
pub fn valid_list_empty<T: PartialEq>(
    options: &[SelectOption<T>],
    selected: &T,
    message: &str,
) -> Verdict {
    Verdict::check(options.iter().any(|o| &o.value == selected), || {
        message.to_string()
    })
}
