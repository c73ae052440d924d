//! Fixed selection lists offered by the portal forms.
//!
//! Values must match what the backend stores; labels are what the
//! dropdowns display.

use serde::{Deserialize, Serialize};

use crate::types::SelectOption;

// ---------------------------------------------------------------------------
// Scholarship grants
// ---------------------------------------------------------------------------

/// Meal-assistance scholarship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitGrant {
    /// Lunch.
    Almuerzo,
    /// Snack.
    Refrigerio,
}

impl BenefitGrant {
    pub const ALL: [BenefitGrant; 2] = [BenefitGrant::Almuerzo, BenefitGrant::Refrigerio];

    pub fn value(self) -> &'static str {
        match self {
            BenefitGrant::Almuerzo => "almuerzo",
            BenefitGrant::Refrigerio => "refrigerio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BenefitGrant::Almuerzo => "Beneficiario almuerzo",
            BenefitGrant::Refrigerio => "Beneficiario refrigerio",
        }
    }

    /// Look a grant up by its exact display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }

    pub fn options() -> Vec<SelectOption<&'static str>> {
        Self::ALL
            .iter()
            .map(|g| SelectOption::new(g.value(), g.label()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Staff roles
// ---------------------------------------------------------------------------

/// Roles a staff member can hold in the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Administrador,
    Enfermero,
    Monitor,
    Odontologo,
    Psicologo,
}

impl StaffRole {
    pub const ALL: [StaffRole; 5] = [
        StaffRole::Administrador,
        StaffRole::Enfermero,
        StaffRole::Monitor,
        StaffRole::Odontologo,
        StaffRole::Psicologo,
    ];

    pub fn value(self) -> &'static str {
        match self {
            StaffRole::Administrador => "administrador",
            StaffRole::Enfermero => "enfermero",
            StaffRole::Monitor => "monitor",
            StaffRole::Odontologo => "odontologo",
            StaffRole::Psicologo => "psicologo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StaffRole::Administrador => "Administrador (a)",
            StaffRole::Enfermero => "Enfermero (a)",
            StaffRole::Monitor => "Monitor (a)",
            StaffRole::Odontologo => "Odontólogo (a)",
            StaffRole::Psicologo => "Psicólogo (a)",
        }
    }

    pub fn options() -> Vec<SelectOption<&'static str>> {
        Self::ALL
            .iter()
            .map(|r| SelectOption::new(r.value(), r.label()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Appointment services
// ---------------------------------------------------------------------------

/// Services that take appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Psicologia,
    Enfermeria,
    Odontologia,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Psicologia, Service::Enfermeria, Service::Odontologia];

    pub fn value(self) -> &'static str {
        match self {
            Service::Psicologia => "psicologia",
            Service::Enfermeria => "enfermeria",
            Service::Odontologia => "odontologia",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::Psicologia => "Psicología",
            Service::Enfermeria => "Enfermería - Médico general",
            Service::Odontologia => "Odontología",
        }
    }

    pub fn options() -> Vec<SelectOption<&'static str>> {
        Self::ALL
            .iter()
            .map(|s| SelectOption::new(s.value(), s.label()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Account status
// ---------------------------------------------------------------------------

/// Active / inactive selector shown when editing a user.
pub fn account_status_options() -> Vec<SelectOption<bool>> {
    vec![
        SelectOption::new(true, "Activo"),
        SelectOption::new(false, "Inactivo"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_labels_round_trip() {
        for grant in BenefitGrant::ALL {
            assert_eq!(BenefitGrant::from_label(grant.label()), Some(grant));
        }
        assert_eq!(BenefitGrant::from_label("almuerzo"), None);
    }

    #[test]
    fn role_values_match_serde_names() {
        for role in StaffRole::ALL {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, role.value());
        }
    }

    #[test]
    fn option_lists_have_unique_values() {
        let roles = StaffRole::options();
        let mut values: Vec<_> = roles.iter().map(|o| o.value).collect();
        values.dedup();
        assert_eq!(values.len(), StaffRole::ALL.len());
        assert_eq!(Service::options().len(), 3);
        assert_eq!(account_status_options().len(), 2);
    }
}
