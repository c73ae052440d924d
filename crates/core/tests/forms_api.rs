//! Integration tests driving the public API the way the portal pages do:
//! deserialize a submitted form, validate it, serialize the report back.

use bienestar_core::clock::FixedClock;
use bienestar_core::config::ValidationLimits;
use bienestar_core::sampling::FixedExample;
use bienestar_core::types::{SubjectKind, Verdict};
use bienestar_core::validation::catalog::{account_status_options, BenefitGrant};
use bienestar_core::validation::engine::valid_list_empty;
use bienestar_core::validation::forms::{AppointmentRequest, NursingActivityRecord, UserRecord};
use bienestar_core::ValidationEngine;
use chrono::NaiveDate;
use serde_json::json;

fn engine() -> ValidationEngine<FixedClock, FixedExample> {
    ValidationEngine::new(
        FixedClock(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()),
        FixedExample(3_130_000_001),
        ValidationLimits::default(),
    )
}

// ---------------------------------------------------------------------------
// Test: a beneficiary submitted as JSON validates and reports as JSON
// ---------------------------------------------------------------------------

#[test]
fn beneficiary_form_from_json() {
    let record: UserRecord = serde_json::from_value(json!({
        "category": "beneficiary",
        "name": "Marlon Esteban",
        "lastName": "Zambrano Zambrano",
        "code": "202059431",
        "planOrArea": "2711",
        "email": "marlon.zambrano@correounivalle.edu.co",
        "grant": BenefitGrant::Almuerzo.label()
    }))
    .expect("record should deserialize");

    let report = engine().validate_user(&record);
    assert!(report.is_valid);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({"is_valid": true, "errors": []})
    );
}

// ---------------------------------------------------------------------------
// Test: staff form with every field wrong reports each field
// ---------------------------------------------------------------------------

#[test]
fn staff_form_reports_each_field() {
    let record: UserRecord = serde_json::from_value(json!({
        "category": "staff",
        "name": "N".repeat(51),
        "lastName": "L".repeat(51),
        "code": "1234567",
        "planOrArea": "Administrativa",
        "email": "sin-arroba",
        "role": ""
    }))
    .unwrap();

    let report = engine().validate_user(&record);
    let fields: Vec<&str> = report.errors.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, ["name", "lastName", "nuip", "area", "email", "role"]);
    assert_eq!(report.message_for("email"), Some("Dirección de correo inválida"));
    assert!(report
        .message_for("nuip")
        .unwrap()
        .starts_with("La cédula 1234567 no es una cédula válida"));
}

// ---------------------------------------------------------------------------
// Test: nursing registration and appointment happy paths
// ---------------------------------------------------------------------------

#[test]
fn nursing_and_appointment_forms() {
    let activity: NursingActivityRecord = serde_json::from_value(json!({
        "fullName": "Mario Sánchez",
        "codeOrNuip": "202459431",
        "planOrArea": "3743",
        "phone": "3001234567",
        "semester": "6",
        "date": "2024-10-15"
    }))
    .unwrap();
    assert!(engine().validate_nursing_activity(&activity).is_valid);

    let appointment: AppointmentRequest = serde_json::from_value(json!({
        "service": "psicologia",
        "patientName": "Carolina Perez",
        "phone": "31300",
        "date": "2024-09-30"
    }))
    .unwrap();
    let report = engine().validate_appointment(&appointment);
    assert_eq!(
        report.message_for("phone"),
        Some("El número de celular debe contener 10 digitos Ej: 3130000001")
    );
}

// ---------------------------------------------------------------------------
// Test: single validators through the public surface
// ---------------------------------------------------------------------------

#[test]
fn direct_validators() {
    let e = engine();
    assert_eq!(e.valid_code("202459431", SubjectKind::Student), Verdict::Valid);
    assert!(!e.valid_code("194999999", SubjectKind::Student).is_valid());
    assert_eq!(e.valid_code("12345678", SubjectKind::Staff), Verdict::Valid);
    assert_eq!(e.valid_plan("2711", SubjectKind::Student), Verdict::Valid);
    assert_eq!(e.valid_grant("Beneficiario almuerzo"), Verdict::Valid);
    assert!(e.valid_code_or_nuip("12345678").is_valid());

    let status = account_status_options();
    assert_eq!(valid_list_empty(&status, &false, "Debe elegir un estado"), Verdict::Valid);
}

#[test]
fn verdict_result_bridge() {
    let e = engine();
    assert!(e.valid_rol("psicologo").into_result().is_ok());
    let err = e.valid_rol("").into_result().unwrap_err();
    assert_eq!(err.to_string(), "Validation failed: Debe elegir un rol");
}

#[test]
fn system_engine_accepts_today() {
    let e = ValidationEngine::system();
    let today = chrono::Local::now().date_naive();
    // Guard against the day rolling over between the two clock reads.
    let verdict = e.valid_date(Some(today));
    let rolled = chrono::Local::now().date_naive() != today;
    assert!(verdict.is_valid() || rolled);
}
