use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use validator::{Validate, ValidationError};
use crate::directory::EmployeeDirectory;
use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_employee_state", skip_on_field_errors = false))]
pub struct EmployeePayload {
    #[validate(length(min = 3, message = "ID must not be less than 3 characters"))]
    id: String,
    #[validate(length(min = 5, message = "name can not be less than 5 characters"), custom = "validate_name")]
    name: String,
    #[validate(email(message = "email must be valid!"))]
    email: String,
    #[validate(custom = "validate_phone_number")]
    phone_number: String,
    #[validate(range(min = 26, message = "age must be older than 25"))]
    age: i32,
    #[validate(custom = "validate_position")]
    position: String,
    on_leave: bool,
    hire_date: NaiveDate,
    #[validate(range(min = 0, message = "annualLeave can not be negative"))]
    annual_leave: i32,
}

impl EmployeePayload {
    pub fn into_employee(self) -> Result<Employee, AppError> {
        Ok(Employee {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            age: self.age,
            position: self.position.parse()?,
            on_leave: self.on_leave,
            hire_date: self.hire_date,
            annual_leave: self.annual_leave,
        })
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("name must not contain numbers"));
    }
    Ok(())
}

// 05 followed by eight digits
fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let valid = phone_number.len() == 10
        && phone_number.starts_with("05")
        && phone_number.chars().all(|c| c.is_ascii_digit());
    if !valid {
        return Err(ValidationError::new("phone number must start with 05 and must be 10 digits only!"));
    }
    Ok(())
}

fn validate_position(position: &str) -> Result<(), ValidationError> {
    if position != "supervisor" && position != "coordinator" {
        return Err(ValidationError::new(
            "position must be either supervisor or coordinator only (case sensitive)",
        ));
    }
    Ok(())
}

fn validate_employee_state(payload: &EmployeePayload) -> Result<(), ValidationError> {
    if payload.on_leave {
        return Err(ValidationError::new("onLeave must be initially set to false"));
    }
    if payload.hire_date > Local::now().date_naive() {
        return Err(ValidationError::new("hireDate can not be in the future"));
    }
    Ok(())
}

fn validated(payload: web::Json<EmployeePayload>) -> Result<Employee, AppError> {
    let payload = payload.into_inner();
    validate_payload(&payload)?;
    payload.into_employee()
}

pub async fn list_employees(
    directory: web::Data<EmployeeDirectory>,
) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(directory.list()?))
}

pub async fn add_employee(
    directory: web::Data<EmployeeDirectory>,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = validated(new_employee)?;
    directory.add(employee)?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee added successfully",
    })))
}

pub async fn update_employee(
    directory: web::Data<EmployeeDirectory>,
    id: web::Path<String>,
    updates: web::Json<EmployeePayload>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = validated(updates)?;
    directory.update(&id.into_inner(), employee)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully",
    })))
}

pub async fn delete_employee(
    directory: web::Data<EmployeeDirectory>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    directory.delete(&id.into_inner())?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}

pub async fn filter_by_position(
    directory: web::Data<EmployeeDirectory>,
    position: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(directory.filter_by_position(&position)?))
}

pub async fn filter_by_age(
    directory: web::Data<EmployeeDirectory>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, actix_web::Error> {
    let (min_age, max_age) = path.into_inner();
    Ok(HttpResponse::Ok().json(directory.filter_by_age_range(min_age, max_age)?))
}

pub async fn list_without_annual_leave(
    directory: web::Data<EmployeeDirectory>,
) -> Result<HttpResponse, actix_web::Error> {
    Ok(HttpResponse::Ok().json(directory.without_annual_leave()?))
}

pub async fn apply_for_annual_leave(
    directory: web::Data<EmployeeDirectory>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    directory.apply_for_annual_leave(&id.into_inner())?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee applied for annual leave successfully",
    })))
}

pub async fn promote_employee(
    directory: web::Data<EmployeeDirectory>,
    employee_id: web::Path<String>,
    requester: web::Json<EmployeePayload>,
) -> Result<HttpResponse, actix_web::Error> {
    let requester = validated(requester)?;
    directory.promote(&employee_id.into_inner(), &requester)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee promoted successfully",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmployeePayload {
        EmployeePayload {
            id: "100".to_string(),
            name: "Sarah Ahmed".to_string(),
            email: "sarah@example.com".to_string(),
            phone_number: "0512345678".to_string(),
            age: 30,
            position: "coordinator".to_string(),
            on_leave: false,
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            annual_leave: 5,
        }
    }

    fn message_for(payload: EmployeePayload) -> String {
        match validate_payload(&payload) {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        assert!(validate_payload(&payload()).is_ok());
        let employee = payload().into_employee().unwrap();
        assert_eq!(employee.position.as_str(), "coordinator");
        assert!(!employee.on_leave);
    }

    #[test]
    fn rejects_short_id_and_numeric_name() {
        let mut p = payload();
        p.id = "12".to_string();
        p.name = "Agent 47".to_string();

        let msg = message_for(p);
        assert!(msg.contains("id: [ID must not be less than 3 characters]"), "{}", msg);
        assert!(msg.contains("name must not contain numbers"), "{}", msg);
    }

    #[test]
    fn rejects_bad_contact_fields() {
        let mut p = payload();
        p.email = "not-an-email".to_string();
        p.phone_number = "0612345678".to_string();

        let msg = message_for(p);
        assert!(msg.contains("email must be valid!"), "{}", msg);
        assert!(msg.contains("phone number must start with 05"), "{}", msg);

        let mut short = payload();
        short.phone_number = "05123".to_string();
        assert!(message_for(short).contains("phoneNumber: [phone number must start with 05"));
    }

    #[test]
    fn rejects_underage_and_negative_balance() {
        let mut p = payload();
        p.age = 25;
        p.annual_leave = -1;

        let msg = message_for(p);
        assert!(msg.contains("age must be older than 25"), "{}", msg);
        assert!(msg.contains("annualLeave can not be negative"), "{}", msg);
    }

    #[test]
    fn rejects_unknown_position() {
        let mut p = payload();
        p.position = "manager".to_string();
        assert!(message_for(p).contains("supervisor or coordinator"));
    }

    #[test]
    fn rejects_payload_already_on_leave() {
        let mut p = payload();
        p.on_leave = true;
        assert!(message_for(p).contains("employee: [onLeave must be initially set to false]"));
    }

    #[test]
    fn state_checks_are_reported_alongside_field_errors() {
        let mut p = payload();
        p.age = 25;
        p.on_leave = true;

        let msg = message_for(p);
        assert!(msg.contains("age: [age must be older than 25]"), "{}", msg);
        assert!(msg.contains("employee: [onLeave must be initially set to false]"), "{}", msg);
    }

    #[test]
    fn field_names_match_the_json_body() {
        let mut p = payload();
        p.phone_number = "123".to_string();
        p.annual_leave = -3;

        let msg = message_for(p);
        assert!(msg.contains("annualLeave: [annualLeave can not be negative]"), "{}", msg);
        assert!(msg.contains("phoneNumber: ["), "{}", msg);
        assert!(!msg.contains("phone_number"), "{}", msg);
    }

    #[test]
    fn rejects_future_hire_date() {
        let mut p = payload();
        p.hire_date = Local::now().date_naive() + chrono::Duration::days(1);
        assert!(message_for(p).contains("hireDate can not be in the future"));
    }
}
