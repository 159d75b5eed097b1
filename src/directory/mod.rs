use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use log::{error, info, warn};
use crate::errors::AppError;
use crate::models::employee::{Employee, Position};

pub const MIN_AGE: i32 = 26;
pub const MIN_PROMOTION_AGE: i32 = 30;

/// In-memory employee store. All access goes through one lock, so every
/// operation sees a consistent snapshot and check-then-act sequences cannot
/// interleave.
#[derive(Default)]
pub struct EmployeeDirectory {
    state: Mutex<DirectoryState>,
}

#[derive(Default)]
struct DirectoryState {
    records: Vec<Employee>,
    // id -> position in `records` of the first record carrying that id
    index: HashMap<String, usize>,
}

impl DirectoryState {
    fn find(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, employee) in self.records.iter().enumerate() {
            self.index.entry(employee.id.clone()).or_insert(pos);
        }
    }

    fn filtered<F>(&self, predicate: F) -> Vec<Employee>
    where
        F: Fn(&Employee) -> bool,
    {
        self.records.iter().filter(|&e| predicate(e)).cloned().collect()
    }
}

fn not_found(what: &str) -> AppError {
    AppError::NotFound(format!("{} not found", what))
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, DirectoryState>, AppError> {
        self.state.lock().map_err(|_| {
            error!("employee directory lock poisoned");
            AppError::InternalServerError("Directory unavailable".to_string())
        })
    }

    pub fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.lock()?.records.clone())
    }

    /// Appends without checking for an existing id; lookups resolve to the
    /// earliest record with a given id.
    pub fn add(&self, employee: Employee) -> Result<(), AppError> {
        let mut state = self.lock()?;
        let pos = state.records.len();
        if state.index.contains_key(&employee.id) {
            warn!("adding employee {} with an id that already exists", employee.id);
        }
        state.index.entry(employee.id.clone()).or_insert(pos);
        info!("added employee {}", employee.id);
        state.records.push(employee);
        Ok(())
    }

    pub fn update(&self, id: &str, mut employee: Employee) -> Result<Employee, AppError> {
        let mut state = self.lock()?;
        let pos = state.find(id).ok_or_else(|| not_found("employee"))?;

        employee.id = id.to_string();
        state.records[pos] = employee.clone();
        info!("updated employee {}", id);
        Ok(employee)
    }

    pub fn delete(&self, id: &str) -> Result<Employee, AppError> {
        let mut state = self.lock()?;
        let pos = state.find(id).ok_or_else(|| not_found("employee"))?;

        let removed = state.records.remove(pos);
        state.reindex();
        info!("deleted employee {}", id);
        Ok(removed)
    }

    pub fn filter_by_position(&self, position: &str) -> Result<Vec<Employee>, AppError> {
        let position: Position = position.parse()?;
        Ok(self.lock()?.filtered(|e| e.position == position))
    }

    pub fn filter_by_age_range(&self, min_age: i32, max_age: i32) -> Result<Vec<Employee>, AppError> {
        if min_age < MIN_AGE || max_age < MIN_AGE {
            return Err(AppError::InvalidArgument("age must be older than 25".to_string()));
        }
        if max_age < min_age {
            return Err(AppError::InvalidArgument("max age can not be less than min age".to_string()));
        }

        Ok(self.lock()?.filtered(|e| (min_age..=max_age).contains(&e.age)))
    }

    pub fn without_annual_leave(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.lock()?.filtered(|e| e.annual_leave < 1))
    }

    pub fn apply_for_annual_leave(&self, id: &str) -> Result<Employee, AppError> {
        let mut state = self.lock()?;
        let pos = state.find(id).ok_or_else(|| not_found("employee"))?;
        let employee = &mut state.records[pos];

        if employee.on_leave {
            warn!("leave rejected for {}: already on leave", id);
            return Err(AppError::Conflict("employee must not already be on leave".to_string()));
        }
        if employee.annual_leave < 1 {
            warn!("leave rejected for {}: no balance", id);
            return Err(AppError::Conflict(
                "employee must have at least one day of annual leave remaining".to_string(),
            ));
        }

        employee.on_leave = true;
        employee.annual_leave -= 1;
        info!("employee {} on leave, {} days remaining", id, employee.annual_leave);
        Ok(employee.clone())
    }

    /// Only `requester.id` is consulted; the stored record for that id decides
    /// whether the requester is a supervisor.
    pub fn promote(&self, employee_id: &str, requester: &Employee) -> Result<Employee, AppError> {
        let mut state = self.lock()?;

        let requester_pos = state
            .find(&requester.id)
            .ok_or_else(|| AppError::NotFound("supervisor does not exist".to_string()))?;
        if !state.records[requester_pos].is_supervisor() {
            warn!("promotion of {} rejected: requester {} is not a supervisor", employee_id, requester.id);
            return Err(AppError::InvalidArgument("requester must be a supervisor".to_string()));
        }

        let pos = state.find(employee_id).ok_or_else(|| not_found("employee"))?;
        let employee = &mut state.records[pos];

        if employee.is_supervisor() {
            return Err(AppError::Conflict("employee is already a supervisor".to_string()));
        }
        if employee.age < MIN_PROMOTION_AGE {
            return Err(AppError::InvalidArgument(
                "employee age must be at least 30 years old".to_string(),
            ));
        }
        if employee.on_leave {
            return Err(AppError::Conflict("employee is on leave".to_string()));
        }

        employee.position = Position::Supervisor;
        info!("employee {} promoted to {} by {}", employee_id, employee.position, requester.id);
        Ok(employee.clone())
    }
}
