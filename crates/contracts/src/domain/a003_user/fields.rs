use super::aggregate::User;
use crate::shared::export::ExportRow;
use crate::shared::filter::{FieldAccessor, FieldSpec, FieldValue};
use crate::shared::store::AppState;

fn name(u: &User, _: &AppState) -> FieldValue {
    FieldValue::from(u.name.as_str())
}

fn email(u: &User, _: &AppState) -> FieldValue {
    FieldValue::from(u.email.as_str())
}

fn department(u: &User, _: &AppState) -> FieldValue {
    FieldValue::from(u.department.as_str())
}

pub const USER_FIELDS: &[FieldAccessor<User, AppState>] = &[
    FieldAccessor { name: "name", extract: name },
    FieldAccessor { name: "email", extract: email },
    FieldAccessor { name: "department", extract: department },
];

pub fn search_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("name", "Name"),
        FieldSpec::text("email", "Email"),
        FieldSpec::text("department", "Department"),
    ]
}

pub fn export_row(user: &User) -> ExportRow {
    ExportRow::new()
        .cell("Name", user.name.as_str())
        .cell("Email", user.email.as_str())
        .cell("Department", user.department.as_str())
}
