//! Customer details form.
//!
//! DESIGN
//! ======
//! All six fields are free text. The only validation is "required": a field
//! counts as filled when it is non-empty after trimming. Values are kept as
//! typed so navigating back and forth never loses input.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use crate::net::types::{AddCartItem, CheckoutCustomer};

/// The six form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    StudentId,
    Name,
    Institute,
    Phone,
    Email,
    Room,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::StudentId,
        Field::Name,
        Field::Institute,
        Field::Phone,
        Field::Email,
        Field::Room,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::StudentId => "Student ID",
            Self::Name => "Name",
            Self::Institute => "Institute",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Room => "Room",
        }
    }

    /// Form key, matching the wire field name.
    pub fn key(self) -> &'static str {
        match self {
            Self::StudentId => "student_id",
            Self::Name => "name",
            Self::Institute => "institute",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Room => "room",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    pub student_id: String,
    pub name: String,
    pub institute: String,
    pub phone: String,
    pub email: String,
    pub room: String,
}

impl CustomerDetails {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::StudentId => &self.student_id,
            Field::Name => &self.name,
            Field::Institute => &self.institute,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Room => &self.room,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::StudentId => &mut self.student_id,
            Field::Name => &mut self.name,
            Field::Institute => &mut self.institute,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Room => &mut self.room,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn to_add_request(&self, template_id: &str) -> AddCartItem {
        AddCartItem {
            template_id: template_id.to_owned(),
            student_id: self.student_id.clone(),
            name: self.name.clone(),
            institute: self.institute.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            room: self.room.clone(),
        }
    }

    pub fn to_checkout_customer(&self) -> CheckoutCustomer {
        CheckoutCustomer {
            id: self.student_id.clone(),
            name: self.name.clone(),
            institute: self.institute.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            room: self.room.clone(),
        }
    }
}
