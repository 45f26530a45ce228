use diesel::prelude::*;
use clearway_common::ContactMessage;
use crate::schema::contact_messages;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactMessageRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>, // blank phones are stored as NULL
    pub message: String,
    pub created_at: i64, // epoch seconds, utc
}

#[derive(Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i64,
}

impl From<ContactMessage> for NewContactMessage {
    fn from(message: ContactMessage) -> Self {
        Self {
            name: message.name,
            email: message.email,
            phone: message.phone,
            message: message.message,
            created_at: message.created_at.timestamp(),
        }
    }
}
