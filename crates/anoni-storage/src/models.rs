use crate::schema::kv_entries;

use diesel::prelude::*;
use serde::Serialize;

#[derive(Debug, Queryable, Selectable, Serialize)]
#[diesel(table_name = kv_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KvRow {
  pub key: String,
  pub value: String,
  pub updated_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = kv_entries)]
pub struct NewKvRow<'a> {
  pub key: &'a str,
  pub value: &'a str,
}
