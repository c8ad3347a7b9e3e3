use chrono::Utc;
use contracts::domain::case_id::SequenceBucket;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryOrder, Statement};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_sequence")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub case_type: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub district_code: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub year: i32,
    pub last_value: i64,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Single statement, so the read-modify-write is atomic inside SQLite
const INCREMENT_SQL: &str = r#"
    INSERT INTO case_sequence (case_type, district_code, year, last_value, updated_at)
    VALUES (?, ?, ?, 1, ?)
    ON CONFLICT (case_type, district_code, year)
    DO UPDATE SET last_value = last_value + 1, updated_at = excluded.updated_at
    RETURNING last_value
"#;

/// Increment the bucket counter and return the new value
pub async fn increment(
    conn: &DatabaseConnection,
    bucket: &SequenceBucket,
) -> Result<Option<i64>, DbErr> {
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            INCREMENT_SQL,
            [
                bucket.case_type.code().into(),
                bucket.district.code().into(),
                bucket.year.into(),
                Utc::now().to_rfc3339().into(),
            ],
        ))
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get::<i64>("", "last_value")?)),
        None => Ok(None),
    }
}

pub async fn get(
    conn: &DatabaseConnection,
    bucket: &SequenceBucket,
) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id((
        bucket.case_type.code().to_string(),
        bucket.district.code().to_string(),
        bucket.year,
    ))
    .one(conn)
    .await
}

pub async fn list_all(conn: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .order_by_asc(Column::CaseType)
        .order_by_asc(Column::DistrictCode)
        .order_by_asc(Column::Year)
        .all(conn)
        .await
}
