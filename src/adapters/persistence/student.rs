use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::student::Student,
    use_cases::account::{NewAccount, StudentRepo},
};

// Account row shape shared by the students and lecturers tables.
#[derive(sqlx::FromRow, Debug)]
pub struct AccountDb {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<AccountDb> for Student {
    fn from(row: AccountDb) -> Self {
        Student {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl StudentRepo for PostgresPersistence {
    async fn create(&self, account: &NewAccount) -> AppResult<Student> {
        let rec = sqlx::query_as::<_, AccountDb>(
            r#"INSERT INTO students (id, name, email, password)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, email, password, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(rec.into())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let rec = sqlx::query_as::<_, AccountDb>(
            "SELECT id, name, email, password, created_at FROM students WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rec.map(Student::from))
    }

    async fn list_all(&self) -> AppResult<Vec<Student>> {
        let recs = sqlx::query_as::<_, AccountDb>(
            "SELECT id, name, email, password, created_at FROM students ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recs.into_iter().map(Student::from).collect())
    }
}
