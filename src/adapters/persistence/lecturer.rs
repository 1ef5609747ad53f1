use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, student::AccountDb},
    app_error::AppResult,
    domain::entities::lecturer::Lecturer,
    use_cases::account::{LecturerRepo, NewAccount},
};

impl From<AccountDb> for Lecturer {
    fn from(row: AccountDb) -> Self {
        Lecturer {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LecturerRepo for PostgresPersistence {
    async fn create(&self, account: &NewAccount) -> AppResult<Lecturer> {
        let rec = sqlx::query_as::<_, AccountDb>(
            r#"INSERT INTO lecturers (id, name, email, password)
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

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Lecturer>> {
        let rec = sqlx::query_as::<_, AccountDb>(
            "SELECT id, name, email, password, created_at FROM lecturers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rec.map(Lecturer::from))
    }

    async fn list_all(&self) -> AppResult<Vec<Lecturer>> {
        let recs = sqlx::query_as::<_, AccountDb>(
            "SELECT id, name, email, password, created_at FROM lecturers ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recs.into_iter().map(Lecturer::from).collect())
    }
}
