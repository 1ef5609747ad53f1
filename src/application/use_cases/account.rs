use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
    domain::entities::{lecturer::Lecturer, student::Student},
};

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait StudentRepo: Send + Sync {
    async fn create(&self, account: &NewAccount) -> AppResult<Student>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;
    /// Every student, in registration order. No filtering or paging.
    async fn list_all(&self) -> AppResult<Vec<Student>>;
}

#[async_trait]
pub trait LecturerRepo: Send + Sync {
    async fn create(&self, account: &NewAccount) -> AppResult<Lecturer>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Lecturer>>;
    async fn list_all(&self) -> AppResult<Vec<Lecturer>>;
}

#[derive(Clone)]
pub struct AccountUseCases {
    students: Arc<dyn StudentRepo>,
    lecturers: Arc<dyn LecturerRepo>,
}

impl AccountUseCases {
    pub fn new(students: Arc<dyn StudentRepo>, lecturers: Arc<dyn LecturerRepo>) -> Self {
        Self {
            students,
            lecturers,
        }
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    pub async fn register_student(&self, account: NewAccount) -> AppResult<Student> {
        let account = normalize(account)?;
        self.students.create(&account).await
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    pub async fn register_lecturer(&self, account: NewAccount) -> AppResult<Lecturer> {
        let account = normalize(account)?;
        self.lecturers.create(&account).await
    }

    /// Students matching `email`, or all of them when no filter is given.
    pub async fn find_students(&self, email: Option<&str>) -> AppResult<Vec<Student>> {
        match email {
            Some(email) => Ok(self
                .students
                .find_by_email(email.trim())
                .await?
                .into_iter()
                .collect()),
            None => self.students.list_all().await,
        }
    }

    pub async fn find_lecturers(&self, email: Option<&str>) -> AppResult<Vec<Lecturer>> {
        match email {
            Some(email) => Ok(self
                .lecturers
                .find_by_email(email.trim())
                .await?
                .into_iter()
                .collect()),
            None => self.lecturers.list_all().await,
        }
    }

    /// Checks lecturers first, then students. Returns the matched email.
    // Credentials are compared as stored; hashing is out of scope here.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let email = email.trim();

        if let Some(lecturer) = self.lecturers.find_by_email(email).await?
            && lecturer.password == password
        {
            return Ok(lecturer.email);
        }

        if let Some(student) = self.students.find_by_email(email).await?
            && student.password == password
        {
            return Ok(student.email);
        }

        Err(AppError::InvalidCredentials)
    }
}

fn normalize(account: NewAccount) -> AppResult<NewAccount> {
    let email = account.email.trim().to_string();
    if !is_valid_email(&email) {
        return Err(AppError::InvalidInput("Invalid email address".into()));
    }
    let name = account.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::InvalidInput("Name is required".into()));
    }
    if account.password.is_empty() {
        return Err(AppError::InvalidInput("Password is required".into()));
    }
    Ok(NewAccount {
        name,
        email,
        password: account.password,
    })
}
