use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::booking::{Booking, NewBooking},
    use_cases::booking::BookingRepo,
};

const BOOKING_COLUMNS: &str = "id, lecture_name, department, module, year, date, start_time, \
                               end_time, type_of_booking, location, booked_email, created_at";

// Booking row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct BookingDb {
    pub id: Uuid,
    pub lecture_name: String,
    pub department: String,
    pub module: String,
    pub year: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub type_of_booking: String,
    pub location: String,
    pub booked_email: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<BookingDb> for Booking {
    fn from(row: BookingDb) -> Self {
        Booking {
            id: row.id,
            lecture_name: row.lecture_name,
            department: row.department,
            module: row.module,
            year: row.year,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            type_of_booking: row.type_of_booking,
            location: row.location,
            booked_email: row.booked_email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookingRepo for PostgresPersistence {
    async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        let sql = format!(
            r#"INSERT INTO bookings (id, lecture_name, department, module, year, date,
                                     start_time, end_time, type_of_booking, location, booked_email)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
               RETURNING {BOOKING_COLUMNS}"#
        );
        let rec = sqlx::query_as::<_, BookingDb>(&sql)
            .bind(Uuid::new_v4())
            .bind(&booking.lecture_name)
            .bind(&booking.department)
            .bind(&booking.module)
            .bind(&booking.year)
            .bind(&booking.date)
            .bind(&booking.start_time)
            .bind(&booking.end_time)
            .bind(&booking.type_of_booking)
            .bind(&booking.location)
            .bind(&booking.booked_email)
            .fetch_one(&self.pool)
            .await?;

        Ok(rec.into())
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY seq");
        let recs = sqlx::query_as::<_, BookingDb>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(recs.into_iter().map(Booking::from).collect())
    }

    async fn list_by_date(&self, date: &str) -> AppResult<Vec<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE date = $1 ORDER BY seq");
        let recs = sqlx::query_as::<_, BookingDb>(&sql)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;

        Ok(recs.into_iter().map(Booking::from).collect())
    }
}
