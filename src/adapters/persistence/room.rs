use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    domain::entities::room::Room,
    use_cases::room::{NewRoom, RoomRepo},
};

#[derive(sqlx::FromRow, Debug)]
pub struct RoomDb {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub created_at: Option<NaiveDateTime>,
}

impl From<RoomDb> for Room {
    fn from(row: RoomDb) -> Self {
        Room {
            id: row.id,
            name: row.name,
            location: row.location,
            capacity: row.capacity,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RoomRepo for PostgresPersistence {
    async fn create(&self, room: &NewRoom) -> AppResult<Room> {
        let rec = sqlx::query_as::<_, RoomDb>(
            r#"INSERT INTO rooms (id, name, location, capacity)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, location, capacity, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&room.name)
        .bind(&room.location)
        .bind(room.capacity)
        .fetch_one(&self.pool)
        .await?;

        Ok(rec.into())
    }

    async fn list_all(&self) -> AppResult<Vec<Room>> {
        let recs = sqlx::query_as::<_, RoomDb>(
            "SELECT id, name, location, capacity, created_at FROM rooms ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recs.into_iter().map(Room::from).collect())
    }
}
