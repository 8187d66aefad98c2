use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub chapters: Vec<String>,
    pub exam_date: String,
    pub difficulty: u8,
}

#[derive(Deserialize)]
pub struct CreateSubject {
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<String>,
    pub exam_date: String,
    pub difficulty: u8,
}

/// Subjects in insertion order.
pub type Db = Arc<RwLock<Vec<Subject>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/subjects", get(list_subjects).post(create_subject))
        .route("/subjects/{id}", delete(delete_subject))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_subjects(State(db): State<Db>) -> Json<Vec<Subject>> {
    Json(db.read().await.clone())
}

async fn create_subject(
    State(db): State<Db>,
    Json(input): Json<CreateSubject>,
) -> Result<(StatusCode, Json<Subject>), StatusCode> {
    if !(1..=5).contains(&input.difficulty) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let subject = Subject {
        id: Uuid::new_v4(),
        name: input.name,
        chapters: input.chapters,
        exam_date: input.exam_date,
        difficulty: input.difficulty,
    };
    info!(id = %subject.id, name = %subject.name, "subject created");
    db.write().await.push(subject.clone());
    Ok((StatusCode::CREATED, Json(subject)))
}

async fn delete_subject(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    let mut subjects = db.write().await;
    match subjects.iter().position(|s| s.id == id) {
        Some(index) => {
            subjects.remove(index);
            info!(%id, "subject deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
