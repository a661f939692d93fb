//! Route handlers. Each one runs its manager call on the blocking pool.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::core::{
    Health, InstanceId, InstanceManager, InstanceView, ManagerError, StartOutcome, StopOutcome,
};

pub type SharedManager = Arc<InstanceManager>;

/// Body of create and rename requests
#[derive(Debug, Deserialize)]
pub struct NameBody {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
}

impl Message {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            pid: None,
        }
    }
}

/// Run a blocking manager call off the async runtime
async fn blocking<T, F>(manager: SharedManager, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&InstanceManager) -> Result<T, ManagerError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&manager))
        .await
        .map_err(|e| ApiError::internal(format!("worker task failed: {}", e)))?
        .map_err(ApiError::from)
}

pub async fn health(State(manager): State<SharedManager>) -> Result<Json<Health>, ApiError> {
    blocking(manager, |m| Ok(m.health())).await.map(Json)
}

pub async fn list_instances(
    State(manager): State<SharedManager>,
) -> Result<Json<Vec<InstanceView>>, ApiError> {
    blocking(manager, |m| Ok(m.list())).await.map(Json)
}

pub async fn get_instance(
    State(manager): State<SharedManager>,
    Path(id): Path<InstanceId>,
) -> Result<Json<InstanceView>, ApiError> {
    blocking(manager, move |m| m.get(id)).await.map(Json)
}

pub async fn create_instance(
    State(manager): State<SharedManager>,
    Json(body): Json<NameBody>,
) -> Result<Json<InstanceView>, ApiError> {
    blocking(manager, move |m| m.create(&body.name)).await.map(Json)
}

pub async fn rename_instance(
    State(manager): State<SharedManager>,
    Path(id): Path<InstanceId>,
    Json(body): Json<NameBody>,
) -> Result<Json<InstanceView>, ApiError> {
    blocking(manager, move |m| m.rename(id, &body.name))
        .await
        .map(Json)
}

pub async fn delete_instance(
    State(manager): State<SharedManager>,
    Path(id): Path<InstanceId>,
) -> Result<Json<Message>, ApiError> {
    let removed = blocking(manager, move |m| m.delete(id)).await?;
    Ok(Json(Message::new(format!(
        "Instance #{} '{}' deleted",
        removed.id, removed.name
    ))))
}

pub async fn start_instance(
    State(manager): State<SharedManager>,
    Path(id): Path<InstanceId>,
) -> Result<Json<Message>, ApiError> {
    let outcome = blocking(manager, move |m| m.start(id)).await?;
    let (message, pid) = match outcome {
        StartOutcome::Started { name, pid } => (format!("Started '{}'", name), pid),
        StartOutcome::AlreadyRunning { name, pid } => {
            (format!("'{}' is already running", name), pid)
        }
    };
    Ok(Json(Message {
        message,
        pid: Some(pid),
    }))
}

pub async fn stop_instance(
    State(manager): State<SharedManager>,
    Path(id): Path<InstanceId>,
) -> Result<Json<Message>, ApiError> {
    let report = blocking(manager, move |m| m.stop(id)).await?;
    let message = match report.outcome {
        StopOutcome::Exited => format!("Stopped '{}' (pid {})", report.name, report.pid),
        StopOutcome::Killed => format!("Force-killed '{}' (pid {})", report.name, report.pid),
    };
    Ok(Json(Message::new(message)))
}

pub async fn open_folder(
    State(manager): State<SharedManager>,
    Path(id): Path<InstanceId>,
) -> Result<Json<Message>, ApiError> {
    let folder = blocking(manager, move |m| m.locate(id)).await?;
    Ok(Json(Message::new(format!("Opened {}", folder.display()))))
}
