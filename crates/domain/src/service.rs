use log::{debug, error};

use crate::{
    CompletionRepository, CompletionService, CreateError, DeleteError, GenerateError,
    PlanRepository, PlanRequest, PlanService, ReadError, UserProfile, WorkoutID,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Offline(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn generate_plan(&self, request: PlanRequest) -> Result<UserProfile, GenerateError> {
        if request.muscle_groups.is_empty() {
            return Err(GenerateError::InvalidRequest(
                "no muscle groups selected".to_string(),
            ));
        }
        if request.equipment.is_empty() {
            return Err(GenerateError::InvalidRequest(
                "no equipment selected".to_string(),
            ));
        }
        log_on_error!(
            self.repository.generate_plan(request),
            GenerateError,
            "generate",
            "plan"
        )
    }
}

impl<R: CompletionRepository> CompletionService for Service<R> {
    async fn get_completions(&self) -> Result<Vec<WorkoutID>, ReadError> {
        log_on_error!(
            self.repository.read_completions(),
            ReadError,
            "get",
            "completions"
        )
    }

    async fn record_completion(&self, id: WorkoutID) -> Result<WorkoutID, CreateError> {
        log_on_error!(
            self.repository.create_completion(id),
            CreateError,
            "record",
            "completion"
        )
    }

    async fn remove_completion(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_completion(id),
            DeleteError,
            "remove",
            "completion"
        )
    }
}
