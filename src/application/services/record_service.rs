use crate::domain::entities::record::{FieldSet, Record};
use crate::domain::repositories::RecordRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct RecordService<R: Record> {
    pub(crate) repo: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> RecordService<R> {
    pub fn new(repo: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Vec<R> {
        self.repo.list().await
    }

    pub async fn get(&self, id: u64) -> Result<R, String> {
        self.repo
            .get(id)
            .await
            .ok_or_else(|| format!("Couldn't find {} with ID {}", R::KIND, id))
    }

    pub async fn create(&self, fields: R::Fields) -> Result<Vec<R>, String> {
        fields.validate()?;
        self.repo
            .add(fields)
            .await
            .map_err(|e| format!("Could not save the new {}: {}", R::KIND, e))
    }

    /// Fails when no record has `id`; the store itself would accept that as a no-op
    pub async fn edit(&self, id: u64, fields: R::Fields) -> Result<Vec<R>, String> {
        fields.validate()?;
        self.get(id).await?;
        self.repo
            .update(id, fields)
            .await
            .map_err(|e| format!("Could not save changes to {} #{}: {}", R::KIND, id, e))
    }

    pub async fn delete(&self, id: u64) -> Result<Vec<R>, String> {
        self.repo
            .remove(id)
            .await
            .map_err(|e| format!("Could not delete {} #{}: {}", R::KIND, id, e))
    }

    pub async fn reload(&self) -> Vec<R> {
        self.repo.reload().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProfileFields, ProfileRecord, TaskFields, TaskRecord};
    use crate::infrastructure::repositories::JsonRecordRepository;
    use tempfile::TempDir;

    async fn task_service() -> (TempDir, RecordService<TaskRecord>) {
        let dir = TempDir::new().unwrap();
        let repo = JsonRecordRepository::<TaskRecord>::open(dir.path().join("tasks.json")).await;
        (dir, RecordService::new(Arc::new(repo)))
    }

    #[tokio::test]
    async fn create_validates_before_saving() {
        let (dir, service) = task_service().await;

        let err = service.create(TaskFields::new("  ", "d")).await.unwrap_err();

        assert_eq!(err, "Task can not be empty");
        assert!(service.list().await.is_empty());
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[tokio::test]
    async fn edit_and_delete_round() {
        let (_dir, service) = task_service().await;
        let created = service.create(TaskFields::new("A", "d")).await.unwrap();
        let id = created[0].id;

        let edited = service.edit(id, TaskFields::new("B", "e")).await.unwrap();
        assert_eq!(edited[0].task, "B");
        assert_eq!(service.get(id).await.unwrap().description, "e");

        assert!(service.delete(id).await.unwrap().is_empty());
        assert!(service.get(id).await.is_err());
    }

    #[tokio::test]
    async fn edit_of_missing_record_is_refused() {
        let (dir, service) = task_service().await;
        let created = service.create(TaskFields::new("A", "d")).await.unwrap();
        std::fs::write(dir.path().join("tasks.json"), "[]").unwrap();
        service.reload().await;

        let err = service
            .edit(created[0].id, TaskFields::new("B", "d"))
            .await
            .unwrap_err();

        assert!(err.starts_with("Couldn't find task"));
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn profile_rules_apply() {
        let dir = TempDir::new().unwrap();
        let repo =
            JsonRecordRepository::<ProfileRecord>::open(dir.path().join("profiles.json")).await;
        let service = RecordService::new(Arc::new(repo));

        assert!(
            service
                .create(ProfileFields::new("Ada", "Lovelace", "nope", "pw"))
                .await
                .is_err()
        );
        let records = service
            .create(ProfileFields::new("Ada", "Lovelace", "ada@x.org", "pw"))
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let repo = JsonRecordRepository::<TaskRecord>::open(blocker.join("tasks.json")).await;
        let service = RecordService::new(Arc::new(repo));

        let err = service.create(TaskFields::new("A", "")).await.unwrap_err();

        assert!(err.starts_with("Could not save the new task"));
    }
}
