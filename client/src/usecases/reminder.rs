//! Reminder use case - scheduled reminder CRUD

use crate::repositories::ReminderRepository;
use crate::usecases::validate_request;
use dietly_shared::errors::NetworkError;
use dietly_shared::models::{NewReminder, Page, ReminderRule};
use dietly_shared::types::ReminderRequest;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderUseCase {
    repo: Arc<dyn ReminderRepository>,
}

impl ReminderUseCase {
    pub fn new(repo: Arc<dyn ReminderRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, page: u32, size: u32) -> Result<Page<ReminderRule>, NetworkError> {
        let dto = self.repo.list(page, size).await?;
        Ok(Page::from_dto(dto, ReminderRule::from_dto))
    }

    pub async fn create(&self, reminder: NewReminder) -> Result<ReminderRule, NetworkError> {
        let request = Self::to_request(reminder)?;
        let dto = self.repo.create(request).await?;
        Ok(ReminderRule::from_dto(dto))
    }

    /// Full replacement of an existing reminder; there is no partial
    /// update on this resource.
    pub async fn update(
        &self,
        id: i64,
        reminder: NewReminder,
    ) -> Result<ReminderRule, NetworkError> {
        let request = Self::to_request(reminder)?;
        let dto = self.repo.update(id, request).await?;
        Ok(ReminderRule::from_dto(dto))
    }

    pub async fn remove(&self, id: i64) -> Result<(), NetworkError> {
        self.repo.delete(id).await
    }

    fn to_request(reminder: NewReminder) -> Result<ReminderRequest, NetworkError> {
        let request = ReminderRequest {
            content: reminder.content,
            send_time: reminder.send_time,
            is_active: reminder.active,
            day_of_weeks: reminder.days,
        };
        validate_request(&request)?;
        Ok(request)
    }
}
