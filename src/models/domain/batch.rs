use crate::errors::{AppError, AppResult};

/// Upper bound on questions requested from the provider in one call.
pub const MAX_QUESTIONS_PER_BATCH: u32 = 10;

/// One validated request for a batch of quiz questions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchRequest {
    pub topic: String,
    pub num_questions: u32,
    pub batch: u32,
    pub total_questions: u32,
}

impl BatchRequest {
    pub fn new(
        topic: impl Into<String>,
        num_questions: u32,
        batch: Option<u32>,
        total_questions: Option<u32>,
    ) -> AppResult<Self> {
        let request = Self {
            topic: topic.into(),
            num_questions,
            batch: batch.unwrap_or(1),
            total_questions: total_questions.unwrap_or(num_questions),
        };
        request.ensure_valid()?;
        Ok(request)
    }

    pub fn ensure_valid(&self) -> AppResult<()> {
        if self.topic.is_empty() || self.num_questions == 0 {
            return Err(AppError::InvalidRequest(
                "Topic and number of questions are required".to_string(),
            ));
        }
        if self.batch == 0 || self.total_questions == 0 {
            return Err(AppError::InvalidRequest(
                "Batch and total questions must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn questions_for_batch(&self) -> u32 {
        questions_for_batch(self.num_questions)
    }

    pub fn starting_id(&self) -> u64 {
        starting_id(self.batch)
    }

    pub fn has_more_batches(&self) -> bool {
        has_more_batches(self.batch, self.total_questions)
    }
}

pub fn questions_for_batch(num_questions: u32) -> u32 {
    num_questions.min(MAX_QUESTIONS_PER_BATCH)
}

/// First question id of a batch. Batches are numbered from 1 and always
/// reserve a full block of ids, whatever the provider returns.
pub fn starting_id(batch: u32) -> u64 {
    u64::from(batch.saturating_sub(1)) * u64::from(MAX_QUESTIONS_PER_BATCH) + 1
}

/// Derived from the requested batch and total only, not from how many
/// questions earlier batches actually produced.
pub fn has_more_batches(batch: u32, total_questions: u32) -> bool {
    u64::from(batch) * u64::from(MAX_QUESTIONS_PER_BATCH) < u64::from(total_questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_for_batch_caps_at_ten() {
        assert_eq!(questions_for_batch(3), 3);
        assert_eq!(questions_for_batch(10), 10);
        assert_eq!(questions_for_batch(25), 10);
        assert_eq!(questions_for_batch(u32::MAX), 10);
    }

    #[test]
    fn starting_id_reserves_blocks_of_ten() {
        assert_eq!(starting_id(1), 1);
        assert_eq!(starting_id(2), 11);
        assert_eq!(starting_id(7), 61);
    }

    #[test]
    fn starting_id_does_not_overflow_on_huge_batches() {
        assert_eq!(starting_id(u32::MAX), u64::from(u32::MAX - 1) * 10 + 1);
    }

    #[test]
    fn has_more_batches_follows_requested_counts() {
        assert!(has_more_batches(1, 25));
        assert!(has_more_batches(2, 25));
        assert!(!has_more_batches(3, 25));
        assert!(!has_more_batches(1, 10));
        assert!(has_more_batches(1, 11));
        assert!(!has_more_batches(u32::MAX, u32::MAX));
    }

    #[test]
    fn new_applies_defaults() {
        let request = BatchRequest::new("graphs", 7, None, None).unwrap();

        assert_eq!(request.batch, 1);
        assert_eq!(request.total_questions, 7);
        assert_eq!(request.starting_id(), 1);
        assert!(!request.has_more_batches());
    }

    #[test]
    fn second_batch_of_twenty_five() {
        let request = BatchRequest::new("graphs", 25, Some(2), Some(25)).unwrap();

        assert_eq!(request.starting_id(), 11);
        assert_eq!(request.questions_for_batch(), 10);
        assert!(request.has_more_batches());
    }

    #[test]
    fn new_rejects_missing_inputs() {
        assert!(matches!(
            BatchRequest::new("", 5, None, None),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(matches!(
            BatchRequest::new("graphs", 0, None, None),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(matches!(
            BatchRequest::new("graphs", 5, Some(0), None),
            Err(AppError::InvalidRequest(_))
        ));
    }
}
