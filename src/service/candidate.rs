use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{candidate::NewCandidate, CandidateRepository},
    error::{admin::AdminError, Error},
    model::{
        api::CandidateDto,
        election::Category,
    },
    util::random,
};

/// Length of generated candidate ids.
const CANDIDATE_ID_LENGTH: usize = 20;

pub struct CandidateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateService<'a> {
    /// Creates a new instance of [`CandidateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All candidates with their images, as API DTOs.
    ///
    /// Candidates whose stored category no longer parses are skipped rather
    /// than failing the whole listing.
    pub async fn list(&self) -> Result<Vec<CandidateDto>, Error> {
        let rows = CandidateRepository::new(self.db).list_with_images().await?;

        Ok(rows
            .into_iter()
            .filter_map(|(candidate, images)| {
                let category = Category::from_db(&candidate.category)?;
                Some(CandidateDto {
                    id: candidate.id,
                    name: candidate.name,
                    category,
                    images: images.into_iter().map(|i| i.url).collect(),
                    votes: candidate.votes,
                    age: candidate.age,
                    height: candidate.height,
                    major: candidate.major,
                    year: candidate.year,
                    hobbies: candidate.hobbies,
                    hometown: candidate.hometown,
                })
            })
            .collect())
    }

    /// Creates a candidate with a generated id and its ordered images, in a
    /// single transaction.
    pub async fn create(
        &self,
        name: &str,
        category: Category,
        images: &[String],
        profile: NewCandidate,
    ) -> Result<String, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdminError::InvalidCandidate("name is required.".to_string()).into());
        }
        if images.is_empty() || images.len() > 3 {
            return Err(
                AdminError::InvalidCandidate("1 to 3 images are required.".to_string()).into(),
            );
        }

        let id = random::alphanumeric_token(CANDIDATE_ID_LENGTH);
        let new = NewCandidate {
            name: name.to_string(),
            category: category.as_str().to_string(),
            ..profile
        };

        let txn = self.db.begin().await?;
        CandidateRepository::new(&txn)
            .create(&id, new, images, Utc::now().naive_utc())
            .await?;
        txn.commit().await?;

        tracing::info!(id = %id, name = %name, category = %category, "Created candidate");

        Ok(id)
    }

    /// Deletes a candidate and its images. Returns whether a row was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, Error> {
        let result = CandidateRepository::new(self.db).delete(id).await?;

        Ok(result.rows_affected > 0)
    }
}
