use super::PipelineError;
use crate::clients::IssueTracker;
use crate::models::IssueCreationOutcome;

/// Create one tracker issue per title/description pair.
///
/// Pairs are matched by position and extra elements of the longer list are
/// dropped. Calls are made one at a time in input order, so outcomes line up
/// with the inputs. A failed call is recorded and the batch moves on; nothing
/// is retried or deduplicated.
pub async fn create_batch(
    tracker: &dyn IssueTracker,
    titles: &[String],
    descriptions: &[String],
) -> Result<Vec<IssueCreationOutcome>, PipelineError> {
    if titles.is_empty() || descriptions.is_empty() {
        tracing::warn!("Issue creation requested with no records");
        return Err(PipelineError::NoRecords);
    }

    if titles.len() != descriptions.len() {
        tracing::warn!(
            titles = titles.len(),
            descriptions = descriptions.len(),
            "Title and description counts differ, extra entries are skipped"
        );
    }

    let mut outcomes = Vec::with_capacity(titles.len().min(descriptions.len()));
    for (title, description) in titles.iter().zip(descriptions) {
        let outcome = match tracker.create_issue(title, description).await {
            Ok(key) => {
                tracing::debug!(%key, title = %title, "Created issue");
                IssueCreationOutcome::created(title.as_str(), key)
            }
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Failed to create issue");
                IssueCreationOutcome::failed(
                    title.as_str(),
                    format!("Error creating story '{}': {}", title, e),
                )
            }
        };
        outcomes.push(outcome);
    }

    let created = outcomes.iter().filter(|o| o.is_created()).count();
    tracing::info!(
        created,
        failed = outcomes.len() - created,
        "Issue creation batch finished"
    );
    Ok(outcomes)
}
