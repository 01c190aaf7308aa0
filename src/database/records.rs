use serde_json::Value as JsonValue;

use crate::dto::store_dto::{NewApplication, NewCandidate};
use crate::models::application::{Application, INITIAL_APPLICATION_STATUS};
use crate::models::candidate::{Candidate, CandidateSummary};
use crate::utils::pagination::PageRequest;
use crate::utils::serde_helpers::value_text;

/// The three record lists shared by every store backend.
///
/// Records are kept as the JSON they were loaded or created with, so
/// hand-edited data files are served back and rewritten without loss.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub jobs: Vec<JsonValue>,
    pub candidates: Vec<JsonValue>,
    pub applications: Vec<JsonValue>,
}

impl Collections {
    pub fn offers_page(&self, page: PageRequest) -> Vec<JsonValue> {
        page.slice(&self.jobs).to_vec()
    }

    pub fn candidates_page(&self, page: PageRequest) -> Vec<JsonValue> {
        page.slice(&self.candidates).to_vec()
    }

    // Ids are count + 1, so a list loaded with gaps can hand out duplicates.
    pub fn insert_candidate(&mut self, new: NewCandidate) -> Result<Candidate, serde_json::Error> {
        let candidate = Candidate {
            id: self.candidates.len() as i64 + 1,
            first_name: new.first_name,
            last_name: new.last_name,
            emails: new.emails,
            phones: new.phones,
            cv_url: new.cv_url,
        };
        self.candidates.push(serde_json::to_value(&candidate)?);
        Ok(candidate)
    }

    pub fn insert_application(
        &mut self,
        new: NewApplication,
    ) -> Result<Application, serde_json::Error> {
        let application = Application {
            id: self.applications.len() as i64 + 1,
            candidate_id: new.candidate_id,
            job_id: new.job_id,
            status: INITIAL_APPLICATION_STATUS.to_string(),
        };
        self.applications.push(serde_json::to_value(&application)?);
        Ok(application)
    }

    /// Applications whose `job_id` renders as `job_id`, each with a
    /// `candidate` summary when its candidate resolves, then paginated.
    pub fn applications_page(&self, job_id: Option<&str>, page: PageRequest) -> Vec<JsonValue> {
        let matching: Vec<JsonValue> = self
            .applications
            .iter()
            .filter(|app| match job_id {
                Some(job_id) => value_text(&app["job_id"]).as_deref() == Some(job_id),
                None => true,
            })
            .map(|app| self.with_candidate(app))
            .collect();
        page.slice(&matching).to_vec()
    }

    fn with_candidate(&self, app: &JsonValue) -> JsonValue {
        let mut enriched = app.clone();
        let Some(candidate_id) = value_text(&app["candidate_id"]) else {
            return enriched;
        };
        let candidate = self
            .candidates
            .iter()
            .find(|c| value_text(&c["id"]).as_deref() == Some(candidate_id.as_str()));
        if let (Some(candidate), Some(fields)) = (candidate, enriched.as_object_mut()) {
            fields.insert(
                "candidate".to_string(),
                CandidateSummary::from_record(candidate).to_json(),
            );
        }
        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded() -> Collections {
        let mut collections = Collections::default();
        collections
            .insert_candidate(NewCandidate {
                first_name: json!("Jane"),
                last_name: json!("Doe"),
                emails: json!([{"value": "j@x.com", "type": "work"}]),
                ..Default::default()
            })
            .unwrap();
        let links = [
            (json!("1"), json!(5)),
            (json!(42), json!("5")),
            (json!(1), json!(7)),
        ];
        for (candidate_id, job_id) in links {
            collections
                .insert_application(NewApplication {
                    candidate_id,
                    job_id,
                })
                .unwrap();
        }
        collections
    }

    fn ids(apps: &[JsonValue]) -> Vec<i64> {
        apps.iter().filter_map(|a| a["id"].as_i64()).collect()
    }

    #[test]
    fn ids_are_count_plus_one() {
        let mut collections = seeded();
        let next = collections.insert_candidate(NewCandidate::default()).unwrap();
        assert_eq!(next.id, 2);
        assert_eq!(next.emails, json!([]));
        assert_eq!(next.phones, json!([]));

        let app = collections
            .insert_application(NewApplication::default())
            .unwrap();
        assert_eq!(app.id, 4);
        assert_eq!(app.status, "applied");
    }

    #[test]
    fn job_filter_compares_string_forms() {
        let collections = seeded();
        let apps = collections.applications_page(Some("5"), PageRequest::default());
        assert_eq!(ids(&apps), vec![1, 2]);
    }

    #[test]
    fn join_attaches_candidate_only_when_resolved() {
        let collections = seeded();
        let apps = collections.applications_page(None, PageRequest::default());
        assert_eq!(apps.len(), 3);

        assert_eq!(apps[0]["candidate"]["name"], "Jane Doe");
        assert_eq!(apps[0]["candidate"]["email"], "j@x.com");
        assert!(apps[1].get("candidate").is_none());
        assert!(apps[2].get("candidate").is_some());
        // enrichment is computed on read only
        assert!(collections
            .applications
            .iter()
            .all(|a| a.get("candidate").is_none()));
    }

    #[test]
    fn loose_records_do_not_break_listing() {
        let collections = Collections {
            jobs: vec![],
            candidates: vec![
                json!({"id": 1.0, "first_name": "Ana", "emails": null, "phones": null}),
                json!("not a record"),
            ],
            applications: vec![
                json!({"id": 1, "candidate_id": "1.0", "job_id": 3.5}),
                json!(17),
                json!({"id": 3, "job_id": null}),
            ],
        };

        let apps = collections.applications_page(Some("3.5"), PageRequest::default());
        assert_eq!(apps.len(), 1);
        assert_eq!(
            apps[0]["candidate"],
            json!({"name": "Ana", "email": null, "first_name": "Ana", "last_name": null})
        );

        let all = collections.applications_page(None, PageRequest::default());
        assert_eq!(all.len(), 3);
        assert_eq!(all[1], json!(17));
    }

    #[test]
    fn pagination_applies_after_filtering() {
        let collections = seeded();
        let page = PageRequest {
            page: 2,
            per_page: 1,
        };
        let apps = collections.applications_page(Some("5"), page);
        assert_eq!(ids(&apps), vec![2]);
    }
}
