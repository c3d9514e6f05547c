use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::requests::dtos::CandidateVolunteerDto;
use crate::store::EntityStore;

/// Computes the set of volunteers eligible for a request by skill overlap.
///
/// The overlap heuristic is deliberately the documented one: case-insensitive
/// substring containment in either direction ("Medical" matches "Medical
/// Doctor" and vice versa). It is known to miss morphological variants
/// ("Nurse" vs "Nursing"); callers depend on this exact behavior, so any
/// better similarity function should replace `skills_overlap` wholesale
/// rather than adjust it piecemeal.
pub struct MatchingService {
    store: Arc<dyn EntityStore>,
}

impl MatchingService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Verified volunteers whose skills overlap the request's required skills,
    /// in the store's natural iteration order. No scoring or ranking.
    pub async fn matches_for(&self, request_id: Uuid) -> Result<Vec<CandidateVolunteerDto>> {
        let request = self
            .store
            .get_request(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

        let volunteers = self.store.list_verified_volunteers().await?;

        Ok(volunteers
            .iter()
            .filter(|v| skills_overlap(&request.skills, &v.skills))
            .map(CandidateVolunteerDto::from)
            .collect())
    }
}

/// True when any required skill and any offered skill contain each other
/// case-insensitively, in either direction. Empty lists on either side can
/// never produce a pair, so they never match.
pub fn skills_overlap(required: &[String], offered: &[String]) -> bool {
    required.iter().any(|req| {
        let req = req.to_lowercase();
        offered.iter().any(|off| {
            let off = off.to_lowercase();
            off.contains(&req) || req.contains(&off)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::volunteers::models::VolunteerStatus;
    use crate::shared::test_helpers::{request_with_skills, volunteer_with_skills};
    use crate::store::MemoryStore;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overlap_exact_match() {
        assert!(skills_overlap(&skills(&["Medical"]), &skills(&["Medical"])));
    }

    #[test]
    fn test_overlap_case_insensitive() {
        assert!(skills_overlap(&skills(&["medical"]), &skills(&["MEDICAL"])));
    }

    #[test]
    fn test_overlap_substring_both_directions() {
        // request skill contained in volunteer skill
        assert!(skills_overlap(
            &skills(&["Medical"]),
            &skills(&["Medical Doctor"])
        ));
        // volunteer skill contained in request skill
        assert!(skills_overlap(
            &skills(&["Medical Doctor"]),
            &skills(&["Doctor"])
        ));
    }

    #[test]
    fn test_overlap_any_pair_suffices() {
        assert!(skills_overlap(
            &skills(&["Driving", "Setup"]),
            &skills(&["Cooking", "Setup Crew"])
        ));
    }

    #[test]
    fn test_no_overlap() {
        assert!(!skills_overlap(&skills(&["Medical"]), &skills(&["Driving"])));
        // substring containment misses morphological variants like Nurse/Nursing
        assert!(!skills_overlap(&skills(&["Nurse"]), &skills(&["Nursing"])));
    }

    #[test]
    fn test_empty_lists_never_match() {
        assert!(!skills_overlap(&[], &skills(&["Medical"])));
        assert!(!skills_overlap(&skills(&["Medical"]), &[]));
        assert!(!skills_overlap(&[], &[]));
    }

    #[tokio::test]
    async fn test_matches_for_unknown_request() {
        let store = Arc::new(MemoryStore::new());
        let service = MatchingService::new(store);

        let err = service.matches_for(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_matches_filter_by_skill_and_verification() {
        let store = Arc::new(MemoryStore::new());

        let request = request_with_skills(&["Medical", "Setup"]);
        store.insert_request(request.clone()).await.unwrap();

        // Verified with overlapping skill: included
        let a = volunteer_with_skills("Volunteer A", "a@example.com", &["Medical", "First Aid"]);
        // Verified without overlap: excluded
        let b = volunteer_with_skills("Volunteer B", "b@example.com", &["Driving"]);
        // Matching skill but still pending: excluded
        let mut c = volunteer_with_skills("Volunteer C", "c@example.com", &["Medical"]);
        c.status = VolunteerStatus::Pending;

        store.insert_volunteer(a.clone()).await.unwrap();
        store.insert_volunteer(b).await.unwrap();
        store.insert_volunteer(c).await.unwrap();

        let service = MatchingService::new(store);
        let matches = service.matches_for(request.id).await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, a.id);
        assert_eq!(matches[0].specialty, "Medical");
        assert!(matches[0].verified);
    }

    #[tokio::test]
    async fn test_empty_request_skills_yield_no_matches() {
        let store = Arc::new(MemoryStore::new());

        let request = request_with_skills(&[]);
        store.insert_request(request.clone()).await.unwrap();
        store
            .insert_volunteer(volunteer_with_skills(
                "Volunteer A",
                "a@example.com",
                &["Medical"],
            ))
            .await
            .unwrap();

        let service = MatchingService::new(store);
        let matches = service.matches_for(request.id).await.unwrap();
        assert!(matches.is_empty());
    }
}
