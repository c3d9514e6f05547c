#[cfg(test)]
use chrono::Utc;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::requests::models::{AidRequest, RequestStatus, Urgency};
#[cfg(test)]
use crate::features::volunteers::models::{NotificationPrefs, Volunteer, VolunteerStatus};

/// Verified volunteer fixture with the given skills
#[cfg(test)]
pub fn volunteer_with_skills(name: &str, email: &str, skills: &[&str]) -> Volunteer {
    let now = Utc::now();
    Volunteer {
        id: Uuid::now_v7(),
        full_name: name.to_string(),
        email: email.to_string(),
        phone: "+91 98765 43210".to_string(),
        city: Some("Mumbai".to_string()),
        state: Some("Maharashtra".to_string()),
        pincode: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        license_number: None,
        status: VolunteerStatus::Verified,
        rating: 4.8,
        tasks_completed: 12,
        hours_served: 72,
        max_distance_km: 15,
        available_days: vec!["Monday".to_string(), "Tuesday".to_string()],
        emergency_types: vec![],
        notifications: NotificationPrefs::default(),
        created_at: now,
        updated_at: now,
    }
}

/// Active aid request fixture requiring the given skills
#[cfg(test)]
pub fn request_with_skills(skills: &[&str]) -> AidRequest {
    let now = Utc::now();
    AidRequest {
        id: Uuid::now_v7(),
        title: "Medical camp setup".to_string(),
        description: None,
        location: "Sector 4, Relief Camp".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        urgency: Urgency::High,
        status: RequestStatus::Active,
        volunteers_needed: 3,
        organization_name: Some("Red Crescent".to_string()),
        created_at: now,
        updated_at: now,
    }
}
