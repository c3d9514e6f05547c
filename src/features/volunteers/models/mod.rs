mod volunteer;

pub use volunteer::{NotificationPrefs, Volunteer, VolunteerStatus};
