use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::requests::{dtos as requests_dtos, handlers as requests_handlers};
use crate::features::tasks::{dtos as tasks_dtos, handlers as tasks_handlers};
use crate::features::volunteers::{dtos as volunteers_dtos, handlers as volunteers_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Requests
        requests_handlers::list_requests,
        requests_handlers::create_request,
        requests_handlers::get_matches,
        requests_handlers::assign_volunteers,
        // Tasks
        tasks_handlers::accept_task,
        // Volunteers
        volunteers_handlers::register_volunteer,
        volunteers_handlers::list_volunteers,
        volunteers_handlers::get_volunteer,
        volunteers_handlers::get_volunteer_stats,
        volunteers_handlers::get_volunteer_tasks,
        // Contact
        contact_handlers::create_contact,
        contact_handlers::list_contacts,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Requests
            requests_dtos::CreateRequestDto,
            requests_dtos::RequestViewDto,
            requests_dtos::VolunteerCountsDto,
            requests_dtos::MatchedVolunteerDto,
            requests_dtos::CandidateVolunteerDto,
            requests_dtos::AssignVolunteersDto,
            requests_dtos::AssignmentResultDto,
            ApiResponse<Vec<requests_dtos::RequestViewDto>>,
            ApiResponse<requests_dtos::RequestViewDto>,
            ApiResponse<Vec<requests_dtos::CandidateVolunteerDto>>,
            ApiResponse<requests_dtos::AssignmentResultDto>,
            // Tasks
            tasks_dtos::AcceptedTaskDto,
            ApiResponse<tasks_dtos::AcceptedTaskDto>,
            // Volunteers
            volunteers_dtos::RegisterVolunteerDto,
            volunteers_dtos::PersonalInfoDto,
            volunteers_dtos::SkillsDto,
            volunteers_dtos::AvailabilityDto,
            volunteers_dtos::RegisteredVolunteerDto,
            volunteers_dtos::VolunteerResponseDto,
            volunteers_dtos::VolunteerStatsDto,
            volunteers_dtos::VolunteerTaskDto,
            volunteers_dtos::TaskRequestDto,
            ApiResponse<volunteers_dtos::RegisteredVolunteerDto>,
            ApiResponse<Vec<volunteers_dtos::VolunteerResponseDto>>,
            ApiResponse<volunteers_dtos::VolunteerResponseDto>,
            ApiResponse<volunteers_dtos::VolunteerStatsDto>,
            ApiResponse<Vec<volunteers_dtos::VolunteerTaskDto>>,
            // Contact
            contact_dtos::CreateContactDto,
            contact_dtos::ContactResponseDto,
            ApiResponse<contact_dtos::ContactResponseDto>,
            ApiResponse<Vec<contact_dtos::ContactResponseDto>>,
        )
    ),
    tags(
        (name = "requests", description = "Aid requests, matching, and assignment"),
        (name = "tasks", description = "Volunteer task acceptance"),
        (name = "volunteers", description = "Volunteer registration and projections"),
        (name = "contact", description = "Contact form submissions (public)"),
    ),
    info(
        title = "RESPOND API",
        version = "0.1.0",
        description = "API documentation for the RESPOND volunteer coordination backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
