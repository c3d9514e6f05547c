mod request_dto;

pub use request_dto::{
    AssignVolunteersDto, AssignmentResultDto, CandidateVolunteerDto, CreateRequestDto,
    MatchedVolunteerDto, RequestViewDto, VolunteerCountsDto,
};
