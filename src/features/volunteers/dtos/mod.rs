mod volunteer_dto;

pub use volunteer_dto::{
    AvailabilityDto, PersonalInfoDto, RegisterVolunteerDto, RegisteredVolunteerDto, SkillsDto,
    TaskRequestDto, VolunteerResponseDto, VolunteerStatsDto, VolunteerTaskDto,
};
