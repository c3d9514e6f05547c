mod volunteer_handler;

pub use volunteer_handler::{
    __path_get_volunteer, __path_get_volunteer_stats, __path_get_volunteer_tasks,
    __path_list_volunteers, __path_register_volunteer, get_volunteer, get_volunteer_stats,
    get_volunteer_tasks, list_volunteers, register_volunteer,
};
