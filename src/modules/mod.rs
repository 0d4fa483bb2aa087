pub mod achievement;
pub mod certification;
pub mod education;
pub mod experience;
pub mod personal_info;
pub mod project;
pub mod resource;
pub mod skill;
pub mod summary;
pub mod technology;
