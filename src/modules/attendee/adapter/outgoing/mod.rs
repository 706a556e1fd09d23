pub mod attendee_query_postgres;
pub mod attendee_repository_postgres;
pub mod sea_orm_entity;

pub use attendee_query_postgres::AttendeeQueryPostgres;
pub use attendee_repository_postgres::AttendeeRepositoryPostgres;
