pub mod classes;
pub mod disciplines;
pub mod documents;
pub mod enums;
pub mod equipment;
pub mod grades;
pub mod notifications;
pub mod payments;
pub mod purchases;
pub mod staff;
pub mod statistics;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
