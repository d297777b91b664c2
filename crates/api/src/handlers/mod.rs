pub mod production;
pub mod projects;
pub mod site;
