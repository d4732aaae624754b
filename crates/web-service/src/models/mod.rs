pub mod comments;

pub mod common;

pub mod err;

pub mod projects;
