//! HTTP handlers for public pages, the contact form and the admin dashboard.

pub mod admin;
pub mod contact;
pub mod pages;
