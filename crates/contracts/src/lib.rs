//! Wire types shared between the PDF chat client and its server

pub mod domain;
pub mod usecases;
