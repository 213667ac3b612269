#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

#[macro_use]
mod macros;

pub mod action;
pub mod config;
pub mod controller;
pub mod event;
pub mod keycode;
pub mod keymap;
pub mod keymaps;
pub mod layout_macro;
pub mod modifier;
