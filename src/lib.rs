//! speakpad: desktop text-to-speech pad.
//!
//! This crate provides a small GUI for typing or loading text and playing
//! it back through the local speech engine, through an online synthesis
//! service, or saving the synthesized audio to a file.

pub mod cli;
pub mod dispatch;
pub mod offline;
pub mod online;
pub mod player;
pub mod prefs;
pub mod ui;
