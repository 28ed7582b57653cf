//! OLED output for Tabula
//!
//! This crate provides:
//! - `FrameBuffer`, a page-organized 1 bpp buffer that embedded-graphics
//!   can draw into
//! - `Panel` trait for pushing a finished frame to hardware
//! - `Ssd1306` panel driver over async I2C
//! - `OledDisplay`, the `tabula_core::Display` implementation tying a frame
//!   buffer and a panel together
//!
//! # Architecture
//!
//! The core renderer only issues `clear`/`draw_text`/`commit` calls. Text is
//! rasterized into the frame buffer with an embedded-graphics mono font and
//! the whole frame is sent to the panel on commit.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod framebuffer;
pub mod panel;

// Re-export key types
pub use backend::OledDisplay;
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use panel::{Panel, Ssd1306, SSD1306_ADDR};
