//! Canvas scene graph and input engine for the hex tile game.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! visual side of a game: turning a server snapshot into a retained scene
//! tree, resolving every leaf's screen position through layout containers,
//! painting the tree onto a 2D surface, and translating raw pointer events
//! into a drag-and-drop gesture. The host layer is responsible only for
//! wiring DOM events to the engine, fetching snapshots, and acting on the
//! resulting [`engine::Action`]s.
//!
//! Everything except [`web`] and [`engine::Engine`] is plain Rust and is
//! tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`adapter`] | Builds the scene tree from a [`snapshot::GameSnapshot`] |
//! | [`scene`] | Node identity, the scene tree, walker and hit-testing |
//! | [`layout`] | Group, absolute and hex-grid containers |
//! | [`widget`] | Labels, hex buttons and the drag capabilities |
//! | [`render`] | Frame rendering onto a [`surface::Surface`] |
//! | [`input`] | The drag gesture state machine types |
//! | [`hex`] | Cube/axial/pixel conversions and hexagon hit math |
//! | [`geometry`] | Points and bounding boxes |
//! | [`moves`] | Move descriptions and the available-moves query |
//! | [`snapshot`] | Wire model of the server game state |
//! | [`tile`] | Tile kinds |
//! | [`assets`] | Read-only tile image registry |
//! | [`api`] | Outbound request descriptions and in-flight tracking |
//! | [`config`] | Sizes, colors and spacing |
//! | [`surface`] | The drawing-surface trait |
//! | [`web`] | `Surface` implementation over `CanvasRenderingContext2d` |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants |

pub mod adapter;
pub mod api;
pub mod assets;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hex;
pub mod input;
pub mod layout;
pub mod moves;
pub mod render;
pub mod scene;
pub mod snapshot;
pub mod surface;
pub mod tile;
pub mod web;
pub mod widget;

pub use error::{Error, Result};
