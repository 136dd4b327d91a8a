//! Capability wiring.
//!
//! The core only ever asks the shell for three things: HTTP round-trips,
//! key-value storage, and a re-render. The built-in crux capabilities cover
//! all of them, so this module is just aliases and the effect derive.

pub use crux_core::render::Render;
pub use crux_http::Http;
pub use crux_kv::KeyValue;
// The Effect derive names enum variants after the field's type name, so the
// field below must be spelled `Kv` for the tests' `Effect::Kv` to exist.
use crux_kv::KeyValue as Kv;

use crate::app::App;
use crate::event::Event;

pub type AppHttp = Http<Event>;
pub type AppKv = KeyValue<Event>;
pub type AppRender = Render<Event>;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub http: Http<Event>,
    pub kv: Kv<Event>,
    pub render: Render<Event>,
}
