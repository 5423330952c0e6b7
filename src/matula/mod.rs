//! Matula-Goebel codec and index personas

mod codec;
mod persona;

pub use codec::{encode, decode};
pub use persona::{persona, persona_table, Persona, PersonaKind, PersonaRow};
